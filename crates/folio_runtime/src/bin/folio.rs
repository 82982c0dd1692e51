//! Folio CLI entry point.

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use folio_runtime::repl::write_response;
use folio_runtime::{Domain, Repl, SessionConfig, init_tracing, serialize};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    queries: Vec<String>,
    domain: Domain,
    catalog: Option<PathBuf>,
    export: Option<PathBuf>,
    prompt: Option<String>,
    log_filter: Option<String>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            if let Some(context) = e
                .downcast_ref::<folio_foundation::Error>()
                .and_then(|e| e.context.as_ref())
            {
                eprintln!("  {context}");
            }
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("{flag} requires a value"))
        };

        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--books" => config.domain = Domain::Books,
            "--movies" => config.domain = Domain::Movies,
            "--domain" => config.domain = value("--domain")?.parse()?,
            "--catalog" => config.catalog = Some(PathBuf::from(value("--catalog")?)),
            "--export" => config.export = Some(PathBuf::from(value("--export")?)),
            "-q" | "--query" => config.queries.push(value("--query")?),
            "--prompt" => config.prompt = Some(value("--prompt")?),
            "--log" => config.log_filter = Some(value("--log")?),
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("folio {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(config.log_filter.as_deref())?;

    let mut repl = Repl::new(&session_config(&config))?;

    if let Some(path) = &config.export {
        let catalog = repl.session().catalog_file();
        serialize::save_to_file(&catalog, path)?;
        eprintln!(
            "Exported {} {} to {}",
            catalog.len(),
            catalog.domain(),
            path.display()
        );
    }

    for file in &config.files {
        if !repl.eval_file(file)? {
            return Ok(());
        }
    }

    let mut stdout = io::stdout().lock();
    for query in &config.queries {
        let response = repl.eval(query)?;
        if !write_response(&mut stdout, &response)? {
            return Ok(());
        }
    }
    drop(stdout);

    if config.batch_mode || !config.queries.is_empty() {
        return Ok(());
    }

    repl.run()?;
    Ok(())
}

/// Builds the session configuration for the parsed arguments.
///
/// The banner is skipped once files or an export have already produced
/// output.
fn session_config(config: &CliConfig) -> SessionConfig {
    let mut session_config = SessionConfig::new()
        .with_domain(config.domain)
        .with_banner(config.files.is_empty() && config.export.is_none());
    if let Some(path) = &config.catalog {
        session_config = session_config.with_catalog_path(path);
    }
    if let Some(prompt) = &config.prompt {
        session_config = session_config.with_prompt(prompt.as_str());
    }
    session_config
}

fn print_help() {
    println!(
        "\x1b[1mFolio\x1b[0m - Answer simple English questions about books and movies

\x1b[1mUSAGE:\x1b[0m
    folio [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Query files to run before starting the REPL, one query per line

\x1b[1mOPTIONS:\x1b[0m
    -h, --help            Print help information
    -V, --version         Print version information
    -b, --batch           Run files and exit (no REPL)
    --books               Ask about the bundled book catalog (default)
    --movies              Ask about the bundled movie catalog
    --domain NAME         Same as --books or --movies
    --catalog PATH        Load a MessagePack catalog file instead
    --export PATH         Save the active catalog to a MessagePack file
    --prompt TEXT         Use TEXT as the REPL prompt
    -q, --query QUERY     Answer QUERY and exit (repeatable)
    --log FILTER          Log diagnostics to stderr (overrides RUST_LOG)

\x1b[1mEXAMPLES:\x1b[0m
    folio                                   Start the REPL over books
    folio --movies -q \"who directed Alien\"  Answer one question
    folio -b questions.txt                  Run a query file and exit
    folio --movies --export movies.msgpack  Save the bundled movies
    folio --log folio_parser=trace          Trace pattern matching

\x1b[1mREPL:\x1b[0m
    bye                   End the session
    Tab                   Complete a grammar word
    Ctrl+D                Exit REPL
    Ctrl+C                Cancel current input"
    );
}
