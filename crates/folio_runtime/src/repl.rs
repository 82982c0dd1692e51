//! The main REPL implementation.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use folio_foundation::{Error, ErrorKind, Result};
use folio_parser::Response;

use crate::config::SessionConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (dispatcher and catalog).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL with the default rustyline editor, configured by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize or the session
    /// cannot be built (for example, an unreadable catalog file).
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        let session = Session::from_config(config)?;
        let repl = Self::with_editor(editor, session).with_prompt(config.prompt.clone());
        Ok(if config.show_banner {
            repl
        } else {
            repl.without_banner()
        })
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor and session.
    pub fn with_editor(editor: E, session: Session) -> Self {
        Self {
            editor,
            session,
            show_banner: true,
            prompt: SessionConfig::default().prompt,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the REPL loop until the quit sentinel or end of input.
    ///
    /// # Errors
    ///
    /// Never fails; query and output errors are printed to stderr and the
    /// loop continues.
    pub fn run(&mut self) -> Result<()> {
        self.editor.set_keywords(self.session.vocabulary());

        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    self.print_error(&e);
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&input);

        let response = self.eval(&input)?;
        let mut stdout = io::stdout().lock();
        write_response(&mut stdout, &response)
    }

    /// Answers one query.
    ///
    /// # Errors
    ///
    /// Returns an error if the matched handler fails.
    pub fn eval(&mut self, input: &str) -> Result<Response> {
        self.session.ask(input)
    }

    /// Runs every non-empty line of `source` as a query, writing answers to
    /// `out`.
    ///
    /// Stops at the quit sentinel and returns `Ok(false)`; returns `Ok(true)`
    /// when the input runs out first.
    ///
    /// # Errors
    ///
    /// Returns the first handler error, tagged with `origin` and the line
    /// number, or an error if writing to `out` fails.
    pub fn eval_source<W: Write>(
        &mut self,
        source: &str,
        origin: &str,
        out: &mut W,
    ) -> Result<bool> {
        for (index, line) in source.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let response = self.eval(line).map_err(|mut e| {
                let context = e.context.take().unwrap_or_default();
                e.with_context(context.with_source(origin, index + 1))
            })?;

            if !write_response(out, &response)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Runs a query file in batch mode, printing answers to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a query fails.
    pub fn eval_file(&mut self, path: &Path) -> Result<bool> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::IoError(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        })?;

        tracing::debug!(path = %path.display(), "running query file");
        let mut stdout = io::stdout().lock();
        self.eval_source(&source, &path.display().to_string(), &mut stdout)
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("\x1b[1;36mFolio\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!(
            "Ask about the {} catalog ({} records). Type \"bye\" or Ctrl+D to exit.\n",
            self.session.domain(),
            self.session.catalog_len()
        );
        let _ = io::stdout().flush();
    }
}

/// Writes each answer on its own line.
///
/// Returns `Ok(false)` for [`Response::Quit`], which writes nothing.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_response<W: Write>(out: &mut W, response: &Response) -> Result<bool> {
    let Response::Answers(answers) = response else {
        return Ok(false);
    };
    for answer in answers {
        writeln!(out, "{answer}").map_err(|e| {
            Error::new(ErrorKind::IoError(format!("failed to write answer: {e}")))
        })?;
    }
    Ok(true)
}
