//! Session tests.

use folio_foundation::ErrorKind;
use folio_runtime::serialize::{self, CatalogFile};
use folio_runtime::{Domain, Session, SessionConfig};
use folio_storage::{Book, Catalog};

#[test]
fn config_domain_selects_grammar() {
    let config = SessionConfig::new().with_domain(Domain::Movies);
    let mut session = Session::from_config(&config).unwrap();
    assert_eq!(session.domain(), Domain::Movies);
    assert_eq!(session.ask("who directed Alien").unwrap().lines(), ["Ridley Scott"]);
}

#[test]
fn catalog_file_overrides_config_domain() {
    let path = std::env::temp_dir().join("folio_session_override.msgpack");
    let catalog = CatalogFile::Books(Catalog::new(vec![Book::new(
        "Kindred",
        "Octavia E. Butler",
        "science fiction",
        1979,
    )]));
    serialize::save_to_file(&catalog, &path).unwrap();

    let config = SessionConfig::new()
        .with_domain(Domain::Movies)
        .with_catalog_path(&path);
    let mut session = Session::from_config(&config).unwrap();

    assert_eq!(session.domain(), Domain::Books);
    assert_eq!(session.catalog_len(), 1);
    assert_eq!(session.ask("who wrote Kindred").unwrap().lines(), ["Octavia E. Butler"]);
    assert_eq!(session.ask("who wrote Dune").unwrap().lines(), ["No answers"]);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_catalog_file_is_an_io_error() {
    let config = SessionConfig::new().with_catalog_path("/nonexistent/folio/catalog.msgpack");
    let err = Session::from_config(&config).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
}

#[test]
fn handler_errors_do_not_end_the_session() {
    let mut session = Session::new(Domain::Books).unwrap();
    assert!(session.ask("what books were written after later").is_err());
    assert_eq!(
        session.ask("what books were written after 2000").unwrap().lines(),
        ["The Name of the Wind"]
    );
}

#[test]
fn exported_catalog_matches_session() {
    let session = Session::new(Domain::Movies).unwrap();
    let exported = session.catalog_file();
    assert_eq!(exported.domain(), Domain::Movies);
    assert_eq!(exported.len(), session.catalog_len());
}
