//! Catalog file tests.

use folio_foundation::ErrorKind;
use folio_runtime::Domain;
use folio_runtime::serialize::{CatalogFile, from_bytes, load_from_file, save_to_file, to_bytes};
use folio_storage::{Catalog, Movie, Record, data};

#[test]
fn movie_catalog_keeps_order_and_cast() {
    let catalog = CatalogFile::Movies(data::movies());
    let restored = from_bytes(&to_bytes(&catalog).unwrap()).unwrap();

    let CatalogFile::Movies(movies) = restored else {
        panic!("expected a movie catalog");
    };
    let first = movies.get(0).unwrap();
    assert_eq!(first.title(), "The Godfather");
    assert_eq!(first.names()[0], "Marlon Brando");
}

#[test]
fn empty_catalog_survives() {
    let catalog = CatalogFile::Movies(Catalog::<Movie>::empty());
    let restored = from_bytes(&to_bytes(&catalog).unwrap()).unwrap();
    assert!(restored.is_empty());
    assert_eq!(restored.domain(), Domain::Movies);
}

#[test]
fn truncated_bytes_fail() {
    let bytes = to_bytes(&CatalogFile::Books(data::books())).unwrap();
    let err = from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SerializationError(_)));
}

#[test]
fn file_roundtrip_preserves_equality() {
    let path = std::env::temp_dir().join("folio_serialize_roundtrip.msgpack");
    let catalog = CatalogFile::Books(data::books());

    save_to_file(&catalog, &path).unwrap();
    assert_eq!(load_from_file(&path).unwrap(), catalog);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn save_into_missing_directory_fails() {
    let err = save_to_file(
        &CatalogFile::Books(data::books()),
        "/nonexistent/folio/out.msgpack",
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
}
