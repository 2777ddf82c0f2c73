use super::*;
use crate::config::LibrarySettings;
use crate::error::Error;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

fn t(name: &str) -> Arc<Track> {
    Arc::new(Track {
        name: name.into(),
        band: name.into(),
        path: PathBuf::from(format!("/tmp/songs/{name}.mp3")),
        artwork: None,
        duration: None,
    })
}

#[test]
fn get_is_one_based_and_rejects_out_of_range() {
    let catalog = Catalog::from_tracks(vec![t("A"), t("B"), t("C")]).unwrap();
    assert_eq!(catalog.get(1).unwrap().name, "A");
    assert_eq!(catalog.get(3).unwrap().name, "C");
    assert!(matches!(
        catalog.get(0),
        Err(Error::InvalidPosition { position: 0, len: 3 })
    ));
    assert!(matches!(
        catalog.get(4),
        Err(Error::InvalidPosition { position: 4, len: 3 })
    ));
}

#[test]
fn wraparound_happens_exactly_at_the_boundaries() {
    let catalog = Catalog::from_tracks(vec![t("A"), t("B"), t("C")]).unwrap();
    assert_eq!(catalog.next_position(1), 2);
    assert_eq!(catalog.next_position(3), 1);
    assert_eq!(catalog.previous_position(2), 1);
    assert_eq!(catalog.previous_position(1), 3);
}

#[test]
fn reorder_keeps_track_identity() {
    let a = t("A");
    let b = t("B");
    let c = t("C");
    let catalog = Catalog::from_tracks(vec![a.clone(), b.clone(), c.clone()]).unwrap();

    let reordered = catalog
        .reorder(vec![c.clone(), a.clone(), b.clone()])
        .unwrap();
    assert_eq!(reordered.position_of(&a), Some(2));
    assert_eq!(reordered.position_of(&c), Some(1));
    assert!(Arc::ptr_eq(reordered.get(3).unwrap(), &b));

    // The source catalog is untouched.
    assert_eq!(catalog.position_of(&a), Some(1));
}

#[test]
fn position_of_uses_identity_not_equality() {
    let catalog = Catalog::from_tracks(vec![t("A")]).unwrap();
    assert_eq!(catalog.position_of(&t("A")), None);
}

#[test]
fn sorted_by_name_is_alphabetical() {
    let catalog = Catalog::from_tracks(vec![t("b"), t("c"), t("a")]).unwrap();
    let names: Vec<String> = catalog
        .sorted_by_name()
        .iter()
        .map(|t| t.name.clone())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn empty_catalogs_are_rejected() {
    assert!(matches!(
        Catalog::from_tracks(Vec::new()),
        Err(Error::CatalogEmpty { .. })
    ));

    let dir = tempfile::tempdir().unwrap();
    let settings = LibrarySettings {
        songs_dir: dir.path().to_path_buf(),
        ..LibrarySettings::default()
    };
    match Catalog::load(&settings) {
        Err(Error::CatalogEmpty { dir: reported }) => assert_eq!(reported, dir.path()),
        other => panic!("expected CatalogEmpty, got {other:?}"),
    }
}

#[test]
fn load_assigns_positions_in_listing_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("beta.mp3"), b"x").unwrap();
    fs::write(dir.path().join("alpha.mp3"), b"x").unwrap();

    let settings = LibrarySettings {
        songs_dir: dir.path().to_path_buf(),
        thumbnails_dir: dir.path().join("thumbnails"),
        ..LibrarySettings::default()
    };
    let catalog = Catalog::load(&settings).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(1).unwrap().name, "alpha");
    assert_eq!(catalog.get(2).unwrap().name, "beta");
}

#[test]
fn capitalized_name_lowercases_the_rest() {
    assert_eq!(t("hELLO world").capitalized_name(), "Hello world");
    assert_eq!(t("").capitalized_name(), "");
}
