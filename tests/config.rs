use std::fs;
use std::path::PathBuf;

use matcalc::config::{Settings, ShellSettings};

#[test]
fn explicit_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("config.toml");
    fs::write(&p, "[shell]\ncolor = false\n\n[log]\nlevel = \"debug\"\n").unwrap();

    let s = Settings::load(&Some(p)).unwrap();
    assert_eq!(s.shell, ShellSettings { color: false, hints: true });
    assert_eq!(s.log.level, "debug");
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load(&Some(dir.path().join("nope.toml"))).unwrap_err();
    assert!(format!("{:#}", err).contains("reading"), "{err:#}");
}

#[test]
fn explicit_broken_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let p: PathBuf = dir.path().join("bad.toml");
    fs::write(&p, "[shell\ncolor = ").unwrap();
    let err = Settings::load(&Some(p)).unwrap_err();
    assert!(format!("{:#}", err).contains("parsing"), "{err:#}");
}
