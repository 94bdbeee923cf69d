use super::*;
use std::path::Path;

fn args(list: &[&str]) -> Result<Args, String> {
    parse_args(list.iter().map(|s| s.to_string()))
}

#[test]
fn no_args_uses_defaults() {
    let parsed = args(&[]).unwrap();
    assert!(parsed.data.is_none());
    assert!(!parsed.help);
}

#[test]
fn data_accepts_both_forms() {
    assert_eq!(
        args(&["--data", "a.json"]).unwrap().data.as_deref(),
        Some(Path::new("a.json"))
    );
    assert_eq!(
        args(&["--data=b.json"]).unwrap().data.as_deref(),
        Some(Path::new("b.json"))
    );
}

#[test]
fn bad_args_are_rejected() {
    assert!(args(&["--data"]).is_err());
    assert!(args(&["--verbose"]).is_err());
    assert!(args(&["-h"]).unwrap().help);
}

#[test]
fn cli_path_wins_over_settings() {
    let dir = tempfile::tempdir().unwrap();
    let cli = dir.path().join("cli.json");
    std::fs::write(&cli, r#"[{"address":"1 Elm St","location":"North"}]"#).unwrap();

    let settings = Settings {
        dataset: Some(dir.path().join("missing.json")),
        ..Settings::default()
    };
    let dataset = load_dataset(Some(cli), &settings).unwrap();
    assert_eq!(dataset.len(), 1);

    assert!(matches!(
        load_dataset(None, &settings),
        Err(DatasetError::Io { .. })
    ));
}

#[test]
fn bundled_dataset_is_the_fallback() {
    let dataset = load_dataset(None, &Settings::default()).unwrap();
    assert_eq!(dataset.len(), Dataset::bundled().unwrap().len());
}
