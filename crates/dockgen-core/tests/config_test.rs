use dockgen_core::{DockgenConfig, Error};
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_no_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = DockgenConfig::load(tmp.path()).unwrap();

    assert_eq!(config.image.build, "golang:1.10.3");
    assert_eq!(config.image.runtime, "alpine:3.8");
}

#[test]
fn load_parses_full_config() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[image]
build = "golang:1.22-alpine"
runtime = "alpine:3.19"
"#;
    std::fs::write(tmp.path().join("dockgen.toml"), toml).unwrap();

    let config = DockgenConfig::load(tmp.path()).unwrap();

    assert_eq!(config.image.build, "golang:1.22-alpine");
    assert_eq!(config.image.runtime, "alpine:3.19");
}

#[test]
fn load_partial_config_fills_defaults() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("dockgen.toml"),
        "[image]\nruntime = \"alpine:3.20\"\n",
    )
    .unwrap();

    let config = DockgenConfig::load(tmp.path()).unwrap();

    assert_eq!(config.image.build, "golang:1.10.3");
    assert_eq!(config.image.runtime, "alpine:3.20");
}

#[test]
fn load_empty_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("dockgen.toml"), "").unwrap();

    let config = DockgenConfig::load(tmp.path()).unwrap();

    assert_eq!(config.image, Default::default());
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("dockgen.toml"), "[image\nbuild = ").unwrap();

    let err = DockgenConfig::load(tmp.path()).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }));
    assert!(err.to_string().contains("dockgen.toml"));
}

#[test]
fn load_wrong_type_returns_parse_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("dockgen.toml"), "[image]\nbuild = 3\n").unwrap();

    let result = DockgenConfig::load(tmp.path());
    assert!(matches!(result, Err(Error::ConfigParse { .. })));
}

#[cfg(unix)]
#[test]
fn load_unresolvable_config_path_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("dockgen.toml");
    // Self-referencing symlink: metadata lookups fail with ELOOP
    std::os::unix::fs::symlink(&config_path, &config_path).unwrap();

    let err = DockgenConfig::load(tmp.path()).unwrap_err();
    assert!(matches!(err, Error::ConfigLoad { .. }));
}
