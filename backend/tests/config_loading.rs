mod support;

use std::io::Write;
use std::path::PathBuf;

use league_dashboard::config::{DashboardConfig, SourceKind};
use league_dashboard::parsing::load_dataset;
use tempfile::{NamedTempFile, TempDir};

use support::with_scoped_env;

#[test]
fn test_load_from_explicit_path_with_overrides() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "[server]\nport = 3000\n\n[dashboard]\ntop_scorer = \"Jokic – 29.6\"\n"
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let config = with_scoped_env(
        &[
            ("DASHBOARD_CONFIG", Some(path.as_str())),
            ("PORT", Some("9100")),
            ("HOST", None),
            ("DASHBOARD_DATA_DIR", None),
        ],
        DashboardConfig::load,
    )
    .unwrap();

    assert_eq!(config.server.port, 9100);
    assert_eq!(config.dashboard.top_scorer, "Jokic – 29.6");
    assert_eq!(config.data.source, SourceKind::Embedded);
}

#[test]
fn test_missing_explicit_path_is_an_error() {
    let result = with_scoped_env(
        &[("DASHBOARD_CONFIG", Some("/nonexistent/dashboard.toml"))],
        DashboardConfig::load,
    );
    assert!(result.is_err());
}

#[test]
fn test_data_dir_override_feeds_the_loader() {
    let dir = TempDir::new().unwrap();
    let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
    for name in ["teams.csv", "players.csv", "monthly.csv"] {
        std::fs::copy(data.join(name), dir.path().join(name)).unwrap();
    }
    let dir_str = dir.path().to_str().unwrap().to_string();

    let config = with_scoped_env(
        &[
            ("DASHBOARD_CONFIG", None),
            ("DASHBOARD_DATA_DIR", Some(dir_str.as_str())),
            ("PORT", None),
            ("HOST", None),
        ],
        DashboardConfig::load,
    )
    .unwrap();

    assert_eq!(config.data.source, SourceKind::Directory);
    let dataset = load_dataset(&config.data).unwrap();
    assert_eq!(dataset.teams.len(), 18);
    assert_eq!(dataset.monthly.len(), 21);
}

#[test]
fn test_malformed_file_in_search_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let malformed = dir.path().join("dashboard.toml");
    std::fs::write(&malformed, "[server]\nport = \"not-a-port\"\n").unwrap();

    let result = DashboardConfig::from_search_paths(&[
        dir.path().join("missing.toml"),
        malformed,
    ]);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_search_paths_with_no_file_yield_none() {
    let dir = TempDir::new().unwrap();
    let found = DashboardConfig::from_search_paths(&[
        dir.path().join("dashboard.toml"),
        dir.path().join("backend").join("dashboard.toml"),
    ])
    .unwrap();
    assert!(found.is_none());
}

#[test]
fn test_first_existing_search_path_wins() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.toml");
    let second = dir.path().join("second.toml");
    std::fs::write(&first, "[server]\nport = 4100\n").unwrap();
    std::fs::write(&second, "[server]\nport = \"broken\"\n").unwrap();

    let config = DashboardConfig::from_search_paths(&[first, second])
        .unwrap()
        .unwrap();
    assert_eq!(config.server.port, 4100);
}
