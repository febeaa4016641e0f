//! Configuration resolution tests
//!
//! Note: tests that manipulate RUMO_SCORING_URL use serial_test to avoid
//! ENV variable races between parallel tests.

use rumo_cli::config::{self, DEFAULT_SCORING_URL, ENV_SCORING_URL};
use serial_test::serial;
use std::env;
use std::io::Write;

fn toml_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
#[serial]
fn cli_argument_has_highest_priority() {
    env::set_var(ENV_SCORING_URL, "http://env-host:9000");
    let file = toml_file("scoring_url = \"http://toml-host:9000\"");

    let url = config::resolve_scoring_url(Some("http://cli-host:9000/"), Some(file.path()));
    assert_eq!(url, "http://cli-host:9000");

    env::remove_var(ENV_SCORING_URL);
}

#[test]
#[serial]
fn env_var_wins_over_toml() {
    env::set_var(ENV_SCORING_URL, "http://env-host:9000");
    let file = toml_file("scoring_url = \"http://toml-host:9000\"");

    let url = config::resolve_scoring_url(None, Some(file.path()));
    assert_eq!(url, "http://env-host:9000");

    env::remove_var(ENV_SCORING_URL);
}

#[test]
#[serial]
fn toml_used_when_no_overrides() {
    env::remove_var(ENV_SCORING_URL);
    let file = toml_file("scoring_url = \"http://toml-host:9000/\"");

    let url = config::resolve_scoring_url(None, Some(file.path()));
    assert_eq!(url, "http://toml-host:9000");
}

#[test]
#[serial]
fn compiled_default_when_nothing_configured() {
    env::remove_var(ENV_SCORING_URL);
    let url = config::resolve_scoring_url(None, None);
    assert_eq!(url, DEFAULT_SCORING_URL);
}

#[test]
#[serial]
fn unparsable_toml_degrades_to_default() {
    env::remove_var(ENV_SCORING_URL);
    let file = toml_file("scoring_url = [this is not toml");

    let url = config::resolve_scoring_url(None, Some(file.path()));
    assert_eq!(url, DEFAULT_SCORING_URL);
}

#[test]
#[serial]
fn missing_toml_file_degrades_to_default() {
    env::remove_var(ENV_SCORING_URL);
    let missing = std::path::Path::new("/nonexistent/rumo/config.toml");

    let url = config::resolve_scoring_url(None, Some(missing));
    assert_eq!(url, DEFAULT_SCORING_URL);
}

#[test]
#[serial]
fn blank_env_var_is_ignored() {
    env::set_var(ENV_SCORING_URL, "   ");
    let url = config::resolve_scoring_url(None, None);
    assert_eq!(url, DEFAULT_SCORING_URL);
    env::remove_var(ENV_SCORING_URL);
}
