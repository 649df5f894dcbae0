//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

use std::io::Cursor;
use std::path::PathBuf;

use tempfile::TempDir;

/// A small but realistic configuration-as-code document
#[allow(dead_code)]
pub const JENKINS_YAML: &str = "\
jenkins:
  systemMessage: \"Configured by casc-source ✓\"
  numExecutors: 2
  securityRealm:
    local:
      allowsSignup: false
";

/// Write `content` to `name` inside a fresh temporary directory
///
/// Returns the TempDir (keep it alive) and the file path.
#[allow(dead_code)]
pub fn write_temp_yaml(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp yaml");
    (dir, path)
}

/// In-memory byte stream over `content`
#[allow(dead_code)]
pub fn byte_stream(content: &str) -> Cursor<Vec<u8>> {
    Cursor::new(content.as_bytes().to_vec())
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
