//! Common test utilities for Promptdeck CLI tests.
//!
//! `TestEnv` gives each test an isolated project directory and config home,
//! and runs the binary with colors off.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// A small catalog in the shape of a real one: numbered large categories,
/// a large category without children, and a resource category.
pub const CATALOG_TOML: &str = r#"
[[items]]
id = "intro-1"
large_category = "1. Getting Started"
medium_category = "Basics"
small_category = "First prompt"
content = "Ask for a summary."
prompt = "Summarize the following text."

[[items]]
id = "intro-2"
large_category = "1. Getting Started"
medium_category = "Basics"
small_category = "Follow-up"
content = "Refine the answer."
prompt = "Make it shorter."

[[items]]
id = "clean-1"
large_category = "2. Data Cleaning"
medium_category = "Tables"
prompt = "Normalize these column names."

[[items]]
id = "faq"
large_category = "3. FAQ"
content = "Common questions."

[[items]]
id = "res-1"
large_category = "0. Resources [DL]"
content = "Workbooks for the course."

[[items.links]]
label = "Workbook"
url = "https://example.com/workbook.xlsx"
"#;

/// Same shape, with every defect `check` reports.
pub const BROKEN_CATALOG_TOML: &str = r#"
[[items]]
id = "a"
large_category = "X"

[[items]]
id = "b"
large_category = "X"
small_category = "orphan"

[[items]]
id = "a"
large_category = "Y"
"#;

#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            config_home: tempfile::tempdir().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_promptdeck")),
        }
    }

    /// Environment with `catalog.toml` written to the project root
    pub fn with_catalog(content: &str) -> Self {
        let env = Self::new();
        env.write("catalog.toml", content);
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from(self.project_root.path(), args, env_vars)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("PROMPTDECK_CATALOG")
            .env_remove("PROMPTDECK_COLOR")
            .env("PROMPTDECK_UNICODE", "false")
            .env_remove("PROMPTDECK_RESOURCE_MARKER")
            .env_remove("PROMPTDECK_LOG")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute promptdeck");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
