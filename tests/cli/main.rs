use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use anyhow::{Context, Result};
use tempfile::TempDir;

mod generate;
mod me;
mod templates;

const BIN: &str = env!("CARGO_BIN_EXE_slidespeak-mcp");

/// Test fixture for CLI integration tests
///
/// Runs the binary from a scratch directory with a clean environment.
pub struct CliTest {
    _temp_dir: TempDir,
    work_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let work_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            work_dir,
        })
    }

    /// Build a command for the binary with a clean environment.
    ///
    /// No API key is set; tests that need one go through [`Self::api_command`].
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(BIN);
        cmd.current_dir(&self.work_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Build a command wired to a stub API with a test key.
    pub fn api_command(&self, base_url: &str) -> Command {
        let mut cmd = self.command();
        cmd.env("SLIDESPEAK_API_KEY", "sk-test");
        cmd.args(["--base-url", base_url]);
        cmd
    }

    /// Write a file into the scratch directory, returning its absolute path.
    pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.work_dir.join(name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(path)
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
