use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Isolated working directory for running the tally binary.
pub struct TestHarness {
    pub dir: TempDir,
    pub tally_binary: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
            tally_binary: PathBuf::from(env!("CARGO_BIN_EXE_tally")),
        }
    }

    /// Harness with `.tally/config.md` holding the given frontmatter.
    pub fn with_config(frontmatter: &str) -> Self {
        let harness = Self::new();
        let config_dir = harness.path().join(".tally");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        fs::write(
            config_dir.join("config.md"),
            format!("---\n{}---\n\n# Tally config\n", frontmatter),
        )
        .expect("Failed to write config");
        harness
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.path().join(name)).expect("Failed to read test file")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.tally_binary)
            .args(args)
            .current_dir(self.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run tally")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
