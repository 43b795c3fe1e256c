use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    pub fn write_config(&self, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(".taskman.toml");
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn read_tasks_json(&self) -> serde_json::Value {
        let contents = fs::read_to_string(self.tasks_file()).expect("read tasks.json");
        serde_json::from_str(&contents).expect("parse tasks.json")
    }
}

pub fn taskman_cmd(dir: &TestDir) -> Command {
    let mut cmd = Command::cargo_bin("taskman").expect("taskman binary");
    cmd.current_dir(dir.path());
    cmd.env_remove("TASKMAN_FILE");
    cmd
}
