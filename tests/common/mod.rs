use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Runs the binary inside an isolated temp working directory so export
/// files never leak into the real filesystem.
pub struct TestEnv {
    _tmp: TempDir,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let work = tmp.path().join("work");
        fs::create_dir_all(&work).expect("create isolated work dir");
        Self { _tmp: tmp, work }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("widgetpack").expect("binary built");
        cmd.current_dir(&self.work);
        cmd
    }

    /// Runs `export` with the given args and returns captured stdout.
    pub fn run_export(&self, args: &[&str]) -> String {
        let out = self
            .cmd()
            .arg("export")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 stdout")
    }

    pub fn read_export_raw(&self, file: &str) -> String {
        fs::read_to_string(self.work.join(file)).expect("read export file")
    }

    pub fn read_export_json(&self, file: &str) -> Value {
        serde_json::from_str(&self.read_export_raw(file)).expect("valid json export")
    }

    /// Drops a payload fixture into the working directory and returns its
    /// path relative to it.
    pub fn write_payload(&self, file: &str, content: &str) -> String {
        fs::write(self.work.join(file), content).expect("write payload fixture");
        file.to_string()
    }
}
