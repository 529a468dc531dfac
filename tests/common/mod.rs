use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// One isolated `$HOME` per test: state files, session and audit log all land
/// inside the temp dir, so tests never see each other or the real user.
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        Self { _tmp: tmp, home }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("kampusskill").expect("binary under test");
        cmd.env("HOME", &self.home).current_dir(&self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_err(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json error output")
    }

    pub fn login(&self, identifier: &str, password: &str) {
        let v = self.run_json(&["login", identifier, "--password", password]);
        assert_eq!(v["ok"], true);
    }

    pub fn logout(&self) {
        self.run_json(&["logout"]);
    }

    /// Posts a minimal valid listing as the logged-in user; returns its id.
    pub fn post_listing(&self, title: &str) -> String {
        let v = self.run_json(&[
            "post",
            "--title",
            title,
            "--category",
            "print",
            "--description",
            "test listing",
            "--price",
            "5000",
            "--contact",
            "WA: 0800",
            "--photo",
            "https://img.example/photo.jpg",
        ]);
        assert_eq!(v["ok"], true);
        v["data"]["id"].as_str().expect("listing id").to_string()
    }

    pub fn services_path(&self) -> PathBuf {
        self.home.join(".config/kampusskill/services.json")
    }

    pub fn read_services(&self) -> Value {
        let raw = fs::read_to_string(self.services_path()).expect("services.json readable");
        serde_json::from_str(&raw).expect("services.json is valid json")
    }

    pub fn write_services(&self, services: &Value) {
        fs::write(
            self.services_path(),
            serde_json::to_string_pretty(services).expect("serialize services"),
        )
        .expect("write services.json");
    }
}
