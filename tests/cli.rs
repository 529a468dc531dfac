use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kampusskill").expect("binary under test");
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn browse_text_output_lists_seed_listings() {
    let home = TempDir::new().expect("temp home");
    cmd(&home)
        .arg("browse")
        .assert()
        .success()
        .stdout(contains("Graphic design and club branding"));
}

#[test]
fn browse_filters_by_category() {
    let home = TempDir::new().expect("temp home");
    cmd(&home)
        .args(["browse", "--category", "tutoring"])
        .assert()
        .success()
        .stdout(contains("calculus and basic physics"))
        .stdout(contains("Graphic design").not());
}

#[test]
fn whoami_text_reports_logged_out() {
    let home = TempDir::new().expect("temp home");
    cmd(&home)
        .arg("whoami")
        .assert()
        .success()
        .stdout(contains("not logged in"));
}
