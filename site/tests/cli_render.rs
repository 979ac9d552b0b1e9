//! CLI tests for the `site` binary.

use std::fs;
use std::process::Command;

fn site_cmd(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_site"));
    cmd.current_dir(dir);
    cmd
}

#[test]
fn render_writes_index_html_with_bundled_content() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = site_cmd(temp.path())
        .args(["render", "--out", "public"])
        .output()
        .expect("site render");

    assert!(output.status.success());
    let html = fs::read_to_string(temp.path().join("public/index.html")).expect("read output");
    assert!(html.contains("森の日々"));
    assert!(html.contains("https://beauty.hotpepper.jp/slnH000771707/"));
    assert!(html.contains("id=\"diagnosis-data\""));
}

#[test]
fn render_defaults_to_configured_output_dir() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = site_cmd(temp.path()).arg("render").output().expect("site render");

    assert!(output.status.success());
    assert!(temp.path().join("dist/index.html").exists());
}

#[test]
fn check_reports_without_writing() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = site_cmd(temp.path()).arg("check").output().expect("site check");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("render ok"));
    assert!(!temp.path().join("dist").exists());
}

#[test]
fn corrupt_page_content_fails_the_render() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(temp.path().join("content")).expect("mkdir");
    fs::write(temp.path().join("content/page.json"), "{ not json").expect("write");

    let output = site_cmd(temp.path()).arg("check").output().expect("site check");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("page content"));
}
