// tests/cli.rs
use std::fs;
use std::path::Path;

use activity_chart_cli::ExitCode;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::tempdir;

const PROJECTS: &str = r#"{
  "projects": {
    "api": {"name": "API", "activities": [1, 2, 3, 4, 5, 6, 7, 8, 9]},
    "ui": {"name": "Frontend", "activities": [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]},
    "ops": {},
    "qa": {"name": "QA", "activities": "many"}
  }
}"#;

fn chart_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("activity-chart").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("ACTIVITY_CHART_INPUT")
        .env_remove("ACTIVITY_CHART_OUTPUT");
    cmd
}

fn code(code: ExitCode) -> i32 {
    i32::from(code)
}

#[test]
fn prints_chart_to_stdout() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("projects.json"), PROJECTS).unwrap();

    let out = chart_cmd(dir.path())
        .args(["-i", "projects.json", "--scale", "4", "--max-width", "5"])
        .output()
        .unwrap();

    assert!(out.status.success());
    assert!(out.stderr.is_empty());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.ends_with("`)*\n"));
    insta::assert_snapshot!("stdout_chart", stdout.trim_end_matches('\n'));
}

#[test]
fn writes_output_file_and_reports_it() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("projects.json"), PROJECTS).unwrap();

    chart_cmd(dir.path())
        .args(["-i", "projects.json", "-o", "chart.md"])
        .assert()
        .success()
        .stdout("Markdown chart successfully written to 'chart.md'\n");

    let text = fs::read_to_string(dir.path().join("chart.md")).unwrap();
    assert!(text.starts_with("# Project Activity - Visualized\n"));
    assert!(text.contains("Frontend : ███ (30)"));
    assert!(text.ends_with("*(Generated from `projects.json`)*"));
}

#[test]
fn quiet_suppresses_success_message() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("projects.json"), PROJECTS).unwrap();

    chart_cmd(dir.path())
        .args(["-q", "-i", "projects.json", "-o", "chart.md"])
        .assert()
        .success()
        .stdout("");
    assert!(dir.path().join("chart.md").exists());
}

#[test]
fn input_and_output_from_environment() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data.json"), PROJECTS).unwrap();

    chart_cmd(dir.path())
        .env("ACTIVITY_CHART_INPUT", "data.json")
        .env("ACTIVITY_CHART_OUTPUT", "env.md")
        .assert()
        .success()
        .stdout(contains("'env.md'"));
    let text = fs::read_to_string(dir.path().join("env.md")).unwrap();
    assert!(text.contains("Generated from `data.json`"));
}

#[test]
fn missing_input_exits_with_file_not_found() {
    let dir = tempdir().unwrap();

    chart_cmd(dir.path())
        .args(["-i", "absent.json"])
        .assert()
        .failure()
        .code(code(ExitCode::FileNotFound))
        .stdout("")
        .stderr(contains("activity-chart: error: file not found at 'absent.json'"));
}

#[test]
fn default_input_is_parent_projects_file() {
    let dir = tempdir().unwrap();
    let work = dir.path().join("scripts");
    fs::create_dir(&work).unwrap();
    fs::write(dir.path().join("projects.json"), PROJECTS).unwrap();

    chart_cmd(&work)
        .assert()
        .success()
        .stdout(contains("*(Generated from `../projects.json`)*"));
}

#[test]
fn malformed_json_exits_without_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("projects.json"), "{\"projects\": {").unwrap();

    chart_cmd(dir.path())
        .args(["-i", "projects.json", "-o", "chart.md"])
        .assert()
        .failure()
        .code(code(ExitCode::InvalidJson))
        .stdout("")
        .stderr(contains("could not decode JSON from 'projects.json'"));
    assert!(!dir.path().join("chart.md").exists());
}

#[test]
fn empty_projects_exit_with_no_projects() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("projects.json"), r#"{"projects": {}}"#).unwrap();

    chart_cmd(dir.path())
        .args(["-i", "projects.json"])
        .assert()
        .failure()
        .code(code(ExitCode::NoProjects))
        .stdout("")
        .stderr(contains("activity-chart: error: no projects found in the JSON data"));
}

#[test]
fn unwritable_output_is_a_file_io_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("projects.json"), PROJECTS).unwrap();

    chart_cmd(dir.path())
        .args(["-i", "projects.json", "-o", "missing/chart.md"])
        .assert()
        .failure()
        .code(code(ExitCode::FileIo))
        .stdout("")
        .stderr(contains("error writing to file 'missing/chart.md'"));
}

#[test]
fn verbose_logs_stay_on_stderr() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("projects.json"), PROJECTS).unwrap();

    chart_cmd(dir.path())
        .args(["-vv", "--no-color", "-i", "projects.json"])
        .assert()
        .success()
        .stdout(contains("```text").and(contains("activity-chart:").not()))
        .stderr(contains("activity-chart: loaded projects"));
}

#[test]
fn json_log_format_emits_objects() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("projects.json"), PROJECTS).unwrap();

    let out = chart_cmd(dir.path())
        .args(["-v", "--log-format", "json", "-i", "projects.json", "-o", "c.md"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    let line = stderr.lines().find(|l| l.contains("wrote chart")).unwrap();
    assert!(line.starts_with('{'));
    assert!(line.contains("\"level\":\"INFO\""));
}

#[test]
fn zero_scale_is_a_usage_error() {
    let dir = tempdir().unwrap();

    chart_cmd(dir.path())
        .args(["--scale", "0"])
        .assert()
        .failure()
        .code(code(ExitCode::SyntaxOrUsage))
        .stderr(contains("activity-chart: invalid value '0'"));
}

#[test]
fn help_exits_ok() {
    let dir = tempdir().unwrap();

    chart_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--max-width").and(contains("--fraction-glyphs")));
}

#[test]
fn version_prints_banner() {
    let dir = tempdir().unwrap();

    chart_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(format!("activity-chart {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn bundled_version_flag_prints_banner_not_chart() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("projects.json"), PROJECTS).unwrap();

    chart_cmd(dir.path())
        .args(["-vV", "-i", "projects.json"])
        .assert()
        .success()
        .stdout(
            contains(format!("activity-chart {}", env!("CARGO_PKG_VERSION")))
                .and(contains("Project Activity").not()),
        );
}

#[test]
fn bundled_quiet_version_prints_nothing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("projects.json"), PROJECTS).unwrap();

    chart_cmd(dir.path())
        .args(["-qV", "-i", "projects.json"])
        .assert()
        .success()
        .stdout("");
}
