use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CIRCLE_SCRIPT: &str = r#"
width = 80
height = 60

[[steps]]
action = "select-color"
color = "blue"

[[steps]]
action = "select-shape"
shape = "circle"

[[steps]]
action = "stroke"
points = [[40.0, 30.0], [50.0, 30.0], [60.0, 30.0]]
"#;

fn inkpad_cmd() -> Command {
    Command::cargo_bin("inkpad").expect("binary exists")
}

fn write_script(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("drawing.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn inkpad_help_prints_usage() {
    inkpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Freehand drawing surface"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn version_includes_build_hash() {
    inkpad_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"inkpad \d+\.\d+\.\d+ \([0-9a-z]+\)").unwrap());
}

#[test]
fn script_argument_is_required() {
    inkpad_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn replay_writes_png_to_output() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, CIRCLE_SCRIPT);
    let output = temp.path().join("out").join("circle.png");

    inkpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("circle.png"));

    let png = std::fs::read(&output).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn replay_saves_into_configured_directory() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, CIRCLE_SCRIPT);
    let save_dir = temp.path().join("exports");
    let config = temp.path().join("config.toml");
    std::fs::write(
        &config,
        format!(
            "[export]\nsave_directory = {:?}\nfilename_template = \"fixed\"\n",
            save_dir.display().to_string()
        ),
    )
    .unwrap();

    inkpad_cmd()
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("fixed.png"));

    assert!(save_dir.join("fixed.png").is_file());
}

#[test]
fn invalid_script_reports_path() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "width = \"wide\"\n");

    inkpad_cmd()
        .arg(&script)
        .arg("-o")
        .arg(temp.path().join("never.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse script"));
}

#[test]
fn empty_viewport_fails_export() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "width = 0\nheight = 10\n");

    inkpad_cmd()
        .arg(&script)
        .arg("-o")
        .arg(temp.path().join("never.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to export the drawing"));
}

#[test]
fn schema_dump_lists_config_sections() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"drawing\""))
        .stdout(predicate::str::contains("\"export\""));
}
