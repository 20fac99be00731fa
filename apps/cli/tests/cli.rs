use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn sfeed() -> Command {
    Command::cargo_bin("sfeed").expect("sfeed binary should be built")
}

#[test]
fn check_normalizes_valid_document() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("feed.json");
    fs::write(
        &input,
        r#"[
            {"PackageWeight": 2.5, "ConditionType": "New"},
            {"Brand": "Acme", "PackageHeight": 10.5}
        ]"#,
    )?;

    sfeed().arg("check").arg(&input).assert().success().stdout(predicate::str::diff(
        "[{\"ConditionType\":\"New\",\"PackageWeight\":2.5},{\"PackageHeight\":10.5,\"Brand\":\"Acme\"}]\n",
    ));
    Ok(())
}

#[test]
fn check_reports_offending_entry_and_field() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("feed.json");
    fs::write(&input, r#"[{"ConditionType": "Used"}, {"PackageWeight": 0}]"#)?;

    sfeed()
        .arg("check")
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Entry 1 rejected"))
        .stderr(predicate::str::contains("Invalid domain value for PackageWeight"));
    Ok(())
}

#[test]
fn config_file_replaces_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("sfeed.toml");
    fs::write(&config, "[catalog]\ncondition_types = [\"Nuevo\", \"Usado\"]\n")?;
    let input = dir.path().join("entry.json");
    fs::write(&input, r#"{"ConditionType": "New"}"#)?;

    sfeed()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid domain value for ConditionType"));

    sfeed()
        .arg("--config")
        .arg(&config)
        .arg("conditions")
        .assert()
        .success()
        .stdout("Nuevo\nUsado\n");
    Ok(())
}

#[test]
fn configuration_source_is_logged_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("sfeed.toml");
    fs::write(&config, "[logging]\nlevel = \"info\"\n")?;

    sfeed()
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config)
        .arg("fields")
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration loaded"))
        .stderr(predicate::str::contains("sfeed.toml"));
    Ok(())
}

#[test]
fn rust_log_overrides_configured_level() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("sfeed.toml");
    fs::write(&config, "[logging]\nlevel = \"info\"\n")?;

    sfeed()
        .env("RUST_LOG", "error")
        .arg("--config")
        .arg(&config)
        .arg("fields")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn fields_lists_wire_names() {
    sfeed().arg("fields").assert().success().stdout(
        "ConditionType\nPackageHeight\nPackageWidth\nPackageLength\nPackageWeight\n",
    );
}

#[test]
fn missing_input_fails_cleanly() {
    sfeed()
        .arg("check")
        .arg("does-not-exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read does-not-exist.json"));
}
