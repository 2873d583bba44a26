use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, EN_TABLE, stderr};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.init_command());

    let content = test.read_file(".lctrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["sourceRoot"], "./");
    assert_eq!(parsed["symbolPrefix"], "L10n");
    assert_eq!(parsed["backupSuffix"], "backup");
    assert!(parsed["extensions"].is_array());
    assert_eq!(parsed["ignores"][0], "**/Strings.swift");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".lctrc.json", "{}")?;

    assert_cmd_snapshot!(test.init_command());
    assert_eq!(test.read_file(".lctrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.init_command().output()?;

    test.write_file("en.strings", EN_TABLE)?;
    test.write_file("fr.strings", EN_TABLE)?;
    test.write_file("Sources/App.swift", "let ok = L10n.Common.ok\n")?;

    let output = test.check_command().args(["en.strings", "fr.strings"]).output()?;
    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        stderr(&output)
    );

    let output = test.clean_command().arg("en.strings").output()?;
    assert!(
        output.status.success(),
        "Clean command should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}
