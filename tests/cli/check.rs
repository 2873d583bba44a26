use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, EN_TABLE, stderr, stdout};

const FR_TABLE: &str = r#""common.ok" = "OK";
"common.cancel" = "Annuler";
"market.back" = "Retour";
"profile.logout" = "Se déconnecter";
"#;

#[test]
fn test_check_consistent_tables() -> Result<()> {
    let test = CliTest::with_file("en.strings", EN_TABLE)?;
    test.write_file("fr.strings", FR_TABLE)?;

    let mut cmd = test.check_command();
    cmd.args(["en.strings", "fr.strings"]);
    assert_cmd_snapshot!(cmd);

    Ok(())
}

#[test]
fn test_check_missing_key_fails() -> Result<()> {
    let test = CliTest::with_file("en.strings", EN_TABLE)?;
    test.write_file(
        "fr.strings",
        "\"common.ok\" = \"OK\";\n\"common.cancel\" = \"Annuler\";\n\"market.back\" = \"Retour\";\n",
    )?;

    let mut cmd = test.check_command();
    cmd.args(["en.strings", "fr.strings"]);
    assert_cmd_snapshot!(cmd);

    Ok(())
}

#[test]
fn test_check_one_issue_per_target() -> Result<()> {
    let test = CliTest::with_file("en.strings", EN_TABLE)?;
    test.write_file("fr.strings", "\"common.ok\" = \"OK\";\n")?;
    test.write_file("de.strings", "\"common.ok\" = \"OK\";\n")?;

    let mut cmd = test.check_command();
    cmd.args(["en.strings", "fr.strings", "de.strings"]);
    assert_cmd_snapshot!(cmd);

    Ok(())
}

#[test]
fn test_check_extra_keys_are_warnings() -> Result<()> {
    let test = CliTest::with_file("en.strings", EN_TABLE)?;
    test.write_file(
        "fr.strings",
        &format!("{FR_TABLE}\"legacy.banner\" = \"Bannière\";\n"),
    )?;

    let mut cmd = test.check_command();
    cmd.args(["en.strings", "fr.strings"]);
    assert_cmd_snapshot!(cmd);

    Ok(())
}

#[test]
fn test_check_fail_on_extra() -> Result<()> {
    let test = CliTest::with_file("en.strings", EN_TABLE)?;
    test.write_file(
        "fr.strings",
        &format!("{FR_TABLE}\"legacy.banner\" = \"Bannière\";\n"),
    )?;

    let mut cmd = test.check_command();
    cmd.args(["en.strings", "fr.strings", "--fail-on-extra"]);
    assert_cmd_snapshot!(cmd);

    Ok(())
}

#[test]
fn test_check_unparsable_target_is_load_error() -> Result<()> {
    let test = CliTest::with_file("en.strings", EN_TABLE)?;
    test.write_file("fr.strings", FR_TABLE)?;
    test.write_file("de.strings", "\"common.ok\" = \"OK\"\n")?;

    // The other target is still checked
    let mut cmd = test.check_command();
    cmd.args(["en.strings", "fr.strings", "de.strings"]);
    assert_cmd_snapshot!(cmd);

    Ok(())
}

#[test]
fn test_check_missing_target_file_is_load_error() -> Result<()> {
    let test = CliTest::with_file("en.strings", EN_TABLE)?;

    let output = test.check_command().args(["en.strings", "nl.strings"]).output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(2), "stdout: {out}");
    assert!(out.contains("read-error"));
    assert!(out.contains("--> nl.strings\n"));
    assert!(out.contains("nl.strings: could not be loaded"));

    Ok(())
}

#[test]
fn test_check_unreadable_baseline_aborts() -> Result<()> {
    let test = CliTest::with_file("fr.strings", FR_TABLE)?;

    let output = test.check_command().args(["en.strings", "fr.strings"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to load baseline en.strings"));
    assert!(stdout(&output).is_empty());

    Ok(())
}

#[test]
fn test_check_uses_config_tables() -> Result<()> {
    let test = CliTest::with_file("App/en.lproj/Localizable.strings", EN_TABLE)?;
    test.write_file("App/fr.lproj/Localizable.strings", FR_TABLE)?;
    test.write_file(
        ".lctrc.json",
        r#"{
            "baseline": "App/en.lproj/Localizable.strings",
            "targets": ["App/fr.lproj/Localizable.strings"]
        }"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_check_without_baseline_errors() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_check_reports_symbol_collisions() -> Result<()> {
    let test = CliTest::with_file(
        "en.strings",
        "\"market.name\" = \"Market\";\n\"trade.name\" = \"Trade\";\n",
    )?;
    test.write_file(
        "fr.strings",
        "\"market.name\" = \"Marché\";\n\"trade.name\" = \"Échange\";\n",
    )?;

    let mut cmd = test.check_command();
    cmd.args(["en.strings", "fr.strings"]);
    assert_cmd_snapshot!(cmd);

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("check"));
    assert!(out.contains("clean"));
    assert!(out.contains("init"));

    Ok(())
}
