use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, EN_TABLE, run_with_stdin, stderr, stdout};

const TABLE: &str = "App/en.lproj/Localizable.strings";
const BACKUP: &str = "App/en.lproj/Localizable.strings.backup";

/// `common.ok` and `common.cancel` are used; `market.back` and
/// `profile.logout` are not.
fn setup_project() -> Result<CliTest> {
    let test = CliTest::with_file(TABLE, EN_TABLE)?;
    test.write_file(
        "App/Sources/AlertView.swift",
        r#"
struct AlertView {
    let confirm = L10n.Common.ok
    let dismiss = L10n.Common.cancel
}
"#,
    )?;
    Ok(test)
}

#[test]
fn test_clean_dry_run_does_not_modify() -> Result<()> {
    let test = setup_project()?;

    let mut cmd = test.clean_command();
    cmd.args([TABLE, "--source-root", "App"]);
    assert_cmd_snapshot!(cmd);

    assert_eq!(test.read_file(TABLE)?, EN_TABLE);
    assert!(!test.exists(BACKUP));

    Ok(())
}

#[test]
fn test_clean_apply_with_yes() -> Result<()> {
    let test = setup_project()?;

    let mut cmd = test.clean_command();
    cmd.args([TABLE, "--source-root", "App", "--apply", "--yes"]);
    assert_cmd_snapshot!(cmd);

    let pruned = test.read_file(TABLE)?;
    assert!(pruned.contains("/* Shared buttons */"));
    assert!(pruned.contains("\"common.ok\" = \"OK\";"));
    assert!(pruned.contains("\"common.cancel\" = \"Cancel\";"));
    assert!(!pruned.contains("market.back"));
    assert!(!pruned.contains("profile.logout"));

    assert_eq!(test.read_file(BACKUP)?, EN_TABLE);

    // A second run finds nothing left to delete
    let output = test
        .clean_command()
        .args([TABLE, "--source-root", "App", "--apply", "--yes"])
        .output()?;
    assert!(stdout(&output).contains("No unused keys in App/en.lproj/Localizable.strings"));

    Ok(())
}

#[test]
fn test_clean_apply_prompt_declined() -> Result<()> {
    let test = setup_project()?;

    let mut cmd = test.clean_command();
    cmd.args([TABLE, "--source-root", "App", "--apply"]);
    let output = run_with_stdin(cmd, "n\n")?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {out}");
    assert!(stderr(&output).contains("Delete 2 unused key(s) from App/en.lproj/Localizable.strings?"));
    assert!(stderr(&output).contains("[y/N]"));
    assert!(out.contains("Aborted; no files were changed."));
    // The preview is printed once, before the prompt
    assert_eq!(out.matches("Unused entries in").count(), 1);

    assert_eq!(test.read_file(TABLE)?, EN_TABLE);
    assert!(!test.exists(BACKUP));

    Ok(())
}

#[test]
fn test_clean_apply_prompt_eof_is_no() -> Result<()> {
    let test = setup_project()?;

    let mut cmd = test.clean_command();
    cmd.args([TABLE, "--source-root", "App", "--apply"]);
    let output = run_with_stdin(cmd, "")?;

    assert!(stdout(&output).contains("Aborted; no files were changed."));
    assert_eq!(test.read_file(TABLE)?, EN_TABLE);

    Ok(())
}

#[test]
fn test_clean_apply_prompt_accepted() -> Result<()> {
    let test = setup_project()?;

    let mut cmd = test.clean_command();
    cmd.args([TABLE, "--source-root", "App", "--apply"]);
    let output = run_with_stdin(cmd, "yes\n")?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {out}");
    assert!(out.contains("Deleted 2 key(s)"));
    assert!(!test.read_file(TABLE)?.contains("market.back"));
    assert!(test.exists(BACKUP));

    Ok(())
}

#[test]
fn test_clean_counts_literal_usage() -> Result<()> {
    let test = setup_project()?;
    test.write_file(
        "App/Sources/Legacy.m",
        r#"self.title = NSLocalizedString(@"market.back", nil);"#,
    )?;

    // "back" appears as a token inside the literal, which already counts.
    let mut cmd = test.clean_command();
    cmd.args([TABLE, "--source-root", "App"]);
    assert_cmd_snapshot!(cmd);

    Ok(())
}

#[test]
fn test_clean_snake_case_literal_usage() -> Result<()> {
    let test = CliTest::with_file(
        TABLE,
        "\"legacy.screen_title\" = \"Home\";\n\"legacy.footer_note\" = \"Footer\";\n",
    )?;
    test.write_file(
        "App/Legacy.m",
        r#"self.title = NSLocalizedString(@"legacy.screen_title", nil);"#,
    )?;

    let mut cmd = test.clean_command();
    cmd.args([TABLE, "--source-root", "App"]);
    assert_cmd_snapshot!(cmd);

    Ok(())
}

#[test]
fn test_clean_extension_override() -> Result<()> {
    let test = setup_project()?;

    // Only Objective-C files are scanned, so nothing is used
    let mut cmd = test.clean_command();
    cmd.args([TABLE, "--source-root", "App", "--ext", "m"]);
    assert_cmd_snapshot!(cmd);

    Ok(())
}

#[test]
fn test_clean_excluded_dir() -> Result<()> {
    let test = setup_project()?;
    test.write_file("App/Pods/Vendor.swift", "let x = L10n.Profile.logout\n")?;

    let mut cmd = test.clean_command();
    cmd.args([TABLE, "--source-root", "App"]);
    assert_cmd_snapshot!(cmd);

    Ok(())
}

#[test]
fn test_clean_writes_report_file() -> Result<()> {
    let test = setup_project()?;

    let output = test
        .clean_command()
        .args([TABLE, "--source-root", "App", "--report", "reports/cleanup.txt"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Report written to"));

    let report = test.read_file("reports/cleanup.txt")?;
    assert!(report.starts_with("Localization cleanup report\n"));
    assert!(report.contains("Table: App/en.lproj/Localizable.strings"));
    assert!(report.contains("Usage rate: 50.0%"));
    assert!(report.contains("\"market.back\" = \"Back\";"));
    assert!(report.contains("\"profile.logout\" = \"Log out\";"));

    Ok(())
}

#[test]
fn test_clean_uses_config() -> Result<()> {
    let test = setup_project()?;
    test.write_file(
        ".lctrc.json",
        r#"{
            "baseline": "App/en.lproj/Localizable.strings",
            "sourceRoot": "App",
            "backupSuffix": "orig"
        }"#,
    )?;

    let output = test.clean_command().args(["--apply", "-y"]).output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {out}");
    assert!(test.exists("App/en.lproj/Localizable.strings.orig"));
    assert!(!test.exists(BACKUP));

    Ok(())
}

#[test]
fn test_clean_unparsable_table_aborts() -> Result<()> {
    let test = CliTest::with_file(TABLE, "\"common.ok\" = \"OK\"\n")?;
    test.write_file("App/View.swift", "let x = 1\n")?;

    let output = test
        .clean_command()
        .args([TABLE, "--source-root", "App", "--apply", "-y"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to load App/en.lproj/Localizable.strings"));
    assert_eq!(test.read_file(TABLE)?, "\"common.ok\" = \"OK\"\n");
    assert!(!test.exists(BACKUP));

    Ok(())
}

#[test]
fn test_clean_missing_source_root() -> Result<()> {
    let test = setup_project()?;

    let mut cmd = test.clean_command();
    cmd.args([TABLE, "--source-root", "Nope"]);
    assert_cmd_snapshot!(cmd);

    Ok(())
}

#[test]
fn test_clean_ignores_swiftgen_output_by_default() -> Result<()> {
    let test = setup_project()?;
    // Generated accessors name every key's symbol
    test.write_file(
        "App/Generated/Strings.swift",
        r#"
internal enum L10n {
  internal enum Market {
    internal static let back = L10n.tr("Localizable", "market.back")
  }
  internal enum Profile {
    internal static let logout = L10n.tr("Localizable", "profile.logout")
  }
}
"#,
    )?;

    let output = test.clean_command().args([TABLE, "--source-root", "App"]).output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {out}");
    assert!(out.contains("Scanned 1 source file(s) under App"));
    assert!(out.contains("Would delete 2 key(s)"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_clean_refuses_to_delete_after_incomplete_scan() -> Result<()> {
    use std::os::unix::fs::symlink;

    let test = setup_project()?;
    symlink(test.root().join("App/Sources"), test.root().join("App/Sources/loop"))?;

    let mut cmd = test.clean_command();
    cmd.args([TABLE, "--source-root", "App", "--apply", "--yes"]);
    assert_cmd_snapshot!(cmd);

    assert_eq!(test.read_file(TABLE)?, EN_TABLE);
    assert!(!test.exists(BACKUP));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_clean_follows_symlinked_sources() -> Result<()> {
    use std::os::unix::fs::symlink;

    let test = setup_project()?;
    test.write_file("Shared/ProfileView.swift", "let title = L10n.Profile.logout\n")?;
    symlink(test.root().join("Shared"), test.root().join("App/Shared"))?;

    let output = test.clean_command().args([TABLE, "--source-root", "App"]).output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {out}");
    assert!(out.contains("Scanned 2 source file(s) under App"));
    assert!(out.contains("Would delete 1 key(s)"));
    assert!(!out.contains("profile.logout"));

    Ok(())
}

#[test]
fn test_yes_requires_apply() -> Result<()> {
    let test = setup_project()?;

    let output = test.clean_command().args([TABLE, "--yes"]).output()?;

    assert!(!output.status.success());
    assert_eq!(test.read_file(TABLE)?, EN_TABLE);

    Ok(())
}
