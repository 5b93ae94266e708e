use std::process::Command;

use tempfile::TempDir;

use crate::helpers::*;

#[test]
fn test_one_lint() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("varlint.toml"), WATCH_ALL)?;
    std::fs::write(
        directory.join("test.json"),
        stylesheet(&[("color", RED), ("width", BASE_TIMES_2)]),
    )?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .run(),
        @r"
success: false
exit_code: 1
----- stdout -----
warning: variable_for_property
 --> test.json:2:3
Property color should use a variable rather than 'red'

Found 1 error.

----- stderr -----
"
    );

    Ok(())
}

#[test]
fn test_no_lints() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("varlint.toml"), WATCH_ALL)?;
    std::fs::write(
        directory.join("test.json"),
        stylesheet(&[
            ("color", RED_VARIABLE),
            ("width", BASE_TIMES_2),
            ("margin", RED),
            ("color", r#"{"type": "literal", "value": "currentColor"}"#),
        ]),
    )?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .run(),
        @r"
success: true
exit_code: 0
----- stdout -----
All checks passed!

----- stderr -----
"
    );

    Ok(())
}

#[test]
fn test_no_config_means_no_lints() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.json"), stylesheet(&[("color", RED)]))?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg("test.json")
            .run(),
        @r"
success: true
exit_code: 0
----- stdout -----
All checks passed!

----- stderr -----
"
    );

    Ok(())
}

#[test]
fn test_several_lints_several_files() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("varlint.toml"), WATCH_ALL)?;
    std::fs::write(
        directory.join("b.json"),
        stylesheet(&[("font-size", BASE_PLUS_2PX)]),
    )?;
    std::fs::write(
        directory.join("a.json"),
        stylesheet(&[("color", RED_VARIABLE), ("color", RED_IMPORTANT)]),
    )?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .run(),
        @r"
success: false
exit_code: 1
----- stdout -----
warning: variable_for_property
 --> a.json:3:3
Property color should use a variable rather than 'red!important'

warning: variable_for_property
 --> b.json:2:3
Property font-size should use a variable rather than '2px'

Found 2 errors.

----- stderr -----
"
    );

    Ok(())
}

#[test]
fn test_no_stylesheet_found() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("varlint.toml"), WATCH_ALL)?;
    std::fs::write(directory.join("style.scss"), "p { color: red; }")?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .run(),
        @r"
success: true
exit_code: 0
----- stdout -----
Warning: No stylesheet trees found under the given path(s).

----- stderr -----
"
    );

    Ok(())
}

#[test]
fn test_malformed_tree_is_reported() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("varlint.toml"), WATCH_ALL)?;
    std::fs::write(directory.join("bad.json"), "]")?;
    std::fs::write(directory.join("good.json"), stylesheet(&[("color", RED)]))?;

    insta::assert_snapshot!(
        &mut Command::new(binary_path())
            .current_dir(directory)
            .arg("check")
            .arg(".")
            .run(),
        @r"
success: false
exit_code: 2
----- stdout -----
warning: variable_for_property
 --> good.json:2:3
Property color should use a variable rather than 'red'

Error: Failed to parse stylesheet tree: bad.json: expected value at line 1 column 1
Found 1 error.

----- stderr -----
"
    );

    Ok(())
}

#[test]
fn test_must_pass_path() -> anyhow::Result<()> {
    let output = Command::new(binary_path())
        .arg("check")
        .env("NO_COLOR", "1")
        .output()?;

    assert!(!output.status.success());
    Ok(())
}
