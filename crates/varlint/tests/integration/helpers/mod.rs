use std::path::PathBuf;
use std::process::Command;

pub fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_varlint"))
}

pub trait CommandExt {
    /// Run the command without colors or user logging configuration, and
    /// render its status and outputs for snapshots.
    fn run(&mut self) -> String;
}

impl CommandExt for Command {
    fn run(&mut self) -> String {
        let output = self
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run the varlint binary");

        format!(
            "success: {}\nexit_code: {}\n----- stdout -----\n{}\n----- stderr -----\n{}",
            output.status.success(),
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        )
    }
}

/// A stylesheet tree with a single `p { ... }` rule holding `declarations`,
/// each given as `(name, value)` where `value` is the JSON of an expression.
/// Declaration `i` is located on row `i + 2`, column 3.
pub fn stylesheet(declarations: &[(&str, &str)]) -> String {
    let children: Vec<String> = declarations
        .iter()
        .enumerate()
        .map(|(i, (name, value))| {
            format!(
                r#"{{"type": "property", "name": "{name}", "location": {{"row": {}, "column": 3}}, "value": {value}}}"#,
                i + 2
            )
        })
        .collect();

    format!(
        r#"{{"nodes": [{{"type": "rule", "selector": "p", "children": [{}]}}]}}"#,
        children.join(", ")
    )
}

pub const RED: &str = r#"{"type": "literal", "value": "red"}"#;
pub const RED_VARIABLE: &str = r#"{"type": "variable", "name": "red"}"#;
pub const BASE_PLUS_2PX: &str = r#"{"type": "binary_operation", "operator": "plus",
    "left": {"type": "variable", "name": "base"},
    "right": {"type": "literal", "value": "2px"}}"#;
pub const BASE_TIMES_2: &str = r#"{"type": "binary_operation", "operator": "times",
    "left": {"type": "variable", "name": "base"},
    "right": {"type": "literal", "value": "2"}}"#;
pub const RED_IMPORTANT: &str = r#"{"type": "list_literal", "elements": [
    {"type": "literal", "value": "red"},
    {"type": "literal", "value": "!important"}]}"#;
pub const VARIABLE_IMPORTANT: &str = r#"{"type": "list_literal", "elements": [
    {"type": "variable", "name": "red"},
    {"type": "literal", "value": "!important"}]}"#;

pub const WATCH_ALL: &str = r#"
[lint.variable-for-property]
properties = ["color", "font-size", "width"]
"#;
