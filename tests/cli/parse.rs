use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

#[test]
fn test_parse_arguments() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .parse_command()
        .args(["a", "i18n:a.b", r#"i18n:a.b{k_0: "c", k_1: "d", k_2: i18n:e.f}"#])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        concat!(
            "\"a\" ==> a\n",
            "\"i18n:a.b\" ==> i18n:a.b\n",
            "\"i18n:a.b{k_0: \"c\", k_1: \"d\", k_2: i18n:e.f}\" ==> i18n:a.b{k_0: \"c\", k_1: \"d\", k_2: i18n:e.f}\n",
        )
    );
    assert!(stderr(&output).contains("Parsed 3 inputs"));

    Ok(())
}

#[test]
fn test_parse_failure_exit_code() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .parse_command()
        .args([r#"i18n:a.b{k_0: "c", k_1: "d""#])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).ends_with("==> FAILED\n"));
    let err = stderr(&output);
    assert!(err.contains("error: Expected a terminal '}'  missing-terminator"));
    assert!(err.contains("--> <input 1>:1:28"));

    Ok(())
}

#[test]
fn test_trailing_input_succeeds_by_default() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .parse_command()
        .arg(r#"i18n:a.b{k_0: "c"}}"#)
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("warning: Trailing strings"));

    Ok(())
}

#[test]
fn test_deny_trailing_flag() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .parse_command()
        .args(["--deny-trailing", r#"i18n:a.b{k_0: "c"}}"#])
        .output()?;

    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_deny_trailing_from_config() -> Result<()> {
    let test = CliTest::with_file(".i18nexprrc.json", r#"{ "denyTrailing": true }"#)?;

    let output = test.parse_command().arg("i18n:a}").output()?;

    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .parse_command()
        .args(["--format", "json", r#"i18n:a{k: i18n:b{x: "1"}}"#])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        parsed,
        json!([{
            "input": "i18n:a{k: i18n:b{x: \"1\"}}",
            "result": {
                "key": "a",
                "params": { "k": { "key": "b", "params": { "x": "\"1\"" } } }
            },
            "diagnostics": []
        }])
    );

    Ok(())
}

#[test]
fn test_json_format_from_config() -> Result<()> {
    let test = CliTest::with_file(".i18nexprrc.json", r#"{ "format": "json" }"#)?;

    let output = test.parse_command().arg("plain").output()?;

    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(parsed[0]["result"], json!("plain"));

    Ok(())
}

#[test]
fn test_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_file(".i18nexprrc.json", r#"{ "format": "xml" }"#)?;

    let output = test.parse_command().arg("i18n:a").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse config file"));

    Ok(())
}

#[test]
fn test_parse_file() -> Result<()> {
    let test = CliTest::with_file("inputs.txt", "i18n:a\n\ni18n:b{x: \"1\"}\n")?;

    let output = test.parse_command().args(["--file", "inputs.txt"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "\"i18n:a\" ==> i18n:a\n\"i18n:b{x: \"1\"}\" ==> i18n:b{x: \"1\"}\n"
    );

    Ok(())
}

#[test]
fn test_deeply_nested_file_input_is_rejected() -> Result<()> {
    let levels = 5000;
    let deep = format!("{}i18n:z{}", "i18n:a{p: ".repeat(levels), "}".repeat(levels));
    let test = CliTest::with_file("deep.txt", &format!("{deep}\n"))?;

    let output = test
        .parse_command()
        .args(["--file", "deep.txt", "ok-literal"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.starts_with("\"ok-literal\" ==> ok-literal\n"));
    assert!(out.ends_with("==> FAILED\n"));
    let err = stderr(&output);
    assert!(err.contains("nesting-too-deep"));
    assert!(err.contains("--> <input 2>:1:1288"));

    Ok(())
}

#[test]
fn test_missing_file_is_internal_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.parse_command().args(["--file", "nope.txt"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read input file"));

    Ok(())
}

#[test]
fn test_parse_stdin() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.parse_stdin("i18n:x.y\nhello\n")?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "\"i18n:x.y\" ==> i18n:x.y\n\"hello\" ==> hello\n"
    );

    Ok(())
}

#[test]
fn test_trace_output() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .parse_command()
        .args(["--trace", r#"i18n:a{k: "v"}"#])
        .output()?;

    let err = stderr(&output);
    assert!(err.contains("Parsing expression 【i18n:a{k: \"v\"}】"));
    assert!(err.contains("  Parsing params 【k: \"v\"}】"));
    assert!(err.contains("    Parsing param 【k: \"v\"}】"));

    Ok(())
}
