//! Integration tests for the casemap CLI output formats.

use serde_json::Value;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const CASE_JSON: &str = r#"{
  "case": {
    "title": "Lease Termination Dispute",
    "type": "Contract",
    "description": "Dispute over early termination of a commercial lease."
  },
  "evidence": [
    {
      "description": "Signed lease agreement with termination clause",
      "type": "document",
      "reliability": 5,
      "relevance": 5
    },
    {
      "description": "Witness statement from the property manager",
      "type": "witness",
      "reliability": 4,
      "relevance": 4
    }
  ],
  "strategy": "Argue the merits under the statutory elements and cite controlling precedent.",
  "comparable_cases": []
}"#;

fn run_casemap(args: &[&str]) -> std::process::Output {
    let mut command_args = vec!["run", "--bin", "casemap", "--quiet", "--"];
    command_args.extend_from_slice(args);
    Command::new("cargo")
        .args(&command_args)
        .output()
        .expect("Failed to execute casemap command")
}

#[test]
fn test_cli_json_output_produces_documented_structure() {
    let temp_dir = TempDir::new().unwrap();
    let case_path = temp_dir.path().join("case.json");
    let output_path = temp_dir.path().join("report.json");
    fs::write(&case_path, CASE_JSON).unwrap();

    let output = run_casemap(&[
        "analyze",
        "--format",
        "json",
        "--output",
        output_path.to_str().unwrap(),
        case_path.to_str().unwrap(),
    ]);

    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("casemap analyze command failed");
    }

    let report = fs::read_to_string(&output_path).expect("Failed to read report file");
    let json: Value = serde_json::from_str(&report).expect("Report is not valid JSON");

    assert!(json.get("win_probability").is_some(), "Missing win_probability");
    assert!(json.get("outcome_analysis").is_some(), "Missing outcome_analysis");
    assert!(json.get("evidence_analysis").is_some(), "Missing evidence_analysis");
    assert!(json.get("strategy_analysis").is_some(), "Missing strategy_analysis");
    assert!(json.get("recommendations").is_some(), "Missing recommendations");
    assert!(json.get("generated_at").is_some(), "Missing generated_at");

    let evidence = json.get("evidence_analysis").unwrap();
    let items = evidence.get("evidence_items").unwrap().as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].get("strength_score").unwrap(), 100.0);
    assert_eq!(items[0].get("category").unwrap(), "Very Strong");
    assert_eq!(evidence.get("overall_score").unwrap(), 87.5);
}

#[test]
fn test_cli_markdown_output_renders_report() {
    let temp_dir = TempDir::new().unwrap();
    let case_path = temp_dir.path().join("case.json");
    fs::write(&case_path, CASE_JSON).unwrap();

    let output = run_casemap(&["analyze", "--format", "markdown", case_path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("# Case Prediction Report"));
    assert!(stdout.contains("## Evidence Analysis"));
    assert!(stdout.contains("Very Strong"));
}

#[test]
fn test_cli_score_command() {
    let output = run_casemap(&["score", "--reliability", "4", "--relevance", "4"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("75.0 (Strong)"));
}

#[test]
fn test_cli_score_command_rejects_invalid_rating() {
    let output = run_casemap(&["score", "--reliability", "6", "--relevance", "4"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid rating"));
}
