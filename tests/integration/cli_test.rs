//! End-to-end tests driving the datatool binary

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

fn run_datatool(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_datatool"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute datatool")
}

fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

mod summary {
    use super::*;

    #[test]
    fn test_summary_csv() {
        let dir = tempdir().unwrap();
        let input = create_test_file(&dir, "people.csv", "id,name\n1,Alice\n2,Bob\n");

        let output = run_datatool(&["summary", path_str(&input)]);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(output.status.success());
        assert!(stdout.contains("Columns (2): id, name"));
        assert!(stdout.contains("Total rows: 2"));
        assert!(stdout.contains("name: Alice"));
        assert!(!stdout.contains("Warnings"));
    }

    #[test]
    fn test_summary_json_report_format() {
        let dir = tempdir().unwrap();
        let input = create_test_file(&dir, "records.json", r#"[{"a": 1}, {"b": 2}]"#);

        let output = run_datatool(&["summary", path_str(&input), "--format", "json"]);
        assert!(output.status.success());

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["row_count"], 2);
        assert_eq!(report["columns"], serde_json::json!(["a", "b"]));
        assert_eq!(report["warnings"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_summary_preview_limit() {
        let dir = tempdir().unwrap();
        let body: String = (1..=10).map(|i| format!("{}\n", i)).collect();
        let input = create_test_file(&dir, "n.csv", &format!("n\n{}", body));

        let output = run_datatool(&["summary", path_str(&input), "--preview", "3"]);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(stdout.contains("Total rows: 10 (showing 3)"));
        assert!(stdout.contains("Row 3:"));
        assert!(!stdout.contains("Row 4:"));
    }

    #[test]
    fn test_summary_empty_table_warns() {
        let dir = tempdir().unwrap();
        let input = create_test_file(&dir, "empty.csv", "a,b\n");

        let output = run_datatool(&["summary", path_str(&input)]);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(output.status.success());
        assert!(stdout.contains("Total rows: 0"));
        assert!(stdout.contains("empty table"));
    }

    #[test]
    fn test_summary_missing_file() {
        let output = run_datatool(&["summary", "/no/such/file.csv"]);
        assert_eq!(output.status.code(), Some(2));
        assert!(String::from_utf8_lossy(&output.stderr).contains("File not found"));
    }

    #[test]
    fn test_summary_directory_is_not_missing() {
        let dir = tempdir().unwrap();

        let output = run_datatool(&["summary", path_str(dir.path())]);
        let stderr = String::from_utf8_lossy(&output.stderr);

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr.contains("Error: summary failed"));
        assert!(stderr.contains("Cannot read"));
        assert!(!stderr.contains("File not found"));
    }

    #[test]
    fn test_summary_max_value_width() {
        let dir = tempdir().unwrap();
        let long = "x".repeat(30);
        let input = create_test_file(&dir, "wide.csv", &format!("v\n{}\n", long));

        let output = run_datatool(&["summary", path_str(&input), "--max-value-width", "10"]);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(output.status.success());
        assert!(stdout.contains("  v: xxxxxxx...\n"));
    }

    #[test]
    fn test_summary_empty_csv_fails() {
        let dir = tempdir().unwrap();
        let input = create_test_file(&dir, "blank.csv", "");

        let output = run_datatool(&["summary", path_str(&input)]);
        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("Parse error"));
    }
}

mod conversion {
    use super::*;

    #[test]
    fn test_convert_to_csv() {
        let dir = tempdir().unwrap();
        let input = create_test_file(&dir, "in.json", r#"[{"a": 1}, {"b": true}]"#);
        let out = dir.path().join("out.csv");

        let output = run_datatool(&["convert-to-csv", path_str(&input), "-o", path_str(&out)]);

        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout).contains("Wrote 2 records"));
        assert_eq!(fs::read_to_string(&out).unwrap(), "a,b\n1,\n,true\n");
    }

    #[test]
    fn test_convert_to_json() {
        let dir = tempdir().unwrap();
        let input = create_test_file(&dir, "in.csv", "a,b,c\n1,2\n");
        let out = dir.path().join("out.json");

        let output = run_datatool(&[
            "convert-to-json",
            path_str(&input),
            "--output",
            path_str(&out),
            "--plain",
        ]);

        assert!(output.status.success());
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "[{\"a\":\"1\",\"b\":\"2\",\"c\":null}]\n"
        );
    }

    #[test]
    fn test_convert_to_csv_rejects_single_object() {
        let dir = tempdir().unwrap();
        let input = create_test_file(&dir, "obj.json", r#"{"a": 1}"#);
        let out = dir.path().join("out.csv");

        let output = run_datatool(&["convert-to-csv", path_str(&input), "-o", path_str(&out)]);

        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("Schema error"));
        assert!(!out.exists());
    }

    #[test]
    fn test_convert_to_json_unwritable_destination() {
        let dir = tempdir().unwrap();
        let input = create_test_file(&dir, "in.csv", "a\n1\n");
        let blocker = create_test_file(&dir, "blocker", "");
        let out = blocker.join("out.json");

        let output = run_datatool(&["convert-to-json", path_str(&input), "-o", path_str(&out)]);

        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("Cannot write"));
    }

    #[test]
    fn test_pipe_delimiter_and_quiet() {
        let dir = tempdir().unwrap();
        let input = create_test_file(&dir, "in.json", r#"[{"x": "a,b", "y": 2}]"#);
        let out = dir.path().join("out.psv");

        let output = run_datatool(&[
            "convert-to-csv",
            path_str(&input),
            "-o",
            path_str(&out),
            "--delimiter",
            "pipe",
            "--quiet",
        ]);

        assert!(output.status.success());
        assert!(output.stdout.is_empty());
        assert_eq!(fs::read_to_string(&out).unwrap(), "x|y\na,b|2\n");
    }

    #[test]
    fn test_strict_headers() {
        let dir = tempdir().unwrap();
        let input = create_test_file(&dir, "dup.csv", "id,id\n1,2\n");
        let out = dir.path().join("out.json");

        let lenient = run_datatool(&["convert-to-json", path_str(&input), "-o", path_str(&out)]);
        assert!(lenient.status.success());
        assert!(fs::read_to_string(&out).unwrap().contains("\"id\": \"2\""));

        let strict = run_datatool(&[
            "convert-to-json",
            path_str(&input),
            "-o",
            path_str(&out),
            "--strict-headers",
        ]);
        assert_eq!(strict.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&strict.stderr).contains("Duplicate column name 'id'"));
    }

    #[test]
    fn test_memory_limit() {
        let dir = tempdir().unwrap();
        let input = create_test_file(&dir, "in.csv", "a,b\n1,2\n3,4\n");
        let out = dir.path().join("out.json");

        let output = run_datatool(&[
            "convert-to-json",
            path_str(&input),
            "-o",
            path_str(&out),
            "--memory-limit",
            "4B",
        ]);
        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("too large"));
    }
}

mod validate {
    use super::*;

    #[test]
    fn test_validate_passes() {
        let dir = tempdir().unwrap();
        let input = create_test_file(&dir, "in.csv", "id,price\n1,2.5\n2,3\n");
        let schema = create_test_file(&dir, "schema.json", r#"{"id": "int", "price": "float"}"#);

        let output = run_datatool(&["validate", path_str(&input), "--schema", path_str(&schema)]);

        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout).contains("Validation passed"));
    }

    #[test]
    fn test_validate_reports_errors() {
        let dir = tempdir().unwrap();
        let input = create_test_file(&dir, "in.json", r#"[{"id": 1}, {"id": "x"}, {}]"#);
        let schema = create_test_file(&dir, "schema.json", r#"{"id": "int"}"#);

        let output = run_datatool(&["validate", path_str(&input), "--schema", path_str(&schema)]);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert_eq!(output.status.code(), Some(3));
        assert!(stdout.contains("Validation found 2 errors"));
        assert!(stdout.contains("row 2: field id expected int"));
        assert!(stdout.contains("row 3: missing id"));
    }

    #[test]
    fn test_validate_bad_schema() {
        let dir = tempdir().unwrap();
        let input = create_test_file(&dir, "in.csv", "id\n1\n");
        let schema = create_test_file(&dir, "schema.json", r#"["id"]"#);

        let output = run_datatool(&["validate", path_str(&input), "--schema", path_str(&schema)]);
        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("Schema must be a JSON object"));
    }
}

#[test]
fn test_no_arguments_shows_usage() {
    let output = run_datatool(&[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage") || stderr.contains("usage"));
}
