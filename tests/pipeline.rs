use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn metricize() -> Command {
    Command::cargo_bin("metricize").unwrap()
}

fn write_mixed_sources(root: &Path) {
    fs::write(
        root.join("source1.csv"),
        "name,height,weight\nalex,65.78,112.99\najay,71.52,136.49\n",
    )
    .unwrap();
    fs::write(
        root.join("source1.json"),
        r#"[{"name":"alice","height":69.4,"weight":153.03}]"#,
    )
    .unwrap();
    fs::write(
        root.join("source1.xml"),
        "<people>\
         <person><name>jack</name><height>68.7</height><weight>123.3</weight></person>\
         <person><name>tom</name><height>69.8</height><weight>141.49</weight></person>\
         <person><name>tracy</name><height>70.01</height><weight>136.46</weight></person>\
         </people>",
    )
    .unwrap();
}

fn log_messages(root: &Path) -> Vec<String> {
    fs::read_to_string(root.join("log_file.txt"))
        .unwrap()
        .lines()
        .map(|l| l.split_once(',').unwrap().1.to_string())
        .collect()
}

#[test]
fn merges_all_three_formats_in_order() {
    let temp_dir = TempDir::new().unwrap();
    write_mixed_sources(temp_dir.path());

    metricize().arg(temp_dir.path()).assert().success();

    let output = fs::read_to_string(temp_dir.path().join("transformed_data.csv")).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], ",name,height,weight");

    // CSV rows first (file order then row order), then JSON, then XML in
    // document order.
    let names: Vec<&str> = lines[1..]
        .iter()
        .map(|l| l.split(',').nth(1).unwrap())
        .collect();
    assert_eq!(names, vec!["alex", "ajay", "alice", "jack", "tom", "tracy"]);
}

#[test]
fn converts_known_values() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("one.csv"),
        "name,height,weight\nsam,70.0,150.0\n",
    )
    .unwrap();

    metricize().arg(temp_dir.path()).assert().success();

    let output = fs::read_to_string(temp_dir.path().join("transformed_data.csv")).unwrap();
    assert!(output.contains("0,sam,1.78,68.04"));
}

#[test]
fn writes_eight_log_lines_per_successful_run() {
    let temp_dir = TempDir::new().unwrap();
    write_mixed_sources(temp_dir.path());

    metricize().arg(temp_dir.path()).assert().success();

    assert_eq!(
        log_messages(temp_dir.path()),
        vec![
            "ETL Job Started",
            "Extract phase Started",
            "Extract phase Ended",
            "Transform phase Started",
            "Transform phase Ended",
            "Load phase Started",
            "Load phase Ended",
            "ETL Job Ended",
        ]
    );

    // The log is append-only: a second run adds eight more lines.
    metricize().arg(temp_dir.path()).assert().success();
    assert_eq!(log_messages(temp_dir.path()).len(), 16);
}

#[test]
fn log_timestamps_are_parseable() {
    let temp_dir = TempDir::new().unwrap();

    metricize().arg(temp_dir.path()).assert().success();

    let log = fs::read_to_string(temp_dir.path().join("log_file.txt")).unwrap();
    for line in log.lines() {
        let (timestamp, _) = line.split_once(',').unwrap();
        assert!(
            chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%b-%d-%H:%M:%S").is_ok(),
            "unparseable timestamp: {}",
            timestamp
        );
    }
}

#[test]
fn prior_output_file_is_not_re_ingested() {
    let temp_dir = TempDir::new().unwrap();
    write_mixed_sources(temp_dir.path());

    metricize().arg(temp_dir.path()).assert().success();
    metricize().arg(temp_dir.path()).assert().success();

    let output = fs::read_to_string(temp_dir.path().join("transformed_data.csv")).unwrap();
    assert_eq!(output.lines().count(), 7, "output rows must not accumulate");
}

#[test]
fn empty_directory_yields_header_only_output() {
    let temp_dir = TempDir::new().unwrap();

    metricize().arg(temp_dir.path()).assert().success();

    let output = fs::read_to_string(temp_dir.path().join("transformed_data.csv")).unwrap();
    assert_eq!(output.trim_end(), ",name,height,weight");
    assert_eq!(log_messages(temp_dir.path()).len(), 8);
}

#[test]
fn malformed_xml_aborts_with_no_output() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("broken.xml"),
        "<people><person><name>jack</name><height>68.7</height></person></people>",
    )
    .unwrap();

    metricize()
        .arg(temp_dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("broken.xml"));

    assert!(!temp_dir.path().join("transformed_data.csv").exists());

    let messages = log_messages(temp_dir.path());
    assert!(messages.contains(&"Extract phase Started".to_string()));
    assert!(!messages.contains(&"Extract phase Ended".to_string()));
}

#[test]
fn missing_directory_fails_before_any_output() {
    // The journal lives inside the scanned directory, so the very first
    // checkpoint write fails when the directory does not exist.
    metricize()
        .arg("/nonexistent/metricize/source/dir")
        .assert()
        .failure()
        .code(3);
}

#[test]
fn dry_run_discovers_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    write_mixed_sources(temp_dir.path());

    metricize()
        .arg(temp_dir.path())
        .arg("--dry-run")
        .arg("--output-format")
        .arg("plain")
        .assert()
        .success()
        .stdout(predicate::str::contains("source1.csv"));

    assert!(!temp_dir.path().join("transformed_data.csv").exists());
    assert!(!temp_dir.path().join("log_file.txt").exists());
}

#[test]
fn json_output_mode_emits_report() {
    let temp_dir = TempDir::new().unwrap();
    write_mixed_sources(temp_dir.path());

    metricize()
        .arg(temp_dir.path())
        .arg("--output-format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rows_extracted\": 6"));
}

#[test]
fn custom_output_and_log_names() {
    let temp_dir = TempDir::new().unwrap();
    write_mixed_sources(temp_dir.path());

    metricize()
        .arg(temp_dir.path())
        .arg("--output")
        .arg("merged.csv")
        .arg("--log-file")
        .arg("etl.log")
        .assert()
        .success();

    assert!(temp_dir.path().join("merged.csv").exists());
    assert!(temp_dir.path().join("etl.log").exists());
    assert!(!temp_dir.path().join("transformed_data.csv").exists());
    assert!(!temp_dir.path().join("log_file.txt").exists());
}

#[test]
fn generate_config_writes_sample() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("metricize.toml");

    metricize()
        .arg("--generate-config")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated sample configuration"));

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("transformed_data.csv"));
    assert!(content.contains("log_file.txt"));
}
