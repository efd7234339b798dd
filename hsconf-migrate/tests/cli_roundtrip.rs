use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn run_migrate(input: &std::path::Path, output: &std::path::Path) {
    let output_run = Command::new(assert_cmd::cargo::cargo_bin!("hsconf-migrate"))
        .arg(input)
        .arg(output)
        .output()
        .expect("command output");
    assert!(
        output_run.status.success(),
        "migration failed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output_run.stdout),
        String::from_utf8_lossy(&output_run.stderr)
    );
}

#[test]
fn second_pass_over_migrated_output_changes_nothing() {
    let dir = tempdir().expect("tempdir");
    let first = dir.path().join("first.yaml");
    let second = dir.path().join("second.yaml");

    run_migrate(&fixture("fixtures/legacy-sqlite.yaml"), &first);
    run_migrate(&first, &second);

    let first_text = fs::read_to_string(&first).expect("read first");
    let second_text = fs::read_to_string(&second).expect("read second");
    assert_eq!(first_text, second_text);
}

#[test]
fn document_without_legacy_keys_round_trips_unchanged() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("modern.yaml");
    let first = dir.path().join("first.yaml");
    let second = dir.path().join("second.yaml");

    fs::write(
        &input,
        concat!(
            "server_url: https://hs.example.net\n",
            "listen_addr: 0.0.0.0:8080\n",
            "noise:\n",
            "  private_key_path: /var/lib/headscale/noise.key\n",
        ),
    )
    .expect("write input");

    run_migrate(&input, &first);
    run_migrate(&first, &second);

    let first_doc = yaml_doc_core::parse(&fs::read_to_string(&first).expect("read first"))
        .expect("parse first");
    // Only the unconditional database section is added on the first pass.
    assert_eq!(first_doc["server_url"].as_str(), Some("https://hs.example.net"));
    assert_eq!(first_doc["database"]["type"].as_str(), Some("sqlite"));

    let first_text = fs::read_to_string(&first).expect("read first");
    let second_text = fs::read_to_string(&second).expect("read second");
    assert_eq!(first_text, second_text);
}
