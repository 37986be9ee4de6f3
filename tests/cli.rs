use std::fs;
use std::path::Path;

use assert_cmd::Command;

fn slpa() -> Command {
    Command::cargo_bin("slpa").unwrap()
}

fn write_edge_file(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_no_args_prints_usage_and_fails() {
    let output = slpa().output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_help_exits_zero() {
    let output = slpa().arg("--help").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}

#[test]
fn test_rejects_non_numeric_iterations() {
    let output = slpa()
        .args(["in.txt", "out.txt", "many", "0.1"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
    assert!(stderr.contains("num_iterations"));
}

#[test]
fn test_rejects_non_numeric_threshold() {
    let output = slpa()
        .args(["in.txt", "out.txt", "5", "high"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
    assert!(stderr.contains("threshold"));
}

#[test]
fn test_rejects_negative_iterations() {
    let output = slpa()
        .args(["in.txt", "out.txt", "-3", "0.1"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_rejects_out_of_range_threshold() {
    let output = slpa()
        .args(["in.txt", "out.txt", "5", "0.9"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("threshold"));
}

#[test]
fn test_missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("out.txt");
    let output = slpa()
        .args(["no_such_file.txt", out_path.to_str().unwrap(), "5", "0.1"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot load edge list"));
}

#[test]
fn test_malformed_edge_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let in_path = write_edge_file(dir.path(), "edges.txt", "src dst\n1 2\n3 oops\n");
    let out_path = dir.path().join("out.txt");
    let output = slpa()
        .args([in_path.as_str(), out_path.to_str().unwrap(), "5", "0.1"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("malformed edge at line 3"));
}

#[test]
fn test_zero_rounds_yield_singletons() {
    let dir = tempfile::tempdir().unwrap();
    let in_path = write_edge_file(dir.path(), "path.txt", "src dst\n1 2\n2 3\n3 4\n");
    let out_path = dir.path().join("communities.txt");
    let output = slpa()
        .args([in_path.as_str(), out_path.to_str().unwrap(), "0", "0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Label Propagation Complete"));
    assert!(stdout.contains("4 different communities identified"));

    let written = fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines, vec!["1", "2", "3", "4"]);
}

#[test]
fn test_seeded_clique_run() {
    let dir = tempfile::tempdir().unwrap();
    let in_path = write_edge_file(
        dir.path(),
        "clique.txt",
        "src dst\n1 2\n1 3\n1 4\n2 3\n2 4\n3 4\n",
    );
    let out_path = dir.path().join("communities.txt");
    let output = slpa()
        .args([in_path.as_str(), out_path.to_str().unwrap(), "5", "0", "--seed", "7"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let written = fs::read_to_string(&out_path).unwrap();
    let line_count = written.lines().count();
    assert!(line_count >= 1 && line_count <= 4);
    for vertex in ["1", "2", "3", "4"] {
        assert!(written.split_whitespace().any(|token| token == vertex));
    }
}

#[test]
fn test_same_seed_same_output() {
    let dir = tempfile::tempdir().unwrap();
    let in_path = write_edge_file(
        dir.path(),
        "graph.txt",
        "src dst\n1 2\n2 3\n3 1\n3 4\n4 5\n5 6\n6 4\n",
    );
    let first_path = dir.path().join("first.txt");
    let second_path = dir.path().join("second.txt");

    for out in [&first_path, &second_path] {
        let output = slpa()
            .args([in_path.as_str(), out.to_str().unwrap(), "10", "0.2", "--seed", "99"])
            .output()
            .unwrap();
        assert!(output.status.success());
    }
    assert_eq!(
        fs::read_to_string(&first_path).unwrap(),
        fs::read_to_string(&second_path).unwrap()
    );
}
