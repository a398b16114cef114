use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn seqbr(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_seqbr"))
        .args(args)
        .current_dir(dir)
        .env_remove("SEQBR_SEED")
        .env_remove("SEQBR_QUIET")
        .output()
        .unwrap()
}

#[test]
fn writes_c_fixture_into_working_dir() {
    let tmp = tempdir().unwrap();
    let out = seqbr(tmp.path(), &["c", "2", "safe"]);
    assert!(out.status.success());

    let text = fs::read_to_string(tmp.path().join("test_seq_br_safe_2.c")).unwrap();
    assert!(text.contains("\tif (c1) {\n\t\tr += 1;\n\t}\n"));
    assert!(text.contains("\tif (c2) {\n\t\tr += 2;\n\t}\n"));
    assert!(text.contains("\treturn test(c1, c2);\n"));
}

#[test]
fn rust_fixture_is_reproducible() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("test_seq_br_unsafe_10.rs");

    assert!(seqbr(tmp.path(), &["rust", "10", "unsafe"]).status.success());
    let first = fs::read(&file).unwrap();

    let again = seqbr(tmp.path(), &["rust", "10", "unsafe"]);
    assert!(again.status.success());
    assert!(String::from_utf8_lossy(&again.stderr).contains("replaced existing"));
    assert_eq!(first, fs::read(&file).unwrap());
}

#[test]
fn first_write_does_not_warn() {
    let tmp = tempdir().unwrap();
    let out = seqbr(tmp.path(), &["c", "1", "unsafe"]);

    assert!(out.status.success());
    assert!(!String::from_utf8_lossy(&out.stderr).contains("replaced existing"));
}

#[test]
fn negative_count_fails_without_output() {
    let tmp = tempdir().unwrap();
    let out = seqbr(tmp.path(), &["c", "-1", "unsafe"]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("non-negative"));
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn unknown_language_is_a_usage_error() {
    let tmp = tempdir().unwrap();
    let out = seqbr(tmp.path(), &["python", "3", "safe"]);

    assert!(!out.status.success());
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn json_report_names_witness() {
    let tmp = tempdir().unwrap();
    let out = seqbr(tmp.path(), &["c", "3", "unsafe", "--json", "--out-dir", "gen"]);
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["branches"], 3);
    assert_eq!(v["min_total"], -4);
    assert_eq!(v["witness"], serde_json::json!([true, false, true]));
    assert!(tmp.path().join("gen").join("test_seq_br_unsafe_3.c").is_file());
}

#[test]
fn working_dir_is_removed_when_a_run_panics() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().to_path_buf();

    let result = panic::catch_unwind(AssertUnwindSafe(move || {
        let tmp = tmp;
        assert!(seqbr(tmp.path(), &["c", "2", "safe"]).status.success());
        panic!("failing after the fixture was written");
    }));

    assert!(result.is_err());
    assert!(!root.exists());
}
