use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use walkdir::WalkDir;

fn site() -> TempDir {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("css")).unwrap();
    fs::write(tmp.path().join("css/style.css"), "p { margin: 0; }\n".repeat(128)).unwrap();
    fs::write(tmp.path().join("app.js"), "let a = 1;\n".repeat(200)).unwrap();
    fs::write(tmp.path().join("logo.png"), [9u8; 500]).unwrap();
    tmp
}

fn precomp() -> Command {
    let mut cmd = Command::cargo_bin("precomp").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("PRECOMP_EXTENSIONS")
        .env_remove("PRECOMP_JOBS");
    cmd
}

fn artifacts(tmp: &TempDir) -> Vec<String> {
    let mut out: Vec<_> = WalkDir::new(tmp.path())
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            let p = e.path().to_string_lossy();
            p.ends_with(".gz") || p.ends_with(".br")
        })
        .map(|e| {
            e.path()
                .strip_prefix(tmp.path())
                .unwrap()
                .to_string_lossy()
                .to_string()
        })
        .collect();
    out.sort();
    out
}

#[test]
fn zero_arguments_scans_working_directory() {
    let tmp = site();
    precomp()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Size(text files)"))
        .stdout(predicate::str::contains("Size(gzip files)"))
        .stdout(predicate::str::contains("Size(brotli files)"))
        .stdout(predicate::str::contains("css/style.css"))
        .stdout(predicate::str::contains("app.js"))
        .stdout(predicate::str::contains("logo.png").not());

    assert_eq!(
        artifacts(&tmp),
        vec!["app.js.br", "app.js.gz", "css/style.css.br", "css/style.css.gz"]
    );
}

#[test]
fn piped_output_has_no_color() {
    let tmp = site();
    precomp()
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn no_color_env_disables_auto_color() {
    let tmp = site();
    precomp()
        .env("NO_COLOR", "1")
        .arg(tmp.path())
        .args(["--color", "auto", "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Size(text files)"))
        .stdout(predicate::str::contains("\u{1b}[").not());

    // an explicit `always` still wins over NO_COLOR
    precomp()
        .env("NO_COLOR", "1")
        .arg(tmp.path())
        .args(["--color", "always", "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}

#[test]
fn json_report() {
    let tmp = site();
    let out = precomp()
        .arg(tmp.path())
        .args(["--format", "json", "-j", "2"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["files"].as_array().unwrap().len(), 2);
    assert_eq!(v["stages"][0]["algorithm"], "gzip");
    assert_eq!(v["stages"][1]["algorithm"], "brotli");
    assert_eq!(v["stages"][0]["delta"]["trend"], "shrank");
}

#[test]
fn extension_and_algorithm_flags() {
    let tmp = site();
    precomp()
        .arg(tmp.path())
        .args(["--ext", "js", "--algorithm", "gzip", "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Size(brotli files)").not());
    assert_eq!(artifacts(&tmp), vec!["app.js.gz"]);
}

#[test]
fn clean_removes_artifacts() {
    let tmp = site();
    precomp().arg(tmp.path()).assert().success();
    assert_eq!(artifacts(&tmp).len(), 4);

    precomp()
        .arg(tmp.path())
        .arg("--clean")
        .assert()
        .success()
        .stderr(predicate::str::contains("4 artifact(s) removed"));
    assert!(artifacts(&tmp).is_empty());
    assert!(tmp.path().join("app.js").exists());
}

#[test]
fn missing_root_fails() {
    let tmp = tempfile::tempdir().unwrap();
    precomp()
        .arg(tmp.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("root is not a directory"));
}
