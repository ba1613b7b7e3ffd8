use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

fn write_fixture(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("export.zip");
    let mut writer = zip::ZipWriter::new(File::create(&path).unwrap());
    writer
        .start_file("Watch History.txt", SimpleFileOptions::default())
        .unwrap();
    writer
        .write_all(
            b"Date: 2024-01-05 09:15:00\n\
              Link: https://www.tiktok.com/video/1111\n\
              Date: 2024-01-05 09:20:00\n\
              Link: https://www.tiktok.com/video/1111\n",
        )
        .unwrap();
    writer
        .start_file("Searches.txt", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"SearchTerm: cats\n").unwrap();
    writer.finish().unwrap();
    path
}

#[test]
fn test_report_pretty_output() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);

    Command::cargo_bin("tokmirror")
        .unwrap()
        .arg("report")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Signals Report"))
        .stdout(predicate::str::contains("Likely into cats"));
}

#[test]
fn test_report_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);

    Command::cargo_bin("tokmirror")
        .unwrap()
        .args(["report", "--format", "json"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("like_to_watch_ratio"))
        .stdout(predicate::str::contains("repeat_views"));
}

#[test]
fn test_searches_table_output() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);

    Command::cargo_bin("tokmirror")
        .unwrap()
        .args(["searches", "--format", "table"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("cats,1"));
}

#[test]
fn test_missing_archive_fails() {
    Command::cargo_bin("tokmirror")
        .unwrap()
        .args(["report", "/nonexistent/export.zip"])
        .assert()
        .failure();
}

#[test]
fn test_no_args_shows_usage() {
    Command::cargo_bin("tokmirror")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
