use crate::common::command::{init_repository_dir, minigit_commit, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;

/// Checkout follows the clean-and-restore policy: every working-tree entry
/// except the repository directory is removed before materialization, so
/// untracked files do not survive a switch.
#[rstest]
fn checkout_removes_untracked_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    write_file(FileSpec::new(
        dir.path().join("a.txt"),
        "hello\n".to_string(),
    ));
    run_minigit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    minigit_commit(dir.path(), "first").assert().success();

    run_minigit_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    write_file(FileSpec::new(
        dir.path().join("untracked.txt"),
        "scratch\n".to_string(),
    ));
    write_file(FileSpec::new(
        dir.path().join("scratch").join("nested.txt"),
        "scratch\n".to_string(),
    ));

    run_minigit_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success();

    assert!(!dir.path().join("untracked.txt").exists());
    assert!(!dir.path().join("scratch").exists());
    assert_eq!(
        fs::read_to_string(dir.path().join("a.txt")).unwrap(),
        "hello\n"
    );
    assert!(dir.path().join(".minigit").is_dir());
}
