use crate::common::command::{init_repository_dir, minigit_commit, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn create_duplicate_branch_fails(init_repository_dir: TempDir) {
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

    run_minigit_command(dir.path(), &["branch", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
