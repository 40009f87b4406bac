use crate::common::command::{init_repository_dir, minigit_commit, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn merge_unknown_branch_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    write_file(FileSpec::new(dir.path().join("a.txt"), "1\n".to_string()));
    run_minigit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    minigit_commit(dir.path(), "first").assert().success();

    run_minigit_command(dir.path(), &["merge", "no-such-branch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "neither a branch nor a commit fingerprint",
        ));
}
