use crate::common::command::{repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::add(&["add", "a.txt"])]
#[case::commit(&["commit", "-m", "first"])]
#[case::log(&["log"])]
#[case::branch(&["branch", "feature"])]
#[case::checkout(&["checkout", "feature"])]
#[case::merge(&["merge", "feature"])]
fn commands_outside_a_repository_fail(repository_dir: TempDir, #[case] args: &[&str]) {
    let dir = repository_dir;

    run_minigit_command(dir.path(), args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a minigit repository"));
}
