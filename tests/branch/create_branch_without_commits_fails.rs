use crate::common::command::{init_repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn create_branch_without_commits_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_minigit_command(dir.path(), &["branch", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no commits yet"));

    assert!(
        !dir.path()
            .join(".minigit")
            .join("refs")
            .join("heads")
            .join("feature")
            .exists()
    );
}
