use crate::common::command::{init_repository_dir, minigit_commit, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::not_a_ref("no-such-branch")]
#[case::unknown_fingerprint("0123456789abcdef0123456789abcdef01234567")]
#[case::fingerprint_prefix("0123456")]
fn checkout_unknown_target_fails(init_repository_dir: TempDir, #[case] target: &str) {
    let dir = init_repository_dir;
    write_file(FileSpec::new(
        dir.path().join("a.txt"),
        "hello\n".to_string(),
    ));
    run_minigit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    minigit_commit(dir.path(), "first").assert().success();

    run_minigit_command(dir.path(), &["checkout", target])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "neither a branch nor a commit fingerprint",
        ));
}
