use crate::common::command::{
    init_repository_dir, minigit_commit, read_ref, run_minigit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn log_prints_history_from_head(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    write_file(FileSpec::new(
        dir.path().join("a.txt"),
        "hello\n".to_string(),
    ));
    run_minigit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    minigit_commit(dir.path(), "first").assert().success();
    let commit_fingerprint = read_ref(dir.path(), "master");

    let output = run_minigit_command(dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "commit {}",
            commit_fingerprint
        )))
        .stdout(predicate::str::is_match(
            r"Date:   \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}",
        )?)
        .stdout(predicate::str::contains("    first"));

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    assert_eq!(
        stdout.matches("commit ").count(),
        1,
        "one commit in the history prints one log entry"
    );

    Ok(())
}
