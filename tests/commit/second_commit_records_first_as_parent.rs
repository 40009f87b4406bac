use crate::common::command::{
    init_repository_dir, minigit_commit, read_object, read_ref, run_minigit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn second_commit_records_first_as_parent(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    write_file(FileSpec::new(
        dir.path().join("a.txt"),
        "hello\n".to_string(),
    ));
    run_minigit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    minigit_commit(dir.path(), "first").assert().success();
    let first_fingerprint = read_ref(dir.path(), "master");

    write_file(FileSpec::new(
        dir.path().join("a.txt"),
        "hello2\n".to_string(),
    ));
    run_minigit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    minigit_commit(dir.path(), "second").assert().success();
    let second_fingerprint = read_ref(dir.path(), "master");

    assert_ne!(first_fingerprint, second_fingerprint);

    let commit_object = read_object(dir.path(), &second_fingerprint);
    assert!(commit_object.contains(&format!("parent {}", first_fingerprint)));
    assert_eq!(
        commit_object.matches("parent ").count(),
        1,
        "a normal commit has exactly one parent"
    );
}
