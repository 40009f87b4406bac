use crate::common::command::{
    assert_is_fingerprint, init_repository_dir, object_exists, read_index, read_object,
    run_minigit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn stage_single_file_successfully(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    write_file(FileSpec::new(
        dir.path().join("a.txt"),
        "hello\n".to_string(),
    ));

    run_minigit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    let index = read_index(dir.path());
    let (path, fingerprint) = index
        .trim()
        .split_once(' ')
        .expect("index entry should hold path and fingerprint");

    assert_eq!(path, "a.txt");
    assert_is_fingerprint(fingerprint);
    assert!(object_exists(dir.path(), fingerprint));
    assert_eq!(read_object(dir.path(), fingerprint), "hello\n");
}
