use crate::common::command::{init_repository_dir, minigit_commit, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;

/// Paths are flat strings but may contain separators; materialization
/// recreates the parent directories and restores byte-identical content.
#[rstest]
fn checkout_restores_nested_paths(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    write_file(FileSpec::new(
        dir.path().join("docs").join("readme.md"),
        "# notes\n\nsome body\n".to_string(),
    ));
    run_minigit_command(dir.path(), &["add", "docs/readme.md"])
        .assert()
        .success();
    minigit_commit(dir.path(), "add docs").assert().success();

    run_minigit_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    write_file(FileSpec::new(
        dir.path().join("docs").join("readme.md"),
        "# rewritten\n".to_string(),
    ));
    run_minigit_command(dir.path(), &["add", "docs/readme.md"])
        .assert()
        .success();
    minigit_commit(dir.path(), "rewrite docs").assert().success();

    run_minigit_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("docs").join("readme.md")).unwrap(),
        "# notes\n\nsome body\n"
    );
}
