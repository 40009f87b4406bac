use crate::common::command::{repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;

    run_minigit_command(dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty minigit repository in .+\n$",
        )?);

    let root = dir.path().join(".minigit");
    assert!(root.join("objects").is_dir());
    assert!(root.join("refs").join("heads").is_dir());

    let head = std::fs::read_to_string(root.join("HEAD"))?;
    assert_eq!(head, "ref: refs/heads/master\n");

    let master = std::fs::read_to_string(root.join("refs").join("heads").join("master"))?;
    assert_eq!(master, "");

    let index = std::fs::read_to_string(root.join("index"))?;
    assert_eq!(index, "");

    Ok(())
}
