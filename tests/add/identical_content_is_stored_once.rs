use crate::common::command::{init_repository_dir, read_index, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashSet;

#[rstest]
fn identical_content_is_stored_once(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    write_file(FileSpec::new(
        dir.path().join("a.txt"),
        "same bytes\n".to_string(),
    ));
    write_file(FileSpec::new(
        dir.path().join("b.txt"),
        "same bytes\n".to_string(),
    ));

    run_minigit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    run_minigit_command(dir.path(), &["add", "b.txt"])
        .assert()
        .success();

    let index = read_index(dir.path());
    let fingerprints = index
        .lines()
        .map(|line| line.split_once(' ').unwrap().1)
        .collect::<HashSet<_>>();
    assert_eq!(fingerprints.len(), 1, "both paths share one blob");

    let stored_objects = count_objects(&dir.path().join(".minigit").join("objects"));
    assert_eq!(stored_objects, 1);
}

fn count_objects(objects_dir: &std::path::Path) -> usize {
    std::fs::read_dir(objects_dir)
        .expect("Failed to list objects directory")
        .filter_map(|shard| shard.ok())
        .flat_map(|shard| std::fs::read_dir(shard.path()).into_iter().flatten())
        .count()
}
