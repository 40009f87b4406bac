use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

pub fn run_minigit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("minigit").expect("Failed to find minigit binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn minigit_commit(dir: &Path, message: &str) -> Command {
    run_minigit_command(dir, &["commit", "-m", message])
}

/// Read a branch ref file, trimmed to the bare fingerprint
pub fn read_ref(dir: &Path, branch: &str) -> String {
    let ref_path = dir.join(".minigit").join("refs").join("heads").join(branch);
    std::fs::read_to_string(&ref_path)
        .unwrap_or_else(|e| panic!("Failed to read ref {:?}: {}", ref_path, e))
        .trim()
        .to_string()
}

/// Read the HEAD file, trimmed
pub fn read_head(dir: &Path) -> String {
    std::fs::read_to_string(dir.join(".minigit").join("HEAD"))
        .expect("Failed to read HEAD")
        .trim()
        .to_string()
}

/// Read the index file as-is
pub fn read_index(dir: &Path) -> String {
    std::fs::read_to_string(dir.join(".minigit").join("index")).expect("Failed to read index")
}

/// Read a stored object's bytes as text by its fingerprint
pub fn read_object(dir: &Path, oid: &str) -> String {
    std::fs::read_to_string(object_path(dir, oid))
        .unwrap_or_else(|e| panic!("Failed to read object {}: {}", oid, e))
}

pub fn object_exists(dir: &Path, oid: &str) -> bool {
    object_path(dir, oid).exists()
}

fn object_path(dir: &Path, oid: &str) -> std::path::PathBuf {
    let (shard, rest) = oid.split_at(2);
    dir.join(".minigit").join("objects").join(shard).join(rest)
}

pub fn assert_is_fingerprint(candidate: &str) {
    assert_eq!(candidate.len(), 40, "Invalid fingerprint: {}", candidate);
    assert!(
        candidate
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
        "Invalid fingerprint: {}",
        candidate
    );
}
