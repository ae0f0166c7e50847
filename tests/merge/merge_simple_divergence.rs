use crate::common::command::{
    gitlet_add, gitlet_commit, head_commit_id, init_repository_dir, log_commit_ids,
    run_gitlet_command, run_to_string,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

fn commit_file(path: &Path, name: &str, content: &str, message: &str) {
    write_file(FileSpec::new(path.join(name), content.to_string()));
    gitlet_add(path, name).assert().success();
    gitlet_commit(path, message).assert().success();
}

#[rstest]
fn merge_simple_divergence(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let path = init_repository_dir.path();
    run_gitlet_command(path, &["branch", "dev"]).assert().success();

    commit_file(path, "master.txt", "master", "Master work");
    let master_head = head_commit_id(path)?;

    run_gitlet_command(path, &["checkout", "dev"])
        .assert()
        .success();
    commit_file(path, "1.txt", "one from dev", "Dev edits one");
    run_gitlet_command(path, &["rm", "a/2.txt"])
        .assert()
        .success();
    gitlet_commit(path, "Dev removes two").assert().success();
    let dev_head = head_commit_id(path)?;

    run_gitlet_command(path, &["checkout", "master"])
        .assert()
        .success();
    run_gitlet_command(path, &["merge", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(read_file(&path.join("1.txt")), "one from dev");
    assert_eq!(read_file(&path.join("master.txt")), "master");
    assert!(!path.join("a").join("2.txt").exists());

    let log = run_to_string(path, &["log"])?;
    let merge_id = head_commit_id(path)?;
    assert!(log.starts_with(&format!(
        "===\ncommit {}\nMerge: {} {}\n",
        merge_id,
        &master_head[..7],
        &dev_head[..7]
    )));
    assert!(log.contains("\nMerged dev into master.\n"));
    assert_eq!(log_commit_ids(path)?[1], master_head);

    let status = run_to_string(path, &["status"])?;
    assert!(status.contains("=== Staged Files ===\n\n=== Removed Files ===\n\n"));

    Ok(())
}

#[rstest]
fn merge_fast_forwards_to_descendant(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = init_repository_dir.path();
    run_gitlet_command(path, &["branch", "dev"]).assert().success();
    run_gitlet_command(path, &["checkout", "dev"])
        .assert()
        .success();
    commit_file(path, "dev.txt", "dev", "Dev ahead");
    let dev_head = head_commit_id(path)?;
    run_gitlet_command(path, &["checkout", "master"])
        .assert()
        .success();

    run_gitlet_command(path, &["merge", "dev"])
        .assert()
        .success()
        .stdout(predicate::eq("Current branch fast-forwarded.\n"));

    assert_eq!(head_commit_id(path)?, dev_head);
    assert_eq!(read_file(&path.join("dev.txt")), "dev");
    let status = run_to_string(path, &["status"])?;
    assert!(status.starts_with("=== Branches ===\ndev\n*master\n\n"));

    Ok(())
}

#[rstest]
fn merge_ancestor_branch_does_nothing(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = init_repository_dir.path();
    run_gitlet_command(path, &["branch", "old"]).assert().success();
    commit_file(path, "new.txt", "new", "Newer");
    let head = head_commit_id(path)?;

    run_gitlet_command(path, &["merge", "old"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "Given branch is an ancestor of the current branch.\n",
        ));

    assert_eq!(head_commit_id(path)?, head);

    Ok(())
}
