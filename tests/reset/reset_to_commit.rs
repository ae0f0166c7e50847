use crate::common::command::{
    gitlet_add, gitlet_commit, head_commit_id, init_repository_dir, log_commit_ids,
    run_gitlet_command, run_to_string,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reset_to_earlier_commit(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let path = init_repository_dir.path();
    let target = head_commit_id(path)?;

    write_file(FileSpec::new(path.join("1.txt"), "later".to_string()));
    write_file(FileSpec::new(path.join("later.txt"), "later".to_string()));
    gitlet_add(path, "1.txt").assert().success();
    gitlet_add(path, "later.txt").assert().success();
    gitlet_commit(path, "Later").assert().success();
    write_file(FileSpec::new(path.join("staged.txt"), "staged".to_string()));
    gitlet_add(path, "staged.txt").assert().success();

    run_gitlet_command(path, &["reset", &target[..10]])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(head_commit_id(path)?, target);
    assert_eq!(log_commit_ids(path)?.len(), 2);
    assert_eq!(read_file(&path.join("1.txt")), "one");
    assert!(!path.join("later.txt").exists());
    assert!(!path.join("staged.txt").exists());

    let status = run_to_string(path, &["status"])?;
    assert!(status.contains("=== Staged Files ===\n\n"));
    assert!(status.contains("=== Untracked Files ===\n\n"));

    Ok(())
}

#[rstest]
fn reset_to_commit_on_other_branch_switches_branch(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = init_repository_dir.path();
    run_gitlet_command(path, &["branch", "dev"]).assert().success();
    run_gitlet_command(path, &["checkout", "dev"])
        .assert()
        .success();
    write_file(FileSpec::new(path.join("dev.txt"), "dev".to_string()));
    gitlet_add(path, "dev.txt").assert().success();
    gitlet_commit(path, "Dev work").assert().success();
    let dev_commit = head_commit_id(path)?;
    run_gitlet_command(path, &["checkout", "master"])
        .assert()
        .success();

    run_gitlet_command(path, &["reset", &dev_commit])
        .assert()
        .success();

    let status = run_to_string(path, &["status"])?;
    assert!(status.starts_with("=== Branches ===\n*dev\nmaster\n\n"));
    assert_eq!(read_file(&path.join("dev.txt")), "dev");

    Ok(())
}

#[rstest]
fn reset_to_unknown_commit(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["reset", "abcdef0"])
        .assert()
        .success()
        .stdout(predicate::eq("No commit with that id exists.\n"));
}

#[rstest]
fn untracked_file_blocks_reset_that_would_overwrite_it(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = init_repository_dir.path();
    let target = head_commit_id(path)?;
    run_gitlet_command(path, &["rm", "1.txt"]).assert().success();
    gitlet_commit(path, "Drop 1.txt").assert().success();
    let head = head_commit_id(path)?;
    write_file(FileSpec::new(path.join("1.txt"), "unsaved".to_string()));

    run_gitlet_command(path, &["reset", &target])
        .assert()
        .success()
        .stdout(predicate::eq(
            "There is an untracked file in the way; delete it, or add and commit it first.\n",
        ));

    assert_eq!(read_file(&path.join("1.txt")), "unsaved");
    assert_eq!(head_commit_id(path)?, head);

    Ok(())
}

#[rstest]
fn reset_deletes_untracked_files_the_commit_does_not_track(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = init_repository_dir.path();
    let root = log_commit_ids(path)?
        .pop()
        .ok_or("missing root commit")?;
    write_file(FileSpec::new(path.join("stray.txt"), "stray".to_string()));

    run_gitlet_command(path, &["reset", &root])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(head_commit_id(path)?, root);
    assert!(!path.join("stray.txt").exists());
    assert!(!path.join("1.txt").exists());

    Ok(())
}
