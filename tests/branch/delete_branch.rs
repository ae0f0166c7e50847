use crate::common::command::{init_repository_dir, run_gitlet_command, run_to_string};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn delete_branch(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let path = init_repository_dir.path();
    run_gitlet_command(path, &["branch", "dev"]).assert().success();

    run_gitlet_command(path, &["rm-branch", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let status = run_to_string(path, &["status"])?;
    assert!(status.starts_with("=== Branches ===\n*master\n\n"));

    run_gitlet_command(path, &["checkout", "dev"])
        .assert()
        .success()
        .stdout(predicate::eq("No such branch exists.\n"));

    Ok(())
}

#[rstest]
fn delete_branch_keeps_its_commits(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = init_repository_dir.path();
    let before = run_to_string(path, &["global-log"])?;
    run_gitlet_command(path, &["branch", "dev"]).assert().success();

    run_gitlet_command(path, &["rm-branch", "dev"])
        .assert()
        .success();

    assert_eq!(run_to_string(path, &["global-log"])?, before);

    Ok(())
}

#[rstest]
fn delete_missing_branch(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["rm-branch", "ghost"])
        .assert()
        .success()
        .stdout(predicate::eq("A branch with that name does not exist.\n"));
}

#[rstest]
fn delete_branch_with_malformed_name(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["rm-branch", "bad name"])
        .assert()
        .success()
        .stdout(predicate::eq("A branch with that name does not exist.\n"));
}

#[rstest]
fn delete_active_branch(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["rm-branch", "master"])
        .assert()
        .success()
        .stdout(predicate::eq("Cannot remove the current branch.\n"));
}
