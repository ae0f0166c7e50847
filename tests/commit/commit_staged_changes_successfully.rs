use crate::common::command::{
    gitlet_add, gitlet_commit, gitlet_commit_at, init_repository_dir, log_commit_ids,
    run_gitlet_command, run_to_string,
};
use crate::common::file::{FileSpec, delete_path, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_staged_changes_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let before = log_commit_ids(repository_dir.path())?;

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "changed".to_string(),
    ));
    gitlet_add(repository_dir.path(), "1.txt").assert().success();
    gitlet_commit_at(
        repository_dir.path(),
        "Change one",
        "Tue, 5 Mar 2024 10:20:30 -0800",
    )
    .assert()
    .success()
    .stdout(predicates::str::is_empty());

    let after = log_commit_ids(repository_dir.path())?;
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[1..], &before[..]);

    let log = run_to_string(repository_dir.path(), &["log"])?;
    assert!(log.starts_with(&format!(
        "===\ncommit {}\nDate: Tue Mar 5 10:20:30 2024 -0800\nChange one\n\n",
        after[0]
    )));

    let status = run_to_string(repository_dir.path(), &["status"])?;
    assert!(status.contains("=== Staged Files ===\n\n"));

    Ok(())
}

#[rstest]
fn committed_snapshot_restores_old_content(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let file = repository_dir.path().join("1.txt");

    write_file(FileSpec::new(file.clone(), "version two".to_string()));
    gitlet_add(repository_dir.path(), "1.txt").assert().success();
    gitlet_commit(repository_dir.path(), "Version two")
        .assert()
        .success();
    delete_path(&file);

    run_gitlet_command(repository_dir.path(), &["checkout", "--", "1.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&file), "version two");

    Ok(())
}

#[rstest]
fn committing_a_removal_untracks_the_file(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    run_gitlet_command(repository_dir.path(), &["rm", "a/2.txt"])
        .assert()
        .success();
    gitlet_commit(repository_dir.path(), "Remove two")
        .assert()
        .success();

    run_gitlet_command(repository_dir.path(), &["checkout", "--", "a/2.txt"])
        .assert()
        .success()
        .stdout(predicates::prelude::predicate::eq("File does not exist in that commit.\n"));

    Ok(())
}
