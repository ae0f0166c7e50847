use crate::common::command::{
    gitlet_add, gitlet_commit, init_repository_dir, log_commit_ids, run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_with_conflicts(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let path = init_repository_dir.path();
    run_gitlet_command(path, &["branch", "dev"]).assert().success();

    write_file(FileSpec::new(path.join("1.txt"), "master line\n".to_string()));
    gitlet_add(path, "1.txt").assert().success();
    run_gitlet_command(path, &["rm", "a/2.txt"])
        .assert()
        .success();
    gitlet_commit(path, "Master edits").assert().success();

    run_gitlet_command(path, &["checkout", "dev"])
        .assert()
        .success();
    write_file(FileSpec::new(path.join("1.txt"), "dev line\n".to_string()));
    write_file(FileSpec::new(path.join("a").join("2.txt"), "dev two\n".to_string()));
    gitlet_add(path, "1.txt").assert().success();
    gitlet_add(path, "a/2.txt").assert().success();
    gitlet_commit(path, "Dev edits").assert().success();

    run_gitlet_command(path, &["checkout", "master"])
        .assert()
        .success();
    let commits_before = log_commit_ids(path)?.len();

    run_gitlet_command(path, &["merge", "dev"])
        .assert()
        .success()
        .stdout(predicate::eq("Encountered a merge conflict.\n"));

    assert_eq!(
        read_file(&path.join("1.txt")),
        "<<<<<<< HEAD\nmaster line\n=======\ndev line\n>>>>>>>"
    );
    assert_eq!(
        read_file(&path.join("a").join("2.txt")),
        "<<<<<<< HEAD\n=======\ndev two\n>>>>>>>"
    );
    assert_eq!(log_commit_ids(path)?.len(), commits_before + 1);

    Ok(())
}
