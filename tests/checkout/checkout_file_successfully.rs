use crate::common::command::{
    gitlet_add, gitlet_commit, head_commit_id, init_repository_dir, run_gitlet_command,
    run_to_string,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn restore_file_from_head_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = init_repository_dir.path();
    let file = path.join("1.txt");
    write_file(FileSpec::new(file.clone(), "scribbles".to_string()));
    gitlet_add(path, "1.txt").assert().success();

    run_gitlet_command(path, &["checkout", "--", "1.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(read_file(&file), "one");
    // the staged version is left alone
    let status = run_to_string(path, &["status"])?;
    assert!(status.contains("=== Staged Files ===\n1.txt\n\n"));

    Ok(())
}

#[rstest]
#[case::full_id(40)]
#[case::abbreviated_id(8)]
fn restore_file_from_older_commit(
    init_repository_dir: TempDir,
    #[case] id_length: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = init_repository_dir.path();
    let old_commit = head_commit_id(path)?;
    let file = path.join("a").join("2.txt");

    write_file(FileSpec::new(file.clone(), "two, revised".to_string()));
    gitlet_add(path, "a/2.txt").assert().success();
    gitlet_commit(path, "Revise two").assert().success();

    run_gitlet_command(path, &["checkout", &old_commit[..id_length], "--", "a/2.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&file), "two");

    Ok(())
}

#[rstest]
fn restore_file_missing_from_commit(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["checkout", "--", "nope.txt"])
        .assert()
        .success()
        .stdout(predicate::eq("File does not exist in that commit.\n"));
}

#[rstest]
#[case("0000000")]
#[case("not-hex")]
fn restore_file_from_unknown_commit(init_repository_dir: TempDir, #[case] commit_id: &str) {
    run_gitlet_command(
        init_repository_dir.path(),
        &["checkout", commit_id, "--", "1.txt"],
    )
    .assert()
    .success()
    .stdout(predicate::eq("No commit with that id exists.\n"));
}
