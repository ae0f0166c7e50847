use crate::common::command::{
    gitlet_add, gitlet_commit, gitlet_commit_at, init_repository_dir, log_commit_ids,
    repository_dir, run_gitlet_command, run_to_string,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_linear_history_newest_first(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_gitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let dates = [
        ("First", "2024-01-01 08:00:00 -0800"),
        ("Second", "2024-01-02 09:30:00 -0800"),
    ];
    for (index, (message, date)) in dates.iter().enumerate() {
        write_file(FileSpec::new(
            repository_dir.path().join("file.txt"),
            format!("version {}", index),
        ));
        gitlet_add(repository_dir.path(), "file.txt")
            .assert()
            .success();
        gitlet_commit_at(repository_dir.path(), message, date)
            .assert()
            .success();
    }

    let ids = log_commit_ids(repository_dir.path())?;
    let log = run_to_string(repository_dir.path(), &["log"])?;

    assert_eq!(ids.len(), 3);
    assert_eq!(
        log,
        format!(
            "===\ncommit {}\nDate: Tue Jan 2 09:30:00 2024 -0800\nSecond\n\n\
             ===\ncommit {}\nDate: Mon Jan 1 08:00:00 2024 -0800\nFirst\n\n\
             ===\ncommit {}\nDate: Thu Jan 1 00:00:00 1970 -0800\ninitial commit\n\n",
            ids[0], ids[1], ids[2]
        )
    );

    Ok(())
}

#[rstest]
fn log_follows_active_branch_only(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    run_gitlet_command(repository_dir.path(), &["branch", "dev"])
        .assert()
        .success();
    run_gitlet_command(repository_dir.path(), &["checkout", "dev"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("dev.txt"),
        "dev".to_string(),
    ));
    gitlet_add(repository_dir.path(), "dev.txt").assert().success();
    gitlet_commit(repository_dir.path(), "Dev work")
        .assert()
        .success();

    let dev_log = run_to_string(repository_dir.path(), &["log"])?;
    run_gitlet_command(repository_dir.path(), &["checkout", "master"])
        .assert()
        .success();
    let master_log = run_to_string(repository_dir.path(), &["log"])?;

    assert!(dev_log.contains("\nDev work\n"));
    assert!(!master_log.contains("\nDev work\n"));
    assert!(dev_log.ends_with(&master_log));

    Ok(())
}
