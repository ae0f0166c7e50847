use crate::common::command::{init_repository_dir, repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reject_existing_repository(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "A Gitlet version-control system already exists in the current directory.\n",
        ));
}

#[rstest]
#[case(&["status"])]
#[case(&["log"])]
#[case(&["add", "1.txt"])]
#[case(&["branch", "dev"])]
fn commands_outside_repository_are_rejected(repository_dir: TempDir, #[case] args: &[&str]) {
    run_gitlet_command(repository_dir.path(), args)
        .assert()
        .success()
        .stdout(predicate::eq("Not in an initialized Gitlet directory.\n"));
}
