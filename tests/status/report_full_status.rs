use crate::common::command::{gitlet_add, init_repository_dir, run_gitlet_command, run_to_string};
use crate::common::file::{FileSpec, delete_path, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_clean_status(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let status = run_to_string(init_repository_dir.path(), &["status"])?;

    assert_eq!(
        status,
        "=== Branches ===\n*master\n\n\
         === Staged Files ===\n\n\
         === Removed Files ===\n\n\
         === Modifications Not Staged For Commit ===\n\n\
         === Untracked Files ===\n\n"
    );

    Ok(())
}

#[rstest]
fn report_every_section(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let path = repository_dir.path();

    run_gitlet_command(path, &["branch", "other-branch"])
        .assert()
        .success();

    write_file(FileSpec::new(path.join("staged.txt"), "staged".to_string()));
    gitlet_add(path, "staged.txt").assert().success();

    write_file(FileSpec::new(path.join("edited.txt"), "v1".to_string()));
    gitlet_add(path, "edited.txt").assert().success();
    write_file(FileSpec::new(path.join("edited.txt"), "v2".to_string()));

    write_file(FileSpec::new(path.join("vanished.txt"), "gone".to_string()));
    gitlet_add(path, "vanished.txt").assert().success();
    delete_path(&path.join("vanished.txt"));

    run_gitlet_command(path, &["rm", "1.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(path.join("a").join("2.txt"), "changed".to_string()));
    write_file(FileSpec::new(path.join("random.stuff"), "?".to_string()));

    let status = run_to_string(path, &["status"])?;

    assert_eq!(
        status,
        "=== Branches ===\n*master\nother-branch\n\n\
         === Staged Files ===\nedited.txt\nstaged.txt\nvanished.txt\n\n\
         === Removed Files ===\n1.txt\n\n\
         === Modifications Not Staged For Commit ===\n\
         a/2.txt (modified)\n\
         edited.txt (modified)\n\
         vanished.txt (deleted)\n\n\
         === Untracked Files ===\nrandom.stuff\n\n"
    );

    Ok(())
}

#[rstest]
fn active_branch_is_marked_after_checkout(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = init_repository_dir.path();
    run_gitlet_command(path, &["branch", "dev"]).assert().success();
    run_gitlet_command(path, &["checkout", "dev"])
        .assert()
        .success();

    let status = run_to_string(path, &["status"])?;

    assert!(status.starts_with("=== Branches ===\n*dev\nmaster\n\n"));

    Ok(())
}
