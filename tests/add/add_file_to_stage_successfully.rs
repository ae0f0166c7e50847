use crate::common::command::{gitlet_add, init_repository_dir, run_to_string};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_file_to_stage_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    gitlet_add(repository_dir.path(), "a/b/3.txt")
        .assert()
        .success()
        .stdout(predicates::str::is_empty());

    let status = run_to_string(repository_dir.path(), &["status"])?;
    assert!(status.contains("=== Staged Files ===\na/b/3.txt\n\n"));
    assert!(status.contains("=== Untracked Files ===\n\n"));

    Ok(())
}

#[rstest]
fn add_generated_files_in_name_order(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let mut files = write_generated_files(repository_dir.path(), 4);
    for file in &files {
        let name = file.path.file_name().ok_or("no file name")?.to_string_lossy();
        gitlet_add(repository_dir.path(), &name).assert().success();
    }
    files.sort_by(|left, right| left.path.cmp(&right.path));

    let status = run_to_string(repository_dir.path(), &["status"])?;
    let expected = files
        .iter()
        .map(|file| format!("{}\n", file.path.file_name().unwrap().to_string_lossy()))
        .collect::<String>();

    assert!(status.contains(&format!("=== Staged Files ===\n{}\n", expected)));

    Ok(())
}

#[rstest]
fn restaging_a_file_keeps_latest_content(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let file = repository_dir.path().join("1.txt");

    write_file(FileSpec::new(file.clone(), "first edit".to_string()));
    gitlet_add(repository_dir.path(), "1.txt").assert().success();
    write_file(FileSpec::new(file.clone(), "second edit".to_string()));
    gitlet_add(repository_dir.path(), "1.txt").assert().success();

    let status = run_to_string(repository_dir.path(), &["status"])?;
    assert_eq!(
        status,
        "=== Branches ===\n*master\n\n\
         === Staged Files ===\n1.txt\n\n\
         === Removed Files ===\n\n\
         === Modifications Not Staged For Commit ===\n\n\
         === Untracked Files ===\n\n"
    );

    Ok(())
}
