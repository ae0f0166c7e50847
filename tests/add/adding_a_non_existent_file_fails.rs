use crate::common::command::{gitlet_add, init_repository_dir, run_to_string};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case("missing.txt")]
#[case("a/missing.txt")]
#[case("../outside.txt")]
fn adding_a_non_existent_file_fails(
    init_repository_dir: TempDir,
    #[case] file: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    gitlet_add(init_repository_dir.path(), file)
        .assert()
        .success()
        .stdout(predicate::eq("File does not exist.\n"));

    let status = run_to_string(init_repository_dir.path(), &["status"])?;
    assert!(status.contains("=== Staged Files ===\n\n"));

    Ok(())
}
