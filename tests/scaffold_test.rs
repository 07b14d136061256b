use std::fs;
use std::path::Path;

use new_puzzle::cli::Args;
use new_puzzle::config::{Config, ProjectPaths};
use new_puzzle::error::Error;
use new_puzzle::renderer::TokenRenderer;
use new_puzzle::run;
use new_puzzle::scaffold::{touch_file, Action, ScaffoldWriter};
use tempfile::TempDir;

fn args_for(root: &Path, day: Option<&str>, sample: bool) -> Args {
    Args {
        day: day.map(String::from),
        sample,
        verbose: false,
        root: Some(root.to_path_buf()),
    }
}

fn count_files(dir: &Path) -> usize {
    if !dir.exists() {
        return 0;
    }
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn test_fresh_project_day_three() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let generated = run(&args_for(root, Some("3"), false)).unwrap();

    let stub = root.join("src/puzzles/day_3.rs");
    let index = root.join("src/puzzles/mod.rs");
    let input = root.join("input/D3.txt");

    assert!(stub.exists());
    let index_content = fs::read_to_string(&index).unwrap();
    assert_eq!(index_content.matches("\nmod day_").count(), 3);
    assert!(index_content.contains("mod day_1;\nmod day_2;\nmod day_3;\n"));
    assert!(index_content.contains("    day_1::run,\n    day_2::run,\n    day_3::run,\n"));
    assert!(index_content.contains("pub const N_DAYS: usize = 3;"));

    assert_eq!(fs::metadata(&input).unwrap().len(), 0);
    assert_eq!(count_files(&root.join("input")), 1);
    assert!(!root.join("input/D3.dbg.txt").exists());

    let actions: Vec<Action> = generated.iter().map(|g| g.action).collect();
    assert_eq!(actions, vec![Action::Write, Action::Write, Action::Create]);
    assert_eq!(generated[0].target, stub);
    assert_eq!(generated[1].target, index);
    assert_eq!(generated[2].target, input);
}

#[test]
fn test_sample_file_created() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    run(&args_for(root, Some("8"), true)).unwrap();

    assert_eq!(fs::metadata(root.join("input/D8.txt")).unwrap().len(), 0);
    assert_eq!(fs::metadata(root.join("input/D8.dbg.txt")).unwrap().len(), 0);
}

#[test]
fn test_argument_errors_write_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    assert!(matches!(run(&args_for(root, None, true)), Err(Error::MissingDay)));
    assert!(matches!(
        run(&args_for(root, Some("foo"), false)),
        Err(Error::InvalidDay(_))
    ));
    assert_eq!(count_files(root), 0);
}

#[test]
fn test_touch_keeps_content() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("D5.txt");
    fs::write(&input, "1721\n979\n366\n").unwrap();

    assert_eq!(touch_file(&input).unwrap(), Action::Touch);
    assert_eq!(fs::read_to_string(&input).unwrap(), "1721\n979\n366\n");
}

#[test]
fn test_touch_read_only_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("D6.txt");
    fs::write(&input, "read only").unwrap();
    let mut permissions = fs::metadata(&input).unwrap().permissions();
    permissions.set_readonly(true);
    fs::set_permissions(&input, permissions).unwrap();

    assert_eq!(touch_file(&input).unwrap(), Action::Touch);
    assert_eq!(fs::read_to_string(&input).unwrap(), "read only");
    assert!(fs::metadata(&input).unwrap().permissions().readonly());
}

#[test]
fn test_write_error_keeps_earlier_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    // a regular file where the input directory should be
    fs::write(root.join("input"), "").unwrap();

    match run(&args_for(root, Some("2"), false)) {
        Err(Error::WriteError { path, .. }) => assert_eq!(path, root.join("input/D2.txt")),
        other => panic!("Expected WriteError, got {:?}", other),
    }
    assert!(root.join("src/puzzles/day_2.rs").exists());
    assert!(root.join("src/puzzles/mod.rs").exists());
}

#[test]
fn test_rerun_keeps_input_and_regenerates_index() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    run(&args_for(root, Some("2"), false)).unwrap();
    fs::write(root.join("input/D2.txt"), "puzzle input").unwrap();

    let generated = run(&args_for(root, Some("2"), false)).unwrap();
    assert_eq!(generated[2].action, Action::Touch);
    assert_eq!(
        fs::read_to_string(root.join("input/D2.txt")).unwrap(),
        "puzzle input"
    );

    run(&args_for(root, Some("1"), false)).unwrap();
    let index = fs::read_to_string(root.join("src/puzzles/mod.rs")).unwrap();
    assert!(index.contains("pub const N_DAYS: usize = 1;"));
    assert!(!index.contains("day_2"));
}

#[test]
fn test_stub_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let stub = root.join("src/puzzles/day_4.rs");
    fs::create_dir_all(stub.parent().unwrap()).unwrap();
    fs::write(&stub, "solved already").unwrap();

    run(&args_for(root, Some("4"), false)).unwrap();

    let content = fs::read_to_string(&stub).unwrap();
    assert!(content.contains("https://adventofcode.com/2022/day/4"));
}

#[test]
fn test_count_trusts_caller() {
    let temp_dir = TempDir::new().unwrap();
    let paths = ProjectPaths::new(temp_dir.path(), &Config::default());
    let engine = TokenRenderer::new();

    ScaffoldWriter::new(&engine, &paths, 2022).scaffold(12, false).unwrap();

    // only day 12 has a stub, but the index covers all twelve days
    assert_eq!(count_files(&paths.puzzle_dir), 2);
    let index = fs::read_to_string(paths.index_file()).unwrap();
    assert!(index.contains("pub const N_DAYS: usize = 12;"));
    assert_eq!(index.matches("::run,").count(), 12);
}
