//! Tests for the command line driver

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::TempDir;

use boxnest::cli::commands::for_each_source;
use boxnest::cli::{Cli, CliError, Commands};
use boxnest::config::Settings;
use boxnest::domain::{DepthMarks, RowPolicy};
use boxnest::exitcode;
use boxnest::infrastructure::di::ServiceContainer;
use boxnest::infrastructure::traits::{FileSystem, RealFileSystem};
use boxnest::util::path::expand_sources;

fn create_grid_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    std::fs::write(&path, content).expect("write grid file");
    path
}

#[test]
fn given_render_args_when_parsing_then_collects_sources_and_flags() {
    let cli = Cli::try_parse_from([
        "boxnest",
        "--marks",
        "numeric",
        "render",
        "a.txt",
        "b.txt",
        "--short-rows",
        "pad",
        "-o",
        "out",
    ])
    .unwrap();

    assert_eq!(cli.marks, Some(DepthMarks::Numeric));
    assert_eq!(cli.short_rows, Some(RowPolicy::Pad));
    match cli.command {
        Some(Commands::Render {
            sources,
            output_dir,
        }) => {
            assert_eq!(sources, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
            assert_eq!(output_dir, Some(PathBuf::from("out")));
        }
        other => panic!("expected render, got {:?}", other),
    }
}

#[test]
fn given_unknown_marks_when_parsing_then_rejected() {
    let result = Cli::try_parse_from(["boxnest", "--marks", "roman", "tree", "a.txt"]);

    assert!(result.is_err());
}

#[test]
fn given_render_without_sources_when_parsing_then_rejected() {
    assert!(Cli::try_parse_from(["boxnest", "render"]).is_err());
}

#[test]
fn given_directory_source_when_expanding_then_lists_sorted_txt_files() {
    let temp = TempDir::new().unwrap();
    create_grid_file(&temp, "b.txt", "1 1\n+\n");
    create_grid_file(&temp, "a.txt", "1 1\n+\n");
    create_grid_file(&temp, "sub/c.txt", "1 1\n+\n");
    create_grid_file(&temp, "notes.md", "# notes\n");
    let single = PathBuf::from("explicit.grid");

    let sources =
        expand_sources(&RealFileSystem, &[single.clone(), temp.path().to_path_buf()]).unwrap();

    assert_eq!(
        sources,
        vec![
            single,
            temp.path().join("a.txt"),
            temp.path().join("b.txt"),
            temp.path().join("sub").join("c.txt"),
        ]
    );
}

/// Filesystem that reports no directories and reads nothing.
struct FlatFileSystem;

impl FileSystem for FlatFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            path.display().to_string(),
        ))
    }

    fn write(&self, _path: &Path, _content: &str) -> io::Result<()> {
        Ok(())
    }

    fn exists(&self, _path: &Path) -> bool {
        false
    }

    fn is_dir(&self, _path: &Path) -> bool {
        false
    }

    fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn given_filesystem_without_directories_when_expanding_then_paths_pass_through() {
    let grids = PathBuf::from("tests/resources/grids");

    let sources = expand_sources(&FlatFileSystem, &[grids.clone()]).unwrap();

    assert_eq!(sources, vec![grids]);
}

#[test]
fn given_container_filesystem_when_driving_then_sources_resolve_through_it() {
    let container =
        ServiceContainer::with_deps(Settings::default(), std::sync::Arc::new(FlatFileSystem));
    let mut visited = Vec::new();

    let err = for_each_source(
        container.fs.as_ref(),
        &[PathBuf::from("tests/resources/grids")],
        |source| {
            visited.push(source.to_path_buf());
            container.boxes.analyze(source).map(|_| ())
        },
    )
    .unwrap_err();

    assert_eq!(visited, vec![PathBuf::from("tests/resources/grids")]);
    assert_eq!(err.exit_code(), exitcode::NOINPUT);
}

#[test]
fn given_failing_source_when_driving_then_continues_and_reports_first_code() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let bad = create_grid_file(&temp, "bad.txt", "3 4\n+--+\n|  |\n+-- \n");
    let good = create_grid_file(&temp, "good.txt", "3 3\n+-+\n| |\n+-+\n");
    let missing = temp.path().join("missing.txt");
    let container = ServiceContainer::with_deps(
        Settings::default(),
        std::sync::Arc::new(RealFileSystem),
    );
    let mut rendered = Vec::new();

    // Act
    let result = for_each_source(
        container.fs.as_ref(),
        &[bad, good.clone(), missing],
        |source| {
            let report = container.boxes.process(source)?;
            rendered.push(report.analysis.path);
            Ok(())
        },
    );

    // Assert
    assert_eq!(rendered, vec![good]);
    match result {
        Err(err @ CliError::SourcesFailed { .. }) => {
            assert_eq!(err.exit_code(), exitcode::DATAERR);
            assert_eq!(err.to_string(), "2 of 3 sources failed");
        }
        other => panic!("expected SourcesFailed, got {:?}", other),
    }
}

#[test]
fn given_all_sources_valid_when_driving_then_ok() {
    let grids = [PathBuf::from("tests/resources/grids")];

    let result = for_each_source(&RealFileSystem, &grids, |source| {
        assert!(source.extension().is_some_and(|e| e == "txt"));
        Ok(())
    });

    assert!(result.is_ok());
}

#[test]
fn given_empty_directory_when_driving_then_usage_error() {
    let temp = TempDir::new().unwrap();

    let err =
        for_each_source(&RealFileSystem, &[temp.path().to_path_buf()], |_| Ok(())).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_broken_resources_when_driving_then_every_source_fails_as_data_error() {
    let container = ServiceContainer::new(Settings::default());

    let broken = [PathBuf::from("tests/resources/grids_broken")];

    let err = for_each_source(container.fs.as_ref(), &broken, |source| {
        container.boxes.analyze(source).map(|_| ())
    })
    .unwrap_err();

    assert_eq!(err.to_string(), "2 of 2 sources failed");
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}
