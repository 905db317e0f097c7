//! Tests for command-line parsing and batch file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use log::LevelFilter;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tilemosaic::JigsawError;
    use tilemosaic::algorithm::executor::AnchorSelection;
    use tilemosaic::io::cli::{Cli, FileProcessor};
    use tilemosaic::io::generator::{PuzzleSpec, generate_puzzle, render_puzzle};

    const SAMPLE: &str = include_str!("../../fixtures/sample.txt");

    fn quiet_cli(target: &Path, export: bool) -> Cli {
        Cli {
            target: target.to_path_buf(),
            seed: None,
            export,
            quiet: true,
            verbose: 0,
        }
    }

    // Tests CLI parsing with only the required target
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["tilemosaic", "puzzle.txt"]);

        assert_eq!(cli.target, PathBuf::from("puzzle.txt"));
        assert_eq!(cli.seed, None);
        assert!(!cli.export);
        assert!(cli.should_show_progress());
        assert_eq!(cli.log_level(), LevelFilter::Warn);
        assert_eq!(cli.solver_config().anchor, AnchorSelection::LowestId);
    }

    // Tests CLI parsing with all available arguments
    // Verified by renaming a long flag
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "tilemosaic",
            "puzzles",
            "--seed",
            "123",
            "--export",
            "--quiet",
            "-vv",
        ]);

        assert_eq!(cli.target, PathBuf::from("puzzles"));
        assert_eq!(cli.seed, Some(123));
        assert!(cli.export);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.log_level(), LevelFilter::Trace);
        assert_eq!(cli.solver_config().anchor, AnchorSelection::Seeded(123));
    }

    // Tests a single -v selects debug logging
    // Verified by mapping one flag to trace
    #[test]
    fn test_single_verbose_flag() {
        let cli = Cli::parse_from(["tilemosaic", "-v", "puzzle.txt"]);

        assert_eq!(cli.log_level(), LevelFilter::Debug);
    }

    // Tests the export path sits next to the input
    // Verified by dropping the parent directory
    #[test]
    fn test_export_path() {
        assert_eq!(
            FileProcessor::export_path(Path::new("dir/sample.txt")),
            PathBuf::from("dir/sample_mosaic.png")
        );
        assert_eq!(
            FileProcessor::export_path(Path::new("puzzle")),
            PathBuf::from("puzzle_mosaic.png")
        );
    }

    // Tests a single file is solved and exported
    // Verified by skipping the export step
    #[test]
    fn test_process_single_file_with_export() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("sample.txt");
        fs::write(&input, SAMPLE).expect("Failed to write puzzle");

        let reports = FileProcessor::new(quiet_cli(&input, true))
            .process()
            .expect("Failed to process file");

        assert_eq!(reports.len(), 1);
        let report = reports.first().expect("Missing report");
        assert_eq!(report.corner_product, 20_899_048_083_289);
        assert_eq!(report.roughness, 273);
        assert_eq!(report.monsters, 2);
        assert_eq!(report.export, Some(dir.path().join("sample_mosaic.png")));
        assert!(dir.path().join("sample_mosaic.png").exists());
    }

    // Tests a directory target picks up only puzzle files, sorted
    // Verified by including files of every extension
    #[test]
    fn test_process_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let generated = generate_puzzle(&PuzzleSpec::default()).expect("Failed to generate");
        fs::write(dir.path().join("b.txt"), SAMPLE).expect("Failed to write puzzle");
        fs::write(dir.path().join("a.txt"), render_puzzle(&generated))
            .expect("Failed to write puzzle");
        fs::write(dir.path().join("notes.md"), "not a puzzle").expect("Failed to write notes");

        let reports = FileProcessor::new(quiet_cli(dir.path(), false))
            .process()
            .expect("Failed to process directory");

        let names: Vec<PathBuf> = reports.iter().map(|r| r.path.clone()).collect();
        assert_eq!(names, vec![dir.path().join("a.txt"), dir.path().join("b.txt")]);
        assert_eq!(reports.last().map(|r| r.roughness), Some(273));
        assert!(reports.iter().all(|r| r.export.is_none()));
    }

    // Tests an empty directory yields no reports
    // Verified by treating an empty batch as an error
    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let reports = FileProcessor::new(quiet_cli(dir.path(), false))
            .process()
            .expect("Failed to process directory");

        assert!(reports.is_empty());
    }

    // Tests a missing target is a file system error
    // Verified by returning an empty batch for missing targets
    #[test]
    fn test_missing_target() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("absent.txt");

        let result = FileProcessor::new(quiet_cli(&missing, false)).process();

        assert!(matches!(result, Err(JigsawError::FileSystem { .. })));
    }

    // Tests parse failures stop the batch
    // Verified by skipping files that fail to parse
    #[test]
    fn test_invalid_puzzle_propagates() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("broken.txt");
        fs::write(&input, "Tile x:\n#..\n...\n...\n").expect("Failed to write puzzle");

        let result = FileProcessor::new(quiet_cli(&input, false)).process();

        assert!(matches!(result, Err(JigsawError::InvalidInput { line: 1, .. })));
    }
}
