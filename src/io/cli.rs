//! Command-line interface for batch solving of puzzle files

use crate::algorithm::executor::{AnchorSelection, JigsawSolver, Solution, SolverConfig};
use crate::io::configuration::{INPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{JigsawError, Result};
use crate::io::image::export_mosaic_as_png;
use crate::io::parser::parse_tiles;
use crate::io::progress::ProgressManager;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "tilemosaic")]
#[command(
    author,
    version,
    about = "Reassemble scrambled image tiles and measure sea monster roughness"
)]
/// Command-line arguments for the puzzle solver
pub struct Cli {
    /// Puzzle file, or directory of `.txt` puzzle files, to solve
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Seed for choosing the anchor corner (lowest id when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write the reconstructed image as `<stem>_mosaic.png`
    #[arg(short, long)]
    pub export: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level implied by the verbosity flags
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Solver configuration implied by the arguments
    pub fn solver_config(&self) -> SolverConfig {
        let anchor = self
            .seed
            .map_or(AnchorSelection::LowestId, AnchorSelection::Seeded);
        SolverConfig {
            anchor,
            ..SolverConfig::default()
        }
    }
}

/// Figures reported for one solved puzzle file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Puzzle file
    pub path: PathBuf,
    /// Product of the four corner tile ids
    pub corner_product: u64,
    /// Water roughness of the reconstructed image
    pub roughness: usize,
    /// Pattern matches found in the chosen orientation
    pub monsters: usize,
    /// Exported PNG, when requested
    pub export: Option<PathBuf>,
}

impl FileReport {
    fn from_solution(path: &Path, solution: &Solution, export: Option<PathBuf>) -> Self {
        Self {
            path: path.to_path_buf(),
            corner_product: solution.corner_product,
            roughness: solution.roughness.value,
            monsters: solution.roughness.search.matches,
            export,
        }
    }
}

/// Orchestrates batch solving of puzzle files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    solver: JigsawSolver,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let solver = JigsawSolver::new(cli.solver_config());

        Self {
            cli,
            solver,
            progress_manager,
        }
    }

    /// Solve every puzzle the target names
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot be read or any puzzle fails to
    /// parse, solve or export; processing stops at the first failure
    pub fn process(&mut self) -> Result<Vec<FileReport>> {
        let files = self.collect_files()?;
        if files.is_empty() {
            log::warn!("no puzzle files found in {}", self.cli.target.display());
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut reports = Vec::with_capacity(files.len());
        for file in &files {
            let report = self.process_file(file)?;
            self.report(&report);
            reports.push(report);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            return Ok(vec![target.clone()]);
        }
        if !target.is_dir() {
            return Err(JigsawError::FileSystem {
                path: target.clone(),
                operation: "locate target",
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "target must be a puzzle file or directory",
                ),
            });
        }

        let read_error = |source| JigsawError::FileSystem {
            path: target.clone(),
            operation: "read directory",
            source,
        };
        let mut files = Vec::new();
        for entry in std::fs::read_dir(target).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
            {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn process_file(&mut self, input_path: &Path) -> Result<FileReport> {
        let start_time = Instant::now();
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let text = std::fs::read_to_string(input_path).map_err(|e| JigsawError::FileSystem {
            path: input_path.to_path_buf(),
            operation: "read puzzle",
            source: e,
        })?;
        let tiles = parse_tiles(&text)?;
        let solution = self.solver.solve(tiles)?;

        let export = if self.cli.export {
            let output_path = Self::export_path(input_path);
            let image = solution.oriented_image();
            let highlights = self.solver.config().pattern.match_mask(&image);
            export_mosaic_as_png(&image, &highlights, &output_path)?;
            Some(output_path)
        } else {
            None
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file();
        }
        log::debug!(
            "solved {} in {:.2?}",
            input_path.display(),
            start_time.elapsed()
        );

        Ok(FileReport::from_solution(input_path, &solution, export))
    }

    // Allow print for results when progress display is off
    #[allow(clippy::print_stdout)]
    fn report(&self, report: &FileReport) {
        let line = format!(
            "{}: corner product {}, roughness {} ({} monsters)",
            report.path.display(),
            report.corner_product,
            report.roughness,
            report.monsters
        );
        match self.progress_manager {
            Some(ref pm) => pm.println(&line),
            None => println!("{line}"),
        }
    }

    /// Path of the PNG exported for a puzzle file
    pub fn export_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.png", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
