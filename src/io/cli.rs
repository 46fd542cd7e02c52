//! Command-line interface and the batch driver that writes every asset

use crate::generators::Asset;
use crate::io::configuration::DEFAULT_OUTPUT_DIR;
use crate::io::error::Result;
use crate::io::image::{require_output_dir, save_asset};
use crate::io::progress::ProgressReporter;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "placeholder-graphics")]
#[command(
    author,
    version,
    about = "Generate burgundy and gold placeholder artwork"
)]
/// Command-line arguments for the asset generator
pub struct Cli {
    /// Existing directory to write the images into
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Suppress status output
    #[arg(short, long)]
    pub quiet: bool,

    /// Only generate the named assets (repeatable); defaults to all of them
    #[arg(long, value_enum, value_name = "ASSET")]
    pub only: Vec<Asset>,
}

impl Cli {
    /// Assets to generate, always in the fixed generation order
    pub fn selected_assets(&self) -> Vec<Asset> {
        Asset::ALL
            .into_iter()
            .filter(|asset| self.only.is_empty() || self.only.contains(asset))
            .collect()
    }

    /// Check if status output should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Renders and saves assets one at a time in the fixed order
pub struct BatchRunner {
    output_dir: PathBuf,
    assets: Vec<Asset>,
    reporter: ProgressReporter,
}

impl BatchRunner {
    /// Create a runner from parsed CLI arguments
    pub fn new(cli: &Cli) -> Self {
        let assets = cli.selected_assets();
        let reporter = ProgressReporter::new(assets.len(), !cli.should_show_progress());
        Self {
            output_dir: cli.output_dir.clone(),
            assets,
            reporter,
        }
    }

    /// Generate every selected asset, stopping at the first failure
    ///
    /// Each file is fully written before the next asset is rendered. Files
    /// written before a failure are left in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory is missing or any save fails
    pub fn run(&mut self) -> Result<Vec<PathBuf>> {
        require_output_dir(&self.output_dir)?;
        self.reporter.begin();

        let mut written = Vec::with_capacity(self.assets.len());
        for asset in self.assets.clone() {
            let start_time = Instant::now();
            let file_name = asset.file_name();
            self.reporter.start_asset(file_name);

            let image = asset.render();
            let path = save_asset(&image, &self.output_dir, file_name)?;

            self.reporter
                .complete_asset(file_name, start_time.elapsed());
            written.push(path);
        }

        self.reporter.finish();
        Ok(written)
    }

    /// Assets this runner will generate
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Reporter holding the status lines emitted so far
    pub const fn reporter(&self) -> &ProgressReporter {
        &self.reporter
    }
}
