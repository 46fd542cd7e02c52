//! Tests for command-line parsing and the batch runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use placeholder_graphics::generators::Asset;
    use placeholder_graphics::io::cli::{BatchRunner, Cli};
    use placeholder_graphics::io::configuration::DEFAULT_OUTPUT_DIR;
    use placeholder_graphics::GraphicsError;
    use std::path::PathBuf;

    // Tests running without arguments selects everything in order
    // Verified by changing the default output directory
    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["program"]);
        assert_eq!(cli.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert!(!cli.quiet);
        assert!(cli.should_show_progress());
        assert_eq!(cli.selected_assets(), Asset::ALL.to_vec());
    }

    // Tests short and long flags
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["program", "-o", "out/art", "-q"]);
        assert_eq!(cli.output_dir, PathBuf::from("out/art"));
        assert!(cli.quiet);
        assert!(!cli.should_show_progress());

        let long = Cli::parse_from(["program", "--output-dir", "x", "--quiet"]);
        assert_eq!(long.output_dir, PathBuf::from("x"));
        assert!(long.quiet);
    }

    // Tests asset selection keeps generation order regardless of flag order
    // Verified by returning the flags in the order given
    #[test]
    fn test_cli_only_keeps_order() {
        let cli = Cli::parse_from(["program", "--only", "grain", "--only", "tape"]);
        assert_eq!(cli.selected_assets(), vec![Asset::Tape, Asset::Grain]);
    }

    // Tests unknown asset names are rejected
    // Verified by accepting free-form strings
    #[test]
    fn test_cli_rejects_unknown_asset() {
        assert!(Cli::try_parse_from(["program", "--only", "banner"]).is_err());
        assert!(Cli::try_parse_from(["program", "--only", "floral-background"]).is_ok());
    }

    // Tests the runner writes the selected files into an existing directory
    // Verified by skipping the save step
    #[test]
    fn test_batch_runner_writes_selection() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let cli = Cli {
            output_dir: dir.path().to_path_buf(),
            quiet: true,
            only: vec![Asset::Stamp, Asset::Tape],
        };
        let mut runner = BatchRunner::new(&cli);
        assert_eq!(runner.assets(), &[Asset::Tape, Asset::Stamp]);

        let written = runner.run().expect("Batch should succeed");
        assert_eq!(
            written,
            vec![dir.path().join("tape.png"), dir.path().join("stamp-ma.png")]
        );
        assert!(written.iter().all(|path| path.is_file()));
    }

    // Tests the driver reports each asset between the banner and the summary
    // Verified by reporting the created line before saving
    #[test]
    fn test_batch_runner_console_lines() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let cli = Cli {
            output_dir: dir.path().to_path_buf(),
            quiet: true,
            only: vec![Asset::Grain, Asset::Tape],
        };
        let mut runner = BatchRunner::new(&cli);
        runner.run().expect("Batch should succeed");
        assert_eq!(
            runner.reporter().lines(),
            [
                "Generating placeholder graphics...",
                "Generating tape.png...",
                "Created tape.png",
                "Generating grain.png...",
                "Created grain.png",
                "All 2 graphics created successfully!",
            ]
        );
    }

    // Tests a failed batch stops reporting at the failing asset
    // Verified by printing the summary on error
    #[test]
    fn test_batch_runner_missing_directory_reports_nothing() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let cli = Cli {
            output_dir: dir.path().join("absent"),
            quiet: true,
            only: vec![],
        };
        let mut runner = BatchRunner::new(&cli);
        assert!(runner.run().is_err());
        assert!(runner.reporter().lines().is_empty());
    }

    // Tests a missing output directory fails before anything is rendered
    // Verified by creating the directory on demand
    #[test]
    fn test_batch_runner_missing_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("absent");
        let cli = Cli {
            output_dir: missing.clone(),
            quiet: true,
            only: vec![Asset::Stamp],
        };
        let result = BatchRunner::new(&cli).run();
        assert!(matches!(
            result,
            Err(GraphicsError::MissingOutputDirectory { .. })
        ));
        assert!(!missing.exists());
    }
}
