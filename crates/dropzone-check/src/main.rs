//! dropzone-check: validate files on disk with the uploader's rules.
//!
//! Applies the same extension allow-list and size ceiling as the web
//! uploader, so a batch of files can be vetted before anyone tries to
//! upload them. Accepted images also get their pixel size reported.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin dropzone-check -- [OPTIONS] <PATH>...
//! ```
//!
//! The exit status is non-zero if any file is rejected or unreadable.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod verdict;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dropzone_core::UploaderConfig;

use crate::verdict::Verdict;

/// Check files against the dropzone upload rules.
#[derive(Parser)]
#[command(name = "dropzone-check", version)]
struct Cli {
    /// Files to check.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Uploader configuration as a JSON file.
    ///
    /// Fields missing from the file keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Size ceiling in bytes; overrides the configuration file.
    #[arg(long)]
    max_size: Option<u64>,

    /// Print verdicts as a JSON array instead of one line per file.
    #[arg(long)]
    json: bool,
}

/// Build an [`UploaderConfig`] from the `--config` file and flag overrides.
fn config_from_cli(cli: &Cli) -> Result<UploaderConfig, String> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("Error reading {}: {e}", path.display()))?;
            UploaderConfig::from_json(&text)
                .map_err(|e| format!("Error in {}: {e}", path.display()))?
        }
        None => UploaderConfig::default(),
    };

    if let Some(max_size) = cli.max_size {
        config.max_file_size = max_size;
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config_from_cli(&cli) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let verdicts: Vec<Verdict> = cli
        .paths
        .iter()
        .map(|path| verdict::check(path, &config))
        .collect();

    if cli.json {
        match serde_json::to_string_pretty(&verdicts) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing verdicts: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for verdict in &verdicts {
            println!("{verdict}");
        }
    }

    let refused = verdicts.iter().filter(|v| !v.is_accepted()).count();
    if refused == 0 {
        ExitCode::SUCCESS
    } else {
        eprintln!("{refused} of {} file(s) not accepted", verdicts.len());
        ExitCode::FAILURE
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn flag_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_file_size": 5000, "processing_delay_ms": 10}}"#).unwrap();

        let cli = Cli::parse_from([
            "dropzone-check",
            "--config",
            file.path().to_str().unwrap(),
            "--max-size",
            "42",
            "a.pdf",
        ]);
        let config = config_from_cli(&cli).unwrap();
        assert_eq!(config.max_file_size, 42);
        assert_eq!(config.processing_delay_ms, 10);
        assert_eq!(
            config.notification_duration_ms,
            UploaderConfig::DEFAULT_NOTIFICATION_DURATION_MS
        );
    }

    #[test]
    fn zero_ceiling_is_refused() {
        let cli = Cli::parse_from(["dropzone-check", "--max-size", "0", "a.pdf"]);
        assert!(config_from_cli(&cli).is_err());
    }

    #[test]
    fn malformed_config_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let cli = Cli::parse_from(["dropzone-check", "--config", &path, "a.pdf"]);
        let err = config_from_cli(&cli).unwrap_err();
        assert!(err.contains(&path));
    }

    #[test]
    fn paths_are_required() {
        assert!(Cli::try_parse_from(["dropzone-check"]).is_err());
    }
}
