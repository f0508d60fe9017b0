//! Implementation of the trailer fetch run.
//!
//! Resolves the library root (argument or interactive prompt), builds the core
//! configuration, scans, and then hands the folders to the core processor.

use crate::cli::FetchArgs;
use crate::config::ROOT_PROMPT;
use crate::error::{CliErrorContext, CliResult};
use crate::output;

use trailfetch_core::{
    CoreConfig, TrailerDownloader, YtDlpDownloader, check_dependency, find_folders_missing_trailer,
    process_folders,
};

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::{debug, info};

/// Writes the prompt to `writer` and reads one trimmed line from `reader`.
pub fn prompt_for_root<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> CliResult<PathBuf> {
    write!(writer, "{ROOT_PROMPT}").cli_context("Failed to write prompt")?;
    writer.flush().cli_context("Failed to write prompt")?;

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .cli_context("Failed to read root folder")?;
    Ok(PathBuf::from(line.trim()))
}

/// Creates and validates CoreConfig from CLI arguments.
pub fn create_core_config(args: &FetchArgs, root_dir: PathBuf) -> CliResult<CoreConfig> {
    let work_dir = match &args.work_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().cli_context("Failed to determine current directory")?,
    };

    let mut config = CoreConfig::new(root_dir, work_dir);
    config.downloader_program = args.downloader.clone();

    if let Some(selector) = &args.format_selector {
        config.format_selector = selector.clone();
    }

    if let Some(merge_format) = &args.merge_format {
        config.merge_format = merge_format.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Runs one scan-and-download pass with the real downloader.
pub fn run_fetch(args: FetchArgs) -> CliResult<()> {
    let root_dir = match &args.root {
        Some(root) => root.clone(),
        // Keep stdout parseable when it carries JSON.
        None if args.json => prompt_for_root(&mut io::stdin().lock(), &mut io::stderr())?,
        None => prompt_for_root(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let config = create_core_config(&args, root_dir)?;
    debug!("Configuration: {:?}", config);

    let downloader = YtDlpDownloader::from_config(&config);
    run_with_downloader(&args, &config, &downloader)
}

/// Scans and processes using `downloader`.
pub fn run_with_downloader<D: TrailerDownloader>(
    args: &FetchArgs,
    config: &CoreConfig,
    downloader: &D,
) -> CliResult<()> {
    let mut folders = find_folders_missing_trailer(&config.root_dir, &config.trailer_marker)?;
    if args.sorted {
        folders.sort();
    }

    if folders.is_empty() {
        if args.json {
            output::print_summary_json(&Default::default())?;
        } else {
            output::print_all_have_trailers();
        }
        return Ok(());
    }

    if !args.json {
        output::print_missing_folders(&folders);
    }

    if args.dry_run {
        if args.json {
            output::print_missing_folders_json(&folders)?;
        }
        info!("Dry run: {} folder(s) would be processed", folders.len());
        return Ok(());
    }

    check_dependency(&config.downloader_program)?;
    fs::create_dir_all(&config.work_dir)?;

    let summary = process_folders(downloader, config, &folders);

    if args.json {
        output::print_summary_json(&summary)?;
    } else {
        output::print_summary(&summary);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;

    fn args(extra: &[&str]) -> FetchArgs {
        let mut argv = vec!["trailfetch"];
        argv.extend_from_slice(extra);
        crate::Cli::parse_from(argv).fetch
    }

    #[test]
    fn prompt_reads_and_trims_one_line() {
        let mut input = Cursor::new("  /media/movies  \nignored\n");
        let mut prompt = Vec::new();

        let root = prompt_for_root(&mut input, &mut prompt).unwrap();

        assert_eq!(root, PathBuf::from("/media/movies"));
        assert_eq!(String::from_utf8(prompt).unwrap(), ROOT_PROMPT);
    }

    #[test]
    fn config_takes_overrides() {
        let args = args(&["lib", "--work-dir", "work", "--format", "best", "--merge-format", "mkv"]);
        let config = create_core_config(&args, PathBuf::from("lib")).unwrap();

        assert_eq!(config.root_dir, PathBuf::from("lib"));
        assert_eq!(config.work_dir, PathBuf::from("work"));
        assert_eq!(config.format_selector, "best");
        assert_eq!(config.merge_format, "mkv");
    }

    #[test]
    fn config_defaults_work_dir_to_current_directory() {
        let args = args(&["lib"]);
        let config = create_core_config(&args, PathBuf::from("lib")).unwrap();
        assert_eq!(config.work_dir, std::env::current_dir().unwrap());
    }
}
