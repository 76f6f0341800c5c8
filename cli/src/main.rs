//! bcp - Buffered Copy
//!
//! A single-file copy command powered by bufcopy.

use bufcopy::{CopyOptions, DEFAULT_BUFFER_SIZE, copy_file};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// bcp - Buffered single-file copy
///
/// Copy one file to another path, byte for byte, through a fixed-size
/// buffer. The destination is created if absent and truncated if present.
///
/// Usage:
///   bcp SOURCE DEST
#[derive(Parser, Debug)]
#[command(name = "bcp", version, about, long_about = None)]
struct Args {
    /// Source file
    source: PathBuf,

    /// Destination file (created if absent, truncated if present)
    dest: PathBuf,

    /// Transfer buffer capacity in bytes
    #[arg(short = 'b', long, default_value_t = DEFAULT_BUFFER_SIZE)]
    buffer_size: usize,

    /// Sync the destination to disk before reporting success
    #[arg(long)]
    sync: bool,

    /// Delete a partially written destination if the copy fails
    #[arg(long)]
    remove_partial: bool,

    /// Suppress the progress spinner and success message
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run() -> bufcopy::Result<()> {
    // Usage errors exit 1, the tool's single failure code, instead of
    // clap's default 2. Help and version keep exit code 0.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let mut options = CopyOptions::default().with_buffer_size(args.buffer_size);
    if args.sync {
        options = options.with_fsync();
    }
    if args.remove_partial {
        options = options.with_remove_partial();
    }

    let pb = if args.quiet {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner().template("{spinner:.green} {msg}");
        if let Ok(style) = style {
            pb.set_style(style);
            pb.enable_steady_tick(Duration::from_millis(100));
            pb.set_message(format!("Copying {}...", args.source.display()));
            Some(pb)
        } else {
            None
        }
    };

    let result = copy_file(&args.source, &args.dest, &options);

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let bytes = result?;

    if !args.quiet {
        println!(
            "Copied '{}' to '{}' ({} bytes)",
            args.source.display(),
            args.dest.display(),
            bytes
        );
    }

    Ok(())
}
