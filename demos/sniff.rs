//! Command-line tool that reports the kind of each input file.
//!
//! Every path is classified twice: once from its name alone and once from
//! its content (leading bytes plus ZIP / PalmDB inspection).
//!
//! # Usage
//!
//! ```sh
//! cargo run --example sniff -- book.epub scan0001 ~/Downloads/*
//! ```
//!
//! Show probe decisions:
//! ```sh
//! RUST_LOG=filekind=trace cargo run --example sniff -- mystery.bin
//! ```

use clap::Parser;
use filekind::{
    FileKind, SniffOptions, Sniffer, file_kind_from_file_name, is_cbx_engine_kind,
    is_image_engine_kind,
};
use std::path::PathBuf;

/// Identify document formats by name and by content
#[derive(Parser, Debug)]
#[command(name = "sniff", version)]
struct Args {
    /// Files or directories to classify
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// Number of leading bytes read for signature matching
    #[arg(long, default_value_t = 2048)]
    prefix_len: usize,

    /// Don't open ZIP / PalmDB containers
    #[arg(long)]
    no_containers: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn describe(kind: Option<FileKind>) -> String {
    match kind {
        Some(kind) if is_image_engine_kind(kind) => format!("{} (image)", kind),
        Some(kind) if is_cbx_engine_kind(kind) => format!("{} (archive)", kind),
        Some(kind) => kind.to_string(),
        None => "unknown".to_string(),
    }
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "filekind=trace" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let sniffer = Sniffer::new(
        SniffOptions::new()
            .with_prefix_len(args.prefix_len)
            .with_container_inspection(!args.no_containers),
    );

    for path in &args.paths {
        let by_name = file_kind_from_file_name(path);
        let by_content = sniffer.sniff_file(path);
        let marker = match (by_name, by_content) {
            (Some(a), Some(b)) if a != b && a != FileKind::Dir => "  <- mismatch",
            _ => "",
        };
        println!(
            "{}\n  name:    {}\n  content: {}{}",
            path.display(),
            describe(by_name),
            describe(by_content),
            marker
        );
    }
}
