//! clipkit: display-label formatting and share helpers
//!
//! A small CLI exposing human-readable formatters plus clipboard,
//! download, and content-pinning operations.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use clipkit::clipboard;
use clipkit::download::download_to;
use clipkit::format::{
    compact_number_label, elapsed_time_label_now, file_size_label, parse_instant, video_time_label,
};
use clipkit::pin::{gateway_url, PinClient, DEFAULT_API_URL, DEFAULT_GATEWAY_URL};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Elapsed { timestamp } => {
            let instant = parse_instant(&timestamp)?;
            println!("{}", elapsed_time_label_now(instant));
        }
        Command::Number { value } => {
            println!("{}", compact_number_label(value)?);
        }
        Command::Size { bytes } => {
            println!("{}", file_size_label(bytes)?);
        }
        Command::Video { seconds } => {
            println!("{}", video_time_label(seconds));
        }
        Command::Copy { text } => {
            clipboard::copy_text(&text)?;
            println!("Copied {} bytes to clipboard", text.len());
        }
        Command::CopyImage { path } => {
            clipboard::copy_image_file(&path)?;
            println!("Copied image to clipboard: {:?}", path);
        }
        Command::Download { url, output_dir } => {
            let result = download_to(&url, &output_dir)?;
            println!("Saved {} bytes to {:?}", result.bytes, result.path);
        }
        Command::Pin { file, api, gateway } => {
            let data =
                std::fs::read(&file).with_context(|| format!("Failed to read file: {:?}", file))?;
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "data".to_string());

            let client = PinClient::new(api);
            let added = client.add(&data, &name)?;
            println!("{}", gateway_url(&gateway, &added.cid));
        }
    }

    Ok(())
}

/// CLI arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Display-label formatting and share helpers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the elapsed-time label for an RFC 3339 timestamp
    Elapsed { timestamp: String },

    /// Print the compact count label for a number
    Number { value: f64 },

    /// Print the human-readable size label for a byte count
    Size { bytes: f64 },

    /// Print the video-time label for a duration in seconds
    Video { seconds: f64 },

    /// Copy text to the system clipboard
    Copy { text: String },

    /// Copy an image file to the system clipboard
    CopyImage { path: PathBuf },

    /// Download a URL to a local file named after it
    Download {
        url: String,
        /// Output directory
        #[arg(long, short = 'o', default_value = ".")]
        output_dir: PathBuf,
    },

    /// Upload a file to the pinning service and print its gateway URL
    Pin {
        file: PathBuf,
        /// Pinning API base URL
        #[arg(long, default_value = DEFAULT_API_URL)]
        api: String,
        /// Gateway base URL used for the printed link
        #[arg(long, default_value = DEFAULT_GATEWAY_URL)]
        gateway: String,
    },
}
