mod core;
#[cfg(test)]
mod test_support;
mod tui;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use crate::core::config::{load_config, resolve};

#[derive(Parser)]
#[command(name = "dictum", about = "Terminal quote collector")]
struct Args {
    /// Accent color for the interface (overrides the config file)
    #[arg(short, long)]
    accent: Option<String>,

    /// Log verbosity for dictum.log
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to dictum.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("dictum.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("dictum: {e}");
            std::process::exit(1);
        }
    };
    let resolved = resolve(&config, args.accent.as_deref());

    log::info!("Dictum starting up with accent: {}", resolved.accent);

    tui::run(resolved)
}
