use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use workbench::core::config::{self, CliOverrides};
use workbench::workbench::console;

#[derive(Parser)]
#[command(name = "workbench", about = "Module workbench console")]
struct Args {
    /// Module server base URL
    #[arg(short, long)]
    base_url: Option<String>,

    /// Fragment to open after the index loads, e.g. "#main:Root"
    #[arg(short, long)]
    address: Option<String>,

    /// Config file to use instead of ~/.workbench/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}, using defaults");
            config::WorkbenchConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            address: args.address,
        },
    );

    // Initialize file logger
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = LevelFilter::from_str(&resolved.log_level).unwrap_or(LevelFilter::Debug);

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("Workbench starting up against {}", resolved.base_url);

    console::run(resolved).await
}
