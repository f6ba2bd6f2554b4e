use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use log::LevelFilter;

use blockgraph::config::EditorConfig;
use blockgraph::logging;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive block graph editor", long_about = None)]
struct Cli {
    /// JSON editor configuration; missing fields use defaults
    #[arg(long, value_name = "FILE")]
    config: Option<Utf8PathBuf>,

    /// Log level for this crate when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let config = match &cli.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    run(config)
}

#[cfg(feature = "egui")]
fn run(config: EditorConfig) -> Result<()> {
    use blockgraph::egui_app::EditorApp;

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "blockgraph",
        options,
        Box::new(|cc| Ok(Box::new(EditorApp::new(&cc.egui_ctx, config)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(not(feature = "egui"))]
fn run(_config: EditorConfig) -> Result<()> {
    eprintln!("blockgraph was built without a window backend; rebuild with `--features egui`");
    Ok(())
}
