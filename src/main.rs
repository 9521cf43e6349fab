use clap::Parser;
use dobby::core::config::{self, ResolvedConfig};
use dobby::{oneshot, tui};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "dobby", about = "Terminal chat client for Dobby, the loyal AI")]
struct Args {
    /// Skip the landing page and open the chat view
    #[arg(long)]
    chat: bool,

    /// Send one prompt, print the reply and exit
    #[arg(short, long, value_name = "TEXT")]
    prompt: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::DobbyConfig::default(), Some(e)),
    };
    let mut resolved: ResolvedConfig = config::resolve(&file_config);
    resolved.start_in_chat = args.chat;

    // Initialize file logger, never the terminal the TUI draws on
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = resolved
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Debug);

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    if resolved.api_key.is_none() {
        log::warn!("FIREWORKS_API_KEY is not set; every request will fail until it is");
    }

    log::info!(
        "Dobby starting up (base_url={}, start_in_chat={})",
        resolved.base_url,
        resolved.start_in_chat
    );

    match args.prompt {
        Some(prompt) => oneshot::run(resolved, prompt).await,
        None => tui::run(resolved),
    }
}
