mod broadcaster;
mod command_sender;
mod config;
mod site_task;
mod state;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

use command_sender::CommandSender;
use site_task::site_task;
use state::{ClientCommand, SharedState};
use ui::SiteApp;

#[derive(Parser)]
#[command(name = "retro_site_client", about = "Retro site panel: typing terminal and snake")]
struct Args {
    /// Path to the site configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Prefix log lines with the client tag
    #[arg(long)]
    log_prefix: bool,

    /// Suppress log output
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.log_prefix.then(|| "Client".to_string());
    logger::init_logger(prefix, args.quiet);

    let config_manager = config::get_config_manager(args.config.as_deref());
    let config = config_manager.get_config()?;
    log!(
        "Loaded config: {} commands, {}x{} grid",
        config.terminal.commands.len(),
        config.snake.grid_size,
        config.snake.grid_size
    );

    let shared_state = SharedState::new(config.terminal.marker.clone(), config.terminal.scrollback);
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let command_sender = CommandSender::new(command_tx);

    let shared_state_clone = shared_state.clone();
    let runtime = tokio::runtime::Runtime::new()?;
    let site_thread = std::thread::spawn(move || {
        if let Err(e) = runtime.block_on(site_task(config, shared_state_clone, command_rx)) {
            log!("Site task failed: {}", e);
        }
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 640.0])
            .with_title("Retro Site"),
        ..Default::default()
    };

    let app_sender = command_sender.clone();
    eframe::run_native(
        "Retro Site",
        options,
        Box::new(|_cc| Ok(Box::new(SiteApp::new(shared_state, app_sender)))),
    )?;

    command_sender.send(ClientCommand::Shutdown);
    if site_thread.join().is_err() {
        log!("Site task panicked");
    }

    Ok(())
}
