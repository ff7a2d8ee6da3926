use tokio::sync::mpsc;

use common::log;
use common::snake::SnakeSession;
use common::terminal::Terminal;
use common::SiteConfig;

use crate::broadcaster::PanelBroadcaster;
use crate::state::{ClientCommand, SharedState, SnakeCommand, TerminalCommand};

/// Owns the terminal and the snake game for the lifetime of the window.
pub async fn site_task(
    config: SiteConfig,
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
) -> Result<(), String> {
    let broadcaster = PanelBroadcaster::new(shared_state.clone());
    let mut snake = SnakeSession::new(&config.snake, broadcaster.clone())?;
    let mut terminal = Terminal::new(&config.terminal, broadcaster);

    shared_state.set_display_name(terminal.display_name());

    while let Some(command) = command_rx.recv().await {
        match command {
            ClientCommand::Terminal(TerminalCommand::Submit { input }) => {
                terminal.submit(&input);
                shared_state.set_display_name(terminal.display_name());
            }
            ClientCommand::Snake(SnakeCommand::Start) => {
                snake.start();
            }
            ClientCommand::Snake(SnakeCommand::Turn { direction }) => {
                snake.handle_direction_input(direction);
            }
            ClientCommand::Shutdown => {
                log!("Site task shutting down");
                break;
            }
        }
    }

    Ok(())
}
