//! Main entry point for the Memory Path game.
//!
//! Starts the game session actor and the console view, then reads player commands
//! from stdin until the player quits.

use actix::{Actor, System};
use rand::SeedableRng;
use rand::rngs::StdRng;
use session::console::{ConsoleView, read_commands};
use session::messages::Subscribe;
use session::server::GameSession;

pub mod config;
mod game;
mod session;


#[actix::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    // Start the GameSession actor (owns the state machine and its timers).
    let game_session = GameSession::new(StdRng::from_os_rng()).start();

    // Start the console view and subscribe it to state updates.
    let view = ConsoleView.start();
    game_session.do_send(Subscribe(view.clone().recipient()));

    read_commands(game_session, view).await?;

    System::current().stop();
    Ok(())
}
