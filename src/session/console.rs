//! Terminal front end.
//!
//! [`ConsoleView`] prints every state update it receives. [`read_commands`] reads stdin
//! line by line and forwards parsed commands to the game session.

use std::io::{self, Write};

use actix::prelude::*;
use log::warn;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::game::visual::Snapshot;
use crate::session::command::{Command, HELP, parse_command};
use crate::session::messages::{GetSnapshot, Notice, PlayerAction, StateUpdate};
use crate::session::render::render_screen;
use crate::session::server::GameSession;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Clear the terminal, draw `snapshot` and leave the prompt on screen.
fn present<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    write!(out, "{}{}> ", CLEAR_SCREEN, render_screen(snapshot))?;
    out.flush()
}

#[derive(Default)]
pub struct ConsoleView;

impl Actor for ConsoleView {
    type Context = Context<Self>;
}

impl Handler<StateUpdate> for ConsoleView {
    type Result = ();

    fn handle(&mut self, msg: StateUpdate, _: &mut Context<Self>) -> Self::Result {
        if let Err(err) = present(&mut io::stdout().lock(), &msg.snapshot) {
            warn!("[Console] Failed to draw round {} screen: {}", msg.snapshot.round, err);
        }
    }
}

impl Handler<Notice> for ConsoleView {
    type Result = ();

    fn handle(&mut self, msg: Notice, _: &mut Context<Self>) -> Self::Result {
        println!("{}", msg.0);
    }
}

async fn current_snapshot(session: &Addr<GameSession>) -> io::Result<Snapshot> {
    session.send(GetSnapshot).await.map_err(io::Error::other)
}

/// Read commands from stdin until `quit` or end of input.
pub async fn read_commands(session: Addr<GameSession>, view: Addr<ConsoleView>) -> io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let snapshot = current_snapshot(&session).await?;

        match parse_command(&line, snapshot.grid) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => view.do_send(Notice(HELP.to_string())),
            Ok(Command::Dump) => {
                let json = serde_json::to_string_pretty(&snapshot).map_err(io::Error::other)?;
                view.do_send(Notice(json));
            }
            Ok(Command::Start) => session.do_send(PlayerAction::Start),
            Ok(Command::Click(cell)) => session.do_send(PlayerAction::Click(cell)),
            Err(err) => {
                warn!("[Console] Rejected input {:?}: {}", line, err);
                view.do_send(Notice(err.to_string()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::game::state::Session;

    /// Accepts writes but cannot flush, like a closed terminal.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_present_draws_screen_and_prompt() {
        let snapshot = Snapshot::of(&Session::new());
        let mut out = Vec::new();
        present(&mut out, &snapshot).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(CLEAR_SCREEN));
        assert!(text.contains("Test Your Memory"));
        assert!(text.ends_with("> "));
    }

    #[test]
    fn test_present_reports_flush_failure() {
        let snapshot = Snapshot::of(&Session::new());
        let err = present(&mut BrokenPipe, &snapshot).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
