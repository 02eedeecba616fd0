use actix::prelude::*;

use crate::game::visual::Snapshot;

/// Player input forwarded to the game session.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
#[rtype(result = "()")]
pub enum PlayerAction {
    Start,
    Click(usize),
}

/// Render state pushed to every subscribed view.
#[derive(Message, Clone, Debug)]
#[rtype(result = "()")]
pub struct StateUpdate {
    pub snapshot: Snapshot,
}

/// Register a view. It immediately receives the current state.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Subscribe(pub Recipient<StateUpdate>);

/// Ask the session for its current render state.
#[derive(Message)]
#[rtype(result = "Snapshot")]
pub struct GetSnapshot;

/// Free-form line shown by the console (help text, input errors).
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct Notice(pub String);
