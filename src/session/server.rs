//! Game session actor.
//!
//! Owns the game state machine and the random source, turns scheduled effects into actor
//! timers, and broadcasts a render snapshot to every subscribed view after each change.

use actix::prelude::*;
use actix::MessageResult;
use log::debug;
use rand::rngs::StdRng;

use crate::game::state::{Effect, Event, Session, TimerToken};
use crate::game::visual::Snapshot;
use crate::session::messages::{GetSnapshot, PlayerAction, StateUpdate, Subscribe};

pub struct GameSession {
    session: Session,
    rng: StdRng,
    /// Timers scheduled and not yet fired.
    timers: Vec<(TimerToken, SpawnHandle)>,
    subscribers: Vec<Recipient<StateUpdate>>,
    last_sent: Option<Snapshot>,
}

impl Actor for GameSession {
    type Context = Context<Self>;
}

impl GameSession {
    pub fn new(rng: StdRng) -> Self {
        Self {
            session: Session::new(),
            rng,
            timers: Vec::new(),
            subscribers: Vec::new(),
            last_sent: None,
        }
    }

    /// Run one event through the state machine and apply its effects.
    fn dispatch(&mut self, event: Event, ctx: &mut Context<Self>) {
        let previous_game = self.session.state.game_id();

        let session = std::mem::take(&mut self.session);
        let (session, effects) = session.reduce(event, &mut self.rng);
        self.session = session;

        // A new game supersedes whatever the previous one still had pending.
        if self.session.state.game_id() != previous_game {
            self.cancel_timers(ctx);
        }

        for effect in effects {
            match effect {
                Effect::Schedule { token, after } => {
                    let handle = ctx.run_later(after, move |act, ctx| {
                        act.timers.retain(|(pending, _)| *pending != token);
                        act.dispatch(Event::Timer(token), ctx);
                    });
                    self.timers.push((token, handle));
                }
            }
        }

        self.send_state();
    }

    fn cancel_timers(&mut self, ctx: &mut Context<Self>) {
        for (token, handle) in self.timers.drain(..) {
            debug!("[GameSession] Cancelled pending {:?} timer", token.kind);
            ctx.cancel_future(handle);
        }
    }

    /// Broadcast the current snapshot, unless it is identical to the last one sent.
    fn send_state(&mut self) {
        let snapshot = Snapshot::of(&self.session);
        if self.last_sent.as_ref() == Some(&snapshot) {
            return;
        }
        debug!(
            "[GameSession] Broadcast state: {}",
            serde_json::to_string(&snapshot).unwrap_or_default()
        );
        for recipient in &self.subscribers {
            recipient.do_send(StateUpdate { snapshot: snapshot.clone() });
        }
        self.last_sent = Some(snapshot);
    }
}

impl Handler<PlayerAction> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: PlayerAction, ctx: &mut Context<Self>) -> Self::Result {
        let event = match msg {
            PlayerAction::Start => Event::Start,
            PlayerAction::Click(cell) => Event::Click(cell),
        };
        self.dispatch(event, ctx);
    }
}

impl Handler<Subscribe> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: Subscribe, _: &mut Context<Self>) -> Self::Result {
        msg.0.do_send(StateUpdate { snapshot: Snapshot::of(&self.session) });
        self.subscribers.push(msg.0);
    }
}

impl Handler<GetSnapshot> for GameSession {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(Snapshot::of(&self.session))
    }
}
