use std::io::Write;

use anyhow::Context;
use crossterm::event::{self, Event};
use sweeper_core::{Difficulty, GameSession, GameState};

use crate::input::{GameAction, map_key};
use crate::render;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Applies one action to the session.
pub fn dispatch(session: &mut GameSession, action: GameAction) -> anyhow::Result<Flow> {
    match action {
        GameAction::Move(direction) => {
            session.move_cursor(direction);
        }
        GameAction::Activate => {
            session.activate().context("Could not reveal cell")?;
        }
        GameAction::ToggleFlag => {
            if session.toggle_flag().context("Could not toggle flag")?.has_update() {
                log::trace!("flag toggled at {:?}", session.cursor());
            }
        }
        GameAction::LogCell => {
            if !session.record_diagnostics()? {
                log::debug!("No diagnostic sink configured");
            }
        }
        GameAction::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Render, wait for one key, dispatch; until the game ends or the player quits.
pub fn run<W: Write>(out: &mut W, session: &mut GameSession, difficulty: Difficulty) -> anyhow::Result<GameState> {
    loop {
        render::draw(out, session, difficulty).context("Could not draw board")?;

        if session.is_over() {
            wait_for_key()?;
            return Ok(session.state());
        }

        let Some(action) = next_action()? else {
            continue;
        };
        if dispatch(session, action)? == Flow::Quit {
            log::info!("Player quit at {:?}", session.cursor());
            return Ok(session.state());
        }
    }
}

fn next_action() -> anyhow::Result<Option<GameAction>> {
    match event::read().context("Could not read input")? {
        Event::Key(key) => Ok(map_key(key)),
        _ => Ok(None),
    }
}

fn wait_for_key() -> anyhow::Result<()> {
    loop {
        if let Event::Key(key) = event::read().context("Could not read input")? {
            if key.kind != event::KeyEventKind::Release {
                return Ok(());
            }
        }
    }
}
