use std::io;

use tracing::debug;

use crate::engine::{GameSession, GameStatus};
use crate::error::MoveError;
use crate::input::Command;

/// Presentation and input side of a game.
pub trait Frontend {
    fn render(&mut self, session: &GameSession) -> io::Result<()>;

    /// Next player command, or `None` when input is exhausted.
    fn next_command(&mut self, session: &GameSession) -> io::Result<Option<Command>>;

    fn rejected(&mut self, err: &MoveError) -> io::Result<()>;

    fn help(&mut self) -> io::Result<()>;

    /// Called once with the final board after a win or loss.
    fn finished(&mut self, session: &GameSession) -> io::Result<()>;
}

/// Drives turns until the game ends. Returns `None` if the player quit first.
pub fn run<F: Frontend + ?Sized>(session: &mut GameSession, frontend: &mut F) -> io::Result<Option<GameStatus>> {
    while !session.status().is_terminal() {
        frontend.render(session)?;
        let action = match frontend.next_command(session)? {
            Some(Command::Play(action)) => action,
            Some(Command::Help) => { frontend.help()?; continue; }
            Some(Command::Quit) | None => {
                debug!("player left the game");
                return Ok(None);
            }
        };
        if let Err(err) = session.apply(action) {
            debug!(?action, %err, "move rejected");
            frontend.rejected(&err)?;
        }
    }
    frontend.finished(session)?;
    Ok(Some(session.status()))
}
