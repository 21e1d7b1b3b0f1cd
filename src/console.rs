use std::io::{self, BufRead, Write};

use crate::config::{Difficulty, GameConfig};
use crate::engine::{GameSession, GameStatus};
use crate::error::MoveError;
use crate::game_loop::Frontend;
use crate::input::{parse_command, Command};
use crate::render::{render_board, RenderStyle};

/// Line-oriented frontend: prints the board and reads commands line by line.
pub struct Console<R, W> {
    input: R,
    output: W,
    style: RenderStyle,
    line: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, style: RenderStyle) -> Self {
        Self { input, output, style, line: String::new() }
    }

    pub fn into_output(self) -> W { self.output }

    fn read_line(&mut self) -> io::Result<Option<&str>> {
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.line.trim()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(self.read_line()?.map(str::to_string))
    }

    /// Asks for a preset or a custom board until a valid one is given.
    pub fn choose_config(&mut self) -> io::Result<Option<GameConfig>> {
        loop {
            let Some(answer) = self.prompt("Please select a difficulty (easy, normal, hard, custom): ")? else { return Ok(None) };
            if answer.eq_ignore_ascii_case("custom") {
                match self.custom_config()? {
                    Some(Ok(config)) => return Ok(Some(config)),
                    Some(Err(msg)) => writeln!(self.output, "{}", msg)?,
                    None => return Ok(None),
                }
                continue;
            }
            match answer.parse::<Difficulty>() {
                Ok(d) => return Ok(Some(d.config())),
                Err(_) => writeln!(self.output, "Please enter a valid difficulty.")?,
            }
        }
    }

    fn custom_config(&mut self) -> io::Result<Option<Result<GameConfig, String>>> {
        let Some(side) = self.prompt("Board side size: ")? else { return Ok(None) };
        let Some(mines) = self.prompt("Number of mines: ")? else { return Ok(None) };
        let parsed = match (side.parse::<usize>(), mines.parse::<usize>()) {
            (Ok(side), Ok(mines)) => GameConfig::new(side, mines).map_err(|e| e.to_string()),
            _ => Err("Please enter whole numbers.".to_string()),
        };
        Ok(Some(parsed))
    }
}

impl<R: BufRead, W: Write> Frontend for Console<R, W> {
    fn render(&mut self, session: &GameSession) -> io::Result<()> {
        writeln!(self.output, "\n{}", render_board(session.grid(), self.style))?;
        writeln!(self.output, "Mines: {}  Flags: {}", session.mines(), session.flags_placed())
    }

    fn next_command(&mut self, session: &GameSession) -> io::Result<Option<Command>> {
        let side = session.side();
        write!(self.output, "Please enter [f] row col: ")?;
        loop {
            self.output.flush()?;
            let Some(line) = self.read_line()? else { return Ok(None) };
            match parse_command(line, side) {
                Ok(cmd) => return Ok(Some(cmd)),
                Err(err) => write!(self.output, "{}. Please enter a valid input: ", err)?,
            }
        }
    }

    fn rejected(&mut self, err: &MoveError) -> io::Result<()> {
        writeln!(self.output, "!{}!", capitalize(&err.to_string()))
    }

    fn help(&mut self) -> io::Result<()> {
        writeln!(self.output, "Commands:")?;
        writeln!(self.output, "  row col     - clear the tile at row, col (1-based)")?;
        writeln!(self.output, "  f row col   - toggle a flag at row, col")?;
        writeln!(self.output, "  q           - quit")?;
        writeln!(self.output, "  h/help      - show this help")
    }

    fn finished(&mut self, session: &GameSession) -> io::Result<()> {
        writeln!(self.output, "\n{}", render_board(session.grid(), self.style))?;
        match session.status() {
            GameStatus::Won => writeln!(self.output, "YOU WIN"),
            GameStatus::Lost => writeln!(self.output, "GAME OVER"),
            GameStatus::InProgress => Ok(()),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
