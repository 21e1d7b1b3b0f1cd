use crate::engine::Action;
use crate::error::InputError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Action),
    Help,
    Quit,
}

/// Parses one line of player input against a board of `side` tiles.
///
/// Accepts `row col` to clear a tile and `f row col` to toggle a flag, with
/// 1-based coordinates separated by spaces or commas.
pub fn parse_command(line: &str, side: usize) -> Result<Command, InputError> {
    let tokens: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    let Some(first) = tokens.first() else { return Err(InputError::Empty) };

    match first.to_lowercase().as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "h" | "help" => return Ok(Command::Help),
        _ => {}
    }

    let (flag, coords) = if first.eq_ignore_ascii_case("f") { (true, &tokens[1..]) } else { (false, &tokens[..]) };
    if !flag && first.parse::<i64>().is_err() {
        return Err(InputError::Unknown(first.to_string()));
    }
    let [row, col] = coords else { return Err(InputError::Arity) };
    let row = coordinate(row, side)?;
    let col = coordinate(col, side)?;
    Ok(Command::Play(if flag { Action::flag(row, col) } else { Action::reveal(row, col) }))
}

fn coordinate(token: &str, side: usize) -> Result<usize, InputError> {
    match token.parse::<usize>() {
        Ok(n) if (1..=side).contains(&n) => Ok(n - 1),
        _ => Err(InputError::Coordinate { token: token.to_string(), size: side }),
    }
}
