use std::io::Cursor;

use crossterm::style::Stylize;

use minesweeper::console::Console;
use minesweeper::engine::{Coord, GameSession, GameStatus, Grid};
use minesweeper::game_loop::run;
use minesweeper::render::{render_board, RenderStyle};

fn play(script: &str, session: &mut GameSession) -> (Option<GameStatus>, String) {
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new(), RenderStyle::Plain);
    let status = run(session, &mut console).expect("in-memory io");
    (status, String::from_utf8(console.into_output()).expect("utf8"))
}

fn one_mine_4x4() -> GameSession {
    GameSession::from_grid(Grid::with_mines(4, &[Coord::new(0, 0)]))
}

#[test]
fn scripted_game_is_won() {
    let mut session = one_mine_4x4();
    let (status, out) = play("f 3 3\n3 3\nnonsense\nf 3 3\n4 4\n", &mut session);
    assert_eq!(status, Some(GameStatus::Won));
    assert!(out.contains("!This tile is flagged!"));
    assert!(out.contains("Please enter a valid input"));
    assert!(out.trim_end().ends_with("YOU WIN"));
}

#[test]
fn scripted_game_is_lost() {
    let mut session = one_mine_4x4();
    let (status, out) = play("h\n1 1\n2 2\n", &mut session);
    assert_eq!(status, Some(GameStatus::Lost));
    assert!(out.contains("Commands:"));
    assert!(out.trim_end().ends_with("GAME OVER"));
    assert!(out.contains('*'));
}

#[test]
fn quitting_or_running_out_of_input_ends_without_status() {
    let mut session = one_mine_4x4();
    assert_eq!(play("2 2\nq\n", &mut session).0, None);
    assert!(session.grid().get(Coord::new(1, 1)).unwrap().is_visible());

    let mut session = one_mine_4x4();
    assert_eq!(play("", &mut session).0, None);
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn already_cleared_tile_is_reported() {
    let mut session = GameSession::from_grid(Grid::with_mines(4, &[Coord::new(0, 0), Coord::new(3, 3)]));
    let (_, out) = play("1 2\n1 2\nq\n", &mut session);
    assert!(out.contains("!This tile is already clear!"));
}

#[test]
fn choose_config_reprompts_until_valid() {
    let script = "medium\ncustom\n3\n9\ncustom\n5\n4\n";
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new(), RenderStyle::Plain);
    let config = console.choose_config().unwrap().expect("config chosen");
    assert_eq!((config.side(), config.mines()), (5, 4));
    let out = String::from_utf8(console.into_output()).unwrap();
    assert!(out.contains("Please enter a valid difficulty."));
    assert!(out.contains("number of mines must be between 1 and 8"));

    let mut console = Console::new(Cursor::new("hard\n".to_string()), Vec::new(), RenderStyle::Plain);
    assert_eq!(console.choose_config().unwrap().map(|c| c.side()), Some(30));
}

#[test]
fn plain_render_layout() {
    let mut session = GameSession::from_grid(Grid::with_mines(3, &[Coord::new(0, 0)]));
    session.apply(minesweeper::engine::Action::flag(0, 0)).unwrap();
    session.apply(minesweeper::engine::Action::reveal(0, 1)).unwrap();
    let text = render_board(session.grid(), RenderStyle::Plain);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "    1  2  3 ");
    assert_eq!(lines[1], "1   !  1  - ");
    assert_eq!(lines[2], "2   -  -  - ");
}

#[test]
fn color_render_marks_flags_and_mines() {
    let mut session = GameSession::from_grid(Grid::with_mines(3, &[Coord::new(0, 0), Coord::new(2, 2)]));
    session.apply(minesweeper::engine::Action::flag(0, 0)).unwrap();
    let flag = '!'.yellow().bold().to_string();
    let mine = '*'.red().bold().to_string();

    let text = render_board(session.grid(), RenderStyle::Color);
    assert!(text.contains(&flag));
    assert!(!text.contains(&mine));

    session.apply(minesweeper::engine::Action::reveal(2, 2)).unwrap();
    let text = render_board(session.grid(), RenderStyle::Color);
    assert!(text.contains(&mine));
    assert!(text.contains(&flag));
    assert_ne!(text, render_board(session.grid(), RenderStyle::Plain));
}
