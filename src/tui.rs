use std::io;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Terminal;
use tracing::debug;

use crate::config::GameConfig;
use crate::engine::{Action, Coord, GameSession, GameStatus};
use crate::render::tile_symbol;

pub fn run_tui(config: GameConfig, seed: u64) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let _guard = TermGuard;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut session = GameSession::new(config, seed);
    let mut cursor = Coord::new(0, 0);
    let mut notice: Option<String> = None;
    let mut last_inner_board = Rect::default();

    loop {
        terminal.draw(|f| { last_inner_board = ui(f, &session, cursor, notice.as_deref()); })?;

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let side = session.side();
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('h') | KeyCode::Left => { cursor.col = cursor.col.saturating_sub(1); None }
                    KeyCode::Char('l') | KeyCode::Right => { if cursor.col + 1 < side { cursor.col += 1; } None }
                    KeyCode::Char('k') | KeyCode::Up => { cursor.row = cursor.row.saturating_sub(1); None }
                    KeyCode::Char('j') | KeyCode::Down => { if cursor.row + 1 < side { cursor.row += 1; } None }
                    KeyCode::Char('f') => Some(Action::flag(cursor.row, cursor.col)),
                    KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => Some(Action::reveal(cursor.row, cursor.col)),
                    KeyCode::Char('n') => {
                        // Same seed replays the same board; 0 draws a new one.
                        session = GameSession::new(config, seed);
                        notice = None;
                        None
                    }
                    _ => None,
                }
            }
            Event::Mouse(m) => match m.kind {
                MouseEventKind::Down(btn) => {
                    let side = u16::try_from(session.side()).unwrap_or(u16::MAX);
                    match (pos_to_cell(m.column, m.row, last_inner_board, side), btn) {
                        (Some(pos), MouseButton::Left) => { cursor = pos; Some(Action::reveal(pos.row, pos.col)) }
                        (Some(pos), MouseButton::Right) => { cursor = pos; Some(Action::flag(pos.row, pos.col)) }
                        _ => None,
                    }
                }
                _ => None,
            },
            _ => None,
        };

        if let Some(action) = action {
            notice = match session.apply(action) {
                Ok(_) => None,
                Err(e) => {
                    debug!(%e, "move rejected");
                    Some(e.to_string())
                }
            };
        }
    }

    terminal.show_cursor()?;
    Ok(())
}

fn ui(f: &mut ratatui::Frame, session: &GameSession, cursor: Coord, notice: Option<&str>) -> Rect {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.size());

    let (status, color) = match (session.status(), notice) {
        (GameStatus::Lost, _) => ("GAME OVER. q to quit, n for a new game".to_string(), Color::Red),
        (GameStatus::Won, _) => ("YOU WIN! q to quit, n for a new game".to_string(), Color::Green),
        (GameStatus::InProgress, Some(msg)) => (format!("!{}!", msg), Color::Yellow),
        (GameStatus::InProgress, None) => (
            "Mouse: left=clear, right=flag | Arrows/HJKL move | Enter/Space clear | f flag | n new | q quit".to_string(),
            Color::Cyan,
        ),
    };
    let header = Paragraph::new(status)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Minesweeper"));
    f.render_widget(header, root[0]);

    let side = u16::try_from(session.side()).unwrap_or(u16::MAX);
    let area = centered_grid_area(root[1], side);
    let inner = Block::default().borders(Borders::ALL).inner(area);
    draw_board(f, session, area, cursor);

    let footer = Paragraph::new(format!(
        "Size: {0}x{0}  Mines: {1}  Flags: {2}  Cursor: {3},{4}",
        session.side(),
        session.mines(),
        session.flags_placed(),
        cursor.row + 1,
        cursor.col + 1,
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, root[2]);
    inner
}

const CELL_W: u16 = 2;

fn centered_grid_area(parent: Rect, side: u16) -> Rect {
    // Grid plus one border column/row on each side.
    let grid_w = side.saturating_mul(CELL_W).saturating_add(2);
    let grid_h = side.saturating_add(2);
    let x = parent.x.saturating_add(parent.width.saturating_sub(grid_w) / 2);
    let y = parent.y.saturating_add(parent.height.saturating_sub(grid_h) / 2);
    Rect { x, y, width: grid_w.min(parent.width), height: grid_h.min(parent.height) }
}

fn draw_board(f: &mut ratatui::Frame, session: &GameSession, area: Rect, cursor: Coord) {
    let lines: Vec<Line> = session
        .grid()
        .rows()
        .enumerate()
        .map(|(r, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(c, tile)| {
                    let mut ch = tile_symbol(tile);
                    let mut style = match ch {
                        '*' => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        '!' => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                        '-' => Style::default().fg(Color::DarkGray),
                        _ => number_style(tile.mines_around()),
                    };
                    if cursor == Coord::new(r, c) {
                        style = style.add_modifier(Modifier::REVERSED);
                        if ch == ' ' { ch = '·'; }
                    }
                    Span::styled(format!("{} ", ch), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let para = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Board"));
    f.render_widget(para, area);
}

fn number_style(n: u8) -> Style {
    match n {
        0 => Style::default().fg(Color::Gray),
        1 => Style::default().fg(Color::Blue),
        2 => Style::default().fg(Color::Green),
        3 => Style::default().fg(Color::Red),
        4 => Style::default().fg(Color::Magenta),
        5 => Style::default().fg(Color::Yellow),
        6 => Style::default().fg(Color::Cyan),
        _ => Style::default().fg(Color::White),
    }
}

fn pos_to_cell(mx: u16, my: u16, inner: Rect, side: u16) -> Option<Coord> {
    if mx < inner.x || my < inner.y { return None; }
    let col = (mx - inner.x) / CELL_W;
    let row = my - inner.y;
    if col < side && row < side { Some(Coord::new(row as usize, col as usize)) } else { None }
}

struct TermGuard;
impl Drop for TermGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}
