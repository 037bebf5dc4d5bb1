//! Ratatui front-end: terminal setup, the event/render loop, and key
//! handling that forwards taps into the input machine.

use crate::app::App;
use crate::launcher;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Terminal,
};
use std::io;
use std::time::Duration;
use tracing::debug;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;
use vocalc::terminal_restore::TerminalRestoreGuard;
use vocalc::{detect_open_intent, EntryState};

/// How long transient status toasts stay visible.
const STATUS_TOAST_SECS: u64 = 4;

/// Configure the terminal, run the event loop, and tear everything down.
pub fn run_app(app: &mut App) -> Result<()> {
    let terminal_guard = TerminalRestoreGuard::new();
    terminal_guard.enable_raw_mode()?;
    let mut stdout = io::stdout();
    terminal_guard.enter_alt_screen(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app_loop(&mut terminal, app);

    drop(terminal);
    terminal_guard.restore();

    result
}

fn app_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let poll_duration = Duration::from_millis(app.config.tick_ms);
    terminal.draw(|frame| draw(frame, app))?;

    loop {
        app.tick();

        let mut should_draw = false;
        let mut should_quit = false;

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => {
                    should_quit = handle_key_event(app, key);
                    should_draw = true;
                }
                Event::Resize(_, _) => {
                    should_draw = true;
                }
                _ => {}
            }
        }

        if should_draw {
            terminal.draw(|frame| draw(frame, app))?;
        }

        if should_quit {
            break;
        }
    }
    Ok(())
}

/// Interpret a keystroke. Returns true when the app should quit.
fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if app.capturing() {
        handle_capture_key(app, key);
        return false;
    }

    match key.code {
        KeyCode::Char(ch @ '0'..='9') => app.keypad.press_digit(ch, &mut app.screen),
        KeyCode::Char(ch @ ('+' | '-' | '*' | '/')) => {
            app.keypad.press_operator(ch, &mut app.screen)
        }
        KeyCode::Char('.') => app.keypad.press_dot(&mut app.screen),
        KeyCode::Enter => app.keypad.press_equals(&mut app.screen, &app.evaluator),
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Delete => {
            app.keypad.clear(&mut app.screen)
        }
        KeyCode::Char('v') | KeyCode::Char('V') => {
            app.begin_capture();
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

/// Keys while the utterance overlay is open. Enter delivers the transcript,
/// Esc cancels without delivering anything.
fn handle_capture_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.cancel_capture();
            app.set_status(
                "Capture canceled",
                Some(Duration::from_secs(STATUS_TOAST_SECS)),
            );
        }
        KeyCode::Enter => {
            let Some(raw) = app.take_capture() else {
                app.set_status(
                    "Nothing heard",
                    Some(Duration::from_secs(STATUS_TOAST_SECS)),
                );
                return;
            };
            deliver_transcript(app, &raw);
        }
        KeyCode::Backspace => app.backspace_capture(),
        KeyCode::Char(ch) => app.push_capture_char(ch),
        _ => {}
    }
}

/// Route one finished utterance: app-open commands launch a browser, and the
/// text always also feeds the calculator input machine.
fn deliver_transcript(app: &mut App, raw: &str) {
    if let Some(target) = detect_open_intent(raw) {
        match launcher::open_target(target) {
            Ok(()) => app.set_status(
                format!("Opening {}", target.label()),
                Some(Duration::from_secs(STATUS_TOAST_SECS)),
            ),
            Err(err) => {
                debug!(error = %format!("{err:#}"), "launcher failed");
                app.set_status(
                    format!("Could not open {}", target.label()),
                    Some(Duration::from_secs(STATUS_TOAST_SECS)),
                );
            }
        }
    } else {
        app.set_status(
            "Transcript delivered",
            Some(Duration::from_secs(STATUS_TOAST_SECS)),
        );
    }
    app.keypad
        .accept_transcript(raw, &app.normalizer, &mut app.screen, &app.evaluator);
}

pub fn draw(frame: &mut ratatui::Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(frame.size());

    let border_color = Color::Rgb(95, 175, 175);
    let title_color = Color::Rgb(130, 205, 205);
    let dim_border = Color::Rgb(70, 110, 110);
    let screen_text_color = Color::Rgb(235, 225, 200);
    let entry_text_color = Color::Rgb(255, 215, 120);
    let status_text_color = Color::Rgb(150, 150, 145);

    let screen_title = match app.keypad.state() {
        EntryState::Editing => " Vocalc ",
        EntryState::Error => " Vocalc — error ",
    };
    let inner_width = chunks[0].width.saturating_sub(2);
    let screen_line = tail_by_columns(app.screen.text(), inner_width as usize);
    let screen_block = Paragraph::new(screen_line)
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color))
                .title(Span::styled(
                    screen_title,
                    Style::default()
                        .fg(title_color)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .style(Style::default().fg(screen_text_color));
    frame.render_widget(screen_block, chunks[0]);

    if app.capturing() {
        let entry = app.capture_text();
        let entry_inner = chunks[1].width.saturating_sub(2);
        let visible = tail_by_columns(entry, entry_inner as usize);
        let capture_block = Paragraph::new(visible)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_color))
                    .title(Span::styled(
                        " Speak ",
                        Style::default()
                            .fg(title_color)
                            .add_modifier(Modifier::BOLD),
                    ))
                    .title_bottom(Line::from(vec![
                        Span::styled(" Enter ", Style::default().fg(entry_text_color)),
                        Span::styled("deliver  ", Style::default().fg(dim_border)),
                        Span::styled("Esc ", Style::default().fg(entry_text_color)),
                        Span::styled("cancel ", Style::default().fg(dim_border)),
                    ])),
            )
            .style(Style::default().fg(entry_text_color));
        frame.render_widget(capture_block, chunks[1]);

        let cursor_offset =
            (UnicodeWidthStr::width(visible).min(u16::MAX as usize) as u16).min(entry_inner);
        let cursor_x = chunks[1].x.saturating_add(1).saturating_add(cursor_offset);
        let cursor_y = chunks[1].y + 1;
        frame.set_cursor(cursor_x, cursor_y);
    } else {
        let status = app.status().unwrap_or("Ready");
        let status_block = Paragraph::new(status)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(dim_border))
                    .title(Span::styled(
                        " Status ",
                        Style::default().fg(status_text_color),
                    )),
            )
            .style(Style::default().fg(status_text_color));
        frame.render_widget(status_block, chunks[1]);
    }

    let help_lines = vec![
        Line::from(vec![
            Span::styled("0-9", Style::default().fg(entry_text_color)),
            Span::styled(" digits   ", Style::default().fg(status_text_color)),
            Span::styled("+ - * /", Style::default().fg(entry_text_color)),
            Span::styled(" operators   ", Style::default().fg(status_text_color)),
            Span::styled(".", Style::default().fg(entry_text_color)),
            Span::styled(" point", Style::default().fg(status_text_color)),
        ]),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(entry_text_color)),
            Span::styled(" equals   ", Style::default().fg(status_text_color)),
            Span::styled("c", Style::default().fg(entry_text_color)),
            Span::styled(" clear   ", Style::default().fg(status_text_color)),
            Span::styled("v", Style::default().fg(entry_text_color)),
            Span::styled(" speak   ", Style::default().fg(status_text_color)),
            Span::styled("q", Style::default().fg(entry_text_color)),
            Span::styled(" quit", Style::default().fg(status_text_color)),
        ]),
        Line::from(vec![Span::styled(
            "Say things like \"5 plus 5 equals\", \"sin 30 equals\", or \"open youtube\"",
            Style::default().fg(status_text_color),
        )]),
    ];
    let help_block = Paragraph::new(help_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(dim_border))
            .title(Span::styled(
                " Keys ",
                Style::default().fg(status_text_color),
            )),
    );
    frame.render_widget(help_block, chunks[2]);
}

/// Keep the last columns of a long line so the newest input stays visible.
/// Width-aware and safe on multi-byte text.
fn tail_by_columns(text: &str, max_columns: usize) -> &str {
    if max_columns == 0 {
        return "";
    }
    let mut columns = 0usize;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if columns + width > max_columns {
            break;
        }
        columns += width;
        start = idx;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use crossterm::event::KeyEventState;
    use vocalc::config::AppConfig;
    use vocalc::Normalizer;

    fn test_app() -> App {
        let config = AppConfig::parse_from(["test-app"]);
        App::new(config, Normalizer::builtin())
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key_event(
            app,
            KeyEvent {
                code,
                modifiers: KeyModifiers::NONE,
                kind: crossterm::event::KeyEventKind::Press,
                state: KeyEventState::NONE,
            },
        )
    }

    #[test]
    fn keys_drive_the_keypad() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen.text(), "3");
    }

    #[test]
    fn quit_keys_quit() {
        let mut app = test_app();
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(handle_key_event(
            &mut app,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                kind: crossterm::event::KeyEventKind::Press,
                state: KeyEventState::NONE,
            },
        ));
    }

    #[test]
    fn capture_flow_delivers_into_keypad() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('v'));
        for ch in "5 plus 5 equals".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        press(&mut app, KeyCode::Enter);
        assert!(!app.capturing());
        assert_eq!(app.screen.text(), "10");
    }

    #[test]
    fn escape_cancels_capture_without_delivery() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('7'));
        press(&mut app, KeyCode::Char('v'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);
        assert!(!app.capturing());
        assert_eq!(app.screen.text(), "7");
    }

    #[test]
    fn tail_by_columns_keeps_the_newest_input() {
        assert_eq!(tail_by_columns("123456", 4), "3456");
        assert_eq!(tail_by_columns("abc", 10), "abc");
        assert_eq!(tail_by_columns("abc", 0), "");
    }
}
