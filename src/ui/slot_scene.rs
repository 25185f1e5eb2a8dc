//! The slot machine screen: reels on top, balances and shop below.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::glyphs::{symbol_color, symbol_glyph};
use crate::core::constants::{TOKEN_PACK_COST, TOKEN_PACK_SIZE};
use crate::core::game_state::SessionState;

/// Render the reels with the multiplier next to them.
pub fn render_reels(frame: &mut Frame, area: Rect, state: &SessionState) {
    let border_color = if state.is_spinning() {
        Color::Yellow
    } else {
        Color::Green
    };
    let block = Block::default()
        .title(" Jackpot ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let mut spans = Vec::new();
    for symbol in state.slot {
        spans.push(Span::styled(
            format!(" {} ", symbol_glyph(symbol)),
            Style::default()
                .fg(symbol_color(symbol))
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(
        format!("x{} multiplier", state.multiplier),
        Style::default().fg(Color::Cyan),
    ));

    let lines = vec![Line::from(""), Line::from(spans)];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Render the result message, balances, mode and controls.
pub fn render_console(
    frame: &mut Frame,
    area: Rect,
    state: &SessionState,
    save_error: Option<&str>,
) {
    let mut lines = vec![
        Line::from(Span::styled(
            state.last_message.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("You have {} tokens left", state.tokens)),
        Line::from(format!("You have {} dollars", state.currency)),
        Line::from(format!(
            "The current jackpot is worth {} dollars!",
            state.jackpot_pool
        )),
    ];

    if state.is_daytime {
        lines.push(Line::from(Span::styled(
            "It is currently daytime! You are safe 🌅",
            Style::default().fg(Color::Yellow),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "It is currently nighttime! Watch out for skulls 💀",
            Style::default().fg(Color::Blue),
        )));
    }

    if state.fever_active {
        lines.push(Line::from(Span::styled(
            "🔥 You're on fire! Your next win will be doubled! 🔥",
            Style::default().fg(Color::Red),
        )));
    }
    if state.free_spin_pending {
        lines.push(Line::from(Span::styled(
            "🆓 Your next spin is free!",
            Style::default().fg(Color::Green),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from("Press the spacebar to spin!"));
    lines.push(Line::from(format!(
        "Press 'x' to exchange ${} for {} tokens",
        TOKEN_PACK_COST, TOKEN_PACK_SIZE
    )));
    lines.push(Line::from("Press 'q' to quit"));

    if let Some(err) = save_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Progress not saved: {}", err),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Split the screen and draw both panels.
pub fn render_slot_scene(
    frame: &mut Frame,
    area: Rect,
    state: &SessionState,
    save_error: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);

    render_reels(frame, chunks[0], state);
    render_console(frame, chunks[1], state, save_error);
}
