//! UI rendering for the explorer.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    style::{Color, Style, Modifier},
};
use crate::{Bit, Bus16};
use super::app::{ExplorerApp, Register};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &ExplorerApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(frame.area());

    draw_inputs(frame, chunks[0], app);
    draw_control(frame, chunks[1], app);
    draw_output(frame, chunks[2], app);
    draw_status(frame, chunks[3], app);
    draw_help(frame, chunks[4]);
}

/// One register as a row of colored bits plus its hex and signed value.
fn word_line<'a>(label: &'a str, word: Bus16, focused: bool) -> Line<'a> {
    let marker = if focused { "▶ " } else { "  " };
    let mut spans = vec![Span::styled(
        format!("{}{:<4}", marker, label),
        if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        },
    )];
    for (i, bit) in word.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(bit.to_string(), bit_style(bit)));
    }
    spans.push(Span::raw(format!("  0x{:04X}  {:>6}", word.to_u16(), word.to_i16())));
    Line::from(spans)
}

/// Draw the x and y registers.
fn draw_inputs(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let content = vec![
        word_line("x", app.x, app.focus == Register::X),
        word_line("y", app.y, app.focus == Register::Y),
    ];

    let paragraph = Paragraph::new(content)
        .block(Block::default()
            .title(" Inputs ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)));

    frame.render_widget(paragraph, area);
}

/// Draw the control bits with the cursor and the decoded operation.
fn draw_control(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let mut spans = Vec::new();
    for (i, (name, bit)) in app.control_bits().into_iter().enumerate() {
        let mut style = bit_style(bit);
        if i == app.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!(" {}={} ", name, bit), style));
    }

    let operation = match app.control.operation() {
        Some(op) => Span::styled(format!("out = {}", op), Style::default().fg(Color::Yellow)),
        None => Span::styled("non-canonical", Style::default().fg(Color::DarkGray)),
    };

    let paragraph = Paragraph::new(vec![Line::from(spans), Line::from(operation)])
        .block(Block::default()
            .title(" Control ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)));

    frame.render_widget(paragraph, area);
}

/// Draw the ALU outputs.
fn draw_output(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let result = app.result();
    let content = vec![
        word_line("out", result.out, false),
        Line::from(vec![
            Span::raw("  zr  "),
            Span::styled(result.zr.to_string(), bit_style(result.zr)),
            Span::raw("   ng  "),
            Span::styled(result.ng.to_string(), bit_style(result.ng)),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(Block::default()
            .title(" Output ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)));

    frame.render_widget(paragraph, area);
}

/// Draw status bar.
fn draw_status(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let status = Paragraph::new(app.status.clone())
        .style(Style::default().fg(Color::White))
        .block(Block::default()
            .title(" Status ")
            .borders(Borders::ALL));

    frame.render_widget(status, area);
}

/// Draw help panel.
fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(vec![
        Line::from("0-9 a-f: Enter hex  Backspace: Drop digit  Del: Clear  -: Negate  Tab: x/y"),
        Line::from("←→: Select control bit  Space: Toggle  ↑↓: Cycle operation  q: Quit"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default()
        .title(" Help ")
        .borders(Borders::ALL));

    frame.render_widget(help, area);
}

/// Get color style for a bit.
fn bit_style(bit: Bit) -> Style {
    match bit {
        Bit::Low => Style::default().fg(Color::Gray),
        Bit::High => Style::default().fg(Color::Green),
    }
}
