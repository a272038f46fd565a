use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, ROUND_OPTIONS};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(14),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "MATH QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Multiplication · Four Choices".fg(Color::DarkGray)),
        Line::from(""),
        difficulty_line(app),
        Line::from(""),
        rounds_line(app),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    render_controls(frame, chunks[2]);
}

fn difficulty_line(app: &App) -> Line<'static> {
    Line::from(vec![
        Span::styled("Difficulty  ", Style::default().fg(Color::Gray)),
        Span::styled("< ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:2}", app.difficulty()),
            Style::default().fg(Color::Cyan).bold(),
        ),
        Span::styled(" >", Style::default().fg(Color::DarkGray)),
    ])
}

fn rounds_line(app: &App) -> Line<'static> {
    let mut spans = vec![Span::styled("Rounds  ", Style::default().fg(Color::Gray))];
    for &option in ROUND_OPTIONS.iter() {
        let style = if option == app.rounds() {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {option} "), style));
    }
    Line::from(spans)
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("h/l difficulty  ·  j/k rounds  ·  enter start  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
