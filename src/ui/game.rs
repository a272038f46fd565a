use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

const SLOT_LABELS: [char; 4] = ['1', '2', '3', '4'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if app.session().is_none() {
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_question(frame, chunks[1], app);
    render_answers(frame, chunks[3], app);
    render_feedback(frame, chunks[4], app);
    render_controls(frame, chunks[5]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    // During feedback rounds_played is already bumped; keep showing the
    // number of the round on screen.
    let current = match session.phase() {
        crate::game::Phase::RoundInProgress => session.rounds_played() + 1,
        _ => session.rounds_played(),
    };

    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let score = Paragraph::new(format!("score {}", session.score()))
        .alignment(Alignment::Left)
        .fg(Color::DarkGray);
    frame.render_widget(score, halves[0]);

    let progress = Paragraph::new(format!("{}/{}", current, session.total_rounds()))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(progress, halves[1]);
}

fn render_question(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };
    let question = session.question();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} × {}", question.factor_a, question.factor_b),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_answers(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let resolved = session.last_answer_correct().is_some();
    let correct_index = session.answers().correct_index();
    let mut lines: Vec<Line> = Vec::with_capacity(8);
    lines.push(Line::from(""));

    for (index, &choice) in session.answers().choices().iter().enumerate() {
        let is_selected = index == app.selected_slot();
        let style = if resolved && index == correct_index {
            Style::default().fg(Color::Green).bold()
        } else if resolved && is_selected {
            Style::default().fg(Color::Red).bold()
        } else if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", SLOT_LABELS[index]), style),
            Span::styled(format!("{choice}"), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let line = match session.last_answer_correct() {
        Some(true) => Line::from(Span::styled(
            "Correct!",
            Style::default().fg(Color::Green).bold(),
        )),
        Some(false) => {
            let question = session.question();
            Line::from(Span::styled(
                format!(
                    "Wrong, {} × {} = {}",
                    question.factor_a,
                    question.factor_b,
                    question.correct_answer()
                ),
                Style::default().fg(Color::Red).bold(),
            ))
        }
        None => Line::from(""),
    };

    let widget = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k or 1-4 choose  ·  enter answer  ·  esc settings  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
