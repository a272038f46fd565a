mod game;
mod settings;
mod summary;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Settings => settings::render(frame, area, app),
        Screen::Game => game::render(frame, area, app),
        Screen::Summary => summary::render(frame, area, app),
    }
}
