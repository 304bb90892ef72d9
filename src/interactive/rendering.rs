//! TUI rendering with ratatui

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Results
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_results(f, app, chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 ANAGRAM FINDER - Live Search")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Results ({}) ", app.hits.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if app.input.is_empty() {
        let welcome = Paragraph::new(vec![
            Line::from(""),
            Line::from("Type letters to search the dictionary."),
            Line::from("Use ? as a wildcard for any letter."),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(welcome, area);
        return;
    }

    if app.hits.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "no results found",
                Style::default().fg(Color::Yellow),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .hits
        .iter()
        .skip(app.scroll)
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>2} ", word.len()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    word.text().to_string(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(Line::from(vec![
        Span::styled(
            app.input.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("▌", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let timing = if app.input.is_empty() {
        String::new()
    } else {
        format!(" | {:.2} ms", app.search_time.as_secs_f64() * 1000.0)
    };

    let status = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} words indexed", app.dictionary_len()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(timing, Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(
            "Esc clear/quit | Ctrl-C quit | ↑/↓ scroll",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status, area);
}
