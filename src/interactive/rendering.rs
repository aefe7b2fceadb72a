//! TUI rendering with ratatui
//!
//! Letter tiles, score, accepted words, and the end-of-game word list.

use super::app::{App, InputMode, MessageStyle};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🔤 WORDPOOL - {} (game #{})",
        app.session.player(),
        app.session.id()
    );
    let header = Paragraph::new(title)
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(area);

    render_tiles(f, app, chunks[0]);
    match app.input_mode {
        InputMode::Playing => render_accepted(f, app, chunks[1]),
        InputMode::Finished => render_summary(f, app, chunks[1]),
    }
}

fn render_tiles(f: &mut Frame, app: &App, area: Rect) {
    let spans: Vec<Span> = app
        .tiles()
        .into_iter()
        .map(|(letter, used)| {
            let style = if used {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            };
            Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
        })
        .flat_map(|tile| [tile, Span::raw(" ")])
        .collect();

    let tiles = Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Letters ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(tiles, area);
}

fn render_accepted(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .accepted
        .iter()
        .rev()
        .map(|accepted| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<16}", accepted.word.to_uppercase()),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("+{}", accepted.points),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let title = format!(" Words ({}) ", app.accepted.len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_summary(f: &mut Frame, app: &App, area: Rect) {
    let Some(summary) = &app.summary else {
        return;
    };

    let mut content = vec![Line::from(vec![
        Span::raw("Left over: "),
        Span::styled(
            summary.remaining.to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if summary.remaining.is_empty() {
        content.push(Line::from(Span::styled(
            "Every letter used!",
            Style::default().fg(Color::Green),
        )));
    } else if summary.possible_words.is_empty() {
        content.push(Line::from("No words left to make."));
    } else {
        content.push(Line::from(format!(
            "{} words were still possible:",
            summary.possible_words.len()
        )));
        content.push(Line::from(Span::styled(
            summary.possible_words.join("  "),
            Style::default().fg(Color::Cyan),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Game Over ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_score(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.puzzle_letters().count();
    let used = total - app.remaining().chars().count();
    let percent = if total == 0 {
        0
    } else {
        // Bounded by 100 since used <= total
        (used * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!(
            "{} points | {used}/{total} letters",
            app.session.score()
        ));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => (
            " 🎉 GAME OVER 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Playing => (
            " Type a word | Enter to submit | Tab to finish ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = match app.input_mode {
        InputMode::Playing => "Esc: Quit | Enter: Submit | Tab: Finish",
        InputMode::Finished => "q: Quit | n: New Game",
    };
    let text = format!(
        "Games: {} | Best: {} | {help}",
        app.stats.games_played, app.stats.best_score
    );

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
