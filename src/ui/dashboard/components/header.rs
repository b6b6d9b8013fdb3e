//! Dashboard navigation bar
//!
//! Branding, the route links, and a one-line refresh status

use super::super::state::DashboardState;
use crate::ui::app::Route;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub const BRAND: &str = "🌿 Hydroponics Dashboard";

/// Status text: endpoint, time of last change, and staleness.
pub fn status_text(state: &DashboardState) -> String {
    let mut parts = vec![format!("Source: {}", state.environment.api_url())];
    match state.last_update() {
        Some(time) => parts.push(format!("Updated: {}", time)),
        None if state.last_failure().is_some() => parts.push("Waiting for first response".to_string()),
        None => parts.push("Connecting...".to_string()),
    }
    if state.is_stale() {
        parts.push("STALE".to_string());
    }
    parts.join(" | ")
}

/// Render the navigation strip followed by the status line.
pub fn render_header(f: &mut Frame, area: Rect, state: &DashboardState, active: Route) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let nav_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(24)])
        .split(header_chunks[0]);

    let nav_block = || {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Green))
    };

    let brand = Paragraph::new(BRAND)
        .style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .block(nav_block());
    f.render_widget(brand, nav_chunks[0]);

    let links: Vec<Span> = Route::ALL
        .iter()
        .map(|route| {
            let style = if *route == active {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            Span::styled(format!(" {} ", route.title()), style)
        })
        .collect();
    let nav = Paragraph::new(Line::from(links))
        .alignment(Alignment::Right)
        .block(nav_block());
    f.render_widget(nav, nav_chunks[1]);

    let status_color = if state.is_stale() {
        Color::LightYellow
    } else {
        Color::DarkGray
    };
    let status = Paragraph::new(status_text(state))
        .style(Style::default().fg(status_color))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(status, header_chunks[1]);
}
