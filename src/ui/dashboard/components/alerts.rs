//! Dashboard threshold alerts panel

use super::super::state::DashboardState;
use crate::thresholds::{Alert, Direction, evaluate_nutrients, evaluate_sensor};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub const ALL_CLEAR: &str = "All parameters are within safe thresholds.";

/// Alerts for whatever snapshots are currently held; empty before the first response.
pub fn current_alerts(state: &DashboardState) -> (Vec<Alert>, Vec<Alert>) {
    let sensor = state.sensor().map(evaluate_sensor).unwrap_or_default();
    let nutrients = state.nutrients().map(evaluate_nutrients).unwrap_or_default();
    (sensor, nutrients)
}

pub fn render_alerts_panel(
    f: &mut Frame,
    area: Rect,
    state: &DashboardState,
    sensor_alerts: &[Alert],
    nutrient_alerts: &[Alert],
) {
    let lines: Vec<Line> = if state.sensor().is_none() {
        Vec::new()
    } else if sensor_alerts.is_empty() && nutrient_alerts.is_empty() {
        vec![Line::from(Span::styled(
            format!("✅ {}", ALL_CLEAR),
            Style::default().fg(Color::LightGreen),
        ))]
    } else {
        sensor_alerts
            .iter()
            .chain(nutrient_alerts.iter())
            .map(|alert| {
                let (icon, color) = match alert.direction {
                    Direction::Low => ("🔻", Color::LightYellow),
                    Direction::High => ("🔺", Color::LightRed),
                };
                Line::from(Span::styled(
                    format!("{} {}", icon, alert),
                    Style::default().fg(color),
                ))
            })
            .collect()
    };

    let block = Block::default()
        .title("THRESHOLD ALERTS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
