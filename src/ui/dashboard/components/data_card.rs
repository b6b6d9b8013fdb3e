//! Dashboard data card component
//!
//! Renders one labeled mapping per card: sensor readings verbatim, nutrient
//! predictions with two decimals.

use crate::snapshot::{NutrientSnapshot, SensorSnapshot, display_value};
use crate::thresholds::{Alert, Direction};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub const SENSOR_TITLE: &str = "LATEST SENSOR READINGS";
pub const NUTRIENT_TITLE: &str = "PREDICTED NUTRIENT LEVELS";
pub const SENSOR_PLACEHOLDER: &str = "Loading sensor data...";
pub const NUTRIENT_PLACEHOLDER: &str = "Loading predictions...";
pub const EMPTY_CARD: &str = "No entries in latest response";

/// The two card variants.
#[derive(Debug, Clone, Copy)]
pub enum DataCard<'a> {
    /// Values printed in their default string form.
    Verbatim(&'a SensorSnapshot),
    /// Values printed with exactly two decimals.
    Numeric(&'a NutrientSnapshot),
}

impl DataCard<'_> {
    pub fn is_empty(&self) -> bool {
        match self {
            DataCard::Verbatim(snapshot) => snapshot.is_empty(),
            DataCard::Numeric(snapshot) => snapshot.is_empty(),
        }
    }

    /// `(label, rendered value)` pairs in snapshot order.
    pub fn entries(&self) -> Vec<(String, String)> {
        match self {
            DataCard::Verbatim(snapshot) => snapshot
                .iter()
                .map(|(label, value)| (label.to_string(), display_value(value)))
                .collect(),
            DataCard::Numeric(snapshot) => snapshot
                .iter()
                .map(|(label, value)| (label.to_string(), format!("{:.2}", value)))
                .collect(),
        }
    }

    /// One `"<label>: <value>"` line per entry.
    pub fn lines(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect()
    }
}

fn value_color(label: &str, alerts: &[Alert]) -> Color {
    match alerts.iter().find(|alert| alert.parameter == label) {
        Some(alert) if alert.direction == Direction::High => Color::LightRed,
        Some(_) => Color::LightYellow,
        None => Color::White,
    }
}

/// Render a card, or its loading placeholder while the snapshot is absent.
/// Entries with an active alert are highlighted.
pub fn render_data_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    placeholder: &str,
    card: Option<DataCard>,
    alerts: &[Alert],
) {
    let lines: Vec<Line> = match card {
        Some(card) if card.is_empty() => vec![Line::from(Span::styled(
            EMPTY_CARD,
            Style::default().fg(Color::DarkGray),
        ))],
        Some(card) => card
            .entries()
            .into_iter()
            .map(|(label, value)| {
                let color = value_color(&label, alerts);
                Line::from(vec![
                    Span::styled(
                        format!("{}:", label),
                        Style::default()
                            .fg(Color::LightGreen)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" {}", value), Style::default().fg(color)),
                ])
            })
            .collect(),
        None => vec![Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
