//! Dashboard main renderer

use super::components::data_card::{
    DataCard, NUTRIENT_PLACEHOLDER, NUTRIENT_TITLE, SENSOR_PLACEHOLDER, SENSOR_TITLE,
    render_data_card,
};
use super::components::{alerts, footer, header, logs};
use super::state::DashboardState;
use crate::ui::app::Route;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 24, 20))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(6),
            Constraint::Percentage(25),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state, Route::Dashboard);

    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[1]);

    let (sensor_alerts, nutrient_alerts) = alerts::current_alerts(state);

    render_data_card(
        f,
        card_chunks[0],
        SENSOR_TITLE,
        SENSOR_PLACEHOLDER,
        state.sensor().map(DataCard::Verbatim),
        &sensor_alerts,
    );
    render_data_card(
        f,
        card_chunks[1],
        NUTRIENT_TITLE,
        NUTRIENT_PLACEHOLDER,
        state.nutrients().map(DataCard::Numeric),
        &nutrient_alerts,
    );

    alerts::render_alerts_panel(f, main_chunks[2], state, &sensor_alerts, &nutrient_alerts);
    logs::render_logs_panel(f, main_chunks[3], state);
    footer::render_footer(f, main_chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::environment::Environment;
    use crate::snapshot::LatestData;
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::components::alerts::ALL_CLEAR;
    use crate::ui::dashboard::components::data_card::EMPTY_CARD;
    use crate::workers::FetchOutcome;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    const WIDTH: u16 = 120;
    const HEIGHT: u16 = 40;

    fn draw(state: &DashboardState) -> Vec<String> {
        let backend = TestBackend::new(WIDTH, HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .chunks(WIDTH as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn screen_contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }

    fn data(body: &str) -> LatestData {
        LatestData::from_value(serde_json::from_str(body).unwrap()).unwrap()
    }

    #[test]
    fn test_placeholders_before_first_response() {
        let state = DashboardState::new(Environment::Local, UIConfig::new(false));
        let rows = draw(&state);
        assert!(screen_contains(&rows, SENSOR_PLACEHOLDER));
        assert!(screen_contains(&rows, NUTRIENT_PLACEHOLDER));
        assert!(screen_contains(&rows, SENSOR_TITLE));
        assert!(screen_contains(&rows, NUTRIENT_TITLE));
        assert!(!screen_contains(&rows, ALL_CLEAR));
    }

    #[test]
    fn test_cards_show_latest_values() {
        let mut state = DashboardState::new(Environment::Local, UIConfig::new(false));
        state.apply_outcome(FetchOutcome {
            seq: 0,
            result: Ok(data(r#"{"sensor":{"temp":"22C"},"nutrients":{"N":12.345}}"#)),
        });
        let rows = draw(&state);
        assert!(screen_contains(&rows, "temp: 22C"));
        assert!(screen_contains(&rows, "N: 12.35"));
        assert!(!screen_contains(&rows, SENSOR_PLACEHOLDER));
        assert!(!screen_contains(&rows, NUTRIENT_PLACEHOLDER));
        assert!(screen_contains(&rows, ALL_CLEAR));
    }

    #[test]
    fn test_empty_mapping_is_not_a_loading_state() {
        let mut state = DashboardState::new(Environment::Local, UIConfig::new(false));
        state.apply_outcome(FetchOutcome {
            seq: 0,
            result: Ok(data(r#"{"sensor":{},"nutrients":{"N":1}}"#)),
        });
        let rows = draw(&state);
        assert!(screen_contains(&rows, EMPTY_CARD));
        assert!(screen_contains(&rows, "N: 1.00"));
        assert!(!screen_contains(&rows, SENSOR_PLACEHOLDER));
    }

    #[test]
    fn test_failure_keeps_values_and_marks_stale() {
        let mut state = DashboardState::new(Environment::Local, UIConfig::new(false));
        state.apply_outcome(FetchOutcome {
            seq: 0,
            result: Ok(data(r#"{"sensor":{"pH":5.2},"nutrients":{"Nitrogen":150}}"#)),
        });
        state.apply_outcome(FetchOutcome {
            seq: 1,
            result: Err(ApiError::Http {
                status: 503,
                message: "down".to_string(),
            }),
        });
        let rows = draw(&state);
        assert!(screen_contains(&rows, "pH: 5.2"));
        assert!(screen_contains(&rows, "Nitrogen: 150.00"));
        assert!(screen_contains(&rows, "STALE"));
        assert!(screen_contains(&rows, "pH is too LOW: 5.2"));
    }
}
