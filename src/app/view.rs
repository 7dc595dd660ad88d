use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::state::{AppState, PageContent};
use crate::ui::widgets;

pub fn render(f: &mut Frame, state: &AppState) {
    // Main layout: header + body + status bar
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let header_area = vertical[0];
    let body_area = vertical[1];
    let status_area = vertical[2];

    widgets::render_header(f, header_area, state);
    widgets::render_status_bar(f, status_area, state);

    if let Some(ref message) = state.page.error {
        widgets::render_error_panel(f, body_area, message);
        return;
    }

    match &state.page.content {
        PageContent::Dashboard(view) => {
            if state.page.loading && view.members.is_empty() {
                widgets::render_loading(f, body_area, "Loading...");
            } else {
                let body = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(9), Constraint::Min(3)])
                    .split(body_area);
                widgets::render_podium(f, body[0], state);
                widgets::render_rankings(f, body[1], view);
            }
        }
        PageContent::Member(view) => {
            if state.page.loading && view.activity.is_none() {
                widgets::render_loading(f, body_area, "Loading member details...");
            } else {
                widgets::render_member_detail(f, body_area, state, view);
            }
        }
    }

    // Overlays
    widgets::render_date_picker(f, f.area(), state);
}
