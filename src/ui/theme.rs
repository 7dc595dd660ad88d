use ratatui::style::{Color, Modifier, Style};

pub const HIGHLIGHT: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

pub const HEADER: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

pub const DIM: Style = Style::new().fg(Color::DarkGray);

pub const ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

pub const BORDER: Style = Style::new().fg(Color::DarkGray);

pub const BORDER_FOCUSED: Style = Style::new().fg(Color::Cyan);

pub const STATUS_BAR: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

pub const GOLD: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

pub const SILVER: Style = Style::new().fg(Color::Gray).add_modifier(Modifier::BOLD);

pub const BRONZE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::BOLD);

pub const POINTS: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);

pub const TAB_ACTIVE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::White)
    .add_modifier(Modifier::BOLD);

pub const TAB_INACTIVE: Style = Style::new().fg(Color::Gray);

pub const REPO: Style = Style::new().fg(Color::Cyan);

pub const SHA: Style = Style::new().fg(Color::Yellow);

pub const STATE_OPEN: Style = Style::new().fg(Color::Green);

pub const STATE_CLOSED: Style = Style::new().fg(Color::Magenta);

/// Medal colour for a 0-based rank, if it earns one.
pub fn rank_style(rank: usize) -> Option<Style> {
    match rank {
        0 => Some(GOLD),
        1 => Some(SILVER),
        2 => Some(BRONZE),
        _ => None,
    }
}
