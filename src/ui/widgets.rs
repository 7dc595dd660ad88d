use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs},
};

use crate::app::state::{
    ActivityRows, ActivityTab, AppState, DashboardView, MemberView, PickerField,
};
use crate::stats::models::repo_label;
use crate::ui::theme;
use crate::util::time::{format_activity_date, relative_time, truncate};

pub fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
    let title = match state.page.member() {
        Some(view) => format!(" Member Performance Details: {} ", view.username),
        None => " Ranks: Team Performance ".to_string(),
    };

    let block = Block::default()
        .title(Span::styled(title, theme::HEADER))
        .borders(Borders::ALL)
        .border_style(theme::BORDER);

    let line = Line::from(vec![
        Span::styled("Range: ", theme::DIM),
        Span::styled(state.page.date_range.label(), theme::HEADER),
        Span::styled("   ", theme::DIM),
        Span::styled(state.location.to_string(), theme::DIM),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}

pub fn render_loading(f: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::BORDER);
    let para = Paragraph::new(message)
        .style(theme::DIM)
        .centered()
        .block(block);
    f.render_widget(para, area);
}

pub fn render_error_panel(f: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(theme::ERROR);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Error", theme::ERROR)),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: back to dashboard | r: reload | Esc: dismiss",
            theme::DIM,
        )),
    ];

    let para = Paragraph::new(text).centered().block(block);
    f.render_widget(para, area);
}

/// Top three on a podium, laid out 2nd, 1st, 3rd.
pub fn render_podium(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Winners ")
        .borders(Borders::ALL)
        .border_style(theme::BORDER);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let podium = state.podium();
    if podium.is_empty() {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, podium.len() as u32);
            podium.len()
        ])
        .split(inner);

    let members = state
        .page
        .dashboard()
        .map(|view| view.members.as_slice())
        .unwrap_or_default();

    for (display_index, member) in podium.iter().enumerate() {
        let rank = members
            .iter()
            .position(|m| std::ptr::eq(m, *member))
            .unwrap_or(display_index);
        let height = match rank {
            0 => 6,
            1 => 5,
            _ => 4,
        };

        let slot = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(height)])
            .split(columns[display_index])[1];

        let style = theme::rank_style(rank).unwrap_or(theme::HEADER);
        let step = Block::default()
            .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
            .border_style(style);

        let text = vec![
            Line::from(Span::styled(ordinal(rank + 1), style)),
            Line::from(Span::styled(member.username.as_str(), theme::HEADER)),
            Line::from(vec![
                Span::styled(member.performance.to_string(), theme::POINTS),
                Span::styled(" points", theme::DIM),
            ]),
        ];

        f.render_widget(Paragraph::new(text).centered().block(step), slot);
    }
}

pub fn render_rankings(f: &mut Frame, area: Rect, view: &DashboardView) {
    let block = Block::default()
        .title(format!(" Rankings ({}) ", view.members.len()))
        .borders(Borders::ALL)
        .border_style(theme::BORDER_FOCUSED);

    if view.members.is_empty() {
        let para = Paragraph::new("No members in this date range")
            .style(theme::DIM)
            .block(block);
        f.render_widget(para, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Rank").style(theme::HEADER),
        Cell::from("Member").style(theme::HEADER),
        Cell::from("Commits").style(theme::HEADER),
        Cell::from("PRs").style(theme::HEADER),
        Cell::from("Reviews").style(theme::HEADER),
        Cell::from("Points").style(theme::HEADER),
    ])
    .height(1);

    let rows: Vec<Row> = view
        .members
        .iter()
        .enumerate()
        .map(|(i, member)| {
            let selected = i == view.cursor;
            let pick = |style: Style| if selected { theme::HIGHLIGHT } else { style };

            Row::new(vec![
                Cell::from(format!("#{}", i + 1))
                    .style(pick(theme::rank_style(i).unwrap_or(theme::DIM))),
                Cell::from(member.username.as_str()).style(pick(Style::default())),
                Cell::from(member.commit_count.to_string()).style(pick(Style::default())),
                Cell::from(member.pr_count.to_string()).style(pick(Style::default())),
                Cell::from(member.review_count.to_string()).style(pick(Style::default())),
                Cell::from(member.performance.to_string()).style(pick(theme::POINTS)),
            ])
            .height(1)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Min(16),
        Constraint::Length(8),
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

pub fn render_member_detail(f: &mut Frame, area: Rect, state: &AppState, view: &MemberView) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let titles: Vec<String> = ActivityTab::ALL
        .iter()
        .map(|tab| format!("{} ({})", tab.title(), view.count(*tab)))
        .collect();
    let selected = ActivityTab::ALL
        .iter()
        .position(|tab| *tab == view.active_tab)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(theme::TAB_INACTIVE)
        .highlight_style(theme::TAB_ACTIVE);
    f.render_widget(tabs, vertical[0]);

    render_activity_table(f, vertical[1], state, view);

    let page_size = state.settings.page_size;
    let total_pages = view.total_pages(page_size);
    if view.count(view.active_tab) > 0 && total_pages > 1 {
        let page = view.cursors.get(view.active_tab).page;
        let pager = Line::from(vec![
            Span::styled("p: Previous  ", if page > 1 { theme::HEADER } else { theme::DIM }),
            Span::raw(format!("Page {} of {}", page, total_pages)),
            Span::styled(
                "  n: Next",
                if page < total_pages {
                    theme::HEADER
                } else {
                    theme::DIM
                },
            ),
        ]);
        f.render_widget(Paragraph::new(pager).centered(), vertical[2]);
    }
}

fn render_activity_table(f: &mut Frame, area: Rect, state: &AppState, view: &MemberView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::BORDER_FOCUSED);

    if view.count(view.active_tab) == 0 {
        let noun = match view.active_tab {
            ActivityTab::Commits => "commits",
            ActivityTab::PullRequests => "pull requests",
            ActivityTab::Reviews => "reviews",
        };
        let para = Paragraph::new(format!("No {} in this date range", noun))
            .style(theme::DIM)
            .centered()
            .block(block);
        f.render_widget(para, area);
        return;
    }

    let highlight = |i: usize, style: Style| {
        if i == view.row_cursor {
            theme::HIGHLIGHT
        } else {
            style
        }
    };

    let (header, rows, widths): (Vec<&str>, Vec<Row>, Vec<Constraint>) =
        match view.current_page(state.settings.page_size) {
            ActivityRows::Commits(commits) => (
                vec!["Message", "Repository", "Date", "SHA"],
                commits
                    .iter()
                    .enumerate()
                    .map(|(i, c)| {
                        Row::new(vec![
                            Cell::from(truncate(&c.message, state.settings.message_width))
                                .style(highlight(i, Style::default())),
                            Cell::from(repo_label(&c.owner, &c.repo))
                                .style(highlight(i, theme::REPO)),
                            Cell::from(format_activity_date(&c.date))
                                .style(highlight(i, theme::DIM)),
                            Cell::from(c.short_sha().to_string()).style(highlight(i, theme::SHA)),
                        ])
                    })
                    .collect(),
                vec![
                    Constraint::Min(30),
                    Constraint::Length(28),
                    Constraint::Length(24),
                    Constraint::Length(8),
                ],
            ),
            ActivityRows::PullRequests(prs) => (
                vec!["Title", "Repository", "State", "Created"],
                prs.iter()
                    .enumerate()
                    .map(|(i, pr)| {
                        let state_style = if pr.is_closed() {
                            theme::STATE_CLOSED
                        } else {
                            theme::STATE_OPEN
                        };
                        Row::new(vec![
                            Cell::from(pr.pr_raw.title.as_str())
                                .style(highlight(i, Style::default())),
                            Cell::from(repo_label(&pr.owner, &pr.repo))
                                .style(highlight(i, theme::REPO)),
                            Cell::from(pr.pr_raw.state.as_str()).style(highlight(i, state_style)),
                            Cell::from(format_activity_date(&pr.pr_raw.created_at))
                                .style(highlight(i, theme::DIM)),
                        ])
                    })
                    .collect(),
                vec![
                    Constraint::Min(30),
                    Constraint::Length(28),
                    Constraint::Length(8),
                    Constraint::Length(24),
                ],
            ),
            ActivityRows::Reviews(reviews) => (
                vec!["PR ID", "Repository", "Date"],
                reviews
                    .iter()
                    .enumerate()
                    .map(|(i, r)| {
                        Row::new(vec![
                            Cell::from(r.pr_id.as_str()).style(highlight(i, Style::default())),
                            Cell::from(repo_label(&r.owner, &r.repo))
                                .style(highlight(i, theme::REPO)),
                            Cell::from(format_activity_date(&r.date))
                                .style(highlight(i, theme::DIM)),
                        ])
                    })
                    .collect(),
                vec![
                    Constraint::Length(14),
                    Constraint::Min(28),
                    Constraint::Length(24),
                ],
            ),
        };

    let header = Row::new(
        header
            .into_iter()
            .map(|h| Cell::from(h).style(theme::HEADER))
            .collect::<Vec<_>>(),
    )
    .height(1);

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

pub fn render_date_picker(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(ref picker) = state.page.picker else {
        return;
    };

    let width = 44u16.min(area.width);
    let height = 8u16.min(area.height);
    let modal = Rect {
        x: area.width.saturating_sub(width) / 2,
        y: area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    f.render_widget(Clear, modal);

    let block = Block::default()
        .title(" Date Range ")
        .borders(Borders::ALL)
        .border_style(theme::BORDER_FOCUSED);

    let field = |label: &str, value: &str, active: bool| {
        let cursor = if active { "_" } else { "" };
        Line::from(vec![
            Span::styled(format!("{:<11}", label), theme::DIM),
            Span::styled(
                format!("{}{}", value, cursor),
                if active { theme::HIGHLIGHT } else { theme::HEADER },
            ),
        ])
    };

    let mut text = vec![
        field("From Date", &picker.from_input, picker.field == PickerField::From),
        field("To Date", &picker.to_input, picker.field == PickerField::To),
        Line::from(""),
    ];
    match &picker.error {
        Some(err) => text.push(Line::from(Span::styled(err.as_str(), theme::ERROR))),
        None => text.push(Line::from(Span::styled("YYYY-MM-DD", theme::DIM))),
    }
    text.push(Line::from(Span::styled(
        "Enter: apply | Tab: switch | Esc: cancel",
        theme::DIM,
    )));

    f.render_widget(Paragraph::new(text).block(block), modal);
}

pub fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let key_hints = if state.page.picker.is_some() {
        "Enter: apply | Tab: switch field | Esc: cancel"
    } else if state.page.member().is_some() {
        "Tab: tab | j/k: row | n/p: page | o: open | d: dates | r: reload | Esc: back | q: quit"
    } else {
        "j/k: nav | Enter: member | d: dates | r: reload | q: quit"
    };

    let status = if state.page.loading {
        "Loading...".to_string()
    } else {
        state
            .last_refresh
            .as_ref()
            .map(|t| format!("updated {}", relative_time(t)))
            .unwrap_or_default()
    };

    let total_width = area.width as usize;
    let padding = total_width.saturating_sub(key_hints.len() + status.len() + 1);

    let line = Line::from(vec![
        Span::styled(key_hints, theme::STATUS_BAR),
        Span::styled(" ".repeat(padding + 1), theme::STATUS_BAR),
        Span::styled(status, theme::STATUS_BAR),
    ]);

    f.render_widget(Paragraph::new(line).style(theme::STATUS_BAR), area);
}

fn ordinal(n: usize) -> String {
    let suffix = match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
