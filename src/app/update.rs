use tracing::{debug, warn};

use crate::app::actions::{Action, DataPayload, SideEffect};
use crate::app::location::{Location, Route};
use crate::app::state::{ActivityTab, AppState, DatePicker, PageContent, PickerField, RequestTag};
use crate::util::date::{DateRange, from_input_value};

/// Issue the fetch for the page mounted by `AppState::new`.
pub fn start(state: &mut AppState) -> Vec<SideEffect> {
    vec![issue_fetch(state)]
}

pub fn update(state: &mut AppState, action: Action) -> Vec<SideEffect> {
    match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::MoveUp => {
            match &mut state.page.content {
                PageContent::Dashboard(view) => {
                    view.cursor = view.cursor.saturating_sub(1);
                }
                PageContent::Member(view) => {
                    view.row_cursor = view.row_cursor.saturating_sub(1);
                }
            }
            vec![]
        }
        Action::MoveDown => {
            let page_size = state.settings.page_size;
            match &mut state.page.content {
                PageContent::Dashboard(view) => {
                    if view.cursor + 1 < view.members.len() {
                        view.cursor += 1;
                    }
                }
                PageContent::Member(view) => {
                    let rows = view.current_page(page_size).len();
                    if view.row_cursor + 1 < rows {
                        view.row_cursor += 1;
                    }
                }
            }
            vec![]
        }
        Action::Select => match &state.page.content {
            PageContent::Dashboard(view) => match view.selected_member() {
                Some(member) => {
                    let target = Location::member(member.username.clone())
                        .with_date_range(&state.page.date_range);
                    navigate(state, target)
                }
                None => vec![],
            },
            PageContent::Member(view) => view
                .selected_url(state.settings.page_size)
                .map(SideEffect::OpenUrl)
                .into_iter()
                .collect(),
        },
        Action::Back => {
            if state.page.picker.is_some() {
                state.page.picker = None;
                vec![]
            } else if state.page.error.is_some() {
                navigate(state, Location::root())
            } else {
                go_back(state)
            }
        }
        Action::NextTab => {
            let next = state.page.member().map(|view| view.active_tab.next());
            next.map(|tab| select_tab(state, tab)).unwrap_or_default()
        }
        Action::PrevTab => {
            let prev = state.page.member().map(|view| view.active_tab.prev());
            prev.map(|tab| select_tab(state, tab)).unwrap_or_default()
        }
        Action::SelectTab(tab) => select_tab(state, tab),
        Action::NextPage => {
            let page_size = state.settings.page_size;
            if let Some(view) = state.page.member_mut() {
                let total = view.total_pages(page_size);
                let tab = view.active_tab;
                if view.cursors.get_mut(tab).next(total) {
                    view.row_cursor = 0;
                }
            }
            vec![]
        }
        Action::PrevPage => {
            if let Some(view) = state.page.member_mut() {
                let tab = view.active_tab;
                if view.cursors.get_mut(tab).prev() {
                    view.row_cursor = 0;
                }
            }
            vec![]
        }
        Action::OpenInBrowser => state
            .page
            .member()
            .and_then(|view| view.selected_url(state.settings.page_size))
            .map(SideEffect::OpenUrl)
            .into_iter()
            .collect(),
        Action::Reload => {
            let location = state.location.clone();
            state.remount(location);
            vec![issue_fetch(state)]
        }
        Action::Navigate(location) => navigate(state, location),
        Action::OpenDatePicker => {
            if !state.page.loading {
                state.page.picker = Some(DatePicker::for_range(&state.page.date_range));
            }
            vec![]
        }
        Action::PickerInput(ch) => {
            if let Some(picker) = state.page.picker.as_mut() {
                picker.active_input_mut().push(ch);
                picker.error = None;
            }
            vec![]
        }
        Action::PickerBackspace => {
            if let Some(picker) = state.page.picker.as_mut() {
                picker.active_input_mut().pop();
                picker.error = None;
            }
            vec![]
        }
        Action::PickerSwitchField => {
            if let Some(picker) = state.page.picker.as_mut() {
                picker.field = match picker.field {
                    PickerField::From => PickerField::To,
                    PickerField::To => PickerField::From,
                };
            }
            vec![]
        }
        Action::PickerApply => {
            if state.page.loading {
                return vec![];
            }
            let Some(picker) = state.page.picker.as_mut() else {
                return vec![];
            };
            let converted = from_input_value(&picker.from_input)
                .and_then(|from| from_input_value(&picker.to_input).map(|to| (from, to)));
            match converted {
                Ok((from, to)) => apply_date_range(state, DateRange::new(from, to)),
                Err(e) => {
                    picker.error = Some(e.to_string());
                    vec![]
                }
            }
        }
        Action::PickerCancel => {
            state.page.picker = None;
            vec![]
        }
        Action::ApplyDateRange(range) => apply_date_range(state, range),
        Action::DataLoaded { tag, payload } => {
            if !accepts(state, tag) {
                return vec![];
            }
            state.page.loading = false;
            state.last_refresh = Some(chrono::Utc::now());

            match (payload, &mut state.page.content) {
                (DataPayload::MemberPerformance(members), PageContent::Dashboard(view)) => {
                    view.members = members;
                    if view.cursor >= view.members.len() {
                        view.cursor = view.members.len().saturating_sub(1);
                    }
                }
                (DataPayload::MemberActivity(activity), PageContent::Member(view)) => {
                    view.activity = Some(activity);
                    view.cursors.reset_all();
                    view.row_cursor = 0;
                }
                (payload, _) => {
                    warn!(?payload, "Payload does not match the mounted page");
                }
            }
            vec![]
        }
        Action::LoadError { tag, message } => {
            if !accepts(state, tag) {
                return vec![];
            }
            // Data from an earlier successful fetch stays in place.
            state.page.loading = false;
            state.page.error = Some(message);
            vec![]
        }
        Action::DismissError => {
            state.page.error = None;
            vec![]
        }
        Action::Tick => vec![],
    }
}

fn issue_fetch(state: &mut AppState) -> SideEffect {
    let page = &mut state.page;
    page.latest_seq += 1;
    page.loading = true;
    page.error = None;

    let tag = RequestTag {
        page_id: page.id,
        seq: page.latest_seq,
    };
    let range = page.date_range.clone();
    if !range.is_ordered() {
        warn!(from = %range.from, to = %range.to, "Date range ends before it starts");
    }

    match &page.content {
        PageContent::Dashboard(_) => SideEffect::FetchMemberPerformance { tag, range },
        PageContent::Member(view) => SideEffect::FetchMemberActivity {
            tag,
            username: view.username.clone(),
            range,
        },
    }
}

fn navigate(state: &mut AppState, location: Location) -> Vec<SideEffect> {
    debug!(from = %state.location, to = %location, "Navigating");
    let previous = state.location.clone();
    state.history.push(previous);
    state.remount(location);
    vec![issue_fetch(state)]
}

fn go_back(state: &mut AppState) -> Vec<SideEffect> {
    let target = match state.history.pop() {
        Some(location) => location,
        None if state.location.route != Route::Dashboard => Location::root(),
        None => return vec![],
    };
    state.remount(target);
    vec![issue_fetch(state)]
}

fn select_tab(state: &mut AppState, tab: ActivityTab) -> Vec<SideEffect> {
    if let Some(view) = state.page.member_mut()
        && view.active_tab != tab
    {
        view.active_tab = tab;
        view.cursors.reset_all();
        view.row_cursor = 0;
    }
    vec![]
}

/// Replace the active range: reset every cursor, rewrite the location query
/// in place and fetch again.
fn apply_date_range(state: &mut AppState, range: DateRange) -> Vec<SideEffect> {
    state.page.picker = None;
    if let Some(view) = state.page.member_mut() {
        view.cursors.reset_all();
        view.row_cursor = 0;
    }
    state.location = state.location.with_date_range(&range);
    state.page.date_range = range;
    vec![issue_fetch(state)]
}

fn accepts(state: &AppState, tag: RequestTag) -> bool {
    if tag.page_id != state.page.id {
        debug!(page_id = tag.page_id, "Dropping response for unmounted page");
        return false;
    }
    if state.settings.discard_stale_responses && tag.seq < state.page.latest_seq {
        warn!(
            seq = tag.seq,
            latest = state.page.latest_seq,
            "Dropping stale response"
        );
        return false;
    }
    true
}
