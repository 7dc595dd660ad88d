use crate::app::location::{Location, Route};
use crate::app::pagination::{PageCursor, slice};
use crate::stats::models::{Commit, Member, MemberActivity, PullRequest, Review, podium_order};
use crate::util::config::AppConfig;
use crate::util::date::{DateRange, to_input_value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityTab {
    Commits,
    PullRequests,
    Reviews,
}

impl ActivityTab {
    pub const ALL: [ActivityTab; 3] = [
        ActivityTab::Commits,
        ActivityTab::PullRequests,
        ActivityTab::Reviews,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ActivityTab::Commits => "Commits",
            ActivityTab::PullRequests => "Pull Requests",
            ActivityTab::Reviews => "Reviews",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ActivityTab::Commits => ActivityTab::PullRequests,
            ActivityTab::PullRequests => ActivityTab::Reviews,
            ActivityTab::Reviews => ActivityTab::Commits,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActivityTab::Commits => ActivityTab::Reviews,
            ActivityTab::PullRequests => ActivityTab::Commits,
            ActivityTab::Reviews => ActivityTab::PullRequests,
        }
    }
}

/// One page cursor per activity tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabCursors {
    pub commits: PageCursor,
    pub pull_requests: PageCursor,
    pub reviews: PageCursor,
}

impl TabCursors {
    pub fn get(&self, tab: ActivityTab) -> PageCursor {
        match tab {
            ActivityTab::Commits => self.commits,
            ActivityTab::PullRequests => self.pull_requests,
            ActivityTab::Reviews => self.reviews,
        }
    }

    pub fn get_mut(&mut self, tab: ActivityTab) -> &mut PageCursor {
        match tab {
            ActivityTab::Commits => &mut self.commits,
            ActivityTab::PullRequests => &mut self.pull_requests,
            ActivityTab::Reviews => &mut self.reviews,
        }
    }

    pub fn reset_all(&mut self) {
        self.commits.reset();
        self.pull_requests.reset();
        self.reviews.reset();
    }
}

/// Identifies a fetch: the page that issued it and its order within that page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTag {
    pub page_id: u64,
    pub seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerField {
    From,
    To,
}

/// Date range picker overlay. Fields hold `YYYY-MM-DD` input values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    pub from_input: String,
    pub to_input: String,
    pub field: PickerField,
    pub error: Option<String>,
}

impl DatePicker {
    pub fn for_range(range: &DateRange) -> Self {
        Self {
            from_input: to_input_value(&range.from).unwrap_or_default(),
            to_input: to_input_value(&range.to).unwrap_or_default(),
            field: PickerField::From,
            error: None,
        }
    }

    pub fn active_input_mut(&mut self) -> &mut String {
        match self.field {
            PickerField::From => &mut self.from_input,
            PickerField::To => &mut self.to_input,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub members: Vec<Member>,
    pub cursor: usize,
}

impl DashboardView {
    pub fn selected_member(&self) -> Option<&Member> {
        self.members.get(self.cursor)
    }
}

#[derive(Debug, Clone)]
pub struct MemberView {
    pub username: String,
    pub activity: Option<MemberActivity>,
    pub active_tab: ActivityTab,
    pub cursors: TabCursors,
    pub row_cursor: usize,
}

/// Records of the active tab, borrowed from the loaded activity.
pub enum ActivityRows<'a> {
    Commits(&'a [Commit]),
    PullRequests(&'a [PullRequest]),
    Reviews(&'a [Review]),
}

impl ActivityRows<'_> {
    pub fn len(&self) -> usize {
        match self {
            ActivityRows::Commits(rows) => rows.len(),
            ActivityRows::PullRequests(rows) => rows.len(),
            ActivityRows::Reviews(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MemberView {
    pub fn new(username: String) -> Self {
        Self {
            username,
            activity: None,
            active_tab: ActivityTab::Commits,
            cursors: TabCursors::default(),
            row_cursor: 0,
        }
    }

    pub fn count(&self, tab: ActivityTab) -> usize {
        self.activity.as_ref().map_or(0, |a| match tab {
            ActivityTab::Commits => a.commits.len(),
            ActivityTab::PullRequests => a.pull_requests.len(),
            ActivityTab::Reviews => a.reviews.len(),
        })
    }

    pub fn rows(&self, tab: ActivityTab) -> ActivityRows<'_> {
        match &self.activity {
            Some(a) => match tab {
                ActivityTab::Commits => ActivityRows::Commits(&a.commits),
                ActivityTab::PullRequests => ActivityRows::PullRequests(&a.pull_requests),
                ActivityTab::Reviews => ActivityRows::Reviews(&a.reviews),
            },
            None => match tab {
                ActivityTab::Commits => ActivityRows::Commits(&[]),
                ActivityTab::PullRequests => ActivityRows::PullRequests(&[]),
                ActivityTab::Reviews => ActivityRows::Reviews(&[]),
            },
        }
    }

    /// Slice of the active tab at its current page.
    pub fn current_page(&self, page_size: usize) -> ActivityRows<'_> {
        let page = self.cursors.get(self.active_tab).page;
        match self.rows(self.active_tab) {
            ActivityRows::Commits(rows) => ActivityRows::Commits(slice(rows, page, page_size).items),
            ActivityRows::PullRequests(rows) => {
                ActivityRows::PullRequests(slice(rows, page, page_size).items)
            }
            ActivityRows::Reviews(rows) => ActivityRows::Reviews(slice(rows, page, page_size).items),
        }
    }

    pub fn total_pages(&self, page_size: usize) -> usize {
        let page = self.cursors.get(self.active_tab).page;
        match self.rows(self.active_tab) {
            ActivityRows::Commits(rows) => slice(rows, page, page_size).total_pages,
            ActivityRows::PullRequests(rows) => slice(rows, page, page_size).total_pages,
            ActivityRows::Reviews(rows) => slice(rows, page, page_size).total_pages,
        }
    }

    pub fn selected_url(&self, page_size: usize) -> Option<String> {
        let i = self.row_cursor;
        match self.current_page(page_size) {
            ActivityRows::Commits(rows) => rows.get(i).map(|c| c.url().to_string()),
            ActivityRows::PullRequests(rows) => rows.get(i).map(|pr| pr.url().to_string()),
            ActivityRows::Reviews(rows) => rows.get(i).map(|r| r.url().to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum PageContent {
    Dashboard(DashboardView),
    Member(MemberView),
}

/// State owned by the mounted page. Replaced wholesale on navigation.
#[derive(Debug, Clone)]
pub struct PageState {
    pub id: u64,
    pub date_range: DateRange,
    pub loading: bool,
    pub error: Option<String>,
    pub latest_seq: u64,
    pub picker: Option<DatePicker>,
    pub content: PageContent,
}

impl PageState {
    pub fn mount(id: u64, location: &Location, default_range: &DateRange) -> Self {
        let content = match &location.route {
            Route::Dashboard => PageContent::Dashboard(DashboardView::default()),
            Route::Member(username) => PageContent::Member(MemberView::new(username.clone())),
        };

        Self {
            id,
            date_range: location.date_range_or(default_range),
            loading: true,
            error: None,
            latest_seq: 0,
            picker: None,
            content,
        }
    }

    pub fn dashboard(&self) -> Option<&DashboardView> {
        match &self.content {
            PageContent::Dashboard(view) => Some(view),
            PageContent::Member(_) => None,
        }
    }

    pub fn member(&self) -> Option<&MemberView> {
        match &self.content {
            PageContent::Member(view) => Some(view),
            PageContent::Dashboard(_) => None,
        }
    }

    pub fn member_mut(&mut self) -> Option<&mut MemberView> {
        match &mut self.content {
            PageContent::Member(view) => Some(view),
            PageContent::Dashboard(_) => None,
        }
    }
}

/// Settings the controller needs from the config file.
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub page_size: usize,
    pub default_range: DateRange,
    pub discard_stale_responses: bool,
    pub message_width: usize,
}

impl ViewSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            page_size: config.dashboard.page_size.max(1),
            default_range: config.default_range(),
            discard_stale_responses: config.dashboard.discard_stale_responses,
            message_width: config.ui.message_width,
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[derive(Debug)]
pub struct AppState {
    pub settings: ViewSettings,
    pub location: Location,
    pub history: Vec<Location>,
    pub page: PageState,
    pub next_page_id: u64,
    pub last_refresh: Option<chrono::DateTime<chrono::Utc>>,
    pub should_quit: bool,
}

impl AppState {
    /// Mount the page for `location`. No fetch is issued until `update::start`.
    pub fn new(settings: ViewSettings, location: Location) -> Self {
        let page = PageState::mount(1, &location, &settings.default_range);
        Self {
            settings,
            location,
            history: Vec::new(),
            page,
            next_page_id: 2,
            last_refresh: None,
            should_quit: false,
        }
    }

    pub fn remount(&mut self, location: Location) {
        let id = self.next_page_id;
        self.next_page_id += 1;
        self.page = PageState::mount(id, &location, &self.settings.default_range);
        self.location = location;
    }

    /// Top three members in podium order, or nothing off the dashboard.
    pub fn podium(&self) -> Vec<&Member> {
        self.page
            .dashboard()
            .map(|view| podium_order(&view.members))
            .unwrap_or_default()
    }
}
