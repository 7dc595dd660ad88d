use crate::app::location::Location;
use crate::app::state::{ActivityTab, RequestTag};
use crate::stats::models::{Member, MemberActivity};
use crate::util::date::DateRange;

#[derive(Debug)]
pub enum Action {
    MoveUp,
    MoveDown,
    Select,
    Back,
    NextTab,
    PrevTab,
    SelectTab(ActivityTab),
    NextPage,
    PrevPage,
    OpenInBrowser,
    Reload,
    Navigate(Location),
    OpenDatePicker,
    PickerInput(char),
    PickerBackspace,
    PickerSwitchField,
    PickerApply,
    PickerCancel,
    ApplyDateRange(DateRange),
    DataLoaded {
        tag: RequestTag,
        payload: DataPayload,
    },
    LoadError {
        tag: RequestTag,
        message: String,
    },
    DismissError,
    Quit,
    Tick,
}

#[derive(Debug)]
pub enum DataPayload {
    MemberPerformance(Vec<Member>),
    MemberActivity(MemberActivity),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    FetchMemberPerformance {
        tag: RequestTag,
        range: DateRange,
    },
    FetchMemberActivity {
        tag: RequestTag,
        username: String,
        range: DateRange,
    },
    OpenUrl(String),
}
