use reqwest::StatusCode;
use thiserror::Error;

/// The two stats endpoints the dashboard talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    MemberPerformance,
    MemberActivities,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::MemberPerformance => "stat/member-performance",
            Endpoint::MemberActivities => "stat/member-activities",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Endpoint::MemberPerformance => "Failed to fetch member performance data",
            Endpoint::MemberActivities => "Failed to fetch member activity data",
        }
    }
}

/// Every way a stats request can fail. `Display` is the user-facing message.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{}", .endpoint.failure_message())]
    Http {
        endpoint: Endpoint,
        status: StatusCode,
    },
    #[error("Invalid response format")]
    Format,
    #[error("{}", unknown_message(.0))]
    Unknown(String),
}

fn unknown_message(msg: &str) -> &str {
    if msg.is_empty() {
        "An error occurred"
    } else {
        msg
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Unknown(err.to_string())
    }
}
