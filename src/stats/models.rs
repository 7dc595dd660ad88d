use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response wrapper returned by every stats endpoint.
///
/// Only `status` and `data` are consulted; the rest is kept for logging.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Pre-aggregated score snapshot for one member over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub performance: f64,
    #[serde(default)]
    pub commit_count: u32,
    #[serde(default)]
    pub pr_count: u32,
    #[serde(default)]
    pub review_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub id: String,
    pub sha: String,
    pub repo: String,
    pub owner: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_email: String,
    pub date: String,
    #[serde(default)]
    pub message: String,
    pub commit_raw: CommitRaw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitRaw {
    pub html_url: String,
}

impl Commit {
    pub fn short_sha(&self) -> &str {
        self.sha.get(..7).unwrap_or(&self.sha)
    }

    pub fn url(&self) -> &str {
        &self.commit_raw.html_url
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    pub pr_id: String,
    pub repo: String,
    pub owner: String,
    pub pr_raw: PullRequestRaw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestRaw {
    #[serde(default)]
    pub url: String,
    pub html_url: String,
    pub title: String,
    pub state: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub closed_at: Option<String>,
    #[serde(default)]
    pub merged_at: Option<String>,
}

impl PullRequest {
    pub fn url(&self) -> &str {
        &self.pr_raw.html_url
    }

    pub fn is_closed(&self) -> bool {
        self.pr_raw.state == "closed"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub repo: String,
    pub owner: String,
    pub pr_id: String,
    pub date: String,
    pub html_url: String,
}

impl Review {
    pub fn url(&self) -> &str {
        &self.html_url
    }
}

/// Everything one member did within a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MemberActivity {
    pub username: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub commits: Vec<Commit>,
    #[serde(default)]
    pub pull_requests: Vec<PullRequest>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// `owner/repo` label shared by all activity rows.
pub fn repo_label(owner: &str, repo: &str) -> String {
    format!("{}/{}", owner, repo)
}

/// Arrange the top three members as they stand on the podium: 2nd, 1st, 3rd.
pub fn podium_order(members: &[Member]) -> Vec<&Member> {
    [1, 0, 2]
        .into_iter()
        .filter_map(|rank| members.get(rank))
        .collect()
}
