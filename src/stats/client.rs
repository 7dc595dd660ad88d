use anyhow::{Context, Result, bail};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::error::{Endpoint, FetchError};
use super::models::*;
use crate::util::date::DateRange;

#[derive(Clone)]
pub struct StatsClient {
    client: Client,
    base: Url,
}

impl StatsClient {
    pub fn new(base_url: &str, timeout_secs: Option<u64>) -> Result<Self> {
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            bail!("Stats API URL must use HTTP(S): {}", base_url);
        }

        // Endpoint paths are joined relative to the base, so it must end in '/'.
        let mut base = Url::parse(base_url)
            .with_context(|| format!("Invalid stats API URL: {}", base_url))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut builder = Client::builder().user_agent("teamrank");
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { client, base })
    }

    /// Build the request URL for `endpoint`, with `username` first when given.
    pub fn request_url(
        &self,
        endpoint: Endpoint,
        username: Option<&str>,
        range: &DateRange,
    ) -> Result<Url, FetchError> {
        let mut url = self
            .base
            .join(endpoint.path())
            .map_err(|e| FetchError::Unknown(e.to_string()))?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(username) = username {
                query.append_pair("username", username);
            }
            query.append_pair("from", &range.from);
            query.append_pair("to", &range.to);
        }
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint, url: Url) -> Result<T, FetchError> {
        debug!(url = %url, "Requesting stats");

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        decode_envelope(endpoint, status, &body)
    }

    pub async fn fetch_member_performance(
        &self,
        range: &DateRange,
    ) -> Result<Vec<Member>, FetchError> {
        let endpoint = Endpoint::MemberPerformance;
        let url = self.request_url(endpoint, None, range)?;
        let members: Vec<Member> = self.get(endpoint, url).await?;
        debug!(count = members.len(), "Fetched member performance");
        Ok(members)
    }

    pub async fn fetch_member_activity(
        &self,
        username: &str,
        range: &DateRange,
    ) -> Result<MemberActivity, FetchError> {
        let endpoint = Endpoint::MemberActivities;
        let url = self.request_url(endpoint, Some(username), range)?;
        let activity: MemberActivity = self.get(endpoint, url).await?;
        debug!(
            username = username,
            commits = activity.commits.len(),
            pull_requests = activity.pull_requests.len(),
            reviews = activity.reviews.len(),
            "Fetched member activity"
        );
        Ok(activity)
    }
}

/// Turn a raw stats response into its `data` payload.
///
/// Non-2xx statuses fail before the body is looked at. A body that is not
/// JSON is reported with the parser's message. A JSON body that is not an
/// envelope, has a missing or falsy `status` or `data`, or carries `data` of
/// the wrong shape is a format error.
pub fn decode_envelope<T: DeserializeOwned>(
    endpoint: Endpoint,
    status: StatusCode,
    body: &str,
) -> Result<T, FetchError> {
    if !status.is_success() {
        return Err(FetchError::Http { endpoint, status });
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Unknown(e.to_string()))?;
    let envelope: Envelope = serde_json::from_value(value).map_err(|_| FetchError::Format)?;

    if !is_truthy(&envelope.status) || !is_truthy(&envelope.data) {
        debug!(message = ?envelope.message, "Stats envelope rejected");
        return Err(FetchError::Format);
    }

    serde_json::from_value(envelope.data).map_err(|e| {
        debug!(error = %e, "Stats payload has unexpected shape");
        FetchError::Format
    })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
