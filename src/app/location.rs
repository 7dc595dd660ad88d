use std::fmt;

use thiserror::Error;
use tracing::warn;
use url::{Url, form_urlencoded};

use crate::util::date::{DateRange, parse_display_date};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Member(String),
}

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("invalid location {0:?}")]
    Invalid(String),
    #[error("unknown route {0:?}")]
    UnknownRoute(String),
}

/// Where the user is: a route plus the `from`/`to` query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub route: Route,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl Location {
    pub fn root() -> Self {
        Self::new(Route::Dashboard)
    }

    pub fn new(route: Route) -> Self {
        Self {
            route,
            from: None,
            to: None,
        }
    }

    pub fn member(username: impl Into<String>) -> Self {
        Self::new(Route::Member(username.into()))
    }

    /// Parse `/`, `/member/<username>`, either with an optional query string.
    pub fn parse(input: &str) -> Result<Self, LocationError> {
        let base = Url::parse("http://localhost/").map_err(|_| LocationError::Invalid(input.into()))?;
        let url = base
            .join(input)
            .map_err(|_| LocationError::Invalid(input.to_string()))?;

        let segments: Vec<String> = url
            .path_segments()
            .map(|s| {
                s.filter(|seg| !seg.is_empty())
                    .map(percent_decode)
                    .collect()
            })
            .unwrap_or_default();

        let route = match segments.as_slice() {
            [] => Route::Dashboard,
            [prefix, username] if prefix == "member" => Route::Member(username.clone()),
            _ => return Err(LocationError::UnknownRoute(url.path().to_string())),
        };

        let mut location = Self::new(route);
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "from" => location.from = Some(value.into_owned()),
                "to" => location.to = Some(value.into_owned()),
                _ => {}
            }
        }
        Ok(location)
    }

    /// Date range to mount with: each query value that is a valid
    /// `DD/MM/YYYY` date, otherwise the matching end of `default`.
    pub fn date_range_or(&self, default: &DateRange) -> DateRange {
        let pick = |param: &Option<String>, fallback: &str, name: &str| match param {
            Some(value) if parse_display_date(value).is_ok() => value.clone(),
            Some(value) => {
                warn!(param = name, value = %value, "Ignoring malformed date in location");
                fallback.to_string()
            }
            None => fallback.to_string(),
        };

        DateRange::new(
            pick(&self.from, &default.from, "from"),
            pick(&self.to, &default.to, "to"),
        )
    }

    /// Same route with `from`/`to` replaced by `range`.
    pub fn with_date_range(&self, range: &DateRange) -> Self {
        Self {
            route: self.route.clone(),
            from: Some(range.from.clone()),
            to: Some(range.to.clone()),
        }
    }

    pub fn path(&self) -> String {
        match &self.route {
            Route::Dashboard => "/".to_string(),
            Route::Member(username) => {
                let encoded: String = form_urlencoded::byte_serialize(username.as_bytes()).collect();
                format!("/member/{}", encoded)
            }
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some(from) = &self.from {
            query.append_pair("from", from);
        }
        if let Some(to) = &self.to {
            query.append_pair("to", to);
        }
        let query = query.finish();

        if query.is_empty() {
            write!(f, "{}", self.path())
        } else {
            write!(f, "{}?{}", self.path(), query)
        }
    }
}

fn percent_decode(segment: &str) -> String {
    form_urlencoded::parse(format!("x={}", segment).as_bytes())
        .next()
        .map(|(_, value)| value.into_owned())
        .unwrap_or_else(|| segment.to_string())
}
