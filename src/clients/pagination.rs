//! Cursor pagination from `Link` response headers.
//!
//! Shopify paginates list endpoints with a `Link` header holding up to two
//! entries:
//!
//! ```text
//! <https://shop.myshopify.com/admin/api/2026-07/products.json?page_info=abc&limit=50>; rel="next",
//! <https://shop.myshopify.com/admin/api/2026-07/products.json?page_info=xyz&limit=50>; rel="previous"
//! ```
//!
//! [`Pagination::from_link_header`] turns that header into [`ListOptions`]
//! ready to be passed back to the same list endpoint. Parsing is strict: a
//! malformed entry fails with a [`PaginationError`] instead of silently
//! producing an empty page.

use std::num::ParseIntError;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while extracting pagination from a `Link` header.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// An entry did not have the `<url>; rel="name"` shape.
    #[error("could not extract pagination link header")]
    MalformedLink {
        /// The offending entry.
        entry: String,
    },

    /// The URL inside the angle brackets could not be parsed.
    #[error("pagination does not contain a valid URL")]
    InvalidUrl {
        /// The URL as it appeared in the header.
        url: String,
    },

    /// The query string contained a broken percent escape.
    #[error("invalid URL escape \"{escape}\"")]
    InvalidEscape {
        /// The escape sequence, including the leading `%`.
        escape: String,
    },

    /// The URL had no `page_info` parameter.
    #[error("page_info is missing")]
    MissingPageInfo,

    /// The `limit` parameter was not a number.
    #[error(transparent)]
    InvalidLimit(#[from] ParseIntError),
}

/// Query options accepted by list endpoints.
///
/// When `page_info` is set, Shopify only accepts `limit` and `fields`
/// alongside it, so options produced by [`Pagination`] carry nothing else.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::ListOptions;
///
/// let options = ListOptions {
///     limit: Some(50),
///     since_id: Some(1000),
///     ..Default::default()
/// };
/// assert!(!options.is_cursor());
///
/// let next = ListOptions::cursor("abc123", Some(50));
/// assert!(next.is_cursor());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Opaque pagination cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
    /// Legacy page number, for the few endpoints that still accept it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Maximum number of results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Restrict results to after the specified ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    /// Sort order, e.g. `"created_at desc"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// Comma-separated list of fields to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// Restrict results to these IDs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<u64>,
}

impl ListOptions {
    /// Creates options that only carry a cursor and page size.
    #[must_use]
    pub fn cursor(page_info: impl Into<String>, limit: Option<u32>) -> Self {
        Self {
            page_info: Some(page_info.into()),
            limit,
            ..Self::default()
        }
    }

    /// Returns `true` if these options hold a pagination cursor.
    #[must_use]
    pub const fn is_cursor(&self) -> bool {
        self.page_info.is_some()
    }
}

/// The next and previous page cursors of a list response.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::Pagination;
///
/// let header = r#"<https://shop.myshopify.com/admin/api/2026-07/products.json?page_info=foo&limit=2>; rel="next""#;
/// let pagination = Pagination::from_link_header(header).unwrap();
///
/// let next = pagination.next_page_options.unwrap();
/// assert_eq!(next.page_info.as_deref(), Some("foo"));
/// assert_eq!(next.limit, Some(2));
/// assert!(pagination.previous_page_options.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Options for fetching the next page, if there is one.
    pub next_page_options: Option<ListOptions>,
    /// Options for fetching the previous page, if there is one.
    pub previous_page_options: Option<ListOptions>,
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| {
        Regex::new(r#"^ *<([^>]+)>; rel="([^"]*)" *$"#).expect("link header pattern is valid")
    })
}

impl Pagination {
    /// Parses a `Link` header value.
    ///
    /// An empty header yields empty pagination. Entries with a relation
    /// other than `next` or `previous` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] if an entry is malformed, its URL cannot
    /// be parsed, its query has a bad escape, `page_info` is missing, or
    /// `limit` is not a number.
    pub fn from_link_header(header: &str) -> Result<Self, PaginationError> {
        let mut pagination = Self::default();
        if header.trim().is_empty() {
            return Ok(pagination);
        }

        for entry in header.split(',') {
            let captures =
                link_regex()
                    .captures(entry)
                    .ok_or_else(|| PaginationError::MalformedLink {
                        entry: entry.to_string(),
                    })?;

            let slot = match &captures[2] {
                "next" => &mut pagination.next_page_options,
                "previous" => &mut pagination.previous_page_options,
                _ => continue,
            };
            *slot = Some(parse_cursor_url(&captures[1])?);
        }

        Ok(pagination)
    }

    /// Returns `true` if there is a next page.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_page_options.is_some()
    }

    /// Returns `true` if there is a previous page.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.previous_page_options.is_some()
    }

    /// Returns `true` if neither cursor is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.has_next_page() && !self.has_previous_page()
    }
}

fn parse_cursor_url(raw: &str) -> Result<ListOptions, PaginationError> {
    let url = url::Url::parse(raw).map_err(|_| PaginationError::InvalidUrl {
        url: raw.to_string(),
    })?;

    let mut page_info = None;
    let mut limit = None;

    for pair in url.query().unwrap_or_default().split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = unescape(key)?;
        let value = unescape(value)?;

        // First occurrence wins.
        match key.as_str() {
            "page_info" if page_info.is_none() => page_info = Some(value),
            "limit" if limit.is_none() => limit = Some(value),
            _ => {}
        }
    }

    let page_info = page_info
        .filter(|value| !value.is_empty())
        .ok_or(PaginationError::MissingPageInfo)?;
    let limit = limit.map(|value| value.parse::<u32>()).transpose()?;

    Ok(ListOptions::cursor(page_info, limit))
}

/// Decodes one query component, rejecting `%` not followed by two hex digits.
fn unescape(component: &str) -> Result<String, PaginationError> {
    let bytes = component.as_bytes();
    for (index, _) in component.match_indices('%') {
        let valid = bytes
            .get(index + 1..index + 3)
            .is_some_and(|digits| digits.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            let end = (index + 3).min(component.len());
            return Err(PaginationError::InvalidEscape {
                escape: String::from_utf8_lossy(&bytes[index..end]).into_owned(),
            });
        }
    }

    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| PaginationError::InvalidEscape {
            escape: component.to_string(),
        })
}
