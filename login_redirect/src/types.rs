use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The authenticated identity handed over by the authentication pipeline
///
/// Only the two pieces of information the redirect policy reads are carried here:
/// the granted authorities and the display name. Authorities are opaque tokens
/// compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Display name of the authenticated user
    pub display_name: String,
    /// Granted roles and privileges, possibly empty
    #[serde(default)]
    pub authorities: HashSet<String>,
}

impl Principal {
    /// Create a principal from a display name and any collection of authority strings
    pub fn new<I, S>(display_name: impl Into<String>, authorities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            display_name: display_name.into(),
            authorities: authorities.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether the principal was granted the given authority
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.contains(authority)
    }
}

/// Query parameter attached to a redirect destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    pub name: String,
    pub value: String,
}

/// Where to send the client after a successful login
///
/// The value is raw: `query()` returns the display name exactly as given, while
/// `to_url()` percent-encodes it for use in a `Location` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectDecision {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    query: Option<QueryParam>,
}

impl RedirectDecision {
    /// Destination without a query string
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: None,
        }
    }

    /// Destination with a single query parameter
    pub fn with_query(
        path: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            query: Some(QueryParam {
                name: name.into(),
                value: value.into(),
            }),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&QueryParam> {
        self.query.as_ref()
    }

    /// Render the destination as a relative URL
    pub fn to_url(&self) -> String {
        match &self.query {
            Some(param) => format!(
                "{}?{}={}",
                self.path,
                urlencoding::encode(&param.name),
                urlencoding::encode(&param.value)
            ),
            None => self.path.clone(),
        }
    }
}

impl fmt::Display for RedirectDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}
