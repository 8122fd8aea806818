use std::fmt;

use serde::Serialize;

/// A named part of the incoming request that can carry a schema.
///
/// Declaration order is the fixed enumeration order used by the
/// whole-request validator: body, cookies, headers, params, query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Body,
    Cookies,
    Headers,
    Params,
    Query,
}

impl Section {
    /// Every section, in enumeration order.
    pub const ALL: [Section; 5] = [
        Section::Body,
        Section::Cookies,
        Section::Headers,
        Section::Params,
        Section::Query,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Body => "body",
            Section::Cookies => "cookies",
            Section::Headers => "headers",
            Section::Params => "params",
            Section::Query => "query",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
