use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Build parameter names mapped to their values
pub type BuildParameters = BTreeMap<String, String>;

/// JSON body for the new-build and retry endpoints.
///
/// Every field is omitted when absent, matching what the API expects: a
/// rebuild carries no body fields at all.
#[derive(Debug, Default, Serialize)]
pub struct TriggerBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_parameters: Option<&'a BuildParameters>,
}

/// Response to a triggered or retried build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildResponse {
    /// Where to watch the build
    pub build_url: String,

    /// Number assigned to the queued build
    #[serde(default)]
    pub build_num: Option<i64>,

    /// Lifecycle status as reported by the API (e.g. "not_running")
    #[serde(default)]
    pub status: Option<String>,
}
