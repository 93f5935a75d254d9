//! Response types for the Wolfram|Alpha query API
//!
//! The documented shape is
//! `{ queryResult: { pods: [ { primary, subPods: [ { plainText } ] } ] } }`.
//! The live service spells the keys in lowercase (`queryresult`, `subpods`,
//! `plaintext`), so both spellings are accepted.

use crate::error::WolframError;
use serde::{Deserialize, Serialize};

/// Top-level query response
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WolframAlphaResult {
    /// The query result
    #[serde(rename = "queryResult", alias = "queryresult")]
    pub query_result: QueryResult,
}

/// Result body
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryResult {
    /// Result pods; absent when the query produced nothing
    #[serde(default)]
    pub pods: Vec<Pod>,
}

/// A titled group of results
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pod {
    /// Whether this pod holds the primary answer
    #[serde(default)]
    pub primary: Option<bool>,

    /// Pod contents
    #[serde(rename = "subPods", alias = "subpods", default)]
    pub sub_pods: Vec<SubPod>,
}

/// One entry inside a pod
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubPod {
    /// Plain-text rendering of the entry
    #[serde(rename = "plainText", alias = "plaintext", default)]
    pub plain_text: String,
}

impl WolframAlphaResult {
    /// The first pod marked primary
    #[must_use]
    pub fn primary_pod(&self) -> Option<&Pod> {
        self.query_result
            .pods
            .iter()
            .find(|pod| pod.primary == Some(true))
    }

    /// Plain text of the primary pod's first sub-pod
    #[must_use]
    pub fn primary_text(&self) -> Option<&str> {
        self.primary_pod()?
            .sub_pods
            .first()
            .map(|sub_pod| sub_pod.plain_text.as_str())
    }

    /// The primary answer as an integer
    ///
    /// Surrounding whitespace is ignored; anything else non-numeric is rejected.
    ///
    /// # Errors
    ///
    /// - [`WolframError::NoPrimaryPod`] if no pod is primary or it is empty
    /// - [`WolframError::NotAnInteger`] if the text does not parse
    pub fn primary_integer(&self) -> Result<i64, WolframError> {
        let text = self.primary_text().ok_or(WolframError::NoPrimaryPod)?;
        text.trim()
            .parse::<i64>()
            .map_err(|_| WolframError::NotAnInteger(text.to_string()))
    }
}
