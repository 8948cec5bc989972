use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ErrorDto {
    /// HTTP status code, repeated in the body.
    pub status: u16,
    pub message: String,
    /// Milliseconds since the Unix epoch at which the error was produced.
    pub timestamp: i64,
    /// Field name to message, only present for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

/// Hypermedia link attached to a resource.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct LinkDto {
    pub href: String,
}

/// `_links` object of a resource; only the self relation is published.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct LinksDto {
    #[serde(rename = "self")]
    pub self_link: LinkDto,
}
