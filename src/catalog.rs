//! Lookup across every generated service module.

use std::collections::BTreeMap;

use itertools::Itertools;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::error::VocabError;
use crate::services::{ALL, ServiceEntry};
use crate::types::{ActionName, ResourceTemplate};

static BY_PREFIX: Lazy<BTreeMap<&'static str, &'static ServiceEntry>> =
    Lazy::new(|| ALL.iter().map(|entry| (entry.prefix, entry)).collect());

/// Look up a service by its IAM prefix (e.g. `"redshift"`).
pub fn service(prefix: &str) -> Option<&'static ServiceEntry> {
    let entry = BY_PREFIX.get(prefix).copied();
    if entry.is_none() {
        debug!(prefix, "unknown service prefix");
    }
    entry
}

/// Like [`service`], but an unknown prefix is an error.
pub fn require_service(prefix: &str) -> Result<&'static ServiceEntry, VocabError> {
    service(prefix).ok_or_else(|| VocabError::UnknownService(prefix.to_string()))
}

/// Whether `action` is a published action string of a known service,
/// compared exactly and case-sensitively. The per-service wildcard
/// (`"redshift:*"`) is itself a published action.
pub fn contains_action(action: &str) -> bool {
    let Ok(name) = action.parse::<ActionName>() else {
        return false;
    };
    let Some(entry) = service(name.service()) else {
        return false;
    };
    (entry.actions)().contains(&action)
}

/// Find the resource template `name` under service `prefix`.
pub fn template(prefix: &str, name: &str) -> Option<&'static ResourceTemplate> {
    service(prefix)?
        .templates
        .iter()
        .find(|template| template.name == name)
}

/// Every action string across every service, sorted.
pub fn all_actions() -> Vec<&'static str> {
    ALL.iter()
        .flat_map(|entry| (entry.actions)())
        .sorted_unstable()
        .collect()
}

/// Serializable description of one service module, for embedding in API
/// responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ServiceSummary {
    /// IAM service prefix.
    pub prefix: String,
    /// Service title from the authorization reference.
    pub title: String,
    /// Number of published actions, the wildcard included.
    pub action_count: usize,
    /// Resource type names, in reference order.
    pub resource_types: Vec<String>,
}

/// Summaries of every generated service module, in prefix order.
pub fn summaries() -> Vec<ServiceSummary> {
    ALL.iter()
        .map(|entry| ServiceSummary {
            prefix: entry.prefix.to_string(),
            title: entry.title.to_string(),
            action_count: (entry.actions)().len(),
            resource_types: entry
                .templates
                .iter()
                .map(|template| template.name.to_string())
                .collect(),
        })
        .collect()
}
