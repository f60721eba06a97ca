//! Generated AWS IAM policy vocabulary: per-service action strings and
//! resource ARN templates, transcribed from the AWS service authorization
//! reference.
//!
//! Each service module under [`services`] exposes a closed [`Action`] enum
//! whose variants render the exact wire strings a policy document contains,
//! plus typed resource builders that format ARNs, substituting `*` for any
//! field left unset. [`catalog`] offers the same data dynamically, keyed by
//! service prefix.
//!
//! ```
//! use arnica_core::services::redshift;
//!
//! assert_eq!(
//!     redshift::Action::CreateCluster.to_string(),
//!     "redshift:CreateCluster"
//! );
//!
//! let arn = redshift::Cluster {
//!     region: Some("us-east-1"),
//!     cluster_name: Some("reporting"),
//!     ..Default::default()
//! }
//! .arn();
//! assert_eq!(arn.as_str(), "arn:*:redshift:us-east-1:*:cluster:reporting");
//! ```
//!
//! [`Action`]: services::redshift::Action

pub use catalog::{
    ServiceSummary, all_actions, contains_action, require_service, service, summaries, template,
};
pub use error::VocabError;
pub use services::{ALL, ServiceEntry};
pub use types::{ActionName, Arn, ResourceTemplate, WILDCARD};

pub mod catalog;
mod error;
pub mod services;
pub mod types;

#[cfg(test)]
mod tests;
