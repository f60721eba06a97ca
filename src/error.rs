use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum VocabError {
    #[error("invalid action '{0}': expected '<service>:<ActionName>'")]
    InvalidAction(String),

    #[error("invalid ARN '{0}': {1}")]
    InvalidArn(String, String),

    #[error("unknown service prefix '{0}'")]
    UnknownService(String),
}
