//! Service-qualified IAM action names.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::VocabError;

/// Lowercase service prefix, then one action name or `*`. Action names may
/// carry a trailing `*` (IAM policies allow `s3:Get*`).
static ACTION_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]+:(\*|[A-Za-z0-9]+\*?)$").expect("action pattern is valid"));

/// A `service:ActionName` pair, as written in a policy's `Action` element.
///
/// The generated service modules expose their actions as closed enums; this
/// type is the service-agnostic form for strings of unknown origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActionName {
    service: String,
    name: String,
}

impl ActionName {
    /// Service prefix before the colon.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Action name after the colon.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the name part matches more than one action (`*` anywhere).
    pub fn is_wildcard(&self) -> bool {
        self.name.contains('*')
    }
}

impl Display for ActionName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}:{}", self.service, self.name)
    }
}

impl FromStr for ActionName {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !ACTION_SHAPE.is_match(s) {
            return Err(VocabError::InvalidAction(s.to_string()));
        }
        let (service, name) = s
            .split_once(':')
            .ok_or_else(|| VocabError::InvalidAction(s.to_string()))?;
        Ok(ActionName {
            service: service.to_string(),
            name: name.to_string(),
        })
    }
}

impl TryFrom<String> for ActionName {
    type Error = VocabError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ActionName> for String {
    fn from(action: ActionName) -> Self {
        action.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        plain = { "redshift:CreateCluster", "redshift", "CreateCluster", false },
        hyphenated_service = { "s3-outposts:CreateEndpoint", "s3-outposts", "CreateEndpoint", false },
        service_wildcard = { "lightsail:*", "lightsail", "*", true },
        name_prefix_wildcard = { "s3:Get*", "s3", "Get*", true },
    )]
    fn parses_valid_actions(input: &str, service: &str, name: &str, wildcard: bool) {
        let action: ActionName = input.parse().unwrap();
        assert_eq!(action.service(), service);
        assert_eq!(action.name(), name);
        assert_eq!(action.is_wildcard(), wildcard);
        assert_eq!(action.to_string(), input);
    }

    #[parameterized(
        no_colon = { "CreateCluster" },
        empty = { "" },
        uppercase_service = { "S3:GetObject" },
        empty_name = { "s3:" },
        two_colons = { "s3:Get:Object" },
        embedded_space = { "s3:Get Object" },
    )]
    fn rejects_malformed_actions(input: &str) {
        assert_eq!(
            input.parse::<ActionName>(),
            Err(VocabError::InvalidAction(input.to_string()))
        );
    }

    #[test]
    fn serde_round_trips_as_string() {
        let action: ActionName = "greengrass:CreateComponentVersion".parse().unwrap();
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, "\"greengrass:CreateComponentVersion\"");
        let back: ActionName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }
}
