//! The Amazon Resource Name value type produced by every builder.

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VocabError;

/// A formatted Amazon Resource Name.
///
/// General grammar: `arn:<partition>:<service>:<region>:<account>:<resource>`,
/// where `<resource>` may itself contain `:` or `/` separated segments and
/// any position may hold the wildcard `*` or be empty.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Arn {
    value: String,
}

impl Arn {
    /// Used by the template renderer; rendered output is valid by
    /// construction and skips the `FromStr` checks.
    pub(crate) fn from_rendered(value: String) -> Self {
        Arn { value }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Partition segment (`aws`, `aws-cn`, `aws-us-gov`, or `*`).
    pub fn partition(&self) -> &str {
        self.segment(1)
    }

    /// Service prefix segment.
    pub fn service(&self) -> &str {
        self.segment(2)
    }

    /// Region segment; empty for global services.
    pub fn region(&self) -> &str {
        self.segment(3)
    }

    /// Account id segment; empty where the service omits it.
    pub fn account(&self) -> &str {
        self.segment(4)
    }

    /// Everything after the account segment, colons included.
    pub fn resource(&self) -> &str {
        self.segment(5)
    }

    fn segment(&self, index: usize) -> &str {
        self.value.splitn(6, ':').nth(index).unwrap_or("")
    }
}

impl Debug for Arn {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.value)
    }
}

impl Display for Arn {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.value)
    }
}

impl FromStr for Arn {
    type Err = VocabError;

    /// Accepts any string with the `arn:` prefix and all five separators.
    /// Values inside the segments are not validated; `*` and empty segments
    /// are as legitimate here as concrete ones.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.starts_with("arn:") {
            return Err(VocabError::InvalidArn(
                s.to_string(),
                "missing 'arn:' prefix".to_string(),
            ));
        }
        if s.splitn(6, ':').count() < 6 {
            return Err(VocabError::InvalidArn(
                s.to_string(),
                "expected 'arn:partition:service:region:account:resource'".to_string(),
            ));
        }
        Ok(Arn {
            value: s.to_string(),
        })
    }
}

impl TryFrom<String> for Arn {
    type Error = VocabError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Arn> for String {
    fn from(arn: Arn) -> Self {
        arn.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[test]
    fn parse_fully_specified() {
        let arn: Arn = "arn:aws:redshift:us-east-1:123456789012:cluster:etl"
            .parse()
            .unwrap();
        assert_eq!(arn.partition(), "aws");
        assert_eq!(arn.service(), "redshift");
        assert_eq!(arn.region(), "us-east-1");
        assert_eq!(arn.account(), "123456789012");
        assert_eq!(arn.resource(), "cluster:etl");
    }

    #[test]
    fn parse_empty_segments() {
        let arn: Arn = "arn:aws:s3:::reports".parse().unwrap();
        assert_eq!(arn.service(), "s3");
        assert!(arn.region().is_empty());
        assert!(arn.account().is_empty());
        assert_eq!(arn.resource(), "reports");
    }

    #[test]
    fn parse_with_wildcards() {
        let arn: Arn = "arn:*:lightsail:*:*:Instance/abc123".parse().unwrap();
        assert_eq!(arn.partition(), "*");
        assert_eq!(arn.region(), "*");
        assert_eq!(arn.resource(), "Instance/abc123");
    }

    #[parameterized(
        missing_prefix = { "aws:s3:::reports" },
        bare_word = { "reports" },
        too_few_segments = { "arn:aws:s3" },
    )]
    fn parse_rejects_malformed_input(input: &str) {
        assert!(matches!(
            input.parse::<Arn>(),
            Err(VocabError::InvalidArn(..))
        ));
    }

    #[test]
    fn serde_round_trips_as_string() {
        let arn: Arn = "arn:aws:sqs:eu-west-1:123456789012:ingest".parse().unwrap();
        let json = serde_json::to_string(&arn).unwrap();
        assert_eq!(json, "\"arn:aws:sqs:eu-west-1:123456789012:ingest\"");
        let back: Arn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, arn);
    }

    #[test]
    fn serde_rejects_malformed_input() {
        assert!(serde_json::from_str::<Arn>("\"not-an-arn\"").is_err());
    }
}
