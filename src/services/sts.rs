//! Action and resource ARN vocabulary for the AWS Security Token Service
//! (`sts`).
//!
//! STS is global: its ARNs have an empty region segment.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "sts";

/// IAM actions published for the AWS Security Token Service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    /// Write. Obtain temporary credentials for a role.
    #[strum(serialize = "sts:AssumeRole")]
    AssumeRole,
    /// Write. Obtain role credentials from a SAML assertion.
    #[strum(serialize = "sts:AssumeRoleWithSAML")]
    AssumeRoleWithSaml,
    /// Write. Obtain role credentials from a web identity token.
    #[strum(serialize = "sts:AssumeRoleWithWebIdentity")]
    AssumeRoleWithWebIdentity,
    /// Read. Decode an encoded authorization failure message.
    #[strum(serialize = "sts:DecodeAuthorizationMessage")]
    DecodeAuthorizationMessage,
    /// Read. Look up the account owning an access key.
    #[strum(serialize = "sts:GetAccessKeyInfo")]
    GetAccessKeyInfo,
    /// Read. Return the identity of the caller.
    #[strum(serialize = "sts:GetCallerIdentity")]
    GetCallerIdentity,
    /// Read. Obtain temporary credentials for a federated user.
    #[strum(serialize = "sts:GetFederationToken")]
    GetFederationToken,
    /// Read. Obtain temporary credentials for the calling identity.
    #[strum(serialize = "sts:GetSessionToken")]
    GetSessionToken,
    /// Tagging. Attach session tags when assuming a role.
    #[strum(serialize = "sts:TagSession")]
    TagSession,
    /// Matches every STS action.
    #[strum(serialize = "sts:*")]
    All,
}

arn_resources! {
    service = "sts";
    /// The temporary identity produced by `AssumeRole`.
    assumed_role as AssumedRole { partition, account, role_name, role_session_name }
        => "arn:{partition}:sts::{account}:assumed-role/{role_name}/{role_session_name}";
    /// The temporary identity produced by `GetFederationToken`.
    federated_user as FederatedUser { partition, account, user_name }
        => "arn:{partition}:sts::{account}:federated-user/{user_name}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assumed_role_joins_role_and_session() {
        let arn = AssumedRole {
            partition: Some("aws"),
            account: Some("123456789012"),
            role_name: Some("deployer"),
            role_session_name: Some("ci-run-42"),
        }
        .arn();
        assert_eq!(
            arn.as_str(),
            "arn:aws:sts::123456789012:assumed-role/deployer/ci-run-42"
        );
    }
}
