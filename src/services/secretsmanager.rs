//! Action and resource ARN vocabulary for AWS Secrets Manager
//! (`secretsmanager`).

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "secretsmanager";

/// IAM actions published for AWS Secrets Manager.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    /// Write. Cancel an in-progress rotation.
    #[strum(serialize = "secretsmanager:CancelRotateSecret")]
    CancelRotateSecret,
    /// Write. Create a secret.
    #[strum(serialize = "secretsmanager:CreateSecret")]
    CreateSecret,
    /// Permissions management. Delete the resource policy of a secret.
    #[strum(serialize = "secretsmanager:DeleteResourcePolicy")]
    DeleteResourcePolicy,
    /// Write. Delete a secret.
    #[strum(serialize = "secretsmanager:DeleteSecret")]
    DeleteSecret,
    /// Read. Retrieve secret metadata.
    #[strum(serialize = "secretsmanager:DescribeSecret")]
    DescribeSecret,
    /// Read. Generate a random password.
    #[strum(serialize = "secretsmanager:GetRandomPassword")]
    GetRandomPassword,
    /// Read. Retrieve the resource policy of a secret.
    #[strum(serialize = "secretsmanager:GetResourcePolicy")]
    GetResourcePolicy,
    /// Read. Retrieve the value of a secret.
    #[strum(serialize = "secretsmanager:GetSecretValue")]
    GetSecretValue,
    /// Read. List the versions of a secret.
    #[strum(serialize = "secretsmanager:ListSecretVersionIds")]
    ListSecretVersionIds,
    /// List. List secrets.
    #[strum(serialize = "secretsmanager:ListSecrets")]
    ListSecrets,
    /// Permissions management. Attach a resource policy to a secret.
    #[strum(serialize = "secretsmanager:PutResourcePolicy")]
    PutResourcePolicy,
    /// Write. Store a new value in a secret.
    #[strum(serialize = "secretsmanager:PutSecretValue")]
    PutSecretValue,
    /// Write. Restore a secret scheduled for deletion.
    #[strum(serialize = "secretsmanager:RestoreSecret")]
    RestoreSecret,
    /// Write. Rotate a secret.
    #[strum(serialize = "secretsmanager:RotateSecret")]
    RotateSecret,
    /// Tagging. Add tags to a secret.
    #[strum(serialize = "secretsmanager:TagResource")]
    TagResource,
    /// Tagging. Remove tags from a secret.
    #[strum(serialize = "secretsmanager:UntagResource")]
    UntagResource,
    /// Write. Update secret metadata.
    #[strum(serialize = "secretsmanager:UpdateSecret")]
    UpdateSecret,
    /// Write. Move a staging label between secret versions.
    #[strum(serialize = "secretsmanager:UpdateSecretVersionStage")]
    UpdateSecretVersionStage,
    /// Read. Validate a candidate resource policy.
    #[strum(serialize = "secretsmanager:ValidateResourcePolicy")]
    ValidateResourcePolicy,
    /// Matches every Secrets Manager action.
    #[strum(serialize = "secretsmanager:*")]
    All,
}

arn_resources! {
    service = "secretsmanager";
    /// A secret. The id is the secret name plus the random suffix AWS
    /// appends on creation.
    secret as Secret { partition, region, account, secret_id }
        => "arn:{partition}:secretsmanager:{region}:{account}:secret:{secret_id}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_resource_uses_colon_separator() {
        let arn = Secret {
            secret_id: Some("prod/db-password-AbCdEf"),
            ..Default::default()
        }
        .arn();
        assert_eq!(
            arn.as_str(),
            "arn:*:secretsmanager:*:*:secret:prod/db-password-AbCdEf"
        );
        assert_eq!(arn.resource(), "secret:prod/db-password-AbCdEf");
    }
}
