//! Action and resource ARN vocabulary for the AWS Key Management Service
//! (`kms`).

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "kms";

/// IAM actions published for the AWS Key Management Service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    #[strum(serialize = "kms:CancelKeyDeletion")]
    CancelKeyDeletion,
    #[strum(serialize = "kms:CreateAlias")]
    CreateAlias,
    #[strum(serialize = "kms:CreateGrant")]
    CreateGrant,
    #[strum(serialize = "kms:CreateKey")]
    CreateKey,
    #[strum(serialize = "kms:Decrypt")]
    Decrypt,
    #[strum(serialize = "kms:DeleteAlias")]
    DeleteAlias,
    #[strum(serialize = "kms:DescribeKey")]
    DescribeKey,
    #[strum(serialize = "kms:DisableKey")]
    DisableKey,
    #[strum(serialize = "kms:DisableKeyRotation")]
    DisableKeyRotation,
    #[strum(serialize = "kms:EnableKey")]
    EnableKey,
    #[strum(serialize = "kms:EnableKeyRotation")]
    EnableKeyRotation,
    #[strum(serialize = "kms:Encrypt")]
    Encrypt,
    #[strum(serialize = "kms:GenerateDataKey")]
    GenerateDataKey,
    #[strum(serialize = "kms:GenerateDataKeyPair")]
    GenerateDataKeyPair,
    #[strum(serialize = "kms:GenerateDataKeyPairWithoutPlaintext")]
    GenerateDataKeyPairWithoutPlaintext,
    #[strum(serialize = "kms:GenerateDataKeyWithoutPlaintext")]
    GenerateDataKeyWithoutPlaintext,
    #[strum(serialize = "kms:GenerateRandom")]
    GenerateRandom,
    #[strum(serialize = "kms:GetKeyPolicy")]
    GetKeyPolicy,
    #[strum(serialize = "kms:GetKeyRotationStatus")]
    GetKeyRotationStatus,
    #[strum(serialize = "kms:GetPublicKey")]
    GetPublicKey,
    #[strum(serialize = "kms:ImportKeyMaterial")]
    ImportKeyMaterial,
    #[strum(serialize = "kms:ListAliases")]
    ListAliases,
    #[strum(serialize = "kms:ListGrants")]
    ListGrants,
    #[strum(serialize = "kms:ListKeyPolicies")]
    ListKeyPolicies,
    #[strum(serialize = "kms:ListKeys")]
    ListKeys,
    #[strum(serialize = "kms:ListResourceTags")]
    ListResourceTags,
    #[strum(serialize = "kms:PutKeyPolicy")]
    PutKeyPolicy,
    #[strum(serialize = "kms:ReEncryptFrom")]
    ReEncryptFrom,
    #[strum(serialize = "kms:ReEncryptTo")]
    ReEncryptTo,
    #[strum(serialize = "kms:RetireGrant")]
    RetireGrant,
    #[strum(serialize = "kms:RevokeGrant")]
    RevokeGrant,
    #[strum(serialize = "kms:ScheduleKeyDeletion")]
    ScheduleKeyDeletion,
    #[strum(serialize = "kms:Sign")]
    Sign,
    #[strum(serialize = "kms:TagResource")]
    TagResource,
    #[strum(serialize = "kms:UntagResource")]
    UntagResource,
    #[strum(serialize = "kms:UpdateAlias")]
    UpdateAlias,
    #[strum(serialize = "kms:UpdateKeyDescription")]
    UpdateKeyDescription,
    #[strum(serialize = "kms:Verify")]
    Verify,
    /// Matches every KMS action.
    #[strum(serialize = "kms:*")]
    All,
}

arn_resources! {
    service = "kms";
    /// An alias pointing at a key.
    alias as Alias { partition, region, account, alias_name }
        => "arn:{partition}:kms:{region}:{account}:alias/{alias_name}";
    /// A customer master key, addressed by key id.
    key as Key { partition, region, account, key_id }
        => "arn:{partition}:kms:{region}:{account}:key/{key_id}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_arn_uses_the_key_id_path() {
        let arn = Key {
            partition: Some("aws"),
            region: Some("us-west-2"),
            account: Some("123456789012"),
            key_id: Some("1234abcd-12ab-34cd-56ef-1234567890ab"),
        }
        .arn();
        assert_eq!(
            arn.as_str(),
            "arn:aws:kms:us-west-2:123456789012:key/1234abcd-12ab-34cd-56ef-1234567890ab"
        );
    }
}
