//! Action and resource ARN vocabulary for AWS Identity and Access Management
//! (`iam`).
//!
//! IAM is a global service: its ARNs have an empty region segment. Variants
//! are grouped by access level.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "iam";

/// IAM actions published for AWS Identity and Access Management.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    // Write
    #[strum(serialize = "iam:AddRoleToInstanceProfile")]
    AddRoleToInstanceProfile,
    #[strum(serialize = "iam:AddUserToGroup")]
    AddUserToGroup,
    #[strum(serialize = "iam:ChangePassword")]
    ChangePassword,
    #[strum(serialize = "iam:CreateAccessKey")]
    CreateAccessKey,
    #[strum(serialize = "iam:CreateAccountAlias")]
    CreateAccountAlias,
    #[strum(serialize = "iam:CreateGroup")]
    CreateGroup,
    #[strum(serialize = "iam:CreateInstanceProfile")]
    CreateInstanceProfile,
    #[strum(serialize = "iam:CreateLoginProfile")]
    CreateLoginProfile,
    #[strum(serialize = "iam:CreateOpenIDConnectProvider")]
    CreateOpenIdConnectProvider,
    #[strum(serialize = "iam:CreateRole")]
    CreateRole,
    #[strum(serialize = "iam:CreateSAMLProvider")]
    CreateSamlProvider,
    #[strum(serialize = "iam:CreateServiceLinkedRole")]
    CreateServiceLinkedRole,
    #[strum(serialize = "iam:CreateServiceSpecificCredential")]
    CreateServiceSpecificCredential,
    #[strum(serialize = "iam:CreateUser")]
    CreateUser,
    #[strum(serialize = "iam:CreateVirtualMFADevice")]
    CreateVirtualMfaDevice,
    #[strum(serialize = "iam:DeactivateMFADevice")]
    DeactivateMfaDevice,
    #[strum(serialize = "iam:DeleteAccessKey")]
    DeleteAccessKey,
    #[strum(serialize = "iam:DeleteAccountAlias")]
    DeleteAccountAlias,
    #[strum(serialize = "iam:DeleteGroup")]
    DeleteGroup,
    #[strum(serialize = "iam:DeleteInstanceProfile")]
    DeleteInstanceProfile,
    #[strum(serialize = "iam:DeleteLoginProfile")]
    DeleteLoginProfile,
    #[strum(serialize = "iam:DeleteOpenIDConnectProvider")]
    DeleteOpenIdConnectProvider,
    #[strum(serialize = "iam:DeleteRole")]
    DeleteRole,
    #[strum(serialize = "iam:DeleteSAMLProvider")]
    DeleteSamlProvider,
    #[strum(serialize = "iam:DeleteSSHPublicKey")]
    DeleteSshPublicKey,
    #[strum(serialize = "iam:DeleteServerCertificate")]
    DeleteServerCertificate,
    #[strum(serialize = "iam:DeleteServiceLinkedRole")]
    DeleteServiceLinkedRole,
    #[strum(serialize = "iam:DeleteServiceSpecificCredential")]
    DeleteServiceSpecificCredential,
    #[strum(serialize = "iam:DeleteSigningCertificate")]
    DeleteSigningCertificate,
    #[strum(serialize = "iam:DeleteUser")]
    DeleteUser,
    #[strum(serialize = "iam:DeleteVirtualMFADevice")]
    DeleteVirtualMfaDevice,
    #[strum(serialize = "iam:EnableMFADevice")]
    EnableMfaDevice,
    #[strum(serialize = "iam:RemoveRoleFromInstanceProfile")]
    RemoveRoleFromInstanceProfile,
    #[strum(serialize = "iam:RemoveUserFromGroup")]
    RemoveUserFromGroup,
    #[strum(serialize = "iam:ResetServiceSpecificCredential")]
    ResetServiceSpecificCredential,
    #[strum(serialize = "iam:ResyncMFADevice")]
    ResyncMfaDevice,
    #[strum(serialize = "iam:SetSecurityTokenServicePreferences")]
    SetSecurityTokenServicePreferences,
    #[strum(serialize = "iam:UpdateAccessKey")]
    UpdateAccessKey,
    #[strum(serialize = "iam:UpdateAccountPasswordPolicy")]
    UpdateAccountPasswordPolicy,
    #[strum(serialize = "iam:UpdateGroup")]
    UpdateGroup,
    #[strum(serialize = "iam:UpdateLoginProfile")]
    UpdateLoginProfile,
    #[strum(serialize = "iam:UpdateOpenIDConnectProviderThumbprint")]
    UpdateOpenIdConnectProviderThumbprint,
    #[strum(serialize = "iam:UpdateRole")]
    UpdateRole,
    #[strum(serialize = "iam:UpdateRoleDescription")]
    UpdateRoleDescription,
    #[strum(serialize = "iam:UpdateSAMLProvider")]
    UpdateSamlProvider,
    #[strum(serialize = "iam:UpdateSSHPublicKey")]
    UpdateSshPublicKey,
    #[strum(serialize = "iam:UpdateServerCertificate")]
    UpdateServerCertificate,
    #[strum(serialize = "iam:UpdateSigningCertificate")]
    UpdateSigningCertificate,
    #[strum(serialize = "iam:UpdateUser")]
    UpdateUser,
    #[strum(serialize = "iam:UploadSSHPublicKey")]
    UploadSshPublicKey,
    #[strum(serialize = "iam:UploadServerCertificate")]
    UploadServerCertificate,
    #[strum(serialize = "iam:UploadSigningCertificate")]
    UploadSigningCertificate,

    // Permissions management
    #[strum(serialize = "iam:AttachGroupPolicy")]
    AttachGroupPolicy,
    #[strum(serialize = "iam:AttachRolePolicy")]
    AttachRolePolicy,
    #[strum(serialize = "iam:AttachUserPolicy")]
    AttachUserPolicy,
    #[strum(serialize = "iam:CreatePolicy")]
    CreatePolicy,
    #[strum(serialize = "iam:CreatePolicyVersion")]
    CreatePolicyVersion,
    #[strum(serialize = "iam:DeleteAccountPasswordPolicy")]
    DeleteAccountPasswordPolicy,
    #[strum(serialize = "iam:DeleteGroupPolicy")]
    DeleteGroupPolicy,
    #[strum(serialize = "iam:DeletePolicy")]
    DeletePolicy,
    #[strum(serialize = "iam:DeletePolicyVersion")]
    DeletePolicyVersion,
    #[strum(serialize = "iam:DeleteRolePermissionsBoundary")]
    DeleteRolePermissionsBoundary,
    #[strum(serialize = "iam:DeleteRolePolicy")]
    DeleteRolePolicy,
    #[strum(serialize = "iam:DeleteUserPermissionsBoundary")]
    DeleteUserPermissionsBoundary,
    #[strum(serialize = "iam:DeleteUserPolicy")]
    DeleteUserPolicy,
    #[strum(serialize = "iam:DetachGroupPolicy")]
    DetachGroupPolicy,
    #[strum(serialize = "iam:DetachRolePolicy")]
    DetachRolePolicy,
    #[strum(serialize = "iam:DetachUserPolicy")]
    DetachUserPolicy,
    #[strum(serialize = "iam:PassRole")]
    PassRole,
    #[strum(serialize = "iam:PutGroupPolicy")]
    PutGroupPolicy,
    #[strum(serialize = "iam:PutRolePermissionsBoundary")]
    PutRolePermissionsBoundary,
    #[strum(serialize = "iam:PutRolePolicy")]
    PutRolePolicy,
    #[strum(serialize = "iam:PutUserPermissionsBoundary")]
    PutUserPermissionsBoundary,
    #[strum(serialize = "iam:PutUserPolicy")]
    PutUserPolicy,
    #[strum(serialize = "iam:SetDefaultPolicyVersion")]
    SetDefaultPolicyVersion,

    // Read
    #[strum(serialize = "iam:GetAccessKeyLastUsed")]
    GetAccessKeyLastUsed,
    #[strum(serialize = "iam:GetAccountAuthorizationDetails")]
    GetAccountAuthorizationDetails,
    #[strum(serialize = "iam:GetAccountPasswordPolicy")]
    GetAccountPasswordPolicy,
    #[strum(serialize = "iam:GetContextKeysForCustomPolicy")]
    GetContextKeysForCustomPolicy,
    #[strum(serialize = "iam:GetContextKeysForPrincipalPolicy")]
    GetContextKeysForPrincipalPolicy,
    #[strum(serialize = "iam:GetCredentialReport")]
    GetCredentialReport,
    #[strum(serialize = "iam:GetGroup")]
    GetGroup,
    #[strum(serialize = "iam:GetGroupPolicy")]
    GetGroupPolicy,
    #[strum(serialize = "iam:GetInstanceProfile")]
    GetInstanceProfile,
    #[strum(serialize = "iam:GetLoginProfile")]
    GetLoginProfile,
    #[strum(serialize = "iam:GetOpenIDConnectProvider")]
    GetOpenIdConnectProvider,
    #[strum(serialize = "iam:GetPolicy")]
    GetPolicy,
    #[strum(serialize = "iam:GetPolicyVersion")]
    GetPolicyVersion,
    #[strum(serialize = "iam:GetRole")]
    GetRole,
    #[strum(serialize = "iam:GetRolePolicy")]
    GetRolePolicy,
    #[strum(serialize = "iam:GetSAMLProvider")]
    GetSamlProvider,
    #[strum(serialize = "iam:GetSSHPublicKey")]
    GetSshPublicKey,
    #[strum(serialize = "iam:GetServerCertificate")]
    GetServerCertificate,
    #[strum(serialize = "iam:GetServiceLastAccessedDetails")]
    GetServiceLastAccessedDetails,
    #[strum(serialize = "iam:GetUser")]
    GetUser,
    #[strum(serialize = "iam:GetUserPolicy")]
    GetUserPolicy,
    #[strum(serialize = "iam:SimulateCustomPolicy")]
    SimulateCustomPolicy,
    #[strum(serialize = "iam:SimulatePrincipalPolicy")]
    SimulatePrincipalPolicy,

    // List
    #[strum(serialize = "iam:GetAccountSummary")]
    GetAccountSummary,
    #[strum(serialize = "iam:ListAccessKeys")]
    ListAccessKeys,
    #[strum(serialize = "iam:ListAccountAliases")]
    ListAccountAliases,
    #[strum(serialize = "iam:ListAttachedGroupPolicies")]
    ListAttachedGroupPolicies,
    #[strum(serialize = "iam:ListAttachedRolePolicies")]
    ListAttachedRolePolicies,
    #[strum(serialize = "iam:ListAttachedUserPolicies")]
    ListAttachedUserPolicies,
    #[strum(serialize = "iam:ListEntitiesForPolicy")]
    ListEntitiesForPolicy,
    #[strum(serialize = "iam:ListGroupPolicies")]
    ListGroupPolicies,
    #[strum(serialize = "iam:ListGroups")]
    ListGroups,
    #[strum(serialize = "iam:ListGroupsForUser")]
    ListGroupsForUser,
    #[strum(serialize = "iam:ListInstanceProfiles")]
    ListInstanceProfiles,
    #[strum(serialize = "iam:ListInstanceProfilesForRole")]
    ListInstanceProfilesForRole,
    #[strum(serialize = "iam:ListMFADevices")]
    ListMfaDevices,
    #[strum(serialize = "iam:ListOpenIDConnectProviders")]
    ListOpenIdConnectProviders,
    #[strum(serialize = "iam:ListPolicies")]
    ListPolicies,
    #[strum(serialize = "iam:ListPolicyVersions")]
    ListPolicyVersions,
    #[strum(serialize = "iam:ListRolePolicies")]
    ListRolePolicies,
    #[strum(serialize = "iam:ListRoleTags")]
    ListRoleTags,
    #[strum(serialize = "iam:ListRoles")]
    ListRoles,
    #[strum(serialize = "iam:ListSAMLProviders")]
    ListSamlProviders,
    #[strum(serialize = "iam:ListSSHPublicKeys")]
    ListSshPublicKeys,
    #[strum(serialize = "iam:ListServerCertificates")]
    ListServerCertificates,
    #[strum(serialize = "iam:ListSigningCertificates")]
    ListSigningCertificates,
    #[strum(serialize = "iam:ListUserPolicies")]
    ListUserPolicies,
    #[strum(serialize = "iam:ListUserTags")]
    ListUserTags,
    #[strum(serialize = "iam:ListUsers")]
    ListUsers,
    #[strum(serialize = "iam:ListVirtualMFADevices")]
    ListVirtualMfaDevices,

    // Tagging
    #[strum(serialize = "iam:TagRole")]
    TagRole,
    #[strum(serialize = "iam:TagUser")]
    TagUser,
    #[strum(serialize = "iam:UntagRole")]
    UntagRole,
    #[strum(serialize = "iam:UntagUser")]
    UntagUser,

    /// Matches every IAM action.
    #[strum(serialize = "iam:*")]
    All,
}

arn_resources! {
    service = "iam";
    /// A group. The name may carry a path (`division/team/name`).
    group as Group { partition, account, group_name_with_path }
        => "arn:{partition}:iam::{account}:group/{group_name_with_path}";
    /// An instance profile.
    instance_profile as InstanceProfile { partition, account, instance_profile_name_with_path }
        => "arn:{partition}:iam::{account}:instance-profile/{instance_profile_name_with_path}";
    /// A virtual MFA device.
    mfa as Mfa { partition, account, mfa_token_id_with_path }
        => "arn:{partition}:iam::{account}:mfa/{mfa_token_id_with_path}";
    /// An OpenID Connect identity provider.
    oidc_provider as OidcProvider { partition, account, oidc_provider_name }
        => "arn:{partition}:iam::{account}:oidc-provider/{oidc_provider_name}";
    /// A managed policy.
    policy as Policy { partition, account, policy_name_with_path }
        => "arn:{partition}:iam::{account}:policy/{policy_name_with_path}";
    /// A role.
    role as Role { partition, account, role_name_with_path }
        => "arn:{partition}:iam::{account}:role/{role_name_with_path}";
    /// A SAML identity provider.
    saml_provider as SamlProvider { partition, account, saml_provider_name }
        => "arn:{partition}:iam::{account}:saml-provider/{saml_provider_name}";
    /// An uploaded server certificate.
    server_certificate as ServerCertificate { partition, account, certificate_name_with_path }
        => "arn:{partition}:iam::{account}:server-certificate/{certificate_name_with_path}";
    /// A user. The name may carry a path.
    user as User { partition, account, user_name_with_path }
        => "arn:{partition}:iam::{account}:user/{user_name_with_path}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iam_arns_have_no_region_segment() {
        let arn = Role {
            partition: Some("aws"),
            account: Some("123456789012"),
            role_name_with_path: Some("service/deployer"),
        }
        .arn();
        assert_eq!(arn.as_str(), "arn:aws:iam::123456789012:role/service/deployer");
        assert!(arn.region().is_empty());
    }

    #[test]
    fn acronym_heavy_wire_names_are_exact() {
        assert_eq!(
            Action::CreateOpenIdConnectProvider.as_ref(),
            "iam:CreateOpenIDConnectProvider"
        );
        assert_eq!(Action::CreateSamlProvider.as_ref(), "iam:CreateSAMLProvider");
        assert_eq!(Action::ListMfaDevices.as_ref(), "iam:ListMFADevices");
    }
}
