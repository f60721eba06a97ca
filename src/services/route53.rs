//! Action and resource ARN vocabulary for Amazon Route 53 (`route53`).
//!
//! Route 53 is global: its ARNs have empty region and account segments.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "route53";

/// IAM actions published for Amazon Route 53.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    #[strum(serialize = "route53:AssociateVPCWithHostedZone")]
    AssociateVpcWithHostedZone,
    #[strum(serialize = "route53:ChangeResourceRecordSets")]
    ChangeResourceRecordSets,
    #[strum(serialize = "route53:ChangeTagsForResource")]
    ChangeTagsForResource,
    #[strum(serialize = "route53:CreateHealthCheck")]
    CreateHealthCheck,
    #[strum(serialize = "route53:CreateHostedZone")]
    CreateHostedZone,
    #[strum(serialize = "route53:CreateQueryLoggingConfig")]
    CreateQueryLoggingConfig,
    #[strum(serialize = "route53:CreateReusableDelegationSet")]
    CreateReusableDelegationSet,
    #[strum(serialize = "route53:CreateTrafficPolicy")]
    CreateTrafficPolicy,
    #[strum(serialize = "route53:CreateTrafficPolicyInstance")]
    CreateTrafficPolicyInstance,
    #[strum(serialize = "route53:CreateTrafficPolicyVersion")]
    CreateTrafficPolicyVersion,
    #[strum(serialize = "route53:CreateVPCAssociationAuthorization")]
    CreateVpcAssociationAuthorization,
    #[strum(serialize = "route53:DeleteHealthCheck")]
    DeleteHealthCheck,
    #[strum(serialize = "route53:DeleteHostedZone")]
    DeleteHostedZone,
    #[strum(serialize = "route53:DeleteQueryLoggingConfig")]
    DeleteQueryLoggingConfig,
    #[strum(serialize = "route53:DeleteReusableDelegationSet")]
    DeleteReusableDelegationSet,
    #[strum(serialize = "route53:DeleteTrafficPolicy")]
    DeleteTrafficPolicy,
    #[strum(serialize = "route53:DeleteTrafficPolicyInstance")]
    DeleteTrafficPolicyInstance,
    #[strum(serialize = "route53:DeleteVPCAssociationAuthorization")]
    DeleteVpcAssociationAuthorization,
    #[strum(serialize = "route53:DisassociateVPCFromHostedZone")]
    DisassociateVpcFromHostedZone,
    #[strum(serialize = "route53:GetAccountLimit")]
    GetAccountLimit,
    #[strum(serialize = "route53:GetChange")]
    GetChange,
    #[strum(serialize = "route53:GetCheckerIpRanges")]
    GetCheckerIpRanges,
    #[strum(serialize = "route53:GetGeoLocation")]
    GetGeoLocation,
    #[strum(serialize = "route53:GetHealthCheck")]
    GetHealthCheck,
    #[strum(serialize = "route53:GetHealthCheckCount")]
    GetHealthCheckCount,
    #[strum(serialize = "route53:GetHealthCheckLastFailureReason")]
    GetHealthCheckLastFailureReason,
    #[strum(serialize = "route53:GetHealthCheckStatus")]
    GetHealthCheckStatus,
    #[strum(serialize = "route53:GetHostedZone")]
    GetHostedZone,
    #[strum(serialize = "route53:GetHostedZoneCount")]
    GetHostedZoneCount,
    #[strum(serialize = "route53:GetHostedZoneLimit")]
    GetHostedZoneLimit,
    #[strum(serialize = "route53:GetQueryLoggingConfig")]
    GetQueryLoggingConfig,
    #[strum(serialize = "route53:GetReusableDelegationSet")]
    GetReusableDelegationSet,
    #[strum(serialize = "route53:GetTrafficPolicy")]
    GetTrafficPolicy,
    #[strum(serialize = "route53:GetTrafficPolicyInstance")]
    GetTrafficPolicyInstance,
    #[strum(serialize = "route53:ListGeoLocations")]
    ListGeoLocations,
    #[strum(serialize = "route53:ListHealthChecks")]
    ListHealthChecks,
    #[strum(serialize = "route53:ListHostedZones")]
    ListHostedZones,
    #[strum(serialize = "route53:ListHostedZonesByName")]
    ListHostedZonesByName,
    #[strum(serialize = "route53:ListQueryLoggingConfigs")]
    ListQueryLoggingConfigs,
    #[strum(serialize = "route53:ListResourceRecordSets")]
    ListResourceRecordSets,
    #[strum(serialize = "route53:ListReusableDelegationSets")]
    ListReusableDelegationSets,
    #[strum(serialize = "route53:ListTagsForResource")]
    ListTagsForResource,
    #[strum(serialize = "route53:ListTrafficPolicies")]
    ListTrafficPolicies,
    #[strum(serialize = "route53:ListTrafficPolicyInstances")]
    ListTrafficPolicyInstances,
    #[strum(serialize = "route53:TestDNSAnswer")]
    TestDnsAnswer,
    #[strum(serialize = "route53:UpdateHealthCheck")]
    UpdateHealthCheck,
    #[strum(serialize = "route53:UpdateHostedZoneComment")]
    UpdateHostedZoneComment,
    #[strum(serialize = "route53:UpdateTrafficPolicyComment")]
    UpdateTrafficPolicyComment,
    #[strum(serialize = "route53:UpdateTrafficPolicyInstance")]
    UpdateTrafficPolicyInstance,
    /// Matches every Route 53 action.
    #[strum(serialize = "route53:*")]
    All,
}

arn_resources! {
    service = "route53";
    /// A record change batch, as returned by `ChangeResourceRecordSets`.
    change as Change { partition, id }
        => "arn:{partition}:route53:::change/{id}";
    /// A reusable delegation set.
    delegationset as DelegationSet { partition, id }
        => "arn:{partition}:route53:::delegationset/{id}";
    /// A health check.
    healthcheck as HealthCheck { partition, id }
        => "arn:{partition}:route53:::healthcheck/{id}";
    /// A hosted zone.
    hostedzone as HostedZone { partition, id }
        => "arn:{partition}:route53:::hostedzone/{id}";
    /// A query logging configuration.
    queryloggingconfig as QueryLoggingConfig { partition, id }
        => "arn:{partition}:route53:::queryloggingconfig/{id}";
    /// A traffic policy.
    trafficpolicy as TrafficPolicy { partition, id }
        => "arn:{partition}:route53:::trafficpolicy/{id}";
    /// An instance of a traffic policy bound to a DNS name.
    trafficpolicyinstance as TrafficPolicyInstance { partition, id }
        => "arn:{partition}:route53:::trafficpolicyinstance/{id}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hosted_zone_arn_has_empty_region_and_account() {
        let arn = HostedZone {
            partition: Some("aws"),
            id: Some("Z1D633PJN98FT9"),
        }
        .arn();
        assert_eq!(arn.as_str(), "arn:aws:route53:::hostedzone/Z1D633PJN98FT9");
        assert!(arn.region().is_empty());
        assert!(arn.account().is_empty());
    }

    #[test]
    fn dns_acronym_survives_in_wire_name() {
        assert_eq!(Action::TestDnsAnswer.as_ref(), "route53:TestDNSAnswer");
    }
}
