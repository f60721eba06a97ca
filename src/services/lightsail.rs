//! Action and resource ARN vocabulary for Amazon Lightsail (`lightsail`).
//!
//! Lightsail resource paths capitalize the resource kind (`Instance/...`,
//! `StaticIp/...`), unlike most services.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "lightsail";

/// IAM actions published for Amazon Lightsail.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    #[strum(serialize = "lightsail:AllocateStaticIp")]
    AllocateStaticIp,
    #[strum(serialize = "lightsail:AttachDisk")]
    AttachDisk,
    #[strum(serialize = "lightsail:AttachInstancesToLoadBalancer")]
    AttachInstancesToLoadBalancer,
    #[strum(serialize = "lightsail:AttachLoadBalancerTlsCertificate")]
    AttachLoadBalancerTlsCertificate,
    #[strum(serialize = "lightsail:AttachStaticIp")]
    AttachStaticIp,
    #[strum(serialize = "lightsail:CloseInstancePublicPorts")]
    CloseInstancePublicPorts,
    #[strum(serialize = "lightsail:CopySnapshot")]
    CopySnapshot,
    #[strum(serialize = "lightsail:CreateDisk")]
    CreateDisk,
    #[strum(serialize = "lightsail:CreateDiskFromSnapshot")]
    CreateDiskFromSnapshot,
    #[strum(serialize = "lightsail:CreateDiskSnapshot")]
    CreateDiskSnapshot,
    #[strum(serialize = "lightsail:CreateDomain")]
    CreateDomain,
    #[strum(serialize = "lightsail:CreateDomainEntry")]
    CreateDomainEntry,
    #[strum(serialize = "lightsail:CreateInstanceSnapshot")]
    CreateInstanceSnapshot,
    #[strum(serialize = "lightsail:CreateInstances")]
    CreateInstances,
    #[strum(serialize = "lightsail:CreateInstancesFromSnapshot")]
    CreateInstancesFromSnapshot,
    #[strum(serialize = "lightsail:CreateKeyPair")]
    CreateKeyPair,
    #[strum(serialize = "lightsail:CreateLoadBalancer")]
    CreateLoadBalancer,
    #[strum(serialize = "lightsail:CreateLoadBalancerTlsCertificate")]
    CreateLoadBalancerTlsCertificate,
    #[strum(serialize = "lightsail:CreateRelationalDatabase")]
    CreateRelationalDatabase,
    #[strum(serialize = "lightsail:CreateRelationalDatabaseFromSnapshot")]
    CreateRelationalDatabaseFromSnapshot,
    #[strum(serialize = "lightsail:CreateRelationalDatabaseSnapshot")]
    CreateRelationalDatabaseSnapshot,
    #[strum(serialize = "lightsail:DeleteDisk")]
    DeleteDisk,
    #[strum(serialize = "lightsail:DeleteDiskSnapshot")]
    DeleteDiskSnapshot,
    #[strum(serialize = "lightsail:DeleteDomain")]
    DeleteDomain,
    #[strum(serialize = "lightsail:DeleteDomainEntry")]
    DeleteDomainEntry,
    #[strum(serialize = "lightsail:DeleteInstance")]
    DeleteInstance,
    #[strum(serialize = "lightsail:DeleteInstanceSnapshot")]
    DeleteInstanceSnapshot,
    #[strum(serialize = "lightsail:DeleteKeyPair")]
    DeleteKeyPair,
    #[strum(serialize = "lightsail:DeleteLoadBalancer")]
    DeleteLoadBalancer,
    #[strum(serialize = "lightsail:DeleteLoadBalancerTlsCertificate")]
    DeleteLoadBalancerTlsCertificate,
    #[strum(serialize = "lightsail:DeleteRelationalDatabase")]
    DeleteRelationalDatabase,
    #[strum(serialize = "lightsail:DeleteRelationalDatabaseSnapshot")]
    DeleteRelationalDatabaseSnapshot,
    #[strum(serialize = "lightsail:DetachDisk")]
    DetachDisk,
    #[strum(serialize = "lightsail:DetachInstancesFromLoadBalancer")]
    DetachInstancesFromLoadBalancer,
    #[strum(serialize = "lightsail:DetachStaticIp")]
    DetachStaticIp,
    #[strum(serialize = "lightsail:DownloadDefaultKeyPair")]
    DownloadDefaultKeyPair,
    #[strum(serialize = "lightsail:ExportSnapshot")]
    ExportSnapshot,
    #[strum(serialize = "lightsail:GetActiveNames")]
    GetActiveNames,
    #[strum(serialize = "lightsail:GetBlueprints")]
    GetBlueprints,
    #[strum(serialize = "lightsail:GetBundles")]
    GetBundles,
    #[strum(serialize = "lightsail:GetCloudFormationStackRecords")]
    GetCloudFormationStackRecords,
    #[strum(serialize = "lightsail:GetDisk")]
    GetDisk,
    #[strum(serialize = "lightsail:GetDiskSnapshot")]
    GetDiskSnapshot,
    #[strum(serialize = "lightsail:GetDiskSnapshots")]
    GetDiskSnapshots,
    #[strum(serialize = "lightsail:GetDisks")]
    GetDisks,
    #[strum(serialize = "lightsail:GetDomain")]
    GetDomain,
    #[strum(serialize = "lightsail:GetDomains")]
    GetDomains,
    #[strum(serialize = "lightsail:GetExportSnapshotRecords")]
    GetExportSnapshotRecords,
    #[strum(serialize = "lightsail:GetInstance")]
    GetInstance,
    #[strum(serialize = "lightsail:GetInstanceAccessDetails")]
    GetInstanceAccessDetails,
    #[strum(serialize = "lightsail:GetInstanceMetricData")]
    GetInstanceMetricData,
    #[strum(serialize = "lightsail:GetInstancePortStates")]
    GetInstancePortStates,
    #[strum(serialize = "lightsail:GetInstanceSnapshot")]
    GetInstanceSnapshot,
    #[strum(serialize = "lightsail:GetInstanceSnapshots")]
    GetInstanceSnapshots,
    #[strum(serialize = "lightsail:GetInstanceState")]
    GetInstanceState,
    #[strum(serialize = "lightsail:GetInstances")]
    GetInstances,
    #[strum(serialize = "lightsail:GetKeyPair")]
    GetKeyPair,
    #[strum(serialize = "lightsail:GetKeyPairs")]
    GetKeyPairs,
    #[strum(serialize = "lightsail:GetLoadBalancer")]
    GetLoadBalancer,
    #[strum(serialize = "lightsail:GetLoadBalancerMetricData")]
    GetLoadBalancerMetricData,
    #[strum(serialize = "lightsail:GetLoadBalancerTlsCertificates")]
    GetLoadBalancerTlsCertificates,
    #[strum(serialize = "lightsail:GetLoadBalancers")]
    GetLoadBalancers,
    #[strum(serialize = "lightsail:GetOperation")]
    GetOperation,
    #[strum(serialize = "lightsail:GetOperations")]
    GetOperations,
    #[strum(serialize = "lightsail:GetOperationsForResource")]
    GetOperationsForResource,
    #[strum(serialize = "lightsail:GetRegions")]
    GetRegions,
    #[strum(serialize = "lightsail:GetRelationalDatabase")]
    GetRelationalDatabase,
    #[strum(serialize = "lightsail:GetRelationalDatabaseBlueprints")]
    GetRelationalDatabaseBlueprints,
    #[strum(serialize = "lightsail:GetRelationalDatabaseBundles")]
    GetRelationalDatabaseBundles,
    #[strum(serialize = "lightsail:GetRelationalDatabaseEvents")]
    GetRelationalDatabaseEvents,
    #[strum(serialize = "lightsail:GetRelationalDatabaseLogEvents")]
    GetRelationalDatabaseLogEvents,
    #[strum(serialize = "lightsail:GetRelationalDatabaseLogStreams")]
    GetRelationalDatabaseLogStreams,
    #[strum(serialize = "lightsail:GetRelationalDatabaseMetricData")]
    GetRelationalDatabaseMetricData,
    #[strum(serialize = "lightsail:GetRelationalDatabaseSnapshot")]
    GetRelationalDatabaseSnapshot,
    #[strum(serialize = "lightsail:GetRelationalDatabaseSnapshots")]
    GetRelationalDatabaseSnapshots,
    #[strum(serialize = "lightsail:GetRelationalDatabases")]
    GetRelationalDatabases,
    #[strum(serialize = "lightsail:GetStaticIp")]
    GetStaticIp,
    #[strum(serialize = "lightsail:GetStaticIps")]
    GetStaticIps,
    #[strum(serialize = "lightsail:ImportKeyPair")]
    ImportKeyPair,
    #[strum(serialize = "lightsail:IsVpcPeered")]
    IsVpcPeered,
    #[strum(serialize = "lightsail:OpenInstancePublicPorts")]
    OpenInstancePublicPorts,
    #[strum(serialize = "lightsail:PeerVpc")]
    PeerVpc,
    #[strum(serialize = "lightsail:PutInstancePublicPorts")]
    PutInstancePublicPorts,
    #[strum(serialize = "lightsail:RebootInstance")]
    RebootInstance,
    #[strum(serialize = "lightsail:RebootRelationalDatabase")]
    RebootRelationalDatabase,
    #[strum(serialize = "lightsail:ReleaseStaticIp")]
    ReleaseStaticIp,
    #[strum(serialize = "lightsail:StartInstance")]
    StartInstance,
    #[strum(serialize = "lightsail:StartRelationalDatabase")]
    StartRelationalDatabase,
    #[strum(serialize = "lightsail:StopInstance")]
    StopInstance,
    #[strum(serialize = "lightsail:StopRelationalDatabase")]
    StopRelationalDatabase,
    #[strum(serialize = "lightsail:TagResource")]
    TagResource,
    #[strum(serialize = "lightsail:UnpeerVpc")]
    UnpeerVpc,
    #[strum(serialize = "lightsail:UntagResource")]
    UntagResource,
    #[strum(serialize = "lightsail:UpdateDomainEntry")]
    UpdateDomainEntry,
    #[strum(serialize = "lightsail:UpdateLoadBalancerAttribute")]
    UpdateLoadBalancerAttribute,
    #[strum(serialize = "lightsail:UpdateRelationalDatabase")]
    UpdateRelationalDatabase,
    #[strum(serialize = "lightsail:UpdateRelationalDatabaseParameters")]
    UpdateRelationalDatabaseParameters,
    /// Matches every Lightsail action.
    #[strum(serialize = "lightsail:*")]
    All,
}

arn_resources! {
    service = "lightsail";
    cloud_formation_stack_record as CloudFormationStackRecord { partition, region, account, id }
        => "arn:{partition}:lightsail:{region}:{account}:CloudFormationStackRecord/{id}";
    disk as Disk { partition, region, account, id }
        => "arn:{partition}:lightsail:{region}:{account}:Disk/{id}";
    disk_snapshot as DiskSnapshot { partition, region, account, id }
        => "arn:{partition}:lightsail:{region}:{account}:DiskSnapshot/{id}";
    domain as Domain { partition, region, account, id }
        => "arn:{partition}:lightsail:{region}:{account}:Domain/{id}";
    export_snapshot_record as ExportSnapshotRecord { partition, region, account, id }
        => "arn:{partition}:lightsail:{region}:{account}:ExportSnapshotRecord/{id}";
    instance as Instance { partition, region, account, id }
        => "arn:{partition}:lightsail:{region}:{account}:Instance/{id}";
    instance_snapshot as InstanceSnapshot { partition, region, account, id }
        => "arn:{partition}:lightsail:{region}:{account}:InstanceSnapshot/{id}";
    key_pair as KeyPair { partition, region, account, id }
        => "arn:{partition}:lightsail:{region}:{account}:KeyPair/{id}";
    load_balancer as LoadBalancer { partition, region, account, id }
        => "arn:{partition}:lightsail:{region}:{account}:LoadBalancer/{id}";
    load_balancer_tls_certificate as LoadBalancerTlsCertificate { partition, region, account, id }
        => "arn:{partition}:lightsail:{region}:{account}:LoadBalancerTlsCertificate/{id}";
    peered_vpc as PeeredVpc { partition, region, account, id }
        => "arn:{partition}:lightsail:{region}:{account}:PeeredVpc/{id}";
    relational_database as RelationalDatabase { partition, region, account, id }
        => "arn:{partition}:lightsail:{region}:{account}:RelationalDatabase/{id}";
    relational_database_snapshot as RelationalDatabaseSnapshot { partition, region, account, id }
        => "arn:{partition}:lightsail:{region}:{account}:RelationalDatabaseSnapshot/{id}";
    static_ip as StaticIp { partition, region, account, id }
        => "arn:{partition}:lightsail:{region}:{account}:StaticIp/{id}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_substitutes_only_the_supplied_id() {
        let arn = Instance {
            id: Some("abc123"),
            ..Default::default()
        }
        .arn();
        assert_eq!(arn.as_str(), "arn:*:lightsail:*:*:Instance/abc123");
    }

    #[test]
    fn resource_paths_keep_capitalized_kinds() {
        assert_eq!(
            StaticIp::default().arn().as_str(),
            "arn:*:lightsail:*:*:StaticIp/*"
        );
    }
}
