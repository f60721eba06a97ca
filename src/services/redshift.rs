//! Action and resource ARN vocabulary for Amazon Redshift (`redshift`).

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "redshift";

/// IAM actions published for Amazon Redshift.
///
/// The access level from the authorization reference is noted on each
/// variant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    /// Write. Exchange a DC1 reserved node for a DC2 reserved node.
    #[strum(serialize = "redshift:AcceptReservedNodeExchange")]
    AcceptReservedNodeExchange,
    /// Permissions management. Add an inbound rule to a cluster security group.
    #[strum(serialize = "redshift:AuthorizeClusterSecurityGroupIngress")]
    AuthorizeClusterSecurityGroupIngress,
    /// Permissions management. Let another account restore a snapshot.
    #[strum(serialize = "redshift:AuthorizeSnapshotAccess")]
    AuthorizeSnapshotAccess,
    /// Write. Delete a set of snapshots in one call.
    #[strum(serialize = "redshift:BatchDeleteClusterSnapshots")]
    BatchDeleteClusterSnapshots,
    /// Write. Modify settings on a set of snapshots in one call.
    #[strum(serialize = "redshift:BatchModifyClusterSnapshots")]
    BatchModifyClusterSnapshots,
    /// Write. Cancel a running query from the console.
    #[strum(serialize = "redshift:CancelQuery")]
    CancelQuery,
    /// Write. Cancel an in-progress resize.
    #[strum(serialize = "redshift:CancelResize")]
    CancelResize,
    /// Write. Copy an automated snapshot to a manual one.
    #[strum(serialize = "redshift:CopyClusterSnapshot")]
    CopyClusterSnapshot,
    /// Write. Create a cluster.
    #[strum(serialize = "redshift:CreateCluster")]
    CreateCluster,
    /// Write. Create a parameter group.
    #[strum(serialize = "redshift:CreateClusterParameterGroup")]
    CreateClusterParameterGroup,
    /// Write. Create a cluster security group.
    #[strum(serialize = "redshift:CreateClusterSecurityGroup")]
    CreateClusterSecurityGroup,
    /// Write. Create a manual snapshot of a cluster.
    #[strum(serialize = "redshift:CreateClusterSnapshot")]
    CreateClusterSnapshot,
    /// Write. Create a subnet group.
    #[strum(serialize = "redshift:CreateClusterSubnetGroup")]
    CreateClusterSubnetGroup,
    /// Permissions management. Create a database user automatically on login.
    #[strum(serialize = "redshift:CreateClusterUser")]
    CreateClusterUser,
    /// Write. Create an event notification subscription.
    #[strum(serialize = "redshift:CreateEventSubscription")]
    CreateEventSubscription,
    /// Write. Register an HSM client certificate.
    #[strum(serialize = "redshift:CreateHsmClientCertificate")]
    CreateHsmClientCertificate,
    /// Write. Register an HSM configuration.
    #[strum(serialize = "redshift:CreateHsmConfiguration")]
    CreateHsmConfiguration,
    /// Write. Save a query from the console.
    #[strum(serialize = "redshift:CreateSavedQuery")]
    CreateSavedQuery,
    /// Write. Create a scheduled action.
    #[strum(serialize = "redshift:CreateScheduledAction")]
    CreateScheduledAction,
    /// Permissions management. Create a snapshot copy grant.
    #[strum(serialize = "redshift:CreateSnapshotCopyGrant")]
    CreateSnapshotCopyGrant,
    /// Write. Create a snapshot schedule.
    #[strum(serialize = "redshift:CreateSnapshotSchedule")]
    CreateSnapshotSchedule,
    /// Tagging. Add tags to a resource.
    #[strum(serialize = "redshift:CreateTags")]
    CreateTags,
    /// Write. Delete a cluster.
    #[strum(serialize = "redshift:DeleteCluster")]
    DeleteCluster,
    /// Write. Delete a parameter group.
    #[strum(serialize = "redshift:DeleteClusterParameterGroup")]
    DeleteClusterParameterGroup,
    /// Write. Delete a cluster security group.
    #[strum(serialize = "redshift:DeleteClusterSecurityGroup")]
    DeleteClusterSecurityGroup,
    /// Write. Delete a manual snapshot.
    #[strum(serialize = "redshift:DeleteClusterSnapshot")]
    DeleteClusterSnapshot,
    /// Write. Delete a subnet group.
    #[strum(serialize = "redshift:DeleteClusterSubnetGroup")]
    DeleteClusterSubnetGroup,
    /// Write. Delete an event notification subscription.
    #[strum(serialize = "redshift:DeleteEventSubscription")]
    DeleteEventSubscription,
    /// Write. Remove an HSM client certificate.
    #[strum(serialize = "redshift:DeleteHsmClientCertificate")]
    DeleteHsmClientCertificate,
    /// Write. Remove an HSM configuration.
    #[strum(serialize = "redshift:DeleteHsmConfiguration")]
    DeleteHsmConfiguration,
    /// Write. Delete saved queries from the console.
    #[strum(serialize = "redshift:DeleteSavedQueries")]
    DeleteSavedQueries,
    /// Write. Delete a scheduled action.
    #[strum(serialize = "redshift:DeleteScheduledAction")]
    DeleteScheduledAction,
    /// Write. Delete a snapshot copy grant.
    #[strum(serialize = "redshift:DeleteSnapshotCopyGrant")]
    DeleteSnapshotCopyGrant,
    /// Write. Delete a snapshot schedule.
    #[strum(serialize = "redshift:DeleteSnapshotSchedule")]
    DeleteSnapshotSchedule,
    /// Tagging. Remove tags from a resource.
    #[strum(serialize = "redshift:DeleteTags")]
    DeleteTags,
    /// Read. Describe parameter groups.
    #[strum(serialize = "redshift:DescribeClusterParameterGroups")]
    DescribeClusterParameterGroups,
    /// Read. Describe parameters of a parameter group.
    #[strum(serialize = "redshift:DescribeClusterParameters")]
    DescribeClusterParameters,
    /// Read. Describe cluster security groups.
    #[strum(serialize = "redshift:DescribeClusterSecurityGroups")]
    DescribeClusterSecurityGroups,
    /// Read. Describe cluster snapshots.
    #[strum(serialize = "redshift:DescribeClusterSnapshots")]
    DescribeClusterSnapshots,
    /// Read. Describe subnet groups.
    #[strum(serialize = "redshift:DescribeClusterSubnetGroups")]
    DescribeClusterSubnetGroups,
    /// Read. Describe available cluster versions.
    #[strum(serialize = "redshift:DescribeClusterVersions")]
    DescribeClusterVersions,
    /// List. Describe clusters.
    #[strum(serialize = "redshift:DescribeClusters")]
    DescribeClusters,
    /// Read. Describe event notification subscriptions.
    #[strum(serialize = "redshift:DescribeEventSubscriptions")]
    DescribeEventSubscriptions,
    /// Read. Describe cluster events.
    #[strum(serialize = "redshift:DescribeEvents")]
    DescribeEvents,
    /// Read. Describe HSM client certificates.
    #[strum(serialize = "redshift:DescribeHsmClientCertificates")]
    DescribeHsmClientCertificates,
    /// Read. Describe HSM configurations.
    #[strum(serialize = "redshift:DescribeHsmConfigurations")]
    DescribeHsmConfigurations,
    /// Read. Describe a query from the console.
    #[strum(serialize = "redshift:DescribeQuery")]
    DescribeQuery,
    /// Read. Describe the last resize of a cluster.
    #[strum(serialize = "redshift:DescribeResize")]
    DescribeResize,
    /// Read. Describe saved queries from the console.
    #[strum(serialize = "redshift:DescribeSavedQueries")]
    DescribeSavedQueries,
    /// Read. Describe scheduled actions.
    #[strum(serialize = "redshift:DescribeScheduledActions")]
    DescribeScheduledActions,
    /// Read. Describe snapshot copy grants.
    #[strum(serialize = "redshift:DescribeSnapshotCopyGrants")]
    DescribeSnapshotCopyGrants,
    /// Read. Describe snapshot schedules.
    #[strum(serialize = "redshift:DescribeSnapshotSchedules")]
    DescribeSnapshotSchedules,
    /// Read. Describe account storage use.
    #[strum(serialize = "redshift:DescribeStorage")]
    DescribeStorage,
    /// Read. Describe a table from the console.
    #[strum(serialize = "redshift:DescribeTable")]
    DescribeTable,
    /// Read. Describe tags on a resource.
    #[strum(serialize = "redshift:DescribeTags")]
    DescribeTags,
    /// Write. Stop logging connection attempts.
    #[strum(serialize = "redshift:DisableLogging")]
    DisableLogging,
    /// Write. Stop cross-region snapshot copy.
    #[strum(serialize = "redshift:DisableSnapshotCopy")]
    DisableSnapshotCopy,
    /// Write. Start logging connection attempts.
    #[strum(serialize = "redshift:EnableLogging")]
    EnableLogging,
    /// Write. Start cross-region snapshot copy.
    #[strum(serialize = "redshift:EnableSnapshotCopy")]
    EnableSnapshotCopy,
    /// Write. Run a query from the console.
    #[strum(serialize = "redshift:ExecuteQuery")]
    ExecuteQuery,
    /// Read. Fetch console query results.
    #[strum(serialize = "redshift:FetchResults")]
    FetchResults,
    /// Write. Get temporary database credentials.
    #[strum(serialize = "redshift:GetClusterCredentials")]
    GetClusterCredentials,
    /// Read. List reserved node exchange offerings.
    #[strum(serialize = "redshift:GetReservedNodeExchangeOfferings")]
    GetReservedNodeExchangeOfferings,
    /// Permissions management. Join a database group on login.
    #[strum(serialize = "redshift:JoinGroup")]
    JoinGroup,
    /// List. List databases from the console.
    #[strum(serialize = "redshift:ListDatabases")]
    ListDatabases,
    /// List. List saved queries from the console.
    #[strum(serialize = "redshift:ListSavedQueries")]
    ListSavedQueries,
    /// List. List schemas from the console.
    #[strum(serialize = "redshift:ListSchemas")]
    ListSchemas,
    /// List. List tables from the console.
    #[strum(serialize = "redshift:ListTables")]
    ListTables,
    /// Write. Modify cluster settings.
    #[strum(serialize = "redshift:ModifyCluster")]
    ModifyCluster,
    /// Write. Change the cluster database revision.
    #[strum(serialize = "redshift:ModifyClusterDbRevision")]
    ModifyClusterDbRevision,
    /// Permissions management. Change the IAM roles attached to a cluster.
    #[strum(serialize = "redshift:ModifyClusterIamRoles")]
    ModifyClusterIamRoles,
    /// Write. Change the cluster maintenance window.
    #[strum(serialize = "redshift:ModifyClusterMaintenance")]
    ModifyClusterMaintenance,
    /// Write. Modify a parameter group.
    #[strum(serialize = "redshift:ModifyClusterParameterGroup")]
    ModifyClusterParameterGroup,
    /// Write. Modify snapshot settings.
    #[strum(serialize = "redshift:ModifyClusterSnapshot")]
    ModifyClusterSnapshot,
    /// Write. Change the snapshot schedule of a cluster.
    #[strum(serialize = "redshift:ModifyClusterSnapshotSchedule")]
    ModifyClusterSnapshotSchedule,
    /// Write. Modify a subnet group.
    #[strum(serialize = "redshift:ModifyClusterSubnetGroup")]
    ModifyClusterSubnetGroup,
    /// Write. Modify an event notification subscription.
    #[strum(serialize = "redshift:ModifyEventSubscription")]
    ModifyEventSubscription,
    /// Write. Modify a saved query from the console.
    #[strum(serialize = "redshift:ModifySavedQuery")]
    ModifySavedQuery,
    /// Write. Modify a scheduled action.
    #[strum(serialize = "redshift:ModifyScheduledAction")]
    ModifyScheduledAction,
    /// Write. Change the snapshot copy retention period.
    #[strum(serialize = "redshift:ModifySnapshotCopyRetentionPeriod")]
    ModifySnapshotCopyRetentionPeriod,
    /// Write. Modify a snapshot schedule.
    #[strum(serialize = "redshift:ModifySnapshotSchedule")]
    ModifySnapshotSchedule,
    /// Write. Pause a cluster.
    #[strum(serialize = "redshift:PauseCluster")]
    PauseCluster,
    /// Write. Purchase a reserved node offering.
    #[strum(serialize = "redshift:PurchaseReservedNodeOffering")]
    PurchaseReservedNodeOffering,
    /// Write. Reboot a cluster.
    #[strum(serialize = "redshift:RebootCluster")]
    RebootCluster,
    /// Write. Reset a parameter group to defaults.
    #[strum(serialize = "redshift:ResetClusterParameterGroup")]
    ResetClusterParameterGroup,
    /// Write. Change the node count or type of a cluster.
    #[strum(serialize = "redshift:ResizeCluster")]
    ResizeCluster,
    /// Write. Restore a cluster from a snapshot.
    #[strum(serialize = "redshift:RestoreFromClusterSnapshot")]
    RestoreFromClusterSnapshot,
    /// Write. Restore a table from a cluster snapshot.
    #[strum(serialize = "redshift:RestoreTableFromClusterSnapshot")]
    RestoreTableFromClusterSnapshot,
    /// Write. Resume a paused cluster.
    #[strum(serialize = "redshift:ResumeCluster")]
    ResumeCluster,
    /// Permissions management. Revoke an inbound security group rule.
    #[strum(serialize = "redshift:RevokeClusterSecurityGroupIngress")]
    RevokeClusterSecurityGroupIngress,
    /// Permissions management. Revoke another account's snapshot access.
    #[strum(serialize = "redshift:RevokeSnapshotAccess")]
    RevokeSnapshotAccess,
    /// Write. Rotate the cluster encryption key.
    #[strum(serialize = "redshift:RotateEncryptionKey")]
    RotateEncryptionKey,
    /// List. View queries from the console.
    #[strum(serialize = "redshift:ViewQueriesFromConsole")]
    ViewQueriesFromConsole,
    /// Matches every Redshift action.
    #[strum(serialize = "redshift:*")]
    All,
}

arn_resources! {
    service = "redshift";
    /// A provisioned cluster.
    cluster as Cluster { partition, region, account, cluster_name }
        => "arn:{partition}:redshift:{region}:{account}:cluster:{cluster_name}";
    /// A database group, used by `GetClusterCredentials` / `JoinGroup`.
    dbgroup as DbGroup { partition, region, account, cluster_name, db_group }
        => "arn:{partition}:redshift:{region}:{account}:dbgroup:{cluster_name}/{db_group}";
    /// A database name on a cluster.
    dbname as DbName { partition, region, account, cluster_name, db_name }
        => "arn:{partition}:redshift:{region}:{account}:dbname:{cluster_name}/{db_name}";
    /// A database user on a cluster.
    dbuser as DbUser { partition, region, account, cluster_name, db_user }
        => "arn:{partition}:redshift:{region}:{account}:dbuser:{cluster_name}/{db_user}";
    /// An event notification subscription.
    eventsubscription as EventSubscription { partition, region, account, event_subscription_name }
        => "arn:{partition}:redshift:{region}:{account}:eventsubscription:{event_subscription_name}";
    /// A registered HSM client certificate.
    hsmclientcertificate as HsmClientCertificate { partition, region, account, hsm_client_certificate_id }
        => "arn:{partition}:redshift:{region}:{account}:hsmclientcertificate:{hsm_client_certificate_id}";
    /// A registered HSM configuration.
    hsmconfiguration as HsmConfiguration { partition, region, account, hsm_configuration_id }
        => "arn:{partition}:redshift:{region}:{account}:hsmconfiguration:{hsm_configuration_id}";
    /// A cluster parameter group.
    parametergroup as ParameterGroup { partition, region, account, parameter_group_name }
        => "arn:{partition}:redshift:{region}:{account}:parametergroup:{parameter_group_name}";
    /// A cluster security group.
    securitygroup as SecurityGroup { partition, region, account, security_group_name }
        => "arn:{partition}:redshift:{region}:{account}:securitygroup:{security_group_name}";
    /// A manual or automated cluster snapshot.
    snapshot as Snapshot { partition, region, account, cluster_name, snapshot_name }
        => "arn:{partition}:redshift:{region}:{account}:snapshot:{cluster_name}/{snapshot_name}";
    /// A cross-region snapshot copy grant.
    snapshotcopygrant as SnapshotCopyGrant { partition, region, account, snapshot_copy_grant_name }
        => "arn:{partition}:redshift:{region}:{account}:snapshotcopygrant:{snapshot_copy_grant_name}";
    /// A snapshot schedule.
    snapshotschedule as SnapshotSchedule { partition, region, account, schedule_identifier }
        => "arn:{partition}:redshift:{region}:{account}:snapshotschedule:{schedule_identifier}";
    /// A cluster subnet group.
    subnetgroup as SubnetGroup { partition, region, account, subnet_group_name }
        => "arn:{partition}:redshift:{region}:{account}:subnetgroup:{subnet_group_name}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_renders_fully_specified_arn() {
        let arn = Cluster {
            partition: Some("aws"),
            region: Some("us-east-1"),
            account: Some("123456789012"),
            cluster_name: Some("my-cluster"),
        }
        .arn();
        assert_eq!(
            arn.as_str(),
            "arn:aws:redshift:us-east-1:123456789012:cluster:my-cluster"
        );
    }

    #[test]
    fn dbuser_keeps_slash_between_cluster_and_user() {
        let arn = DbUser {
            cluster_name: Some("etl"),
            db_user: Some("loader"),
            ..Default::default()
        }
        .arn();
        assert_eq!(arn.as_str(), "arn:*:redshift:*:*:dbuser:etl/loader");
    }

    #[test]
    fn action_wire_values_are_exact() {
        assert_eq!(Action::CreateCluster.as_ref(), "redshift:CreateCluster");
        assert_eq!(Action::All.as_ref(), "redshift:*");
    }
}
