//! Action and resource ARN vocabulary for Amazon DynamoDB (`dynamodb`).

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "dynamodb";

/// IAM actions published for Amazon DynamoDB.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    #[strum(serialize = "dynamodb:BatchGetItem")]
    BatchGetItem,
    #[strum(serialize = "dynamodb:BatchWriteItem")]
    BatchWriteItem,
    #[strum(serialize = "dynamodb:ConditionCheckItem")]
    ConditionCheckItem,
    #[strum(serialize = "dynamodb:CreateBackup")]
    CreateBackup,
    #[strum(serialize = "dynamodb:CreateGlobalTable")]
    CreateGlobalTable,
    #[strum(serialize = "dynamodb:CreateTable")]
    CreateTable,
    #[strum(serialize = "dynamodb:CreateTableReplica")]
    CreateTableReplica,
    #[strum(serialize = "dynamodb:DeleteBackup")]
    DeleteBackup,
    #[strum(serialize = "dynamodb:DeleteItem")]
    DeleteItem,
    #[strum(serialize = "dynamodb:DeleteTable")]
    DeleteTable,
    #[strum(serialize = "dynamodb:DeleteTableReplica")]
    DeleteTableReplica,
    #[strum(serialize = "dynamodb:DescribeBackup")]
    DescribeBackup,
    #[strum(serialize = "dynamodb:DescribeContinuousBackups")]
    DescribeContinuousBackups,
    #[strum(serialize = "dynamodb:DescribeGlobalTable")]
    DescribeGlobalTable,
    #[strum(serialize = "dynamodb:DescribeGlobalTableSettings")]
    DescribeGlobalTableSettings,
    #[strum(serialize = "dynamodb:DescribeLimits")]
    DescribeLimits,
    #[strum(serialize = "dynamodb:DescribeStream")]
    DescribeStream,
    #[strum(serialize = "dynamodb:DescribeTable")]
    DescribeTable,
    #[strum(serialize = "dynamodb:DescribeTimeToLive")]
    DescribeTimeToLive,
    #[strum(serialize = "dynamodb:GetItem")]
    GetItem,
    #[strum(serialize = "dynamodb:GetRecords")]
    GetRecords,
    #[strum(serialize = "dynamodb:GetShardIterator")]
    GetShardIterator,
    #[strum(serialize = "dynamodb:ListBackups")]
    ListBackups,
    #[strum(serialize = "dynamodb:ListGlobalTables")]
    ListGlobalTables,
    #[strum(serialize = "dynamodb:ListStreams")]
    ListStreams,
    #[strum(serialize = "dynamodb:ListTables")]
    ListTables,
    #[strum(serialize = "dynamodb:ListTagsOfResource")]
    ListTagsOfResource,
    #[strum(serialize = "dynamodb:PutItem")]
    PutItem,
    #[strum(serialize = "dynamodb:Query")]
    Query,
    #[strum(serialize = "dynamodb:RestoreTableFromBackup")]
    RestoreTableFromBackup,
    #[strum(serialize = "dynamodb:RestoreTableToPointInTime")]
    RestoreTableToPointInTime,
    #[strum(serialize = "dynamodb:Scan")]
    Scan,
    #[strum(serialize = "dynamodb:TagResource")]
    TagResource,
    #[strum(serialize = "dynamodb:UntagResource")]
    UntagResource,
    #[strum(serialize = "dynamodb:UpdateContinuousBackups")]
    UpdateContinuousBackups,
    #[strum(serialize = "dynamodb:UpdateGlobalTable")]
    UpdateGlobalTable,
    #[strum(serialize = "dynamodb:UpdateGlobalTableSettings")]
    UpdateGlobalTableSettings,
    #[strum(serialize = "dynamodb:UpdateItem")]
    UpdateItem,
    #[strum(serialize = "dynamodb:UpdateTable")]
    UpdateTable,
    #[strum(serialize = "dynamodb:UpdateTimeToLive")]
    UpdateTimeToLive,
    /// Matches every DynamoDB action.
    #[strum(serialize = "dynamodb:*")]
    All,
}

arn_resources! {
    service = "dynamodb";
    /// An on-demand or scheduled backup of a table.
    backup as Backup { partition, region, account, table_name, backup_name }
        => "arn:{partition}:dynamodb:{region}:{account}:table/{table_name}/backup/{backup_name}";
    /// A global table.
    global_table as GlobalTable { partition, account, global_table_name }
        => "arn:{partition}:dynamodb::{account}:global-table/{global_table_name}";
    /// A secondary index on a table.
    index as Index { partition, region, account, table_name, index_name }
        => "arn:{partition}:dynamodb:{region}:{account}:table/{table_name}/index/{index_name}";
    /// A stream attached to a table.
    stream as Stream { partition, region, account, table_name, stream_label }
        => "arn:{partition}:dynamodb:{region}:{account}:table/{table_name}/stream/{stream_label}";
    /// A table.
    table as Table { partition, region, account, table_name }
        => "arn:{partition}:dynamodb:{region}:{account}:table/{table_name}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_nests_under_its_table() {
        let arn = Index {
            table_name: Some("orders"),
            index_name: Some("by-customer"),
            ..Default::default()
        }
        .arn();
        assert_eq!(
            arn.as_str(),
            "arn:*:dynamodb:*:*:table/orders/index/by-customer"
        );
    }

    #[test]
    fn global_table_arn_has_no_region() {
        let arn = GlobalTable::default().arn();
        assert_eq!(arn.as_str(), "arn:*:dynamodb::*:global-table/*");
        assert!(arn.region().is_empty());
    }
}
