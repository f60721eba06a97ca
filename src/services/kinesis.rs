//! Action and resource ARN vocabulary for Amazon Kinesis Data Streams
//! (`kinesis`).

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "kinesis";

/// IAM actions published for Amazon Kinesis Data Streams.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    #[strum(serialize = "kinesis:AddTagsToStream")]
    AddTagsToStream,
    #[strum(serialize = "kinesis:CreateStream")]
    CreateStream,
    #[strum(serialize = "kinesis:DecreaseStreamRetentionPeriod")]
    DecreaseStreamRetentionPeriod,
    #[strum(serialize = "kinesis:DeleteStream")]
    DeleteStream,
    #[strum(serialize = "kinesis:DeregisterStreamConsumer")]
    DeregisterStreamConsumer,
    #[strum(serialize = "kinesis:DescribeLimits")]
    DescribeLimits,
    #[strum(serialize = "kinesis:DescribeStream")]
    DescribeStream,
    #[strum(serialize = "kinesis:DescribeStreamConsumer")]
    DescribeStreamConsumer,
    #[strum(serialize = "kinesis:DescribeStreamSummary")]
    DescribeStreamSummary,
    #[strum(serialize = "kinesis:DisableEnhancedMonitoring")]
    DisableEnhancedMonitoring,
    #[strum(serialize = "kinesis:EnableEnhancedMonitoring")]
    EnableEnhancedMonitoring,
    #[strum(serialize = "kinesis:GetRecords")]
    GetRecords,
    #[strum(serialize = "kinesis:GetShardIterator")]
    GetShardIterator,
    #[strum(serialize = "kinesis:IncreaseStreamRetentionPeriod")]
    IncreaseStreamRetentionPeriod,
    #[strum(serialize = "kinesis:ListShards")]
    ListShards,
    #[strum(serialize = "kinesis:ListStreamConsumers")]
    ListStreamConsumers,
    #[strum(serialize = "kinesis:ListStreams")]
    ListStreams,
    #[strum(serialize = "kinesis:ListTagsForStream")]
    ListTagsForStream,
    #[strum(serialize = "kinesis:MergeShards")]
    MergeShards,
    #[strum(serialize = "kinesis:PutRecord")]
    PutRecord,
    #[strum(serialize = "kinesis:PutRecords")]
    PutRecords,
    #[strum(serialize = "kinesis:RegisterStreamConsumer")]
    RegisterStreamConsumer,
    #[strum(serialize = "kinesis:RemoveTagsFromStream")]
    RemoveTagsFromStream,
    #[strum(serialize = "kinesis:SplitShard")]
    SplitShard,
    #[strum(serialize = "kinesis:SubscribeToShard")]
    SubscribeToShard,
    #[strum(serialize = "kinesis:UpdateShardCount")]
    UpdateShardCount,
    /// Matches every Kinesis Data Streams action.
    #[strum(serialize = "kinesis:*")]
    All,
}

arn_resources! {
    service = "kinesis";
    /// An enhanced fan-out consumer registered on a stream.
    consumer as Consumer { partition, region, account, stream_name, consumer_name, consumer_creation_timestamp }
        => "arn:{partition}:kinesis:{region}:{account}:stream/{stream_name}/consumer/{consumer_name}:{consumer_creation_timestamp}";
    /// A data stream.
    stream as Stream { partition, region, account, stream_name }
        => "arn:{partition}:kinesis:{region}:{account}:stream/{stream_name}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumer_appends_creation_timestamp() {
        let arn = Consumer {
            stream_name: Some("clicks"),
            consumer_name: Some("analytics"),
            consumer_creation_timestamp: Some("1616044156"),
            ..Default::default()
        }
        .arn();
        assert_eq!(
            arn.as_str(),
            "arn:*:kinesis:*:*:stream/clicks/consumer/analytics:1616044156"
        );
    }
}
