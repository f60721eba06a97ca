//! Action and resource ARN vocabulary for Amazon Kinesis Data Firehose
//! (`firehose`).

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "firehose";

/// IAM actions published for Amazon Kinesis Data Firehose.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    /// Write. Create a delivery stream.
    #[strum(serialize = "firehose:CreateDeliveryStream")]
    CreateDeliveryStream,
    /// Write. Delete a delivery stream.
    #[strum(serialize = "firehose:DeleteDeliveryStream")]
    DeleteDeliveryStream,
    /// Read. Describe a delivery stream.
    #[strum(serialize = "firehose:DescribeDeliveryStream")]
    DescribeDeliveryStream,
    /// List. List delivery streams.
    #[strum(serialize = "firehose:ListDeliveryStreams")]
    ListDeliveryStreams,
    /// List. List tags on a delivery stream.
    #[strum(serialize = "firehose:ListTagsForDeliveryStream")]
    ListTagsForDeliveryStream,
    /// Write. Write a single record.
    #[strum(serialize = "firehose:PutRecord")]
    PutRecord,
    /// Write. Write a batch of records.
    #[strum(serialize = "firehose:PutRecordBatch")]
    PutRecordBatch,
    /// Write. Enable server-side encryption.
    #[strum(serialize = "firehose:StartDeliveryStreamEncryption")]
    StartDeliveryStreamEncryption,
    /// Write. Disable server-side encryption.
    #[strum(serialize = "firehose:StopDeliveryStreamEncryption")]
    StopDeliveryStreamEncryption,
    /// Tagging. Add tags to a delivery stream.
    #[strum(serialize = "firehose:TagDeliveryStream")]
    TagDeliveryStream,
    /// Tagging. Remove tags from a delivery stream.
    #[strum(serialize = "firehose:UntagDeliveryStream")]
    UntagDeliveryStream,
    /// Write. Change the destination of a delivery stream.
    #[strum(serialize = "firehose:UpdateDestination")]
    UpdateDestination,
    /// Matches every Firehose action.
    #[strum(serialize = "firehose:*")]
    All,
}

arn_resources! {
    service = "firehose";
    /// A delivery stream.
    deliverystream as DeliveryStream { partition, region, account, delivery_stream_name }
        => "arn:{partition}:firehose:{region}:{account}:deliverystream/{delivery_stream_name}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_stream_renders_expected_path() {
        let arn = DeliveryStream {
            delivery_stream_name: Some("clickstream"),
            ..Default::default()
        }
        .arn();
        assert_eq!(arn.as_str(), "arn:*:firehose:*:*:deliverystream/clickstream");
    }
}
