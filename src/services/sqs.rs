//! Action and resource ARN vocabulary for Amazon SQS (`sqs`).

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "sqs";

/// IAM actions published for Amazon SQS.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    /// Permissions management. Grant another account access to a queue.
    #[strum(serialize = "sqs:AddPermission")]
    AddPermission,
    /// Write. Change the visibility timeout of a received message.
    #[strum(serialize = "sqs:ChangeMessageVisibility")]
    ChangeMessageVisibility,
    /// Write. Create a queue.
    #[strum(serialize = "sqs:CreateQueue")]
    CreateQueue,
    /// Write. Delete a received message.
    #[strum(serialize = "sqs:DeleteMessage")]
    DeleteMessage,
    /// Write. Delete a queue.
    #[strum(serialize = "sqs:DeleteQueue")]
    DeleteQueue,
    /// Read. Read queue attributes.
    #[strum(serialize = "sqs:GetQueueAttributes")]
    GetQueueAttributes,
    /// Read. Resolve a queue name to its URL.
    #[strum(serialize = "sqs:GetQueueUrl")]
    GetQueueUrl,
    /// Read. List queues whose dead-letter target is the given queue.
    #[strum(serialize = "sqs:ListDeadLetterSourceQueues")]
    ListDeadLetterSourceQueues,
    /// Read. List tags on a queue.
    #[strum(serialize = "sqs:ListQueueTags")]
    ListQueueTags,
    /// List. List queues.
    #[strum(serialize = "sqs:ListQueues")]
    ListQueues,
    /// Write. Delete every message in a queue.
    #[strum(serialize = "sqs:PurgeQueue")]
    PurgeQueue,
    /// Read. Receive messages.
    #[strum(serialize = "sqs:ReceiveMessage")]
    ReceiveMessage,
    /// Permissions management. Revoke a cross-account grant.
    #[strum(serialize = "sqs:RemovePermission")]
    RemovePermission,
    /// Write. Send a message.
    #[strum(serialize = "sqs:SendMessage")]
    SendMessage,
    /// Write. Set queue attributes.
    #[strum(serialize = "sqs:SetQueueAttributes")]
    SetQueueAttributes,
    /// Tagging. Add tags to a queue.
    #[strum(serialize = "sqs:TagQueue")]
    TagQueue,
    /// Tagging. Remove tags from a queue.
    #[strum(serialize = "sqs:UntagQueue")]
    UntagQueue,
    /// Matches every SQS action.
    #[strum(serialize = "sqs:*")]
    All,
}

arn_resources! {
    service = "sqs";
    /// A queue. The resource segment is the bare queue name.
    queue as Queue { partition, region, account, queue_name }
        => "arn:{partition}:sqs:{region}:{account}:{queue_name}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_resource_is_the_bare_name() {
        let arn = Queue {
            partition: Some("aws"),
            region: Some("eu-west-1"),
            account: Some("123456789012"),
            queue_name: Some("ingest"),
        }
        .arn();
        assert_eq!(arn.as_str(), "arn:aws:sqs:eu-west-1:123456789012:ingest");
        assert_eq!(arn.resource(), "ingest");
    }
}
