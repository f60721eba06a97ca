//! Action and resource ARN vocabulary for Amazon SNS (`sns`).

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "sns";

/// IAM actions published for Amazon SNS.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    #[strum(serialize = "sns:AddPermission")]
    AddPermission,
    #[strum(serialize = "sns:CheckIfPhoneNumberIsOptedOut")]
    CheckIfPhoneNumberIsOptedOut,
    #[strum(serialize = "sns:ConfirmSubscription")]
    ConfirmSubscription,
    #[strum(serialize = "sns:CreatePlatformApplication")]
    CreatePlatformApplication,
    #[strum(serialize = "sns:CreatePlatformEndpoint")]
    CreatePlatformEndpoint,
    #[strum(serialize = "sns:CreateTopic")]
    CreateTopic,
    #[strum(serialize = "sns:DeleteEndpoint")]
    DeleteEndpoint,
    #[strum(serialize = "sns:DeletePlatformApplication")]
    DeletePlatformApplication,
    #[strum(serialize = "sns:DeleteTopic")]
    DeleteTopic,
    #[strum(serialize = "sns:GetEndpointAttributes")]
    GetEndpointAttributes,
    #[strum(serialize = "sns:GetPlatformApplicationAttributes")]
    GetPlatformApplicationAttributes,
    #[strum(serialize = "sns:GetSMSAttributes")]
    GetSmsAttributes,
    #[strum(serialize = "sns:GetSubscriptionAttributes")]
    GetSubscriptionAttributes,
    #[strum(serialize = "sns:GetTopicAttributes")]
    GetTopicAttributes,
    #[strum(serialize = "sns:ListEndpointsByPlatformApplication")]
    ListEndpointsByPlatformApplication,
    #[strum(serialize = "sns:ListPhoneNumbersOptedOut")]
    ListPhoneNumbersOptedOut,
    #[strum(serialize = "sns:ListPlatformApplications")]
    ListPlatformApplications,
    #[strum(serialize = "sns:ListSubscriptions")]
    ListSubscriptions,
    #[strum(serialize = "sns:ListSubscriptionsByTopic")]
    ListSubscriptionsByTopic,
    #[strum(serialize = "sns:ListTagsForResource")]
    ListTagsForResource,
    #[strum(serialize = "sns:ListTopics")]
    ListTopics,
    #[strum(serialize = "sns:OptInPhoneNumber")]
    OptInPhoneNumber,
    #[strum(serialize = "sns:Publish")]
    Publish,
    #[strum(serialize = "sns:RemovePermission")]
    RemovePermission,
    #[strum(serialize = "sns:SetEndpointAttributes")]
    SetEndpointAttributes,
    #[strum(serialize = "sns:SetPlatformApplicationAttributes")]
    SetPlatformApplicationAttributes,
    #[strum(serialize = "sns:SetSMSAttributes")]
    SetSmsAttributes,
    #[strum(serialize = "sns:SetSubscriptionAttributes")]
    SetSubscriptionAttributes,
    #[strum(serialize = "sns:SetTopicAttributes")]
    SetTopicAttributes,
    #[strum(serialize = "sns:Subscribe")]
    Subscribe,
    #[strum(serialize = "sns:TagResource")]
    TagResource,
    #[strum(serialize = "sns:Unsubscribe")]
    Unsubscribe,
    #[strum(serialize = "sns:UntagResource")]
    UntagResource,
    /// Matches every SNS action.
    #[strum(serialize = "sns:*")]
    All,
}

arn_resources! {
    service = "sns";
    /// A topic. The resource segment is the bare topic name.
    topic as Topic { partition, region, account, topic_name }
        => "arn:{partition}:sns:{region}:{account}:{topic_name}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_resource_is_the_bare_name() {
        let arn = Topic {
            topic_name: Some("alerts"),
            ..Default::default()
        }
        .arn();
        assert_eq!(arn.as_str(), "arn:*:sns:*:*:alerts");
    }
}
