//! Action and resource ARN vocabulary for Amazon EventBridge (`events`).

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "events";

/// IAM actions published for Amazon EventBridge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    #[strum(serialize = "events:ActivateEventSource")]
    ActivateEventSource,
    #[strum(serialize = "events:CreateEventBus")]
    CreateEventBus,
    #[strum(serialize = "events:CreatePartnerEventSource")]
    CreatePartnerEventSource,
    #[strum(serialize = "events:DeactivateEventSource")]
    DeactivateEventSource,
    #[strum(serialize = "events:DeleteEventBus")]
    DeleteEventBus,
    #[strum(serialize = "events:DeletePartnerEventSource")]
    DeletePartnerEventSource,
    #[strum(serialize = "events:DeleteRule")]
    DeleteRule,
    #[strum(serialize = "events:DescribeEventBus")]
    DescribeEventBus,
    #[strum(serialize = "events:DescribeEventSource")]
    DescribeEventSource,
    #[strum(serialize = "events:DescribePartnerEventSource")]
    DescribePartnerEventSource,
    #[strum(serialize = "events:DescribeRule")]
    DescribeRule,
    #[strum(serialize = "events:DisableRule")]
    DisableRule,
    #[strum(serialize = "events:EnableRule")]
    EnableRule,
    #[strum(serialize = "events:ListEventBuses")]
    ListEventBuses,
    #[strum(serialize = "events:ListEventSources")]
    ListEventSources,
    #[strum(serialize = "events:ListPartnerEventSourceAccounts")]
    ListPartnerEventSourceAccounts,
    #[strum(serialize = "events:ListPartnerEventSources")]
    ListPartnerEventSources,
    #[strum(serialize = "events:ListRuleNamesByTarget")]
    ListRuleNamesByTarget,
    #[strum(serialize = "events:ListRules")]
    ListRules,
    #[strum(serialize = "events:ListTagsForResource")]
    ListTagsForResource,
    #[strum(serialize = "events:ListTargetsByRule")]
    ListTargetsByRule,
    #[strum(serialize = "events:PutEvents")]
    PutEvents,
    #[strum(serialize = "events:PutPartnerEvents")]
    PutPartnerEvents,
    #[strum(serialize = "events:PutPermission")]
    PutPermission,
    #[strum(serialize = "events:PutRule")]
    PutRule,
    #[strum(serialize = "events:PutTargets")]
    PutTargets,
    #[strum(serialize = "events:RemovePermission")]
    RemovePermission,
    #[strum(serialize = "events:RemoveTargets")]
    RemoveTargets,
    #[strum(serialize = "events:TagResource")]
    TagResource,
    #[strum(serialize = "events:TestEventPattern")]
    TestEventPattern,
    #[strum(serialize = "events:UntagResource")]
    UntagResource,
    /// Matches every EventBridge action.
    #[strum(serialize = "events:*")]
    All,
}

arn_resources! {
    service = "events";
    /// An event bus, default or custom.
    event_bus as EventBus { partition, region, account, event_bus_name }
        => "arn:{partition}:events:{region}:{account}:event-bus/{event_bus_name}";
    /// A partner event source. No account segment.
    event_source as EventSource { partition, region, event_source_name }
        => "arn:{partition}:events:{region}::event-source/{event_source_name}";
    /// A rule on an event bus.
    rule as Rule { partition, region, account, rule_name }
        => "arn:{partition}:events:{region}:{account}:rule/{rule_name}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_source_arn_has_no_account() {
        let arn = EventSource {
            event_source_name: Some("aws.partner/example.com/123"),
            ..Default::default()
        }
        .arn();
        assert_eq!(
            arn.as_str(),
            "arn:*:events:*::event-source/aws.partner/example.com/123"
        );
        assert!(arn.account().is_empty());
    }
}
