//! Action and resource ARN vocabulary for Amazon CloudWatch (`cloudwatch`).
//!
//! Alarm ARNs use a `:` separator before the name; dashboards are global and
//! carry no region.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "cloudwatch";

/// IAM actions published for Amazon CloudWatch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    #[strum(serialize = "cloudwatch:DeleteAlarms")]
    DeleteAlarms,
    #[strum(serialize = "cloudwatch:DeleteAnomalyDetector")]
    DeleteAnomalyDetector,
    #[strum(serialize = "cloudwatch:DeleteDashboards")]
    DeleteDashboards,
    #[strum(serialize = "cloudwatch:DeleteInsightRules")]
    DeleteInsightRules,
    #[strum(serialize = "cloudwatch:DescribeAlarmHistory")]
    DescribeAlarmHistory,
    #[strum(serialize = "cloudwatch:DescribeAlarms")]
    DescribeAlarms,
    #[strum(serialize = "cloudwatch:DescribeAlarmsForMetric")]
    DescribeAlarmsForMetric,
    #[strum(serialize = "cloudwatch:DescribeAnomalyDetectors")]
    DescribeAnomalyDetectors,
    #[strum(serialize = "cloudwatch:DescribeInsightRules")]
    DescribeInsightRules,
    #[strum(serialize = "cloudwatch:DisableAlarmActions")]
    DisableAlarmActions,
    #[strum(serialize = "cloudwatch:DisableInsightRules")]
    DisableInsightRules,
    #[strum(serialize = "cloudwatch:EnableAlarmActions")]
    EnableAlarmActions,
    #[strum(serialize = "cloudwatch:EnableInsightRules")]
    EnableInsightRules,
    #[strum(serialize = "cloudwatch:GetDashboard")]
    GetDashboard,
    #[strum(serialize = "cloudwatch:GetInsightRuleReport")]
    GetInsightRuleReport,
    #[strum(serialize = "cloudwatch:GetMetricData")]
    GetMetricData,
    #[strum(serialize = "cloudwatch:GetMetricStatistics")]
    GetMetricStatistics,
    #[strum(serialize = "cloudwatch:GetMetricWidgetImage")]
    GetMetricWidgetImage,
    #[strum(serialize = "cloudwatch:ListDashboards")]
    ListDashboards,
    #[strum(serialize = "cloudwatch:ListMetrics")]
    ListMetrics,
    #[strum(serialize = "cloudwatch:ListTagsForResource")]
    ListTagsForResource,
    #[strum(serialize = "cloudwatch:PutAnomalyDetector")]
    PutAnomalyDetector,
    #[strum(serialize = "cloudwatch:PutCompositeAlarm")]
    PutCompositeAlarm,
    #[strum(serialize = "cloudwatch:PutDashboard")]
    PutDashboard,
    #[strum(serialize = "cloudwatch:PutInsightRule")]
    PutInsightRule,
    #[strum(serialize = "cloudwatch:PutMetricAlarm")]
    PutMetricAlarm,
    #[strum(serialize = "cloudwatch:PutMetricData")]
    PutMetricData,
    #[strum(serialize = "cloudwatch:SetAlarmState")]
    SetAlarmState,
    #[strum(serialize = "cloudwatch:TagResource")]
    TagResource,
    #[strum(serialize = "cloudwatch:UntagResource")]
    UntagResource,
    /// Matches every CloudWatch action.
    #[strum(serialize = "cloudwatch:*")]
    All,
}

arn_resources! {
    service = "cloudwatch";
    /// A metric or composite alarm.
    alarm as Alarm { partition, region, account, alarm_name }
        => "arn:{partition}:cloudwatch:{region}:{account}:alarm:{alarm_name}";
    /// A dashboard. Dashboards are account-global.
    dashboard as Dashboard { partition, account, dashboard_name }
        => "arn:{partition}:cloudwatch::{account}:dashboard/{dashboard_name}";
    /// A Contributor Insights rule.
    insight_rule as InsightRule { partition, region, account, insight_rule_name }
        => "arn:{partition}:cloudwatch:{region}:{account}:insight-rule/{insight_rule_name}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alarm_uses_colon_separator() {
        let arn = Alarm {
            alarm_name: Some("high-cpu"),
            ..Default::default()
        }
        .arn();
        assert_eq!(arn.as_str(), "arn:*:cloudwatch:*:*:alarm:high-cpu");
    }

    #[test]
    fn dashboard_arn_has_no_region() {
        let arn = Dashboard::default().arn();
        assert_eq!(arn.as_str(), "arn:*:cloudwatch::*:dashboard/*");
        assert!(arn.region().is_empty());
    }
}
