//! Action and resource ARN vocabulary for Amazon CloudWatch Logs (`logs`).

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "logs";

/// IAM actions published for Amazon CloudWatch Logs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    #[strum(serialize = "logs:AssociateKmsKey")]
    AssociateKmsKey,
    #[strum(serialize = "logs:CancelExportTask")]
    CancelExportTask,
    #[strum(serialize = "logs:CreateExportTask")]
    CreateExportTask,
    #[strum(serialize = "logs:CreateLogGroup")]
    CreateLogGroup,
    #[strum(serialize = "logs:CreateLogStream")]
    CreateLogStream,
    #[strum(serialize = "logs:DeleteDestination")]
    DeleteDestination,
    #[strum(serialize = "logs:DeleteLogGroup")]
    DeleteLogGroup,
    #[strum(serialize = "logs:DeleteLogStream")]
    DeleteLogStream,
    #[strum(serialize = "logs:DeleteMetricFilter")]
    DeleteMetricFilter,
    #[strum(serialize = "logs:DeleteQueryDefinition")]
    DeleteQueryDefinition,
    #[strum(serialize = "logs:DeleteResourcePolicy")]
    DeleteResourcePolicy,
    #[strum(serialize = "logs:DeleteRetentionPolicy")]
    DeleteRetentionPolicy,
    #[strum(serialize = "logs:DeleteSubscriptionFilter")]
    DeleteSubscriptionFilter,
    #[strum(serialize = "logs:DescribeDestinations")]
    DescribeDestinations,
    #[strum(serialize = "logs:DescribeExportTasks")]
    DescribeExportTasks,
    #[strum(serialize = "logs:DescribeLogGroups")]
    DescribeLogGroups,
    #[strum(serialize = "logs:DescribeLogStreams")]
    DescribeLogStreams,
    #[strum(serialize = "logs:DescribeMetricFilters")]
    DescribeMetricFilters,
    #[strum(serialize = "logs:DescribeQueries")]
    DescribeQueries,
    #[strum(serialize = "logs:DescribeQueryDefinitions")]
    DescribeQueryDefinitions,
    #[strum(serialize = "logs:DescribeResourcePolicies")]
    DescribeResourcePolicies,
    #[strum(serialize = "logs:DescribeSubscriptionFilters")]
    DescribeSubscriptionFilters,
    #[strum(serialize = "logs:DisassociateKmsKey")]
    DisassociateKmsKey,
    #[strum(serialize = "logs:FilterLogEvents")]
    FilterLogEvents,
    #[strum(serialize = "logs:GetLogEvents")]
    GetLogEvents,
    #[strum(serialize = "logs:GetLogGroupFields")]
    GetLogGroupFields,
    #[strum(serialize = "logs:GetLogRecord")]
    GetLogRecord,
    #[strum(serialize = "logs:GetQueryResults")]
    GetQueryResults,
    #[strum(serialize = "logs:ListTagsLogGroup")]
    ListTagsLogGroup,
    #[strum(serialize = "logs:PutDestination")]
    PutDestination,
    #[strum(serialize = "logs:PutDestinationPolicy")]
    PutDestinationPolicy,
    #[strum(serialize = "logs:PutLogEvents")]
    PutLogEvents,
    #[strum(serialize = "logs:PutMetricFilter")]
    PutMetricFilter,
    #[strum(serialize = "logs:PutQueryDefinition")]
    PutQueryDefinition,
    #[strum(serialize = "logs:PutResourcePolicy")]
    PutResourcePolicy,
    #[strum(serialize = "logs:PutRetentionPolicy")]
    PutRetentionPolicy,
    #[strum(serialize = "logs:PutSubscriptionFilter")]
    PutSubscriptionFilter,
    #[strum(serialize = "logs:StartQuery")]
    StartQuery,
    #[strum(serialize = "logs:StopQuery")]
    StopQuery,
    #[strum(serialize = "logs:TagLogGroup")]
    TagLogGroup,
    #[strum(serialize = "logs:UntagLogGroup")]
    UntagLogGroup,
    /// Matches every CloudWatch Logs action.
    #[strum(serialize = "logs:*")]
    All,
}

arn_resources! {
    service = "logs";
    /// A cross-account subscription destination.
    destination as Destination { partition, region, account, destination_name }
        => "arn:{partition}:logs:{region}:{account}:destination:{destination_name}";
    /// A log group.
    log_group as LogGroup { partition, region, account, log_group_name }
        => "arn:{partition}:logs:{region}:{account}:log-group:{log_group_name}";
    /// A log stream inside a log group.
    log_stream as LogStream { partition, region, account, log_group_name, log_stream_name }
        => "arn:{partition}:logs:{region}:{account}:log-group:{log_group_name}:log-stream:{log_stream_name}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_stream_appends_to_its_group() {
        let arn = LogStream {
            log_group_name: Some("/aws/lambda/resize"),
            log_stream_name: Some("2024/01/01/[$LATEST]abcd"),
            ..Default::default()
        }
        .arn();
        assert_eq!(
            arn.as_str(),
            "arn:*:logs:*:*:log-group:/aws/lambda/resize:log-stream:2024/01/01/[$LATEST]abcd"
        );
    }
}
