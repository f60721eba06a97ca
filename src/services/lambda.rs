//! Action and resource ARN vocabulary for AWS Lambda (`lambda`).

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "lambda";

/// IAM actions published for AWS Lambda.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    #[strum(serialize = "lambda:AddLayerVersionPermission")]
    AddLayerVersionPermission,
    #[strum(serialize = "lambda:AddPermission")]
    AddPermission,
    #[strum(serialize = "lambda:CreateAlias")]
    CreateAlias,
    #[strum(serialize = "lambda:CreateEventSourceMapping")]
    CreateEventSourceMapping,
    #[strum(serialize = "lambda:CreateFunction")]
    CreateFunction,
    #[strum(serialize = "lambda:DeleteAlias")]
    DeleteAlias,
    #[strum(serialize = "lambda:DeleteEventSourceMapping")]
    DeleteEventSourceMapping,
    #[strum(serialize = "lambda:DeleteFunction")]
    DeleteFunction,
    #[strum(serialize = "lambda:DeleteFunctionConcurrency")]
    DeleteFunctionConcurrency,
    #[strum(serialize = "lambda:DeleteFunctionEventInvokeConfig")]
    DeleteFunctionEventInvokeConfig,
    #[strum(serialize = "lambda:DeleteLayerVersion")]
    DeleteLayerVersion,
    #[strum(serialize = "lambda:DeleteProvisionedConcurrencyConfig")]
    DeleteProvisionedConcurrencyConfig,
    #[strum(serialize = "lambda:DisableReplication")]
    DisableReplication,
    #[strum(serialize = "lambda:EnableReplication")]
    EnableReplication,
    #[strum(serialize = "lambda:GetAccountSettings")]
    GetAccountSettings,
    #[strum(serialize = "lambda:GetAlias")]
    GetAlias,
    #[strum(serialize = "lambda:GetEventSourceMapping")]
    GetEventSourceMapping,
    #[strum(serialize = "lambda:GetFunction")]
    GetFunction,
    #[strum(serialize = "lambda:GetFunctionConcurrency")]
    GetFunctionConcurrency,
    #[strum(serialize = "lambda:GetFunctionConfiguration")]
    GetFunctionConfiguration,
    #[strum(serialize = "lambda:GetFunctionEventInvokeConfig")]
    GetFunctionEventInvokeConfig,
    #[strum(serialize = "lambda:GetLayerVersion")]
    GetLayerVersion,
    #[strum(serialize = "lambda:GetLayerVersionPolicy")]
    GetLayerVersionPolicy,
    #[strum(serialize = "lambda:GetPolicy")]
    GetPolicy,
    #[strum(serialize = "lambda:GetProvisionedConcurrencyConfig")]
    GetProvisionedConcurrencyConfig,
    #[strum(serialize = "lambda:InvokeAsync")]
    InvokeAsync,
    #[strum(serialize = "lambda:InvokeFunction")]
    InvokeFunction,
    #[strum(serialize = "lambda:ListAliases")]
    ListAliases,
    #[strum(serialize = "lambda:ListEventSourceMappings")]
    ListEventSourceMappings,
    #[strum(serialize = "lambda:ListFunctionEventInvokeConfigs")]
    ListFunctionEventInvokeConfigs,
    #[strum(serialize = "lambda:ListFunctions")]
    ListFunctions,
    #[strum(serialize = "lambda:ListLayerVersions")]
    ListLayerVersions,
    #[strum(serialize = "lambda:ListLayers")]
    ListLayers,
    #[strum(serialize = "lambda:ListProvisionedConcurrencyConfigs")]
    ListProvisionedConcurrencyConfigs,
    #[strum(serialize = "lambda:ListTags")]
    ListTags,
    #[strum(serialize = "lambda:ListVersionsByFunction")]
    ListVersionsByFunction,
    #[strum(serialize = "lambda:PublishLayerVersion")]
    PublishLayerVersion,
    #[strum(serialize = "lambda:PublishVersion")]
    PublishVersion,
    #[strum(serialize = "lambda:PutFunctionConcurrency")]
    PutFunctionConcurrency,
    #[strum(serialize = "lambda:PutFunctionEventInvokeConfig")]
    PutFunctionEventInvokeConfig,
    #[strum(serialize = "lambda:PutProvisionedConcurrencyConfig")]
    PutProvisionedConcurrencyConfig,
    #[strum(serialize = "lambda:RemoveLayerVersionPermission")]
    RemoveLayerVersionPermission,
    #[strum(serialize = "lambda:RemovePermission")]
    RemovePermission,
    #[strum(serialize = "lambda:TagResource")]
    TagResource,
    #[strum(serialize = "lambda:UntagResource")]
    UntagResource,
    #[strum(serialize = "lambda:UpdateAlias")]
    UpdateAlias,
    #[strum(serialize = "lambda:UpdateEventSourceMapping")]
    UpdateEventSourceMapping,
    #[strum(serialize = "lambda:UpdateFunctionCode")]
    UpdateFunctionCode,
    #[strum(serialize = "lambda:UpdateFunctionConfiguration")]
    UpdateFunctionConfiguration,
    #[strum(serialize = "lambda:UpdateFunctionEventInvokeConfig")]
    UpdateFunctionEventInvokeConfig,
    /// Matches every Lambda action.
    #[strum(serialize = "lambda:*")]
    All,
}

arn_resources! {
    service = "lambda";
    /// An alias of a function.
    alias as Alias { partition, region, account, function_name, alias }
        => "arn:{partition}:lambda:{region}:{account}:function:{function_name}:{alias}";
    /// An event source mapping.
    event_source_mapping as EventSourceMapping { partition, region, account, uuid }
        => "arn:{partition}:lambda:{region}:{account}:event-source-mapping:{uuid}";
    /// A function, unqualified.
    function as Function { partition, region, account, function_name }
        => "arn:{partition}:lambda:{region}:{account}:function:{function_name}";
    /// A published version of a function.
    function_version as FunctionVersion { partition, region, account, function_name, version }
        => "arn:{partition}:lambda:{region}:{account}:function:{function_name}:{version}";
    /// A layer, all versions.
    layer as Layer { partition, region, account, layer_name }
        => "arn:{partition}:lambda:{region}:{account}:layer:{layer_name}";
    /// One version of a layer.
    layer_version as LayerVersion { partition, region, account, layer_name, layer_version }
        => "arn:{partition}:lambda:{region}:{account}:layer:{layer_name}:{layer_version}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_function_arns_append_the_qualifier() {
        let version = FunctionVersion {
            function_name: Some("resize-images"),
            version: Some("42"),
            ..Default::default()
        }
        .arn();
        assert_eq!(
            version.as_str(),
            "arn:*:lambda:*:*:function:resize-images:42"
        );
    }
}
