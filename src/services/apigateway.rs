//! Action and resource ARN vocabulary for Amazon API Gateway (`apigateway`).
//!
//! API Gateway authorizes through a small set of HTTP-verb shaped actions
//! rather than one action per API operation; the resource templates carry the
//! specificity.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "apigateway";

/// IAM actions published for Amazon API Gateway.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    /// Write. Removes the targeted resource.
    #[strum(serialize = "apigateway:DELETE")]
    Delete,
    /// Read. Reads the targeted resource.
    #[strum(serialize = "apigateway:GET")]
    Get,
    /// Write. Applies a partial update to the targeted resource.
    #[strum(serialize = "apigateway:PATCH")]
    Patch,
    /// Write. Creates a child of the targeted resource.
    #[strum(serialize = "apigateway:POST")]
    Post,
    /// Write. Replaces the targeted resource.
    #[strum(serialize = "apigateway:PUT")]
    Put,
    /// Write. Associates a WAF web ACL with a stage.
    #[strum(serialize = "apigateway:SetWebACL")]
    SetWebAcl,
    /// Write. Replaces the resource policy of a REST API.
    #[strum(serialize = "apigateway:UpdateRestApiPolicy")]
    UpdateRestApiPolicy,
    /// Matches every API Gateway action.
    #[strum(serialize = "apigateway:*")]
    All,
}

arn_resources! {
    service = "apigateway";
    /// An API key.
    api_key as ApiKey { partition, region, api_key_id }
        => "arn:{partition}:apigateway:{region}::/apikeys/{api_key_id}";
    /// A custom domain name.
    domain_name as DomainName { partition, region, domain_name }
        => "arn:{partition}:apigateway:{region}::/domainnames/{domain_name}";
    /// A REST API.
    rest_api as RestApi { partition, region, rest_api_id }
        => "arn:{partition}:apigateway:{region}::/restapis/{rest_api_id}";
    /// An authorizer attached to a REST API.
    rest_api_authorizer as RestApiAuthorizer { partition, region, rest_api_id, authorizer_id }
        => "arn:{partition}:apigateway:{region}::/restapis/{rest_api_id}/authorizers/{authorizer_id}";
    /// A deployment of a REST API.
    rest_api_deployment as RestApiDeployment { partition, region, rest_api_id, deployment_id }
        => "arn:{partition}:apigateway:{region}::/restapis/{rest_api_id}/deployments/{deployment_id}";
    /// A stage of a REST API.
    rest_api_stage as RestApiStage { partition, region, rest_api_id, stage_name }
        => "arn:{partition}:apigateway:{region}::/restapis/{rest_api_id}/stages/{stage_name}";
    /// A usage plan.
    usage_plan as UsagePlan { partition, region, usage_plan_id }
        => "arn:{partition}:apigateway:{region}::/usageplans/{usage_plan_id}";
    /// A VPC link.
    vpc_link as VpcLink { partition, region, vpc_link_id }
        => "arn:{partition}:apigateway:{region}::/vpclinks/{vpc_link_id}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_api_defaults_to_wildcards() {
        assert_eq!(
            RestApi::default().arn().as_str(),
            "arn:*:apigateway:*::/restapis/*"
        );
    }

    #[test]
    fn stage_substitutes_nested_fields() {
        let arn = RestApiStage {
            partition: Some("aws"),
            region: Some("us-east-1"),
            rest_api_id: Some("a1b2c3"),
            stage_name: Some("prod"),
        }
        .arn();
        assert_eq!(
            arn.as_str(),
            "arn:aws:apigateway:us-east-1::/restapis/a1b2c3/stages/prod"
        );
    }

    #[test]
    fn verb_actions_use_uppercase_wire_names() {
        assert_eq!(Action::Get.as_ref(), "apigateway:GET");
        assert_eq!(Action::SetWebAcl.to_string(), "apigateway:SetWebACL");
    }
}
