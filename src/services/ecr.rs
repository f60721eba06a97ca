//! Action and resource ARN vocabulary for the Amazon Elastic Container
//! Registry (`ecr`).

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "ecr";

/// IAM actions published for the Amazon Elastic Container Registry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    #[strum(serialize = "ecr:BatchCheckLayerAvailability")]
    BatchCheckLayerAvailability,
    #[strum(serialize = "ecr:BatchDeleteImage")]
    BatchDeleteImage,
    #[strum(serialize = "ecr:BatchGetImage")]
    BatchGetImage,
    #[strum(serialize = "ecr:CompleteLayerUpload")]
    CompleteLayerUpload,
    #[strum(serialize = "ecr:CreateRepository")]
    CreateRepository,
    #[strum(serialize = "ecr:DeleteLifecyclePolicy")]
    DeleteLifecyclePolicy,
    #[strum(serialize = "ecr:DeleteRepository")]
    DeleteRepository,
    #[strum(serialize = "ecr:DeleteRepositoryPolicy")]
    DeleteRepositoryPolicy,
    #[strum(serialize = "ecr:DescribeImageScanFindings")]
    DescribeImageScanFindings,
    #[strum(serialize = "ecr:DescribeImages")]
    DescribeImages,
    #[strum(serialize = "ecr:DescribeRepositories")]
    DescribeRepositories,
    #[strum(serialize = "ecr:GetAuthorizationToken")]
    GetAuthorizationToken,
    #[strum(serialize = "ecr:GetDownloadUrlForLayer")]
    GetDownloadUrlForLayer,
    #[strum(serialize = "ecr:GetLifecyclePolicy")]
    GetLifecyclePolicy,
    #[strum(serialize = "ecr:GetLifecyclePolicyPreview")]
    GetLifecyclePolicyPreview,
    #[strum(serialize = "ecr:GetRepositoryPolicy")]
    GetRepositoryPolicy,
    #[strum(serialize = "ecr:InitiateLayerUpload")]
    InitiateLayerUpload,
    #[strum(serialize = "ecr:ListImages")]
    ListImages,
    #[strum(serialize = "ecr:ListTagsForResource")]
    ListTagsForResource,
    #[strum(serialize = "ecr:PutImage")]
    PutImage,
    #[strum(serialize = "ecr:PutImageScanningConfiguration")]
    PutImageScanningConfiguration,
    #[strum(serialize = "ecr:PutImageTagMutability")]
    PutImageTagMutability,
    #[strum(serialize = "ecr:PutLifecyclePolicy")]
    PutLifecyclePolicy,
    #[strum(serialize = "ecr:SetRepositoryPolicy")]
    SetRepositoryPolicy,
    #[strum(serialize = "ecr:StartImageScan")]
    StartImageScan,
    #[strum(serialize = "ecr:StartLifecyclePolicyPreview")]
    StartLifecyclePolicyPreview,
    #[strum(serialize = "ecr:TagResource")]
    TagResource,
    #[strum(serialize = "ecr:UntagResource")]
    UntagResource,
    #[strum(serialize = "ecr:UploadLayerPart")]
    UploadLayerPart,
    /// Matches every ECR action.
    #[strum(serialize = "ecr:*")]
    All,
}

arn_resources! {
    service = "ecr";
    /// An image repository.
    repository as Repository { partition, region, account, repository_name }
        => "arn:{partition}:ecr:{region}:{account}:repository/{repository_name}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_names_may_contain_slashes() {
        let arn = Repository {
            repository_name: Some("team/app"),
            ..Default::default()
        }
        .arn();
        assert_eq!(arn.as_str(), "arn:*:ecr:*:*:repository/team/app");
    }
}
