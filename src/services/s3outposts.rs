//! Action and resource ARN vocabulary for Amazon S3 on Outposts
//! (`s3-outposts`).

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "s3-outposts";

/// IAM actions published for Amazon S3 on Outposts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    #[strum(serialize = "s3-outposts:AbortMultipartUpload")]
    AbortMultipartUpload,
    #[strum(serialize = "s3-outposts:CreateAccessPoint")]
    CreateAccessPoint,
    #[strum(serialize = "s3-outposts:CreateBucket")]
    CreateBucket,
    #[strum(serialize = "s3-outposts:CreateEndpoint")]
    CreateEndpoint,
    #[strum(serialize = "s3-outposts:DeleteAccessPoint")]
    DeleteAccessPoint,
    #[strum(serialize = "s3-outposts:DeleteAccessPointPolicy")]
    DeleteAccessPointPolicy,
    #[strum(serialize = "s3-outposts:DeleteBucket")]
    DeleteBucket,
    #[strum(serialize = "s3-outposts:DeleteBucketPolicy")]
    DeleteBucketPolicy,
    #[strum(serialize = "s3-outposts:DeleteEndpoint")]
    DeleteEndpoint,
    #[strum(serialize = "s3-outposts:DeleteObject")]
    DeleteObject,
    #[strum(serialize = "s3-outposts:DeleteObjectTagging")]
    DeleteObjectTagging,
    #[strum(serialize = "s3-outposts:GetAccessPoint")]
    GetAccessPoint,
    #[strum(serialize = "s3-outposts:GetAccessPointPolicy")]
    GetAccessPointPolicy,
    #[strum(serialize = "s3-outposts:GetBucket")]
    GetBucket,
    #[strum(serialize = "s3-outposts:GetBucketPolicy")]
    GetBucketPolicy,
    #[strum(serialize = "s3-outposts:GetBucketTagging")]
    GetBucketTagging,
    #[strum(serialize = "s3-outposts:GetObject")]
    GetObject,
    #[strum(serialize = "s3-outposts:GetObjectTagging")]
    GetObjectTagging,
    #[strum(serialize = "s3-outposts:ListAccessPoints")]
    ListAccessPoints,
    #[strum(serialize = "s3-outposts:ListBucketMultipartUploads")]
    ListBucketMultipartUploads,
    #[strum(serialize = "s3-outposts:ListEndpoints")]
    ListEndpoints,
    #[strum(serialize = "s3-outposts:ListMultipartUploadParts")]
    ListMultipartUploadParts,
    #[strum(serialize = "s3-outposts:ListOutpostsWithS3")]
    ListOutpostsWithS3,
    #[strum(serialize = "s3-outposts:ListRegionalBuckets")]
    ListRegionalBuckets,
    #[strum(serialize = "s3-outposts:ListSharedEndpoints")]
    ListSharedEndpoints,
    #[strum(serialize = "s3-outposts:PutAccessPointPolicy")]
    PutAccessPointPolicy,
    #[strum(serialize = "s3-outposts:PutBucketPolicy")]
    PutBucketPolicy,
    #[strum(serialize = "s3-outposts:PutBucketTagging")]
    PutBucketTagging,
    #[strum(serialize = "s3-outposts:PutObject")]
    PutObject,
    #[strum(serialize = "s3-outposts:PutObjectTagging")]
    PutObjectTagging,
    /// Matches every S3 on Outposts action.
    #[strum(serialize = "s3-outposts:*")]
    All,
}

arn_resources! {
    service = "s3-outposts";
    /// An access point on an Outpost bucket.
    accesspoint as AccessPoint { partition, region, account, outpost_id, access_point_name }
        => "arn:{partition}:s3-outposts:{region}:{account}:outpost/{outpost_id}/accesspoint/{access_point_name}";
    /// A bucket on an Outpost.
    bucket as Bucket { partition, region, account, outpost_id, bucket_name }
        => "arn:{partition}:s3-outposts:{region}:{account}:outpost/{outpost_id}/bucket/{bucket_name}";
    /// An endpoint attached to an Outpost.
    endpoint as Endpoint { partition, region, account, outpost_id, endpoint_id }
        => "arn:{partition}:s3-outposts:{region}:{account}:outpost/{outpost_id}/endpoint/{endpoint_id}";
    /// An object in an Outpost bucket.
    object as Object { partition, region, account, outpost_id, bucket_name, object_key }
        => "arn:{partition}:s3-outposts:{region}:{account}:outpost/{outpost_id}/bucket/{bucket_name}/object/{object_key}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_hyphenated() {
        assert_eq!(Action::All.as_ref(), "s3-outposts:*");
        assert_eq!(
            Action::CreateEndpoint.to_string(),
            "s3-outposts:CreateEndpoint"
        );
    }

    #[test]
    fn endpoint_defaults_to_wildcards() {
        assert_eq!(
            Endpoint::default().arn().as_str(),
            "arn:*:s3-outposts:*:*:outpost/*/endpoint/*"
        );
    }
}
