//! Action and resource ARN vocabulary for Amazon S3 (`s3`).
//!
//! Bucket and object ARNs carry no region or account segment; access points
//! and batch-operations jobs carry both. Variants are grouped by access
//! level.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::types::template::arn_resources;

/// IAM service prefix.
pub const PREFIX: &str = "s3";

/// IAM actions published for Amazon S3.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Action {
    // Read
    #[strum(serialize = "s3:DescribeJob")]
    DescribeJob,
    #[strum(serialize = "s3:GetAccelerateConfiguration")]
    GetAccelerateConfiguration,
    #[strum(serialize = "s3:GetAccessPoint")]
    GetAccessPoint,
    #[strum(serialize = "s3:GetAccessPointPolicy")]
    GetAccessPointPolicy,
    #[strum(serialize = "s3:GetAccessPointPolicyStatus")]
    GetAccessPointPolicyStatus,
    #[strum(serialize = "s3:GetAccountPublicAccessBlock")]
    GetAccountPublicAccessBlock,
    #[strum(serialize = "s3:GetAnalyticsConfiguration")]
    GetAnalyticsConfiguration,
    #[strum(serialize = "s3:GetBucketAcl")]
    GetBucketAcl,
    #[strum(serialize = "s3:GetBucketCORS")]
    GetBucketCors,
    #[strum(serialize = "s3:GetBucketLocation")]
    GetBucketLocation,
    #[strum(serialize = "s3:GetBucketLogging")]
    GetBucketLogging,
    #[strum(serialize = "s3:GetBucketNotification")]
    GetBucketNotification,
    #[strum(serialize = "s3:GetBucketObjectLockConfiguration")]
    GetBucketObjectLockConfiguration,
    #[strum(serialize = "s3:GetBucketPolicy")]
    GetBucketPolicy,
    #[strum(serialize = "s3:GetBucketPolicyStatus")]
    GetBucketPolicyStatus,
    #[strum(serialize = "s3:GetBucketPublicAccessBlock")]
    GetBucketPublicAccessBlock,
    #[strum(serialize = "s3:GetBucketRequestPayment")]
    GetBucketRequestPayment,
    #[strum(serialize = "s3:GetBucketTagging")]
    GetBucketTagging,
    #[strum(serialize = "s3:GetBucketVersioning")]
    GetBucketVersioning,
    #[strum(serialize = "s3:GetBucketWebsite")]
    GetBucketWebsite,
    #[strum(serialize = "s3:GetEncryptionConfiguration")]
    GetEncryptionConfiguration,
    #[strum(serialize = "s3:GetInventoryConfiguration")]
    GetInventoryConfiguration,
    #[strum(serialize = "s3:GetJobTagging")]
    GetJobTagging,
    #[strum(serialize = "s3:GetLifecycleConfiguration")]
    GetLifecycleConfiguration,
    #[strum(serialize = "s3:GetMetricsConfiguration")]
    GetMetricsConfiguration,
    #[strum(serialize = "s3:GetObject")]
    GetObject,
    #[strum(serialize = "s3:GetObjectAcl")]
    GetObjectAcl,
    #[strum(serialize = "s3:GetObjectLegalHold")]
    GetObjectLegalHold,
    #[strum(serialize = "s3:GetObjectRetention")]
    GetObjectRetention,
    #[strum(serialize = "s3:GetObjectTagging")]
    GetObjectTagging,
    #[strum(serialize = "s3:GetObjectTorrent")]
    GetObjectTorrent,
    #[strum(serialize = "s3:GetObjectVersion")]
    GetObjectVersion,
    #[strum(serialize = "s3:GetObjectVersionAcl")]
    GetObjectVersionAcl,
    #[strum(serialize = "s3:GetObjectVersionTagging")]
    GetObjectVersionTagging,
    #[strum(serialize = "s3:GetReplicationConfiguration")]
    GetReplicationConfiguration,

    // List
    #[strum(serialize = "s3:ListAccessPoints")]
    ListAccessPoints,
    #[strum(serialize = "s3:ListAllMyBuckets")]
    ListAllMyBuckets,
    #[strum(serialize = "s3:ListBucket")]
    ListBucket,
    #[strum(serialize = "s3:ListBucketMultipartUploads")]
    ListBucketMultipartUploads,
    #[strum(serialize = "s3:ListBucketVersions")]
    ListBucketVersions,
    #[strum(serialize = "s3:ListJobs")]
    ListJobs,
    #[strum(serialize = "s3:ListMultipartUploadParts")]
    ListMultipartUploadParts,

    // Write
    #[strum(serialize = "s3:AbortMultipartUpload")]
    AbortMultipartUpload,
    #[strum(serialize = "s3:CreateAccessPoint")]
    CreateAccessPoint,
    #[strum(serialize = "s3:CreateBucket")]
    CreateBucket,
    #[strum(serialize = "s3:CreateJob")]
    CreateJob,
    #[strum(serialize = "s3:DeleteAccessPoint")]
    DeleteAccessPoint,
    #[strum(serialize = "s3:DeleteBucket")]
    DeleteBucket,
    #[strum(serialize = "s3:DeleteBucketWebsite")]
    DeleteBucketWebsite,
    #[strum(serialize = "s3:DeleteObject")]
    DeleteObject,
    #[strum(serialize = "s3:DeleteObjectVersion")]
    DeleteObjectVersion,
    #[strum(serialize = "s3:PutAccelerateConfiguration")]
    PutAccelerateConfiguration,
    #[strum(serialize = "s3:PutAnalyticsConfiguration")]
    PutAnalyticsConfiguration,
    #[strum(serialize = "s3:PutBucketCORS")]
    PutBucketCors,
    #[strum(serialize = "s3:PutBucketLogging")]
    PutBucketLogging,
    #[strum(serialize = "s3:PutBucketNotification")]
    PutBucketNotification,
    #[strum(serialize = "s3:PutBucketObjectLockConfiguration")]
    PutBucketObjectLockConfiguration,
    #[strum(serialize = "s3:PutBucketRequestPayment")]
    PutBucketRequestPayment,
    #[strum(serialize = "s3:PutBucketVersioning")]
    PutBucketVersioning,
    #[strum(serialize = "s3:PutBucketWebsite")]
    PutBucketWebsite,
    #[strum(serialize = "s3:PutEncryptionConfiguration")]
    PutEncryptionConfiguration,
    #[strum(serialize = "s3:PutInventoryConfiguration")]
    PutInventoryConfiguration,
    #[strum(serialize = "s3:PutLifecycleConfiguration")]
    PutLifecycleConfiguration,
    #[strum(serialize = "s3:PutMetricsConfiguration")]
    PutMetricsConfiguration,
    #[strum(serialize = "s3:PutObject")]
    PutObject,
    #[strum(serialize = "s3:PutObjectLegalHold")]
    PutObjectLegalHold,
    #[strum(serialize = "s3:PutObjectRetention")]
    PutObjectRetention,
    #[strum(serialize = "s3:PutReplicationConfiguration")]
    PutReplicationConfiguration,
    #[strum(serialize = "s3:ReplicateDelete")]
    ReplicateDelete,
    #[strum(serialize = "s3:ReplicateObject")]
    ReplicateObject,
    #[strum(serialize = "s3:ReplicateTags")]
    ReplicateTags,
    #[strum(serialize = "s3:RestoreObject")]
    RestoreObject,
    #[strum(serialize = "s3:UpdateJobPriority")]
    UpdateJobPriority,
    #[strum(serialize = "s3:UpdateJobStatus")]
    UpdateJobStatus,

    // Permissions management
    #[strum(serialize = "s3:DeleteAccessPointPolicy")]
    DeleteAccessPointPolicy,
    #[strum(serialize = "s3:DeleteBucketPolicy")]
    DeleteBucketPolicy,
    #[strum(serialize = "s3:ObjectOwnerOverrideToBucketOwner")]
    ObjectOwnerOverrideToBucketOwner,
    #[strum(serialize = "s3:PutAccessPointPolicy")]
    PutAccessPointPolicy,
    #[strum(serialize = "s3:PutAccountPublicAccessBlock")]
    PutAccountPublicAccessBlock,
    #[strum(serialize = "s3:PutBucketAcl")]
    PutBucketAcl,
    #[strum(serialize = "s3:PutBucketPolicy")]
    PutBucketPolicy,
    #[strum(serialize = "s3:PutBucketPublicAccessBlock")]
    PutBucketPublicAccessBlock,
    #[strum(serialize = "s3:PutObjectAcl")]
    PutObjectAcl,
    #[strum(serialize = "s3:PutObjectVersionAcl")]
    PutObjectVersionAcl,

    // Tagging
    #[strum(serialize = "s3:DeleteJobTagging")]
    DeleteJobTagging,
    #[strum(serialize = "s3:DeleteObjectTagging")]
    DeleteObjectTagging,
    #[strum(serialize = "s3:DeleteObjectVersionTagging")]
    DeleteObjectVersionTagging,
    #[strum(serialize = "s3:PutBucketTagging")]
    PutBucketTagging,
    #[strum(serialize = "s3:PutJobTagging")]
    PutJobTagging,
    #[strum(serialize = "s3:PutObjectTagging")]
    PutObjectTagging,
    #[strum(serialize = "s3:PutObjectVersionTagging")]
    PutObjectVersionTagging,

    /// Matches every S3 action.
    #[strum(serialize = "s3:*")]
    All,
}

arn_resources! {
    service = "s3";
    /// An access point.
    accesspoint as AccessPoint { partition, region, account, access_point_name }
        => "arn:{partition}:s3:{region}:{account}:accesspoint/{access_point_name}";
    /// A bucket. No region or account segment.
    bucket as Bucket { partition, bucket_name }
        => "arn:{partition}:s3:::{bucket_name}";
    /// A batch-operations job.
    job as Job { partition, region, account, job_id }
        => "arn:{partition}:s3:{region}:{account}:job/{job_id}";
    /// An object, addressed by bucket and key. No region or account segment.
    object as Object { partition, bucket_name, object_key }
        => "arn:{partition}:s3:::{bucket_name}/{object_key}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_arn_has_empty_region_and_account() {
        let arn = Bucket {
            partition: Some("aws"),
            bucket_name: Some("reports"),
        }
        .arn();
        assert_eq!(arn.as_str(), "arn:aws:s3:::reports");
        assert!(arn.region().is_empty());
        assert!(arn.account().is_empty());
    }

    #[test]
    fn object_defaults_key_to_wildcard() {
        let arn = Object {
            bucket_name: Some("reports"),
            ..Default::default()
        }
        .arn();
        assert_eq!(arn.as_str(), "arn:*:s3:::reports/*");
    }

    #[test]
    fn uppercase_acronyms_survive_in_wire_names() {
        assert_eq!(Action::GetBucketCors.as_ref(), "s3:GetBucketCORS");
        assert_eq!(Action::PutBucketCors.as_ref(), "s3:PutBucketCORS");
    }
}
