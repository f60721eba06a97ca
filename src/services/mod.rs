//! Generated per-service vocabulary modules.
//!
//! Every module is a leaf: a `PREFIX` constant, a closed `Action` enum whose
//! variants render the exact wire strings, and the resource builders declared
//! through `arn_resources!`. [`ALL`] is the uniform, dynamic view over the
//! same data.

use strum::IntoEnumIterator;

use crate::types::ResourceTemplate;

pub mod apigateway;
pub mod cloudwatch;
pub mod dynamodb;
pub mod ecr;
pub mod events;
pub mod firehose;
pub mod greengrass;
pub mod iam;
pub mod kinesis;
pub mod kms;
pub mod lambda;
pub mod lightsail;
pub mod logs;
pub mod redshift;
pub mod route53;
pub mod s3;
pub mod s3outposts;
pub mod secretsmanager;
pub mod sns;
pub mod sqs;
pub mod sts;

/// One generated service module, viewed uniformly.
#[derive(Debug, Clone, Copy)]
pub struct ServiceEntry {
    /// IAM service prefix (e.g. `s3-outposts`).
    pub prefix: &'static str,
    /// Service title from the authorization reference.
    pub title: &'static str,
    /// Every published action string, in declaration order.
    pub actions: fn() -> Vec<&'static str>,
    /// Resource ARN templates, in reference order.
    pub templates: &'static [ResourceTemplate],
}

macro_rules! entries {
    ($( $module:ident => $title:literal ),+ $(,)?) => {
        /// Every generated service module, in prefix order.
        pub const ALL: &[ServiceEntry] = &[
            $(
                ServiceEntry {
                    prefix: $module::PREFIX,
                    title: $title,
                    actions: || $module::Action::iter().map(Into::into).collect(),
                    templates: $module::TEMPLATES,
                },
            )+
        ];
    };
}

entries! {
    apigateway => "Amazon API Gateway",
    cloudwatch => "Amazon CloudWatch",
    dynamodb => "Amazon DynamoDB",
    ecr => "Amazon Elastic Container Registry",
    events => "Amazon EventBridge",
    firehose => "Amazon Kinesis Data Firehose",
    greengrass => "AWS IoT Greengrass",
    iam => "AWS Identity and Access Management",
    kinesis => "Amazon Kinesis Data Streams",
    kms => "AWS Key Management Service",
    lambda => "AWS Lambda",
    lightsail => "Amazon Lightsail",
    logs => "Amazon CloudWatch Logs",
    redshift => "Amazon Redshift",
    route53 => "Amazon Route 53",
    s3 => "Amazon S3",
    s3outposts => "Amazon S3 on Outposts",
    secretsmanager => "AWS Secrets Manager",
    sns => "Amazon SNS",
    sqs => "Amazon SQS",
    sts => "AWS Security Token Service",
}
