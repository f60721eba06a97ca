//! Known-ARN fixtures rendered through the dynamic template table.

use insta::assert_snapshot;
use yare::parameterized;

use crate::catalog;

#[parameterized(
    apigateway_rest_api = { "apigateway", "rest_api", &[], "arn:*:apigateway:*::/restapis/*" },
    lightsail_instance = { "lightsail", "instance", &[("id", "abc123")], "arn:*:lightsail:*:*:Instance/abc123" },
    redshift_cluster = {
        "redshift",
        "cluster",
        &[
            ("partition", "aws"),
            ("region", "us-east-1"),
            ("account", "123456789012"),
            ("cluster_name", "my-cluster"),
        ],
        "arn:aws:redshift:us-east-1:123456789012:cluster:my-cluster"
    },
    s3_object = {
        "s3",
        "object",
        &[("bucket_name", "reports"), ("object_key", "2024/q1.csv")],
        "arn:*:s3:::reports/2024/q1.csv"
    },
    iam_role = {
        "iam",
        "role",
        &[("partition", "aws"), ("account", "123456789012"), ("role_name_with_path", "ops/deployer")],
        "arn:aws:iam::123456789012:role/ops/deployer"
    },
    greengrass_deployment = {
        "greengrass",
        "deployment",
        &[("deployment_id", "44d2a1bb-abc1")],
        "arn:*:greengrass:*:*:deployments:44d2a1bb-abc1"
    },
)]
fn template_renders_expected_arn(
    prefix: &str,
    name: &str,
    fields: &[(&str, &str)],
    expected: &str,
) {
    let template = catalog::template(prefix, name)
        .unwrap_or_else(|| panic!("{prefix}/{name} should exist"));
    assert_eq!(template.render(fields).as_str(), expected);
}

#[test]
fn typed_builders_and_dynamic_table_agree() {
    use crate::services::{lightsail, redshift, sqs};

    let typed = redshift::Snapshot {
        cluster_name: Some("etl"),
        snapshot_name: Some("nightly"),
        ..Default::default()
    }
    .arn();
    let dynamic = catalog::template("redshift", "snapshot")
        .unwrap()
        .render(&[("cluster_name", "etl"), ("snapshot_name", "nightly")]);
    assert_eq!(typed, dynamic);

    assert_eq!(
        lightsail::Instance::default().arn(),
        catalog::template("lightsail", "instance")
            .unwrap()
            .render_wildcard()
    );

    assert_snapshot!(
        sqs::Queue {
            partition: Some("aws"),
            region: Some("eu-west-1"),
            account: Some("123456789012"),
            queue_name: Some("ingest"),
        }
        .arn(),
        @"arn:aws:sqs:eu-west-1:123456789012:ingest"
    );
}

#[test]
fn rendered_arns_parse_back_into_segments() {
    use crate::types::Arn;

    let rendered = catalog::template("kinesis", "consumer")
        .unwrap()
        .render(&[("stream_name", "clicks"), ("consumer_name", "analytics")]);
    let parsed: Arn = rendered.as_str().parse().unwrap();
    assert_eq!(parsed.service(), "kinesis");
    assert_eq!(parsed.resource(), "stream/clicks/consumer/analytics:*");
}
