//! Catalog-level invariants: action wire strings, wildcard entries, lookups.

use std::collections::HashSet;

use serde_json::json;

use crate::error::VocabError;
use crate::services::{ALL, apigateway};
use crate::{catalog, types::ActionName};

#[test]
fn every_action_carries_its_service_prefix() {
    for entry in ALL {
        for action in (entry.actions)() {
            assert!(
                action.starts_with(&format!("{}:", entry.prefix)),
                "{}: stray action '{}'",
                entry.prefix,
                action
            );
            action
                .parse::<ActionName>()
                .unwrap_or_else(|err| panic!("{action}: {err}"));
        }
    }
}

#[test]
fn every_service_has_exactly_one_wildcard_action() {
    for entry in ALL {
        let wildcard = format!("{}:*", entry.prefix);
        let count = (entry.actions)()
            .iter()
            .filter(|action| action.ends_with(":*"))
            .count();
        assert_eq!(count, 1, "{}", entry.prefix);
        assert!((entry.actions)().contains(&wildcard.as_str()));
    }
}

#[test]
fn actions_are_unique_within_a_service() {
    for entry in ALL {
        let actions = (entry.actions)();
        let unique: HashSet<&str> = actions.iter().copied().collect();
        assert_eq!(unique.len(), actions.len(), "{}", entry.prefix);
    }
}

#[test]
fn service_lookup_is_keyed_by_prefix() {
    let entry = catalog::service("redshift").unwrap();
    assert_eq!(entry.title, "Amazon Redshift");

    let outposts = catalog::service("s3-outposts").unwrap();
    assert_eq!(outposts.title, "Amazon S3 on Outposts");

    assert!(catalog::service("ec2").is_none());
}

#[test]
fn require_service_reports_the_unknown_prefix() {
    let err = catalog::require_service("ec2").unwrap_err();
    assert_eq!(err, VocabError::UnknownService("ec2".to_string()));
    assert_eq!(err.to_string(), "unknown service prefix 'ec2'");
}

#[test]
fn contains_action_is_exact_and_case_sensitive() {
    assert!(catalog::contains_action("redshift:CreateCluster"));
    assert!(catalog::contains_action("greengrass:CreateComponentVersion"));
    assert!(catalog::contains_action("s3-outposts:*"));

    assert!(!catalog::contains_action("redshift:createcluster"));
    assert!(!catalog::contains_action("redshift:Create Cluster"));
    assert!(!catalog::contains_action("ec2:RunInstances"));
    assert!(!catalog::contains_action("CreateCluster"));
}

#[test]
fn template_lookup_finds_by_service_and_name() {
    let template = catalog::template("apigateway", "rest_api").unwrap();
    assert_eq!(template.template, apigateway::RestApi::TEMPLATE);

    assert!(catalog::template("apigateway", "bucket").is_none());
    assert!(catalog::template("nosuch", "rest_api").is_none());
}

#[test]
fn all_actions_is_sorted_and_unique() {
    let actions = catalog::all_actions();
    let total: usize = ALL.iter().map(|entry| (entry.actions)().len()).sum();
    assert_eq!(actions.len(), total);
    assert!(actions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn summaries_describe_each_module() {
    let summaries = catalog::summaries();
    assert_eq!(summaries.len(), ALL.len());

    let sqs = summaries
        .iter()
        .find(|summary| summary.prefix == "sqs")
        .unwrap();
    assert_eq!(
        serde_json::to_value(sqs).unwrap(),
        json!({
            "prefix": "sqs",
            "title": "Amazon SQS",
            "action_count": 18,
            "resource_types": ["queue"],
        })
    );
}
