//! Properties every resource template must satisfy, checked across the whole
//! catalog.

use crate::services::ALL;
use crate::types::{ResourceTemplate, WILDCARD};

fn placeholder(field: &str) -> String {
    format!("{{{field}}}")
}

/// The template with every placeholder replaced by `*`.
fn wildcard_expansion(template: &ResourceTemplate) -> String {
    let mut expected = template.template.to_string();
    for field in template.fields {
        expected = expected.replace(&placeholder(field), WILDCARD);
    }
    expected
}

#[test]
fn every_field_list_matches_its_placeholders() {
    for entry in ALL {
        for template in entry.templates {
            for field in template.fields {
                assert!(
                    template.template.contains(&placeholder(field)),
                    "{}/{}: field '{}' missing from template",
                    entry.prefix,
                    template.name,
                    field
                );
            }
            assert_eq!(
                template.template.matches('{').count(),
                template.fields.len(),
                "{}/{}: placeholder count differs from field count",
                entry.prefix,
                template.name
            );
        }
    }
}

#[test]
fn every_template_names_its_service() {
    for entry in ALL {
        for template in entry.templates {
            assert_eq!(template.service, entry.prefix);
            assert!(
                template
                    .template
                    .starts_with(&format!("arn:{{partition}}:{}:", template.service)),
                "{}/{}: unexpected template head",
                entry.prefix,
                template.name
            );
        }
    }
}

#[test]
fn rendering_with_no_fields_yields_all_wildcards() {
    for entry in ALL {
        for template in entry.templates {
            let arn = template.render_wildcard();
            assert_eq!(
                arn.as_str(),
                wildcard_expansion(template),
                "{}/{}",
                entry.prefix,
                template.name
            );
            assert!(!arn.as_str().contains('{'));
            assert_eq!(arn.partition(), WILDCARD);
        }
    }
}

#[test]
fn rendering_substitutes_each_field_independently() {
    for entry in ALL {
        for template in entry.templates {
            for field in template.fields {
                let value = format!("value-{field}");
                let arn = template.render(&[(field, &value)]);

                let mut expected = template.template.replace(&placeholder(field), &value);
                for other in template.fields {
                    expected = expected.replace(&placeholder(other), WILDCARD);
                }
                assert_eq!(
                    arn.as_str(),
                    expected,
                    "{}/{}: field '{}'",
                    entry.prefix,
                    template.name,
                    field
                );
            }
        }
    }
}

#[test]
fn rendering_with_every_field_leaves_no_wildcard() {
    for entry in ALL {
        for template in entry.templates {
            let owned: Vec<(&str, String)> = template
                .fields
                .iter()
                .map(|field| (*field, format!("v-{field}")))
                .collect();
            let pairs: Vec<(&str, &str)> = owned
                .iter()
                .map(|(field, value)| (*field, value.as_str()))
                .collect();

            let arn = template.render(&pairs);
            assert!(
                !arn.as_str().contains('*'),
                "{}/{}: {}",
                entry.prefix,
                template.name,
                arn
            );
            for (_, value) in &owned {
                assert!(arn.as_str().contains(value.as_str()));
            }
        }
    }
}

#[test]
fn rendering_is_pure() {
    for entry in ALL {
        for template in entry.templates {
            let fields = [("region", "eu-central-1"), ("account", "123456789012")];
            assert_eq!(template.render(&fields), template.render(&fields));
            assert_eq!(template.render_wildcard(), template.render_wildcard());
        }
    }
}

#[test]
fn resource_names_are_unique_within_a_service() {
    for entry in ALL {
        let mut names: Vec<&str> = entry.templates.iter().map(|t| t.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), entry.templates.len(), "{}", entry.prefix);
    }
}
