//! Resource ARN templates and the wildcard substitution that renders them.

use crate::types::Arn;

/// The character emitted for any field left unset when rendering a template.
pub const WILDCARD: &str = "*";

/// One resource ARN template published for a service.
///
/// `template` is the format string from the authorization reference with
/// `{field}` placeholders; `fields` lists the placeholder names in template
/// order. Rendering is a pure, total function: any placeholder without a
/// supplied (non-empty) value becomes `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceTemplate {
    /// Symbolic resource-type name, unique within its service (e.g. `cluster`).
    pub name: &'static str,
    /// IAM service prefix the template belongs to (e.g. `redshift`).
    pub service: &'static str,
    /// ARN format string with `{field}` placeholders.
    pub template: &'static str,
    /// Placeholder names, in template order.
    pub fields: &'static [&'static str],
}

impl ResourceTemplate {
    /// Render the template with the supplied `(field, value)` pairs.
    ///
    /// Fields that are absent, or present with an empty value, render as `*`.
    /// Each placeholder resolves independently; literal text is preserved
    /// verbatim.
    pub fn render(&self, fields: &[(&str, &str)]) -> Arn {
        render(self.template, fields)
    }

    /// Render with every field left unset.
    pub fn render_wildcard(&self) -> Arn {
        self.render(&[])
    }
}

pub(crate) fn render(template: &str, fields: &[(&str, &str)]) -> Arn {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let (literal, tail) = rest.split_at(start);
        out.push_str(literal);
        match tail.find('}') {
            Some(end) => {
                out.push_str(lookup(fields, &tail[1..end]));
                rest = &tail[end + 1..];
            }
            None => {
                // Unbalanced brace; generated templates never contain one.
                out.push_str(tail);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    Arn::from_rendered(out)
}

fn lookup<'a>(fields: &[(&str, &'a str)], name: &str) -> &'a str {
    fields
        .iter()
        .find_map(|(field, value)| (*field == name && !value.is_empty()).then_some(*value))
        .unwrap_or(WILDCARD)
}

/// Declares the resource vocabulary of one service module: a typed builder
/// struct per resource type plus the module-level `TEMPLATES` table.
macro_rules! arn_resources {
    (
        service = $service:literal;
        $(
            $(#[$meta:meta])*
            $name:ident as $builder:ident { $($field:ident),+ $(,)? }
                => $template:literal
        );+ $(;)?
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $builder<'a> {
                $(pub $field: Option<&'a str>,)+
            }

            impl $builder<'_> {
                /// ARN format string this builder renders.
                pub const TEMPLATE: &'static str = $template;

                /// Render the ARN, substituting `*` for any unset or empty
                /// field.
                pub fn arn(&self) -> $crate::types::Arn {
                    $crate::types::template::render(
                        $template,
                        &[$((stringify!($field), self.$field.unwrap_or(""))),+],
                    )
                }
            }
        )+

        /// Resource ARN templates published for this service, in reference
        /// order.
        pub const TEMPLATES: &[$crate::types::ResourceTemplate] = &[
            $(
                $crate::types::ResourceTemplate {
                    name: stringify!($name),
                    service: $service,
                    template: $template,
                    fields: &[$(stringify!($field)),+],
                },
            )+
        ];
    };
}
pub(crate) use arn_resources;

#[cfg(test)]
mod tests {
    use super::*;

    const CLUSTER: ResourceTemplate = ResourceTemplate {
        name: "cluster",
        service: "redshift",
        template: "arn:{partition}:redshift:{region}:{account}:cluster:{cluster_name}",
        fields: &["partition", "region", "account", "cluster_name"],
    };

    #[test]
    fn render_defaults_every_placeholder_to_wildcard() {
        assert_eq!(
            CLUSTER.render_wildcard().as_str(),
            "arn:*:redshift:*:*:cluster:*"
        );
    }

    #[test]
    fn render_substitutes_supplied_fields_verbatim() {
        let arn = CLUSTER.render(&[("region", "eu-north-1"), ("cluster_name", "etl")]);
        assert_eq!(arn.as_str(), "arn:*:redshift:eu-north-1:*:cluster:etl");
    }

    #[test]
    fn render_treats_empty_values_as_unset() {
        let arn = CLUSTER.render(&[("region", "")]);
        assert_eq!(arn.as_str(), "arn:*:redshift:*:*:cluster:*");
    }

    #[test]
    fn render_ignores_fields_the_template_does_not_name() {
        let arn = CLUSTER.render(&[("stage_name", "prod")]);
        assert_eq!(arn.as_str(), "arn:*:redshift:*:*:cluster:*");
    }

    #[test]
    fn render_is_pure() {
        let fields = [("partition", "aws"), ("cluster_name", "etl")];
        assert_eq!(CLUSTER.render(&fields), CLUSTER.render(&fields));
    }
}
