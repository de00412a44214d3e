//! Tag filter construction for EC2 directory queries.

use std::collections::BTreeMap;

use aws_sdk_ec2::types::Filter;

/// Expand a tag-name → tag-value mapping into one exact-match filter
/// clause per entry.
///
/// The mapping is a BTreeMap so clause order is deterministic across runs.
pub fn tag_filters(tags: &BTreeMap<String, String>) -> Vec<Filter> {
    tags.iter()
        .map(|(name, value)| {
            Filter::builder()
                .name(format!("tag:{name}"))
                .values(value.as_str())
                .build()
        })
        .collect()
}
