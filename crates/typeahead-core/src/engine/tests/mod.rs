mod list;
mod property;

use crate::engine::Suggestion;

/// Flattened display texts, groups rendered as `label[children]`.
fn texts(results: &[Suggestion]) -> Vec<String> {
    results
        .iter()
        .map(|entry| match entry {
            Suggestion::Record(record) => record.text.clone(),
            Suggestion::Group(group) => {
                format!("{}[{}]", group.text, texts(&group.children).join(","))
            }
        })
        .collect()
}
