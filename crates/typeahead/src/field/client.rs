use serde::{Deserialize, Serialize};

/// Placeholder the client replaces with the typed query.
pub const QUERY_TEMPLATE: &str = "?q=%QUERY";

///
/// ClientOptions
///
/// Settings handed to the browser widget as `data-*` attributes. Rendering
/// them into markup is the caller's job.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ClientOptions {
    #[serde(rename = "data-suggest-url", skip_serializing_if = "Option::is_none")]
    pub suggest_url: Option<String>,
    #[serde(rename = "data-prefetch-url", skip_serializing_if = "Option::is_none")]
    pub prefetch_url: Option<String>,
    #[serde(rename = "data-min-length")]
    pub min_length: u32,
    #[serde(rename = "data-require-selection")]
    pub require_selection: bool,
    #[serde(rename = "data-name")]
    pub name: String,
    #[serde(rename = "data-templates.empty")]
    pub empty_template: String,
    pub autocomplete: String,
    /// JSON-encoded unfiltered suggestions, set only outside a form.
    #[serde(rename = "data-local", skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
}

impl ClientOptions {
    /// Attribute name/value pairs in render order. Absent URLs and local data
    /// are omitted.
    #[must_use]
    pub fn data_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::with_capacity(8);

        if let Some(url) = &self.suggest_url {
            attrs.push(("data-suggest-url", url.clone()));
        }
        if let Some(url) = &self.prefetch_url {
            attrs.push(("data-prefetch-url", url.clone()));
        }
        attrs.push(("data-min-length", self.min_length.to_string()));
        attrs.push(("data-require-selection", self.require_selection.to_string()));
        attrs.push(("data-name", self.name.clone()));
        attrs.push(("data-templates.empty", self.empty_template.clone()));
        attrs.push(("autocomplete", self.autocomplete.clone()));
        if let Some(local) = &self.local {
            attrs.push(("data-local", local.clone()));
        }

        attrs
    }
}
