use crate::model::field::SearchableFieldModel;

///
/// RecordModel
/// Static, per-type declaration of fields and searchable fields.
///

#[derive(Debug)]
pub struct RecordModel {
    /// Fully-qualified type path (for diagnostics).
    pub path: &'static str,
    /// Stable external name of the record type.
    pub record_name: &'static str,
    /// Every field the record type stores.
    pub fields: &'static [&'static str],
    /// Declared searchable fields, in declaration order.
    pub searchable_fields: &'static [SearchableFieldModel],
    /// Configured searchable-field allow-list, if the type sets one.
    pub custom_searchable_fields: Option<&'static [&'static str]>,
}

impl RecordModel {
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains(&name)
    }

    /// True when the allow-list exists and names `field` explicitly.
    #[must_use]
    pub fn lists_searchable_field(&self, field: &str) -> bool {
        self.custom_searchable_fields
            .is_some_and(|fields| fields.contains(&field))
    }
}

impl PartialEq for RecordModel {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for RecordModel {}
