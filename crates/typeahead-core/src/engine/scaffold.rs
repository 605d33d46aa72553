use crate::model::{FieldSpec, FilterKind, RecordModel};

/// Fallback search fields, tried in order when a type declares none.
const FALLBACK_FIELDS: [&str; 2] = ["Title", "Name"];

///
/// scaffold_search_fields
///
/// Derive the ordered search scaffold for one record type.
///
/// - an explicit override wins verbatim
/// - a declared filter becomes `StartsWith` unless the type's allow-list
///   names the field, in which case the declared filter is kept
/// - no declarations fall back to `Title`, then `Name`, then nothing
///
/// The result depends only on the static model, so callers may cache it
/// per record type.
///
#[must_use]
pub fn scaffold_search_fields(
    model: &RecordModel,
    override_fields: Option<&[FieldSpec]>,
) -> Vec<FieldSpec> {
    if let Some(fields) = override_fields {
        return fields.to_vec();
    }

    if !model.searchable_fields.is_empty() {
        return model
            .searchable_fields
            .iter()
            .map(|declared| match declared.filter {
                Some(_) if !model.lists_searchable_field(declared.name) => {
                    FieldSpec::with_filter(declared.name, FilterKind::StartsWith)
                }
                Some(filter) => FieldSpec::with_filter(declared.name, FilterKind::parse(filter)),
                None => FieldSpec::new(declared.name),
            })
            .collect();
    }

    FALLBACK_FIELDS
        .iter()
        .find(|name| model.has_field(name))
        .map(|name| vec![FieldSpec::new(*name)])
        .unwrap_or_default()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{BARE_MODEL, FRUIT_MODEL, NAMED_MODEL, PRODUCT_MODEL};

    #[test]
    fn override_is_returned_verbatim() {
        let fields = [FieldSpec::parse("Code:ExactMatch"), FieldSpec::new("Name")];

        assert_eq!(
            scaffold_search_fields(&PRODUCT_MODEL, Some(&fields)),
            fields.to_vec()
        );
    }

    #[test]
    fn declared_filters_respect_the_allow_list() {
        assert_eq!(
            scaffold_search_fields(&PRODUCT_MODEL, None),
            vec![
                // declared EndsWith, but not on the allow-list
                FieldSpec::with_filter("Code", FilterKind::StartsWith),
                // allow-listed, declared filter kept with its suffix stripped
                FieldSpec::with_filter("Name", FilterKind::PartialMatch),
                FieldSpec::new("Summary"),
            ]
        );
    }

    #[test]
    fn falls_back_to_title_then_name_then_nothing() {
        assert_eq!(
            scaffold_search_fields(&FRUIT_MODEL, None),
            vec![FieldSpec::new("Title")]
        );
        assert_eq!(
            scaffold_search_fields(&NAMED_MODEL, None),
            vec![FieldSpec::new("Name")]
        );
        assert!(scaffold_search_fields(&BARE_MODEL, None).is_empty());
    }
}
