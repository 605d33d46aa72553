use crate::{model::FilterKind, value::Value};

///
/// Predicate AST
///
/// Pure, schema-agnostic representation of a store filter. Field names are
/// checked against a record model by `validate` before evaluation.
///

///
/// FieldFilter
///

#[derive(Clone, Debug, PartialEq)]
pub struct FieldFilter {
    pub field: String,
    pub kind: FilterKind,
    pub value: Value,
}

impl FieldFilter {
    #[must_use]
    pub fn new(field: impl Into<String>, kind: FilterKind, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            kind,
            value: value.into(),
        }
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    And(Vec<Self>),
    Or(Vec<Self>),
    Filter(FieldFilter),
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    /// Any-of filter: a row matches when at least one field filter matches.
    #[must_use]
    pub fn any_of(filters: impl IntoIterator<Item = FieldFilter>) -> Self {
        Self::Or(filters.into_iter().map(Self::Filter).collect())
    }

    /// Visit every field filter in the tree.
    pub fn for_each_filter(&self, f: &mut impl FnMut(&FieldFilter)) {
        match self {
            Self::And(children) | Self::Or(children) => {
                for child in children {
                    child.for_each_filter(f);
                }
            }
            Self::Filter(filter) => f(filter),
        }
    }
}
