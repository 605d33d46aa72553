use crate::{actor::Actor, model::RecordModel, value::Value};
use std::fmt::Debug;

// ============================================================================
// RECORD TYPES
// ============================================================================
//
// These traits describe *what a record type declares*, independently of
// where its rows live.
//

///
/// RecordKind
///
/// Binds a concrete record type to its static model.
///

pub trait RecordKind {
    const MODEL: &'static RecordModel;
}

// ============================================================================
// RECORD RUNTIME
// ============================================================================

///
/// FieldValues
///
/// Read access to a record's fields by name. `None` means the record does
/// not carry the field at all.
///

pub trait FieldValues {
    fn get_value(&self, field: &str) -> Option<Value>;
}

///
/// Record
///
/// A row returned by a queryable store.
///

pub trait Record: FieldValues + Debug {
    /// Whether `actor` may see this record in a suggestion list.
    fn can_view(&self, _actor: &Actor) -> bool {
        true
    }
}
