use crate::{
    actor::Actor,
    model::{RecordModel, SearchableFieldModel},
    store::MemoryStore,
    traits::{FieldValues, Record, RecordKind},
    value::Value,
};

///
/// Fruit
///
/// Test-only record type with a hidden flag consulted by `can_view`.
///

#[derive(Clone, Debug)]
pub struct Fruit {
    pub id: u64,
    pub title: &'static str,
    pub colour: Option<&'static str>,
    pub hidden: bool,
}

pub static FRUIT_MODEL: RecordModel = RecordModel {
    path: "test_fixtures::Fruit",
    record_name: "Fruit",
    fields: &["ID", "Title", "Colour"],
    searchable_fields: &[],
    custom_searchable_fields: None,
};

impl RecordKind for Fruit {
    const MODEL: &'static RecordModel = &FRUIT_MODEL;
}

impl FieldValues for Fruit {
    fn get_value(&self, field: &str) -> Option<Value> {
        match field {
            "ID" => Some(Value::Uint(self.id)),
            "Title" => Some(Value::from(self.title)),
            "Colour" => Some(Value::from(self.colour)),
            _ => None,
        }
    }
}

impl Record for Fruit {
    fn can_view(&self, actor: &Actor) -> bool {
        !self.hidden || actor.has_role("admin")
    }
}

pub const fn fruit(id: u64, title: &'static str, colour: Option<&'static str>) -> Fruit {
    Fruit {
        id,
        title,
        colour,
        hidden: false,
    }
}

/// Store with deliberately unsorted titles.
pub fn fruit_store() -> MemoryStore<Fruit> {
    MemoryStore::new(vec![
        fruit(1, "Banana", Some("yellow")),
        fruit(2, "apricot", Some("orange")),
        fruit(3, "Apple", Some("red")),
        fruit(4, "Cherry", Some("red")),
        fruit(5, "Grape", None),
        Fruit {
            id: 6,
            title: "Apple Secret",
            colour: Some("green"),
            hidden: true,
        },
    ])
}

///
/// Product
///
/// Test-only record type with declared searchable fields.
///

pub static PRODUCT_MODEL: RecordModel = RecordModel {
    path: "test_fixtures::Product",
    record_name: "Product",
    fields: &["ID", "Name", "Code", "Summary"],
    searchable_fields: &[
        SearchableFieldModel::with_filter("Code", "EndsWithFilter"),
        SearchableFieldModel::with_filter("Name", "PartialMatchFilter"),
        SearchableFieldModel::new("Summary"),
    ],
    custom_searchable_fields: Some(&["Name", "Summary"]),
};

pub static NAMED_MODEL: RecordModel = RecordModel {
    path: "test_fixtures::Named",
    record_name: "Named",
    fields: &["ID", "Name"],
    searchable_fields: &[],
    custom_searchable_fields: None,
};

pub static BARE_MODEL: RecordModel = RecordModel {
    path: "test_fixtures::Bare",
    record_name: "Bare",
    fields: &["ID"],
    searchable_fields: &[],
    custom_searchable_fields: None,
};
