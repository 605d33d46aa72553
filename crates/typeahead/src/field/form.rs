use typeahead_core::model::RecordModel;

///
/// FormContext
///
/// The form a field is attached to. Supplies the action link the field's
/// endpoints hang off and, optionally, the record type being edited.
///

#[derive(Clone, Debug)]
pub struct FormContext {
    name: String,
    link: String,
    record_model: Option<&'static RecordModel>,
}

impl FormContext {
    #[must_use]
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
            record_model: None,
        }
    }

    /// Record type of the record loaded into the form.
    #[must_use]
    pub const fn with_record_model(mut self, model: &'static RecordModel) -> Self {
        self.record_model = Some(model);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn record_model(&self) -> Option<&'static RecordModel> {
        self.record_model
    }

    /// Link to a field action, e.g. `/admin/EditForm/field/Fruit/suggestion`.
    #[must_use]
    pub fn field_link(&self, field: &str, action: &str) -> String {
        format!("{}/field/{field}/{action}", self.link.trim_end_matches('/'))
    }
}

///
/// TESTS
///
