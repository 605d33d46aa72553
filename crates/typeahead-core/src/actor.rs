use std::collections::BTreeSet;

///
/// Actor
///
/// The principal a suggestion request runs on behalf of.
/// Records consult it in `Record::can_view`; the engine never inspects it.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Actor {
    id: Option<String>,
    roles: BTreeSet<String>,
}

impl Actor {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn member(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            roles: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.id.is_none()
    }

    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}
