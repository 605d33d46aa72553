
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, cmp::Ordering, fmt};

///
/// TextMode
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextMode {
    Cs, // case-sensitive
    Ci, // case-insensitive
}

///
/// Value
///
/// Scalar field value shared by inline candidates, backing records, and the
/// wire payload. Serializes as the bare JSON scalar.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
}

impl Value {
    ///
    /// TYPES
    ///

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    ///
    /// CONVERSION
    ///

    /// Loose string coercion used for display text.
    ///
    /// `Null` and `false` become the empty string, `true` becomes `"1"`, and
    /// numbers use their shortest decimal form.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Null | Self::Bool(false) => String::new(),
            Self::Bool(true) => "1".to_string(),
            Self::Int(v) => v.to_string(),
            Self::Uint(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    /// Loose equality: identical variants compare directly, mixed variants
    /// compare through their text coercion (`1 == "1"`).
    #[must_use]
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Uint(b)) | (Self::Uint(b), Self::Int(a)) => {
                u64::try_from(*a).is_ok_and(|a| a == *b)
            }
            (a, b) if std::mem::discriminant(a) == std::mem::discriminant(b) => a == b,
            (a, b) => a.to_text() == b.to_text(),
        }
    }

    ///
    /// TEXT
    ///

    fn fold_ci(s: &str) -> Cow<'_, str> {
        if s.is_ascii() {
            return Cow::Owned(s.to_ascii_lowercase());
        }

        Cow::Owned(s.to_lowercase())
    }

    fn text_with_mode(s: &str, mode: TextMode) -> Cow<'_, str> {
        match mode {
            TextMode::Cs => Cow::Borrowed(s),
            TextMode::Ci => Self::fold_ci(s),
        }
    }

    // Text operators coerce both sides, so numeric fields can be matched the
    // way a text column would be.
    fn text_op(&self, other: &Self, mode: TextMode, f: impl Fn(&str, &str) -> bool) -> bool {
        let (a, b) = (self.to_text(), other.to_text());
        let a = Self::text_with_mode(&a, mode);
        let b = Self::text_with_mode(&b, mode);

        f(&a, &b)
    }

    #[must_use]
    pub fn text_eq(&self, other: &Self, mode: TextMode) -> bool {
        self.text_op(other, mode, |a, b| a == b)
    }

    #[must_use]
    /// Check whether `needle` is a substring of `self` under the given text mode.
    pub fn text_contains(&self, needle: &Self, mode: TextMode) -> bool {
        self.text_op(needle, mode, |a, b| a.contains(b))
    }

    #[must_use]
    /// Check whether `self` starts with `needle` under the given text mode.
    pub fn text_starts_with(&self, needle: &Self, mode: TextMode) -> bool {
        self.text_op(needle, mode, |a, b| a.starts_with(b))
    }

    #[must_use]
    /// Check whether `self` ends with `needle` under the given text mode.
    pub fn text_ends_with(&self, needle: &Self, mode: TextMode) -> bool {
        self.text_op(needle, mode, |a, b| a.ends_with(b))
    }

    ///
    /// ORDERING
    ///

    const fn canonical_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Uint(_) | Self::Float(_) => 2,
            Self::Text(_) => 3,
        }
    }

    /// Canonical total ordering used by `ORDER BY`.
    ///
    /// Nulls sort first, numbers compare numerically across variants, and
    /// text compares case-insensitively with a case-sensitive tiebreak.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Uint(a), Self::Uint(b)) => a.cmp(b),
            (Self::Int(a), Self::Uint(b)) => i128::from(*a).cmp(&i128::from(*b)),
            (Self::Uint(a), Self::Int(b)) => i128::from(*a).cmp(&i128::from(*b)),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Float(a), Self::Int(b)) => a.total_cmp(&(*b as f64)),
            (Self::Float(a), Self::Uint(b)) => a.total_cmp(&(*b as f64)),
            (Self::Int(a), Self::Float(b)) => (*a as f64).total_cmp(b),
            (Self::Uint(a), Self::Float(b)) => (*a as f64).total_cmp(b),
            (Self::Text(a), Self::Text(b)) => Self::fold_ci(a)
                .cmp(&Self::fold_ci(b))
                .then_with(|| a.cmp(b)),
            (a, b) => a.canonical_rank().cmp(&b.canonical_rank()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Uint(u64::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Uint(value as u64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
