use crate::fields::Field;
use crate::value::RawValue;
use crate::view::EnvView;
use serde::Serialize;

/// Typed result of reading one catalogue field.
///
/// Serializes untagged: absent scalar fields become `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(Option<String>),
    Integer(Option<i64>),
    Float(Option<f64>),
    List(Vec<RawValue>),
    Flag(bool),
}

impl FieldValue {
    /// `true` for an absent text, integer or float field.
    ///
    /// List and flag fields are never absent.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(
            self,
            FieldValue::Text(None) | FieldValue::Integer(None) | FieldValue::Float(None)
        )
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Option<i64>> for FieldValue {
    fn from(value: Option<i64>) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(value: Option<f64>) -> Self {
        FieldValue::Float(value)
    }
}

impl From<Vec<RawValue>> for FieldValue {
    fn from(value: Vec<RawValue>) -> Self {
        FieldValue::List(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Named, typed accessors over a server environment snapshot.
///
/// One accessor exists per [`Field`]; they are generated from the catalogue
/// in [`crate::fields`] and each delegates to the matching [`EnvView`]
/// getter with the field's canonical key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerEnvironment {
    view: EnvView,
}

impl ServerEnvironment {
    /// Capture a snapshot from any iterator of key/value pairs.
    #[must_use]
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<RawValue>,
    {
        Self::from_view(EnvView::new(entries))
    }

    #[must_use]
    pub fn from_view(view: EnvView) -> Self {
        Self { view }
    }

    /// Underlying read-only view, for raw and indexed access to any key.
    #[must_use]
    pub fn view(&self) -> &EnvView {
        &self.view
    }

    #[must_use]
    pub fn into_view(self) -> EnvView {
        self.view
    }

    /// Read any catalogue field through its named accessor.
    #[must_use]
    pub fn field(&self, field: Field) -> FieldValue {
        field.read(self)
    }

    /// Every catalogue field with its current value, in catalogue order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(Field, FieldValue)> {
        Field::ALL
            .iter()
            .map(|&field| (field, self.field(field)))
            .collect()
    }
}

impl From<EnvView> for ServerEnvironment {
    fn from(view: EnvView) -> Self {
        Self::from_view(view)
    }
}
