use serde::Serialize;

/// Validity of a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Validity {
    /// Not evaluated since the last edit or reset.
    #[default]
    Unvalidated,
    /// Every rule passed.
    Valid,
    /// A rule failed; holds the first failure's message.
    Invalid(String),
}

impl Validity {
    /// Check if the field passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Get the error message, if invalid.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid(message) => Some(message),
            _ => None,
        }
    }
}

/// Derived state of a field after its latest validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Trimmed value the validity was computed from.
    pub value: String,
    /// Outcome of the latest validation.
    pub validity: Validity,
}

/// Per-field states of the whole form, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    fields: Vec<(String, FieldState)>,
}

impl FormSnapshot {
    pub(crate) fn new(fields: Vec<(String, FieldState)>) -> Self {
        Self { fields }
    }

    /// True only if every field was evaluated and passed.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, state)| state.validity.is_valid())
    }

    /// Look up a field's state.
    pub fn get(&self, key: &str) -> Option<&FieldState> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, state)| state)
    }

    /// Iterate over `(key, state)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldState)> {
        self.fields.iter().map(|(k, state)| (k.as_str(), state))
    }

    /// Keys of fields that failed validation.
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, state)| matches!(state.validity, Validity::Invalid(_)))
            .map(|(k, _)| k.as_str())
            .collect()
    }
}

/// Trimmed field values handed to the submission transport.
///
/// Serializes as a JSON object with fields in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: Vec<(String, String)>,
}

impl FormValues {
    pub(crate) fn new(values: Vec<(String, String)>) -> Self {
        Self { values }
    }

    /// Value of a field.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(key, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for FormValues {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in &self.values {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
