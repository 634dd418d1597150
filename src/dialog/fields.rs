//! Form field descriptions and submitted values.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Control kind plus the data only that kind understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text { placeholder: Option<String> },
    Password { placeholder: Option<String> },
    TextArea { placeholder: Option<String> },
    Select { options: Vec<SelectOption> },
}

impl FieldKind {
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            FieldKind::Text { placeholder }
            | FieldKind::Password { placeholder }
            | FieldKind::TextArea { placeholder } => placeholder.as_deref(),
            FieldKind::Select { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
}

impl FieldSpec {
    fn with_kind(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            value: String::new(),
            required: false,
        }
    }

    pub fn text(name: &str, label: &str) -> Self {
        Self::with_kind(name, label, FieldKind::Text { placeholder: None })
    }

    pub fn password(name: &str, label: &str) -> Self {
        Self::with_kind(name, label, FieldKind::Password { placeholder: None })
    }

    pub fn textarea(name: &str, label: &str) -> Self {
        Self::with_kind(name, label, FieldKind::TextArea { placeholder: None })
    }

    pub fn select(name: &str, label: &str, options: Vec<SelectOption>) -> Self {
        Self::with_kind(name, label, FieldKind::Select { options })
    }

    /// Set the placeholder.  Selects have none, so this is a no-op there.
    pub fn placeholder(mut self, text: &str) -> Self {
        match &mut self.kind {
            FieldKind::Text { placeholder }
            | FieldKind::Password { placeholder }
            | FieldKind::TextArea { placeholder } => *placeholder = Some(text.to_string()),
            FieldKind::Select { .. } => {}
        }
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Label shown above the control; falls back to the machine name.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSpec {
    pub title: String,
    pub fields: Vec<FieldSpec>,
    pub submit_label: String,
}

impl FormSpec {
    pub fn new(title: &str, fields: Vec<FieldSpec>, submit_label: &str) -> Self {
        Self {
            title: title.to_string(),
            fields,
            submit_label: submit_label.to_string(),
        }
    }

    /// Build the submitted mapping by reading each field's current value
    /// through `read`.  Exactly one entry per field; a control `read` cannot
    /// find contributes an empty string.
    pub fn collect<F>(&self, mut read: F) -> FormValues
    where
        F: FnMut(&FieldSpec) -> Option<String>,
    {
        let values = self
            .fields
            .iter()
            .map(|field| (field.name.clone(), read(field).unwrap_or_default()))
            .collect();
        FormValues { values }
    }

    /// First required field left blank in `values`, if any.
    pub fn first_missing_required(&self, values: &FormValues) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|field| field.required && values.get(&field.name).trim().is_empty())
    }
}

/// Field name to raw string value, exactly as typed.  No coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    /// The value for `name`, or `""` if the form had no such field.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Trimmed value, `None` when blank.
    pub fn optional(&self, name: &str) -> Option<String> {
        let v = self.get(name).trim();
        (!v.is_empty()).then(|| v.to_string())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
