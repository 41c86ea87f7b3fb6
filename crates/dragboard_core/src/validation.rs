//! Field validation predicate used by the project form.
//!
//! # Invariants
//! - Length bounds apply only to text values, numeric bounds only to numbers.
//! - Absent constraints always pass.

/// Value under validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

/// One field plus the constraints it must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl Validatable {
    pub fn text(value: impl Into<String>) -> Self {
        Self::with_value(FieldValue::Text(value.into()))
    }

    pub fn number(value: i64) -> Self {
        Self::with_value(FieldValue::Number(value))
    }

    fn with_value(value: FieldValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn range(mut self, min: i64, max: i64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

/// Returns whether `input` satisfies every constraint it carries.
///
/// `required` rejects text that is empty after trimming. Numbers always
/// count as present.
pub fn validate(input: &Validatable) -> bool {
    match &input.value {
        FieldValue::Text(text) => {
            let len = text.chars().count();
            !(input.required && text.trim().is_empty())
                && input.min_length.map_or(true, |min| len >= min)
                && input.max_length.map_or(true, |max| len <= max)
        }
        FieldValue::Number(number) => {
            input.min.map_or(true, |min| *number >= min)
                && input.max.map_or(true, |max| *number <= max)
        }
    }
}
