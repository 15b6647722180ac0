//! Comparable values
//!
//! Anything a table cell can hold: text, a number, or nothing at all. Every
//! value has a textual form; missing values read as the empty string.

use std::borrow::Cow;

/// An input to the comparator.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// No value (an absent cell). Reads as `""`.
    Missing,
    Text(Cow<'a, str>),
    Integer(i128),
    Float(f64),
}

impl Value<'_> {
    /// Textual form of the value, before normalization.
    ///
    /// Floats print the way a script runtime prints numbers: integral values
    /// without a fractional part, `NaN` and `Infinity` spelled out.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Value::Missing => Cow::Borrowed(""),
            Value::Text(text) => Cow::Borrowed(text.as_ref()),
            Value::Integer(n) => Cow::Owned(n.to_string()),
            Value::Float(f) => Cow::Owned(float_text(*f)),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

fn float_text(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        let text = if f > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if f == 0.0 {
        // -0 prints as 0
        "0".to_string()
    } else {
        f.to_string()
    }
}

/// Lower-cased textual form of a value. Never fails; missing values give `""`.
pub fn normalize(value: &Value<'_>) -> String {
    value.to_text().to_lowercase()
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(text: &'a str) -> Self {
        Value::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(text: &'a String) -> Self {
        Value::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Value<'static> {
    fn from(text: String) -> Self {
        Value::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Value::Text(text)
    }
}

macro_rules! integer_values {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value<'static> {
                fn from(n: $ty) -> Self {
                    Value::Integer(i128::from(n))
                }
            }
        )*
    };
}

integer_values!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<f32> for Value<'static> {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value<'static> {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Missing, Into::into)
    }
}
