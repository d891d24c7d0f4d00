use crate::enums::Code;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// Types that a typed column can hold, read from and written to text
pub trait Text: Sized {
    /// Reads the value from trimmed, non blank text. `None` if the text is not a valid value
    fn from_text(s: &str) -> Option<Self>;

    /// The text written in the files
    fn to_text(&self) -> String;
}

impl<C: Code> Text for C {
    fn from_text(s: &str) -> Option<Self> {
        s.parse::<i32>().ok().map(C::from_code)
    }

    fn to_text(&self) -> String {
        self.code().to_string()
    }
}

impl Text for u32 {
    fn from_text(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl Text for f64 {
    // NaN and infinities are not coordinates nor distances
    fn from_text(s: &str) -> Option<Self> {
        s.parse::<f64>().ok().filter(|f| f.is_finite())
    }

    fn to_text(&self) -> String {
        self.to_string()
    }
}

/// The content of a typed column
///
/// Text that cannot be read as the type of the column is kept untouched as [Value::Invalid],
/// so that the record can be exported as it was read and the problem reported by [crate::Feed::validate].
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    /// A well formed value
    Valid(T),
    /// The original text, that is not a valid value
    Invalid(String),
}

impl<T: Text> Value<T> {
    /// Reads a value from its text. Blank text is unset (`None`)
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(match T::from_text(trimmed) {
                Some(v) => Value::Valid(v),
                None => Value::Invalid(text.to_owned()),
            })
        }
    }

    /// The text written in the files: the canonical text of a valid value, the original text otherwise
    pub fn text(&self) -> String {
        match self {
            Value::Valid(v) => v.to_text(),
            Value::Invalid(s) => s.clone(),
        }
    }
}

impl<T> Value<T> {
    /// The value, if well formed
    pub fn as_valid(&self) -> Option<&T> {
        match self {
            Value::Valid(v) => Some(v),
            Value::Invalid(_) => None,
        }
    }

    /// The original text, if it could not be read
    pub fn invalid(&self) -> Option<&str> {
        match self {
            Value::Valid(_) => None,
            Value::Invalid(s) => Some(s),
        }
    }
}

impl<T> From<T> for Value<T> {
    fn from(v: T) -> Self {
        Value::Valid(v)
    }
}

impl<T: Text> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl<T: Text> Serialize for Value<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.text())
    }
}

/// Shortcut to the well formed content of an optional typed column
pub trait ValueField<T> {
    /// The value if set and well formed
    fn valid(&self) -> Option<T>;
}

impl<T: Copy> ValueField<T> for Option<Value<T>> {
    fn valid(&self) -> Option<T> {
        self.as_ref().and_then(Value::as_valid).copied()
    }
}

pub(crate) fn de_value<'de, D, T>(deserializer: D) -> Result<Option<Value<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Text,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(|s| Value::parse(&s)))
}

#[test]
fn read_values() {
    assert_eq!(Some(Value::Valid(48.79)), Value::<f64>::parse(" 48.79 "));
    assert_eq!(
        Some(Value::Invalid("48,79".to_owned())),
        Value::<f64>::parse("48,79")
    );
    assert_eq!(None, Value::<u32>::parse("  "));
    assert_eq!(Some(Value::Invalid("-1".to_owned())), Value::<u32>::parse("-1"));
    assert_eq!(Some(Value::Invalid("NaN".to_owned())), Value::<f64>::parse("NaN"));
    assert_eq!(Some(Value::Invalid("inf".to_owned())), Value::<f64>::parse("inf"));
}

#[test]
fn invalid_text_is_kept() {
    let v = Value::<u32>::parse(" 12a").unwrap();
    assert_eq!(Some(" 12a"), v.invalid());
    assert_eq!(" 12a", v.text());
    assert_eq!("7", Value::Valid(7u32).to_string());
}
