use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::iter::FromIterator;

/// One line of a GTFS file, as an ordered list of column names and values
///
/// A value is either set (possibly to the empty string) or unset (`None`).
/// Unset and empty are two different states: an exported [crate::Route] without
/// description has `route_desc = None`, one with `desc: Some("".into())` has `route_desc = Some("")`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, Option<String>)>,
}

impl Row {
    /// An empty row, without any column
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Row {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Sets the column to the given value and returns the row. Can be chained
    pub fn with<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.set(name, Some(value.into()));
        self
    }

    /// Sets (or unsets with `None`) the value of a column
    ///
    /// If the column already exists, its value is replaced in place, otherwise the column is appended
    pub fn set<N: Into<String>>(&mut self, name: N, value: Option<String>) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name, value)),
        }
    }

    /// The value of the column, `None` if the column is absent or unset
    pub fn get(&self, name: &str) -> Option<&str> {
        self.value(name).flatten()
    }

    /// The raw state of the column: `None` if absent, `Some(None)` if unset
    pub fn value(&self, name: &str) -> Option<Option<&str>> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref())
    }

    /// Is the column present in the row (set or not)
    pub fn contains(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// Is the column present and set (possibly to an empty string)
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Column names, in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Iterates over the `(column, value)` pairs, in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_deref()))
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Does the row have no column at all
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn push(&mut self, name: &str, value: Option<String>) {
        self.fields.push((name.to_owned(), value));
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (n, v) in iter {
            row.set(n, Some(v.into()));
        }
        row
    }
}

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct RowVisitor;

impl<'de> Visitor<'de> for RowVisitor {
    type Value = Row;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of column names to string or null values")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Row, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut row = Row::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, value)) = access.next_entry::<String, Option<String>>()? {
            row.set(name, value);
        }
        Ok(row)
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D>(deserializer: D) -> Result<Row, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RowVisitor)
    }
}
