//! Cell values and column type tags.
//!
//! Every cell in a [`ListStore`](super::ListStore) holds a [`Value`], a
//! tagged variant over the five kinds of data a column can declare. Typed
//! access goes through [`ColumnValue`], which maps a Rust type onto its tag.

use std::fmt;

use super::pixbuf::Pixbuf;
use super::reference::Reference;

/// The kind of data a column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Text.
    String,
    /// 32-bit signed integers.
    Integer,
    /// `true` / `false`.
    Boolean,
    /// Opaque shared object references.
    Reference,
    /// Shared image buffers.
    Pixbuf,
}

impl ColumnType {
    /// Returns a lowercase name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Integer => "integer",
            ColumnType::Boolean => "boolean",
            ColumnType::Reference => "reference",
            ColumnType::Pixbuf => "pixbuf",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single cell's contents.
///
/// Reference and image cells start out empty (`None`); the primitive kinds
/// start at their zero value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text data.
    String(String),
    /// Integer data.
    Integer(i32),
    /// Boolean data.
    Boolean(bool),
    /// A shared object reference, compared by identity.
    Reference(Option<Reference>),
    /// A shared image buffer, compared by identity.
    Pixbuf(Option<Pixbuf>),
}

impl Value {
    /// Returns the value a freshly appended row holds for `column_type`.
    pub fn default_for(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::String => Value::String(String::new()),
            ColumnType::Integer => Value::Integer(0),
            ColumnType::Boolean => Value::Boolean(false),
            ColumnType::Reference => Value::Reference(None),
            ColumnType::Pixbuf => Value::Pixbuf(None),
        }
    }

    /// Returns the type tag of this value.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Value::String(_) => ColumnType::String,
            Value::Integer(_) => ColumnType::Integer,
            Value::Boolean(_) => ColumnType::Boolean,
            Value::Reference(_) => ColumnType::Reference,
            Value::Pixbuf(_) => ColumnType::Pixbuf,
        }
    }

    /// Attempts to get the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the value as an integer.
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to get the value as an object reference.
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Value::Reference(r) => r.as_ref(),
            _ => None,
        }
    }

    /// Attempts to get the value as an image buffer.
    pub fn as_pixbuf(&self) -> Option<&Pixbuf> {
        match self {
            Value::Pixbuf(p) => p.as_ref(),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Reference> for Value {
    fn from(r: Reference) -> Self {
        Value::Reference(Some(r))
    }
}

impl From<Pixbuf> for Value {
    fn from(p: Pixbuf) -> Self {
        Value::Pixbuf(Some(p))
    }
}

/// Rust types that can live in a typed [`DataColumn`](super::DataColumn).
///
/// `Output` is what a read returns: the value itself for the primitive kinds
/// and an `Option` for the shared kinds, whose cells may be empty.
pub trait ColumnValue: Sized + Send + Sync + 'static {
    /// The column tag this type maps to.
    const TYPE: ColumnType;

    /// What reading a cell of this type yields.
    type Output;

    /// Wraps the value in its cell variant.
    fn into_value(self) -> Value;

    /// Extracts a typed read result, or `None` if `value` has another tag.
    fn from_value(value: &Value) -> Option<Self::Output>;
}

impl ColumnValue for String {
    const TYPE: ColumnType = ColumnType::String;
    type Output = String;

    fn into_value(self) -> Value {
        Value::String(self)
    }

    fn from_value(value: &Value) -> Option<String> {
        value.as_str().map(str::to_string)
    }
}

impl ColumnValue for i32 {
    const TYPE: ColumnType = ColumnType::Integer;
    type Output = i32;

    fn into_value(self) -> Value {
        Value::Integer(self)
    }

    fn from_value(value: &Value) -> Option<i32> {
        value.as_integer()
    }
}

impl ColumnValue for bool {
    const TYPE: ColumnType = ColumnType::Boolean;
    type Output = bool;

    fn into_value(self) -> Value {
        Value::Boolean(self)
    }

    fn from_value(value: &Value) -> Option<bool> {
        value.as_bool()
    }
}

impl ColumnValue for Reference {
    const TYPE: ColumnType = ColumnType::Reference;
    type Output = Option<Reference>;

    fn into_value(self) -> Value {
        Value::Reference(Some(self))
    }

    fn from_value(value: &Value) -> Option<Option<Reference>> {
        match value {
            Value::Reference(r) => Some(r.clone()),
            _ => None,
        }
    }
}

impl ColumnValue for Pixbuf {
    const TYPE: ColumnType = ColumnType::Pixbuf;
    type Output = Option<Pixbuf>;

    fn into_value(self) -> Value {
        Value::Pixbuf(Some(self))
    }

    fn from_value(value: &Value) -> Option<Option<Pixbuf>> {
        match value {
            Value::Pixbuf(p) => Some(p.clone()),
            _ => None,
        }
    }
}
