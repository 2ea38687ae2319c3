//! Runtime prop values passed to renderers and shipped to the client.
//!
//! [`PropValue`] covers more shapes than JSON so that values such as dates,
//! regular expressions and `undefined` survive the trip to the browser.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use url::Url;

/// A single prop value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
	/// JavaScript `undefined`.
	Undefined,
	/// `null`.
	Null,
	/// A boolean.
	Bool(bool),
	/// A double-precision number, including `NaN`, the infinities and `-0`.
	Number(f64),
	/// An arbitrary-precision integer on the client (`123n`).
	BigInt(i128),
	/// A string.
	String(String),
	/// An ordered list.
	Array(Vec<PropValue>),
	/// A plain object, keys kept in insertion order.
	Object(IndexMap<String, PropValue>),
	/// A point in time.
	Date(DateTime<Utc>),
	/// A regular expression.
	RegExp {
		/// Pattern source.
		source: String,
		/// Flags such as `gi`.
		flags: String,
	},
	/// A `Map` with arbitrary keys.
	Map(Vec<(PropValue, PropValue)>),
	/// A `Set`.
	Set(Vec<PropValue>),
	/// A `URL`.
	Url(Url),
}

impl PropValue {
	/// Creates a regular expression value.
	pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Self {
		Self::RegExp {
			source: source.into(),
			flags: flags.into(),
		}
	}

	/// Returns the string slice if this is a string.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the number if this is a number.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Number(n) => Some(*n),
			_ => None,
		}
	}

	/// Returns the boolean if this is a boolean.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// `true` for `null` and `undefined`.
	pub fn is_nullish(&self) -> bool {
		matches!(self, Self::Null | Self::Undefined)
	}
}

impl From<&str> for PropValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<String> for PropValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<bool> for PropValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

macro_rules! impl_from_number {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for PropValue {
				fn from(value: $ty) -> Self {
					Self::Number(value as f64)
				}
			}
		)*
	};
}

// Integers beyond 2^53 lose precision here, as they would in a JS number.
// Use `PropValue::BigInt` explicitly to ship them exactly.
impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl From<DateTime<Utc>> for PropValue {
	fn from(value: DateTime<Utc>) -> Self {
		Self::Date(value)
	}
}

impl From<Url> for PropValue {
	fn from(value: Url) -> Self {
		Self::Url(value)
	}
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Undefined, Into::into)
	}
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
	fn from(value: Vec<T>) -> Self {
		Self::Array(value.into_iter().map(Into::into).collect())
	}
}

impl From<Props> for PropValue {
	fn from(value: Props) -> Self {
		Self::Object(value.0)
	}
}

impl From<serde_json::Value> for PropValue {
	fn from(value: serde_json::Value) -> Self {
		use serde_json::Value;

		match value {
			Value::Null => Self::Null,
			Value::Bool(b) => Self::Bool(b),
			Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
			Value::String(s) => Self::String(s),
			Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
			Value::Object(map) => Self::Object(
				map.into_iter()
					.map(|(key, value)| (key, Self::from(value)))
					.collect(),
			),
		}
	}
}

/// Runtime props for one render call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props(IndexMap<String, PropValue>);

impl Props {
	/// Creates an empty prop map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a prop, builder style.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
		self.insert(key, value);
		self
	}

	/// Inserts a prop, returning the previous value for the key.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Option<PropValue> {
		self.0.insert(key.into(), value.into())
	}

	/// Looks up a prop.
	pub fn get(&self, key: &str) -> Option<&PropValue> {
		self.0.get(key)
	}

	/// Number of props.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// `true` when there are no props.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates props in insertion order.
	pub fn iter(&self) -> indexmap::map::Iter<'_, String, PropValue> {
		self.0.iter()
	}

	/// Borrows the props as an object value.
	pub fn as_map(&self) -> &IndexMap<String, PropValue> {
		&self.0
	}
}

impl<'a> IntoIterator for &'a Props {
	type Item = (&'a String, &'a PropValue);
	type IntoIter = indexmap::map::Iter<'a, String, PropValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		)
	}
}
