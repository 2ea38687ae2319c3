//! Prop serialization for the client.
//!
//! Props cross from the server into generated module code, so they are
//! encoded as JavaScript expressions rather than JSON. The encoder is a trait
//! so that hosts can swap it without touching resolution or rendering.

use reinhardt_islands_core::{IslandsResult, PropValue, Props};

/// Encodes prop values as JavaScript expressions.
pub trait PropSerializer: Send + Sync {
	/// Encodes a single value.
	fn serialize(&self, value: &PropValue) -> IslandsResult<String>;

	/// Encodes a full prop map as an object expression.
	fn serialize_props(&self, props: &Props) -> IslandsResult<String> {
		self.serialize(&PropValue::from(props.clone()))
	}
}

/// The default encoder.
///
/// Produces a literal that evaluates back to the original value, including
/// `undefined`, non-finite numbers, `-0`, BigInts, dates, regular
/// expressions, maps, sets and URLs. Strings are escaped so the output can be
/// inlined in a `<script>` element.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsLiteralSerializer;

impl JsLiteralSerializer {
	/// Creates the serializer.
	pub fn new() -> Self {
		Self
	}

	fn write_value(&self, out: &mut String, value: &PropValue) {
		match value {
			PropValue::Undefined => out.push_str("undefined"),
			PropValue::Null => out.push_str("null"),
			PropValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
			PropValue::Number(n) => write_number(out, *n),
			PropValue::BigInt(n) => {
				out.push_str(&n.to_string());
				out.push('n');
			}
			PropValue::String(s) => push_js_string(out, s),
			PropValue::Array(items) => {
				out.push('[');
				self.write_list(out, items);
				out.push(']');
			}
			PropValue::Object(map) => self.write_object(out, map.iter()),
			PropValue::Date(date) => {
				out.push_str("new Date(");
				out.push_str(&date.timestamp_millis().to_string());
				out.push(')');
			}
			PropValue::RegExp { source, flags } => {
				out.push_str("new RegExp(");
				push_js_string(out, source);
				out.push_str(", ");
				push_js_string(out, flags);
				out.push(')');
			}
			PropValue::Map(entries) => {
				out.push_str("new Map([");
				for (i, (key, value)) in entries.iter().enumerate() {
					if i > 0 {
						out.push_str(", ");
					}
					out.push('[');
					self.write_value(out, key);
					out.push_str(", ");
					self.write_value(out, value);
					out.push(']');
				}
				out.push_str("])");
			}
			PropValue::Set(items) => {
				out.push_str("new Set([");
				self.write_list(out, items);
				out.push_str("])");
			}
			PropValue::Url(url) => {
				out.push_str("new URL(");
				push_js_string(out, url.as_str());
				out.push(')');
			}
		}
	}

	fn write_list(&self, out: &mut String, items: &[PropValue]) {
		for (i, item) in items.iter().enumerate() {
			if i > 0 {
				out.push_str(", ");
			}
			self.write_value(out, item);
		}
	}

	fn write_object<'a>(
		&self,
		out: &mut String,
		entries: impl Iterator<Item = (&'a String, &'a PropValue)>,
	) {
		out.push('{');
		for (i, (key, value)) in entries.enumerate() {
			if i > 0 {
				out.push_str(", ");
			}
			push_js_string(out, key);
			out.push_str(": ");
			self.write_value(out, value);
		}
		out.push('}');
	}
}

impl PropSerializer for JsLiteralSerializer {
	fn serialize(&self, value: &PropValue) -> IslandsResult<String> {
		let mut out = String::new();
		self.write_value(&mut out, value);
		Ok(out)
	}

	fn serialize_props(&self, props: &Props) -> IslandsResult<String> {
		let mut out = String::new();
		self.write_object(&mut out, props.iter());
		Ok(out)
	}
}

fn write_number(out: &mut String, n: f64) {
	if n.is_nan() {
		out.push_str("NaN");
	} else if n.is_infinite() {
		out.push_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
	} else if n == 0.0 && n.is_sign_negative() {
		out.push_str("-0");
	} else {
		out.push_str(&n.to_string());
	}
}

/// Appends `s` as a double-quoted JavaScript string literal.
///
/// The literal is the JSON encoding of `s` with `<`, `>`, U+2028 and U+2029
/// escaped afterwards, so it can neither close a `<script>` element nor break
/// a line in older engines.
pub(crate) fn push_js_string(out: &mut String, s: &str) {
	let json = serde_json::Value::from(s).to_string();
	out.reserve(json.len());
	for c in json.chars() {
		match c {
			'<' => out.push_str("\\u003C"),
			'>' => out.push_str("\\u003E"),
			'\u{2028}' => out.push_str("\\u2028"),
			'\u{2029}' => out.push_str("\\u2029"),
			c => out.push(c),
		}
	}
}

/// Returns `s` as a script-safe JavaScript string literal.
pub fn js_string_literal(s: &str) -> String {
	let mut out = String::new();
	push_js_string(&mut out, s);
	out
}
