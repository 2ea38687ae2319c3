//! The built-in renderer for bare custom-element tags.

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Timelike, Utc};
use reinhardt_islands_core::{ComponentRef, PropValue, Props, RenderedMarkup, Renderer};

/// Renders [`ComponentKind::Tag`](reinhardt_islands_core::ComponentKind::Tag)
/// components as plain elements.
///
/// Always registered first, with an empty module source.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
	/// Creates the renderer.
	pub fn new() -> Self {
		Self
	}
}

#[async_trait]
impl Renderer for HtmlRenderer {
	fn name(&self) -> &str {
		"html"
	}

	async fn check(
		&self,
		component: &ComponentRef,
		_props: &Props,
		_children: &str,
	) -> anyhow::Result<bool> {
		Ok(component.as_tag().is_some())
	}

	async fn render_to_static_markup(
		&self,
		component: &ComponentRef,
		props: &Props,
		children: &str,
	) -> anyhow::Result<RenderedMarkup> {
		let Some(tag) = component.as_tag() else {
			anyhow::bail!("html renderer can only render element tags, got {component}");
		};

		let mut html = String::with_capacity(tag.len() * 2 + children.len() + 16);
		html.push('<');
		html.push_str(tag);
		for (name, value) in props {
			match value {
				PropValue::Bool(true) => {
					html.push(' ');
					html.push_str(name);
				}
				PropValue::Bool(false) | PropValue::Null | PropValue::Undefined => {}
				value => {
					html.push(' ');
					html.push_str(name);
					html.push_str("=\"");
					html.push_str(&escape_attr(&attr_text(value)));
					html.push('"');
				}
			}
		}
		html.push('>');
		html.push_str(children);
		html.push_str("</");
		html.push_str(tag);
		html.push('>');

		Ok(RenderedMarkup { html })
	}
}

/// The string a browser would produce for `value` when set as an attribute.
///
/// Dates are the exception: they use the `toISOString` form instead of the
/// locale-dependent `String(date)`.
fn attr_text(value: &PropValue) -> String {
	match value {
		PropValue::Undefined => "undefined".to_string(),
		PropValue::Null => "null".to_string(),
		PropValue::Bool(b) => b.to_string(),
		PropValue::Number(n) => number_text(*n),
		PropValue::BigInt(n) => n.to_string(),
		PropValue::String(s) => s.clone(),
		PropValue::Array(items) => items
			.iter()
			.map(|item| {
				if item.is_nullish() {
					String::new()
				} else {
					attr_text(item)
				}
			})
			.collect::<Vec<_>>()
			.join(","),
		PropValue::Object(_) => "[object Object]".to_string(),
		PropValue::Date(date) => iso_string(date),
		PropValue::RegExp { source, flags } => format!("/{source}/{flags}"),
		PropValue::Map(_) => "[object Map]".to_string(),
		PropValue::Set(_) => "[object Set]".to_string(),
		PropValue::Url(url) => url.to_string(),
	}
}

/// `Number.prototype.toString()` for `n`.
fn number_text(n: f64) -> String {
	if n.is_nan() {
		return "NaN".to_string();
	}
	if n.is_infinite() {
		return (if n > 0.0 { "Infinity" } else { "-Infinity" }).to_string();
	}
	if n == 0.0 {
		return "0".to_string();
	}

	// `{:e}` yields the shortest round-trip digits, e.g. `1.2345e3`.
	let sci = format!("{:e}", n.abs());
	let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
	let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
	let k = digits.len() as i32;
	let point = exponent.parse::<i32>().unwrap_or(0) + 1;

	let mut out = String::new();
	if n < 0.0 {
		out.push('-');
	}
	if k <= point && point <= 21 {
		out.push_str(&digits);
		out.push_str(&"0".repeat((point - k) as usize));
	} else if 0 < point && point <= 21 {
		let (int, frac) = digits.split_at(point as usize);
		out.push_str(int);
		out.push('.');
		out.push_str(frac);
	} else if -6 < point && point <= 0 {
		out.push_str("0.");
		out.push_str(&"0".repeat(point.unsigned_abs() as usize));
		out.push_str(&digits);
	} else {
		let (first, rest) = digits.split_at(1);
		out.push_str(first);
		if !rest.is_empty() {
			out.push('.');
			out.push_str(rest);
		}
		out.push('e');
		out.push(if point > 0 { '+' } else { '-' });
		out.push_str(&(point - 1).unsigned_abs().to_string());
	}
	out
}

/// `Date.prototype.toISOString()` for `date`, with six-digit signed years
/// outside 0..=9999.
fn iso_string(date: &DateTime<Utc>) -> String {
	let year = date.year();
	let year = if (0..=9999).contains(&year) {
		format!("{year:04}")
	} else {
		format!("{}{:06}", if year < 0 { '-' } else { '+' }, year.unsigned_abs())
	};
	format!(
		"{year}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
		date.month(),
		date.day(),
		date.hour(),
		date.minute(),
		date.second(),
		date.timestamp_subsec_millis(),
	)
}

fn escape_attr(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('"', "&quot;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
}
