//! Removal of fragment wrappers from static markup.

use regex::Regex;
use reinhardt_islands_core::{IslandsError, IslandsResult};

/// Removes every opening and closing fragment wrapper tag from markup.
///
/// Only the exact `<tag>` and `</tag>` forms are matched. Inner content and
/// its order are left untouched.
#[derive(Debug, Clone)]
pub struct FragmentStripper {
	pattern: Regex,
}

impl FragmentStripper {
	/// Builds a stripper for `tag`, e.g. `astro-fragment`.
	pub fn new(tag: &str) -> IslandsResult<Self> {
		let pattern = Regex::new(&format!("</?{}>", regex::escape(tag)))
			.map_err(|e| IslandsError::Settings(format!("invalid fragment tag {tag:?}: {e}")))?;
		Ok(Self { pattern })
	}

	/// Returns `html` with all fragment wrapper tags removed.
	pub fn strip(&self, html: &str) -> String {
		self.pattern.replace_all(html, "").into_owned()
	}
}
