//! Island rendering settings.
//!
//! Settings can be built in code or loaded from TOML, either as a bare table
//! or under an `[islands]` section of a larger settings file:
//!
//! ```toml
//! [islands]
//! hydrate_base_path = "/_astro_frontend/hydrate"
//! root_tag = "astro-root"
//! fragment_tag = "astro-fragment"
//! anchor_id_length = 12
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::component::HydrateStrategy;
use crate::error::{IslandsError, IslandsResult};

/// Default prefix of the client hydration loader modules.
pub const DEFAULT_HYDRATE_BASE_PATH: &str = "/_astro_frontend/hydrate";

/// Default wrapper element for hydrated markup.
pub const DEFAULT_ROOT_TAG: &str = "astro-root";

/// Default fragment wrapper removed from static markup.
pub const DEFAULT_FRAGMENT_TAG: &str = "astro-fragment";

/// Default number of hex characters in an anchor id.
pub const DEFAULT_ANCHOR_ID_LENGTH: usize = 12;

const MIN_ANCHOR_ID_LENGTH: usize = 4;
const MAX_ANCHOR_ID_LENGTH: usize = 64;

/// Settings for island rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IslandsSettings {
	/// Prefix of `<strategy>.js` loader modules.
	pub hydrate_base_path: String,
	/// Wrapper element for hydrated markup.
	pub root_tag: String,
	/// Fragment wrapper removed from static markup.
	pub fragment_tag: String,
	/// Hex characters kept from the content digest.
	pub anchor_id_length: usize,
}

impl Default for IslandsSettings {
	fn default() -> Self {
		Self {
			hydrate_base_path: DEFAULT_HYDRATE_BASE_PATH.to_string(),
			root_tag: DEFAULT_ROOT_TAG.to_string(),
			fragment_tag: DEFAULT_FRAGMENT_TAG.to_string(),
			anchor_id_length: DEFAULT_ANCHOR_ID_LENGTH,
		}
	}
}

#[derive(Deserialize)]
struct SettingsFile {
	islands: Option<IslandsSettings>,
}

impl IslandsSettings {
	/// Creates default settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses settings from TOML.
	///
	/// An `[islands]` table takes precedence; otherwise the document itself
	/// is read as the settings table.
	pub fn from_toml_str(source: &str) -> IslandsResult<Self> {
		let file: SettingsFile = toml::from_str(source)?;
		let settings = match file.islands {
			Some(settings) => settings,
			None => toml::from_str(source)?,
		};
		settings.validate()?;
		Ok(settings)
	}

	/// Loads settings from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> IslandsResult<Self> {
		let source = std::fs::read_to_string(path.as_ref())?;
		Self::from_toml_str(&source)
	}

	/// Sets the loader module prefix.
	pub fn with_hydrate_base_path(mut self, path: impl Into<String>) -> Self {
		self.hydrate_base_path = path.into();
		self
	}

	/// Sets the hydrated markup wrapper element.
	pub fn with_root_tag(mut self, tag: impl Into<String>) -> Self {
		self.root_tag = tag.into();
		self
	}

	/// Sets the fragment wrapper tag.
	pub fn with_fragment_tag(mut self, tag: impl Into<String>) -> Self {
		self.fragment_tag = tag.into();
		self
	}

	/// Sets the anchor id length.
	pub fn with_anchor_id_length(mut self, length: usize) -> Self {
		self.anchor_id_length = length;
		self
	}

	/// Anchor id length clamped to the supported range.
	pub fn effective_anchor_id_length(&self) -> usize {
		self.anchor_id_length
			.clamp(MIN_ANCHOR_ID_LENGTH, MAX_ANCHOR_ID_LENGTH)
	}

	/// URL of the loader module for `strategy`.
	pub fn loader_path(&self, strategy: HydrateStrategy) -> String {
		format!(
			"{}/{}.js",
			self.hydrate_base_path.trim_end_matches('/'),
			strategy.as_str()
		)
	}

	fn validate(&self) -> IslandsResult<()> {
		if self.root_tag.is_empty() {
			return Err(IslandsError::Settings("root_tag must not be empty".to_string()));
		}
		if self.fragment_tag.is_empty() {
			return Err(IslandsError::Settings(
				"fragment_tag must not be empty".to_string(),
			));
		}
		Ok(())
	}
}
