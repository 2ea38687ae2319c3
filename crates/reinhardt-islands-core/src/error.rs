//! Error types for component rendering and hydration.

use thiserror::Error;

/// Result type for island operations.
pub type IslandsResult<T> = Result<T, IslandsError>;

/// Errors raised while validating, resolving, rendering or hydrating a component.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IslandsError {
	/// The component reference was rejected when the factory was built.
	#[error("{0}")]
	Validation(String),

	/// No registered renderer accepted the component.
	#[error("No renderer found for {component}! Did you forget to add a renderer to your config?")]
	Resolution {
		/// Best-effort display name of the component.
		component: String,
	},

	/// An error raised by a renderer plugin, passed through untouched.
	#[error(transparent)]
	Renderer(#[from] anyhow::Error),

	/// Renderer sources and descriptors were registered with different lengths.
	#[error("renderer registration mismatch: {sources} sources for {renderers} renderers")]
	Registration {
		/// Number of module sources supplied.
		sources: usize,
		/// Number of renderer descriptors supplied.
		renderers: usize,
	},

	/// The hydration script could not be built.
	#[error("hydration error: {0}")]
	Hydration(String),

	/// A prop value could not be encoded for the client.
	#[error("prop serialization error: {0}")]
	Serialization(String),

	/// Settings could not be loaded.
	#[error("settings error: {0}")]
	Settings(String),
}

impl IslandsError {
	/// Returns `true` if this error came from a renderer plugin.
	pub fn is_renderer_error(&self) -> bool {
		matches!(self, Self::Renderer(_))
	}

	/// Returns the plugin error when this is a [`IslandsError::Renderer`].
	pub fn renderer_error(&self) -> Option<&anyhow::Error> {
		match self {
			Self::Renderer(err) => Some(err),
			_ => None,
		}
	}
}

impl From<toml::de::Error> for IslandsError {
	fn from(err: toml::de::Error) -> Self {
		Self::Settings(err.to_string())
	}
}

impl From<std::io::Error> for IslandsError {
	fn from(err: std::io::Error) -> Self {
		Self::Settings(err.to_string())
	}
}
