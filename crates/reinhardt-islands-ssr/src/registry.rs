//! Ordered renderer registration.
//!
//! Renderers are registered as two parallel sequences: the module source each
//! renderer's client entry is imported from, and the renderer itself. The
//! built-in [`HtmlRenderer`] is always prepended with an empty source, so
//! index 0 is never a user renderer.

use std::sync::Arc;

use reinhardt_islands_core::{ArcRenderer, IslandsError, IslandsResult, Renderer};

use crate::html::HtmlRenderer;

/// A renderer paired with its module source and registry position.
pub struct RegisteredRenderer {
	index: usize,
	source: String,
	renderer: ArcRenderer,
}

impl RegisteredRenderer {
	/// Position in the registry. `0` is the built-in renderer.
	pub fn index(&self) -> usize {
		self.index
	}

	/// Module source of the renderer's client entry.
	pub fn source(&self) -> &str {
		&self.source
	}

	/// The renderer.
	pub fn renderer(&self) -> &dyn Renderer {
		self.renderer.as_ref()
	}

	/// The renderer's name.
	pub fn name(&self) -> &str {
		self.renderer.name()
	}

	/// `true` for the built-in renderer.
	pub fn is_builtin(&self) -> bool {
		self.index == 0
	}
}

impl std::fmt::Debug for RegisteredRenderer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RegisteredRenderer")
			.field("index", &self.index)
			.field("name", &self.renderer.name())
			.field("source", &self.source)
			.finish()
	}
}

/// Ordered renderers, built-in first.
#[derive(Debug, Clone)]
pub struct RendererRegistry {
	entries: Vec<Arc<RegisteredRenderer>>,
}

impl Default for RendererRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl RendererRegistry {
	/// Creates a registry holding only the built-in renderer.
	pub fn new() -> Self {
		Self {
			entries: vec![Arc::new(RegisteredRenderer {
				index: 0,
				source: String::new(),
				renderer: Arc::new(HtmlRenderer::new()),
			})],
		}
	}

	/// Creates a registry from parallel source and renderer sequences.
	pub fn with_renderers<S>(
		sources: impl IntoIterator<Item = S>,
		renderers: impl IntoIterator<Item = ArcRenderer>,
	) -> IslandsResult<Self>
	where
		S: Into<String>,
	{
		let mut registry = Self::new();
		registry.set_renderers(sources, renderers)?;
		Ok(registry)
	}

	/// Replaces all user renderers, keeping the built-in one at index 0.
	///
	/// Fails without modifying the registry if the sequences differ in length.
	pub fn set_renderers<S>(
		&mut self,
		sources: impl IntoIterator<Item = S>,
		renderers: impl IntoIterator<Item = ArcRenderer>,
	) -> IslandsResult<()>
	where
		S: Into<String>,
	{
		let sources: Vec<String> = sources.into_iter().map(Into::into).collect();
		let renderers: Vec<ArcRenderer> = renderers.into_iter().collect();

		if sources.len() != renderers.len() {
			return Err(IslandsError::Registration {
				sources: sources.len(),
				renderers: renderers.len(),
			});
		}

		self.entries.truncate(1);
		self.entries.extend(
			sources
				.into_iter()
				.zip(renderers)
				.enumerate()
				.map(|(i, (source, renderer))| {
					Arc::new(RegisteredRenderer {
						index: i + 1,
						source,
						renderer,
					})
				}),
		);

		tracing::debug!(count = self.entries.len() - 1, "registered renderers");
		Ok(())
	}

	/// Number of entries, including the built-in renderer.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// `true` when no user renderer is registered.
	pub fn is_empty(&self) -> bool {
		self.entries.len() <= 1
	}

	/// Entry at `index`.
	pub fn get(&self, index: usize) -> Option<&Arc<RegisteredRenderer>> {
		self.entries.get(index)
	}

	/// Module source at `index`.
	pub fn source_of(&self, index: usize) -> Option<&str> {
		self.entries.get(index).map(|entry| entry.source())
	}

	/// Iterates entries in resolution order.
	pub fn iter(&self) -> impl Iterator<Item = &Arc<RegisteredRenderer>> {
		self.entries.iter()
	}

	/// The only user renderer, if exactly one is registered.
	pub fn sole_user_renderer(&self) -> Option<&Arc<RegisteredRenderer>> {
		match self.entries.as_slice() {
			[_, only] => Some(only),
			_ => None,
		}
	}
}
