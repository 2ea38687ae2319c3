//! Run-scoped rendering context.
//!
//! The context owns the renderer registry, the resolution cache built on top
//! of it, settings and the prop serializer. Create one per build or server
//! run and pass it by reference to every render call.

use std::sync::Arc;

use reinhardt_islands_core::{ArcRenderer, IslandsResult, IslandsSettings};
use reinhardt_islands_hydration::{FragmentStripper, JsLiteralSerializer, PropSerializer};

use crate::cache::ResolutionCache;
use crate::markup::MarkupRenderer;
use crate::registry::RendererRegistry;
use crate::resolver::RendererResolver;

/// Shared state for rendering components during one run.
pub struct IslandsContext {
	settings: IslandsSettings,
	registry: RendererRegistry,
	cache: ResolutionCache,
	serializer: Arc<dyn PropSerializer>,
	stripper: FragmentStripper,
}

impl IslandsContext {
	/// Creates a context with default settings and only the built-in renderer.
	pub fn new() -> IslandsResult<Self> {
		Self::builder().build()
	}

	/// Starts building a context.
	pub fn builder() -> IslandsContextBuilder {
		IslandsContextBuilder::default()
	}

	/// Replaces the registered renderers.
	///
	/// The cache is cleared since its entries point into the old registry.
	pub fn set_renderers<S>(
		&mut self,
		sources: impl IntoIterator<Item = S>,
		renderers: impl IntoIterator<Item = ArcRenderer>,
	) -> IslandsResult<()>
	where
		S: Into<String>,
	{
		self.registry.set_renderers(sources, renderers)?;
		self.cache.clear();
		Ok(())
	}

	/// The settings.
	pub fn settings(&self) -> &IslandsSettings {
		&self.settings
	}

	/// The renderer registry.
	pub fn registry(&self) -> &RendererRegistry {
		&self.registry
	}

	/// The resolution cache.
	pub fn cache(&self) -> &ResolutionCache {
		&self.cache
	}

	/// The prop serializer.
	pub fn serializer(&self) -> &dyn PropSerializer {
		self.serializer.as_ref()
	}

	/// A resolver over this context's registry and cache.
	pub fn resolver(&self) -> RendererResolver<'_> {
		RendererResolver::new(&self.registry, &self.cache)
	}

	/// A markup renderer using this context's fragment settings.
	pub fn markup_renderer(&self) -> MarkupRenderer<'_> {
		MarkupRenderer::new(&self.stripper)
	}
}

/// Builder for [`IslandsContext`].
#[derive(Default)]
pub struct IslandsContextBuilder {
	settings: Option<IslandsSettings>,
	sources: Vec<String>,
	renderers: Vec<ArcRenderer>,
	serializer: Option<Arc<dyn PropSerializer>>,
}

impl IslandsContextBuilder {
	/// Uses `settings` instead of the defaults.
	pub fn settings(mut self, settings: IslandsSettings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Registers a renderer after those already added.
	pub fn renderer(mut self, source: impl Into<String>, renderer: ArcRenderer) -> Self {
		self.sources.push(source.into());
		self.renderers.push(renderer);
		self
	}

	/// Replaces the default [`JsLiteralSerializer`].
	pub fn serializer(mut self, serializer: Arc<dyn PropSerializer>) -> Self {
		self.serializer = Some(serializer);
		self
	}

	/// Builds the context.
	pub fn build(self) -> IslandsResult<IslandsContext> {
		let settings = self.settings.unwrap_or_default();
		let stripper = FragmentStripper::new(&settings.fragment_tag)?;
		let registry = RendererRegistry::with_renderers(self.sources, self.renderers)?;

		Ok(IslandsContext {
			settings,
			registry,
			cache: ResolutionCache::new(),
			serializer: self
				.serializer
				.unwrap_or_else(|| Arc::new(JsLiteralSerializer::new())),
			stripper,
		})
	}
}
