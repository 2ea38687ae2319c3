//! # Reinhardt Islands
//!
//! Server-side rendering and partial hydration of UI components for Reinhardt.
//!
//! A page is mostly static HTML. Individual components ("islands") are
//! rendered on the server by a pluggable [`Renderer`](core::Renderer) and,
//! when asked to, re-activated in the browser by a small generated module
//! script that lazily imports the component and its renderer's client entry.
//!
//! ## Crates
//!
//! - [`core`]: component references, props, the renderer contract, settings
//!   and errors
//! - [`hydration`]: prop serialization, anchor ids and bootstrap scripts
//! - [`ssr`]: the renderer registry, resolution, the component factory and
//!   the built-in HTML renderer
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use reinhardt_islands::prelude::*;
//! use std::sync::Arc;
//!
//! struct PreactRenderer;
//!
//! #[async_trait]
//! impl Renderer for PreactRenderer {
//!     fn name(&self) -> &str { "preact" }
//!
//!     async fn check(&self, component: &ComponentRef, _: &Props, _: &str) -> anyhow::Result<bool> {
//!         Ok(component.definition::<PreactComponent>().is_some())
//!     }
//!
//!     async fn render_to_static_markup(
//!         &self,
//!         component: &ComponentRef,
//!         props: &Props,
//!         children: &str,
//!     ) -> anyhow::Result<RenderedMarkup> {
//!         // ...
//!     }
//! }
//!
//! let ctx = IslandsContext::builder()
//!     .settings(IslandsSettings::from_file("islands.toml")?)
//!     .renderer("@reinhardt/renderer-preact/client.js", Arc::new(PreactRenderer))
//!     .build()?;
//!
//! let counter = IslandComponent::new(
//!     Some(ComponentRef::named_with("Counter", PreactComponent::new())),
//!     ComponentProps::new("Counter")
//!         .hydrate(HydrateStrategy::Idle)
//!         .component_url("/src/components/Counter.jsx"),
//! )?;
//!
//! let html = counter
//!     .render(&ctx, &Props::new().with("start", 0), &["<b>Count</b>"])
//!     .await?;
//! ```

pub use reinhardt_islands_core as core;
pub use reinhardt_islands_hydration as hydration;
pub use reinhardt_islands_ssr as ssr;

pub use reinhardt_islands_core::{
	ComponentExport, ComponentInfo, ComponentKind, ComponentProps, ComponentRef, HydrateStrategy,
	HydrationMethod, IslandsError, IslandsResult, IslandsSettings, PropValue, Props, RenderedMarkup,
	Renderer,
};
pub use reinhardt_islands_hydration::{
	HydratedMarkup, HydrationScriptGenerator, JsLiteralSerializer, PropSerializer,
};
pub use reinhardt_islands_ssr::{
	HtmlRenderer, IslandComponent, IslandsContext, IslandsContextBuilder, RendererRegistry,
	RendererResolver, ResolutionCache,
};

/// Re-export commonly used types.
pub mod prelude {
	pub use reinhardt_islands_hydration::{JsLiteralSerializer, PropSerializer};
	pub use reinhardt_islands_ssr::prelude::*;
}
