//! Server-side rendering of island components.
//!
//! Rendering a component usage goes through four steps:
//!
//! 1. **Validation**: [`IslandComponent::new`] rejects missing components and
//!    tag names that cannot be custom elements.
//! 2. **Resolution**: [`RendererResolver`] asks each registered renderer, in
//!    order, whether it can render the component. The first to accept wins
//!    and is cached per component identity in a [`ResolutionCache`].
//! 3. **Rendering**: the winning renderer produces static markup.
//! 4. **Hydration**: if the usage asks for it, the markup is anchored and a
//!    bootstrap script is appended; otherwise fragment wrappers are removed.
//!
//! The built-in [`HtmlRenderer`] is always registered first and renders
//! custom elements as plain HTML.
//!
//! ## Example
//!
//! ```ignore
//! use reinhardt_islands_ssr::prelude::*;
//!
//! let ctx = IslandsContext::builder()
//!     .renderer("@reinhardt/renderer-preact/client.js", Arc::new(PreactRenderer))
//!     .build()?;
//!
//! let island = IslandComponent::new(
//!     Some(counter),
//!     ComponentProps::new("Counter").hydrate(HydrateStrategy::Load),
//! )?;
//! let html = island.render(&ctx, &Props::new().with("start", 0), &[] as &[&str]).await?;
//! ```

#![warn(missing_docs)]

pub mod cache;
pub mod context;
pub mod factory;
pub mod html;
pub mod markup;
pub mod registry;
pub mod resolver;

pub use cache::ResolutionCache;
pub use context::{IslandsContext, IslandsContextBuilder};
pub use factory::IslandComponent;
pub use html::HtmlRenderer;
pub use markup::MarkupRenderer;
pub use registry::{RegisteredRenderer, RendererRegistry};
pub use resolver::RendererResolver;

/// Re-export commonly used types.
pub mod prelude {
	pub use crate::context::{IslandsContext, IslandsContextBuilder};
	pub use crate::factory::IslandComponent;
	pub use crate::html::HtmlRenderer;
	pub use crate::registry::RendererRegistry;

	pub use reinhardt_islands_core::prelude::*;
}
