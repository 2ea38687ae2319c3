//! The renderer plugin contract.
//!
//! A renderer decides whether it can handle a component, renders it to static
//! markup on the server, and tells the hydration layer how its client module
//! wants to be called. Concrete framework adapters live outside this crate.

use std::sync::Arc;

use async_trait::async_trait;

use crate::component::{ComponentExport, ComponentRef};
use crate::props::Props;

/// Static markup produced by a renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedMarkup {
	/// The rendered HTML.
	pub html: String,
}

impl RenderedMarkup {
	/// Wraps rendered HTML.
	pub fn new(html: impl Into<String>) -> Self {
		Self { html: html.into() }
	}
}

/// How a renderer's client module hydrates a component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HydrationMethod {
	/// The client module imports the component itself:
	/// `hydrate(element, componentUrl)(props, children)`.
	SelfHydrating,
	/// The bootstrap imports the component and passes it in:
	/// `hydrate(element)(Component, props, children)`.
	#[default]
	Default,
}

/// Where the client can import a component from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentInfo {
	/// Module URL.
	pub url: String,
	/// Export holding the definition.
	pub export: ComponentExport,
}

impl ComponentInfo {
	/// Creates component info for a named export.
	pub fn new(url: impl Into<String>, export: ComponentExport) -> Self {
		Self {
			url: url.into(),
			export,
		}
	}
}

/// A UI renderer plugin.
///
/// All fallible methods return [`anyhow::Result`]; errors are recorded or
/// propagated by the caller without inspection.
#[async_trait]
pub trait Renderer: Send + Sync {
	/// Name used in logs.
	fn name(&self) -> &str;

	/// Returns `true` if this renderer can render `component`.
	async fn check(
		&self,
		component: &ComponentRef,
		props: &Props,
		children: &str,
	) -> anyhow::Result<bool>;

	/// Renders `component` to static HTML.
	async fn render_to_static_markup(
		&self,
		component: &ComponentRef,
		props: &Props,
		children: &str,
	) -> anyhow::Result<RenderedMarkup>;

	/// How the client module of this renderer hydrates.
	fn hydration_method(&self) -> HydrationMethod {
		HydrationMethod::Default
	}

	/// Locates the component module for the client, when the renderer knows it.
	///
	/// Returns `Ok(None)` when the renderer does not expose this capability.
	async fn component_info(
		&self,
		_component: &ComponentRef,
		_props: &Props,
	) -> anyhow::Result<Option<ComponentInfo>> {
		Ok(None)
	}
}

/// Shared renderer handle.
pub type ArcRenderer = Arc<dyn Renderer>;
