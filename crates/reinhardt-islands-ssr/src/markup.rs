//! Static markup rendering.

use reinhardt_islands_core::{ComponentRef, IslandsResult, Props, RenderedMarkup};
use reinhardt_islands_hydration::FragmentStripper;

use crate::registry::RegisteredRenderer;

/// Invokes a resolved renderer and finishes static output.
pub struct MarkupRenderer<'a> {
	stripper: &'a FragmentStripper,
}

impl<'a> MarkupRenderer<'a> {
	/// Creates a markup renderer that strips fragments with `stripper`.
	pub fn new(stripper: &'a FragmentStripper) -> Self {
		Self { stripper }
	}

	/// Renders `component` with the resolved renderer.
	///
	/// Renderer errors are returned unchanged.
	pub async fn render(
		&self,
		entry: &RegisteredRenderer,
		component: &ComponentRef,
		props: &Props,
		children: &str,
	) -> IslandsResult<RenderedMarkup> {
		let markup = entry
			.renderer()
			.render_to_static_markup(component, props, children)
			.await?;
		Ok(markup)
	}

	/// Final output for a component that is not hydrated.
	pub fn finish_static(&self, markup: RenderedMarkup) -> String {
		self.stripper.strip(&markup.html)
	}
}
