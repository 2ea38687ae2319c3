//! Component factory: the entry point for rendering one component usage.
//!
//! An [`IslandComponent`] is validated once when built and can then be
//! rendered any number of times against an [`IslandsContext`]:
//!
//! ```ignore
//! let island = IslandComponent::new(
//!     Some(counter.clone()),
//!     ComponentProps::new("Counter").hydrate(HydrateStrategy::Idle),
//! )?;
//! let html = island.render(&ctx, &props, &["<span>child</span>"]).await?;
//! ```

use std::sync::Arc;

use reinhardt_islands_core::{
	ComponentProps, ComponentRef, IslandsError, IslandsResult, Props, is_custom_element_name,
};
use reinhardt_islands_hydration::{HydrationRequest, HydrationScriptGenerator};

use crate::context::IslandsContext;
use crate::registry::RegisteredRenderer;

/// A validated component usage, ready to render.
#[derive(Debug, Clone)]
pub struct IslandComponent {
	component: ComponentRef,
	component_props: ComponentProps,
}

impl IslandComponent {
	/// Validates `component` and binds it to its control props.
	///
	/// # Errors
	///
	/// [`IslandsError::Validation`] if `component` is `None`, or if it is a
	/// bare tag name without a hyphen (never a valid custom element).
	pub fn new(
		component: Option<ComponentRef>,
		component_props: ComponentProps,
	) -> IslandsResult<Self> {
		let display_name = component_props
			.explicit_display_name()
			.unwrap_or("component")
			.to_string();

		let Some(component) = component else {
			return Err(IslandsError::Validation(format!(
				"Unable to render {display_name} because it is missing!\nDid you forget to import the component or is it possible there is a typo?"
			)));
		};

		if let Some(tag) = component.as_tag().filter(|tag| !is_custom_element_name(tag)) {
			return Err(IslandsError::Validation(format!(
				"Unable to render {display_name}! <{tag}> is not a valid custom element name; custom element names must contain a hyphen."
			)));
		}

		Ok(Self {
			component,
			component_props,
		})
	}

	/// The component reference.
	pub fn component(&self) -> &ComponentRef {
		&self.component
	}

	/// The control props.
	pub fn component_props(&self) -> &ComponentProps {
		&self.component_props
	}

	/// Renders the component.
	///
	/// Children are joined with newlines. Without a hydration strategy the
	/// result is static markup with fragment wrappers removed; otherwise it is
	/// the anchored root element followed by its bootstrap script.
	pub async fn render<S: AsRef<str>>(
		&self,
		ctx: &IslandsContext,
		props: &Props,
		children: &[S],
	) -> IslandsResult<String> {
		let children = children
			.iter()
			.map(AsRef::as_ref)
			.collect::<Vec<_>>()
			.join("\n");

		let entry = self.renderer_for(ctx, props, &children).await?;
		let markup = ctx
			.markup_renderer()
			.render(&entry, &self.component, props, &children)
			.await?;

		let Some(strategy) = self.component_props.hydrate else {
			return Ok(ctx.markup_renderer().finish_static(markup));
		};

		let generator = HydrationScriptGenerator::new(ctx.settings(), ctx.serializer());
		let hydrated = generator
			.generate(HydrationRequest {
				strategy,
				component: &self.component,
				component_props: &self.component_props,
				props,
				html: &markup.html,
				renderer: entry.renderer(),
				renderer_source: entry.source(),
			})
			.await?;

		Ok(hydrated.into_html())
	}

	/// Resolves a renderer, falling back to the only user renderer if exactly
	/// one is registered.
	async fn renderer_for(
		&self,
		ctx: &IslandsContext,
		props: &Props,
		children: &str,
	) -> IslandsResult<Arc<RegisteredRenderer>> {
		if let Some(entry) = ctx.resolver().resolve(&self.component, props, children).await? {
			return Ok(entry);
		}

		match ctx.registry().sole_user_renderer() {
			Some(only) => {
				tracing::warn!(
					component = %self.component,
					renderer = only.name(),
					"no renderer accepted the component, using the only registered renderer"
				);
				Ok(Arc::clone(only))
			}
			None => Err(IslandsError::Resolution {
				component: self.component_props.resolve_display_name(&self.component),
			}),
		}
	}
}
