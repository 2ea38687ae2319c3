//! Core types for Reinhardt islands.
//!
//! This crate defines the vocabulary shared by the resolution, rendering and
//! hydration layers:
//!
//! - [`ComponentRef`]: an identity-compared handle to a component definition
//! - [`ComponentProps`]: per-usage control props (display name, hydration)
//! - [`Props`] / [`PropValue`]: runtime props, richer than JSON
//! - [`Renderer`]: the plugin contract implemented by UI framework adapters
//! - [`IslandsSettings`]: configurable protocol constants
//! - [`IslandsError`]: the error type for every fallible operation

#![warn(missing_docs)]

pub mod component;
pub mod error;
pub mod props;
pub mod renderer;
pub mod settings;

pub use component::{
	ComponentExport, ComponentKind, ComponentProps, ComponentRef, HydrateStrategy,
	is_custom_element_name,
};
pub use error::{IslandsError, IslandsResult};
pub use props::{PropValue, Props};
pub use renderer::{ArcRenderer, ComponentInfo, HydrationMethod, RenderedMarkup, Renderer};
pub use settings::IslandsSettings;

/// Re-export commonly used types.
pub mod prelude {
	pub use crate::component::{
		ComponentExport, ComponentKind, ComponentProps, ComponentRef, HydrateStrategy,
	};
	pub use crate::error::{IslandsError, IslandsResult};
	pub use crate::props::{PropValue, Props};
	pub use crate::renderer::{
		ArcRenderer, ComponentInfo, HydrationMethod, RenderedMarkup, Renderer,
	};
	pub use crate::settings::IslandsSettings;

	pub use async_trait::async_trait;
}
