//! Component references and per-usage component props.
//!
//! A [`ComponentRef`] is an opaque handle to a component definition. Its shape
//! ([`ComponentKind`]) is fixed when it is created and only feeds display-name
//! resolution and tag validation. Equality and hashing use the identity of the
//! handle, never its contents: two references built separately from the same
//! data are different components, while clones of one reference are the same.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::IslandsError;

/// The shape of a component reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentKind {
	/// A named, function-like component (a framework component definition).
	Named {
		/// The definition's own name.
		name: String,
		/// An explicit display name attached to the definition, if any.
		display_name: Option<String>,
	},
	/// A bare element tag, expected to name a custom element.
	Tag(String),
	/// Anything else. Only renderers that recognise the definition can use it.
	Opaque,
}

struct ComponentInner {
	kind: ComponentKind,
	definition: Option<Box<dyn Any + Send + Sync>>,
}

/// A shared, identity-compared handle to a component definition.
#[derive(Clone)]
pub struct ComponentRef(Arc<ComponentInner>);

impl ComponentRef {
	/// Creates a reference from a kind and an optional definition payload.
	pub fn new(kind: ComponentKind, definition: Option<Box<dyn Any + Send + Sync>>) -> Self {
		Self(Arc::new(ComponentInner { kind, definition }))
	}

	/// Creates a named component without a payload.
	pub fn named(name: impl Into<String>) -> Self {
		Self::new(
			ComponentKind::Named {
				name: name.into(),
				display_name: None,
			},
			None,
		)
	}

	/// Creates a named component carrying a renderer-specific definition.
	pub fn named_with<T: Any + Send + Sync>(name: impl Into<String>, definition: T) -> Self {
		Self::new(
			ComponentKind::Named {
				name: name.into(),
				display_name: None,
			},
			Some(Box::new(definition)),
		)
	}

	/// Creates a named component that declares its own display name.
	pub fn named_with_display_name(
		name: impl Into<String>,
		display_name: impl Into<String>,
	) -> Self {
		Self::new(
			ComponentKind::Named {
				name: name.into(),
				display_name: Some(display_name.into()),
			},
			None,
		)
	}

	/// Creates a bare tag reference such as `"my-element"`.
	pub fn tag(tag: impl Into<String>) -> Self {
		Self::new(ComponentKind::Tag(tag.into()), None)
	}

	/// Creates an opaque reference around an arbitrary definition.
	pub fn opaque<T: Any + Send + Sync>(definition: T) -> Self {
		Self::new(ComponentKind::Opaque, Some(Box::new(definition)))
	}

	/// Returns the shape of this reference.
	pub fn kind(&self) -> &ComponentKind {
		&self.0.kind
	}

	/// Returns the tag name when this is a [`ComponentKind::Tag`].
	pub fn as_tag(&self) -> Option<&str> {
		match &self.0.kind {
			ComponentKind::Tag(tag) => Some(tag),
			_ => None,
		}
	}

	/// Downcasts the definition payload.
	pub fn definition<T: Any>(&self) -> Option<&T> {
		self.0.definition.as_ref()?.downcast_ref::<T>()
	}

	/// Returns `true` when both handles point at the same component.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}

	/// A process-unique identifier for this component, valid while it is alive.
	pub fn id(&self) -> usize {
		Arc::as_ptr(&self.0) as *const () as usize
	}

	/// The component's own name: display name, then function name, then tag.
	pub fn own_name(&self) -> Option<&str> {
		match &self.0.kind {
			ComponentKind::Named { name, display_name } => {
				Some(display_name.as_deref().unwrap_or(name))
			}
			ComponentKind::Tag(tag) => Some(tag),
			ComponentKind::Opaque => None,
		}
	}
}

impl PartialEq for ComponentRef {
	fn eq(&self, other: &Self) -> bool {
		self.ptr_eq(other)
	}
}

impl Eq for ComponentRef {}

impl Hash for ComponentRef {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id().hash(state);
	}
}

impl fmt::Debug for ComponentRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComponentRef")
			.field("kind", &self.0.kind)
			.field("id", &format_args!("{:#x}", self.id()))
			.finish()
	}
}

impl fmt::Display for ComponentRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.own_name() {
			Some(name) => f.write_str(name),
			None => write!(f, "[component {:#x}]", self.id()),
		}
	}
}

/// Returns `true` if `tag` could name a custom element.
///
/// Custom element names must contain a hyphen.
pub fn is_custom_element_name(tag: &str) -> bool {
	tag.contains('-')
}

/// When a hydrated component is activated on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HydrateStrategy {
	/// As soon as the page loads.
	Load,
	/// Once the main thread is idle.
	Idle,
	/// When the element enters the viewport.
	Visible,
}

impl HydrateStrategy {
	/// The loader module name for this strategy.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Load => "load",
			Self::Idle => "idle",
			Self::Visible => "visible",
		}
	}
}

impl fmt::Display for HydrateStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for HydrateStrategy {
	type Err = IslandsError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"load" => Ok(Self::Load),
			"idle" => Ok(Self::Idle),
			"visible" => Ok(Self::Visible),
			other => Err(IslandsError::Hydration(format!(
				"unknown hydration strategy: {other}"
			))),
		}
	}
}

/// Which export of a module holds the component definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentExport {
	/// Export name.
	pub value: String,
	/// Bind the whole module namespace instead of a single export.
	#[serde(default)]
	pub namespace: bool,
}

impl ComponentExport {
	/// A named export.
	pub fn named(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			namespace: false,
		}
	}

	/// The whole module namespace.
	pub fn namespace() -> Self {
		Self {
			value: "default".to_string(),
			namespace: true,
		}
	}
}

impl Default for ComponentExport {
	fn default() -> Self {
		Self::named("default")
	}
}

/// Control props attached to a component usage by the page compiler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentProps {
	/// Name used in error messages.
	#[serde(default)]
	pub display_name: Option<String>,
	/// Hydration strategy; `None` renders static markup only.
	#[serde(default)]
	pub hydrate: Option<HydrateStrategy>,
	/// URL of the component module on the client.
	#[serde(default)]
	pub component_url: Option<String>,
	/// Export of the component module holding the definition.
	#[serde(default)]
	pub component_export: Option<ComponentExport>,
}

impl ComponentProps {
	/// Creates props with a display name.
	pub fn new(display_name: impl Into<String>) -> Self {
		Self {
			display_name: Some(display_name.into()),
			..Self::default()
		}
	}

	/// Sets the hydration strategy.
	pub fn hydrate(mut self, strategy: HydrateStrategy) -> Self {
		self.hydrate = Some(strategy);
		self
	}

	/// Sets the component module URL.
	pub fn component_url(mut self, url: impl Into<String>) -> Self {
		self.component_url = Some(url.into());
		self
	}

	/// Sets the component export.
	pub fn component_export(mut self, export: ComponentExport) -> Self {
		self.component_export = Some(export);
		self
	}

	/// The explicit display name, ignoring empty strings.
	pub fn explicit_display_name(&self) -> Option<&str> {
		self.display_name.as_deref().filter(|name| !name.is_empty())
	}

	/// Resolves the name used to describe `component` in messages.
	///
	/// Order: explicit display name, the component's own name, the tag string,
	/// then the raw reference.
	pub fn resolve_display_name(&self, component: &ComponentRef) -> String {
		match self.explicit_display_name() {
			Some(name) => name.to_string(),
			None => component.to_string(),
		}
	}
}
