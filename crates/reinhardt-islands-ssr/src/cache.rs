//! Resolution cache keyed by component identity.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use reinhardt_islands_core::ComponentRef;

use crate::registry::RegisteredRenderer;

/// Maps components to the renderer that first accepted them.
///
/// Entries are written once and never replaced or evicted. Keys hold a clone
/// of the [`ComponentRef`], so an identity cannot be reused while cached.
#[derive(Debug, Default)]
pub struct ResolutionCache {
	entries: RwLock<HashMap<ComponentRef, Arc<RegisteredRenderer>>>,
}

impl ResolutionCache {
	/// Creates an empty cache.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the cached renderer for `component`.
	pub fn get(&self, component: &ComponentRef) -> Option<Arc<RegisteredRenderer>> {
		self.entries.read().get(component).cloned()
	}

	/// Caches `renderer` for `component` unless an entry already exists.
	///
	/// Returns the entry that ends up cached: `renderer` on first write, the
	/// earlier winner otherwise.
	pub fn insert_if_absent(
		&self,
		component: &ComponentRef,
		renderer: Arc<RegisteredRenderer>,
	) -> Arc<RegisteredRenderer> {
		self.entries
			.write()
			.entry(component.clone())
			.or_insert(renderer)
			.clone()
	}

	/// Number of cached components.
	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	/// `true` if nothing is cached.
	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	/// Drops every entry. Only used when the registry itself is replaced.
	pub(crate) fn clear(&self) {
		self.entries.write().clear();
	}
}
