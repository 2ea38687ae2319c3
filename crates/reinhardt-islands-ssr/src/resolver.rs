//! Renderer resolution.
//!
//! For a component that is not yet cached, every registered renderer's
//! `check` is awaited strictly in registry order, one at a time. The first
//! renderer to accept wins and is cached; checks after it never run. A check
//! that fails is recorded and the scan moves on:
//!
//! - if a later renderer accepts, recorded failures are discarded
//! - if none accepts, the first recorded failure is returned
//! - if none accepts and nothing failed, the result is `None`
//!
//! Checks must not run concurrently: a renderer's check may have side effects
//! that must not happen when an earlier renderer already matched.

use std::sync::Arc;

use reinhardt_islands_core::{ComponentRef, IslandsError, IslandsResult, Props};

use crate::cache::ResolutionCache;
use crate::registry::{RegisteredRenderer, RendererRegistry};

/// Outcome of scanning the registry without a cache hit.
enum Scan {
	Matched(Arc<RegisteredRenderer>),
	Exhausted { first_error: Option<anyhow::Error> },
}

/// Resolves which renderer handles a component.
pub struct RendererResolver<'a> {
	registry: &'a RendererRegistry,
	cache: &'a ResolutionCache,
}

impl<'a> RendererResolver<'a> {
	/// Creates a resolver over a registry and its cache.
	pub fn new(registry: &'a RendererRegistry, cache: &'a ResolutionCache) -> Self {
		Self { registry, cache }
	}

	/// Returns the renderer for `component`, or `None` if no renderer accepts it.
	///
	/// Cached results are returned without running any check.
	pub async fn resolve(
		&self,
		component: &ComponentRef,
		props: &Props,
		children: &str,
	) -> IslandsResult<Option<Arc<RegisteredRenderer>>> {
		if let Some(cached) = self.cache.get(component) {
			tracing::debug!(component = %component, renderer = cached.name(), "renderer cache hit");
			return Ok(Some(cached));
		}

		match self.scan(component, props, children).await {
			Scan::Matched(entry) => Ok(Some(self.cache.insert_if_absent(component, entry))),
			Scan::Exhausted {
				first_error: Some(err),
			} => Err(IslandsError::Renderer(err)),
			Scan::Exhausted { first_error: None } => Ok(None),
		}
	}

	async fn scan(&self, component: &ComponentRef, props: &Props, children: &str) -> Scan {
		let mut first_error = None;
		let mut failures = 0_usize;

		for entry in self.registry.iter() {
			match entry.renderer().check(component, props, children).await {
				Ok(true) => {
					tracing::debug!(
						component = %component,
						renderer = entry.name(),
						forgiven = failures,
						"renderer matched"
					);
					return Scan::Matched(Arc::clone(entry));
				}
				Ok(false) => {
					tracing::debug!(component = %component, renderer = entry.name(), "renderer declined");
				}
				Err(err) => {
					tracing::debug!(
						component = %component,
						renderer = entry.name(),
						error = %err,
						"renderer check failed"
					);
					failures += 1;
					if first_error.is_none() {
						first_error = Some(err);
					}
				}
			}
		}

		Scan::Exhausted { first_error }
	}
}
