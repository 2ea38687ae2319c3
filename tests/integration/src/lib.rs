//! Shared helpers for the islands integration tests.
//!
//! [`TestRenderer`] is a renderer whose check outcome and output can be
//! changed between calls, with counters for how often it was asked.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;
use reinhardt_islands::prelude::*;

/// What a [`TestRenderer`]'s check does.
#[derive(Debug, Clone)]
pub enum CheckBehavior {
	Accept,
	Decline,
	Fail(&'static str),
}

/// A renderer whose check and output are fixed per test.
pub struct TestRenderer {
	name: &'static str,
	behavior: Mutex<CheckBehavior>,
	html: Mutex<String>,
	method: HydrationMethod,
	checks: AtomicUsize,
	renders: AtomicUsize,
	fail_render: AtomicBool,
}

impl TestRenderer {
	pub fn new(name: &'static str, behavior: CheckBehavior) -> Arc<Self> {
		Self::with_method(name, behavior, HydrationMethod::Default)
	}

	pub fn self_hydrating(name: &'static str, behavior: CheckBehavior) -> Arc<Self> {
		Self::with_method(name, behavior, HydrationMethod::SelfHydrating)
	}

	fn with_method(
		name: &'static str,
		behavior: CheckBehavior,
		method: HydrationMethod,
	) -> Arc<Self> {
		Arc::new(Self {
			name,
			behavior: Mutex::new(behavior),
			html: Mutex::new(format!("<div data-renderer=\"{name}\"></div>")),
			method,
			checks: AtomicUsize::new(0),
			renders: AtomicUsize::new(0),
			fail_render: AtomicBool::new(false),
		})
	}

	pub fn set_behavior(&self, behavior: CheckBehavior) {
		*self.behavior.lock() = behavior;
	}

	pub fn set_html(&self, html: impl Into<String>) {
		*self.html.lock() = html.into();
	}

	pub fn fail_renders(&self) {
		self.fail_render.store(true, Ordering::SeqCst);
	}

	pub fn checks(&self) -> usize {
		self.checks.load(Ordering::SeqCst)
	}

	pub fn renders(&self) -> usize {
		self.renders.load(Ordering::SeqCst)
	}

	pub fn source(&self) -> String {
		format!("@test/{}/client.js", self.name)
	}
}

#[async_trait]
impl Renderer for TestRenderer {
	fn name(&self) -> &str {
		self.name
	}

	async fn check(&self, _: &ComponentRef, _: &Props, _: &str) -> anyhow::Result<bool> {
		self.checks.fetch_add(1, Ordering::SeqCst);
		match self.behavior.lock().clone() {
			CheckBehavior::Accept => Ok(true),
			CheckBehavior::Decline => Ok(false),
			CheckBehavior::Fail(msg) => Err(anyhow::anyhow!(msg)),
		}
	}

	async fn render_to_static_markup(
		&self,
		_: &ComponentRef,
		_: &Props,
		_: &str,
	) -> anyhow::Result<RenderedMarkup> {
		self.renders.fetch_add(1, Ordering::SeqCst);
		if self.fail_render.load(Ordering::SeqCst) {
			anyhow::bail!("{} failed to render", self.name);
		}
		Ok(RenderedMarkup::new(self.html.lock().clone()))
	}

	fn hydration_method(&self) -> HydrationMethod {
		self.method
	}
}

/// Builds a context with the given renderers registered in order.
pub fn context(renderers: &[Arc<TestRenderer>]) -> IslandsContext {
	renderers
		.iter()
		.fold(IslandsContext::builder(), |builder, r| {
			builder.renderer(r.source(), Arc::clone(r) as ArcRenderer)
		})
		.build()
		.unwrap()
}
