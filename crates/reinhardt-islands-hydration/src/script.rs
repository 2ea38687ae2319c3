//! Client bootstrap script generation.
//!
//! A hydrated component is emitted as its markup wrapped in a root element
//! carrying the anchor id, followed by a module script:
//!
//! ```text
//! <astro-root uid="3f9c2a01b7de"><button>0</button></astro-root>
//! <script type="module">
//! import setup from "/_astro_frontend/hydrate/load.js";
//! setup("3f9c2a01b7de", async () => {
//!   ...dynamic imports...
//!   return (el, children) => ...;
//! });
//! </script>
//! ```
//!
//! The loader module's default export receives the anchor id and an async
//! callback. It awaits the callback once its trigger (load, idle, visible)
//! fires and calls the returned binder with the root element and children.

use std::fmt;

use reinhardt_islands_core::{
	ComponentExport, ComponentProps, ComponentRef, HydrateStrategy, HydrationMethod,
	IslandsError, IslandsResult, IslandsSettings, Props, Renderer,
};

use crate::anchor::anchor_id;
use crate::serializer::{PropSerializer, js_string_literal};

/// Everything needed to hydrate one rendered component.
pub struct HydrationRequest<'a> {
	/// When to activate on the client.
	pub strategy: HydrateStrategy,
	/// The component being hydrated.
	pub component: &'a ComponentRef,
	/// Control props of this usage.
	pub component_props: &'a ComponentProps,
	/// Runtime props to ship to the client.
	pub props: &'a Props,
	/// Server-rendered markup.
	pub html: &'a str,
	/// The renderer that produced `html`.
	pub renderer: &'a dyn Renderer,
	/// Module source of that renderer's client entry.
	pub renderer_source: &'a str,
}

/// Hydrated output: the anchored markup and its bootstrap script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HydratedMarkup {
	/// Content-derived anchor id.
	pub anchor_id: String,
	/// Markup wrapped in the root element.
	pub root: String,
	/// The `<script type="module">` block.
	pub script: String,
}

impl HydratedMarkup {
	/// Joins root and script with a newline.
	pub fn into_html(self) -> String {
		self.to_string()
	}
}

impl fmt::Display for HydratedMarkup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}\n{}", self.root, self.script)
	}
}

/// Where the client imports the component from.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ClientModule {
	url: String,
	export: ComponentExport,
}

/// Builds anchored markup and bootstrap scripts.
pub struct HydrationScriptGenerator<'a> {
	settings: &'a IslandsSettings,
	serializer: &'a dyn PropSerializer,
}

impl<'a> HydrationScriptGenerator<'a> {
	/// Creates a generator.
	pub fn new(settings: &'a IslandsSettings, serializer: &'a dyn PropSerializer) -> Self {
		Self {
			settings,
			serializer,
		}
	}

	/// Generates the anchored markup and script for `request`.
	///
	/// Errors from the renderer's `component_info` are returned unchanged.
	pub async fn generate(&self, request: HydrationRequest<'_>) -> IslandsResult<HydratedMarkup> {
		let anchor_id = anchor_id(request.html, self.settings.effective_anchor_id_length());
		let module = self.client_module(&request).await?;
		let props = self.serializer.serialize_props(request.props)?;

		let body = match request.renderer.hydration_method() {
			HydrationMethod::SelfHydrating => {
				self_hydrating_body(request.renderer_source, &module.url, &props)
			}
			HydrationMethod::Default => default_body(request.renderer_source, &module, &props),
		};

		let script = format!(
			"<script type=\"module\">\nimport setup from {loader};\nsetup({id}, async () => {{\n{body}}});\n</script>",
			loader = js_string_literal(&self.settings.loader_path(request.strategy)),
			id = js_string_literal(&anchor_id),
		);
		let root = format!(
			"<{tag} uid=\"{anchor_id}\">{html}</{tag}>",
			tag = self.settings.root_tag,
			html = request.html,
		);

		tracing::debug!(
			anchor_id = %anchor_id,
			strategy = %request.strategy,
			renderer = request.renderer.name(),
			"generated hydration script"
		);

		Ok(HydratedMarkup {
			anchor_id,
			root,
			script,
		})
	}

	/// Explicit props win; otherwise ask the renderer.
	async fn client_module(&self, request: &HydrationRequest<'_>) -> IslandsResult<ClientModule> {
		let explicit_export = request.component_props.component_export.clone();

		if let Some(url) = &request.component_props.component_url {
			return Ok(ClientModule {
				url: url.clone(),
				export: explicit_export.unwrap_or_default(),
			});
		}

		match request
			.renderer
			.component_info(request.component, request.props)
			.await?
		{
			Some(info) => Ok(ClientModule {
				url: info.url,
				export: explicit_export.unwrap_or(info.export),
			}),
			None => Err(IslandsError::Hydration(format!(
				"unable to hydrate {}: no componentUrl was given and renderer '{}' cannot locate it",
				request
					.component_props
					.resolve_display_name(request.component),
				request.renderer.name()
			))),
		}
	}
}

fn self_hydrating_body(renderer_source: &str, component_url: &str, props: &str) -> String {
	format!(
		"  const {{ default: hydrate }} = await import({source});\n  return (el, children) => hydrate(el, {url})({props}, children);\n",
		source = js_string_literal(renderer_source),
		url = js_string_literal(component_url),
	)
}

fn default_body(renderer_source: &str, module: &ClientModule, props: &str) -> String {
	let pick = if module.export.namespace {
		"(mod) => mod".to_string()
	} else {
		format!("(mod) => mod[{}]", js_string_literal(&module.export.value))
	};

	format!(
		"  const [Component, {{ default: hydrate }}] = await Promise.all([\n    import({url}).then({pick}),\n    import({source}),\n  ]);\n  return (el, children) => hydrate(el)(Component, {props}, children);\n",
		url = js_string_literal(&module.url),
		source = js_string_literal(renderer_source),
	)
}
