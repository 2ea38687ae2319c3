//! End-to-end rendering through `IslandComponent`.

use std::io::Write;

use reinhardt_islands::prelude::*;
use reinhardt_islands_integration_tests::{CheckBehavior, TestRenderer, context};
use rstest::rstest;

fn anchor_of(html: &str) -> &str {
	let start = html.find("uid=\"").unwrap() + "uid=\"".len();
	let len = html[start..].find('"').unwrap();
	&html[start..start + len]
}

fn hydrated(display_name: &str, strategy: HydrateStrategy) -> IslandComponent {
	IslandComponent::new(
		Some(ComponentRef::named(display_name)),
		ComponentProps::new(display_name)
			.hydrate(strategy)
			.component_url(format!("/src/components/{display_name}.jsx")),
	)
	.unwrap()
}

#[tokio::test]
async fn test_static_render_strips_fragments() {
	let r = TestRenderer::new("r", CheckBehavior::Accept);
	r.set_html("<astro-fragment><p>x</p></astro-fragment>");
	let ctx = context(&[r]);
	let island =
		IslandComponent::new(Some(ComponentRef::named("Para")), ComponentProps::new("Para"))
			.unwrap();

	let html = island
		.render(&ctx, &Props::new(), &Vec::<String>::new())
		.await
		.unwrap();

	assert_eq!(html, "<p>x</p>");
}

#[tokio::test]
async fn test_hydration_anchor_is_content_derived() {
	let r = TestRenderer::new("r", CheckBehavior::Accept);
	let ctx = context(&[r.clone()]);
	let island = hydrated("Counter", HydrateStrategy::Load);

	r.set_html("<button>0</button>");
	let first = island.render(&ctx, &Props::new(), &[] as &[&str]).await.unwrap();
	let second = island.render(&ctx, &Props::new(), &[] as &[&str]).await.unwrap();
	r.set_html("<button>1</button>");
	let third = island.render(&ctx, &Props::new(), &[] as &[&str]).await.unwrap();

	assert_eq!(first, second);
	assert_eq!(anchor_of(&first), anchor_of(&second));
	assert_ne!(anchor_of(&first), anchor_of(&third));
	assert_eq!(anchor_of(&first).len(), 12);
}

#[tokio::test]
async fn test_hydrated_output_shape() {
	let r = TestRenderer::new("r", CheckBehavior::Accept);
	r.set_html("<button>0</button>");
	let ctx = context(&[r.clone()]);

	let html = hydrated("Counter", HydrateStrategy::Load)
		.render(&ctx, &Props::new().with("start", 0), &[] as &[&str])
		.await
		.unwrap();
	let id = anchor_of(&html).to_string();

	assert_eq!(html.matches("<astro-root uid=\"").count(), 1);
	assert_eq!(html.matches("<script type=\"module\">").count(), 1);
	assert!(html.starts_with(&format!("<astro-root uid=\"{id}\"><button>0</button></astro-root>\n<script type=\"module\">\n")));
	assert!(html.contains("import setup from \"/_astro_frontend/hydrate/load.js\";"));
	assert!(html.contains(&format!("setup(\"{id}\", async () => {{")));
	assert!(html.contains("import(\"/src/components/Counter.jsx\").then((mod) => mod[\"default\"])"));
	assert!(html.contains("import(\"@test/r/client.js\")"));
	assert!(html.contains("hydrate(el)(Component, {\"start\": 0}, children)"));
	assert!(html.ends_with("</script>"));
}

#[rstest]
#[case(HydrateStrategy::Load, "/_astro_frontend/hydrate/load.js")]
#[case(HydrateStrategy::Idle, "/_astro_frontend/hydrate/idle.js")]
#[case(HydrateStrategy::Visible, "/_astro_frontend/hydrate/visible.js")]
#[tokio::test]
async fn test_strategy_selects_loader(#[case] strategy: HydrateStrategy, #[case] loader: &str) {
	let r = TestRenderer::new("r", CheckBehavior::Accept);
	let ctx = context(&[r]);

	let html = hydrated("Counter", strategy)
		.render(&ctx, &Props::new(), &[] as &[&str])
		.await
		.unwrap();

	assert!(html.contains(&format!("import setup from \"{loader}\";")));
}

#[tokio::test]
async fn test_self_hydrating_renderer_receives_component_url() {
	let r = TestRenderer::self_hydrating("solid", CheckBehavior::Accept);
	let ctx = context(&[r]);

	let html = hydrated("Counter", HydrateStrategy::Idle)
		.render(&ctx, &Props::new().with("label", "hi"), &[] as &[&str])
		.await
		.unwrap();

	assert!(html.contains("const { default: hydrate } = await import(\"@test/solid/client.js\");"));
	assert!(html.contains("hydrate(el, \"/src/components/Counter.jsx\")({\"label\": \"hi\"}, children)"));
	assert!(!html.contains("Promise.all"));
}

#[tokio::test]
async fn test_hydration_without_url_fails() {
	let r = TestRenderer::new("r", CheckBehavior::Accept);
	let ctx = context(&[r]);
	let island = IslandComponent::new(
		Some(ComponentRef::named("Counter")),
		ComponentProps::new("Counter").hydrate(HydrateStrategy::Load),
	)
	.unwrap();

	let err = island
		.render(&ctx, &Props::new(), &[] as &[&str])
		.await
		.unwrap_err();

	assert!(matches!(err, IslandsError::Hydration(_)));
}

#[tokio::test]
async fn test_single_user_renderer_is_used_as_fallback() {
	let only = TestRenderer::new("only", CheckBehavior::Decline);
	let ctx = context(&[only.clone()]);
	let island =
		IslandComponent::new(Some(ComponentRef::named("Counter")), ComponentProps::new("Counter"))
			.unwrap();

	let html = island
		.render(&ctx, &Props::new(), &[] as &[&str])
		.await
		.unwrap();

	assert_eq!(html, "<div data-renderer=\"only\"></div>");
	assert_eq!(only.renders(), 1);
}

#[tokio::test]
async fn test_two_declining_renderers_raise_resolution_error() {
	let a = TestRenderer::new("a", CheckBehavior::Decline);
	let b = TestRenderer::new("b", CheckBehavior::Decline);
	let ctx = context(&[a.clone(), b.clone()]);
	let island =
		IslandComponent::new(Some(ComponentRef::named("Counter")), ComponentProps::new("MyCounter"))
			.unwrap();

	let err = island
		.render(&ctx, &Props::new(), &[] as &[&str])
		.await
		.unwrap_err();

	assert!(matches!(err, IslandsError::Resolution { .. }));
	assert_eq!(
		err.to_string(),
		"No renderer found for MyCounter! Did you forget to add a renderer to your config?"
	);
	assert_eq!((a.renders(), b.renders()), (0, 0));
}

#[tokio::test]
async fn test_resolution_error_falls_back_to_component_name() {
	let a = TestRenderer::new("a", CheckBehavior::Decline);
	let b = TestRenderer::new("b", CheckBehavior::Decline);
	let ctx = context(&[a, b]);
	let island =
		IslandComponent::new(Some(ComponentRef::named("Counter")), ComponentProps::default())
			.unwrap();

	let err = island
		.render(&ctx, &Props::new(), &[] as &[&str])
		.await
		.unwrap_err();

	assert!(err.to_string().contains("Counter"));
}

#[tokio::test]
async fn test_render_error_propagates_unchanged() {
	let r = TestRenderer::new("r", CheckBehavior::Accept);
	r.fail_renders();
	let ctx = context(&[r]);
	let island =
		IslandComponent::new(Some(ComponentRef::named("Counter")), ComponentProps::new("Counter"))
			.unwrap();

	let err = island
		.render(&ctx, &Props::new(), &[] as &[&str])
		.await
		.unwrap_err();

	assert!(err.is_renderer_error());
	assert_eq!(err.to_string(), "r failed to render");
}

#[rstest]
fn test_missing_component_is_rejected() {
	let err = IslandComponent::new(None, ComponentProps::new("Counter")).unwrap_err();

	assert!(matches!(err, IslandsError::Validation(_)));
	assert!(err.to_string().contains("Counter"));
}

#[rstest]
#[case("div", false)]
#[case("my-element", true)]
fn test_tag_components_need_a_hyphen(#[case] tag: &str, #[case] accepted: bool) {
	let result = IslandComponent::new(Some(ComponentRef::tag(tag)), ComponentProps::new(tag));

	assert_eq!(result.is_ok(), accepted);
	if let Err(err) = result {
		assert!(matches!(err, IslandsError::Validation(_)));
	}
}

#[tokio::test]
async fn test_custom_element_renders_as_html() {
	let ctx = IslandsContext::new().unwrap();
	let island = IslandComponent::new(
		Some(ComponentRef::tag("my-element")),
		ComponentProps::new("my-element"),
	)
	.unwrap();

	let html = island
		.render(
			&ctx,
			&Props::new().with("open", true).with("hidden", false).with("count", 3),
			&["<span>a</span>", "<span>b</span>"],
		)
		.await
		.unwrap();

	assert_eq!(
		html,
		"<my-element open count=\"3\"><span>a</span>\n<span>b</span></my-element>"
	);
}

#[tokio::test]
async fn test_settings_from_file_drive_output() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(
		file,
		"[islands]\nhydrate_base_path = \"/static/islands/\"\nroot_tag = \"island-root\"\nanchor_id_length = 8"
	)
	.unwrap();
	let settings = IslandsSettings::from_file(file.path()).unwrap();

	let r = TestRenderer::new("r", CheckBehavior::Accept);
	let ctx = IslandsContext::builder()
		.settings(settings)
		.renderer(r.source(), r.clone() as ArcRenderer)
		.build()
		.unwrap();

	let html = hydrated("Counter", HydrateStrategy::Visible)
		.render(&ctx, &Props::new(), &[] as &[&str])
		.await
		.unwrap();

	assert!(html.starts_with("<island-root uid=\""));
	assert_eq!(anchor_of(&html).len(), 8);
	assert!(html.contains("import setup from \"/static/islands/visible.js\";"));
}

#[tokio::test]
async fn test_hydrated_props_keep_javascript_meaning() {
	use chrono::TimeZone;

	let r = TestRenderer::new("r", CheckBehavior::Accept);
	let ctx = context(&[r]);
	let when = chrono::Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
	let props = Props::new()
		.with("when", when)
		.with("id", PropValue::from(serde_json::json!(9007199254740993_i64)))
		.with("note", "</script>");

	let html = hydrated("Counter", HydrateStrategy::Load)
		.render(&ctx, &props, &[] as &[&str])
		.await
		.unwrap();

	assert!(html.contains(
		r#"{"when": new Date(253402300800000), "id": 9007199254740992, "note": "\u003C/script\u003E"}"#
	));
	assert_eq!(html.matches("</script>").count(), 1);
}
