//! Renderer resolution: ordering, error forgiveness and caching.

use std::sync::Arc;

use reinhardt_islands::prelude::*;
use reinhardt_islands_integration_tests::{CheckBehavior, TestRenderer, context};
use rstest::rstest;

#[tokio::test]
async fn test_cached_renderer_is_returned_even_if_checks_change() {
	let a = TestRenderer::new("a", CheckBehavior::Decline);
	let b = TestRenderer::new("b", CheckBehavior::Accept);
	let ctx = context(&[a.clone(), b.clone()]);
	let component = ComponentRef::named("Counter");

	let first = ctx
		.resolver()
		.resolve(&component, &Props::new(), "")
		.await
		.unwrap()
		.unwrap();
	assert_eq!(first.name(), "b");

	a.set_behavior(CheckBehavior::Accept);
	b.set_behavior(CheckBehavior::Fail("b changed its mind"));

	for _ in 0..3 {
		let again = ctx
			.resolver()
			.resolve(&component.clone(), &Props::new(), "")
			.await
			.unwrap()
			.unwrap();
		assert!(Arc::ptr_eq(&first, &again));
	}
	assert_eq!((a.checks(), b.checks()), (1, 1));
}

#[tokio::test]
async fn test_check_error_is_forgiven_when_later_renderer_matches() {
	let a = TestRenderer::new("a", CheckBehavior::Fail("a cannot tell"));
	let b = TestRenderer::new("b", CheckBehavior::Accept);
	let ctx = context(&[a.clone(), b.clone()]);

	let resolved = ctx
		.resolver()
		.resolve(&ComponentRef::named("Counter"), &Props::new(), "")
		.await
		.unwrap()
		.unwrap();

	assert_eq!(resolved.name(), "b");
	assert_eq!(resolved.source(), "@test/b/client.js");
	assert_eq!(a.checks(), 1);
}

#[tokio::test]
async fn test_check_error_is_returned_when_nothing_matches() {
	let a = TestRenderer::new("a", CheckBehavior::Fail("a cannot tell"));
	let ctx = context(&[a]);

	let err = ctx
		.resolver()
		.resolve(&ComponentRef::named("Counter"), &Props::new(), "")
		.await
		.unwrap_err();

	assert!(err.is_renderer_error());
	assert_eq!(err.to_string(), "a cannot tell");
	assert!(ctx.cache().is_empty());
}

#[tokio::test]
async fn test_first_of_several_errors_is_returned() {
	let a = TestRenderer::new("a", CheckBehavior::Fail("first"));
	let b = TestRenderer::new("b", CheckBehavior::Fail("second"));
	let ctx = context(&[a, b.clone()]);

	let err = ctx
		.resolver()
		.resolve(&ComponentRef::named("Counter"), &Props::new(), "")
		.await
		.unwrap_err();

	assert_eq!(err.renderer_error().unwrap().to_string(), "first");
	assert_eq!(b.checks(), 1);
}

#[tokio::test]
async fn test_checks_after_match_do_not_run() {
	let a = TestRenderer::new("a", CheckBehavior::Accept);
	let b = TestRenderer::new("b", CheckBehavior::Accept);
	let ctx = context(&[a.clone(), b.clone()]);

	let resolved = ctx
		.resolver()
		.resolve(&ComponentRef::named("Counter"), &Props::new(), "")
		.await
		.unwrap()
		.unwrap();

	assert_eq!(resolved.name(), "a");
	assert_eq!(b.checks(), 0);
}

#[rstest]
#[case(CheckBehavior::Accept)]
#[case(CheckBehavior::Decline)]
#[case(CheckBehavior::Fail("never asked"))]
#[tokio::test]
async fn test_custom_elements_go_to_builtin_renderer(#[case] behavior: CheckBehavior) {
	let a = TestRenderer::new("a", behavior);
	let ctx = context(&[a.clone()]);

	let resolved = ctx
		.resolver()
		.resolve(&ComponentRef::tag("my-element"), &Props::new(), "")
		.await
		.unwrap()
		.unwrap();

	assert!(resolved.is_builtin());
	assert_eq!(resolved.source(), "");
	assert_eq!(a.checks(), 0);
}

#[tokio::test]
async fn test_replacing_renderers_forgets_cached_resolutions() {
	let a = TestRenderer::new("a", CheckBehavior::Accept);
	let b = TestRenderer::new("b", CheckBehavior::Accept);
	let mut ctx = context(&[a]);
	let component = ComponentRef::named("Counter");

	ctx.resolver()
		.resolve(&component, &Props::new(), "")
		.await
		.unwrap();
	ctx.set_renderers([b.source()], [b.clone() as ArcRenderer])
		.unwrap();

	let resolved = ctx
		.resolver()
		.resolve(&component, &Props::new(), "")
		.await
		.unwrap()
		.unwrap();
	assert_eq!(resolved.name(), "b");
}
