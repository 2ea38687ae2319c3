//! Client hydration for Reinhardt islands.
//!
//! Once a component has been rendered on the server, this crate produces what
//! the browser needs to re-activate it:
//!
//! - [`anchor_id`]: a content-derived id tying markup to its script
//! - [`PropSerializer`] / [`JsLiteralSerializer`]: props encoded as JavaScript
//! - [`HydrationScriptGenerator`]: the anchored root plus module script
//! - [`FragmentStripper`]: cleanup of static, non-hydrated markup
//!
//! ## Client contract
//!
//! Generated scripts import `<hydrate_base_path>/<strategy>.js`. Its default
//! export is `setup(anchorId, asyncCallback)`; the callback performs the
//! dynamic imports and resolves to a binder `(element, children) => void`.

#![warn(missing_docs)]

pub mod anchor;
pub mod fragment;
pub mod script;
pub mod serializer;

pub use anchor::anchor_id;
pub use fragment::FragmentStripper;
pub use script::{HydratedMarkup, HydrationRequest, HydrationScriptGenerator};
pub use serializer::{JsLiteralSerializer, PropSerializer, js_string_literal};
