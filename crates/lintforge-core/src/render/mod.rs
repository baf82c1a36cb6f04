//! Config rendering
//!
//! Generators describe *what* a config contains as a [`JsModule`] tree or a
//! serializable record. This module decides *how* it is written:
//! - [`js`]: ESM (`import`/`export default`) or CJS (`require`/`module.exports`)
//! - [`json`]: plain JSON documents (`.oxlintrc.json`, `package.json`)

pub mod js;
pub mod json;
pub mod node;

pub use js::render_module;
pub use json::to_json_string;
pub use node::{Import, JsModule, Node, Property};

/// Indentation width used for every generated file
pub const TAB_WIDTH: usize = 4;
