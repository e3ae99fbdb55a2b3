//! # glaze
//!
//! Terminal text styling behind a C boundary.
//!
//! The library half is a declarative rendering engine: immutable
//! [`style::Style`] values, adaptive [`color::Color`] descriptors
//! quantized per terminal [`color::Profile`], border glyph sets, block
//! joins and placement, and list/table/tree builders.
//!
//! The [`ffi`] half flattens all of that into `extern "C"` entry
//! points for a foreign runtime: opaque u64 handles with copy-on-write
//! mutation, tracked boundary strings released via `FreeString`, and a
//! process-wide renderer singleton that anchors color resolution.
//!
//! ## Modules
//!
//! - [`color`] - profiles, palettes, descriptor resolution
//! - [`style`] - the immutable style value and its render pipeline
//! - [`border`] - border glyph catalog
//! - [`text`] - ANSI-aware measurement, wrapping, truncation
//! - [`layout`] - joins and whitespace placement
//! - [`list`] / [`table`] / [`tree`] - structured builders
//! - [`renderer`] - terminal capability detection
//! - [`ffi`] - the exported C surface

pub mod border;
pub mod color;
pub mod layout;
pub mod list;
pub mod renderer;
pub mod style;
pub mod table;
pub mod text;
pub mod tree;

#[allow(non_snake_case)]
pub mod ffi;

pub use border::Border;
pub use color::{Color, Profile, RenderContext};
pub use layout::Position;
pub use renderer::Renderer;
pub use style::Style;
