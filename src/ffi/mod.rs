//! The C boundary.
//!
//! Everything under this module exists to let a foreign runtime drive
//! the library through flat C signatures: opaque u64 handles instead
//! of references, NUL-terminated strings instead of `&str`, 0/1
//! integers instead of `bool`. Entry points never panic across the
//! boundary; every failure collapses to a documented fallback (handle
//! 0, empty string, echoed input, or a fixed default) with an error
//! log carrying the detail.
//!
//! Exported symbols keep their foreign-facing PascalCase names, hence
//! the `non_snake_case` allowance at the crate root.

pub mod border;
pub mod color;
pub mod ctypes;
pub mod error;
pub mod handle;
pub mod layout;
pub mod list;
pub mod logging;
pub mod memory;
pub mod renderer;
pub mod strings;
pub mod style;
pub mod table;
pub mod tree;
pub mod validate;
