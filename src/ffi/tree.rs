//! Tree entry points. Subtrees compose by value: attaching a child
//! clones it into the parent, so freeing the child handle afterwards
//! cannot orphan the parent's copy.

use std::ffi::{c_char, c_int};

use crate::color::Color;
use crate::tree::{Tree, TreeEnumerator, TreeIndenter};

use super::handle::TREES;
use super::memory::tracked_cstring;
use super::renderer::render_context;
use super::{strings, validate};

fn mutate(handle: u64, f: impl FnOnce(Tree) -> Tree) -> u64 {
    match TREES.get(handle) {
        Some(tree) => TREES.register(f(tree)),
        None => 0,
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn NewTree() -> u64 {
    TREES.register(Tree::new())
}

/// Append a leaf child.
#[unsafe(no_mangle)]
pub extern "C" fn TreeAddChildValue(handle: u64, value: *const c_char) -> u64 {
    let value = strings::from_foreign(value);
    mutate(handle, |tree| tree.child_value(value))
}

/// Attach a copy of `child` under `parent`. Both handles must
/// resolve; the child handle remains valid and independent.
#[unsafe(no_mangle)]
pub extern "C" fn TreeAddChildTree(parent: u64, child: u64) -> u64 {
    let Some(child_tree) = TREES.get(child) else {
        return 0;
    };
    mutate(parent, |tree| tree.child_tree(child_tree))
}

/// Branch glyph kind: 0 default "├──/└──", 1 rounded "├──/╰──".
#[unsafe(no_mangle)]
pub extern "C" fn TreeSetEnumerator(handle: u64, kind: c_int) -> u64 {
    let Some(enumerator) = TreeEnumerator::from_code(kind) else {
        log::error!("tree-enumerator: unknown enumerator kind {kind}");
        return 0;
    };
    mutate(handle, |tree| tree.enumerator(enumerator))
}

/// Nesting prefix kind: 0 guide lines, 1 plain spaces.
#[unsafe(no_mangle)]
pub extern "C" fn TreeSetIndenter(handle: u64, kind: c_int) -> u64 {
    let Some(indenter) = TreeIndenter::from_code(kind) else {
        log::error!("tree-indenter: unknown indenter kind {kind}");
        return 0;
    };
    mutate(handle, |tree| tree.indenter(indenter))
}

/// Foreground color applied to node labels.
#[unsafe(no_mangle)]
pub extern "C" fn TreeSetItemStyle(handle: u64, color: *const c_char) -> u64 {
    let literal = strings::from_foreign(color);
    if let Err(e) = validate::color(&literal, "tree-item-style") {
        log::error!("{e}");
        return 0;
    }
    mutate(handle, |tree| tree.item_style(Color::Plain(literal)))
}

/// Render the tree. A missing handle yields the empty string,
/// untracked; a tree with no root and no children renders as
/// "(empty tree)".
#[unsafe(no_mangle)]
pub extern "C" fn RenderTree(handle: u64) -> *mut c_char {
    let Some(tree) = TREES.get(handle) else {
        return strings::to_foreign(String::new());
    };
    let rendered = if tree.is_empty() {
        "(empty tree)".to_string()
    } else {
        tree.render(render_context())
    };
    tracked_cstring(rendered, "rendered tree")
}

#[unsafe(no_mangle)]
pub extern "C" fn FreeTree(handle: u64) {
    TREES.remove(handle);
}
