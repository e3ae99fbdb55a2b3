//! List entry points. Mutators are copy-on-write like styles: the
//! source list is untouched and the new handle carries the change.

use std::ffi::{c_char, c_int};

use crate::color::Color;
use crate::list::{Enumerator, List};

use super::handle::LISTS;
use super::memory::tracked_cstring;
use super::renderer::render_context;
use super::{strings, validate};

fn mutate(handle: u64, f: impl FnOnce(List) -> List) -> u64 {
    match LISTS.get(handle) {
        Some(list) => LISTS.register(f(list)),
        None => 0,
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn NewList() -> u64 {
    LISTS.register(List::new())
}

/// Append an item; the new handle holds the longer list.
#[unsafe(no_mangle)]
pub extern "C" fn ListAddItem(handle: u64, item: *const c_char) -> u64 {
    let item = strings::from_foreign(item);
    mutate(handle, |list| list.item(item))
}

/// Select the marker kind: 0 bullet, 1 dash, 2 alphabet, 3 arabic,
/// 4 roman. An unknown code returns the 0 sentinel.
#[unsafe(no_mangle)]
pub extern "C" fn ListSetEnumerator(handle: u64, kind: c_int) -> u64 {
    let Some(enumerator) = Enumerator::from_code(kind) else {
        log::error!("list-enumerator: unknown enumerator kind {kind}");
        return 0;
    };
    mutate(handle, |list| list.enumerator(enumerator))
}

/// Foreground color applied to each item's text.
#[unsafe(no_mangle)]
pub extern "C" fn ListSetItemStyle(handle: u64, color: *const c_char) -> u64 {
    let literal = strings::from_foreign(color);
    if let Err(e) = validate::color(&literal, "list-item-style") {
        log::error!("{e}");
        return 0;
    }
    mutate(handle, |list| list.item_style(Color::Plain(literal)))
}

/// Render against the ambient renderer. A missing handle yields the
/// empty string, untracked.
#[unsafe(no_mangle)]
pub extern "C" fn RenderList(handle: u64) -> *mut c_char {
    let Some(list) = LISTS.get(handle) else {
        return strings::to_foreign(String::new());
    };
    tracked_cstring(list.render(render_context()), "rendered list")
}

#[unsafe(no_mangle)]
pub extern "C" fn FreeList(handle: u64) {
    LISTS.remove(handle);
}
