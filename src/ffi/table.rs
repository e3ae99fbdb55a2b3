//! Table entry points. Header and row cells arrive as
//! `(*const *const c_char, count)` pairs; a null array or non-positive
//! count is a validation failure, not an empty row.

use std::ffi::{c_char, c_int};

use crate::table::{Table, TableBorder};

use super::handle::TABLES;
use super::memory::tracked_cstring;
use super::{strings, validate};

fn mutate(handle: u64, f: impl FnOnce(Table) -> Table) -> u64 {
    match TABLES.get(handle) {
        Some(table) => TABLES.register(f(table)),
        None => 0,
    }
}

/// Read a C string array into owned cells. `None` for null/empty
/// input; individual null entries read as empty cells.
fn read_cells(op: &'static str, cells: *const *const c_char, count: c_int) -> Option<Vec<String>> {
    if cells.is_null() || count <= 0 {
        log::error!("{op} received invalid cell array (count {count})");
        return None;
    }
    let raw = unsafe { std::slice::from_raw_parts(cells, count as usize) };
    Some(raw.iter().map(|&p| strings::from_foreign(p)).collect())
}

#[unsafe(no_mangle)]
pub extern "C" fn NewTable() -> u64 {
    TABLES.register(Table::new())
}

/// Replace the header row.
#[unsafe(no_mangle)]
pub extern "C" fn TableAddHeaders(handle: u64, headers: *const *const c_char, count: c_int) -> u64 {
    let Some(cells) = read_cells("table-headers", headers, count) else {
        return 0;
    };
    mutate(handle, |table| table.headers(cells))
}

/// Append a data row.
#[unsafe(no_mangle)]
pub extern "C" fn TableAddRow(handle: u64, row: *const *const c_char, count: c_int) -> u64 {
    let Some(cells) = read_cells("table-row", row, count) else {
        return 0;
    };
    mutate(handle, |table| table.row(cells))
}

/// Fix the rendered width in cells; columns stretch or shrink to fit.
#[unsafe(no_mangle)]
pub extern "C" fn TableSetWidth(handle: u64, width: c_int) -> u64 {
    if let Err(e) = validate::dimension(width, "table-width", "width") {
        log::error!("{e}");
        return 0;
    }
    mutate(handle, |table| table.width(width as usize))
}

/// Fix the rendered height in rows; data rows pad or truncate to fit.
#[unsafe(no_mangle)]
pub extern "C" fn TableSetHeight(handle: u64, height: c_int) -> u64 {
    if let Err(e) = validate::dimension(height, "table-height", "height") {
        log::error!("{e}");
        return 0;
    }
    mutate(handle, |table| table.height(height as usize))
}

/// Border kind: 0 normal, 1 rounded, 2 thick.
#[unsafe(no_mangle)]
pub extern "C" fn TableSetBorder(handle: u64, kind: c_int) -> u64 {
    let Some(border) = TableBorder::from_code(kind) else {
        log::error!("table-border: unknown border kind {kind}");
        return 0;
    };
    mutate(handle, |table| table.border(border))
}

/// Render the table. A missing handle yields the empty string,
/// untracked.
#[unsafe(no_mangle)]
pub extern "C" fn RenderTable(handle: u64) -> *mut c_char {
    let Some(table) = TABLES.get(handle) else {
        return strings::to_foreign(String::new());
    };
    tracked_cstring(table.render(), "rendered table")
}

#[unsafe(no_mangle)]
pub extern "C" fn FreeTable(handle: u64) {
    TABLES.remove(handle);
}
