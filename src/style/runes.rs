//! Per-rune styling for match highlighting.

use crate::color::RenderContext;

use super::Style;

/// Style individual runes of `text` by index.
///
/// Runes whose index appears in `indices` render with `matched`, the
/// rest with `unmatched`. Consecutive runs under the same style share
/// one escape pair, so highlighting "abc" entirely costs a single
/// prefix and reset.
pub fn style_runes(
    ctx: RenderContext,
    text: &str,
    indices: &[usize],
    matched: &Style,
    unmatched: &Style,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = String::new();
    let mut run_matched = false;

    for (i, ch) in text.chars().enumerate() {
        let is_match = indices.contains(&i);
        if i > 0 && is_match != run_matched {
            flush(&mut out, &mut run, run_matched, ctx, matched, unmatched);
        }
        run_matched = is_match;
        run.push(ch);
    }
    flush(&mut out, &mut run, run_matched, ctx, matched, unmatched);

    out
}

fn flush(
    out: &mut String,
    run: &mut String,
    is_match: bool,
    ctx: RenderContext,
    matched: &Style,
    unmatched: &Style,
) {
    if run.is_empty() {
        return;
    }
    let style = if is_match { matched } else { unmatched };
    out.push_str(&style.styled(ctx, run));
    run.clear();
}
