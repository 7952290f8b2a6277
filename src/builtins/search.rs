use super::number;
use crate::context::CallContext;
use crate::runtime::AstraRuntime;
use crate::value::Value;

/// `search(needle, haystack, returns_per_match = 1, index_col = 0)`.
///
/// Matching is glyph-based: string needles and haystacks are walked by
/// Unicode code point, never by byte, and every reported position counts
/// code points. A `returns_per_match` of 0 means unlimited.
pub(crate) fn search(rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    if ctx.num_args() < 2 {
        return Value::Undefined;
    }
    let needle = ctx.arg(0);
    let haystack = ctx.arg(1);
    let per_match = optional_index(ctx, 2, 1);
    let index_col = optional_index(ctx, 3, 0);

    match needle {
        Value::Number(_) => {
            let rows = haystack.as_vector().unwrap_or(&[]);
            let mut results = Vec::new();
            let mut match_count = 0;
            for (j, row) in rows.iter().enumerate() {
                if row_matches(needle, row, index_col) {
                    results.push(number(j as f64));
                    match_count += 1;
                    if per_match != 0 && match_count >= per_match {
                        break;
                    }
                }
            }
            Value::Vector(results)
        }
        Value::String(text) => match haystack {
            Value::String(table) => Value::Vector(search_string(rt, text, table, per_match)),
            _ => Value::Vector(search_string_table(
                rt,
                text,
                haystack.as_vector().unwrap_or(&[]),
                per_match,
                index_col,
            )),
        },
        Value::Vector(needles) => {
            let rows = haystack.as_vector().unwrap_or(&[]);
            let mut results = Vec::new();
            for needle in needles {
                let mut matches = Vec::new();
                let mut match_count = 0;
                for (j, row) in rows.iter().enumerate() {
                    if !row_matches(needle, row, index_col) {
                        continue;
                    }
                    match_count += 1;
                    if per_match == 1 {
                        results.push(number(j as f64));
                        break;
                    }
                    matches.push(number(j as f64));
                    if per_match > 1 && match_count >= per_match {
                        break;
                    }
                }
                if per_match == 1 && match_count == 0 {
                    match needle {
                        Value::Number(n) => {
                            rt.warn(format!("search term not found: {}", number(*n)));
                        }
                        Value::String(s) => rt.warn(format!("search term not found: \"{s}\"")),
                        _ => {}
                    }
                    // Unlike the string-needle path, an unmatched vector
                    // element still contributes an empty sub-list.
                    results.push(Value::Vector(matches));
                } else if per_match != 1 {
                    results.push(Value::Vector(matches));
                }
            }
            Value::Vector(results)
        }
        other => {
            rt.warn(format!("search: none performed on input {other}"));
            Value::Undefined
        }
    }
}

/// Reads an optional non-negative index argument; absent slots use
/// `default`, and non-numbers degrade to 0.
fn optional_index(ctx: &dyn CallContext, slot: usize, default: usize) -> usize {
    if ctx.num_args() <= slot {
        return default;
    }
    ctx.arg(slot).as_number().unwrap_or(0.0) as usize
}

/// A haystack row matches either as a whole (column 0 only) or through its
/// `index_col` element when the row is wide enough.
fn row_matches(needle: &Value, row: &Value, index_col: usize) -> bool {
    if index_col == 0 && needle == row {
        return true;
    }
    row.as_vector()
        .is_some_and(|columns| index_col < columns.len() && *needle == columns[index_col])
}

fn search_string(rt: &AstraRuntime, needle: &str, haystack: &str, per_match: usize) -> Vec<Value> {
    let glyphs: Vec<char> = haystack.chars().collect();
    let mut results = Vec::new();
    for ch in needle.chars() {
        let mut matches = Vec::new();
        let mut match_count = 0;
        for (j, glyph) in glyphs.iter().copied().enumerate() {
            if glyph != ch {
                continue;
            }
            match_count += 1;
            if per_match == 1 {
                results.push(number(j as f64));
                break;
            }
            matches.push(number(j as f64));
            if per_match > 1 && match_count >= per_match {
                break;
            }
        }
        if match_count == 0 {
            rt.warn(format!("search term not found: \"{ch}\""));
        }
        if per_match != 1 {
            results.push(Value::Vector(matches));
        }
    }
    results
}

/// Table variant: each needle glyph is matched against the first glyph of
/// row[`index_col`] rendered as text; rows missing the column never match.
fn search_string_table(
    rt: &AstraRuntime,
    needle: &str,
    rows: &[Value],
    per_match: usize,
    index_col: usize,
) -> Vec<Value> {
    let leading: Vec<Option<char>> = rows
        .iter()
        .map(|row| {
            row.as_vector()
                .and_then(|columns| columns.get(index_col))
                .and_then(|cell| cell.to_string().chars().next())
        })
        .collect();
    let mut results = Vec::new();
    for ch in needle.chars() {
        let mut matches = Vec::new();
        let mut match_count = 0;
        for (j, glyph) in leading.iter().enumerate() {
            if *glyph != Some(ch) {
                continue;
            }
            match_count += 1;
            if per_match == 1 {
                results.push(number(j as f64));
                break;
            }
            matches.push(number(j as f64));
            if per_match > 1 && match_count >= per_match {
                break;
            }
        }
        if match_count == 0 {
            rt.warn(format!("search term not found: \"{ch}\""));
        }
        if per_match != 1 {
            results.push(Value::Vector(matches));
        }
    }
    results
}
