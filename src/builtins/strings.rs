use std::fmt::Write;

use super::number;
use crate::context::CallContext;
use crate::runtime::AstraRuntime;
use crate::value::Value;

/// Length of a vector, or the Unicode code-point count of a string (never
/// the byte count).
pub(crate) fn len(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    if ctx.num_args() != 1 {
        return Value::Undefined;
    }
    match ctx.arg(0) {
        Value::Vector(items) => number(items.len() as f64),
        Value::String(s) => number(s.chars().count() as f64),
        _ => Value::Undefined,
    }
}

/// Concatenates the rendering of every argument into one string.
pub(crate) fn str(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    let mut out = String::new();
    for i in 0..ctx.num_args() {
        let _ = write!(out, "{}", ctx.arg(i));
    }
    Value::String(out)
}
