use super::number;
use crate::context::CallContext;
use crate::runtime::AstraRuntime;
use crate::value::Value;

pub(crate) fn min(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    extremum(ctx, true)
}

pub(crate) fn max(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    extremum(ctx, false)
}

/// Shared min/max scan. A single non-empty vector argument is reduced over
/// its own elements; otherwise the positional arguments form the candidate
/// list, seeded by a numeric first argument. The positional scan stops at the
/// first non-number argument and returns the best value seen up to it.
fn extremum(ctx: &dyn CallContext, keep_less: bool) -> Value {
    let n = ctx.num_args();
    if n == 0 {
        return Value::Undefined;
    }
    let first = ctx.arg(0);

    if n == 1 {
        if let Some(items) = first.as_vector() {
            let Some(seed) = items.first() else {
                return Value::Undefined;
            };
            let mut best = seed;
            for candidate in &items[1..] {
                let replace = if keep_less {
                    candidate < best
                } else {
                    candidate > best
                };
                if replace {
                    best = candidate;
                }
            }
            return best.clone();
        }
    }

    let Some(mut best) = first.as_number() else {
        return Value::Undefined;
    };
    for i in 1..n {
        let Some(x) = ctx.arg(i).as_number() else {
            break;
        };
        if (keep_less && x < best) || (!keep_less && x > best) {
            best = x;
        }
    }
    number(best)
}

pub(crate) fn norm(rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    if ctx.num_args() != 1 {
        return Value::Undefined;
    }
    let Some(items) = ctx.arg(0).as_vector() else {
        return Value::Undefined;
    };
    let mut sum = 0.0;
    for item in items {
        let Some(x) = item.as_number() else {
            rt.warn("norm() argument vector contains a non-number element".to_string());
            return Value::Undefined;
        };
        sum += x * x;
    }
    number(sum.sqrt())
}

pub(crate) fn cross(rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    if ctx.num_args() != 2 {
        return Value::Undefined;
    }
    let (Some(a), Some(b)) = (ctx.arg(0).as_vector(), ctx.arg(1).as_vector()) else {
        return Value::Undefined;
    };
    if a.len() != 3 || b.len() != 3 {
        rt.warn("cross() requires two 3-element vectors".to_string());
        return Value::Undefined;
    }
    let mut v0 = [0.0; 3];
    let mut v1 = [0.0; 3];
    for i in 0..3 {
        let (Some(x), Some(y)) = (a[i].as_number(), b[i].as_number()) else {
            rt.warn("cross() argument vector contains a non-number element".to_string());
            return Value::Undefined;
        };
        if x.is_nan() || y.is_nan() {
            rt.warn("cross() argument vector contains a NaN component".to_string());
            return Value::Undefined;
        }
        if x.is_infinite() || y.is_infinite() {
            rt.warn("cross() argument vector contains an infinite component".to_string());
            return Value::Undefined;
        }
        v0[i] = x;
        v1[i] = y;
    }
    Value::Vector(vec![
        number(v0[1] * v1[2] - v0[2] * v1[1]),
        number(v0[2] * v1[0] - v0[0] * v1[2]),
        number(v0[0] * v1[1] - v0[1] * v1[0]),
    ])
}

/// Flattens one level: vector arguments contribute their elements, anything
/// else is appended as a single element, in call order.
pub(crate) fn concat(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    let mut result = Vec::new();
    for i in 0..ctx.num_args() {
        match ctx.arg(i) {
            Value::Vector(items) => result.extend(items.iter().cloned()),
            other => result.push(other.clone()),
        }
    }
    Value::Vector(result)
}
