use super::{binary_numbers, number, unary_number};
use crate::context::CallContext;
use crate::runtime::AstraRuntime;
use crate::value::Value;

pub(crate) fn abs(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    match unary_number(ctx) {
        Some(x) => number(x.abs()),
        None => Value::Undefined,
    }
}

/// −1, 0, or +1 with an exact zero test (no epsilon tolerance).
pub(crate) fn sign(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    match unary_number(ctx) {
        Some(x) if x < 0.0 => number(-1.0),
        Some(x) if x > 0.0 => number(1.0),
        Some(_) => number(0.0),
        None => Value::Undefined,
    }
}

pub(crate) fn round(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    unary_number(ctx).map_or(Value::Undefined, |x| number(x.round()))
}

pub(crate) fn ceil(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    unary_number(ctx).map_or(Value::Undefined, |x| number(x.ceil()))
}

pub(crate) fn floor(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    unary_number(ctx).map_or(Value::Undefined, |x| number(x.floor()))
}

pub(crate) fn sqrt(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    unary_number(ctx).map_or(Value::Undefined, |x| number(x.sqrt()))
}

pub(crate) fn exp(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    unary_number(ctx).map_or(Value::Undefined, |x| number(x.exp()))
}

pub(crate) fn pow(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    match binary_numbers(ctx) {
        Some((base, exponent)) => number(base.powf(exponent)),
        None => Value::Undefined,
    }
}

/// One argument: base-10 logarithm. Two arguments: the first becomes the
/// base. Both forms compute `ln(y)/ln(base)`.
pub(crate) fn log(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    let n = ctx.num_args();
    if n != 1 && n != 2 {
        return Value::Undefined;
    }
    let Some(first) = ctx.arg(0).as_number() else {
        return Value::Undefined;
    };
    let (base, y) = if n == 2 {
        match ctx.arg(1).as_number() {
            Some(second) => (first, second),
            None => return Value::Undefined,
        }
    } else {
        (10.0, first)
    };
    number(y.ln() / base.ln())
}

pub(crate) fn ln(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    unary_number(ctx).map_or(Value::Undefined, |x| number(x.ln()))
}
