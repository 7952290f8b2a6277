//! The builtin function catalogue.
//!
//! Every implementation re-derives its own argument contract at call time:
//! wrong arity or a wrong argument variant degrades silently to
//! [`Value::Undefined`]; domain and structural violations additionally emit
//! one warning through the runtime's diagnostic sink. No builtin panics.

mod aggregate;
mod lookup;
mod meta;
mod random;
mod scalar;
mod search;
mod strings;
mod trig;

use crate::context::CallContext;
use crate::registry::Builtins;
use crate::runtime::Feature;
use crate::value::Value;

/// Populates `registry` with every named builtin.
pub fn register_all(registry: &mut Builtins) {
    registry.register("abs", scalar::abs);
    registry.register("sign", scalar::sign);
    registry.register("round", scalar::round);
    registry.register("ceil", scalar::ceil);
    registry.register("floor", scalar::floor);
    registry.register("pow", scalar::pow);
    registry.register("sqrt", scalar::sqrt);
    registry.register("exp", scalar::exp);
    registry.register("log", scalar::log);
    registry.register("ln", scalar::ln);
    registry.register("sin", trig::sin);
    registry.register("cos", trig::cos);
    registry.register("tan", trig::tan);
    registry.register("asin", trig::asin);
    registry.register("acos", trig::acos);
    registry.register("atan", trig::atan);
    registry.register("atan2", trig::atan2);
    registry.register("min", aggregate::min);
    registry.register("max", aggregate::max);
    registry.register("norm", aggregate::norm);
    registry.register("cross", aggregate::cross);
    registry.register_gated("concat", aggregate::concat, Feature::Concat);
    registry.register("len", strings::len);
    registry.register("str", strings::str);
    registry.register("search", search::search);
    registry.register("lookup", lookup::lookup);
    registry.register("rands", random::rands);
    registry.register("version", meta::version);
    registry.register("version_num", meta::version_num);
    registry.register("parent_module", meta::parent_module);
}

/// Single-argument numeric gate shared by the scalar and trig entry points.
fn unary_number(ctx: &dyn CallContext) -> Option<f64> {
    if ctx.num_args() != 1 {
        return None;
    }
    ctx.arg(0).as_number()
}

/// Two-argument numeric gate.
fn binary_numbers(ctx: &dyn CallContext) -> Option<(f64, f64)> {
    if ctx.num_args() != 2 {
        return None;
    }
    Some((ctx.arg(0).as_number()?, ctx.arg(1).as_number()?))
}

fn number(n: f64) -> Value {
    Value::Number(n)
}
