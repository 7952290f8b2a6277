use std::f64::consts::FRAC_1_SQRT_2;

use super::{binary_numbers, number, unary_number};
use crate::context::CallContext;
use crate::runtime::AstraRuntime;
use crate::value::Value;

/// Degree inputs at or beyond 360·2⁵² cannot be reduced to [0,360) without
/// losing every significant bit of the mantissa.
const REDUCTION_LIMIT: f64 = (1u64 << 26) as f64 * 360.0 * (1u64 << 26) as f64;

pub(crate) fn sin(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    match unary_number(ctx) {
        Some(x) => number(sin_degrees(x)),
        None => Value::Undefined,
    }
}

pub(crate) fn cos(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    match unary_number(ctx) {
        Some(x) => number(cos_degrees(x)),
        None => Value::Undefined,
    }
}

pub(crate) fn tan(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    unary_number(ctx).map_or(Value::Undefined, |x| number(x.to_radians().tan()))
}

pub(crate) fn asin(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    unary_number(ctx).map_or(Value::Undefined, |x| number(x.asin().to_degrees()))
}

pub(crate) fn acos(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    unary_number(ctx).map_or(Value::Undefined, |x| number(x.acos().to_degrees()))
}

pub(crate) fn atan(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    unary_number(ctx).map_or(Value::Undefined, |x| number(x.atan().to_degrees()))
}

pub(crate) fn atan2(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    match binary_numbers(ctx) {
        Some((y, x)) => number(y.atan2(x).to_degrees()),
        None => Value::Undefined,
    }
}

/// Reduces a finite angle to [0,360); NaN, ±∞, and angles past the
/// reduction limit fall through to None. The in-range tests are phrased
/// positively so NaN fails them.
fn reduce_degrees(x: f64) -> Option<f64> {
    if x >= 0.0 && x < 360.0 {
        Some(x)
    } else if x > -REDUCTION_LIMIT && x < REDUCTION_LIMIT {
        Some(x - 360.0 * (x / 360.0).floor())
    } else {
        None
    }
}

// Folds across 180° and 90° so a single octant is evaluated, returning exact
// rationals at the common angles (sin 30° = 1/2, sin 45° = √2/2).
fn sin_degrees(x: f64) -> f64 {
    let Some(mut x) = reduce_degrees(x) else {
        return f64::NAN;
    };
    let oppose = x >= 180.0;
    if oppose {
        x -= 180.0;
    }
    if x > 90.0 {
        x = 180.0 - x;
    }
    let folded = if x < 45.0 {
        if x == 30.0 {
            0.5
        } else {
            x.to_radians().sin()
        }
    } else if x == 45.0 {
        FRAC_1_SQRT_2
    } else {
        (90.0 - x).to_radians().cos()
    };
    if oppose {
        -folded
    } else {
        folded
    }
}

fn cos_degrees(x: f64) -> f64 {
    let Some(mut x) = reduce_degrees(x) else {
        return f64::NAN;
    };
    let mut oppose = x >= 180.0;
    if oppose {
        x -= 180.0;
    }
    if x > 90.0 {
        x = 180.0 - x;
        oppose = !oppose;
    }
    let folded = if x > 45.0 {
        if x == 60.0 {
            0.5
        } else {
            (90.0 - x).to_radians().sin()
        }
    } else if x == 45.0 {
        FRAC_1_SQRT_2
    } else {
        x.to_radians().cos()
    };
    if oppose {
        -folded
    } else {
        folded
    }
}
