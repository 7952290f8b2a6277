use super::number;
use crate::context::CallContext;
use crate::runtime::AstraRuntime;
use crate::value::Value;

/// `rands(min, max, count, seed?)` — uniform samples from [min, max).
///
/// With a seed the deterministic stream is reseeded and drawn; without one
/// the ambient stream is drawn. Equal bounds short-circuit to exact copies
/// without touching either stream, and non-finite bounds degrade to NaN
/// entries rather than sampling.
pub(crate) fn rands(rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    let n = ctx.num_args();
    if n != 3 && n != 4 {
        return Value::Undefined;
    }
    let Some(a) = ctx.arg(0).as_number() else {
        return Value::Undefined;
    };
    let Some(b) = ctx.arg(1).as_number() else {
        return Value::Undefined;
    };
    let Some(count) = ctx.arg(2).as_number() else {
        return Value::Undefined;
    };
    let (min, max) = if b < a { (b, a) } else { (a, b) };
    let count = (count as i64).max(0) as usize;

    let deterministic = if n == 4 {
        let Some(seed) = ctx.arg(3).as_number() else {
            return Value::Undefined;
        };
        // Seeds round-trip through u32, matching the narrowing the script
        // language documents.
        rt.reseed_deterministic(u64::from(seed as u32));
        true
    } else {
        false
    };

    if min == max {
        return Value::Vector(vec![number(min); count]);
    }
    if !min.is_finite() || !max.is_finite() {
        return Value::Vector(vec![number(f64::NAN); count]);
    }
    let samples = rt.sample_uniform(deterministic, min, max, count);
    Value::Vector(samples.into_iter().map(number).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(runtime: &AstraRuntime, args: &dyn CallContext) -> Value {
        rands(runtime, args)
    }

    fn args(min: f64, max: f64, count: f64, seed: Option<f64>) -> Vec<Value> {
        let mut out = vec![
            Value::Number(min),
            Value::Number(max),
            Value::Number(count),
        ];
        if let Some(seed) = seed {
            out.push(Value::Number(seed));
        }
        out
    }

    #[test]
    fn equal_bounds_return_exact_copies() {
        let runtime = AstraRuntime::new();
        let result = call(&runtime, &args(2.5, 2.5, 5.0, Some(42.0)));
        assert_eq!(result, Value::Vector(vec![Value::Number(2.5); 5]));
    }

    #[test]
    fn same_seed_reproduces_the_sequence() {
        let first = call(&AstraRuntime::new(), &args(0.0, 1.0, 8.0, Some(42.0)));
        let second = call(&AstraRuntime::new(), &args(0.0, 1.0, 8.0, Some(42.0)));
        assert_eq!(first, second);

        let other_seed = call(&AstraRuntime::new(), &args(0.0, 1.0, 8.0, Some(43.0)));
        assert_ne!(first, other_seed);
    }

    #[test]
    fn fractional_seeds_truncate_like_integer_seeds() {
        let runtime = AstraRuntime::new();
        let truncated = call(&runtime, &args(0.0, 1.0, 4.0, Some(42.9)));
        let integral = call(&runtime, &args(0.0, 1.0, 4.0, Some(42.0)));
        assert_eq!(truncated, integral);
    }

    #[test]
    fn samples_stay_inside_the_swapped_bounds() {
        let runtime = AstraRuntime::new();
        let Value::Vector(samples) = call(&runtime, &args(10.0, -10.0, 100.0, None)) else {
            panic!("expected a vector");
        };
        assert_eq!(samples.len(), 100);
        for sample in samples {
            let Value::Number(x) = sample else {
                panic!("expected numbers");
            };
            assert!((-10.0..10.0).contains(&x));
        }
    }

    #[test]
    fn count_truncates_and_clamps() {
        let runtime = AstraRuntime::new();
        let Value::Vector(samples) = call(&runtime, &args(0.0, 1.0, 3.9, Some(1.0))) else {
            panic!("expected a vector");
        };
        assert_eq!(samples.len(), 3);
        assert_eq!(
            call(&runtime, &args(0.0, 1.0, -2.0, None)),
            Value::Vector(Vec::new())
        );
    }

    #[test]
    fn bad_arity_or_types_degrade_silently() {
        let runtime = AstraRuntime::new();
        assert!(call(&runtime, &args(0.0, 1.0, 1.0, None)[..2].to_vec()).is_undefined());
        let mut five = args(0.0, 1.0, 1.0, Some(7.0));
        five.push(Value::Number(9.0));
        assert!(call(&runtime, &five).is_undefined());
        let bad = [
            Value::Number(0.0),
            Value::String("1".into()),
            Value::Number(3.0),
        ];
        assert!(call(&runtime, &bad).is_undefined());
    }

    #[test]
    fn non_finite_bounds_produce_nan_entries() {
        let runtime = AstraRuntime::new();
        let Value::Vector(samples) = call(&runtime, &args(0.0, f64::INFINITY, 2.0, None)) else {
            panic!("expected a vector");
        };
        assert_eq!(samples.len(), 2);
        assert!(samples
            .iter()
            .all(|v| matches!(v, Value::Number(n) if n.is_nan())));
    }
}
