use super::number;
use crate::context::CallContext;
use crate::runtime::AstraRuntime;
use crate::value::Value;

/// Piecewise-linear interpolation over a table of (position, value) pairs.
///
/// The table does not have to be sorted: one scan keeps the nearest bracket
/// on each side of the query, rows that fail to decompose into a numeric
/// pair are skipped, and queries outside the bracketed range clamp to the
/// nearest endpoint value.
pub(crate) fn lookup(_rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    if ctx.num_args() < 2 {
        return Value::Undefined;
    }
    let Some(p) = ctx.arg(0).as_number() else {
        return Value::Undefined;
    };
    let Some(rows) = ctx.arg(1).as_vector() else {
        return Value::Undefined;
    };
    let Some((mut low_p, mut low_v)) = rows.first().and_then(Value::get_vec2) else {
        return Value::Undefined;
    };
    let (mut high_p, mut high_v) = (low_p, low_v);

    for row in &rows[1..] {
        let Some((this_p, this_v)) = row.get_vec2() else {
            continue;
        };
        if this_p <= p && (this_p > low_p || low_p > p) {
            low_p = this_p;
            low_v = this_v;
        }
        if this_p >= p && (this_p < high_p || high_p < p) {
            high_p = this_p;
            high_v = this_v;
        }
    }
    if p <= low_p {
        return number(high_v);
    }
    if p >= high_p {
        return number(low_v);
    }
    let f = (p - low_p) / (high_p - low_p);
    number(high_v * f + low_v * (1.0 - f))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(p: f64, v: f64) -> Value {
        Value::Vector(vec![Value::Number(p), Value::Number(v)])
    }

    fn call(p: f64, table: Value) -> Value {
        let runtime = AstraRuntime::new();
        lookup(&runtime, &[Value::Number(p), table])
    }

    fn table() -> Value {
        // Deliberately unsorted.
        Value::Vector(vec![pair(10.0, 100.0), pair(0.0, 0.0), pair(20.0, 400.0)])
    }

    #[test]
    fn exact_at_table_points() {
        assert_eq!(call(0.0, table()), Value::Number(0.0));
        assert_eq!(call(10.0, table()), Value::Number(100.0));
        assert_eq!(call(20.0, table()), Value::Number(400.0));
    }

    #[test]
    fn linear_between_points() {
        assert_eq!(call(5.0, table()), Value::Number(50.0));
        assert_eq!(call(15.0, table()), Value::Number(250.0));
    }

    #[test]
    fn clamps_outside_the_range() {
        assert_eq!(call(-5.0, table()), Value::Number(0.0));
        assert_eq!(call(25.0, table()), Value::Number(400.0));
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let table = Value::Vector(vec![
            pair(0.0, 0.0),
            Value::String("noise".into()),
            Value::Vector(vec![Value::Number(1.0)]),
            pair(10.0, 100.0),
        ]);
        assert_eq!(call(5.0, table), Value::Number(50.0));
    }

    #[test]
    fn malformed_input_is_undefined() {
        let runtime = AstraRuntime::new();
        assert!(lookup(&runtime, &[Value::Number(1.0)]).is_undefined());
        assert!(call(1.0, Value::Vector(Vec::new())).is_undefined());
        assert!(call(1.0, Value::Vector(vec![Value::Number(3.0)])).is_undefined());
        let bad_first = Value::Vector(vec![Value::String("x".into()), pair(0.0, 1.0)]);
        assert!(call(1.0, bad_first).is_undefined());
    }
}
