use super::number;
use crate::context::CallContext;
use crate::runtime::AstraRuntime;
use crate::value::Value;

/// Build version as a `[year, month]` or `[year, month, day]` vector.
pub(crate) fn version(rt: &AstraRuntime, _ctx: &dyn CallContext) -> Value {
    let build = rt.build_info();
    let mut parts = vec![number(f64::from(build.year)), number(f64::from(build.month))];
    if let Some(day) = build.day {
        parts.push(number(f64::from(day)));
    }
    Value::Vector(parts)
}

/// Version encoded as `year*10000 + month*100 + day`. With no argument the
/// runtime's own build version is encoded; with one argument, that value.
pub(crate) fn version_num(rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    let value = if ctx.num_args() == 0 {
        version(rt, ctx)
    } else {
        ctx.arg(0).clone()
    };
    let (year, month, day) = match value.get_vec3() {
        Some(parts) => parts,
        None => match value.get_vec2() {
            Some((year, month)) => (year, month, 0.0),
            None => return Value::Undefined,
        },
    };
    number(year * 10000.0 + month * 100.0 + day)
}

/// Identifier of the module `n` levels up the enclosing instantiation stack
/// (default 1, the direct parent).
pub(crate) fn parent_module(rt: &AstraRuntime, ctx: &dyn CallContext) -> Value {
    let levels = match ctx.num_args() {
        0 => 1.0,
        1 => match ctx.arg(0).as_number() {
            Some(levels) => levels,
            None => return Value::Undefined,
        },
        _ => return Value::Undefined,
    };
    let n = levels.trunc() as i64;
    if n < 0 {
        rt.warn(format!("negative parent module index ({n}) not allowed"));
        return Value::Undefined;
    }
    let depth = rt.module_stack().depth() as i64;
    if n >= depth {
        rt.warn(format!(
            "parent module index ({n}) greater than the number of modules on the stack"
        ));
        return Value::Undefined;
    }
    match rt.module_stack().frame_at((depth - 1 - n) as usize) {
        Some(frame) => Value::String(frame),
        None => Value::Undefined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{BuildInfo, RuntimeConfig};

    fn runtime_with_build(build: BuildInfo) -> AstraRuntime {
        AstraRuntime::with_config(RuntimeConfig::default().with_build(build))
    }

    #[test]
    fn version_reports_the_build_date() {
        let no_args: &[Value; 0] = &[];
        let runtime = runtime_with_build(BuildInfo::new(2019, 5, None));
        assert_eq!(
            version(&runtime, no_args),
            Value::Vector(vec![Value::Number(2019.0), Value::Number(5.0)])
        );
        assert_eq!(version_num(&runtime, no_args), Value::Number(20190500.0));

        let runtime = runtime_with_build(BuildInfo::new(2021, 1, Some(7)));
        assert_eq!(version_num(&runtime, no_args), Value::Number(20210107.0));
    }

    #[test]
    fn version_num_encodes_an_explicit_argument() {
        let runtime = AstraRuntime::new();
        let arg = Value::Vector(vec![
            Value::Number(2011.0),
            Value::Number(9.0),
            Value::Number(23.0),
        ]);
        assert_eq!(version_num(&runtime, &[arg]), Value::Number(20110923.0));
        assert!(version_num(&runtime, &[Value::Number(7.0)]).is_undefined());
    }
}
