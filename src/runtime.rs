use std::collections::HashSet;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::{Mutex, MutexGuard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::context::CallContext;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::registry::Builtins;
use crate::value::Value;
use crate::{AstraError, AstraResult};

/// Gates for builtins not yet part of the stable catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// The experimental `concat` builtin.
    Concat,
}

/// Build-version components exposed through `version`/`version_num`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub year: u32,
    pub month: u32,
    pub day: Option<u32>,
}

impl BuildInfo {
    pub const fn new(year: u32, month: u32, day: Option<u32>) -> Self {
        Self { year, month, day }
    }

    /// The date baked in by `build.rs` when this crate was compiled.
    pub fn from_build_env() -> Self {
        Self {
            year: env!("ASTRA_BUILD_YEAR").parse().unwrap_or(0),
            month: env!("ASTRA_BUILD_MONTH").parse().unwrap_or(0),
            day: env!("ASTRA_BUILD_DAY").parse().ok(),
        }
    }
}

/// Configuration for the runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub build: BuildInfo,
    pub features: HashSet<Feature>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            build: BuildInfo::from_build_env(),
            features: HashSet::new(),
        }
    }
}

impl RuntimeConfig {
    pub fn with_build(mut self, build: BuildInfo) -> Self {
        self.build = build;
        self
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.insert(feature);
        self
    }
}

/// Enclosing module call-stack consulted by `parent_module`.
///
/// Provided by the host evaluator; this core only reads it.
pub trait ModuleStack: Send + Sync {
    fn depth(&self) -> usize;
    fn frame_at(&self, index: usize) -> Option<String>;
}

/// Stand-in stack for hosts without module instantiation.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyModuleStack;

impl ModuleStack for EmptyModuleStack {
    fn depth(&self) -> usize {
        0
    }

    fn frame_at(&self, _index: usize) -> Option<String> {
        None
    }
}

/// AstraRuntime owns the builtin registry, the diagnostic sink, and the two
/// random generator streams, and dispatches calls by name.
///
/// The deterministic stream is reseeded on demand by `rands`; the ambient
/// stream is seeded once at construction from wall-clock time mixed with the
/// process id and never reseeded by script code. Each stream sits behind its
/// own mutex so concurrent draws stay serialized.
pub struct AstraRuntime {
    builtins: Builtins,
    config: RuntimeConfig,
    diagnostics: Arc<dyn DiagnosticSink>,
    module_stack: Arc<dyn ModuleStack>,
    deterministic: Mutex<StdRng>,
    ambient: Mutex<StdRng>,
}

impl Default for AstraRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl AstraRuntime {
    /// Creates a runtime with the default catalogue and configuration.
    pub fn new() -> Self {
        Self::with_config(RuntimeConfig::default())
    }

    pub fn with_config(config: RuntimeConfig) -> Self {
        Self {
            builtins: Builtins::default(),
            config,
            diagnostics: Arc::new(TracingSink),
            module_stack: Arc::new(EmptyModuleStack),
            deterministic: Mutex::new(StdRng::seed_from_u64(0)),
            ambient: Mutex::new(StdRng::seed_from_u64(ambient_seed())),
        }
    }

    /// Replaces the builtin registry.
    pub fn with_builtins(mut self, builtins: Builtins) -> Self {
        self.builtins = builtins;
        self
    }

    /// Replaces the diagnostic sink used for warnings.
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Attaches the host's module call-stack.
    pub fn with_module_stack(mut self, stack: Arc<dyn ModuleStack>) -> Self {
        self.module_stack = stack;
        self
    }

    /// Resolves `name` and invokes the implementation.
    ///
    /// The builtin itself never fails: malformed arguments degrade to
    /// [`Value::Undefined`]. Errors only report an unresolvable name.
    pub fn call(&self, name: &str, args: &dyn CallContext) -> AstraResult<Value> {
        let entry = self
            .builtins
            .resolve(name)
            .ok_or_else(|| AstraError::UnknownFunction(name.to_string()))?;
        if let Some(feature) = entry.feature() {
            if !self.config.features.contains(&feature) {
                return Err(AstraError::FeatureDisabled(name.to_string()));
            }
        }
        Ok((entry.func())(self, args))
    }

    pub fn builtins(&self) -> &Builtins {
        &self.builtins
    }

    pub fn build_info(&self) -> BuildInfo {
        self.config.build
    }

    pub(crate) fn module_stack(&self) -> &dyn ModuleStack {
        self.module_stack.as_ref()
    }

    pub(crate) fn warn(&self, message: String) {
        self.diagnostics.warning(&message);
    }

    pub(crate) fn reseed_deterministic(&self, seed: u64) {
        *self.deterministic.lock() = StdRng::seed_from_u64(seed);
    }

    /// Draws `count` uniform samples from [min, max) off one stream,
    /// holding its lock for the whole batch so draws never interleave.
    pub(crate) fn sample_uniform(
        &self,
        deterministic: bool,
        min: f64,
        max: f64,
        count: usize,
    ) -> Vec<f64> {
        let mut rng: MutexGuard<'_, StdRng> = if deterministic {
            self.deterministic.lock()
        } else {
            self.ambient.lock()
        };
        (0..count).map(|_| rng.gen_range(min..max)).collect()
    }
}

fn ambient_seed() -> u64 {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    seconds.wrapping_add(u64::from(std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AstraRuntime>();
    }

    #[test]
    fn unknown_name_is_an_error() {
        let runtime = AstraRuntime::new();
        let no_args: &[Value; 0] = &[];
        let err = runtime.call("no_such_fn", no_args).unwrap_err();
        assert_eq!(err, AstraError::UnknownFunction("no_such_fn".into()));
    }

    #[test]
    fn gated_builtin_requires_the_feature() {
        let no_args: &[Value; 0] = &[];
        let runtime = AstraRuntime::new();
        let err = runtime.call("concat", no_args).unwrap_err();
        assert_eq!(err, AstraError::FeatureDisabled("concat".into()));

        let runtime =
            AstraRuntime::with_config(RuntimeConfig::default().with_feature(Feature::Concat));
        assert!(runtime.call("concat", no_args).is_ok());
    }

    #[test]
    fn build_env_is_populated() {
        let build = BuildInfo::from_build_env();
        assert!(build.year >= 2024);
        assert!((1..=12).contains(&build.month));
    }
}
