#![forbid(unsafe_code)]

//! AstraCore v0.1 – the builtin function library of the AstraScript
//! expression language.
//!
//! The crate exposes four major building blocks:
//!
//! * [`Value`] – the dynamically typed unit of data passed to and returned
//!   from every builtin (undefined, number, string, or vector).
//! * [`Builtins`] – the name→implementation registry, populated once and
//!   read-only afterwards.
//! * [`AstraRuntime`] – an embeddable dispatch context owning the registry,
//!   the diagnostic sink, and the two random generator streams.
//! * [`CallContext`] – the read-only view of an evaluated argument list that
//!   the host evaluator hands to each call.
//!
//! Builtins never panic and never raise errors toward the host: malformed
//! input degrades the result to [`Value::Undefined`], optionally emitting a
//! warning through the runtime's [`DiagnosticSink`]. The only fallible
//! surface is name resolution itself, reported as [`AstraError`].

pub mod builtins;
mod context;
mod diagnostics;
mod registry;
mod runtime;
mod value;

use thiserror::Error;

pub use context::CallContext;
pub use diagnostics::{DiagnosticBuffer, DiagnosticSink, TracingSink};
pub use registry::{BuiltinEntry, BuiltinFn, Builtins};
pub use runtime::{
    AstraRuntime, BuildInfo, EmptyModuleStack, Feature, ModuleStack, RuntimeConfig,
};
pub use value::Value;

/// Result type used across AstraCore.
pub type AstraResult<T> = std::result::Result<T, AstraError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AstraError {
    #[error("unknown builtin function '{0}'")]
    UnknownFunction(String),
    #[error("builtin function '{0}' requires a feature that is not enabled")]
    FeatureDisabled(String),
}
