//! Veld variable entity layer.
//!
//! A [`Variable`] is the single source of truth for its declared state:
//! bounds, kind, and name. Every solver the variable is attached to is
//! informed of every state change, and never diverges from the entity
//! except during an in-flight notification.
//!
//! # Overview
//!
//! - [`Variable`]: the entity itself, with freeze/unfreeze and feasibility
//! - [`VariableRegistry`]: injectable id allocator and default naming
//! - [`SolverSink`]: capability trait solvers implement to receive changes
//! - [`SolverHandle`]: shared, non-owning solver reference
//! - [`tolerance`]: the epsilon discipline used for all float comparisons

pub mod registry;
pub mod solver;
pub mod tolerance;
pub mod types;
pub mod variable;

pub use registry::VariableRegistry;
pub use solver::{SolverHandle, SolverSink};
pub use types::{Bounds, VariableKind};
pub use variable::{Variable, VariableError};
