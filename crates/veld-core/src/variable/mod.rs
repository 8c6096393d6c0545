//! The variable entity and its solver synchronization protocol.
//!
//! A [`Variable`] owns its declared state (name, bounds, kind) and pushes
//! every change to the solvers it is attached to. Solvers push back
//! post-solve values and reduced costs through [`Variable::assign`].
//!
//! # Module Organization
//!
//! - [`error`]: variable entity errors
//! - `factory`: bulk and keyed construction helpers
//! - `ops`: expression conversion, arithmetic sugar, relational builders

mod error;
mod factory;
mod ops;

use veld_expr::VariableId;

use crate::registry::VariableRegistry;
use crate::solver::{Attachments, SolverHandle};
use crate::tolerance;
use crate::types::{Bounds, VariableKind};

pub use error::VariableError;

/// A named, typed, bounded decision quantity in an optimization model.
///
/// Variables are constructed standalone, with no solver attached. Solvers
/// that incorporate the variable attach themselves (with the column offset
/// the variable occupies there) and from then on receive exactly one
/// notification per state change. The entity is the single source of
/// truth; attached solvers never diverge from it except during an
/// in-flight notification.
#[derive(Debug)]
pub struct Variable {
    id: VariableId,
    name: String,
    bounds: Bounds,
    kind: VariableKind,
    value: Option<f64>,
    reduced_cost: f64,
    frozen: u32,
    attachments: Attachments,
    metadata: Option<serde_json::Value>,
}

impl Variable {
    // ── Constructors ────────────────────────────────────────
    //
    // All four converge on `build` so the defaulting rules apply exactly
    // once regardless of entry point.

    /// New variable of the given kind with a default name and bounds
    /// `[0, +inf)`.
    pub fn new(registry: &VariableRegistry, kind: VariableKind) -> Self {
        Self::build(registry, None, Bounds::default(), kind)
    }

    /// New variable of the given kind with a default name and the given
    /// bounds.
    pub fn bounded(registry: &VariableRegistry, lower: f64, upper: f64, kind: VariableKind) -> Self {
        Self::build(registry, None, Bounds::new(lower, upper), kind)
    }

    /// New variable of the given kind with the given name and bounds
    /// `[0, +inf)`.
    pub fn named(registry: &VariableRegistry, name: impl Into<String>, kind: VariableKind) -> Self {
        Self::build(registry, Some(name.into()), Bounds::default(), kind)
    }

    /// New variable of the given kind with the given name and bounds.
    pub fn named_bounded(
        registry: &VariableRegistry,
        name: impl Into<String>,
        lower: f64,
        upper: f64,
        kind: VariableKind,
    ) -> Self {
        Self::build(registry, Some(name.into()), Bounds::new(lower, upper), kind)
    }

    /// New binary variable: bounds `[0, 1]`, integer.
    pub fn binary(registry: &VariableRegistry) -> Self {
        Self::build(registry, None, Bounds::new(0.0, 1.0), VariableKind::Integer)
    }

    fn build(
        registry: &VariableRegistry,
        name: Option<String>,
        bounds: Bounds,
        kind: VariableKind,
    ) -> Self {
        let id = registry.allocate();
        let name = name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| VariableRegistry::default_name(id));
        Self {
            id,
            name,
            bounds,
            kind,
            value: None,
            reduced_cost: 0.0,
            frozen: 0,
            attachments: Attachments::new(),
            metadata: None,
        }
    }

    // ── Accessors ───────────────────────────────────────────

    pub fn id(&self) -> VariableId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lower(&self) -> f64 {
        self.bounds.lower
    }

    pub fn upper(&self) -> f64 {
        self.bounds.upper
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    /// The solution value assigned by the last solve.
    ///
    /// Recoverable "not yet solved" result before any solver has
    /// assigned this variable.
    pub fn value(&self) -> Result<f64, VariableError> {
        self.value.ok_or(VariableError::NotSolved)
    }

    /// The solution value, if any solver has assigned one.
    pub fn try_value(&self) -> Option<f64> {
        self.value
    }

    /// Dual sensitivity value from the last solve; 0.0 until assigned.
    pub fn reduced_cost(&self) -> f64 {
        self.reduced_cost
    }

    // ── Mutation with solver propagation ────────────────────
    //
    // Change detection is epsilon-aware for numeric fields; an unchanged
    // set is a no-op with no side effect. A changed set updates the
    // entity first, then notifies every attached solver exactly once.

    /// Set the lower bound, propagating to all attached solvers.
    pub fn set_lower(&mut self, value: f64) {
        if tolerance::approx_eq(self.bounds.lower, value) {
            return;
        }
        self.bounds.lower = value;
        let id = self.id;
        self.attachments
            .notify(|sink| sink.set_variable_lower(id, value));
        tracing::debug!(
            component = "variable",
            operation = "set_lower",
            status = "success",
            id = id.inner(),
            value,
            "Updated lower bound"
        );
    }

    /// Set the upper bound, propagating to all attached solvers.
    pub fn set_upper(&mut self, value: f64) {
        if tolerance::approx_eq(self.bounds.upper, value) {
            return;
        }
        self.bounds.upper = value;
        let id = self.id;
        self.attachments
            .notify(|sink| sink.set_variable_upper(id, value));
        tracing::debug!(
            component = "variable",
            operation = "set_upper",
            status = "success",
            id = id.inner(),
            value,
            "Updated upper bound"
        );
    }

    /// Set the kind, propagating to all attached solvers.
    pub fn set_kind(&mut self, kind: VariableKind) {
        if self.kind == kind {
            return;
        }
        self.kind = kind;
        let id = self.id;
        self.attachments
            .notify(|sink| sink.set_variable_kind(id, kind));
        tracing::debug!(
            component = "variable",
            operation = "set_kind",
            status = "success",
            id = id.inner(),
            kind = kind.as_str(),
            "Updated variable kind"
        );
    }

    /// Rename the variable, propagating to all attached solvers.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.name == name {
            return;
        }
        self.name = name.clone();
        let id = self.id;
        self.attachments
            .notify(|sink| sink.set_variable_name(id, &name));
        tracing::debug!(
            component = "variable",
            operation = "set_name",
            status = "success",
            id = id.inner(),
            name = %name,
            "Renamed variable"
        );
    }

    // ── Freeze state machine ────────────────────────────────

    /// True while at least one freeze is outstanding.
    pub fn is_frozen(&self) -> bool {
        self.frozen > 0
    }

    /// Pin the variable to its current solution value.
    ///
    /// On the first freeze, every attached solver has both bounds set to
    /// the current value; the entity's own bounds are left untouched for
    /// later restoration. Nested freezes only increment the count.
    /// Returns `Ok(true)` on the first freeze, `Ok(false)` when already
    /// frozen, and fails when no solution value exists to pin to (the
    /// freeze count is unchanged in that case).
    pub fn freeze(&mut self) -> Result<bool, VariableError> {
        if self.frozen > 0 {
            self.frozen += 1;
            return Ok(false);
        }
        let pinned = self.value.ok_or(VariableError::FreezeUnsolved)?;
        self.frozen = 1;
        let id = self.id;
        self.attachments
            .notify(|sink| sink.set_variable_bounds(id, pinned, pinned));
        tracing::debug!(
            component = "variable",
            operation = "freeze",
            status = "success",
            id = id.inner(),
            pinned,
            "Pinned variable bounds in attached solvers"
        );
        Ok(true)
    }

    /// Undo one freeze.
    ///
    /// Freezes nest: a variable frozen k times needs k unfreezes. Only
    /// the final one restores the entity's current bounds in attached
    /// solvers (bounds changed while frozen are restored as changed, not
    /// as they were at freeze time) and returns `true`. Unfreezing an
    /// unfrozen variable is a no-op.
    pub fn unfreeze(&mut self) -> bool {
        if self.frozen == 0 {
            return false;
        }
        self.frozen -= 1;
        if self.frozen > 0 {
            return false;
        }
        let id = self.id;
        let Bounds { lower, upper } = self.bounds;
        self.attachments
            .notify(|sink| sink.set_variable_bounds(id, lower, upper));
        tracing::debug!(
            component = "variable",
            operation = "unfreeze",
            status = "success",
            id = id.inner(),
            lower,
            upper,
            "Restored variable bounds in attached solvers"
        );
        true
    }

    // ── Solver attachment and assignment ────────────────────

    /// Attach a solver, recording the column offset this variable
    /// occupies there. Re-attaching updates the offset.
    pub fn attach(&mut self, solver: &SolverHandle, offset: usize) {
        self.attachments.record(solver, offset);
        tracing::trace!(
            component = "variable",
            operation = "attach",
            status = "success",
            id = self.id.inner(),
            offset,
            "Attached solver"
        );
    }

    /// Solver-driven assignment after a solve completes.
    ///
    /// Records the solver/offset pair and overwrites the solution value
    /// and reduced cost. This is the only path by which those change.
    pub fn assign(&mut self, solver: &SolverHandle, offset: usize, value: f64, reduced_cost: f64) {
        self.attachments.record(solver, offset);
        self.value = Some(value);
        self.reduced_cost = reduced_cost;
        tracing::trace!(
            component = "variable",
            operation = "assign",
            status = "success",
            id = self.id.inner(),
            offset,
            value,
            reduced_cost,
            "Assigned solution value"
        );
    }

    /// True when the given solver is attached to this variable.
    pub fn is_attached(&self, solver: &SolverHandle) -> bool {
        self.attachments.contains(solver)
    }

    /// The column offset this variable occupies in the given solver.
    pub fn offset_in(&self, solver: &SolverHandle) -> Option<usize> {
        self.attachments.offset_of(solver)
    }

    /// Number of solvers currently attached.
    pub fn attached_solvers(&self) -> usize {
        self.attachments.len()
    }

    // ── Feasibility ─────────────────────────────────────────

    /// Whether the current solution value satisfies the declared bounds,
    /// and integrality for integer variables. Tolerance-aware on both
    /// counts; `false` before any solver has assigned a value.
    pub fn is_feasible(&self) -> bool {
        let Some(value) = self.value else {
            return false;
        };
        if !tolerance::is_between(value, self.bounds.lower, self.bounds.upper) {
            return false;
        }
        if self.kind == VariableKind::Integer && !tolerance::is_integer(value) {
            return false;
        }
        true
    }

    // ── Metadata ────────────────────────────────────────────

    /// Attach opaque metadata to this variable. Metadata never crosses
    /// the solver boundary.
    pub fn set_metadata(&mut self, metadata: serde_json::Value) {
        self.metadata = Some(metadata);
    }

    pub fn metadata(&self) -> Option<&serde_json::Value> {
        self.metadata.as_ref()
    }

    // ── Display ─────────────────────────────────────────────

    /// The display form extended with solution value and reduced cost,
    /// e.g. `x : continuous : [0, 10] = 3   ( 0.5 )`.
    pub fn solution_summary(&self) -> String {
        match self.value {
            Some(value) => format!("{self} = {value}   ( {} )", self.reduced_cost),
            None => format!("{self} = unsolved"),
        }
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} : {} : [{}, {}]",
            self.name, self.kind, self.bounds.lower, self.bounds.upper
        )
    }
}
