//! Solver capability boundary.
//!
//! The entity layer never solves anything. It only needs a sink for
//! bound/kind/name change notifications, and solvers call back with
//! post-solve assignments through [`Variable::assign`].
//!
//! [`Variable::assign`]: crate::Variable::assign

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use veld_expr::VariableId;

use crate::types::VariableKind;

/// Capability trait a solver implements to stay in sync with variable
/// state. All notifications are one-way and fire-and-forget; no return
/// value is consumed by the entity layer.
pub trait SolverSink {
    fn set_variable_lower(&mut self, id: VariableId, value: f64);

    fn set_variable_upper(&mut self, id: VariableId, value: f64);

    fn set_variable_bounds(&mut self, id: VariableId, lower: f64, upper: f64);

    fn set_variable_kind(&mut self, id: VariableId, kind: VariableKind);

    fn set_variable_name(&mut self, id: VariableId, name: &str);
}

/// Shared, non-owning reference to a solver.
///
/// Identity is pointer identity: two handles refer to the same solver
/// exactly when they were cloned from the same origin. Single-threaded
/// by design; the entity layer performs synchronous, in-process
/// notification with no suspension points.
#[derive(Clone)]
pub struct SolverHandle {
    inner: Rc<RefCell<dyn SolverSink>>,
}

impl SolverHandle {
    /// Wrap a sink in a new shared handle.
    pub fn new(sink: impl SolverSink + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(sink)),
        }
    }

    /// Build a handle from an already-shared sink, so the caller can keep
    /// direct access to the concrete type.
    pub fn from_shared<S: SolverSink + 'static>(sink: Rc<RefCell<S>>) -> Self {
        let inner: Rc<RefCell<dyn SolverSink>> = sink;
        Self { inner }
    }

    /// True when both handles refer to the same solver.
    pub fn same_solver(&self, other: &SolverHandle) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn downgrade(&self) -> Weak<RefCell<dyn SolverSink>> {
        Rc::downgrade(&self.inner)
    }
}

impl std::fmt::Debug for SolverHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverHandle")
            .field("ptr", &Rc::as_ptr(&self.inner))
            .finish()
    }
}

/// The set of solvers a variable is attached to, each with the offset the
/// variable occupies in that solver's column ordering.
///
/// References are weak: the variable does not own its solvers, and a
/// solver that has been dropped is pruned on the next notification pass.
#[derive(Debug, Default)]
pub(crate) struct Attachments {
    entries: Vec<Attachment>,
}

#[derive(Debug)]
struct Attachment {
    sink: Weak<RefCell<dyn SolverSink>>,
    offset: usize,
}

impl Attachments {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Attach a solver, or update the offset of an existing attachment.
    pub(crate) fn record(&mut self, handle: &SolverHandle, offset: usize) {
        let sink = handle.downgrade();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| Weak::ptr_eq(&entry.sink, &sink))
        {
            entry.offset = offset;
        } else {
            self.entries.push(Attachment { sink, offset });
        }
    }

    pub(crate) fn contains(&self, handle: &SolverHandle) -> bool {
        let sink = handle.downgrade();
        self.entries
            .iter()
            .any(|entry| Weak::ptr_eq(&entry.sink, &sink))
    }

    pub(crate) fn offset_of(&self, handle: &SolverHandle) -> Option<usize> {
        let sink = handle.downgrade();
        self.entries
            .iter()
            .find(|entry| Weak::ptr_eq(&entry.sink, &sink))
            .map(|entry| entry.offset)
    }

    /// Number of live attachments.
    pub(crate) fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.sink.strong_count() > 0)
            .count()
    }

    /// Invoke `f` exactly once per live sink, pruning dropped solvers.
    ///
    /// Holding `&mut self` for the whole loop guarantees no attachment
    /// change can interleave with an in-flight notification.
    pub(crate) fn notify(&mut self, mut f: impl FnMut(&mut dyn SolverSink)) {
        self.entries.retain(|entry| match entry.sink.upgrade() {
            Some(sink) => {
                f(&mut *sink.borrow_mut());
                true
            }
            None => false,
        });
    }
}
