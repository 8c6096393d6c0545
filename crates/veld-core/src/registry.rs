//! Variable id allocation and default naming.

use std::sync::atomic::{AtomicU32, Ordering};

use veld_expr::VariableId;

/// Allocates process-unique, monotonically increasing variable ids.
///
/// Callers own the registry explicitly and pass it to variable
/// constructors; there is no hidden global counter. Ids are never
/// recycled, even when a variable is dropped. The counter is atomic so
/// variables may be constructed from multiple threads against one
/// registry, although the entities themselves are single-threaded.
#[derive(Debug, Default)]
pub struct VariableRegistry {
    next_id: AtomicU32,
}

impl VariableRegistry {
    /// Create a registry whose first allocated id is 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn allocate(&self) -> VariableId {
        VariableId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// The default name for a variable with the given id.
    pub fn default_name(id: VariableId) -> String {
        format!("Var_{}", id.inner())
    }
}

#[cfg(test)]
mod tests {
    use super::VariableRegistry;

    #[test]
    fn ids_are_unique_and_increasing() {
        let registry = VariableRegistry::new();
        let first = registry.allocate();
        let second = registry.allocate();
        let third = registry.allocate();
        assert_eq!(first.inner(), 0);
        assert_eq!(second.inner(), 1);
        assert_eq!(third.inner(), 2);
    }

    #[test]
    fn registries_are_independent() {
        let a = VariableRegistry::new();
        let b = VariableRegistry::new();
        a.allocate();
        assert_eq!(b.allocate().inner(), 0);
    }

    #[test]
    fn default_name_uses_id() {
        let registry = VariableRegistry::new();
        let id = registry.allocate();
        assert_eq!(VariableRegistry::default_name(id), "Var_0");
    }
}
