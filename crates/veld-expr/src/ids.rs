//! Variable identifiers.
//!
//! Ids are allocated by the registry in `veld-core`; this crate only
//! defines the opaque handle that expressions carry.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct VariableId(u32);

impl VariableId {
    /// Create an ID from a u32 value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the inner u32 value.
    pub fn inner(self) -> u32 {
        self.0
    }
}
