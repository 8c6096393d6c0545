//! Bulk and keyed construction helpers.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::registry::VariableRegistry;
use crate::types::{Bounds, VariableKind};
use crate::variable::Variable;

impl Variable {
    /// Create `n` variables sharing bounds and kind.
    ///
    /// With a base name, variables are named `"<base>_0"` through
    /// `"<base>_<n-1>"`. Without one, each variable gets its own default
    /// name from the registry counter.
    pub fn bulk(
        registry: &VariableRegistry,
        n: usize,
        base: Option<&str>,
        lower: f64,
        upper: f64,
        kind: VariableKind,
    ) -> Vec<Variable> {
        let bounds = Bounds::new(lower, upper);
        let variables = (0..n)
            .map(|index| {
                let name = base.map(|base| format!("{base}_{index}"));
                Variable::build(registry, name, bounds, kind)
            })
            .collect();
        tracing::debug!(
            component = "variable",
            operation = "bulk",
            status = "success",
            count = n,
            base = base.unwrap_or(""),
            "Created variables in bulk"
        );
        variables
    }

    /// Create one variable per element of a keyed domain, returning a map
    /// from each key to its variable.
    ///
    /// Works over any ordered collection, keyed set, or enumerated
    /// domain whose elements are orderable and printable; the bounds make
    /// a non-enumerable domain a compile-time error. Naming follows
    /// [`Variable::bulk`], with the key in place of the index.
    pub fn keyed<K, I>(
        registry: &VariableRegistry,
        keys: I,
        base: Option<&str>,
        lower: f64,
        upper: f64,
        kind: VariableKind,
    ) -> BTreeMap<K, Variable>
    where
        K: Ord + Display,
        I: IntoIterator<Item = K>,
    {
        let bounds = Bounds::new(lower, upper);
        let variables: BTreeMap<K, Variable> = keys
            .into_iter()
            .map(|key| {
                let name = base.map(|base| format!("{base}_{key}"));
                let variable = Variable::build(registry, name, bounds, kind);
                (key, variable)
            })
            .collect();
        tracing::debug!(
            component = "variable",
            operation = "keyed",
            status = "success",
            count = variables.len(),
            base = base.unwrap_or(""),
            "Created variables over keyed domain"
        );
        variables
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn bulk_with_base_name_indexes_from_zero() {
        let registry = VariableRegistry::new();
        let vars = Variable::bulk(&registry, 3, Some("x"), 0.0, 1.0, VariableKind::Continuous);
        let names: Vec<&str> = vars.iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["x_0", "x_1", "x_2"]);
        assert!(vars.iter().all(|v| v.upper() == 1.0));
    }

    #[test]
    fn bulk_without_base_name_uses_registry_defaults() {
        let registry = VariableRegistry::new();
        // burn an id so default names are offset from the local index
        let _ = Variable::new(&registry, VariableKind::Continuous);

        let vars = Variable::bulk(&registry, 3, None, 0.0, 1.0, VariableKind::Continuous);
        let names: Vec<&str> = vars.iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["Var_1", "Var_2", "Var_3"]);
    }

    #[test]
    fn bulk_ids_are_strictly_increasing() {
        let registry = VariableRegistry::new();
        let vars = Variable::bulk(&registry, 4, Some("x"), 0.0, 1.0, VariableKind::Integer);
        for pair in vars.windows(2) {
            assert!(pair[0].id() < pair[1].id());
        }
    }

    #[test]
    fn keyed_over_string_domain() {
        let registry = VariableRegistry::new();
        let vars = Variable::keyed(
            &registry,
            ["north", "south"],
            Some("flow"),
            0.0,
            100.0,
            VariableKind::Continuous,
        );
        assert_eq!(vars.len(), 2);
        assert_eq!(vars["north"].name(), "flow_north");
        assert_eq!(vars["south"].name(), "flow_south");
    }

    #[test]
    fn keyed_over_enumerated_domain() {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
        enum Product {
            Widget,
            Gadget,
        }

        impl std::fmt::Display for Product {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    Product::Widget => write!(f, "widget"),
                    Product::Gadget => write!(f, "gadget"),
                }
            }
        }

        let registry = VariableRegistry::new();
        let vars = Variable::keyed(
            &registry,
            [Product::Widget, Product::Gadget],
            Some("make"),
            0.0,
            10.0,
            VariableKind::Integer,
        );
        assert_eq!(vars[&Product::Widget].name(), "make_widget");
        assert_eq!(vars[&Product::Gadget].name(), "make_gadget");
    }

    #[test]
    fn keyed_without_base_name_uses_defaults() {
        let registry = VariableRegistry::new();
        let vars = Variable::keyed(
            &registry,
            [1, 2],
            None,
            0.0,
            1.0,
            VariableKind::Continuous,
        );
        assert_eq!(vars[&1].name(), "Var_0");
        assert_eq!(vars[&2].name(), "Var_1");
    }
}
