//! Substitution of variables by values, expressions or other names.
//!
//! Each function walks the tree once and rebuilds only the path down to the
//! replaced leaves; literals and unaffected variables are shared with the
//! source tree.

use crate::symbolic::scalar::Scalar;
use crate::symbolic::symbolic_engine::{Expression, Node};
use std::collections::HashMap;

impl<T: Scalar> Expression<T> {
    /// Substitutes a variable with a constant value throughout the expression.
    ///
    /// # Examples
    /// ```rust
    /// use RustedDiff::symbolic::symbolic_engine::Expression;
    /// let f = Expression::from_variable("x") + Expression::from_variable("y");
    /// assert_eq!(f.substitute("x", 2.0).to_string(), "(2.000000 + y)");
    /// ```
    pub fn substitute(&self, var: &str, value: T) -> Expression<T> {
        let replacement = Expression::from_value(value);
        self.replace_leaves(&|name: &str| (name == var).then(|| replacement.clone()))
    }

    /// Substitutes every variable that has an entry in `var_map` with its value.
    pub fn substitute_from_map(&self, var_map: &HashMap<String, T>) -> Expression<T> {
        self.replace_leaves(&|name: &str| var_map.get(name).cloned().map(Expression::from_value))
    }

    /// substitute a variable with an expression; the inserted expression is shared, not copied
    pub fn substitute_expr(&self, var: &str, expr: &Expression<T>) -> Expression<T> {
        self.replace_leaves(&|name: &str| (name == var).then(|| expr.clone()))
    }

    /// Renames a variable throughout the expression.
    pub fn rename_variable(&self, old_var: &str, new_var: &str) -> Expression<T> {
        let renamed = Expression::from_variable(new_var);
        self.replace_leaves(&|name: &str| (name == old_var).then(|| renamed.clone()))
    }

    fn replace_leaves<F>(&self, replace: &F) -> Expression<T>
    where
        F: Fn(&str) -> Option<Expression<T>>,
    {
        match self.node() {
            Node::Number(_) => self.clone(),
            Node::Variable(name) => replace(name).unwrap_or_else(|| self.clone()),
            Node::Binary(op, lhs, rhs) => Expression::from_node(Node::Binary(
                *op,
                lhs.replace_leaves(replace),
                rhs.replace_leaves(replace),
            )),
            Node::Unary(func, arg) => {
                Expression::from_node(Node::Unary(*func, arg.replace_leaves(replace)))
            }
        }
    }
}
