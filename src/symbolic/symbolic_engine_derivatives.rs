//! # Symbolic Engine Derivatives Module
//!
//! Analytical differentiation by structural recursion over the node kinds.
//!
//! ## Rules
//! - constants: `c' = 0`, variables: `x' = 1`, other variables `y' = 0`
//! - sum and difference: `(f ± g)' = f' ± g'`
//! - product rule: `(f*g)' = f'*g + f*g'`
//! - quotient rule: `(f/g)' = (f'*g - f*g') / g^2`
//! - generalized power rule: `(f^g)' = f^g * (g'*ln(f) + g*(f'/f))`,
//!   valid for constant and variable exponents alike
//! - chain rule for `sin`, `cos`, `ln`, `exp`
//!
//! The result is not simplified, so `0 * ...` and `1 * ...` terms stay in the
//! output. The operands of the original tree are shared by the derivative,
//! only the differentiated parts and the new parents are allocated.

use crate::symbolic::scalar::Scalar;
use crate::symbolic::symbolic_engine::{BinaryOp, Expression, Node, UnaryFunc};
use log::{debug, log_enabled, Level};

impl<T: Scalar> Expression<T> {
    /// DIFFERENTIATION

    /// Computes the analytical derivative of the expression with respect to a variable.
    ///
    /// For multivariable expressions this is the partial derivative; every
    /// other variable is treated as a constant.
    ///
    /// # Examples
    /// ```rust
    /// use RustedDiff::symbolic::symbolic_engine::Expression;
    /// let f = Expression::from_variable("x") * Expression::from_value(2.0);
    /// let df_dx = f.diff("x");
    /// assert_eq!(df_dx.to_string(), "((1.000000 * 2.000000) + (x * 0.000000))");
    /// assert_eq!(df_dx.eval_at("x", 7.0).unwrap(), 2.0);
    /// ```
    pub fn diff(&self, var: &str) -> Expression<T> {
        let derivative = self.diff_node(var);
        if log_enabled!(Level::Debug) {
            debug!(
                "d/d{}: {} nodes -> {} nodes ({} distinct)",
                var,
                self.node_count(),
                derivative.node_count(),
                derivative.unique_node_count()
            );
        }
        derivative
    }

    fn diff_node(&self, var: &str) -> Expression<T> {
        match self.node() {
            Node::Number(_) => Expression::from_value(T::zero()),
            Node::Variable(name) => {
                if name == var {
                    Expression::from_value(T::one())
                } else {
                    Expression::from_value(T::zero())
                }
            }
            Node::Binary(op, lhs, rhs) => {
                let d_lhs = lhs.diff_node(var);
                let d_rhs = rhs.diff_node(var);
                match op {
                    BinaryOp::Add => d_lhs + d_rhs,
                    BinaryOp::Sub => d_lhs - d_rhs,
                    BinaryOp::Mul => (d_lhs * rhs.clone()) + (lhs.clone() * d_rhs),
                    BinaryOp::Div => {
                        let numerator = (d_lhs * rhs.clone()) - (lhs.clone() * d_rhs);
                        numerator / rhs.pow(&Expression::from_value(T::two()))
                    }
                    BinaryOp::Pow => {
                        let exponent_part = d_rhs * lhs.ln();
                        let base_part = rhs.clone() * (d_lhs / lhs.clone());
                        lhs.pow(rhs) * (exponent_part + base_part)
                    }
                }
            }
            Node::Unary(func, arg) => {
                let d_arg = arg.diff_node(var);
                match func {
                    UnaryFunc::Sin => d_arg * arg.cos(),
                    UnaryFunc::Cos => Expression::from_value(T::minus_one()) * d_arg * arg.sin(),
                    UnaryFunc::Ln => d_arg / arg.clone(),
                    UnaryFunc::Exp => d_arg * arg.exp(),
                }
            }
        }
    } // end of diff

    /// Applies `diff` `n` times. `n = 0` returns a handle to the expression itself.
    pub fn n_th_derivative(&self, var_name: &str, n: usize) -> Expression<T> {
        let mut expr = self.clone();
        for i in 0..n {
            expr = expr.diff_node(var_name);
            debug!("derivative #{} has {} nodes", i + 1, expr.node_count());
        }
        expr
    }
}
