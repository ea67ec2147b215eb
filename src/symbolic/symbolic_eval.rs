//! # Expression evaluation
//!
//! Recursive numeric reduction of a tree under a variable-binding context.
//! A variable without a binding is an error (`EvalError::UnboundVariable`);
//! numeric edge cases such as division by zero are left to the scalar type.

use crate::symbolic::scalar::Scalar;
use crate::symbolic::symbolic_engine::{BinaryOp, Expression, Node, UnaryFunc};
use log::debug;
use std::collections::HashMap;
use std::fmt;

/// Error types for expression evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// a variable of the expression has no value in the context
    UnboundVariable(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::UnboundVariable(name) => write!(f, "Unbound variable: {}", name),
        }
    }
}

impl std::error::Error for EvalError {}

impl<T: Scalar> Expression<T> {
    /// Evaluates the expression with the variable values taken from `context`.
    ///
    /// Operands are evaluated left before right. Fails on the first variable
    /// that has no entry in `context`.
    ///
    /// # Examples
    /// ```rust
    /// use std::collections::HashMap;
    /// use RustedDiff::symbolic::symbolic_engine::Expression;
    /// let f = Expression::from_variable("x") + Expression::from_value(3.0);
    /// let context = HashMap::from([("x".to_string(), 2.0)]);
    /// assert_eq!(f.eval(&context).unwrap(), 5.0);
    /// ```
    pub fn eval(&self, context: &HashMap<String, T>) -> Result<T, EvalError> {
        let res = self.eval_node(context);
        if let Err(e) = &res {
            debug!("evaluation of {} failed: {}", self, e);
        }
        res
    }

    /// Evaluates with a single binding `var = value`.
    pub fn eval_at(&self, var: &str, value: T) -> Result<T, EvalError> {
        let context = HashMap::from([(var.to_string(), value)]);
        self.eval(&context)
    }

    fn eval_node(&self, context: &HashMap<String, T>) -> Result<T, EvalError> {
        match self.node() {
            Node::Number(val) => Ok(val.clone()),
            Node::Variable(name) => context
                .get(name)
                .cloned()
                .ok_or_else(|| EvalError::UnboundVariable(name.clone())),
            Node::Binary(op, lhs, rhs) => {
                let lhs = lhs.eval_node(context)?;
                let rhs = rhs.eval_node(context)?;
                let res = match op {
                    BinaryOp::Add => lhs + rhs,
                    BinaryOp::Sub => lhs - rhs,
                    BinaryOp::Mul => lhs * rhs,
                    BinaryOp::Div => lhs / rhs,
                    BinaryOp::Pow => lhs.pow(&rhs),
                };
                Ok(res)
            }
            Node::Unary(func, arg) => {
                let arg = arg.eval_node(context)?;
                let res = match func {
                    UnaryFunc::Sin => arg.sin(),
                    UnaryFunc::Cos => arg.cos(),
                    UnaryFunc::Ln => arg.ln(),
                    UnaryFunc::Exp => arg.exp(),
                };
                Ok(res)
            }
        }
    }
}
