//! # Symbolic Engine Module
//!
//! Core of the crate: an immutable expression tree generic over a numeric scalar
//! type, together with the functions and operators that build new trees out of
//! existing ones.
//!
//! ## Main Structures and Methods
//!
//! ### `Node<T>` Enum
//! The closed set of node kinds:
//! - **Leaves**: `Number(T)` - literal value, `Variable(String)` - free symbolic name
//! - **Binary operations**: `Binary(BinaryOp, lhs, rhs)` with `Add`, `Sub`, `Mul`, `Div`, `Pow`
//! - **Functions**: `Unary(UnaryFunc, arg)` with `Sin`, `Cos`, `Ln`, `Exp`
//!
//! ### `Expression<T>` Handle
//! A reference-counted handle to a node. Children of `Binary`/`Unary` nodes are
//! handles too, so one subtree may hang under many parents. Nodes are never
//! mutated after construction; every transformation (`diff`, `substitute`,
//! operators) allocates new parents and shares the untouched children.
//!
//! ### Key Methods
//! - `from_value(v)`, `from_variable(name)`, `symbols("x, y")` - leaves
//! - `+ - * / ^` operators and `pow`, `sin`, `cos`, `ln`, `exp` - combination in O(1)
//! - `to_string()` (via `Display`) - fully parenthesized rendering
//! - `eval`, `diff`, `substitute` - see the sibling modules
//!
//! Every consumer of the tree matches `Node` exhaustively, so adding a node kind
//! is a compile error until all walks handle it.

use crate::symbolic::scalar::Scalar;
use itertools::Itertools;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use strum_macros::{Display, EnumIter};

/// Binary operation kinds. `Display` gives the infix symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum BinaryOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    /// generalized power `base ^ exponent`
    #[strum(serialize = "^")]
    Pow,
}

/// Elementary functions of one argument. `Display` gives the function name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum UnaryFunc {
    #[strum(serialize = "sin")]
    Sin,
    #[strum(serialize = "cos")]
    Cos,
    /// natural logarithm
    #[strum(serialize = "ln")]
    Ln,
    #[strum(serialize = "exp")]
    Exp,
}

/// One node of an expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<T> {
    /// Numerical literal
    Number(T),
    /// Symbolic variable with a name (e.g., "x", "velocity")
    Variable(String),
    /// `lhs op rhs`
    Binary(BinaryOp, Expression<T>, Expression<T>),
    /// `func(arg)`
    Unary(UnaryFunc, Expression<T>),
}

/// Immutable, shareable expression tree.
///
/// Cloning the handle is O(1) and does not copy any node. The handle is `Send`
/// and `Sync` whenever `T` is, the reference counts are atomic.
///
/// # Examples
/// ```rust
/// use RustedDiff::symbolic::symbolic_engine::Expression;
/// let x = Expression::<f64>::from_variable("x");
/// let f = (&x * &Expression::from_value(2.0)).sin();
/// assert_eq!(f.to_string(), "sin((x * 2.000000))");
/// ```
#[derive(Debug, Clone)]
pub struct Expression<T> {
    root: Arc<Node<T>>,
}

impl<T: PartialEq> PartialEq for Expression<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.root, &other.root) || *self.root == *other.root
    }
}

impl<T> Expression<T> {
    /// Wraps a freshly built node into a new handle.
    pub fn from_node(node: Node<T>) -> Self {
        Expression {
            root: Arc::new(node),
        }
    }

    /// Root variant of the tree, for exhaustive matching by consumers.
    pub fn node(&self) -> &Node<T> {
        &self.root
    }

    /// true if both handles point at the very same node allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }
}

/// Display implementation: fully parenthesized infix notation, no precedence
/// elision. Literals are rendered by [`Scalar::render`].
impl<T: Scalar> fmt::Display for Expression<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.node() {
            Node::Number(val) => write!(f, "{}", val.render()),
            Node::Variable(name) => write!(f, "{}", name),
            Node::Binary(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
            Node::Unary(func, arg) => write!(f, "{}({})", func, arg),
        }
    }
}

impl<T: Scalar> Expression<T> {
    /// BASIC FEATURES

    /// Literal leaf.
    pub fn from_value(value: T) -> Self {
        Self::from_node(Node::Number(value))
    }

    /// Variable leaf.
    pub fn from_variable(name: &str) -> Self {
        Self::from_node(Node::Variable(name.to_string()))
    }

    /// `lhs op rhs`; both operands are shared, not copied.
    pub fn binary(op: BinaryOp, lhs: &Self, rhs: &Self) -> Self {
        Self::from_node(Node::Binary(op, lhs.clone(), rhs.clone()))
    }

    /// `func(arg)`; the argument is shared, not copied.
    pub fn unary(func: UnaryFunc, arg: &Self) -> Self {
        Self::from_node(Node::Unary(func, arg.clone()))
    }

    /// Creates multiple symbolic variables from a comma-separated string.
    ///
    /// Whitespace around names is trimmed and empty entries are skipped.
    ///
    /// # Examples
    /// ```rust
    /// use RustedDiff::symbolic::symbolic_engine::Expression;
    /// let vars = Expression::<f64>::symbols("x, y, z");
    /// assert_eq!(vars.len(), 3);
    /// ```
    pub fn symbols(symbols: &str) -> Vec<Self> {
        symbols
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(Self::from_variable)
            .collect()
    }

    /// `self ^ exponent`
    pub fn pow(&self, exponent: &Self) -> Self {
        Self::binary(BinaryOp::Pow, self, exponent)
    }

    pub fn sin(&self) -> Self {
        Self::unary(UnaryFunc::Sin, self)
    }

    pub fn cos(&self) -> Self {
        Self::unary(UnaryFunc::Cos, self)
    }

    /// natural logarithm ln(self)
    pub fn ln(&self) -> Self {
        Self::unary(UnaryFunc::Ln, self)
    }

    /// exponential function e^(self)
    pub fn exp(&self) -> Self {
        Self::unary(UnaryFunc::Exp, self)
    }

    /// true if the root is the literal `0`
    pub fn is_zero(&self) -> bool {
        matches!(self.node(), Node::Number(val) if val.is_zero())
    }

    //__________________________________STRUCTURAL QUERIES____________________________________

    /// check if the expression contains a variable
    pub fn contains_variable(&self, var_name: &str) -> bool {
        match self.node() {
            Node::Number(_) => false,
            Node::Variable(name) => name == var_name,
            Node::Binary(_, lhs, rhs) => {
                lhs.contains_variable(var_name) || rhs.contains_variable(var_name)
            }
            Node::Unary(_, arg) => arg.contains_variable(var_name),
        }
    }

    /// Sorted, deduplicated names of all variables occurring in the tree.
    pub fn variables(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names.into_iter().sorted().dedup().collect()
    }

    fn collect_variables(&self, names: &mut Vec<String>) {
        match self.node() {
            Node::Number(_) => {}
            Node::Variable(name) => names.push(name.clone()),
            Node::Binary(_, lhs, rhs) => {
                lhs.collect_variables(names);
                rhs.collect_variables(names);
            }
            Node::Unary(_, arg) => arg.collect_variables(names),
        }
    }

    /// Length of the longest root-to-leaf path; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self.node() {
            Node::Number(_) | Node::Variable(_) => 1,
            Node::Binary(_, lhs, rhs) => 1 + lhs.depth().max(rhs.depth()),
            Node::Unary(_, arg) => 1 + arg.depth(),
        }
    }

    /// Number of nodes when the tree is read as a tree: a subtree shared by
    /// several parents is counted once per parent.
    pub fn node_count(&self) -> usize {
        match self.node() {
            Node::Number(_) | Node::Variable(_) => 1,
            Node::Binary(_, lhs, rhs) => 1 + lhs.node_count() + rhs.node_count(),
            Node::Unary(_, arg) => 1 + arg.node_count(),
        }
    }

    /// Number of distinct node allocations reachable from the root.
    ///
    /// Equals `node_count()` for a tree without sharing; smaller when subtrees
    /// are referenced from several places, as the derivative rules do.
    pub fn unique_node_count(&self) -> usize {
        let mut seen: HashSet<*const Node<T>> = HashSet::new();
        self.visit_unique(&mut seen);
        seen.len()
    }

    fn visit_unique(&self, seen: &mut HashSet<*const Node<T>>) {
        if !seen.insert(Arc::as_ptr(&self.root)) {
            return;
        }
        match self.node() {
            Node::Number(_) | Node::Variable(_) => {}
            Node::Binary(_, lhs, rhs) => {
                lhs.visit_unique(seen);
                rhs.visit_unique(seen);
            }
            Node::Unary(_, arg) => arg.visit_unique(seen),
        }
    }
}

//___________________________________OPERATORS____________________________________

macro_rules! binary_operator {
    ($trait_:ident, $method:ident, $op:expr) => {
        impl<T: Scalar> std::ops::$trait_ for Expression<T> {
            type Output = Expression<T>;

            fn $method(self, rhs: Self) -> Self::Output {
                Expression::from_node(Node::Binary($op, self, rhs))
            }
        }

        impl<'a, T: Scalar> std::ops::$trait_<&'a Expression<T>> for &'a Expression<T> {
            type Output = Expression<T>;

            fn $method(self, rhs: &'a Expression<T>) -> Self::Output {
                Expression::binary($op, self, rhs)
            }
        }
    };
}

binary_operator!(Add, add, BinaryOp::Add);
binary_operator!(Sub, sub, BinaryOp::Sub);
binary_operator!(Mul, mul, BinaryOp::Mul);
binary_operator!(Div, div, BinaryOp::Div);
// `^` is the power operator. Mind the Rust precedence: `^` binds weaker than `*`.
binary_operator!(BitXor, bitxor, BinaryOp::Pow);

// The assigning operators rebind the handle to a new tree; the old tree is
// only referenced as the left child, never modified.
impl<T: Scalar> std::ops::AddAssign for Expression<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = Expression::from_node(Node::Binary(BinaryOp::Add, self.clone(), rhs));
    }
}

impl<T: Scalar> std::ops::SubAssign for Expression<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Expression::from_node(Node::Binary(BinaryOp::Sub, self.clone(), rhs));
    }
}

impl<T: Scalar> std::ops::MulAssign for Expression<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Expression::from_node(Node::Binary(BinaryOp::Mul, self.clone(), rhs));
    }
}

impl<T: Scalar> std::ops::DivAssign for Expression<T> {
    fn div_assign(&mut self, rhs: Self) {
        *self = Expression::from_node(Node::Binary(BinaryOp::Div, self.clone(), rhs));
    }
}

impl<T: Scalar> std::ops::Neg for Expression<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expression::from_value(T::minus_one()) * self
    }
}

//___________________________________MACROS____________________________________

/// Macro to create symbolic variables from a list of identifiers
/// Usage: `let (x, y) = symbols!(f64; x, y);`
#[macro_export]
macro_rules! symbols {
    ($t:ty; $($var:ident),+ $(,)?) => {
        ($(
            $crate::symbolic::symbolic_engine::Expression::<$t>::from_variable(stringify!($var))
        ),+)
    };
}
