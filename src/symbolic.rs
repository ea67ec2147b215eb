#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
///____________________________________________________________________________________________________________________________
/// # Scalar types
/// capabilities a numeric type needs to live in the leaves of an expression: f64, f32 and their complex counterparts
/// ________________________________________________________________________________________________________________________________
pub mod scalar;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) builds immutable expression trees out of numbers, variables, operators and functions
/// 2) shares subtrees between expressions instead of copying them
/// 3) turns a symbolic expression into a string expression for printing and control results
///# Example#
/// ```
/// use RustedDiff::symbolic::symbolic_engine::Expression;
/// let x = Expression::<f64>::from_variable("x");
/// let expr = (Expression::from_value(100.0) + x * Expression::from_value(2.0)).sin();
/// println!("expr = {}", expr);
/// // differentiate with respect to x, the result is not simplified
/// let df_dx = expr.diff("x");
/// assert_eq!(
///     df_dx.to_string(),
///     "((0.000000 + ((1.000000 * 2.000000) + (x * 0.000000))) * cos((100.000000 + (x * 2.000000))))"
/// );
/// // evaluate the derivative at x = 0
/// let value = df_dx.eval_at("x", 0.0).unwrap();
/// assert!((value - 2.0 * 100.0_f64.cos()).abs() < 1e-12);
/// ```
/// Example2#
/// ```
/// use num_complex::Complex;
/// use RustedDiff::symbolic::symbolic_engine::Expression;
/// let z = Expression::from_variable("z");
/// let expr = z.exp() * Expression::from_value(Complex::new(1.0, 2.0));
/// assert_eq!(expr.to_string(), "(exp(z) * (1.00 + 2.00i))");
/// let value = expr.eval_at("z", Complex::new(0.0, 0.0)).unwrap();
/// assert_eq!(value, Complex::new(1.0, 2.0));
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
pub mod symbolic_eval;
pub mod symbolic_substitution;

mod symbolic_engine_tests;
