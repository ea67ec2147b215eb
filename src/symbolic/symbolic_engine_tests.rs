//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use crate::symbolic::symbolic_engine::{BinaryOp, Expression, Node, UnaryFunc};
    use crate::symbolic::symbolic_eval::EvalError;
    use crate::symbols;
    use approx::assert_relative_eq;
    use num_complex::Complex;
    use std::collections::HashMap;
    use strum::IntoEnumIterator;

    fn var(name: &str) -> Expression<f64> {
        Expression::from_variable(name)
    }

    fn val(value: f64) -> Expression<f64> {
        Expression::from_value(value)
    }

    //___________________________________CONSTRUCTION AND RENDERING____________________________________

    #[test]
    fn test_leaves() {
        let x = var("x");
        assert_eq!(x.node(), &Node::Variable("x".to_string()));
        assert_eq!(x.to_string(), "x");
        let c = val(100.0);
        assert_eq!(c.node(), &Node::Number(100.0));
        assert_eq!(c.to_string(), "100.000000");
    }

    #[test]
    fn test_every_binary_op_renders_parenthesized() {
        for op in BinaryOp::iter() {
            let symbol = match op {
                BinaryOp::Add => "+",
                BinaryOp::Sub => "-",
                BinaryOp::Mul => "*",
                BinaryOp::Div => "/",
                BinaryOp::Pow => "^",
            };
            let expr = Expression::binary(op, &var("x"), &val(2.0));
            assert_eq!(expr.to_string(), format!("(x {} 2.000000)", symbol));
        }
    }

    #[test]
    fn test_every_function_renders_with_its_name() {
        for func in UnaryFunc::iter() {
            let name = match func {
                UnaryFunc::Sin => "sin",
                UnaryFunc::Cos => "cos",
                UnaryFunc::Ln => "ln",
                UnaryFunc::Exp => "exp",
            };
            let expr = Expression::unary(func, &var("x"));
            assert_eq!(expr.to_string(), format!("{}(x)", name));
        }
    }

    #[test]
    fn test_nested_rendering_keeps_all_parentheses() {
        let expr = (val(100.0) + var("x") * val(2.0)).sin();
        assert_eq!(expr.to_string(), "sin((100.000000 + (x * 2.000000)))");
        let expr = (var("x") ^ val(2.0)) / var("y").ln();
        assert_eq!(expr.to_string(), "((x ^ 2.000000) / ln(y))");
    }

    #[test]
    fn test_operators_owned_and_borrowed_agree() {
        let x = var("x");
        let y = var("y");
        assert_eq!(&x + &y, x.clone() + y.clone());
        assert_eq!(&x - &y, x.clone() - y.clone());
        assert_eq!(&x * &y, x.clone() * y.clone());
        assert_eq!(&x / &y, x.clone() / y.clone());
        assert_eq!(&x ^ &y, x.pow(&y));
        assert_eq!(&x + &y, Expression::binary(BinaryOp::Add, &x, &y));
        assert_eq!(x.exp(), Expression::unary(UnaryFunc::Exp, &x));
    }

    #[test]
    fn test_operands_are_shared_not_copied() {
        let big = (var("x") * val(3.0)).sin().exp();
        let other = var("y").cos();
        let sum = &big + &other;
        match sum.node() {
            Node::Binary(BinaryOp::Add, lhs, rhs) => {
                assert!(lhs.ptr_eq(&big));
                assert!(rhs.ptr_eq(&other));
            }
            _ => panic!("expected an addition, got {}", sum),
        }
        let f = big.ln();
        match f.node() {
            Node::Unary(UnaryFunc::Ln, arg) => assert!(arg.ptr_eq(&big)),
            _ => panic!("expected a logarithm, got {}", f),
        }
    }

    #[test]
    fn test_combined_assign_operations() {
        let x = var("x");
        let mut expr = x.clone();
        expr += val(2.0);
        expr *= val(3.0);
        expr -= val(1.0);
        expr /= val(2.0);
        assert_eq!(
            expr.to_string(),
            "((((x + 2.000000) * 3.000000) - 1.000000) / 2.000000)"
        );
        // the handle was rebound, the original leaf is untouched
        assert_eq!(x.to_string(), "x");
    }

    #[test]
    fn test_neg() {
        let neg_expr = -var("x");
        assert_eq!(neg_expr, val(-1.0) * var("x"));
        assert_eq!(neg_expr.to_string(), "(-1.000000 * x)");
    }

    #[test]
    fn test_symbols() {
        let vars = Expression::<f64>::symbols("x, y ,, z ");
        let names: Vec<String> = vars.iter().map(|v| v.to_string()).collect();
        assert_eq!(names, vec!["x", "y", "z"]);

        let (a, b) = symbols!(f64; a, b);
        assert_eq!((&a + &b).to_string(), "(a + b)");
    }

    #[test]
    fn test_equality_is_structural() {
        let e1 = var("x") + val(1.0);
        let e2 = var("x") + val(1.0);
        assert!(!e1.ptr_eq(&e2));
        assert_eq!(e1, e2);
        assert_ne!(e1, var("x") + val(2.0));
        assert_ne!(e1, var("x") - val(1.0));
    }

    #[test]
    fn test_is_zero() {
        assert!(val(0.0).is_zero());
        assert!(!val(1e-300).is_zero());
        assert!(!var("x").is_zero());
    }

    //___________________________________STRUCTURAL QUERIES____________________________________

    #[test]
    fn test_variables_and_contains_variable() {
        let expr = (var("y") * var("x")).sin() + var("x").pow(&var("a"));
        assert_eq!(expr.variables(), vec!["a", "x", "y"]);
        assert!(expr.contains_variable("a"));
        assert!(!expr.contains_variable("z"));
        assert!(val(3.0).variables().is_empty());
    }

    #[test]
    fn test_depth_and_counts() {
        let x = var("x");
        assert_eq!(x.depth(), 1);
        let f = x.sin() * x.clone();
        assert_eq!(f.depth(), 3);
        // Mul, sin, x, x as a tree; x is one allocation
        assert_eq!(f.node_count(), 4);
        assert_eq!(f.unique_node_count(), 3);
    }

    //___________________________________EVALUATION____________________________________

    #[test]
    fn test_addition_of_constants() {
        let expr = val(5.0) + val(3.0);
        assert_eq!(expr.eval(&HashMap::new()).unwrap(), 8.0);
        for (a, b) in [(0.5, -2.25), (1e10, 3.0), (-7.0, 7.0)] {
            assert_eq!((val(a) + val(b)).eval(&HashMap::new()).unwrap(), a + b);
        }
    }

    #[test]
    fn test_variable_lookup() {
        let context = HashMap::from([("x".to_string(), 10.0)]);
        assert_eq!(var("x").eval(&context).unwrap(), 10.0);
        assert_eq!(var("x").eval_at("x", -4.5).unwrap(), -4.5);
    }

    #[test]
    fn test_unbound_variable_is_an_error() {
        let expr = var("x") + var("y");
        let res = expr.eval_at("x", 1.0);
        assert_eq!(res, Err(EvalError::UnboundVariable("y".to_string())));
        assert_eq!(
            res.unwrap_err().to_string(),
            "Unbound variable: y"
        );
    }

    #[test]
    fn test_left_operand_is_evaluated_first() {
        let expr = var("a") * var("b");
        let res = expr.eval(&HashMap::new());
        assert_eq!(res, Err(EvalError::UnboundVariable("a".to_string())));
    }

    #[test]
    fn test_every_binary_op_evaluates() {
        let context = HashMap::from([("x".to_string(), 3.0), ("y".to_string(), 2.0)]);
        for op in BinaryOp::iter() {
            let expected = match op {
                BinaryOp::Add => 5.0,
                BinaryOp::Sub => 1.0,
                BinaryOp::Mul => 6.0,
                BinaryOp::Div => 1.5,
                BinaryOp::Pow => 9.0,
            };
            let expr = Expression::binary(op, &var("x"), &var("y"));
            assert_relative_eq!(expr.eval(&context).unwrap(), expected);
        }
    }

    #[test]
    fn test_functions_evaluate() {
        assert_relative_eq!(val(0.0).sin().eval(&HashMap::new()).unwrap(), 0.0, epsilon = 1e-6);
        assert_relative_eq!(
            val(1.0).exp().eval(&HashMap::new()).unwrap(),
            std::f64::consts::E,
            epsilon = 1e-6
        );
        assert_relative_eq!(val(0.0).cos().eval(&HashMap::new()).unwrap(), 1.0);
        assert_relative_eq!(var("x").ln().eval_at("x", std::f64::consts::E).unwrap(), 1.0);
    }

    #[test]
    fn test_numeric_edge_cases_follow_the_scalar() {
        let inf = (val(1.0) / val(0.0)).eval(&HashMap::new()).unwrap();
        assert!(inf.is_infinite() && inf > 0.0);
        let nan = (val(0.0) / val(0.0)).eval(&HashMap::new()).unwrap();
        assert!(nan.is_nan());
        let log_zero = val(0.0).ln().eval(&HashMap::new()).unwrap();
        assert!(log_zero.is_infinite() && log_zero < 0.0);
    }

    #[test]
    fn test_f32_scalar() {
        let x = Expression::<f32>::from_variable("x");
        let expr = &x * &Expression::from_value(0.5_f32);
        assert_eq!(expr.to_string(), "(x * 0.500000)");
        assert_eq!(expr.eval_at("x", 4.0).unwrap(), 2.0_f32);
    }

    //___________________________________COMPLEX SCALARS____________________________________

    #[test]
    fn test_complex_literal_rendering() {
        let c = Expression::from_value(Complex::new(1.0, 2.0));
        assert_eq!(c.to_string(), "(1.00 + 2.00i)");
        let expr = Expression::from_variable("z") * c;
        assert_eq!(expr.to_string(), "(z * (1.00 + 2.00i))");
    }

    #[test]
    fn test_complex_evaluation() {
        let z = Expression::from_variable("z");
        let i = Expression::from_value(Complex::new(0.0, 1.0));
        let square = (&z * &z).eval_at("z", Complex::new(0.0, 1.0)).unwrap();
        assert_eq!(square, Complex::new(-1.0, 0.0));
        // principal power i^i = exp(-pi/2)
        let res = (&i ^ &i).eval(&HashMap::new()).unwrap();
        assert_relative_eq!(res.re, (-std::f64::consts::FRAC_PI_2).exp(), epsilon = 1e-12);
        assert_relative_eq!(res.im, 0.0, epsilon = 1e-12);
        // logarithm of a negative real is defined for complex scalars
        let log = z.ln().eval_at("z", Complex::new(-1.0, 0.0)).unwrap();
        assert_relative_eq!(log.im, std::f64::consts::PI, epsilon = 1e-12);
    }

    //___________________________________SUBSTITUTION____________________________________

    #[test]
    fn test_substitute_replaces_every_occurrence() {
        let x = var("x");
        let expr = (&x * &x).sin() + var("y");
        let substituted = expr.substitute("x", 2.0);
        assert_eq!(substituted.to_string(), "(sin((2.000000 * 2.000000)) + y)");
        assert!(!substituted.contains_variable("x"));
        // the receiver is not modified
        assert_eq!(expr.to_string(), "(sin((x * x)) + y)");
    }

    #[test]
    fn test_substitute_shares_untouched_leaves() {
        let y = var("y");
        let c = val(4.0);
        let expr = &(&var("x") + &y) * &c;
        let substituted = expr.substitute("x", 1.0);
        match substituted.node() {
            Node::Binary(BinaryOp::Mul, lhs, rhs) => {
                assert!(rhs.ptr_eq(&c));
                match lhs.node() {
                    Node::Binary(BinaryOp::Add, _, rhs) => assert!(rhs.ptr_eq(&y)),
                    _ => panic!("expected an addition, got {}", lhs),
                }
            }
            _ => panic!("expected a product, got {}", substituted),
        }
    }

    #[test]
    fn test_substitution_is_idempotent() {
        let expr = (var("x") ^ var("y")) + var("x").exp();
        let once = expr.substitute("x", 2.0);
        let twice = once.substitute("x", 3.0);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_substitute_then_eval_matches_eval() {
        let expr = var("x").sin() * var("y") - var("x").ln();
        let context = HashMap::from([("x".to_string(), 0.3), ("y".to_string(), 2.0)]);
        let direct = expr.eval(&context).unwrap();
        let partial = expr.substitute("x", 0.3).eval_at("y", 2.0).unwrap();
        let full = expr.substitute_from_map(&context).eval(&HashMap::new()).unwrap();
        assert_relative_eq!(direct, partial);
        assert_relative_eq!(direct, full);
    }

    #[test]
    fn test_substitute_expr_and_rename() {
        let inner = var("t").cos();
        let expr = var("x") * val(2.0);
        let substituted = expr.substitute_expr("x", &inner);
        assert_eq!(substituted.to_string(), "(cos(t) * 2.000000)");
        match substituted.node() {
            Node::Binary(_, lhs, _) => assert!(lhs.ptr_eq(&inner)),
            _ => panic!("expected a product, got {}", substituted),
        }
        let renamed = expr.rename_variable("x", "u");
        assert_eq!(renamed.to_string(), "(u * 2.000000)");
        assert_eq!(expr.rename_variable("v", "u"), expr);
    }

    //___________________________________THREADS____________________________________

    #[test]
    fn test_shared_tree_is_readable_from_threads() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Expression<f64>>();
        assert_send_sync::<Expression<Complex<f64>>>();

        let expr = (var("x") * val(2.0)).sin();
        let results: Vec<f64> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let expr = &expr;
                    s.spawn(move || expr.diff("x").eval_at("x", i as f64).unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for (i, res) in results.iter().enumerate() {
            assert_relative_eq!(*res, 2.0 * (2.0 * i as f64).cos(), epsilon = 1e-12);
        }
    }
}
