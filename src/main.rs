#![allow(non_snake_case)]
use RustedDiff::Utils::config::EngineConfig;
use RustedDiff::Utils::logger::init_logger;
use RustedDiff::symbolic::symbolic_engine::Expression;
use log::{error, info};
use num_complex::Complex;
use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

fn run() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load(Path::new(&path))?,
        None => EngineConfig::default(),
    };
    init_logger(&config.loglevel, config.log_to_file)?;
    info!("demo settings: {:?}", config);
    let var = config.variable.as_str();
    let point = config.point;

    // SUM OF A VARIABLE AND A CONSTANT
    let x = Expression::<f64>::from_variable(var);
    let five = Expression::from_value(5.0);
    let expr = &x + &five;
    println!("Expression: {}", expr);
    println!("at {} = {}: {}", var, point, expr.eval_at(var, point)?);

    // CHAIN RULE
    let expr = (Expression::from_value(100.0) + &x * &Expression::from_value(2.0)).sin();
    let derivative = expr.diff(var);
    println!("f = {}", expr);
    println!("df/d{} = {}", var, derivative);
    println!(
        "f({}) = {}, df/d{}({}) = {}",
        point,
        expr.eval_at(var, point)?,
        var,
        point,
        derivative.eval_at(var, point)?
    );

    // GENERALIZED POWER RULE, the exponent is bound through the context
    let y = Expression::from_variable("y");
    let power = &x ^ &y;
    let d_power = power.diff(var);
    let context = HashMap::from([(var.to_string(), point), ("y".to_string(), 3.0)]);
    println!("d/d{} {} = {}", var, power, d_power);
    println!("  = {} at {:?}", d_power.eval(&context)?, context);
    println!(
        "size: {} nodes as a tree, {} distinct",
        d_power.node_count(),
        d_power.unique_node_count()
    );

    // SUBSTITUTION
    let substituted = d_power.substitute("y", 3.0);
    println!("with y = 3: {}", substituted);

    // COMPLEX SCALARS
    let z = Expression::from_variable(var);
    let complex_expr = (&z * &Expression::from_value(Complex::new(1.0, 2.0))).exp();
    let value = complex_expr.eval_at(var, Complex::new(point, 0.0))?;
    println!("{} at {} = {}: {}", complex_expr, var, point, value);
    println!("d/d{}: {}", var, complex_expr.diff(var));
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
