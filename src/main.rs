use std::process;

use matchain::{
    multiply_chain, multiply_pair, plan_chain, reference_chain, ChainDimensions, ChainPlan,
    DenseMatrix, Dimensions, MultiplyConfig,
};

/// Parses a shape written as `ROWSxCOLS`
fn parse_shape(arg: &str) -> Option<Dimensions> {
    let (rows, cols) = arg.split_once(['x', 'X'])?;
    Some(Dimensions::new(rows.trim().parse().ok()?, cols.trim().parse().ok()?))
}

fn print_plan(plan: &ChainPlan) {
    println!("  Optimal order: {}", plan);
    println!("  Optimal cost: {} scalar multiplications", plan.optimal_cost());
    println!(
        "  Left-to-right cost: {} scalar multiplications",
        plan.left_to_right_cost()
    );
}

fn plan_from_args(args: &[String]) {
    let mut shapes = Vec::with_capacity(args.len());
    for arg in args {
        match parse_shape(arg) {
            Some(shape) => shapes.push(shape),
            None => {
                eprintln!("error: expected ROWSxCOLS, got '{}'", arg);
                process::exit(2);
            }
        }
    }

    match ChainDimensions::new(shapes) {
        Ok(dims) => {
            let shapes: Vec<String> = dims.as_slice().iter().map(|d| d.to_string()).collect();
            println!("Chain of {} operands: {}", dims.len(), shapes.join(" * "));
            print_plan(&ChainPlan::from_dimensions(&dims));
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn demo() {
    println!("matchain: adaptive dense matrix multiplication");

    let config = MultiplyConfig::default();
    println!("\nDefault configuration:");
    println!("  Strassen cost threshold: {}", config.strassen_cost_threshold);
    println!("  Strassen block size: {}", config.strassen_block_size);
    println!("  Policy: {:?}", config.policy);
    println!("  System parameters:");
    println!("    Threads: {}", config.system_params.n_threads);
    println!("    Parallel depth: {}", config.system_params.parallel_depth);

    let a = DenseMatrix::new(2, 3, vec![1, 2, 3, 4, 5, 6]);
    let b = DenseMatrix::new(3, 2, vec![7, 8, 9, 10, 11, 12]);

    println!("\nMatrix A:");
    println!("{:?}", a);
    println!("\nMatrix B:");
    println!("{:?}", b);

    match multiply_pair(&a, &b, &config) {
        Ok(c) => println!("\nA * B:\n{:?}", c),
        Err(e) => println!("\nA * B failed: {}", e),
    }

    let chain = [
        DenseMatrix::from_fn(10, 20, |i, j| ((i + j) % 3) as i64),
        DenseMatrix::from_fn(20, 30, |i, j| ((i * j) % 5) as i64),
        DenseMatrix::from_fn(30, 5, |i, j| (i as i64) - (j as i64)),
    ];

    println!("\nChain 10x20 * 20x30 * 30x5:");
    match plan_chain(&chain) {
        Ok(plan) => print_plan(&plan),
        Err(e) => println!("  planning failed: {}", e),
    }

    match multiply_chain(&chain, &config) {
        Ok(product) => {
            let matches = product == reference_chain(&chain);
            println!("  Result: {}x{}", product.n_rows, product.n_cols);
            println!("  Matches left-to-right reference: {}", matches);
        }
        Err(e) => println!("  evaluation failed: {}", e),
    }

    println!("\nPass shapes as arguments to plan a chain, e.g.: 30x35 35x15 15x5 5x10");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        demo();
    } else {
        plan_from_args(&args);
    }
}
