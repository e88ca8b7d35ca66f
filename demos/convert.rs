//! Prints one rotation in every representation.
//!
//! Usage:
//! ```text
//! cargo run --example convert                     # default rotation
//! cargo run --example convert -- ZYZ 0.3 1.2 -0.4 # order and three angles
//! RUST_LOG=georot=debug cargo run --example convert -- XYZ 0.1 1.5707963267948966 0.3
//! ```

use std::f64::consts::FRAC_PI_2;

use georot::rotation::{
    approximate_rotation_matrix, euler_to_matrix, matrix_to_euler, matrix_to_quaternion,
    matrix_to_rodrigues, EulerOrder,
};

fn main() -> georot::Result<()> {
    // Default: WARN for everything, INFO for georot.
    // Override with RUST_LOG env var (e.g. RUST_LOG=georot=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("georot=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let order: EulerOrder = args.first().map_or(Ok(EulerOrder::XYZ), |s| s.parse())?;
    let angle = |i: usize, default: f64| {
        args.get(i)
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(default)
    };
    let (a, b, c) = (angle(1, 0.1), angle(2, FRAC_PI_2), angle(3, 0.3));

    let m = euler_to_matrix(order, a, b, c);
    println!("euler {order} ({a}, {b}, {c})");
    println!("matrix{m}");

    let r = matrix_to_rodrigues(&m)?;
    println!("axis-angle: axis {:?}, theta {}", r.axis.as_slice(), r.theta);

    let q = matrix_to_quaternion(&m)?;
    println!("quaternion: w {} i {} j {} k {}", q.w, q.i, q.j, q.k);

    for other in EulerOrder::ALL {
        let e = matrix_to_euler(&m, other);
        println!("euler {other}: {:?}", e.angles());
    }

    let repaired = approximate_rotation_matrix(&(m * 1.5))?;
    println!("repaired from scaled copy{repaired}");
    Ok(())
}
