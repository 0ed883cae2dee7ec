//! Generate a random orthogonal polygon and compare the three placers.
//!
//! Usage: cargo run -p yardcam --example compare_random -- [vertices] [seed]

use yardcam::api::*;

fn main() -> Result<(), CoverError> {
    let mut args = std::env::args().skip(1);
    let vertices: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(20);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(7);

    let mut gen = OrthoGenerator::new(OrthoCfg::default(), seed)?;
    let generated = gen.generate(vertices)?;
    let polygon = generated.polygon;
    println!(
        "polygon: {} vertices after {} attempt(s)",
        polygon.len(),
        generated.attempts
    );
    print!("{}", polygon.to_point_file());

    let cmp = compare(&polygon, &CompareCfg::default());
    println!(
        "reference bounds: n/4 = {}, n/5 = {}",
        cmp.quarter_bound, cmp.fifth_bound
    );
    for outcome in &cmp.outcomes {
        match &outcome.result {
            Ok(p) => {
                let missed = uncovered_vertices(&polygon, &p.cameras).len();
                println!(
                    "{:>10}: {} cameras, {} vertices out of sight",
                    outcome.method,
                    p.cameras.len(),
                    missed
                );
            }
            Err(e) => println!("{:>10}: failed: {e}", outcome.method),
        }
    }
    Ok(())
}
