//! Stretched-grid profile generator for the breeze case.
//!
//! Writes `breeze.prof` (columns `z, b`) into the working directory:
//! a 512-level three-layer stretched grid with a linearly stratified
//! buoyancy profile. Takes no arguments.

use std::path::Path;

use abl_rs::cases::{BreezeCase, CaseError};
use abl_rs::grid::Stretching;

fn main() -> Result<(), CaseError> {
    let case = BreezeCase::default();

    println!("Breeze profile generator");
    println!("========================");
    println!("Levels: {}", case.resolution.kmax());
    println!("Stretching: {}", case.resolution.stretching().description());
    println!("Buoyancy: {}", case.buoyancy.description());
    println!();

    let summary = case.run(Path::new("."))?;

    println!("zsize = {:.6}", summary.total_height.meters());
    println!(
        "dz: {} at the surface, {} aloft",
        summary.min_thickness, summary.max_thickness
    );
    println!("Wrote {}", summary.output.display());

    Ok(())
}
