//! Uniform-grid profile generator for the eady case.
//!
//! Reads `ktot` and `zsize` from `eady.ini` in the working directory and
//! writes `eady.prof` (columns `z, b, u, ug`) next to it. Takes no
//! arguments.

use std::path::Path;

use abl_rs::cases::eady::SETTINGS_FILENAME;
use abl_rs::cases::{CaseError, EadyCase};

fn main() -> Result<(), CaseError> {
    let case = EadyCase::from_settings_file(Path::new(SETTINGS_FILENAME))?;

    println!("Eady profile generator");
    println!("======================");
    println!("Levels: {}", case.ktot);
    println!("Domain height: {} m", case.zsize);
    println!();

    let summary = case.run(Path::new("."))?;

    println!("dbdy_ls = {:e}", summary.dbdy_ls);
    println!("Wrote {}", summary.output.display());

    Ok(())
}
