//! hurl-gen - generate a Datahost hurl scenario
//!
//! ```bash
//! hurl-gen schema.json revision appends:file1.csv retractions:file2.csv revision corrections:file3.csv > repro.hurl
//! ```
//!
//! Takes no flags: every argument belongs to the scenario. The script is the
//! only thing written to stdout.

use datahost::{BuildError, ScenarioBuilder, USAGE};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match ScenarioBuilder::default().build(&args) {
        Ok(script) => println!("{}", script),
        Err(BuildError::Usage) => {
            eprint!("{}", USAGE);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}
