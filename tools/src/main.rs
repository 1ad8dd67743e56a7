//! Datahost CLI - Hurl scenarios and CSV preparation
//!
//! # Scenario Generation
//!
//! ```bash
//! datahost hurl-gen schema.json revision appends:file1.csv > repro.hurl
//! datahost hurl-gen --local --no-auth schema.json revision appends:file1.csv
//! datahost hurl-gen --plan schema.json revision appends:file1.csv   # operations as JSON
//! ```
//!
//! # CSV Preparation
//!
//! ```bash
//! datahost add-dummy-column input.csv          # input-dummy-column.csv
//! datahost add-units input.csv                 # fills Units in place
//! datahost filter-duplicates input.csv Value   # input.csv-filtered.csv
//! datahost split-year input.csv 2022           # input-2022.csv, input.csv rewritten
//! ```

use clap::{Parser, Subcommand};
use datahost::log::{log_info, log_info_indent, log_success, log_warning, LOGGER};
use datahost::prep::{
    add_dummy_column_file, annotate_units_file, filter_duplicates_file, split_year_file,
    DEFAULT_IGNORED_COLUMN, DEFAULT_YEAR_COLUMN,
};
use datahost::{BuildError, Scenario, ScenarioConfig, ToolError, ToolResult, UnitMap, USAGE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

/// Duplicate rows listed in the report.
const DUPLICATE_PREVIEW_ROWS: usize = 10;

#[derive(Parser)]
#[command(name = "datahost")]
#[command(about = "Hurl scenario generator and CSV preparation for the Datahost API", long_about = None)]
struct Cli {
    /// Silence progress output on stderr
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a hurl script: <schema> revision [<kind>:<file> | revision]...
    HurlGen {
        /// Hard-code the local endpoint (DATAHOST_LOCAL_URL or http://localhost:3000)
        #[arg(long)]
        local: bool,

        /// Omit the Authorization header
        #[arg(long)]
        no_auth: bool,

        /// Print the parsed operations as JSON instead of the script
        #[arg(long)]
        plan: bool,

        /// Schema file, `revision`, then `revision` or KIND:FILE tokens
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Append a DummyColumn of random integers (0-1000)
    AddDummyColumn {
        /// Input CSV file
        input: PathBuf,

        /// Seed for reproducible values
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Fill the Units column from the Measurement column, in place
    AddUnits {
        /// Input CSV file
        input: PathBuf,

        /// JSON object of measurement -> unit replacing the built-in map
        #[arg(short, long)]
        mapping: Option<PathBuf>,
    },

    /// Drop rows duplicated in every column except one
    FilterDuplicates {
        /// Input CSV file
        input: PathBuf,

        /// Column left out of the comparison
        #[arg(default_value = DEFAULT_IGNORED_COLUMN)]
        ignore_column: String,
    },

    /// Move rows of one year to their own file
    SplitYear {
        /// Input CSV file (rewritten without the moved rows)
        input: PathBuf,

        /// Year to match in the period column
        year: String,

        /// Index of the period column
        #[arg(short, long, default_value_t = DEFAULT_YEAR_COLUMN)]
        column: usize,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    LOGGER.set_quiet(cli.quiet);

    let result = match cli.command {
        Commands::HurlGen {
            local,
            no_auth,
            plan,
            args,
        } => cmd_hurl_gen(&args, local, no_auth, plan),

        Commands::AddDummyColumn { input, seed } => cmd_add_dummy_column(&input, seed),

        Commands::AddUnits { input, mapping } => cmd_add_units(&input, mapping.as_deref()),

        Commands::FilterDuplicates {
            input,
            ignore_column,
        } => cmd_filter_duplicates(&input, &ignore_column),

        Commands::SplitYear {
            input,
            year,
            column,
        } => cmd_split_year(&input, &year, column),
    };

    match result {
        Ok(()) => {}
        Err(ToolError::Build(BuildError::Usage)) => {
            eprint!("{}", USAGE);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_hurl_gen(args: &[String], local: bool, no_auth: bool, plan: bool) -> ToolResult<()> {
    let config = if local {
        ScenarioConfig::from_env()
    } else {
        ScenarioConfig::templated()
    }
    .with_auth_header(!no_auth);

    let scenario = Scenario::parse(args)?;

    if plan {
        let json = serde_json::to_string_pretty(scenario.operations()).map_err(ToolError::Json)?;
        println!("{}", json);
    } else {
        println!("{}", scenario.render(&config));
    }

    log_success(format!(
        "Generated {} revision(s), {} change(s)",
        scenario.revision_count(),
        scenario.change_count()
    ));
    Ok(())
}

fn cmd_add_dummy_column(input: &Path, seed: Option<u64>) -> ToolResult<()> {
    log_info(format!("📄 Adding dummy column: {}", input.display()));

    let output = match seed {
        Some(seed) => add_dummy_column_file(input, &mut StdRng::seed_from_u64(seed))?,
        None => add_dummy_column_file(input, &mut rand::rng())?,
    };

    log_success(format!("Written: {}", output.display()));
    Ok(())
}

fn cmd_add_units(input: &Path, mapping: Option<&Path>) -> ToolResult<()> {
    let units = match mapping {
        Some(path) => {
            log_info(format!("📥 Unit mapping: {}", path.display()));
            UnitMap::load(path)?
        }
        None => UnitMap::default(),
    };

    log_info(format!("📄 Updating units: {}", input.display()));
    let updated = annotate_units_file(input, &units)?;

    log_success(format!("Units updated successfully! ({} rows)", updated));
    Ok(())
}

fn cmd_filter_duplicates(input: &Path, ignore_column: &str) -> ToolResult<()> {
    log_info(format!("📄 Filtering duplicates: {}", input.display()));
    log_info(format!("Ignoring column: {}", ignore_column));

    let (output, report) = filter_duplicates_file(input, ignore_column)?;

    log_info(format!("Original Number of Lines: {}", report.original_count));
    log_info(format!("Number of Duplicate Rows: {}", report.duplicate_count()));
    log_info(format!("Number of Lines in the Final File: {}", report.final_count()));

    if report.duplicate_count() > 0 {
        log_warning("Duplicate Rows:");
        for row in report.duplicates.iter().take(DUPLICATE_PREVIEW_ROWS) {
            log_info_indent(row.join(", "), 1);
        }
        if report.duplicate_count() > DUPLICATE_PREVIEW_ROWS {
            log_info_indent(
                format!("... and {} more", report.duplicate_count() - DUPLICATE_PREVIEW_ROWS),
                1,
            );
        }
    }

    log_success(format!("Written: {}", output.display()));
    Ok(())
}

fn cmd_split_year(input: &Path, year: &str, column: usize) -> ToolResult<()> {
    log_info(format!("📄 Splitting {} on year {}", input.display(), year));

    let (output, split) = split_year_file(input, year, column)?;

    log_success(format!("Moved {} rows to: {}", split.matching.len(), output.display()));
    log_success(format!("Kept {} rows in: {}", split.remaining.len(), input.display()));
    Ok(())
}
