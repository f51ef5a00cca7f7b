//! swimnorm CLI - Clean USA Swimming Top Times exports
//!
//! ```bash
//! swimnorm normalize top_times.csv -d 2021_22_SEC   # Write FORMATTED_2021_22_SEC.csv
//! swimnorm inspect top_times.csv                    # Show detected layout and a preview
//! swimnorm seconds 1:41.39 41.39                    # Convert race times to seconds
//! ```

use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use swimnorm::{
    normalize_file, parse_file_auto, parse_seconds, round_hundredths, transform::format_delimiter,
    NormalizeOptions, DEFAULT_DESCRIPTION, RAW_SCHEMA,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "swimnorm", version)]
#[command(about = "Clean USA Swimming NCAA Top Times Report CSV exports", long_about = None)]
struct Cli {
    /// Show per-row debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize an export and write FORMATTED_<description>.csv
    Normalize {
        /// Input CSV file
        input: PathBuf,

        /// Description used in the output file name
        #[arg(short, long, env = "SWIMNORM_DESCRIPTION", default_value = DEFAULT_DESCRIPTION)]
        description: String,

        /// Directory to write the output file to
        #[arg(short, long, env = "SWIMNORM_OUTPUT_DIR", default_value = ".")]
        output_dir: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(long)]
        delimiter: Option<char>,

        /// Treat the first line as data instead of a header row
        #[arg(long)]
        no_headers: bool,

        /// Also print the formatted records as JSON on stdout
        #[arg(long)]
        print: bool,
    },

    /// Show detected encoding, delimiter, headers and the first rows
    Inspect {
        /// Input CSV file
        input: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(long)]
        delimiter: Option<char>,

        /// Treat the first line as data instead of a header row
        #[arg(long)]
        no_headers: bool,

        /// Number of rows to preview
        #[arg(long, default_value = "3")]
        rows: usize,
    },

    /// Convert race times to seconds
    Seconds {
        /// Time tokens such as 1:41.39 or 41.39
        #[arg(required = true)]
        times: Vec<String>,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Normalize {
            input,
            description,
            output_dir,
            delimiter,
            no_headers,
            print,
        } => {
            let options = NormalizeOptions {
                description,
                output_dir,
                delimiter,
                has_headers: !no_headers,
            };
            cmd_normalize(&input, &options, print)
        }

        Commands::Inspect {
            input,
            delimiter,
            no_headers,
            rows,
        } => cmd_inspect(&input, delimiter, !no_headers, rows),

        Commands::Seconds { times } => cmd_seconds(&times),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn cmd_normalize(
    input: &Path,
    options: &NormalizeOptions,
    print: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = normalize_file(input, options)?;

    eprintln!("   Encoding: {}", result.csv_info.encoding);
    eprintln!("   Delimiter: '{}'", format_delimiter(result.csv_info.delimiter));
    eprintln!("   Rows: {}", result.csv_info.row_count);
    eprintln!("✅ Wrote {} records to {}", result.records.len(), result.output_path.display());

    if print {
        println!("{}", serde_json::to_string_pretty(&result.records)?);
    }

    Ok(())
}

fn cmd_inspect(
    input: &Path,
    delimiter: Option<char>,
    has_headers: bool,
    rows: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Inspecting: {}", input.display());

    let result = parse_file_auto(input, delimiter, has_headers)?;

    eprintln!("   Encoding: {}", result.encoding);
    eprintln!(
        "   Delimiter: '{}'{}",
        format_delimiter(result.delimiter),
        if delimiter.is_none() { " (auto-detected)" } else { "" }
    );
    eprintln!("   Rows: {}", result.rows.len());
    eprintln!("   Columns ({}):", result.headers.len());
    for (i, header) in result.headers.iter().enumerate() {
        let bound = RAW_SCHEMA.get(i).copied().unwrap_or("(extra)");
        eprintln!("   [{:2}] {} → {}", i + 1, header, bound);
    }
    if has_headers && result.headers.len() != RAW_SCHEMA.len() {
        eprintln!(
            "   ⚠️  Expected {} columns, found {}",
            RAW_SCHEMA.len(),
            result.headers.len()
        );
    }

    let preview: Vec<Value> = result
        .rows
        .iter()
        .take(rows)
        .map(|row| {
            let obj: Map<String, Value> = RAW_SCHEMA
                .iter()
                .zip(row)
                .map(|(name, value)| (name.to_string(), Value::String(value.clone())))
                .collect();
            Value::Object(obj)
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&preview)?);

    Ok(())
}

fn cmd_seconds(times: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    for time in times {
        let seconds = round_hundredths(parse_seconds(time)?);
        println!("{}\t{:.2}", time, seconds);
    }
    Ok(())
}
