use std::error::Error;
use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::{CommandFactory, Parser};

use euskair::ingest::euskadi;
use euskair::logging::{self, LogLevel};
use euskair::report;
use euskair::stations;

#[derive(Parser)]
#[command(name = "euskair")]
#[command(about = "Scrapes hourly air quality data from Euskadi's monitoring network", long_about = None)]
#[command(version)]
struct Cli {
    /// List known stations and contaminants, then exit
    #[arg(short, long)]
    list: bool,

    /// Id of the target station
    #[arg(required_unless_present = "list")]
    station: Option<u32>,

    /// Date of the query, YYYY-MM-DD
    #[arg(required_unless_present = "list", value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Ids of the contaminants to query
    #[arg(required_unless_present = "list", num_args = 1..)]
    contaminants: Vec<u32>,

    /// Write the records to a JSON file instead of printing a table
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}': {}", raw, e))
}

/// Prints usage help and exits. User-input failures share one exit code;
/// they are not differentiated.
fn usage_exit(reason: &str) -> ! {
    logging::error(reason);
    let _ = Cli::command().print_help();
    process::exit(2);
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let min_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    logging::init_logger(min_level);

    if cli.list {
        report::print_registries();
        return Ok(());
    }

    // required_unless_present only relaxes these for --list, handled above
    let (Some(station_id), Some(date)) = (cli.station, cli.date) else {
        usage_exit("missing required arguments");
    };

    let Some(station) = stations::find_station(station_id) else {
        usage_exit(&format!("unknown station id {}", station_id));
    };

    for &id in &cli.contaminants {
        if stations::find_contaminant(id).is_none() {
            logging::warn(&format!("ignoring unknown contaminant id {}", id));
        }
    }
    let contaminants = stations::resolve_contaminants(&cli.contaminants);
    if contaminants.is_empty() {
        usage_exit("no valid contaminant ids given");
    }

    logging::info(&format!(
        "querying station {} ({}) on {} for {} contaminant(s)",
        station.id,
        station.name,
        date,
        contaminants.len()
    ));

    let client = reqwest::blocking::Client::new();
    let body = euskadi::fetch_hourly(&client, station, date, &contaminants)?;
    let records = euskadi::parse_hourly(&body, station.name, date);
    logging::info(&format!("parsed {} measurement record(s)", records.len()));

    match cli.output {
        Some(path) => {
            report::write_json(&path, &records)?;
            logging::info(&format!("wrote {}", path.display()));
        }
        None => println!("{}", report::render_table(&records)),
    }

    Ok(())
}
