/// Euskadi Air Quality Data Client
///
/// Retrieves hourly air-quality reports from the Basque Government's
/// open-data service and parses the semicolon-delimited pseudo-CSV body
/// into measurement records.
///
/// Report layout: 8 lines of header/metadata, then one row per contaminant
/// of the form `LABEL;v1;v2;...;v24`, where the label's first token is the
/// contaminant name and the values cover hours 1 through 24 of the query
/// date.

use chrono::{Duration, NaiveDate};

use crate::logging;
use crate::model::{AirNetError, Measurement};
use crate::stations::{Contaminant, Station};

const DATOS_HORARIOS_URL: &str =
    "http://www.euskadi.eus/aa17aCalidadAireWar/informe/datosHorarios?R01HNoPortal=true";

/// Header/metadata lines preceding the data rows in every report.
const HEADER_LINES: usize = 8;

/// Hourly slots per data row. Hour 24 belongs to 00:00 of the next day.
const HOURS_PER_ROW: usize = 24;

/// Resolves the endpoint, honoring the `EUSKAIR_ENDPOINT` override so tests
/// and mirrors can stand in for the live service.
fn endpoint_url() -> String {
    std::env::var("EUSKAIR_ENDPOINT").unwrap_or_else(|_| DATOS_HORARIOS_URL.to_string())
}

// ============================================================================
// Request construction
// ============================================================================

/// Builds the query parameters for one hourly report request, in the order
/// the service expects them: station id and name, the date as DD/MM/YYYY,
/// the fixed csv format flag, then the indexed contaminant id/name pairs.
pub fn build_query(
    station: &Station,
    date: NaiveDate,
    contaminants: &[&Contaminant],
) -> Vec<(String, String)> {
    let mut params = vec![
        ("idEstacion".to_string(), station.id.to_string()),
        ("nombreEstacion".to_string(), station.name.to_string()),
        ("fecha".to_string(), date.format("%d/%m/%Y").to_string()),
        ("formato".to_string(), "csv".to_string()),
    ];

    for (i, contaminant) in contaminants.iter().enumerate() {
        params.push((
            format!("listaContaminantes[{}]", i),
            contaminant.id.to_string(),
        ));
        params.push((
            format!("listaNombresContaminantes[{}]", i),
            contaminant.name.to_string(),
        ));
    }

    params
}

// ============================================================================
// Fetch
// ============================================================================

/// Requests the hourly report for one station/date/contaminant selection.
///
/// # Returns
/// The raw response body. The service answers error pages in the same
/// pseudo-CSV shape as real reports, so only the HTTP status is checked
/// here; shape problems surface as empty parses downstream.
pub fn fetch_hourly(
    client: &reqwest::blocking::Client,
    station: &Station,
    date: NaiveDate,
    contaminants: &[&Contaminant],
) -> Result<String, AirNetError> {
    let url = endpoint_url();
    let params = build_query(station, date, contaminants);
    logging::debug(&format!("POST {} ({} query params)", url, params.len()));

    let response = client.post(&url).query(&params).send()?;

    if !response.status().is_success() {
        return Err(AirNetError::HttpError(response.status().as_u16()));
    }

    Ok(response.text()?)
}

// ============================================================================
// Response parsing
// ============================================================================

/// Parses an hourly report body into measurement records, in report order.
///
/// The first 8 lines are skipped as header/metadata. A row stops at its
/// first empty value; a row whose label field is empty ends the report
/// entirely. Values past the 24th slot on an over-long row are ignored.
/// The feed leaves cells empty rather than marking them invalid, so rows
/// are truncated silently, never rejected.
pub fn parse_hourly(body: &str, station_name: &str, date: NaiveDate) -> Vec<Measurement> {
    let station = station_name.to_lowercase();
    let mut records = Vec::new();

    for line in body.split('\n').skip(HEADER_LINES) {
        let fields: Vec<&str> = line.split(';').collect();

        let label = fields.first().copied().unwrap_or("");
        if label.is_empty() {
            break; // end of the data block
        }

        let contaminant = label
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_lowercase();

        for (offset, value) in fields[1..].iter().take(HOURS_PER_ROW).enumerate() {
            if value.is_empty() {
                break;
            }

            records.push(Measurement {
                station: station.clone(),
                time: hour_timestamp(date, offset + 1),
                contaminant: contaminant.clone(),
                measurement: (*value).to_string(),
            });
        }
    }

    records
}

/// Formats the timestamp for one hourly slot. Hours 1–23 fall on the query
/// date; hour 24 rolls over to 00:00 of the following day.
fn hour_timestamp(date: NaiveDate, hour: usize) -> String {
    if hour == HOURS_PER_ROW {
        let next_day = date + Duration::days(1);
        format!("{} 00:00", next_day.format("%Y-%m-%d"))
    } else {
        format!("{} {:02}:00", date.format("%Y-%m-%d"), hour)
    }
}

// ============================================================================
// Tests
// ============================================================================
