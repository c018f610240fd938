/// Data ingest from the Euskadi open-data service.
///
/// Submodules:
/// - `euskadi` — request construction, fetch, and hourly-report parsing for
///   the datosHorarios endpoint.

pub mod euskadi;
