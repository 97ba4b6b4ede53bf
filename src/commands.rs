//! CLI Command Handler
//!
//! Wires the CLI arguments to the lookup orchestrator: builds the API
//! clients from configuration, runs the lookup, prints the result.

use crate::api::{ApiError, OmdbClient, TmdbClient};
use crate::cli::{Cli, ExitCode, Output};
use crate::config::Config;
use crate::lookup::MovieLookup;
use crate::models::MovieQuery;

pub async fn lookup_cmd(cli: &Cli, output: &Output) -> ExitCode {
    let config = Config::load();
    let omdb = OmdbClient::new(config.get_omdb_api_key());
    let tmdb = TmdbClient::new(config.get_tmdb_api_key());
    let lookup = MovieLookup::new(omdb, tmdb);

    let query = MovieQuery::new(cli.title.clone(), cli.year);
    output.info(format!("Looking up: {}", query));

    match lookup.lookup(&query).await {
        Ok(result) => {
            if let Err(e) = output.print(result) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => {
            let code = match e.downcast_ref::<ApiError>() {
                Some(err) if err.is_not_found() => ExitCode::NotFound,
                Some(_) => ExitCode::NetworkError,
                None => ExitCode::Error,
            };
            output.error(format!("Lookup failed: {}", e), code)
        }
    }
}
