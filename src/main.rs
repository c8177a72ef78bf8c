//! ranking-consensus binary
//!
//! Usage: `ranking-consensus <ranking-a-file> <ranking-b-file>`
//!
//! Prints the aggregation result as JSON on stdout.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::error;

use ranking_consensus::adapters::{FileRankingSource, JsonRankingParser};
use ranking_consensus::application::{
    AggregateRankingFilesCommand, AggregateRankingFilesHandler, AggregateRankingsHandler,
    AggregateRankingsOptions,
};
use ranking_consensus::config::AppConfig;
use ranking_consensus::telemetry;

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }
    if let Err(e) = telemetry::init_tracing(&config.logging) {
        eprintln!("Failed to initialize tracing: {}", e);
        return ExitCode::FAILURE;
    }

    let args: Vec<String> = std::env::args().collect();
    let (location_a, location_b) = match args.as_slice() {
        [_, a, b] => (a.clone(), b.clone()),
        _ => {
            eprintln!("usage: ranking-consensus <ranking-a-file> <ranking-b-file>");
            return ExitCode::from(2);
        }
    };

    let handler = AggregateRankingFilesHandler::new(
        Arc::new(FileRankingSource::new()),
        AggregateRankingsHandler::new(
            Arc::new(JsonRankingParser::new(
                config.parsing.tolerate_trailing_separators,
            )),
            AggregateRankingsOptions {
                audit_transitivity: config.analysis.audit_transitivity,
            },
        ),
    );

    let outcome = handler
        .handle(AggregateRankingFilesCommand {
            location_a,
            location_b,
        })
        .map_err(|e| {
            error!(code = %e.code(), "{}", e);
        })
        .and_then(|result| {
            result.to_json().map_err(|e| {
                error!("Failed to serialize result: {}", e);
            })
        });

    match outcome {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(()) => ExitCode::FAILURE,
    }
}
