#![allow(non_snake_case)]

mod cli;

use std::env;
use std::sync::Arc;

use tokio::sync::Mutex;

use schedulerBot::config::{self, AppConfig};
use schedulerBot::runtime;
use schedulerBot::service::extraction::HeuristicExtractor;
use schedulerBot::service::scheduling_service::SchedulingService;
use schedulerBot::store::EventStore;

const DEFAULT_RUN_MODE: &str = "cli";

#[tokio::main]
async fn main() {
    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    };

    let get_prop = |key: &str| -> Option<String> {
        config.get(key).or_else(|| env::var(key).ok())
    };

    let policy = config::scheduling_policy(&get_prop);
    let owner_email =
        get_prop("OWNER_EMAIL").unwrap_or(config::DEFAULT_OWNER_EMAIL.to_string());

    let store = Arc::new(Mutex::new(EventStore::strict()));
    let service = Arc::new(SchedulingService::new(
        store,
        Arc::new(HeuristicExtractor),
        policy,
        owner_email,
    ));

    let run_mode = get_prop("RUN_MODE").unwrap_or(DEFAULT_RUN_MODE.to_string());
    if run_mode == "api" {
        let port = get_prop("API_PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(config::DEFAULT_API_PORT);
        runtime::run_api(service, port).await;
    } else if run_mode == "cli" {
        cli::cli(service).await;
    } else {
        println!("Invalid run mode {}", run_mode);
    }
}
