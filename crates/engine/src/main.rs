//! Mobforge - Divine-Pride to rAthena monster converter.
//!
//! Fetches monster records from the Divine-Pride API and emits three
//! artifacts: a mob_db YAML document, a spawn file, and a mob_skill_db
//! file, at the paths configured in config.yaml.

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mobforge_engine::infrastructure::config::Settings;
use mobforge_engine::infrastructure::divine_pride::DivinePrideClient;
use mobforge_engine::ConvertService;

#[tokio::main]
async fn main() -> ExitCode {
    let Some(monster_ids) = parse_args() else {
        return ExitCode::FAILURE;
    };

    // Load environment overrides before reading configuration
    for filename in [".env.local", ".env"] {
        let _ = dotenvy::from_filename(filename);
    }

    let settings = match Settings::load_from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(settings.debug);

    tracing::info!(?monster_ids, "fetching monsters");

    let fetcher = Arc::new(DivinePrideClient::new(&settings.divine_pride));
    let mut service = ConvertService::new(&settings, fetcher);

    match service.run(&monster_ids).await {
        Ok(summary) => {
            println!("\nDone.\n   {} created.", summary.created());
            if !summary.not_found.is_empty() {
                println!("Monsters not found: {:?}", summary.not_found);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "conversion run failed");
            ExitCode::FAILURE
        }
    }
}

/// Parses the single positional argument: a comma-separated identifier
/// list. Returns `None` (after printing usage) when the argument is
/// missing, malformed, or empty.
fn parse_args() -> Option<Vec<i64>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage:\n  mobforge <id,id,id,...>");
        return None;
    }

    let mut monster_ids = Vec::new();
    for token in args[1].split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<i64>() {
            Ok(id) => monster_ids.push(id),
            Err(_) => {
                eprintln!("[ERROR] Invalid monster ID list. Example:\n  mobforge 22399,22400,22401");
                return None;
            }
        }
    }

    if monster_ids.is_empty() {
        eprintln!("[ERROR] No valid monster IDs provided.");
        return None;
    }

    Some(monster_ids)
}

fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "mobforge=debug,mobforge_engine=debug,mobforge_domain=debug"
    } else {
        "mobforge=info,mobforge_engine=info,mobforge_domain=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
