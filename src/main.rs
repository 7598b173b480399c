use std::{sync::Arc, time::Duration};

use anyhow::bail;
use clap::Parser;

use opina_application::prelude::SubmissionGuard;
use opina_core::gateways::OriginLookupGateway;
use opina_db_firestore::FirestoreDb;
use opina_gateways::{IpEcho, NoOriginLookup};

mod cfg;

use cfg::Cfg;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(version, about = "Single-page comment board")]
struct Args {
    /// Firestore project the comments are stored in.
    #[arg(long)]
    project_id: Option<String>,

    /// Firestore collection holding the comment documents.
    #[arg(long)]
    collection: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    let mut cfg = Cfg::from_env_or_default();
    if let Some(project_id) = args.project_id {
        cfg.project_id = Some(project_id);
    }
    if let Some(collection) = args.collection {
        cfg.collection = collection;
    }

    let Some(project_id) = &cfg.project_id else {
        bail!("No Firestore project configured (set FIRESTORE_PROJECT_ID)");
    };
    let store = FirestoreDb::new(project_id, &cfg.collection, cfg.api_key.clone())?;
    log::info!(
        "Storing comments in collection '{}' of project '{project_id}'",
        cfg.collection
    );

    let guard = SubmissionGuard::new(Duration::from_secs(cfg.submit_guard_timeout_secs));
    let origin_lookup: Box<dyn OriginLookupGateway + Send + Sync> = if cfg.client_origin_lookup {
        Box::new(IpEcho::default())
    } else {
        Box::new(NoOriginLookup)
    };

    opina_webserver::run(
        opina_webserver::Cfg::default(),
        Arc::new(store),
        guard,
        origin_lookup,
        VERSION,
    )
    .await;
    Ok(())
}
