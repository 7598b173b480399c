use std::sync::Arc;

use rocket::{config::Config as RocketCfg, Build, Rocket, Route};

use opina_application::prelude::SubmissionGuard;
use opina_core::{gateways::OriginLookupGateway, repositories::CommentRepository};

pub mod api;
mod frontend;
mod guards;

#[cfg(test)]
mod mockdb;

/// Message shown whenever the comment store cannot serve a request.
/// Details never leak to clients, they only appear in the server log.
pub(crate) const STORE_DOWN_MESSAGE: &str =
    "El servicio de comentarios no está disponible en este momento";

#[derive(Debug, Clone)]
pub struct Cfg {
    /// Interval of the client-side listing refresh. Zero disables it.
    pub auto_refresh_secs: u64,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            auto_refresh_secs: 30,
        }
    }
}

pub(crate) struct Store(pub Arc<dyn CommentRepository + Send + Sync>);

pub(crate) struct OriginLookup(pub Box<dyn OriginLookupGateway + Send + Sync>);

pub(crate) struct Version(pub &'static str);

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) struct Services {
    store: Arc<dyn CommentRepository + Send + Sync>,
    guard: SubmissionGuard,
    origin_lookup: Box<dyn OriginLookupGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(options: InstanceOptions, services: Services) -> Rocket<Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Services {
        store,
        guard,
        origin_lookup,
    } = services;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(Store(store))
        .manage(guard)
        .manage(OriginLookup(origin_lookup))
        .manage(cfg)
        .manage(Version(version));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", frontend::routes()), ("/api", api::routes())]
}

pub async fn run(
    cfg: Cfg,
    store: Arc<dyn CommentRepository + Send + Sync>,
    guard: SubmissionGuard,
    origin_lookup: Box<dyn OriginLookupGateway + Send + Sync>,
    version: &'static str,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        version,
    };
    let services = Services {
        store,
        guard,
        origin_lookup,
    };
    let instance = rocket_instance(options, services);
    if let Err(err) = instance.launch().await {
        error!("Unable to run web server: {err}");
    }
}
