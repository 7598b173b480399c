#[macro_use]
extern crate log;

use std::sync::Arc;

use opina_application::prelude::SubmissionGuard;
use opina_core::{gateways::OriginLookupGateway, repositories::CommentRepository};

mod web;

pub use web::Cfg;

pub async fn run(
    cfg: Cfg,
    store: Arc<dyn CommentRepository + Send + Sync>,
    guard: SubmissionGuard,
    origin_lookup: Box<dyn OriginLookupGateway + Send + Sync>,
    version: &'static str,
) {
    web::run(cfg, store, guard, origin_lookup, version).await;
}
