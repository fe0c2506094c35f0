/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod input;
pub mod seed;
pub mod types;

// This crate shadows the built-in `core` in dependents' extern preludes, so
// `::core::{future, pin}` paths emitted by tokio's macros resolve here.
pub use std::future;
pub use std::pin;
pub use std::prelude;

use anyhow::Result;
use clap::Parser;
use database::connect_db;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use types::*;

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub async fn init_state() -> Result<Arc<ServerState>> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level);
    tracing::info!("Starting Staffdir Server on {}:{}", cli.ip, cli.port);

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState { db, cli }))
}
