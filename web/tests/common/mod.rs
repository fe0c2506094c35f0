/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use core::types::*;
use entity::*;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::Arc;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
    }
}

pub fn state_with(db: DatabaseConnection) -> Arc<ServerState> {
    Arc::new(ServerState {
        db,
        cli: create_mock_cli(),
    })
}

/// State whose first employee query returns no rows.
pub fn create_mock_state() -> Arc<ServerState> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<employee::Model>::new()])
        .into_connection();

    state_with(db)
}
