/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod endpoints;
pub mod error;

use axum::Router;
use axum::routing::{get, post};
use core::types::ServerState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn app(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/seed_db", get(endpoints::seed::get))
        .route("/employees", get(endpoints::employees::get))
        .route("/employees/new", post(endpoints::employees::post))
        .route(
            "/employees/details/{id}",
            get(endpoints::employees::get_details),
        )
        .route(
            "/employees/department/{department_id}",
            get(endpoints::employees::get_by_department),
        )
        .route(
            "/employees/role/{role_id}",
            get(endpoints::employees::get_by_role),
        )
        .route(
            "/employees/sort-by-name",
            get(endpoints::employees::get_sorted_by_name),
        )
        .route("/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    axum::serve(listener, app).await
}
