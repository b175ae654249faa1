// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handlog Poker server entry point.
use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::{Result, anyhow};
use directories::ProjectDirs;
use log::info;
use std::{fs, path::PathBuf};

use handlog_core::TableConfig;

use crate::{
    db::Db,
    handlers::{self, AppState},
};

/// Server config.
#[derive(Debug)]
pub struct Config {
    /// The server listening address.
    pub address: String,
    /// The server listening port.
    pub port: u16,
    /// The database path, uses the user data directory if not set.
    pub db_path: Option<PathBuf>,
    /// The table blinds.
    pub table: TableConfig,
}

/// Server entry point.
pub async fn run(config: Config) -> Result<()> {
    let db_path = match config.db_path {
        Some(path) => path,
        None => default_db_path()?,
    };

    info!("Opening database {}", db_path.display());
    let db = Db::open(&db_path).map_err(|e| anyhow!("Database open error: {e}"))?;

    info!(
        "Table blinds {}/{}",
        config.table.small_blind, config.table.big_blind
    );
    let state = web::Data::new(AppState {
        db,
        table: config.table,
    });

    let addr = format!("{}:{}", config.address, config.port);
    info!("Starting server listening on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .wrap(Logger::new("%a \"%r\" %s %Dms"))
            .app_data(state.clone())
            .configure(handlers::configure)
    })
    .bind(&addr)
    .map_err(|e| anyhow!("Http listener bind error: {e}"))?
    .run()
    .await?;

    info!("Server stopped");

    Ok(())
}

/// Returns the database path in the user data directory.
fn default_db_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "handlog")
        .ok_or_else(|| anyhow!("Cannot find user data directory"))?;
    let data_dir = dirs.data_local_dir();
    fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("hands.db"))
}
