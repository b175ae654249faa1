// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use clap::Parser;
use handlog_core::{Chips, TableConfig};
use handlog_server::server;
use log::error;
use std::path::PathBuf;

#[derive(Debug, Parser)]
struct Cli {
    /// The server listening address.
    #[clap(long, short, default_value = "127.0.0.1")]
    address: String,
    /// The server listening port.
    #[clap(long, short, default_value_t = 8000)]
    port: u16,
    /// The database file path.
    #[clap(long)]
    db: Option<PathBuf>,
    /// The small blind posted by seat 4.
    #[clap(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    small_blind: u32,
    /// The big blind posted by seat 5.
    #[clap(long, default_value_t = 40, value_parser = clap::value_parser!(u32).range(1..))]
    big_blind: u32,
}

#[actix_web::main]
async fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = handlog_server::Config {
        address: cli.address,
        port: cli.port,
        db_path: cli.db,
        table: TableConfig {
            small_blind: Chips::from(cli.small_blind),
            big_blind: Chips::from(cli.big_blind),
        },
    };

    if let Err(e) = server::run(config).await {
        error!("{e}");
    }
}
