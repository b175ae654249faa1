// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handlog Poker hand history server.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod db;
pub mod error;
pub mod handlers;
pub mod server;
pub use server::{Config, run};
