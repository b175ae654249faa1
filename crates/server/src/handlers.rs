// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands API routes.
use actix_web::{HttpResponse, web};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;

use handlog_core::{Action, Chips, HoleCards, Outcome, Seat, TableConfig, calculate, encode};

use crate::{
    db::{Db, NewHand},
    error::ApiError,
};

/// The API version.
pub const API_VERSION: &str = "v1";

/// Shared state for all routes.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The hands database.
    pub db: Db,
    /// The table blinds.
    pub table: TableConfig,
}

/// A create hand request.
#[derive(Debug, Deserialize)]
pub struct CreateHand {
    /// Unique hand identifier.
    pub hand_id: String,
    /// Starting stack size for all players.
    pub stack_size: i64,
    /// Dealer position.
    pub dealer_position: u8,
    /// Small blind position.
    pub small_blind_position: u8,
    /// Big blind position.
    pub big_blind_position: u8,
    /// Players hole cards.
    #[serde(default)]
    pub player_cards: HoleCards,
    /// Actions taken.
    #[serde(default)]
    pub actions: Vec<Action>,
    /// Board cards.
    #[serde(default)]
    pub board_cards: Option<String>,
}

impl CreateHand {
    const MAX_STACK_SIZE: i64 = u32::MAX as i64;

    fn validate(&self) -> Result<(), ApiError> {
        if self.hand_id.trim().is_empty() {
            return Err(ApiError::Validation("hand_id must not be empty".to_string()));
        }

        if self.stack_size <= 0 {
            return Err(ApiError::Validation(
                "stack_size must be positive".to_string(),
            ));
        }

        if self.stack_size > Self::MAX_STACK_SIZE {
            return Err(ApiError::Validation(format!(
                "stack_size must not exceed {}",
                Self::MAX_STACK_SIZE
            )));
        }

        let positions = [
            ("dealer_position", self.dealer_position),
            ("small_blind_position", self.small_blind_position),
            ("big_blind_position", self.big_blind_position),
        ];
        for (name, position) in positions {
            if Seat::new(position).is_none() {
                return Err(ApiError::Validation(format!(
                    "{name} must be between 1 and {}",
                    Seat::COUNT
                )));
            }
        }

        Ok(())
    }
}

/// A hand history entry.
#[derive(Debug, Serialize)]
pub struct HandHistory {
    /// The hand identifier.
    pub hand_id: String,
    /// The formatted history lines.
    pub display_lines: Vec<String>,
    /// The time the hand was stored.
    pub created_at: String,
}

/// Hands list query.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Maximum number of hands.
    limit: Option<u32>,
}

impl ListQuery {
    const DEFAULT_LIMIT: u32 = 10;
    const MAX_LIMIT: u32 = 100;
}

/// Registers all routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _| ApiError::Validation(err.to_string()).into());
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _| ApiError::Validation(err.to_string()).into());

    cfg.app_data(json_config)
        .app_data(query_config)
        .route("/", web::get().to(root))
        .route("/health", web::get().to(health))
        .service(
            web::scope(&format!("/api/{API_VERSION}/hands"))
                .route("", web::post().to(create_hand))
                .route("/", web::post().to(create_hand))
                .route("", web::get().to(list_hands))
                .route("/", web::get().to(list_hands))
                .route("/{hand_id}", web::get().to(get_hand))
                .route("/{hand_id}", web::delete().to(delete_hand)),
        );
}

async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Poker API",
        "version": API_VERSION,
        "endpoints": {
            "hands": format!("/api/{API_VERSION}/hands"),
            "health": "/health",
        }
    }))
}

async fn health(state: web::Data<AppState>) -> HttpResponse {
    match state.db.ping().await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "healthy",
            "database": "connected",
        })),
        Err(e) => {
            error!("Database health check failed {e}");
            HttpResponse::Ok().json(json!({
                "status": "unhealthy",
                "database": "disconnected",
                "error": e.to_string(),
            }))
        }
    }
}

async fn create_hand(
    state: web::Data<AppState>,
    req: web::Json<CreateHand>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    req.validate()?;

    if state.db.exists(&req.hand_id).await? {
        return Err(ApiError::Conflict(req.hand_id));
    }

    let settlement = calculate(
        &state.table,
        Chips::new(req.stack_size),
        &req.player_cards,
        &req.actions,
        req.board_cards.as_deref(),
    );

    if settlement.outcome == Outcome::Unawarded {
        warn!(
            "Hand {} has no active players, pot of {} not awarded",
            req.hand_id, settlement.pot
        );
    }

    let hand = NewHand {
        hand_id: req.hand_id,
        stack_size: Chips::new(req.stack_size),
        dealer_position: req.dealer_position,
        small_blind_position: req.small_blind_position,
        big_blind_position: req.big_blind_position,
        player_cards: req.player_cards,
        actions: encode(&req.actions),
        board_cards: req.board_cards,
        winnings: settlement.winnings,
    };

    let hand_id = hand.hand_id.clone();
    match state.db.create(hand).await? {
        Some(hand) => {
            info!("Stored hand {} with pot {}", hand.hand_id, settlement.pot);
            Ok(HttpResponse::Created().json(hand))
        }
        None => Err(ApiError::Conflict(hand_id)),
    }
}

async fn get_hand(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let hand_id = path.into_inner();
    match state.db.get(&hand_id).await? {
        Some(hand) => Ok(HttpResponse::Ok().json(hand)),
        None => Err(ApiError::NotFound(hand_id)),
    }
}

async fn list_hands(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let limit = query
        .limit
        .unwrap_or(ListQuery::DEFAULT_LIMIT)
        .clamp(1, ListQuery::MAX_LIMIT);

    let history = state
        .db
        .recent(limit)
        .await?
        .into_iter()
        .map(|hand| HandHistory {
            display_lines: hand.history_lines(),
            hand_id: hand.hand_id,
            created_at: hand.created_at,
        })
        .collect::<Vec<_>>();

    Ok(HttpResponse::Ok().json(history))
}

async fn delete_hand(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let hand_id = path.into_inner();
    if state.db.delete(&hand_id).await? {
        info!("Deleted hand {hand_id}");
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::NotFound(hand_id))
    }
}
