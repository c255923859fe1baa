use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::services::activities_service;
use crate::store::{ActivityDirectory, DirectoryError};

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match activities_service::sign_up_student(&directory, &activity_name, &query.email).await {
        Ok(message) => {
            info!(activity = %activity_name, email = %query.email, "student signed up");
            Ok(Json(serde_json::json!({ "message": message })))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, "signup rejected: {}", e);
            Err(detail_response(&e))
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match activities_service::unregister_student(&directory, &activity_name, &query.email).await {
        Ok(message) => {
            info!(activity = %activity_name, email = %query.email, "student unregistered");
            Ok(Json(serde_json::json!({ "message": message })))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, "unregister rejected: {}", e);
            Err(detail_response(&e))
        }
    }
}

fn detail_response(err: &DirectoryError) -> (StatusCode, Json<Value>) {
    let status = match err {
        DirectoryError::ActivityNotFound => StatusCode::NOT_FOUND,
        DirectoryError::AlreadySignedUp | DirectoryError::NotRegistered => StatusCode::BAD_REQUEST,
    };
    (status, Json(serde_json::json!({ "detail": err.to_string() })))
}
