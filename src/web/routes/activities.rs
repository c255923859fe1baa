use std::collections::HashMap;

use axum::{extract::State, Json};

use crate::models::Activity;
use crate::services::activities_service;
use crate::store::ActivityDirectory;

pub async fn activities_handler(
    State(directory): State<ActivityDirectory>,
) -> Json<HashMap<String, Activity>> {
    Json(activities_service::list_activities(&directory).await)
}
