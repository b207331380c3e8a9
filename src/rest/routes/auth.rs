// rest/routes/auth.rs — Registration and login routes.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::directory::{DirectoryError, NewAccount};
use crate::AppContext;

fn status_for(err: &DirectoryError) -> StatusCode {
    match err {
        DirectoryError::DuplicateEmail => StatusCode::CONFLICT,
        DirectoryError::InvalidCredentials => StatusCode::UNAUTHORIZED,
    }
}

pub async fn register(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<NewAccount>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    match ctx.directory.register(body).await {
        Ok(user) => Ok((
            StatusCode::CREATED,
            Json(json!({ "message": "Registered successfully", "user": user })),
        )),
        Err(e) => Err((status_for(&e), Json(json!({ "error": e.to_string() })))),
    }
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match ctx.directory.login(&body.email, &body.password).await {
        Ok(user) => Ok(Json(
            json!({ "message": "Login successful", "user": user }),
        )),
        Err(e) => Err((status_for(&e), Json(json!({ "error": e.to_string() })))),
    }
}
