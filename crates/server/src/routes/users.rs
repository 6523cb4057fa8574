use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use service::{errors::ServiceError, user_service};
use tracing::{error, info};

use crate::{errors::JsonApiError, routes::AppState};
use models::errors::ModelError;

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateUserInput {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateUserInput {
    pub id: i32,
    pub name: String,
}

fn is_validation(e: &ServiceError) -> bool {
    matches!(
        e,
        ServiceError::Validation(_) | ServiceError::Model(ModelError::Validation(_))
    )
}

#[utoipa::path(
    get, path = "/api/v1/getUsers", tag = "users",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<models::user::Model>>, JsonApiError> {
    match user_service::list_users(&state.db).await {
        Ok(list) => {
            info!(count = list.len(), "list users");
            Ok(Json(list))
        }
        Err(e) => {
            error!(err = %e, "list users failed");
            Err(JsonApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "List Failed",
                Some(e.to_string()),
            ))
        }
    }
}

#[utoipa::path(
    post, path = "/api/v1/adduser", tag = "users",
    request_body = crate::openapi::CreateUserInputDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn add_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUserInput>,
) -> Result<Json<models::user::Model>, JsonApiError> {
    info!(name = %input.name, id = ?input.id, "add_user_request");
    match user_service::create_user(&state.db, input.id, &input.name).await {
        Ok(m) => {
            info!(id = m.id, name = %m.name, "created user");
            Ok(Json(m))
        }
        Err(e) if is_validation(&e) => Err(JsonApiError::new(
            StatusCode::BAD_REQUEST,
            "Validation Error",
            Some(e.to_string()),
        )),
        Err(e) => {
            error!(err = %e, "create user failed");
            Err(JsonApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Create Failed",
                Some(e.to_string()),
            ))
        }
    }
}

#[utoipa::path(
    put, path = "/api/v1/updateuser", tag = "users",
    request_body = crate::openapi::UpdateUserInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Json(input): Json<UpdateUserInput>,
) -> Result<Json<models::user::Model>, JsonApiError> {
    match user_service::update_user(&state.db, input.id, &input.name).await {
        Ok(m) => {
            info!(id = m.id, name = %m.name, "updated user");
            Ok(Json(m))
        }
        Err(e) if is_validation(&e) => Err(JsonApiError::new(
            StatusCode::BAD_REQUEST,
            "Validation Error",
            Some(e.to_string()),
        )),
        Err(ServiceError::NotFound(msg)) => Err(JsonApiError::new(
            StatusCode::NOT_FOUND,
            "Not Found",
            Some(msg),
        )),
        Err(e) => {
            error!(err = %e, "update user failed");
            Err(JsonApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Update Failed",
                Some(e.to_string()),
            ))
        }
    }
}

#[utoipa::path(
    delete, path = "/api/v1/deleteuser/{user_id}", tag = "users",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<String, JsonApiError> {
    match user_service::delete_user(&state.db, user_id).await {
        Ok(()) => {
            info!(id = user_id, "deleted user");
            Ok("User Deleted".to_string())
        }
        Err(ServiceError::NotFound(msg)) => Err(JsonApiError::new(
            StatusCode::NOT_FOUND,
            "Not Found",
            Some(msg),
        )),
        Err(e) => {
            error!(err = %e, "delete user failed");
            Err(JsonApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Delete Failed",
                Some(e.to_string()),
            ))
        }
    }
}
