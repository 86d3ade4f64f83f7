use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::registration::core::draft::FieldValue;
use crate::modules::registration::core::errors::{FieldErrors, FormError};
use crate::modules::registration::core::field::FieldName;
use crate::modules::registration::use_cases::register_user::form_controller::FormSnapshot;
use crate::modules::registration::use_cases::register_user::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SetFieldBody {
    pub value: FieldValue,
}

#[derive(Serialize)]
pub struct FormResponse {
    #[serde(flatten)]
    pub form: FormSnapshot,
    pub preview: Option<String>,
}

#[derive(Serialize)]
pub struct AppendTechResponse {
    pub key: Uuid,
    #[serde(flatten)]
    pub form: FormResponse,
}

#[derive(Serialize)]
pub struct RejectedResponse {
    pub errors: FieldErrors,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

async fn form_response(state: &AppState) -> FormResponse {
    FormResponse {
        form: state.register_handler.snapshot().await,
        preview: state.output.latest().await,
    }
}

fn error_response(status: StatusCode, error: impl ToString) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

pub async fn view(State(state): State<AppState>) -> impl IntoResponse {
    Json(form_response(&state).await)
}

pub async fn set_field(
    State(state): State<AppState>,
    Path(field): Path<String>,
    body: Result<Json<SetFieldBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let field = match field.parse::<FieldName>() {
        Ok(f) => f,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    match state.register_handler.set_field(field, body.value).await {
        Ok(()) => Json(form_response(&state).await).into_response(),
        Err(ApplicationError::Form(e @ FormError::NoSuchTech { .. })) => {
            error_response(StatusCode::NOT_FOUND, e)
        }
        Err(ApplicationError::Form(e @ FormError::UnknownField(_))) => {
            error_response(StatusCode::BAD_REQUEST, e)
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}

pub async fn append_tech(State(state): State<AppState>) -> impl IntoResponse {
    let key = state.register_handler.append_tech().await;
    (
        StatusCode::CREATED,
        Json(AppendTechResponse {
            key,
            form: form_response(&state).await,
        }),
    )
}

pub async fn remove_tech(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> impl IntoResponse {
    state.register_handler.remove_tech(index).await;
    Json(form_response(&state).await)
}

pub async fn submit(State(state): State<AppState>) -> Response {
    match state.register_handler.handle_submit().await {
        Ok(registration) => (StatusCode::OK, Json(registration)).into_response(),
        Err(ApplicationError::Rejected(errors)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(RejectedResponse { errors }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to hand off registration");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e)
        }
    }
}

pub async fn reset(State(state): State<AppState>) -> impl IntoResponse {
    state.register_handler.reset().await;
    Json(form_response(&state).await)
}
