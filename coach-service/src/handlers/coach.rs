use crate::models::{CoachKind, CoachRequest, CoachResponse};
use crate::services::metrics;
use crate::services::persona_for;
use crate::services::providers::GenerationParams;
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use service_core::error::AppError;
use std::time::Instant;
use validator::Validate;

fn missing_fields() -> AppError {
    AppError::BadRequest(anyhow::anyhow!("Prompt and type are required"))
}

/// `POST /api/coach`: forward the prompt to the model behind the persona picked by `type`.
pub async fn coach(
    State(state): State<AppState>,
    payload: Result<Json<CoachRequest>, JsonRejection>,
) -> Result<Json<CoachResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Unreadable coach payload");
        metrics::record_coach_request("unknown", "bad_request");
        missing_fields()
    })?;

    if let Err(errors) = payload.validate() {
        tracing::debug!(error = %errors, "Invalid coach payload");
        metrics::record_coach_request("unknown", "bad_request");
        return Err(missing_fields());
    }

    let (prompt, kind) = match (payload.prompt, payload.kind) {
        (Some(prompt), Some(kind)) => (prompt, kind),
        _ => return Err(missing_fields()),
    };

    if !state.text_provider.is_configured() {
        metrics::record_coach_request("unknown", "config_error");
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "upstream API key is not configured"
        )));
    }

    let kind: CoachKind = kind.parse().map_err(|e| {
        tracing::debug!(error = %e, "Rejected coach type");
        metrics::record_coach_request("unknown", "bad_request");
        AppError::BadRequest(anyhow::anyhow!("Invalid request type"))
    })?;

    let params = GenerationParams {
        temperature: state.config.models.temperature,
        ..Default::default()
    };
    let model = state.text_provider.model().to_string();

    let started = Instant::now();
    let result = state
        .text_provider
        .generate(persona_for(kind), &prompt, &params)
        .await;
    let elapsed = started.elapsed().as_secs_f64();
    metrics::record_provider_latency(&model, elapsed);

    match result {
        Ok(reply) => {
            metrics::record_coach_request(kind.as_str(), "ok");
            metrics::record_tokens(&model, reply.input_tokens, reply.output_tokens);
            tracing::info!(
                kind = %kind,
                model = %model,
                latency_ms = (elapsed * 1000.0) as u64,
                input_tokens = reply.input_tokens,
                output_tokens = reply.output_tokens,
                finish_reason = ?reply.finish_reason,
                "Coach reply generated"
            );
            Ok(Json(CoachResponse { text: reply.text }))
        }
        Err(e) => {
            metrics::record_coach_request(kind.as_str(), "upstream_error");
            metrics::record_provider_error(e.error_type());
            Err(AppError::UpstreamError(e.to_string()))
        }
    }
}

/// Any method other than POST on `/api/coach`.
pub async fn method_not_allowed() -> Response {
    let mut response = AppError::MethodNotAllowed.into_response();
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static("POST"));
    response
}

pub async fn not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("Not found"))
}
