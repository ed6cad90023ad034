use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::{Instrument, warn};
use uuid::Uuid;

use crate::{
    message::{ApiStatus, AskRequest, AskResponse},
    services::relay::{GENERIC_FAILURE, probe, relay},
    state::SharedState,
};

pub async fn ask_handler(
    State(state): State<SharedState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> (StatusCode, Json<AskResponse>) {
    let span = tracing::info_span!("ask", request_id = %Uuid::new_v4());

    // Undecodable bodies still get a JSON reply.
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            span.in_scope(|| {
                warn!(status = %rejection.status(), error = %rejection.body_text(), "rejected /ask body")
            });
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AskResponse {
                    response: GENERIC_FAILURE.to_string(),
                }),
            );
        }
    };
    let message = payload.message.unwrap_or_default();

    let (status, response) = relay(state.client.as_ref(), &message)
        .instrument(span)
        .await;

    (status, Json(AskResponse { response }))
}

pub async fn test_api_handler(State(state): State<SharedState>) -> (StatusCode, Json<ApiStatus>) {
    let (status, body) = probe(state.client.as_ref()).await;
    (status, Json(body))
}
