use crate::domain::analytics::ErrorEnvelope;
use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;

/// `Json<T>` whose rejections are rendered as an `ErrorEnvelope`.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidatedJson(value)),
            Err(rejection) => Err(reject(rejection)),
        }
    }
}

fn reject(rejection: JsonRejection) -> Response {
    let status = rejection.status();
    let details = rejection.body_text();
    tracing::warn!("rejected request body ({}): {}", status, details);
    (
        status,
        Json(ErrorEnvelope::new(
            "INVALID_REQUEST",
            "request body failed validation",
            Some(details),
        )),
    )
        .into_response()
}
