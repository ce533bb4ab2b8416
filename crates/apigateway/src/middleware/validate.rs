use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::{Validate, ValidationErrors};

/// Json extractor that also runs the `validator` rules of the payload and
/// rejects with 400 before the handler is reached.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(payload) =
            axum::Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    let body = json!({
                        "status": "error",
                        "message": rejection.body_text(),
                    });
                    (rejection.status(), axum::Json(body))
                })?;

        payload.validate().map_err(|validation_errors| {
            let body = json!({
                "status": "error",
                "message": format_validation_errors(&validation_errors),
            });
            (StatusCode::BAD_REQUEST, axum::Json(body))
        })?;

        Ok(Self(payload))
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {field}"));
            messages.push(format!("{field}: {message}"));
        }
    }

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}
