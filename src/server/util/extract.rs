//! Axum extractors that reject with `AppError`.
//!
//! The stock extractors answer failures with plain-text bodies. These wrappers route
//! every rejection through `AppError` so malformed paths, queries and bodies get the
//! same JSON error shape as the rest of the API.

use std::collections::BTreeMap;

use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::{model::bill::WireFieldNames, server::error::AppError};

/// Path extractor whose rejection is an `AppError`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query string extractor whose rejection is an `AppError`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// JSON body extractor that also runs `validator` rules.
///
/// Field errors are reported under the field's JSON name, one message per field.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + WireFieldNames,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        value
            .validate()
            .map_err(|errors| AppError::Validation(field_messages::<T>(&errors)))?;

        Ok(Self(value))
    }
}

/// Flattens validation errors into a map of wire field name to its first message.
fn field_messages<T: WireFieldNames>(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let message = field_errors
                .first()
                .and_then(|error| error.message.as_ref())
                .map(|message| message.to_string())
                .unwrap_or_else(|| "Invalid value".to_string());

            (T::wire_name(&field).to_string(), message)
        })
        .collect()
}
