//! Payment intents for hiring a musician. Card collection happens in the
//! processor's own widget; this module only brokers the intent and the
//! backend-side confirmation.

#[cfg(test)]
#[path = "payments_test.rs"]
mod payments_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::offers::OfferApplication;
use crate::error::ApiError;
use crate::gateway::{ApiRequest, RequestGateway};

pub const PAYMENTS_ENDPOINT: &str = "/pagos";
/// Amount offered when the musician has no published rate.
pub const DEFAULT_AMOUNT: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct IntentBody<'a> {
    oferta_id: &'a str,
    postulacion_id: &'a str,
    amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfirmBody<'a> {
    oferta_id: &'a str,
    postulacion_id: &'a str,
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub client_secret: String,
}

impl std::fmt::Debug for PaymentIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentIntent")
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Convert a euro amount to whole cents.
///
/// # Errors
///
/// [`ApiError::InvalidInput`] for zero, negative or non-finite amounts.
pub fn to_cents(amount: f64) -> Result<u64, ApiError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ApiError::InvalidInput("El importe debe ser mayor que cero".to_owned()));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (amount * 100.0).round() as u64;
    Ok(cents)
}

/// The musician's published rate for this application, or [`DEFAULT_AMOUNT`].
#[must_use]
pub fn suggested_amount(application: &OfferApplication) -> f64 {
    application
        .musician
        .as_ref()
        .and_then(|m| m.profile.pointer("/tarifa/monto"))
        .and_then(Value::as_f64)
        .filter(|v| *v > 0.0)
        .unwrap_or(DEFAULT_AMOUNT)
}

/// Open a payment intent for `amount` euros.
///
/// # Errors
///
/// [`ApiError::InvalidInput`] for a non-positive amount; otherwise gateway
/// failures unchanged.
pub async fn create_intent(
    gateway: &RequestGateway,
    offer_id: &str,
    application_id: &str,
    amount: f64,
) -> Result<PaymentIntent, ApiError> {
    let body = IntentBody { oferta_id: offer_id, postulacion_id: application_id, amount: to_cents(amount)? };
    let intent: PaymentIntent = gateway
        .post_json(&format!("{PAYMENTS_ENDPOINT}/create-payment-intent"), &body)
        .await?;
    tracing::info!(offer_id, application_id, cents = body.amount, "payment intent created");
    Ok(intent)
}

/// Tell the backend the processor accepted the card payment.
///
/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn confirm(gateway: &RequestGateway, offer_id: &str, application_id: &str) -> Result<(), ApiError> {
    let request = ApiRequest::post(format!("{PAYMENTS_ENDPOINT}/confirm-payment"))
        .json(&ConfirmBody { oferta_id: offer_id, postulacion_id: application_id })?;
    gateway.execute(request).await?;
    tracing::info!(offer_id, application_id, "payment confirmed");
    Ok(())
}
