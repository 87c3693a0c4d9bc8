//! Order payload construction.
//!
//! Transforms an estimation session plus its computed total into the wire
//! shape the order-submission endpoint expects. Pure: the HTTP call itself
//! lives behind [`crate::api::OrderGateway`].
//!
//! The wire contract uses display strings for materials (`"Solid Wood"`,
//! not `"solid"`), `YYYY-MM-DD` deadlines, and a stringified rounded total
//! in the `EstimationAmount` field.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::round_half_up;
use crate::models::EstimationSession;

/// Days added to "today" when the user never picked a deadline.
const DEFAULT_DEADLINE_DAYS: u64 = 90;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// Contact details are only required at the final confirmation step.
    #[error("contact information is required before submission")]
    MissingContact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRoom {
    #[serde(rename = "type")]
    pub room_type: String,
    pub length: Decimal,
    pub width: Decimal,
    pub height: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderContact {
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub email: String,
    pub address: String,
}

/// Body of `POST /estimationOrder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub rooms: Vec<OrderRoom>,
    pub wood: String,
    pub hardware: String,
    pub workmanship: String,
    #[serde(rename = "surfaceFinish")]
    pub surface_finish: String,
    /// `YYYY-MM-DD`.
    pub deadline: String,
    pub additional: Vec<String>,
    pub contact: OrderContact,
    #[serde(rename = "EstimationAmount")]
    pub estimation_amount: String,
}

impl OrderPayload {
    /// Builds the order payload from a session and its authoritative total.
    ///
    /// Only rooms with complete dimensions appear in `rooms`, in session
    /// order. Material fields come from the session-global resolved
    /// selection. `today` is injected so deadline defaulting stays pure.
    ///
    /// # Errors
    ///
    /// [`SubmissionError::MissingContact`] when the session has no contact
    /// info yet.
    pub fn build(
        session: &EstimationSession,
        total: Decimal,
        today: NaiveDate,
    ) -> Result<Self, SubmissionError> {
        let contact = session
            .contact
            .as_ref()
            .ok_or(SubmissionError::MissingContact)?;

        let rooms = session
            .rooms
            .values()
            .filter_map(|room| {
                room.dimensions().map(|dims| OrderRoom {
                    room_type: room.room_type.clone(),
                    length: dims.length,
                    width: dims.width,
                    height: dims.height,
                })
            })
            .collect();

        // Global selection only; per-room overrides are an estimate-side
        // refinement the order endpoint does not model.
        let selection = session.global_selection();

        let deadline = session
            .deadline
            .unwrap_or_else(|| today + Days::new(DEFAULT_DEADLINE_DAYS));

        Ok(Self {
            rooms,
            wood: selection.wood.display_name().to_string(),
            hardware: selection.hardware.display_name().to_string(),
            workmanship: selection.quality.display_name().to_string(),
            surface_finish: selection.finish.display_name().to_string(),
            deadline: deadline.format("%Y-%m-%d").to_string(),
            additional: session.additional_features.iter().cloned().collect(),
            contact: OrderContact {
                full_name: contact.name.clone(),
                phone_number: contact.phone.clone(),
                email: contact.email.clone(),
                address: contact.address.clone(),
            },
            estimation_amount: round_half_up(total).to_string(),
        })
    }
}
