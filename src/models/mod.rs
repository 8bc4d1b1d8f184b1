pub mod booking;
pub mod fulfillment;
pub mod intent;
pub mod params;

pub use booking::{AppointmentRecord, BookingOutcome, NormalizedBooking};
pub use fulfillment::{QueryResult, WebhookRequest, WebhookResponse};
pub use intent::Intent;
pub use params::ParamValue;
