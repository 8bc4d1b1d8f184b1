use serde::{Deserialize, Serialize};

/// Canonical string view of a booking request after parameter normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedBooking {
    pub patient_name: String,
    pub email: String,
    pub phone_number: String,
    pub appointment_time: String,
}

/// Row shape of the `appointments` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub appointment_time: String,
}

impl From<&NormalizedBooking> for AppointmentRecord {
    fn from(booking: &NormalizedBooking) -> Self {
        Self {
            name: booking.patient_name.clone(),
            email: booking.email.clone(),
            phone_number: booking.phone_number.clone(),
            appointment_time: booking.appointment_time.clone(),
        }
    }
}

/// Per-channel result of one booking. Only logged; the reply text does not
/// depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookingOutcome {
    pub persisted: bool,
    pub emailed: bool,
    pub messaged: bool,
}
