pub async fn health() -> &'static str {
    "Dentist Appointment Booking Agent is Running!"
}
