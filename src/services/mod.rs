pub mod booking;
pub mod email;
pub mod intents;
pub mod messaging;
pub mod normalize;
pub mod phone;
pub mod store;
