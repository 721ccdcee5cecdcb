pub mod chat;
pub mod client;
pub mod itinerary;

pub use chat::{ChatMessage, ChatSession, Sender, CONNECT_FALLBACK, RESPONSE_FALLBACK};
pub use client::{ClientError, TripClient};
pub use itinerary::{ItineraryView, ITINERARY_FALLBACK};
