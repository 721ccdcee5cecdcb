use serde::Serialize;
use tripr_catalog::{Destination, Trip};

#[derive(Debug, Serialize)]
pub struct SpotsResponse {
    pub data: Vec<Destination>,
    pub count: usize,
    /// `data` is the whole preference list because nothing fit the budget.
    pub fallback: bool,
}

#[derive(Debug, Serialize)]
pub struct TripsResponse {
    pub data: Vec<Trip>,
    pub count: usize,
}
