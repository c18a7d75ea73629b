//! Google Directions API client.
//!
//! Only transit mode is used. The response is kept close to the wire
//! format: the fields the advisor reads are typed, everything else is
//! carried through as raw JSON so the agent sees the full itinerary.

mod client;
mod error;
mod types;

pub use client::{DirectionsClient, DirectionsClientConfig};
pub use error::DirectionsError;
pub use types::{ArrivalPoint, DirectionsRequest, DirectionsResponse, LatLng, Leg, Route, TimeValue};

/// Anything that can answer a directions query.
///
/// This abstraction allows the advisor to be tested with canned responses.
pub trait DirectionsSource {
    /// Issue one directions query.
    fn fetch_routes(
        &self,
        request: &DirectionsRequest<'_>,
    ) -> impl Future<Output = Result<DirectionsResponse, DirectionsError>> + Send;
}

impl<T: DirectionsSource + ?Sized> DirectionsSource for &T {
    fn fetch_routes(
        &self,
        request: &DirectionsRequest<'_>,
    ) -> impl Future<Output = Result<DirectionsResponse, DirectionsError>> + Send {
        (**self).fetch_routes(request)
    }
}
