//! GVB lift and escalator disruption feed.
//!
//! The feed is a single unauthenticated JSON endpoint listing
//! conveyances (lifts, escalators) with their current status. An empty
//! response means nothing is broken; it is not an error.

mod client;
mod error;
mod types;

pub use client::{DisruptionClient, DisruptionClientConfig};
pub use error::DisruptionError;
pub use types::{DisruptionRecord, DisruptionStatus};

/// Anything that can produce the current list of disruptions.
///
/// This abstraction allows the advisor to be tested without network access.
pub trait DisruptionSource {
    /// Fetch all currently reported disruptions.
    ///
    /// `Ok(vec![])` is a healthy feed with nothing to report; every kind of
    /// lookup failure is an `Err`.
    fn fetch_disruptions(
        &self,
    ) -> impl Future<Output = Result<Vec<DisruptionRecord>, DisruptionError>> + Send;
}

impl<T: DisruptionSource + ?Sized> DisruptionSource for &T {
    fn fetch_disruptions(
        &self,
    ) -> impl Future<Output = Result<Vec<DisruptionRecord>, DisruptionError>> + Send {
        (**self).fetch_disruptions()
    }
}
