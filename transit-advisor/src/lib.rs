//! Transit route advisor.
//!
//! Answers "how do I get from A to B by public transport?" for a
//! conversational agent: fetches a transit itinerary, then flags broken
//! lifts and escalators at either end and rain at the destination around
//! the arrival time.

pub mod advisor;
pub mod config;
pub mod directions;
pub mod disruptions;
pub mod weather;
pub mod web;
