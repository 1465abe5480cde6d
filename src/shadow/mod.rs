//! Shadow client adapter
//!
//! This module handles:
//! - Writing the desired device state
//! - Reading the device shadow document
//! - Publishing messages to device topics

mod http;
#[cfg(test)]
pub mod mock;
mod traits;

pub use http::IotDataClient;
pub use traits::{ShadowClient, ShadowError};
