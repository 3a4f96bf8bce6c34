//! Visual Campaigns SDK
//!
//! This crate provides the public API for the `visual_campaigns` module:
//! - `VisualCampaignsApi` trait
//! - `Campaign` model
//! - Error type (`VisualCampaignsError`)
//!
//! ## Usage
//!
//! ```ignore
//! use visual_campaigns_sdk::VisualCampaignsApi;
//!
//! let campaign = client.resolve_one(Some("https://scpr.org"), "pushdown").await?;
//! let by_key = client.resolve_many(Some("https://scpr.org"), &keys).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::VisualCampaignsApi;
pub use errors::VisualCampaignsError;
pub use models::Campaign;
