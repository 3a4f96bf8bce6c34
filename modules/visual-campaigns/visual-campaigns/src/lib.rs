//! Visual Campaigns Module Implementation
//!
//! The public API is defined in `visual-campaigns-sdk` and re-exported here.

pub use visual_campaigns_sdk::{Campaign, VisualCampaignsApi, VisualCampaignsError};

pub mod config;
pub use config::VisualCampaignsConfig;

pub mod module;
pub use module::VisualCampaignsModule;

pub mod local_client;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
