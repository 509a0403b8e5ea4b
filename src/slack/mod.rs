//! All Slack Web API functionality

pub mod endpoint;
pub mod network;
pub mod parameters;
pub mod web_api;

// Re-export main types for convenience
pub use endpoint::Endpoint;
pub use network::{HttpNetworkInterface, NetworkInterface, Response};
pub use parameters::{
    HistoryOptions, InfoType, ItemTarget, MessageOptions, Parameters, ParseMode, Presence,
    ReactionsListOptions, RtmStartOptions, UpdateOptions, UploadOptions, encode_attachments,
    filter_nil_parameters,
};
pub use web_api::{PostedMessage, SlackWebApi};
