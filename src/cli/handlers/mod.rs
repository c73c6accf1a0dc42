//! Command handlers

mod provision;

pub use provision::ProvisionCommandHandler;
