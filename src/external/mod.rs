//! Outbound HTTP plumbing shared by providers

pub mod client;

pub use client::HTTP_CLIENT;
