//! # aliyun-core
//!
//! Core types and utilities for calling Alibaba Cloud management APIs.
//!
//! This crate provides the shared foundation for the product crates
//! (`aliyun-ecs`, `aliyun-vpc`, `aliyun-slb`): error handling, credentials
//! and endpoint configuration, the RPC-style request signature, and the
//! generic signed-query client every product client dispatches through.
//!
//! ## Modules
//!
//! - [`error`] - Error types shared across all product crates
//! - [`config`] - Credentials, products, regions, and endpoint construction
//! - [`client`] - HTTP tuning knobs and per-product timeout defaults
//! - [`sign`] - The RPC signature (canonicalized query, HMAC-SHA1)
//! - [`rpc`] - The generic signed-query client
//! - [`query`] - Builder for flat RPC query parameters

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod rpc;
pub mod sign;

// Re-export commonly used types
pub use config::{Credentials, Product};
pub use error::{Error, Result};
pub use rpc::{AckResponse, RpcClient, RpcClientBuilder};
