//! SLB client and data models for Alibaba Cloud load balancing.
//!
//! Covers load balancers, backend health, tags, zone discovery, vserver
//! groups with their backend servers, and TCP listeners. Every method maps
//! to exactly one API action; responses come back as the provider sent them.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{SlbClient, SlbClientBuilder};
pub use models::{
    BackendServer, CreateLoadBalancerRequest, DescribeLoadBalancersParams, Tag, TcpListenerConfig,
};

/// Convenient result alias sharing the `aliyun-core` error type.
pub type Result<T> = aliyun_core::Result<T>;
