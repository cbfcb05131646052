//! ECS client and data models for Alibaba Cloud compute.
//!
//! Provides typed request parameters and an asynchronous client for
//! instances, images, key pairs, and security groups. Every method maps to
//! exactly one API action; responses come back as the provider sent them.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{EcsClient, EcsClientBuilder};
pub use models::{
    CreateInstanceRequest, DescribeImagesParams, DescribeInstanceStatusParams,
    DescribeInstancesParams, DescribeKeyPairsParams, DescribeSecurityGroupsParams, IngressRule,
    InstanceSelector, IpProtocol, PortRange,
};

/// Convenient result alias sharing the `aliyun-core` error type.
pub type Result<T> = aliyun_core::Result<T>;
