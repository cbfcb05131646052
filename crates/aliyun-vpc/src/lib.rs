//! VPC client and data models for Alibaba Cloud networking.
//!
//! Covers VPCs and their vSwitches, zone discovery, NAT gateways with DNAT
//! forward entries, and elastic IP addresses. Every method maps to exactly
//! one API action; responses come back as the provider sent them.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{VpcClient, VpcClientBuilder};
pub use models::{
    AllocateEipRequest, CreateForwardEntryRequest, CreateNatGatewayRequest, CreateVSwitchRequest,
    CreateVpcRequest, DescribeEipAddressesParams, DescribeForwardTableEntriesParams,
    DescribeNatGatewaysParams, DescribeVSwitchesParams, DescribeVpcsParams, EipInstanceType,
    ModifyForwardEntryRequest,
};

/// Convenient result alias sharing the `aliyun-core` error type.
pub type Result<T> = aliyun_core::Result<T>;
