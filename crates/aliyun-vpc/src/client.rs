//! Asynchronous VPC client implementation.

use crate::models::{
    AllocateEipRequest, AllocateEipResponse, CreateForwardEntryRequest,
    CreateForwardEntryResponse, CreateNatGatewayRequest, CreateNatGatewayResponse,
    CreateVSwitchRequest, CreateVSwitchResponse, CreateVpcRequest, CreateVpcResponse,
    DescribeEipAddressesParams, DescribeEipAddressesResponse, DescribeForwardTableEntriesParams,
    DescribeForwardTableEntriesResponse, DescribeNatGatewaysParams, DescribeNatGatewaysResponse,
    DescribeVSwitchesParams, DescribeVSwitchesResponse, DescribeVpcsParams, DescribeVpcsResponse,
    DescribeZonesResponse, EipInstanceType, ModifyForwardEntryRequest,
};
use crate::Result;
use aliyun_core::client::HttpConfig;
use aliyun_core::query::QueryParams;
use aliyun_core::rpc::{AckResponse, RpcClient, RpcClientBuilder};
use aliyun_core::{Credentials, Product};
use url::Url;

/// Builder for [`VpcClient`].
#[derive(Debug, Clone)]
pub struct VpcClientBuilder {
    inner: RpcClientBuilder,
    region_id: String,
}

impl VpcClientBuilder {
    /// Create a new builder for a region.
    pub fn new(region_id: impl Into<String>, credentials: Credentials) -> Result<Self> {
        let region_id = region_id.into();
        let inner = RpcClientBuilder::new(Product::Vpc, &region_id, credentials)?;
        Ok(Self { inner, region_id })
    }

    /// Override the endpoint URL (normally derived from the region).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.inner = self.inner.with_endpoint(endpoint);
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: HttpConfig) -> Self {
        self.inner = self.inner.with_http_config(config);
        self
    }

    /// Build the client instance.
    #[must_use]
    pub fn build(self) -> VpcClient {
        VpcClient {
            rpc: self.inner.build(),
            region_id: self.region_id,
        }
    }
}

/// Asynchronous client for the VPC API of one region.
pub struct VpcClient {
    rpc: RpcClient,
    region_id: String,
}

impl VpcClient {
    /// Construct directly for a region.
    pub fn new(region_id: impl Into<String>, credentials: Credentials) -> Result<Self> {
        Ok(VpcClientBuilder::new(region_id, credentials)?.build())
    }

    /// Start configuring a client.
    pub fn builder(region_id: impl Into<String>, credentials: Credentials) -> Result<VpcClientBuilder> {
        VpcClientBuilder::new(region_id, credentials)
    }

    /// The region this client is scoped to.
    #[must_use]
    pub fn region_id(&self) -> &str {
        &self.region_id
    }

    fn region_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("RegionId", &self.region_id);
        params
    }

    // VPCs

    /// Create a VPC.
    pub async fn create_vpc(&self, request: &CreateVpcRequest) -> Result<CreateVpcResponse> {
        let mut query = self.region_params();
        for (key, value) in request.to_pairs() {
            query.push(&key, value);
        }
        self.rpc.execute("CreateVpc", query.into_pairs()).await
    }

    /// Delete a VPC.
    pub async fn delete_vpc(&self, vpc_id: &str) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("VpcId", vpc_id);
        self.rpc.execute("DeleteVpc", query.into_pairs()).await
    }

    /// List VPCs in the region.
    pub async fn describe_vpcs(&self, params: &DescribeVpcsParams) -> Result<DescribeVpcsResponse> {
        let mut query = self.region_params();
        for (key, value) in params.to_pairs() {
            query.push(&key, value);
        }
        self.rpc.execute("DescribeVpcs", query.into_pairs()).await
    }

    /// List the availability zones of the region.
    pub async fn describe_zones(&self) -> Result<DescribeZonesResponse> {
        let query = self.region_params();
        self.rpc.execute("DescribeZones", query.into_pairs()).await
    }

    // vSwitches

    /// Create a vSwitch inside a VPC zone.
    pub async fn create_vswitch(
        &self,
        request: &CreateVSwitchRequest,
    ) -> Result<CreateVSwitchResponse> {
        let mut query = self.region_params();
        for (key, value) in request.to_pairs() {
            query.push(&key, value);
        }
        self.rpc.execute("CreateVSwitch", query.into_pairs()).await
    }

    /// Delete a vSwitch.
    pub async fn delete_vswitch(&self, v_switch_id: &str) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("VSwitchId", v_switch_id);
        self.rpc.execute("DeleteVSwitch", query.into_pairs()).await
    }

    /// List the vSwitches of a VPC.
    pub async fn describe_vswitches(
        &self,
        vpc_id: &str,
        params: &DescribeVSwitchesParams,
    ) -> Result<DescribeVSwitchesResponse> {
        let mut query = self.region_params();
        query.push("VpcId", vpc_id);
        for (key, value) in params.to_pairs() {
            query.push(&key, value);
        }
        self.rpc
            .execute("DescribeVSwitches", query.into_pairs())
            .await
    }

    // NAT gateways

    /// Create a NAT gateway.
    ///
    /// The response carries the gateway's DNAT table ids, needed for
    /// forward entry calls.
    pub async fn create_nat_gateway(
        &self,
        request: &CreateNatGatewayRequest,
    ) -> Result<CreateNatGatewayResponse> {
        let mut query = self.region_params();
        for (key, value) in request.to_pairs() {
            query.push(&key, value);
        }
        self.rpc
            .execute("CreateNatGateway", query.into_pairs())
            .await
    }

    /// Delete a NAT gateway.
    pub async fn delete_nat_gateway(&self, nat_gateway_id: &str) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("NatGatewayId", nat_gateway_id);
        self.rpc
            .execute("DeleteNatGateway", query.into_pairs())
            .await
    }

    /// List NAT gateways in the region.
    pub async fn describe_nat_gateways(
        &self,
        params: &DescribeNatGatewaysParams,
    ) -> Result<DescribeNatGatewaysResponse> {
        let mut query = self.region_params();
        for (key, value) in params.to_pairs() {
            query.push(&key, value);
        }
        self.rpc
            .execute("DescribeNatGateways", query.into_pairs())
            .await
    }

    // DNAT entries

    /// List the DNAT entries of a forward table.
    pub async fn describe_forward_table_entries(
        &self,
        forward_table_id: &str,
        params: &DescribeForwardTableEntriesParams,
    ) -> Result<DescribeForwardTableEntriesResponse> {
        let mut query = self.region_params();
        query.push("ForwardTableId", forward_table_id);
        for (key, value) in params.to_pairs() {
            query.push(&key, value);
        }
        self.rpc
            .execute("DescribeForwardTableEntries", query.into_pairs())
            .await
    }

    /// Add a DNAT entry to a forward table.
    pub async fn create_forward_entry(
        &self,
        forward_table_id: &str,
        request: &CreateForwardEntryRequest,
    ) -> Result<CreateForwardEntryResponse> {
        let mut query = self.region_params();
        query.push("ForwardTableId", forward_table_id);
        for (key, value) in request.to_pairs() {
            query.push(&key, value);
        }
        self.rpc
            .execute("CreateForwardEntry", query.into_pairs())
            .await
    }

    /// Remove a DNAT entry.
    pub async fn delete_forward_entry(
        &self,
        forward_table_id: &str,
        forward_entry_id: &str,
    ) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("ForwardTableId", forward_table_id);
        query.push("ForwardEntryId", forward_entry_id);
        self.rpc
            .execute("DeleteForwardEntry", query.into_pairs())
            .await
    }

    /// Change a DNAT entry in place.
    pub async fn modify_forward_entry(
        &self,
        forward_table_id: &str,
        forward_entry_id: &str,
        request: &ModifyForwardEntryRequest,
    ) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("ForwardTableId", forward_table_id);
        query.push("ForwardEntryId", forward_entry_id);
        for (key, value) in request.to_pairs() {
            query.push(&key, value);
        }
        self.rpc
            .execute("ModifyForwardEntry", query.into_pairs())
            .await
    }

    // Elastic IPs

    /// Allocate an elastic IP.
    pub async fn allocate_eip_address(
        &self,
        request: &AllocateEipRequest,
    ) -> Result<AllocateEipResponse> {
        let mut query = self.region_params();
        for (key, value) in request.to_pairs() {
            query.push(&key, value);
        }
        self.rpc
            .execute("AllocateEipAddress", query.into_pairs())
            .await
    }

    /// Release an elastic IP.
    pub async fn release_eip_address(&self, allocation_id: &str) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("AllocationId", allocation_id);
        self.rpc
            .execute("ReleaseEipAddress", query.into_pairs())
            .await
    }

    /// List elastic IPs in the region.
    pub async fn describe_eip_addresses(
        &self,
        params: &DescribeEipAddressesParams,
    ) -> Result<DescribeEipAddressesResponse> {
        let mut query = self.region_params();
        for (key, value) in params.to_pairs() {
            query.push(&key, value);
        }
        self.rpc
            .execute("DescribeEipAddresses", query.into_pairs())
            .await
    }

    /// Change an elastic IP's peak bandwidth.
    ///
    /// Bandwidth travels as a string, as the API expects.
    pub async fn modify_eip_address_attribute(
        &self,
        allocation_id: &str,
        bandwidth: u32,
    ) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("AllocationId", allocation_id);
        query.push("Bandwidth", bandwidth.to_string());
        self.rpc
            .execute("ModifyEipAddressAttribute", query.into_pairs())
            .await
    }

    /// Bind an elastic IP to a resource.
    pub async fn associate_eip_address(
        &self,
        allocation_id: &str,
        instance_id: &str,
        instance_type: EipInstanceType,
    ) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("AllocationId", allocation_id);
        query.push("InstanceId", instance_id);
        query.push("InstanceType", instance_type);
        self.rpc
            .execute("AssociateEipAddress", query.into_pairs())
            .await
    }

    /// Unbind an elastic IP from a resource.
    pub async fn unassociate_eip_address(
        &self,
        allocation_id: &str,
        instance_id: &str,
        instance_type: EipInstanceType,
    ) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("AllocationId", allocation_id);
        query.push("InstanceId", instance_id);
        query.push("InstanceType", instance_type);
        self.rpc
            .execute("UnassociateEipAddress", query.into_pairs())
            .await
    }
}
