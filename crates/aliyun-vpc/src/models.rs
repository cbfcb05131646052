//! VPC data models: request parameters and response bodies.
//!
//! Request types flatten into RPC query pairs; response types mirror the
//! provider's `PascalCase` JSON with its nested single-key list wrappers.

use aliyun_core::query::QueryParams;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource kinds an elastic IP can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EipInstanceType {
    /// A NAT gateway, the common case here.
    #[default]
    Nat,
    /// A compute instance.
    EcsInstance,
    /// A load balancer.
    SlbInstance,
    /// A secondary elastic network interface.
    NetworkInterface,
}

impl EipInstanceType {
    /// The wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nat => "Nat",
            Self::EcsInstance => "EcsInstance",
            Self::SlbInstance => "SlbInstance",
            Self::NetworkInterface => "NetworkInterface",
        }
    }
}

impl fmt::Display for EipInstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to create a VPC.
///
/// Without a CIDR block the provider picks one of its three private ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateVpcRequest {
    /// Display name.
    pub vpc_name: String,
    /// Address range, e.g. `192.168.0.0/16`.
    pub cidr_block: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

impl CreateVpcRequest {
    /// Create a request with the provider's default address range.
    pub fn new(vpc_name: impl Into<String>) -> Self {
        Self {
            vpc_name: vpc_name.into(),
            ..Self::default()
        }
    }

    /// Pick the address range explicitly.
    #[must_use]
    pub fn with_cidr_block(mut self, cidr_block: impl Into<String>) -> Self {
        self.cidr_block = Some(cidr_block.into());
        self
    }

    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push("VpcName", &self.vpc_name);
        params.push_opt("CidrBlock", self.cidr_block.as_deref());
        params.push_opt("Description", self.description.as_deref());
        params.into_pairs()
    }
}

/// Query parameters for `DescribeVpcs`.
#[derive(Debug, Clone, Default)]
pub struct DescribeVpcsParams {
    /// Filter by VPC id.
    pub vpc_id: Option<String>,
    /// Filter by VPC name.
    pub vpc_name: Option<String>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Page number.
    pub page_number: Option<u32>,
}

impl DescribeVpcsParams {
    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push_opt("VpcId", self.vpc_id.as_deref());
        params.push_opt("VpcName", self.vpc_name.as_deref());
        params.push_opt("PageSize", self.page_size);
        params.push_opt("PageNumber", self.page_number);
        params.into_pairs()
    }
}

/// Request to create a vSwitch inside a VPC zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateVSwitchRequest {
    /// Zone the vSwitch lives in.
    pub zone_id: String,
    /// Parent VPC.
    pub vpc_id: String,
    /// Address range inside the VPC's range, e.g. `10.1.0.0/24`.
    pub cidr_block: String,
    /// Display name.
    pub v_switch_name: String,
    /// Free-form description.
    pub description: Option<String>,
}

impl CreateVSwitchRequest {
    /// Create a request.
    pub fn new(
        zone_id: impl Into<String>,
        vpc_id: impl Into<String>,
        cidr_block: impl Into<String>,
        v_switch_name: impl Into<String>,
    ) -> Self {
        Self {
            zone_id: zone_id.into(),
            vpc_id: vpc_id.into(),
            cidr_block: cidr_block.into(),
            v_switch_name: v_switch_name.into(),
            description: None,
        }
    }

    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push("ZoneId", &self.zone_id);
        params.push("VpcId", &self.vpc_id);
        params.push("CidrBlock", &self.cidr_block);
        params.push("VSwitchName", &self.v_switch_name);
        params.push_opt("Description", self.description.as_deref());
        params.into_pairs()
    }
}

/// Query parameters for `DescribeVSwitches`.
#[derive(Debug, Clone, Default)]
pub struct DescribeVSwitchesParams {
    /// Filter by zone id.
    pub zone_id: Option<String>,
    /// Filter by vSwitch id.
    pub v_switch_id: Option<String>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Page number.
    pub page_number: Option<u32>,
}

impl DescribeVSwitchesParams {
    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push_opt("ZoneId", self.zone_id.as_deref());
        params.push_opt("VSwitchId", self.v_switch_id.as_deref());
        params.push_opt("PageSize", self.page_size);
        params.push_opt("PageNumber", self.page_number);
        params.into_pairs()
    }
}

/// Request to create a NAT gateway.
///
/// Defaults to the enhanced gateway type on pay-as-you-go billing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateNatGatewayRequest {
    /// Parent VPC.
    pub vpc_id: String,
    /// vSwitch the gateway attaches to.
    pub v_switch_id: String,
    /// Display name.
    pub name: String,
    /// Gateway type.
    pub nat_type: String,
    /// Billing mode.
    pub instance_charge_type: String,
}

impl CreateNatGatewayRequest {
    /// Create a request with the default type and billing.
    pub fn new(
        vpc_id: impl Into<String>,
        v_switch_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            vpc_id: vpc_id.into(),
            v_switch_id: v_switch_id.into(),
            name: name.into(),
            nat_type: "Enhanced".to_string(),
            instance_charge_type: "PostPaid".to_string(),
        }
    }

    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push("VpcId", &self.vpc_id);
        params.push("VSwitchId", &self.v_switch_id);
        params.push("Name", &self.name);
        params.push("NatType", &self.nat_type);
        params.push("InstanceChargeType", &self.instance_charge_type);
        params.into_pairs()
    }
}

/// Query parameters for `DescribeNatGateways`.
#[derive(Debug, Clone, Default)]
pub struct DescribeNatGatewaysParams {
    /// Filter by gateway id.
    pub nat_gateway_id: Option<String>,
    /// Filter by VPC id.
    pub vpc_id: Option<String>,
    /// Filter by name.
    pub name: Option<String>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Page number.
    pub page_number: Option<u32>,
}

impl DescribeNatGatewaysParams {
    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push_opt("NatGatewayId", self.nat_gateway_id.as_deref());
        params.push_opt("VpcId", self.vpc_id.as_deref());
        params.push_opt("Name", self.name.as_deref());
        params.push_opt("PageSize", self.page_size);
        params.push_opt("PageNumber", self.page_number);
        params.into_pairs()
    }
}

/// Query parameters for `DescribeForwardTableEntries`.
#[derive(Debug, Clone, Default)]
pub struct DescribeForwardTableEntriesParams {
    /// Filter by entry id.
    pub forward_entry_id: Option<String>,
    /// Filter by entry name.
    pub forward_entry_name: Option<String>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Page number.
    pub page_number: Option<u32>,
}

impl DescribeForwardTableEntriesParams {
    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push_opt("ForwardEntryId", self.forward_entry_id.as_deref());
        params.push_opt("ForwardEntryName", self.forward_entry_name.as_deref());
        params.push_opt("PageSize", self.page_size);
        params.push_opt("PageNumber", self.page_number);
        params.into_pairs()
    }
}

/// Request to create a DNAT forward entry.
///
/// Maps an external ip/port on the gateway to an internal ip/port. Ports
/// are strings on the wire; the API also accepts ranges like `80/90`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateForwardEntryRequest {
    /// External address, usually the gateway's elastic IP.
    pub external_ip: String,
    /// External port.
    pub external_port: String,
    /// Internal address of the target.
    pub internal_ip: String,
    /// Internal port.
    pub internal_port: String,
    /// Forwarding protocol, `tcp` by default.
    pub ip_protocol: String,
    /// Entry name, often the target instance's name.
    pub forward_entry_name: Option<String>,
}

impl CreateForwardEntryRequest {
    /// Create a TCP entry.
    pub fn new(
        external_ip: impl Into<String>,
        external_port: impl Into<String>,
        internal_ip: impl Into<String>,
        internal_port: impl Into<String>,
    ) -> Self {
        Self {
            external_ip: external_ip.into(),
            external_port: external_port.into(),
            internal_ip: internal_ip.into(),
            internal_port: internal_port.into(),
            ip_protocol: "tcp".to_string(),
            forward_entry_name: None,
        }
    }

    /// Override the protocol, e.g. `udp` or `any`.
    #[must_use]
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.ip_protocol = protocol.into();
        self
    }

    /// Name the entry.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.forward_entry_name = Some(name.into());
        self
    }

    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push("ExternalIp", &self.external_ip);
        params.push("ExternalPort", &self.external_port);
        params.push("InternalIp", &self.internal_ip);
        params.push("InternalPort", &self.internal_port);
        params.push("IpProtocol", &self.ip_protocol);
        params.push_opt("ForwardEntryName", self.forward_entry_name.as_deref());
        params.into_pairs()
    }
}

/// Fields of a DNAT forward entry that can change in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyForwardEntryRequest {
    /// New external address.
    pub external_ip: Option<String>,
    /// New external port.
    pub external_port: Option<String>,
    /// New internal address.
    pub internal_ip: Option<String>,
    /// New internal port.
    pub internal_port: Option<String>,
    /// New protocol.
    pub ip_protocol: Option<String>,
    /// New entry name.
    pub forward_entry_name: Option<String>,
}

impl ModifyForwardEntryRequest {
    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push_opt("ExternalIp", self.external_ip.as_deref());
        params.push_opt("ExternalPort", self.external_port.as_deref());
        params.push_opt("InternalIp", self.internal_ip.as_deref());
        params.push_opt("InternalPort", self.internal_port.as_deref());
        params.push_opt("IpProtocol", self.ip_protocol.as_deref());
        params.push_opt("ForwardEntryName", self.forward_entry_name.as_deref());
        params.into_pairs()
    }
}

/// Request to allocate an elastic IP.
///
/// Bandwidth travels as a string regardless of how it is supplied, matching
/// the provider's parameter type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocateEipRequest {
    /// Billing mode for traffic.
    pub internet_charge_type: String,
    /// Peak bandwidth in Mbit/s.
    pub bandwidth: u32,
}

impl Default for AllocateEipRequest {
    fn default() -> Self {
        Self {
            internet_charge_type: "PayByTraffic".to_string(),
            bandwidth: 200,
        }
    }
}

impl AllocateEipRequest {
    /// Create a request with pay-by-traffic billing at 200 Mbit/s.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the peak bandwidth.
    #[must_use]
    pub const fn with_bandwidth(mut self, mbit: u32) -> Self {
        self.bandwidth = mbit;
        self
    }

    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push("InternetChargeType", &self.internet_charge_type);
        params.push("Bandwidth", self.bandwidth.to_string());
        params.into_pairs()
    }
}

/// Query parameters for `DescribeEipAddresses`.
#[derive(Debug, Clone, Default)]
pub struct DescribeEipAddressesParams {
    /// Filter by allocation id.
    pub allocation_id: Option<String>,
    /// Filter by the address itself.
    pub eip_address: Option<String>,
    /// Filter by status, e.g. `Available` or `InUse`.
    pub status: Option<String>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Page number.
    pub page_number: Option<u32>,
}

impl DescribeEipAddressesParams {
    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push_opt("AllocationId", self.allocation_id.as_deref());
        params.push_opt("EipAddress", self.eip_address.as_deref());
        params.push_opt("Status", self.status.as_deref());
        params.push_opt("PageSize", self.page_size);
        params.push_opt("PageNumber", self.page_number);
        params.into_pairs()
    }
}

// Response bodies.

/// Response body of `CreateVpc`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVpcResponse {
    /// Provider request id.
    pub request_id: String,
    /// Id of the created VPC.
    pub vpc_id: String,
    /// Router created alongside the VPC.
    #[serde(default)]
    pub v_router_id: Option<String>,
    /// System route table of that router.
    #[serde(default)]
    pub route_table_id: Option<String>,
}

/// Response body of `DescribeVpcs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVpcsResponse {
    /// Provider request id.
    pub request_id: String,
    /// Total number of matching VPCs.
    #[serde(default)]
    pub total_count: Option<u32>,
    /// Current page number.
    #[serde(default)]
    pub page_number: Option<u32>,
    /// Current page size.
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Matched VPCs.
    pub vpcs: VpcList,
}

/// List wrapper for VPCs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct VpcList {
    /// The VPCs.
    #[serde(default)]
    pub vpc: Vec<Vpc>,
}

/// One VPC.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Vpc {
    /// VPC id.
    pub vpc_id: String,
    /// Display name.
    #[serde(default)]
    pub vpc_name: Option<String>,
    /// Address range.
    #[serde(default)]
    pub cidr_block: Option<String>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: Option<String>,
    /// Region id.
    #[serde(default)]
    pub region_id: Option<String>,
    /// Whether this is the region's default VPC.
    #[serde(default)]
    pub is_default: Option<bool>,
    /// vSwitches inside the VPC.
    #[serde(default)]
    pub v_switch_ids: Option<VSwitchIdList>,
    /// Creation time.
    #[serde(default)]
    pub creation_time: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

/// List wrapper for vSwitch ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct VSwitchIdList {
    /// The ids.
    #[serde(default)]
    pub v_switch_id: Vec<String>,
}

/// Response body of `DescribeZones`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeZonesResponse {
    /// Provider request id.
    pub request_id: String,
    /// Zones of the region.
    pub zones: ZoneList,
}

/// List wrapper for zones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ZoneList {
    /// The zones.
    #[serde(default)]
    pub zone: Vec<Zone>,
}

/// One availability zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Zone {
    /// Zone id, e.g. `cn-hangzhou-h`.
    pub zone_id: String,
    /// Human-readable zone name.
    #[serde(default)]
    pub local_name: Option<String>,
}

/// Response body of `CreateVSwitch`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVSwitchResponse {
    /// Provider request id.
    pub request_id: String,
    /// Id of the created vSwitch.
    pub v_switch_id: String,
}

/// Response body of `DescribeVSwitches`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVSwitchesResponse {
    /// Provider request id.
    pub request_id: String,
    /// Total number of matching vSwitches.
    #[serde(default)]
    pub total_count: Option<u32>,
    /// Current page number.
    #[serde(default)]
    pub page_number: Option<u32>,
    /// Current page size.
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Matched vSwitches.
    pub v_switches: VSwitchList,
}

/// List wrapper for vSwitches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct VSwitchList {
    /// The vSwitches.
    #[serde(default)]
    pub v_switch: Vec<VSwitch>,
}

/// One vSwitch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct VSwitch {
    /// vSwitch id.
    pub v_switch_id: String,
    /// Parent VPC.
    #[serde(default)]
    pub vpc_id: Option<String>,
    /// Zone the vSwitch lives in.
    #[serde(default)]
    pub zone_id: Option<String>,
    /// Address range.
    #[serde(default)]
    pub cidr_block: Option<String>,
    /// Display name.
    #[serde(default)]
    pub v_switch_name: Option<String>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: Option<String>,
    /// Free addresses remaining in the range.
    #[serde(default)]
    pub available_ip_address_count: Option<u64>,
    /// Creation time.
    #[serde(default)]
    pub creation_time: Option<String>,
}

/// Response body of `CreateNatGateway`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CreateNatGatewayResponse {
    /// Provider request id.
    pub request_id: String,
    /// Id of the created gateway.
    pub nat_gateway_id: String,
    /// DNAT table ids created with the gateway.
    #[serde(default)]
    pub forward_table_ids: Option<ForwardTableIdList>,
}

/// List wrapper for forward table ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ForwardTableIdList {
    /// The ids.
    #[serde(default)]
    pub forward_table_id: Vec<String>,
}

/// Response body of `DescribeNatGateways`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeNatGatewaysResponse {
    /// Provider request id.
    pub request_id: String,
    /// Total number of matching gateways.
    #[serde(default)]
    pub total_count: Option<u32>,
    /// Current page number.
    #[serde(default)]
    pub page_number: Option<u32>,
    /// Current page size.
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Matched gateways.
    pub nat_gateways: NatGatewayList,
}

/// List wrapper for NAT gateways.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NatGatewayList {
    /// The gateways.
    #[serde(default)]
    pub nat_gateway: Vec<NatGateway>,
}

/// One NAT gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NatGateway {
    /// Gateway id.
    pub nat_gateway_id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: Option<String>,
    /// Parent VPC.
    #[serde(default)]
    pub vpc_id: Option<String>,
    /// Gateway type.
    #[serde(default)]
    pub nat_type: Option<String>,
    /// Billing mode.
    #[serde(default)]
    pub instance_charge_type: Option<String>,
    /// DNAT tables of the gateway.
    #[serde(default)]
    pub forward_table_ids: Option<ForwardTableIdList>,
    /// Creation time.
    #[serde(default)]
    pub creation_time: Option<String>,
}

/// Response body of `DescribeForwardTableEntries`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeForwardTableEntriesResponse {
    /// Provider request id.
    pub request_id: String,
    /// Total number of matching entries.
    #[serde(default)]
    pub total_count: Option<u32>,
    /// Current page number.
    #[serde(default)]
    pub page_number: Option<u32>,
    /// Current page size.
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Matched entries.
    pub forward_table_entries: ForwardTableEntryList,
}

/// List wrapper for DNAT entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ForwardTableEntryList {
    /// The entries.
    #[serde(default)]
    pub forward_table_entry: Vec<ForwardTableEntry>,
}

/// One DNAT forward entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ForwardTableEntry {
    /// Entry id.
    pub forward_entry_id: String,
    /// Entry name.
    #[serde(default)]
    pub forward_entry_name: Option<String>,
    /// Table the entry belongs to.
    #[serde(default)]
    pub forward_table_id: Option<String>,
    /// External address.
    #[serde(default)]
    pub external_ip: Option<String>,
    /// External port.
    #[serde(default)]
    pub external_port: Option<String>,
    /// Internal address.
    #[serde(default)]
    pub internal_ip: Option<String>,
    /// Internal port.
    #[serde(default)]
    pub internal_port: Option<String>,
    /// Forwarding protocol.
    #[serde(default)]
    pub ip_protocol: Option<String>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: Option<String>,
}

/// Response body of `CreateForwardEntry`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CreateForwardEntryResponse {
    /// Provider request id.
    pub request_id: String,
    /// Id of the created entry.
    pub forward_entry_id: String,
}

/// Response body of `AllocateEipAddress`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AllocateEipResponse {
    /// Provider request id.
    pub request_id: String,
    /// Allocation id used in later calls.
    pub allocation_id: String,
    /// The allocated address.
    #[serde(default)]
    pub eip_address: Option<String>,
}

/// Response body of `DescribeEipAddresses`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEipAddressesResponse {
    /// Provider request id.
    pub request_id: String,
    /// Total number of matching addresses.
    #[serde(default)]
    pub total_count: Option<u32>,
    /// Current page number.
    #[serde(default)]
    pub page_number: Option<u32>,
    /// Current page size.
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Matched addresses.
    pub eip_addresses: EipAddressList,
}

/// List wrapper for elastic IPs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct EipAddressList {
    /// The addresses.
    #[serde(default)]
    pub eip_address: Vec<EipAddress>,
}

/// One elastic IP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct EipAddress {
    /// Allocation id.
    pub allocation_id: String,
    /// The address.
    #[serde(default)]
    pub ip_address: Option<String>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: Option<String>,
    /// Peak bandwidth in Mbit/s, reported as a string.
    #[serde(default)]
    pub bandwidth: Option<String>,
    /// Billing mode for traffic.
    #[serde(default)]
    pub internet_charge_type: Option<String>,
    /// Bound resource, if any.
    #[serde(default)]
    pub instance_id: Option<String>,
    /// Kind of the bound resource.
    #[serde(default)]
    pub instance_type: Option<String>,
    /// Allocation time.
    #[serde(default)]
    pub allocation_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_vpc_omits_cidr_by_default() {
        let pairs = CreateVpcRequest::new("dev-net").to_pairs();
        assert_eq!(pairs, vec![("VpcName".to_string(), "dev-net".to_string())]);
    }

    #[test]
    fn create_vpc_with_explicit_cidr() {
        let pairs = CreateVpcRequest::new("dev-net")
            .with_cidr_block("192.168.0.0/16")
            .to_pairs();
        assert!(pairs
            .iter()
            .any(|(k, v)| k == "CidrBlock" && v == "192.168.0.0/16"));
    }

    #[test]
    fn create_nat_gateway_defaults() {
        let pairs = CreateNatGatewayRequest::new("vpc-1", "vsw-1", "egress").to_pairs();
        assert!(pairs.iter().any(|(k, v)| k == "NatType" && v == "Enhanced"));
        assert!(pairs
            .iter()
            .any(|(k, v)| k == "InstanceChargeType" && v == "PostPaid"));
    }

    #[test]
    fn forward_entry_defaults_to_tcp() {
        let pairs =
            CreateForwardEntryRequest::new("47.98.1.2", "8022", "172.16.0.10", "22").to_pairs();
        assert!(pairs.iter().any(|(k, v)| k == "IpProtocol" && v == "tcp"));
        assert!(pairs.iter().any(|(k, v)| k == "ExternalPort" && v == "8022"));
        assert!(pairs.iter().any(|(k, v)| k == "InternalPort" && v == "22"));
    }

    #[test]
    fn allocate_eip_stringifies_bandwidth() {
        let pairs = AllocateEipRequest::new().to_pairs();
        assert!(pairs.iter().any(|(k, v)| k == "Bandwidth" && v == "200"));
        assert!(pairs
            .iter()
            .any(|(k, v)| k == "InternetChargeType" && v == "PayByTraffic"));

        let pairs = AllocateEipRequest::new().with_bandwidth(50).to_pairs();
        assert!(pairs.iter().any(|(k, v)| k == "Bandwidth" && v == "50"));
    }

    #[test]
    fn eip_instance_type_defaults_to_nat() {
        assert_eq!(EipInstanceType::default().as_str(), "Nat");
        assert_eq!(EipInstanceType::EcsInstance.to_string(), "EcsInstance");
    }

    #[test]
    fn nat_gateway_response_parses_forward_tables() {
        let json = r#"{
            "RequestId": "req-1",
            "NatGatewayId": "ngw-1",
            "ForwardTableIds": { "ForwardTableId": ["ftb-1"] }
        }"#;
        let response: CreateNatGatewayResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.forward_table_ids.unwrap().forward_table_id,
            vec!["ftb-1"]
        );
    }
}
