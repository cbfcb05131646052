//! ECS data models: request parameters and response bodies.
//!
//! Request types know how to flatten themselves into the RPC query pairs;
//! response types mirror the provider's `PascalCase` JSON, including its
//! nested single-key list wrappers. Attributes the caller supplies travel
//! unmodified; the only local reshaping is port-range expansion, protocol
//! validation, and list-to-JSON-string packing for key pair names.

use aliyun_core::query::QueryParams;
use aliyun_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// IP protocols accepted by security group rules.
///
/// Anything else is rejected locally, before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpProtocol {
    /// TCP
    Tcp,
    /// UDP
    Udp,
    /// ICMP
    Icmp,
    /// GRE
    Gre,
    /// All protocols
    All,
}

impl IpProtocol {
    /// The lowercase wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tcp => "tcp",
            Self::Udp => "udp",
            Self::Icmp => "icmp",
            Self::Gre => "gre",
            Self::All => "all",
        }
    }
}

impl fmt::Display for IpProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IpProtocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tcp" => Ok(Self::Tcp),
            "udp" => Ok(Self::Udp),
            "icmp" => Ok(Self::Icmp),
            "gre" => Ok(Self::Gre),
            "all" => Ok(Self::All),
            other => Err(Error::InvalidParameter(format!(
                "unsupported ip protocol `{other}`, expected one of tcp, udp, icmp, gre, all"
            ))),
        }
    }
}

/// A `begin/end` port range as the API spells it.
///
/// A bare port number expands to `port/port`; a string without a `/` is
/// doubled the same way; a string already containing `/` passes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortRange(String);

impl PortRange {
    /// The wire value, e.g. `8080/8080`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u16> for PortRange {
    fn from(port: u16) -> Self {
        Self(format!("{port}/{port}"))
    }
}

impl From<&str> for PortRange {
    fn from(range: &str) -> Self {
        if range.contains('/') {
            Self(range.to_string())
        } else {
            Self(format!("{range}/{range}"))
        }
    }
}

impl From<String> for PortRange {
    fn from(range: String) -> Self {
        Self::from(range.as_str())
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One ingress rule for a security group.
///
/// The same range is sent as both `PortRange` and `SourcePortRange`; the
/// source CIDR defaults to the open internet, as the API's console does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngressRule {
    /// Rule protocol.
    pub protocol: IpProtocol,
    /// Destination (and source) port range.
    pub port_range: PortRange,
    /// Source CIDR the rule applies to.
    pub source_cidr_ip: String,
}

impl IngressRule {
    /// Create a rule open to `0.0.0.0/0`.
    pub fn new(protocol: IpProtocol, port_range: impl Into<PortRange>) -> Self {
        Self {
            protocol,
            port_range: port_range.into(),
            source_cidr_ip: "0.0.0.0/0".to_string(),
        }
    }

    /// Restrict the rule to a source CIDR.
    #[must_use]
    pub fn with_source_cidr(mut self, cidr: impl Into<String>) -> Self {
        self.source_cidr_ip = cidr.into();
        self
    }

    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push("IpProtocol", self.protocol);
        params.push("PortRange", &self.port_range);
        params.push("SourcePortRange", &self.port_range);
        params.push("SourceCidrIp", &self.source_cidr_ip);
        params.into_pairs()
    }
}

/// One instance id or a batch of them.
///
/// Single and batch forms map to different API actions with different
/// parameter shapes; the conversion impls keep call sites uniform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceSelector {
    /// A single instance.
    One(String),
    /// A batch of instances.
    Many(Vec<String>),
}

impl From<&str> for InstanceSelector {
    fn from(id: &str) -> Self {
        Self::One(id.to_string())
    }
}

impl From<String> for InstanceSelector {
    fn from(id: String) -> Self {
        Self::One(id)
    }
}

impl From<Vec<String>> for InstanceSelector {
    fn from(ids: Vec<String>) -> Self {
        Self::Many(ids)
    }
}

impl From<&[&str]> for InstanceSelector {
    fn from(ids: &[&str]) -> Self {
        Self::Many(ids.iter().map(|id| (*id).to_string()).collect())
    }
}

/// Query parameters for `DescribeInstances`.
#[derive(Debug, Clone)]
pub struct DescribeInstancesParams {
    /// Page size, defaults to 100.
    pub page_size: u32,
    /// Page number.
    pub page_number: Option<u32>,
    /// Filter by instance name (wildcards allowed by the API).
    pub instance_name: Option<String>,
    /// Filter by status, e.g. `Running`.
    pub status: Option<String>,
    /// Filter by zone id.
    pub zone_id: Option<String>,
    /// Filter by vSwitch id.
    pub v_switch_id: Option<String>,
}

impl Default for DescribeInstancesParams {
    fn default() -> Self {
        Self {
            page_size: 100,
            page_number: None,
            instance_name: None,
            status: None,
            zone_id: None,
            v_switch_id: None,
        }
    }
}

impl DescribeInstancesParams {
    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push("PageSize", self.page_size);
        params.push_opt("PageNumber", self.page_number);
        params.push_opt("InstanceName", self.instance_name.as_deref());
        params.push_opt("Status", self.status.as_deref());
        params.push_opt("ZoneId", self.zone_id.as_deref());
        params.push_opt("VSwitchId", self.v_switch_id.as_deref());
        params.into_pairs()
    }
}

/// Query parameters for `DescribeInstanceStatus`.
#[derive(Debug, Clone)]
pub struct DescribeInstanceStatusParams {
    /// Page size, defaults to 50.
    pub page_size: u32,
    /// Page number.
    pub page_number: Option<u32>,
    /// Filter by zone id.
    pub zone_id: Option<String>,
}

impl Default for DescribeInstanceStatusParams {
    fn default() -> Self {
        Self {
            page_size: 50,
            page_number: None,
            zone_id: None,
        }
    }
}

impl DescribeInstanceStatusParams {
    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push("PageSize", self.page_size);
        params.push_opt("PageNumber", self.page_number);
        params.push_opt("ZoneId", self.zone_id.as_deref());
        params.into_pairs()
    }
}

/// Query parameters for `DescribeImages`.
#[derive(Debug, Clone, Default)]
pub struct DescribeImagesParams {
    /// Filter by image id.
    pub image_id: Option<String>,
    /// Filter by image name.
    pub image_name: Option<String>,
    /// Filter by status, e.g. `Available`.
    pub status: Option<String>,
    /// Filter by owner alias: `system`, `self`, `others`, `marketplace`.
    pub image_owner_alias: Option<String>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Page number.
    pub page_number: Option<u32>,
}

impl DescribeImagesParams {
    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push_opt("ImageId", self.image_id.as_deref());
        params.push_opt("ImageName", self.image_name.as_deref());
        params.push_opt("Status", self.status.as_deref());
        params.push_opt("ImageOwnerAlias", self.image_owner_alias.as_deref());
        params.push_opt("PageSize", self.page_size);
        params.push_opt("PageNumber", self.page_number);
        params.into_pairs()
    }
}

/// Query parameters for `DescribeKeyPairs`.
#[derive(Debug, Clone, Default)]
pub struct DescribeKeyPairsParams {
    /// Filter by key pair name (wildcards allowed by the API).
    pub key_pair_name: Option<String>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Page number.
    pub page_number: Option<u32>,
}

impl DescribeKeyPairsParams {
    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push_opt("KeyPairName", self.key_pair_name.as_deref());
        params.push_opt("PageSize", self.page_size);
        params.push_opt("PageNumber", self.page_number);
        params.into_pairs()
    }
}

/// Query parameters for `DescribeSecurityGroups`.
#[derive(Debug, Clone, Default)]
pub struct DescribeSecurityGroupsParams {
    /// Filter by VPC id.
    pub vpc_id: Option<String>,
    /// Filter by security group name.
    pub security_group_name: Option<String>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Page number.
    pub page_number: Option<u32>,
}

impl DescribeSecurityGroupsParams {
    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push_opt("VpcId", self.vpc_id.as_deref());
        params.push_opt("SecurityGroupName", self.security_group_name.as_deref());
        params.push_opt("PageSize", self.page_size);
        params.push_opt("PageNumber", self.page_number);
        params.into_pairs()
    }
}

/// Request to create one instance.
///
/// Defaults match the provider console's cheapest useful choices: a 40 GiB
/// `cloud_efficiency` system disk and the `SpotAsPriceGo` spot strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateInstanceRequest {
    /// Display name.
    pub instance_name: String,
    /// Image to boot from.
    pub image_id: String,
    /// Instance type, e.g. `ecs.g6.large`.
    pub instance_type: String,
    /// vSwitch the primary NIC attaches to.
    pub v_switch_id: String,
    /// Security group the instance joins.
    pub security_group_id: String,
    /// System disk size in GiB.
    pub system_disk_size: u32,
    /// System disk category.
    pub system_disk_category: String,
    /// Spot strategy.
    pub spot_strategy: String,
    /// Key pair granting SSH access.
    pub key_pair_name: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

impl CreateInstanceRequest {
    /// Create a request with the default disk and spot settings.
    pub fn new(
        instance_name: impl Into<String>,
        image_id: impl Into<String>,
        instance_type: impl Into<String>,
        v_switch_id: impl Into<String>,
        security_group_id: impl Into<String>,
    ) -> Self {
        Self {
            instance_name: instance_name.into(),
            image_id: image_id.into(),
            instance_type: instance_type.into(),
            v_switch_id: v_switch_id.into(),
            security_group_id: security_group_id.into(),
            system_disk_size: 40,
            system_disk_category: "cloud_efficiency".to_string(),
            spot_strategy: "SpotAsPriceGo".to_string(),
            key_pair_name: None,
            description: None,
        }
    }

    /// Override the system disk size in GiB.
    #[must_use]
    pub const fn with_system_disk_size(mut self, gib: u32) -> Self {
        self.system_disk_size = gib;
        self
    }

    /// Override the system disk category.
    #[must_use]
    pub fn with_system_disk_category(mut self, category: impl Into<String>) -> Self {
        self.system_disk_category = category.into();
        self
    }

    /// Override the spot strategy.
    #[must_use]
    pub fn with_spot_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.spot_strategy = strategy.into();
        self
    }

    /// Attach a key pair.
    #[must_use]
    pub fn with_key_pair(mut self, key_pair_name: impl Into<String>) -> Self {
        self.key_pair_name = Some(key_pair_name.into());
        self
    }

    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push("InstanceName", &self.instance_name);
        params.push("ImageId", &self.image_id);
        params.push("InstanceType", &self.instance_type);
        params.push("VSwitchId", &self.v_switch_id);
        params.push("SecurityGroupId", &self.security_group_id);
        params.push("SystemDisk.Size", self.system_disk_size);
        params.push("SystemDisk.Category", &self.system_disk_category);
        params.push("SpotStrategy", &self.spot_strategy);
        params.push_opt("KeyPairName", self.key_pair_name.as_deref());
        params.push_opt("Description", self.description.as_deref());
        params.into_pairs()
    }
}

// Response bodies. Nested single-key wrappers (`Instances.Instance`) are the
// provider's list encoding and are kept as-is.

/// Response body of `DescribeInstances`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesResponse {
    /// Provider request id.
    pub request_id: String,
    /// Total number of matching instances.
    #[serde(default)]
    pub total_count: Option<u32>,
    /// Current page number.
    #[serde(default)]
    pub page_number: Option<u32>,
    /// Current page size.
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Matched instances.
    pub instances: InstanceList,
}

/// List wrapper for instances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceList {
    /// The instances.
    #[serde(default)]
    pub instance: Vec<Instance>,
}

/// One compute instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Instance {
    /// Instance id.
    pub instance_id: String,
    /// Display name.
    #[serde(default)]
    pub instance_name: Option<String>,
    /// Lifecycle status, e.g. `Running`.
    #[serde(default)]
    pub status: Option<String>,
    /// Instance type.
    #[serde(default)]
    pub instance_type: Option<String>,
    /// Image the instance booted from.
    #[serde(default)]
    pub image_id: Option<String>,
    /// Region id.
    #[serde(default)]
    pub region_id: Option<String>,
    /// Zone id.
    #[serde(default)]
    pub zone_id: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub creation_time: Option<String>,
    /// Key pair attached at creation.
    #[serde(default)]
    pub key_pair_name: Option<String>,
    /// Spot strategy.
    #[serde(default)]
    pub spot_strategy: Option<String>,
    /// Public addresses.
    #[serde(default)]
    pub public_ip_address: Option<IpAddressList>,
    /// Classic-network private addresses.
    #[serde(default)]
    pub inner_ip_address: Option<IpAddressList>,
    /// VPC attachment details.
    #[serde(default)]
    pub vpc_attributes: Option<VpcAttributes>,
    /// Security groups the instance belongs to.
    #[serde(default)]
    pub security_group_ids: Option<SecurityGroupIdList>,
}

/// List wrapper for IP addresses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct IpAddressList {
    /// The addresses.
    #[serde(default)]
    pub ip_address: Vec<String>,
}

/// VPC attachment details of an instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct VpcAttributes {
    /// VPC id.
    #[serde(default)]
    pub vpc_id: Option<String>,
    /// vSwitch id.
    #[serde(default)]
    pub v_switch_id: Option<String>,
    /// Private addresses.
    #[serde(default)]
    pub private_ip_address: Option<IpAddressList>,
}

/// List wrapper for security group ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityGroupIdList {
    /// The ids.
    #[serde(default)]
    pub security_group_id: Vec<String>,
}

/// Response body of `DescribeInstanceStatus`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceStatusResponse {
    /// Provider request id.
    pub request_id: String,
    /// Total number of instances.
    #[serde(default)]
    pub total_count: Option<u32>,
    /// Current page number.
    #[serde(default)]
    pub page_number: Option<u32>,
    /// Current page size.
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Statuses.
    pub instance_statuses: InstanceStatusList,
}

/// List wrapper for instance statuses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceStatusList {
    /// The statuses.
    #[serde(default)]
    pub instance_status: Vec<InstanceStatus>,
}

/// Status of one instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceStatus {
    /// Instance id.
    pub instance_id: String,
    /// Lifecycle status.
    pub status: String,
}

/// Response body of `DescribeImageSupportInstanceTypes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImageSupportInstanceTypesResponse {
    /// Provider request id.
    pub request_id: String,
    /// Supported instance types.
    pub instance_types: InstanceTypeList,
}

/// List wrapper for instance types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceTypeList {
    /// The types.
    #[serde(default)]
    pub instance_type: Vec<InstanceType>,
}

/// One instance type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceType {
    /// Type id, e.g. `ecs.g6.large`.
    pub instance_type_id: String,
    /// vCPU count.
    #[serde(default)]
    pub cpu_core_count: Option<u32>,
    /// Memory in GiB.
    #[serde(default)]
    pub memory_size: Option<f64>,
    /// Family, e.g. `ecs.g6`.
    #[serde(default)]
    pub instance_type_family: Option<String>,
}

/// Response body of `DescribeImages`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImagesResponse {
    /// Provider request id.
    pub request_id: String,
    /// Total number of matching images.
    #[serde(default)]
    pub total_count: Option<u32>,
    /// Current page number.
    #[serde(default)]
    pub page_number: Option<u32>,
    /// Current page size.
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Matched images.
    pub images: ImageList,
}

/// List wrapper for images.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ImageList {
    /// The images.
    #[serde(default)]
    pub image: Vec<Image>,
}

/// One image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Image {
    /// Image id.
    pub image_id: String,
    /// Display name.
    #[serde(default)]
    pub image_name: Option<String>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub creation_time: Option<String>,
    /// Platform, e.g. `Ubuntu`.
    #[serde(default)]
    pub platform: Option<String>,
    /// CPU architecture.
    #[serde(default)]
    pub architecture: Option<String>,
    /// OS type: `linux` or `windows`.
    #[serde(default, rename = "OSType")]
    pub os_type: Option<String>,
    /// Full OS name.
    #[serde(default, rename = "OSName")]
    pub os_name: Option<String>,
}

/// Response body of `CreateInstance`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CreateInstanceResponse {
    /// Provider request id.
    pub request_id: String,
    /// Id of the created instance.
    pub instance_id: String,
}

/// Response body of `CreateImage`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CreateImageResponse {
    /// Provider request id.
    pub request_id: String,
    /// Id of the created image.
    pub image_id: String,
}

/// Response body of the batch start/stop/reboot actions.
///
/// The single-instance actions acknowledge with the request id only; the
/// batch actions add a per-instance outcome list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceOpResponse {
    /// Provider request id.
    pub request_id: String,
    /// Per-instance outcomes, batch actions only.
    #[serde(default)]
    pub instance_responses: Option<InstanceOpResultList>,
}

/// List wrapper for per-instance outcomes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceOpResultList {
    /// The outcomes.
    #[serde(default)]
    pub instance_response: Vec<InstanceOpResult>,
}

/// Outcome of one instance within a batch operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceOpResult {
    /// Instance id.
    pub instance_id: String,
    /// Per-instance result code.
    #[serde(default)]
    pub code: Option<String>,
    /// Per-instance message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body of `CreateKeyPair`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CreateKeyPairResponse {
    /// Provider request id.
    pub request_id: String,
    /// Name of the created key pair.
    pub key_pair_name: String,
    /// Key fingerprint.
    #[serde(default)]
    pub key_pair_finger_print: Option<String>,
    /// PEM private key; returned once, never retrievable again.
    #[serde(default)]
    pub private_key_body: Option<String>,
}

/// Response body of `DescribeKeyPairs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeKeyPairsResponse {
    /// Provider request id.
    pub request_id: String,
    /// Total number of matching key pairs.
    #[serde(default)]
    pub total_count: Option<u32>,
    /// Current page number.
    #[serde(default)]
    pub page_number: Option<u32>,
    /// Current page size.
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Matched key pairs.
    pub key_pairs: KeyPairList,
}

/// List wrapper for key pairs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct KeyPairList {
    /// The key pairs.
    #[serde(default)]
    pub key_pair: Vec<KeyPair>,
}

/// One key pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct KeyPair {
    /// Key pair name.
    pub key_pair_name: String,
    /// Key fingerprint.
    #[serde(default)]
    pub key_pair_finger_print: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub creation_time: Option<String>,
}

/// Response body of `CreateSecurityGroup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSecurityGroupResponse {
    /// Provider request id.
    pub request_id: String,
    /// Id of the created security group.
    pub security_group_id: String,
}

/// Response body of `DescribeSecurityGroups`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSecurityGroupsResponse {
    /// Provider request id.
    pub request_id: String,
    /// Total number of matching groups.
    #[serde(default)]
    pub total_count: Option<u32>,
    /// Current page number.
    #[serde(default)]
    pub page_number: Option<u32>,
    /// Current page size.
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Matched groups.
    pub security_groups: SecurityGroupList,
}

/// List wrapper for security groups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityGroupList {
    /// The groups.
    #[serde(default)]
    pub security_group: Vec<SecurityGroup>,
}

/// One security group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityGroup {
    /// Security group id.
    pub security_group_id: String,
    /// Display name.
    #[serde(default)]
    pub security_group_name: Option<String>,
    /// VPC the group belongs to.
    #[serde(default)]
    pub vpc_id: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub creation_time: Option<String>,
}

/// Response body of `DescribeSecurityGroupAttribute`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSecurityGroupAttributeResponse {
    /// Provider request id.
    pub request_id: String,
    /// Security group id.
    pub security_group_id: String,
    /// Display name.
    #[serde(default)]
    pub security_group_name: Option<String>,
    /// Region id.
    #[serde(default)]
    pub region_id: Option<String>,
    /// VPC the group belongs to.
    #[serde(default)]
    pub vpc_id: Option<String>,
    /// The group's rules.
    pub permissions: PermissionList,
}

/// List wrapper for security group rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PermissionList {
    /// The rules.
    #[serde(default)]
    pub permission: Vec<Permission>,
}

/// One security group rule as the provider reports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Permission {
    /// Protocol; the provider reports it uppercased.
    pub ip_protocol: String,
    /// Port range.
    pub port_range: String,
    /// Source port range.
    #[serde(default)]
    pub source_port_range: Option<String>,
    /// Source CIDR.
    #[serde(default)]
    pub source_cidr_ip: Option<String>,
    /// Rule direction: `ingress` or `egress`.
    #[serde(default)]
    pub direction: Option<String>,
    /// Accept or drop policy.
    #[serde(default)]
    pub policy: Option<String>,
    /// Rule priority.
    #[serde(default)]
    pub priority: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ip_protocol_parses_known_values() {
        assert_eq!("tcp".parse::<IpProtocol>().unwrap(), IpProtocol::Tcp);
        assert_eq!("UDP".parse::<IpProtocol>().unwrap(), IpProtocol::Udp);
        assert_eq!("all".parse::<IpProtocol>().unwrap(), IpProtocol::All);
    }

    #[test]
    fn ip_protocol_rejects_unsupported_values() {
        let err = "vrrp".parse::<IpProtocol>().unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
        assert!(err.is_local());
    }

    #[test]
    fn port_range_expands_bare_port() {
        assert_eq!(PortRange::from(8080u16).as_str(), "8080/8080");
        assert_eq!(PortRange::from("443").as_str(), "443/443");
    }

    #[test]
    fn port_range_keeps_explicit_range() {
        assert_eq!(PortRange::from("1000/2000").as_str(), "1000/2000");
        assert_eq!(PortRange::from("-1/-1").as_str(), "-1/-1");
    }

    #[test]
    fn ingress_rule_sends_range_twice() {
        let pairs = IngressRule::new(IpProtocol::Tcp, 22u16).to_pairs();
        assert!(pairs
            .iter()
            .any(|(k, v)| k == "PortRange" && v == "22/22"));
        assert!(pairs
            .iter()
            .any(|(k, v)| k == "SourcePortRange" && v == "22/22"));
        assert!(pairs
            .iter()
            .any(|(k, v)| k == "SourceCidrIp" && v == "0.0.0.0/0"));
        assert!(pairs.iter().any(|(k, v)| k == "IpProtocol" && v == "tcp"));
    }

    #[test]
    fn ingress_rule_source_cidr_override() {
        let pairs = IngressRule::new(IpProtocol::Udp, 53u16)
            .with_source_cidr("10.0.0.0/8")
            .to_pairs();
        assert!(pairs
            .iter()
            .any(|(k, v)| k == "SourceCidrIp" && v == "10.0.0.0/8"));
    }

    #[test]
    fn instance_selector_conversions() {
        assert_eq!(
            InstanceSelector::from("i-abc"),
            InstanceSelector::One("i-abc".to_string())
        );
        assert_eq!(
            InstanceSelector::from(vec!["i-a".to_string(), "i-b".to_string()]),
            InstanceSelector::Many(vec!["i-a".to_string(), "i-b".to_string()])
        );
    }

    #[test]
    fn describe_instances_defaults_page_size() {
        let pairs = DescribeInstancesParams::default().to_pairs();
        assert_eq!(
            pairs,
            vec![("PageSize".to_string(), "100".to_string())]
        );
    }

    #[test]
    fn describe_instance_status_defaults_page_size() {
        let pairs = DescribeInstanceStatusParams::default().to_pairs();
        assert_eq!(pairs, vec![("PageSize".to_string(), "50".to_string())]);
    }

    #[test]
    fn create_instance_defaults() {
        let request =
            CreateInstanceRequest::new("web-1", "m-img", "ecs.g6.large", "vsw-1", "sg-1");
        let pairs = request.to_pairs();
        assert!(pairs
            .iter()
            .any(|(k, v)| k == "SystemDisk.Size" && v == "40"));
        assert!(pairs
            .iter()
            .any(|(k, v)| k == "SystemDisk.Category" && v == "cloud_efficiency"));
        assert!(pairs
            .iter()
            .any(|(k, v)| k == "SpotStrategy" && v == "SpotAsPriceGo"));
        assert!(!pairs.iter().any(|(k, _)| k == "KeyPairName"));
    }

    #[test]
    fn create_instance_overrides() {
        let pairs = CreateInstanceRequest::new("web-1", "m-img", "ecs.g6.large", "vsw-1", "sg-1")
            .with_system_disk_size(100)
            .with_system_disk_category("cloud_essd")
            .with_key_pair("deploy")
            .to_pairs();
        assert!(pairs
            .iter()
            .any(|(k, v)| k == "SystemDisk.Size" && v == "100"));
        assert!(pairs
            .iter()
            .any(|(k, v)| k == "SystemDisk.Category" && v == "cloud_essd"));
        assert!(pairs.iter().any(|(k, v)| k == "KeyPairName" && v == "deploy"));
    }

    #[test]
    fn security_group_attribute_parses_permissions() {
        let json = r#"{
            "RequestId": "req-1",
            "SecurityGroupId": "sg-1",
            "SecurityGroupName": "default",
            "RegionId": "cn-hangzhou",
            "Permissions": {
                "Permission": [{
                    "IpProtocol": "TCP",
                    "PortRange": "22/22",
                    "SourcePortRange": "22/22",
                    "SourceCidrIp": "0.0.0.0/0",
                    "Direction": "ingress",
                    "Policy": "Accept",
                    "Priority": 1
                }]
            }
        }"#;

        let response: DescribeSecurityGroupAttributeResponse =
            serde_json::from_str(json).unwrap();
        assert_eq!(response.permissions.permission.len(), 1);
        assert_eq!(response.permissions.permission[0].port_range, "22/22");
    }
}
