//! SLB data models: request parameters and response bodies.
//!
//! Request types flatten into RPC query pairs. Tag and backend server lists
//! travel as JSON array strings inside a single query parameter, which is
//! the provider's own encoding for them.

use aliyun_core::query::QueryParams;
use serde::{Deserialize, Serialize};

/// One tag on a load balancer.
///
/// Also the element type of the JSON array string sent as `Tags`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// Tag key.
    pub tag_key: String,
    /// Tag value.
    #[serde(default)]
    pub tag_value: String,
}

impl Tag {
    /// Create a tag.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag_key: key.into(),
            tag_value: value.into(),
        }
    }
}

/// One backend server entry.
///
/// Element type of the JSON array string sent as `BackendServers`, e.g.
/// `[{"ServerId":"i-abc","Type":"ecs","Weight":"100"}]`. The weight is a
/// string on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendServer {
    /// Id of the backing instance.
    #[serde(rename = "ServerId")]
    pub server_id: String,
    /// Backend kind, `ecs` for compute instances.
    #[serde(rename = "Type", default = "default_server_type")]
    pub server_type: String,
    /// Forwarding weight, 0 to 100.
    #[serde(rename = "Weight", default = "default_weight")]
    pub weight: String,
}

fn default_server_type() -> String {
    "ecs".to_string()
}

fn default_weight() -> String {
    "100".to_string()
}

impl BackendServer {
    /// Create an `ecs` backend with weight 100.
    pub fn new(server_id: impl Into<String>) -> Self {
        Self {
            server_id: server_id.into(),
            server_type: default_server_type(),
            weight: default_weight(),
        }
    }

    /// Override the forwarding weight.
    #[must_use]
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight.to_string();
        self
    }
}

/// Request to create a load balancer.
///
/// Defaults match the original tooling: a small public ipv4 balancer on
/// pay-as-you-go billing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLoadBalancerRequest {
    /// Display name.
    pub load_balancer_name: String,
    /// Primary zone.
    pub master_zone_id: Option<String>,
    /// Failover zone.
    pub slave_zone_id: Option<String>,
    /// `internet` or `intranet`.
    pub address_type: String,
    /// Performance specification.
    pub load_balancer_spec: String,
    /// `ipv4` or `ipv6`.
    pub address_ip_version: String,
    /// Billing mode.
    pub pay_type: String,
}

impl CreateLoadBalancerRequest {
    /// Create a request with the default shape.
    pub fn new(load_balancer_name: impl Into<String>) -> Self {
        Self {
            load_balancer_name: load_balancer_name.into(),
            master_zone_id: None,
            slave_zone_id: None,
            address_type: "internet".to_string(),
            load_balancer_spec: "slb.s2.small".to_string(),
            address_ip_version: "ipv4".to_string(),
            pay_type: "PayOnDemand".to_string(),
        }
    }

    /// Pin the balancer to a primary and failover zone.
    #[must_use]
    pub fn with_zones(
        mut self,
        master_zone_id: impl Into<String>,
        slave_zone_id: impl Into<String>,
    ) -> Self {
        self.master_zone_id = Some(master_zone_id.into());
        self.slave_zone_id = Some(slave_zone_id.into());
        self
    }

    /// Override the performance specification.
    #[must_use]
    pub fn with_spec(mut self, spec: impl Into<String>) -> Self {
        self.load_balancer_spec = spec.into();
        self
    }

    /// Make the balancer internal to its VPC.
    #[must_use]
    pub fn intranet(mut self) -> Self {
        self.address_type = "intranet".to_string();
        self
    }

    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push("LoadBalancerName", &self.load_balancer_name);
        params.push_opt("MasterZoneId", self.master_zone_id.as_deref());
        params.push_opt("SlaveZoneId", self.slave_zone_id.as_deref());
        params.push("AddressType", &self.address_type);
        params.push("LoadBalancerSpec", &self.load_balancer_spec);
        params.push("AddressIPVersion", &self.address_ip_version);
        params.push("PayType", &self.pay_type);
        params.into_pairs()
    }
}

/// Query parameters for `DescribeLoadBalancers`.
#[derive(Debug, Clone, Default)]
pub struct DescribeLoadBalancersParams {
    /// Filter by balancer id.
    pub load_balancer_id: Option<String>,
    /// Filter by balancer name.
    pub load_balancer_name: Option<String>,
    /// Filter by status, e.g. `active`.
    pub load_balancer_status: Option<String>,
    /// Page size.
    pub page_size: Option<u32>,
    /// Page number.
    pub page_number: Option<u32>,
}

impl DescribeLoadBalancersParams {
    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push_opt("LoadBalancerId", self.load_balancer_id.as_deref());
        params.push_opt("LoadBalancerName", self.load_balancer_name.as_deref());
        params.push_opt("LoadBalancerStatus", self.load_balancer_status.as_deref());
        params.push_opt("PageSize", self.page_size);
        params.push_opt("PageNumber", self.page_number);
        params.into_pairs()
    }
}

/// Settings of a TCP listener, used for create and update alike.
///
/// Defaults match the original tooling: unthrottled bandwidth, consistent
/// hashing by source ip and port, tight health checks with a long idle
/// timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TcpListenerConfig {
    /// VServer group receiving the traffic.
    pub vserver_group_id: String,
    /// Frontend port.
    pub listener_port: u16,
    /// Peak bandwidth in Mbit/s, `-1` for unthrottled.
    pub bandwidth: i32,
    /// Scheduling algorithm.
    pub scheduler: String,
    /// Seconds between health checks.
    pub health_check_interval: u32,
    /// Idle connection timeout in seconds.
    pub established_timeout: u32,
    /// Health check connect timeout in seconds.
    pub health_check_connect_timeout: u32,
}

impl TcpListenerConfig {
    /// Create a config with the default tuning.
    pub fn new(vserver_group_id: impl Into<String>, listener_port: u16) -> Self {
        Self {
            vserver_group_id: vserver_group_id.into(),
            listener_port,
            bandwidth: -1,
            scheduler: "tch".to_string(),
            health_check_interval: 2,
            established_timeout: 900,
            health_check_connect_timeout: 5,
        }
    }

    /// Override the scheduling algorithm.
    #[must_use]
    pub fn with_scheduler(mut self, scheduler: impl Into<String>) -> Self {
        self.scheduler = scheduler.into();
        self
    }

    /// Throttle the listener's bandwidth.
    #[must_use]
    pub const fn with_bandwidth(mut self, mbit: i32) -> Self {
        self.bandwidth = mbit;
        self
    }

    /// Flatten into query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut params = QueryParams::new();
        params.push("VServerGroupId", &self.vserver_group_id);
        params.push("ListenerPort", self.listener_port);
        params.push("Bandwidth", self.bandwidth);
        params.push("Scheduler", &self.scheduler);
        params.push("HealthCheckInterval", self.health_check_interval);
        params.push("EstablishedTimeout", self.established_timeout);
        params.push("HealthCheckConnectTimeout", self.health_check_connect_timeout);
        params.into_pairs()
    }
}

// Response bodies.

/// Response body of `DescribeLoadBalancers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLoadBalancersResponse {
    /// Provider request id.
    pub request_id: String,
    /// Total number of matching balancers.
    #[serde(default)]
    pub total_count: Option<u32>,
    /// Current page number.
    #[serde(default)]
    pub page_number: Option<u32>,
    /// Current page size.
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Matched balancers.
    pub load_balancers: LoadBalancerList,
}

/// List wrapper for load balancers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct LoadBalancerList {
    /// The balancers.
    #[serde(default)]
    pub load_balancer: Vec<LoadBalancer>,
}

/// One load balancer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct LoadBalancer {
    /// Balancer id.
    pub load_balancer_id: String,
    /// Display name.
    #[serde(default)]
    pub load_balancer_name: Option<String>,
    /// Lifecycle status.
    #[serde(default)]
    pub load_balancer_status: Option<String>,
    /// Service address.
    #[serde(default)]
    pub address: Option<String>,
    /// `internet` or `intranet`.
    #[serde(default)]
    pub address_type: Option<String>,
    /// Region id.
    #[serde(default)]
    pub region_id: Option<String>,
    /// Primary zone.
    #[serde(default)]
    pub master_zone_id: Option<String>,
    /// Failover zone.
    #[serde(default)]
    pub slave_zone_id: Option<String>,
    /// VPC for intranet balancers.
    #[serde(default)]
    pub vpc_id: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub create_time: Option<String>,
}

/// Response body of `CreateLoadBalancer`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLoadBalancerResponse {
    /// Provider request id.
    pub request_id: String,
    /// Id of the created balancer.
    pub load_balancer_id: String,
    /// Service address.
    #[serde(default)]
    pub address: Option<String>,
    /// Display name.
    #[serde(default)]
    pub load_balancer_name: Option<String>,
    /// `classic` or `vpc`.
    #[serde(default)]
    pub network_type: Option<String>,
    /// VPC for intranet balancers.
    #[serde(default)]
    pub vpc_id: Option<String>,
}

/// Response body of `DescribeHealthStatus`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeHealthStatusResponse {
    /// Provider request id.
    pub request_id: String,
    /// Per-backend health.
    pub backend_servers: BackendHealthList,
}

/// List wrapper for backend health entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct BackendHealthList {
    /// The entries.
    #[serde(default)]
    pub backend_server: Vec<BackendHealth>,
}

/// Health of one backend behind one listener.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BackendHealth {
    /// Id of the backing instance.
    pub server_id: String,
    /// Backend port.
    #[serde(default)]
    pub port: Option<u16>,
    /// `normal`, `abnormal`, or `unavailable`.
    #[serde(default)]
    pub server_health_status: Option<String>,
    /// Listener the check belongs to.
    #[serde(default)]
    pub listener_port: Option<u16>,
    /// Listener protocol.
    #[serde(default)]
    pub protocol: Option<String>,
}

/// Response body of the SLB `DescribeZones`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeZonesResponse {
    /// Provider request id.
    pub request_id: String,
    /// Zones usable for balancers.
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

/// One zone, with the failover zones it can pair with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Zone {
    /// Zone id.
    pub zone_id: String,
    /// Human-readable zone name.
    #[serde(default)]
    pub local_name: Option<String>,
    /// Usable failover zones.
    #[serde(default)]
    pub slave_zones: Option<SlaveZoneList>,
}

/// List wrapper for failover zones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct SlaveZoneList {
    /// The zones.
    #[serde(default)]
    pub slave_zone: Vec<SlaveZone>,
}

/// One failover zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SlaveZone {
    /// Zone id.
    pub zone_id: String,
    /// Human-readable zone name.
    #[serde(default)]
    pub local_name: Option<String>,
}

/// Response body of `DescribeVServerGroups`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVServerGroupsResponse {
    /// Provider request id.
    pub request_id: String,
    /// Groups of the balancer.
    #[serde(default)]
    pub v_server_groups: Option<VServerGroupList>,
}

/// List wrapper for vserver groups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct VServerGroupList {
    /// The groups.
    #[serde(default)]
    pub v_server_group: Vec<VServerGroup>,
}

/// One vserver group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct VServerGroup {
    /// Group id.
    #[serde(rename = "VServerGroupId")]
    pub vserver_group_id: String,
    /// Display name.
    #[serde(rename = "VServerGroupName", default)]
    pub vserver_group_name: Option<String>,
}

/// Response body of `DescribeVServerGroupAttribute`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVServerGroupAttributeResponse {
    /// Provider request id.
    pub request_id: String,
    /// Group id.
    #[serde(rename = "VServerGroupId")]
    pub vserver_group_id: String,
    /// Display name.
    #[serde(rename = "VServerGroupName", default)]
    pub vserver_group_name: Option<String>,
    /// Backends in the group.
    #[serde(default)]
    pub backend_servers: Option<VServerGroupBackendList>,
}

/// Response body of `CreateVServerGroup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVServerGroupResponse {
    /// Provider request id.
    pub request_id: String,
    /// Id of the created group.
    #[serde(rename = "VServerGroupId")]
    pub vserver_group_id: String,
    /// Backends registered at creation.
    #[serde(default)]
    pub backend_servers: Option<VServerGroupBackendList>,
}

/// List wrapper for a group's backends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct VServerGroupBackendList {
    /// The backends.
    #[serde(default)]
    pub backend_server: Vec<VServerGroupBackend>,
}

/// One backend as reported inside a vserver group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct VServerGroupBackend {
    /// Id of the backing instance.
    pub server_id: String,
    /// Backend port.
    #[serde(default)]
    pub port: Option<u16>,
    /// Forwarding weight.
    #[serde(default)]
    pub weight: Option<u32>,
    /// Backend kind.
    #[serde(rename = "Type", default)]
    pub server_type: Option<String>,
}

/// Response body of the backend add/remove actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BackendServersResponse {
    /// Provider request id.
    pub request_id: String,
    /// Balancer id.
    #[serde(default)]
    pub load_balancer_id: Option<String>,
    /// Backends after the change.
    #[serde(default)]
    pub backend_servers: Option<VServerGroupBackendList>,
}

/// Response body of `DescribeLoadBalancerListeners`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeListenersResponse {
    /// Provider request id.
    pub request_id: String,
    /// Total number of matching listeners.
    #[serde(default)]
    pub total_count: Option<u32>,
    /// Matched listeners, a flat array in this API.
    #[serde(default)]
    pub listeners: Vec<Listener>,
}

/// One listener.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Listener {
    /// Frontend port.
    pub listener_port: u16,
    /// Listener protocol.
    #[serde(default)]
    pub listener_protocol: Option<String>,
    /// Balancer the listener belongs to.
    #[serde(default)]
    pub load_balancer_id: Option<String>,
    /// `running` or `stopped`.
    #[serde(default)]
    pub status: Option<String>,
    /// VServer group receiving the traffic.
    #[serde(rename = "VServerGroupId", default)]
    pub vserver_group_id: Option<String>,
    /// Peak bandwidth in Mbit/s, `-1` for unthrottled.
    #[serde(default)]
    pub bandwidth: Option<i32>,
    /// Scheduling algorithm.
    #[serde(default)]
    pub scheduler: Option<String>,
}
