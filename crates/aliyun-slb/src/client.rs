//! Asynchronous SLB client implementation.

use crate::models::{
    BackendServer, BackendServersResponse, CreateLoadBalancerRequest, CreateLoadBalancerResponse,
    CreateVServerGroupResponse, DescribeHealthStatusResponse, DescribeListenersResponse,
    DescribeLoadBalancersParams, DescribeLoadBalancersResponse,
    DescribeVServerGroupAttributeResponse, DescribeVServerGroupsResponse, DescribeZonesResponse,
    Tag, TcpListenerConfig,
};
use crate::Result;
use aliyun_core::client::HttpConfig;
use aliyun_core::query::QueryParams;
use aliyun_core::rpc::{AckResponse, RpcClient, RpcClientBuilder};
use aliyun_core::{Credentials, Product};
use url::Url;

/// Builder for [`SlbClient`].
#[derive(Debug, Clone)]
pub struct SlbClientBuilder {
    inner: RpcClientBuilder,
    region_id: String,
}

impl SlbClientBuilder {
    /// Create a new builder for a region.
    pub fn new(region_id: impl Into<String>, credentials: Credentials) -> Result<Self> {
        let region_id = region_id.into();
        let inner = RpcClientBuilder::new(Product::Slb, &region_id, credentials)?;
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
    pub fn build(self) -> SlbClient {
        SlbClient {
            rpc: self.inner.build(),
            region_id: self.region_id,
        }
    }
}

/// Asynchronous client for the SLB API of one region.
pub struct SlbClient {
    rpc: RpcClient,
    region_id: String,
}

impl SlbClient {
    /// Construct directly for a region.
    pub fn new(region_id: impl Into<String>, credentials: Credentials) -> Result<Self> {
        Ok(SlbClientBuilder::new(region_id, credentials)?.build())
    }

    /// Start configuring a client.
    pub fn builder(region_id: impl Into<String>, credentials: Credentials) -> Result<SlbClientBuilder> {
        SlbClientBuilder::new(region_id, credentials)
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

    // Load balancers

    /// List load balancers in the region.
    pub async fn describe_load_balancers(
        &self,
        params: &DescribeLoadBalancersParams,
    ) -> Result<DescribeLoadBalancersResponse> {
        let mut query = self.region_params();
        for (key, value) in params.to_pairs() {
            query.push(&key, value);
        }
        self.rpc
            .execute("DescribeLoadBalancers", query.into_pairs())
            .await
    }

    /// Create a load balancer.
    pub async fn create_load_balancer(
        &self,
        request: &CreateLoadBalancerRequest,
    ) -> Result<CreateLoadBalancerResponse> {
        let mut query = self.region_params();
        for (key, value) in request.to_pairs() {
            query.push(&key, value);
        }
        self.rpc
            .execute("CreateLoadBalancer", query.into_pairs())
            .await
    }

    /// Delete a load balancer.
    pub async fn delete_load_balancer(&self, load_balancer_id: &str) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("LoadBalancerId", load_balancer_id);
        self.rpc
            .execute("DeleteLoadBalancer", query.into_pairs())
            .await
    }

    /// Fetch backend health behind a balancer.
    pub async fn describe_health_status(
        &self,
        load_balancer_id: &str,
    ) -> Result<DescribeHealthStatusResponse> {
        let mut query = self.region_params();
        query.push("LoadBalancerId", load_balancer_id);
        self.rpc
            .execute("DescribeHealthStatus", query.into_pairs())
            .await
    }

    /// Tag a balancer.
    ///
    /// The API takes the tags as one JSON array string.
    pub async fn add_tags(&self, load_balancer_id: &str, tags: &[Tag]) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("LoadBalancerId", load_balancer_id);
        query.push("Tags", serde_json::to_string(tags)?);
        self.rpc.execute("AddTags", query.into_pairs()).await
    }

    /// Tag a balancer with a single tag; wrapped into a one-element list.
    pub async fn add_tag(&self, load_balancer_id: &str, tag: Tag) -> Result<AckResponse> {
        self.add_tags(load_balancer_id, std::slice::from_ref(&tag))
            .await
    }

    /// List the zones usable for balancers in the region.
    pub async fn describe_zones(&self) -> Result<DescribeZonesResponse> {
        let query = self.region_params();
        self.rpc.execute("DescribeZones", query.into_pairs()).await
    }

    // VServer groups

    /// List the vserver groups of a balancer.
    pub async fn describe_vserver_groups(
        &self,
        load_balancer_id: &str,
    ) -> Result<DescribeVServerGroupsResponse> {
        let mut query = self.region_params();
        query.push("LoadBalancerId", load_balancer_id);
        self.rpc
            .execute("DescribeVServerGroups", query.into_pairs())
            .await
    }

    /// Fetch a vserver group's backends.
    pub async fn describe_vserver_group_attribute(
        &self,
        vserver_group_id: &str,
    ) -> Result<DescribeVServerGroupAttributeResponse> {
        let mut query = self.region_params();
        query.push("VServerGroupId", vserver_group_id);
        self.rpc
            .execute("DescribeVServerGroupAttribute", query.into_pairs())
            .await
    }

    /// Delete a vserver group.
    pub async fn delete_vserver_group(&self, vserver_group_id: &str) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("VServerGroupId", vserver_group_id);
        self.rpc
            .execute("DeleteVServerGroup", query.into_pairs())
            .await
    }

    /// Create a vserver group, optionally registering backends in the same
    /// call.
    pub async fn create_vserver_group(
        &self,
        load_balancer_id: &str,
        name: &str,
        backend_servers: Option<&[BackendServer]>,
    ) -> Result<CreateVServerGroupResponse> {
        let mut query = self.region_params();
        query.push("LoadBalancerId", load_balancer_id);
        query.push("VServerGroupName", name);
        if let Some(backends) = backend_servers {
            query.push("BackendServers", serde_json::to_string(backends)?);
        }
        self.rpc
            .execute("CreateVServerGroup", query.into_pairs())
            .await
    }

    /// Register backends on a balancer.
    ///
    /// The API takes the list as one JSON array string.
    pub async fn add_backend_servers(
        &self,
        load_balancer_id: &str,
        backend_servers: &[BackendServer],
    ) -> Result<BackendServersResponse> {
        let mut query = self.region_params();
        query.push("LoadBalancerId", load_balancer_id);
        query.push("BackendServers", serde_json::to_string(backend_servers)?);
        self.rpc
            .execute("AddBackendServers", query.into_pairs())
            .await
    }

    /// Deregister backends from a balancer.
    pub async fn remove_backend_servers(
        &self,
        load_balancer_id: &str,
        backend_servers: &[BackendServer],
    ) -> Result<BackendServersResponse> {
        let mut query = self.region_params();
        query.push("LoadBalancerId", load_balancer_id);
        query.push("BackendServers", serde_json::to_string(backend_servers)?);
        self.rpc
            .execute("RemoveBackendServers", query.into_pairs())
            .await
    }

    // TCP listeners

    /// Create a TCP listener on a balancer.
    pub async fn create_tcp_listener(
        &self,
        load_balancer_id: &str,
        config: &TcpListenerConfig,
    ) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("LoadBalancerId", load_balancer_id);
        for (key, value) in config.to_pairs() {
            query.push(&key, value);
        }
        self.rpc
            .execute("CreateLoadBalancerTCPListener", query.into_pairs())
            .await
    }

    /// Change an existing TCP listener's settings.
    pub async fn set_tcp_listener_attribute(
        &self,
        load_balancer_id: &str,
        config: &TcpListenerConfig,
    ) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("LoadBalancerId", load_balancer_id);
        for (key, value) in config.to_pairs() {
            query.push(&key, value);
        }
        self.rpc
            .execute("SetLoadBalancerTCPListenerAttribute", query.into_pairs())
            .await
    }

    /// Delete a listener by its frontend port.
    pub async fn delete_listener(
        &self,
        load_balancer_id: &str,
        listener_port: u16,
    ) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("LoadBalancerId", load_balancer_id);
        query.push("ListenerPort", listener_port);
        self.rpc
            .execute("DeleteLoadBalancerListener", query.into_pairs())
            .await
    }

    /// Start a stopped listener.
    pub async fn start_listener(
        &self,
        load_balancer_id: &str,
        listener_port: u16,
    ) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("LoadBalancerId", load_balancer_id);
        query.push("ListenerPort", listener_port);
        self.rpc
            .execute("StartLoadBalancerListener", query.into_pairs())
            .await
    }

    /// Stop a running listener.
    pub async fn stop_listener(
        &self,
        load_balancer_id: &str,
        listener_port: u16,
    ) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("LoadBalancerId", load_balancer_id);
        query.push("ListenerPort", listener_port);
        self.rpc
            .execute("StopLoadBalancerListener", query.into_pairs())
            .await
    }

    /// List listeners in the region by protocol, `tcp` when not given.
    pub async fn describe_listeners(
        &self,
        protocol: Option<&str>,
    ) -> Result<DescribeListenersResponse> {
        let mut query = self.region_params();
        query.push("ListenerProtocol", protocol.unwrap_or("tcp"));
        self.rpc
            .execute("DescribeLoadBalancerListeners", query.into_pairs())
            .await
    }
}
