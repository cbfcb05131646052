//! Asynchronous ECS client implementation.

use crate::models::{
    CreateImageResponse, CreateInstanceRequest, CreateInstanceResponse, CreateKeyPairResponse,
    CreateSecurityGroupResponse, DescribeImageSupportInstanceTypesResponse, DescribeImagesParams,
    DescribeImagesResponse, DescribeInstanceStatusParams, DescribeInstanceStatusResponse,
    DescribeInstancesParams, DescribeInstancesResponse, DescribeKeyPairsParams,
    DescribeKeyPairsResponse, DescribeSecurityGroupAttributeResponse,
    DescribeSecurityGroupsParams, DescribeSecurityGroupsResponse, IngressRule, InstanceOpResponse,
    InstanceSelector,
};
use crate::Result;
use aliyun_core::client::HttpConfig;
use aliyun_core::query::QueryParams;
use aliyun_core::rpc::{AckResponse, RpcClient, RpcClientBuilder};
use aliyun_core::{Credentials, Product};
use url::Url;

/// Batch start/stop/reboot keep going past per-instance failures.
const BATCH_OPTIMIZATION: &str = "SuccessFirst";

/// Builder for [`EcsClient`].
#[derive(Debug, Clone)]
pub struct EcsClientBuilder {
    inner: RpcClientBuilder,
    region_id: String,
}

impl EcsClientBuilder {
    /// Create a new builder for a region.
    pub fn new(region_id: impl Into<String>, credentials: Credentials) -> Result<Self> {
        let region_id = region_id.into();
        let inner = RpcClientBuilder::new(Product::Ecs, &region_id, credentials)?;
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
    pub fn build(self) -> EcsClient {
        EcsClient {
            rpc: self.inner.build(),
            region_id: self.region_id,
        }
    }
}

/// Asynchronous client for the ECS API of one region.
pub struct EcsClient {
    rpc: RpcClient,
    region_id: String,
}

impl EcsClient {
    /// Construct directly for a region.
    pub fn new(region_id: impl Into<String>, credentials: Credentials) -> Result<Self> {
        Ok(EcsClientBuilder::new(region_id, credentials)?.build())
    }

    /// Start configuring a client.
    pub fn builder(region_id: impl Into<String>, credentials: Credentials) -> Result<EcsClientBuilder> {
        EcsClientBuilder::new(region_id, credentials)
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

    // Instances

    /// List instances in the region.
    pub async fn describe_instances(
        &self,
        params: &DescribeInstancesParams,
    ) -> Result<DescribeInstancesResponse> {
        let mut query = self.region_params();
        for (key, value) in params.to_pairs() {
            query.push(&key, value);
        }
        self.rpc.execute("DescribeInstances", query.into_pairs()).await
    }

    /// List instance lifecycle statuses in the region.
    pub async fn describe_instance_status(
        &self,
        params: &DescribeInstanceStatusParams,
    ) -> Result<DescribeInstanceStatusResponse> {
        let mut query = self.region_params();
        for (key, value) in params.to_pairs() {
            query.push(&key, value);
        }
        self.rpc
            .execute("DescribeInstanceStatus", query.into_pairs())
            .await
    }

    /// List the instance types an image can boot on.
    pub async fn describe_image_support_instance_types(
        &self,
        image_id: &str,
    ) -> Result<DescribeImageSupportInstanceTypesResponse> {
        let mut query = self.region_params();
        query.push("ImageId", image_id);
        self.rpc
            .execute("DescribeImageSupportInstanceTypes", query.into_pairs())
            .await
    }

    /// Create one instance.
    pub async fn create_instance(
        &self,
        request: &CreateInstanceRequest,
    ) -> Result<CreateInstanceResponse> {
        let mut query = self.region_params();
        for (key, value) in request.to_pairs() {
            query.push(&key, value);
        }
        self.rpc.execute("CreateInstance", query.into_pairs()).await
    }

    /// Delete one instance or a batch of them.
    ///
    /// A single id maps to `DeleteInstance`; a batch maps to
    /// `DeleteInstances` with repeated `InstanceId.N` members.
    pub async fn delete(&self, instances: impl Into<InstanceSelector>) -> Result<AckResponse> {
        match instances.into() {
            InstanceSelector::One(id) => {
                let mut query = QueryParams::new();
                query.push("InstanceId", id);
                self.rpc.execute("DeleteInstance", query.into_pairs()).await
            }
            InstanceSelector::Many(ids) => {
                let mut query = self.region_params();
                query.push_list("InstanceId", &ids);
                self.rpc.execute("DeleteInstances", query.into_pairs()).await
            }
        }
    }

    /// Start one instance or a batch of them.
    pub async fn start(
        &self,
        instances: impl Into<InstanceSelector>,
    ) -> Result<InstanceOpResponse> {
        self.instance_op("StartInstance", "StartInstances", instances.into())
            .await
    }

    /// Stop one instance or a batch of them.
    pub async fn stop(&self, instances: impl Into<InstanceSelector>) -> Result<InstanceOpResponse> {
        self.instance_op("StopInstance", "StopInstances", instances.into())
            .await
    }

    /// Restart one instance or a batch of them.
    pub async fn reboot(
        &self,
        instances: impl Into<InstanceSelector>,
    ) -> Result<InstanceOpResponse> {
        self.instance_op("RebootInstance", "RebootInstances", instances.into())
            .await
    }

    async fn instance_op(
        &self,
        single_action: &str,
        batch_action: &str,
        instances: InstanceSelector,
    ) -> Result<InstanceOpResponse> {
        match instances {
            InstanceSelector::One(id) => {
                let mut query = QueryParams::new();
                query.push("InstanceId", id);
                self.rpc.execute(single_action, query.into_pairs()).await
            }
            InstanceSelector::Many(ids) => {
                let mut query = self.region_params();
                query.push_list("InstanceId", &ids);
                query.push("BatchOptimization", BATCH_OPTIMIZATION);
                self.rpc.execute(batch_action, query.into_pairs()).await
            }
        }
    }

    // Images

    /// List available images in the region.
    pub async fn describe_images(
        &self,
        params: &DescribeImagesParams,
    ) -> Result<DescribeImagesResponse> {
        let mut query = self.region_params();
        for (key, value) in params.to_pairs() {
            query.push(&key, value);
        }
        self.rpc.execute("DescribeImages", query.into_pairs()).await
    }

    /// Create an image from an instance.
    pub async fn create_image(
        &self,
        instance_id: &str,
        image_name: &str,
    ) -> Result<CreateImageResponse> {
        let mut query = self.region_params();
        query.push("InstanceId", instance_id);
        query.push("ImageName", image_name);
        self.rpc.execute("CreateImage", query.into_pairs()).await
    }

    // Key pairs

    /// List key pairs in the region.
    pub async fn describe_key_pairs(
        &self,
        params: &DescribeKeyPairsParams,
    ) -> Result<DescribeKeyPairsResponse> {
        let mut query = self.region_params();
        for (key, value) in params.to_pairs() {
            query.push(&key, value);
        }
        self.rpc.execute("DescribeKeyPairs", query.into_pairs()).await
    }

    /// Create a key pair; the response carries the private key once.
    pub async fn create_key_pair(&self, key_pair_name: &str) -> Result<CreateKeyPairResponse> {
        let mut query = self.region_params();
        query.push("KeyPairName", key_pair_name);
        self.rpc.execute("CreateKeyPair", query.into_pairs()).await
    }

    /// Delete key pairs by name.
    ///
    /// The API takes the names as one JSON array string.
    pub async fn delete_key_pairs(&self, names: &[&str]) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("KeyPairNames", serde_json::to_string(names)?);
        self.rpc.execute("DeleteKeyPairs", query.into_pairs()).await
    }

    /// Delete a single key pair; wrapped into a one-element list.
    pub async fn delete_key_pair(&self, name: &str) -> Result<AckResponse> {
        self.delete_key_pairs(&[name]).await
    }

    // Security groups

    /// List security groups in the region.
    pub async fn describe_security_groups(
        &self,
        params: &DescribeSecurityGroupsParams,
    ) -> Result<DescribeSecurityGroupsResponse> {
        let mut query = self.region_params();
        for (key, value) in params.to_pairs() {
            query.push(&key, value);
        }
        self.rpc
            .execute("DescribeSecurityGroups", query.into_pairs())
            .await
    }

    /// Create a security group inside a VPC.
    pub async fn create_security_group(
        &self,
        security_group_name: &str,
        vpc_id: &str,
    ) -> Result<CreateSecurityGroupResponse> {
        let mut query = self.region_params();
        query.push("SecurityGroupName", security_group_name);
        query.push("VpcId", vpc_id);
        self.rpc
            .execute("CreateSecurityGroup", query.into_pairs())
            .await
    }

    /// Delete a security group.
    pub async fn delete_security_group(&self, security_group_id: &str) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("SecurityGroupId", security_group_id);
        self.rpc
            .execute("DeleteSecurityGroup", query.into_pairs())
            .await
    }

    /// Fetch a security group's rules.
    pub async fn describe_security_group_attribute(
        &self,
        security_group_id: &str,
    ) -> Result<DescribeSecurityGroupAttributeResponse> {
        let mut query = self.region_params();
        query.push("SecurityGroupId", security_group_id);
        self.rpc
            .execute("DescribeSecurityGroupAttribute", query.into_pairs())
            .await
    }

    /// Add an instance to a security group.
    pub async fn join_security_group(
        &self,
        security_group_id: &str,
        instance_id: &str,
    ) -> Result<AckResponse> {
        let mut query = QueryParams::new();
        query.push("SecurityGroupId", security_group_id);
        query.push("InstanceId", instance_id);
        self.rpc.execute("JoinSecurityGroup", query.into_pairs()).await
    }

    /// Remove an instance from a security group.
    pub async fn leave_security_group(
        &self,
        security_group_id: &str,
        instance_id: &str,
    ) -> Result<AckResponse> {
        let mut query = QueryParams::new();
        query.push("SecurityGroupId", security_group_id);
        query.push("InstanceId", instance_id);
        self.rpc
            .execute("LeaveSecurityGroup", query.into_pairs())
            .await
    }

    /// Add an ingress rule, opening a port.
    pub async fn authorize_ingress(
        &self,
        security_group_id: &str,
        rule: &IngressRule,
    ) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("SecurityGroupId", security_group_id);
        for (key, value) in rule.to_pairs() {
            query.push(&key, value);
        }
        self.rpc
            .execute("AuthorizeSecurityGroup", query.into_pairs())
            .await
    }

    /// Remove an ingress rule, closing a port.
    pub async fn revoke_ingress(
        &self,
        security_group_id: &str,
        rule: &IngressRule,
    ) -> Result<AckResponse> {
        let mut query = self.region_params();
        query.push("SecurityGroupId", security_group_id);
        for (key, value) in rule.to_pairs() {
            query.push(&key, value);
        }
        self.rpc
            .execute("RevokeSecurityGroup", query.into_pairs())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IpProtocol;
    use serde_json::json;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> EcsClient {
        EcsClient::builder("cn-hangzhou", Credentials::new("ak", "sk"))
            .unwrap()
            .with_endpoint(Url::parse(&server.uri()).unwrap())
            .build()
    }

    #[tokio::test]
    async fn describe_instances_sends_region_and_default_page_size() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("Action", "DescribeInstances"))
            .and(query_param("RegionId", "cn-hangzhou"))
            .and(query_param("PageSize", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "RequestId": "req-1",
                "TotalCount": 1,
                "PageNumber": 1,
                "PageSize": 100,
                "Instances": {
                    "Instance": [{
                        "InstanceId": "i-abc",
                        "InstanceName": "web-1",
                        "Status": "Running",
                        "VpcAttributes": {
                            "VpcId": "vpc-1",
                            "VSwitchId": "vsw-1",
                            "PrivateIpAddress": { "IpAddress": ["172.16.0.10"] }
                        }
                    }]
                }
            })))
            .mount(&server)
            .await;

        let response = client(&server)
            .describe_instances(&DescribeInstancesParams::default())
            .await
            .unwrap();
        assert_eq!(response.instances.instance.len(), 1);
        let instance = &response.instances.instance[0];
        assert_eq!(instance.instance_id, "i-abc");
        assert_eq!(
            instance
                .vpc_attributes
                .as_ref()
                .unwrap()
                .v_switch_id
                .as_deref(),
            Some("vsw-1")
        );
    }

    #[tokio::test]
    async fn create_instance_sends_disk_and_spot_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("Action", "CreateInstance"))
            .and(query_param("SystemDisk.Size", "40"))
            .and(query_param("SystemDisk.Category", "cloud_efficiency"))
            .and(query_param("SpotStrategy", "SpotAsPriceGo"))
            .and(query_param("VSwitchId", "vsw-1"))
            .and(query_param("SecurityGroupId", "sg-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "RequestId": "req-2",
                "InstanceId": "i-new"
            })))
            .mount(&server)
            .await;

        let request = CreateInstanceRequest::new("web-1", "m-img", "ecs.g6.large", "vsw-1", "sg-1");
        let response = client(&server).create_instance(&request).await.unwrap();
        assert_eq!(response.instance_id, "i-new");
    }

    #[tokio::test]
    async fn delete_single_instance_uses_singular_action() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("Action", "DeleteInstance"))
            .and(query_param("InstanceId", "i-abc"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "RequestId": "req-3" })),
            )
            .mount(&server)
            .await;

        let ack = client(&server).delete("i-abc").await.unwrap();
        assert_eq!(ack.request_id, "req-3");
    }

    #[tokio::test]
    async fn delete_batch_expands_repeated_members() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("Action", "DeleteInstances"))
            .and(query_param("RegionId", "cn-hangzhou"))
            .and(query_param("InstanceId.1", "i-a"))
            .and(query_param("InstanceId.2", "i-b"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "RequestId": "req-4" })),
            )
            .mount(&server)
            .await;

        let ack = client(&server)
            .delete(vec!["i-a".to_string(), "i-b".to_string()])
            .await
            .unwrap();
        assert_eq!(ack.request_id, "req-4");
    }

    #[tokio::test]
    async fn batch_start_sends_batch_optimization() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("Action", "StartInstances"))
            .and(query_param("BatchOptimization", "SuccessFirst"))
            .and(query_param("InstanceId.1", "i-a"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "RequestId": "req-5",
                "InstanceResponses": {
                    "InstanceResponse": [{
                        "InstanceId": "i-a",
                        "Code": "200",
                        "Message": "success"
                    }]
                }
            })))
            .mount(&server)
            .await;

        let response = client(&server).start(vec!["i-a".to_string()]).await.unwrap();
        let outcomes = response.instance_responses.unwrap();
        assert_eq!(outcomes.instance_response[0].instance_id, "i-a");
    }

    #[tokio::test]
    async fn single_stop_uses_singular_action() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("Action", "StopInstance"))
            .and(query_param("InstanceId", "i-abc"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "RequestId": "req-6" })),
            )
            .mount(&server)
            .await;

        let response = client(&server).stop("i-abc").await.unwrap();
        assert_eq!(response.request_id, "req-6");
        assert!(response.instance_responses.is_none());
    }

    #[tokio::test]
    async fn authorize_ingress_expands_bare_port() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("Action", "AuthorizeSecurityGroup"))
            .and(query_param("SecurityGroupId", "sg-1"))
            .and(query_param("IpProtocol", "tcp"))
            .and(query_param("PortRange", "8080/8080"))
            .and(query_param("SourcePortRange", "8080/8080"))
            .and(query_param("SourceCidrIp", "0.0.0.0/0"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "RequestId": "req-7" })),
            )
            .mount(&server)
            .await;

        let rule = IngressRule::new(IpProtocol::Tcp, 8080u16);
        let ack = client(&server).authorize_ingress("sg-1", &rule).await.unwrap();
        assert_eq!(ack.request_id, "req-7");
    }

    #[tokio::test]
    async fn delete_key_pair_wraps_name_into_json_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("Action", "DeleteKeyPairs"))
            .and(query_param("KeyPairNames", r#"["deploy"]"#))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "RequestId": "req-8" })),
            )
            .mount(&server)
            .await;

        let ack = client(&server).delete_key_pair("deploy").await.unwrap();
        assert_eq!(ack.request_id, "req-8");
    }

    #[tokio::test]
    async fn join_security_group_sends_both_ids() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("Action", "JoinSecurityGroup"))
            .and(query_param("SecurityGroupId", "sg-1"))
            .and(query_param("InstanceId", "i-abc"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "RequestId": "req-9" })),
            )
            .mount(&server)
            .await;

        let ack = client(&server)
            .join_security_group("sg-1", "i-abc")
            .await
            .unwrap();
        assert_eq!(ack.request_id, "req-9");
    }
}
