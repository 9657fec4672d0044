//! Client for BBC, the bare-metal compute service. Listing paginates with
//! `marker`/`maxKeys`; instance power actions are empty-valued query flags
//! on a `PUT` to the instance resource.

pub mod schemas;

use crate::api::Query;
use crate::client::BceClientConfig;
use crate::error::BceError;
use crate::http::HttpClient;

use schemas::*;

const SERVICE: &str = "bbc";
const INSTANCES: &str = "/v2/instance";
const FLAVORS: &str = "/v2/flavor";

#[derive(Debug, Clone)]
pub struct BbcClient {
    http: HttpClient,
}

impl BbcClient {
    pub fn new(config: BceClientConfig) -> Result<Self, BceError> {
        Ok(Self {
            http: HttpClient::new(config, SERVICE)?,
        })
    }

    pub fn create_instance(
        &self,
        request: &CreateBbcInstanceRequest,
    ) -> Result<CreateBbcInstanceResponse, BceError> {
        let query = Query::new().client_token().build();
        Ok(self.http.post_json(INSTANCES, query, Some(request))?)
    }

    pub fn list_instances(
        &self,
        marker: Option<&str>,
        max_keys: u32,
    ) -> Result<ListBbcInstancesResponse, BceError> {
        let query = Query::new()
            .optional("marker", marker)
            .param("maxKeys", max_keys)
            .build();
        Ok(self.http.get_json(INSTANCES, query)?)
    }

    pub fn get_instance(&self, instance_id: &str) -> Result<BbcInstance, BceError> {
        Ok(self
            .http
            .get_json(&format!("{INSTANCES}/{instance_id}"), Vec::new())?)
    }

    pub fn start_instance(&self, instance_id: &str) -> Result<(), BceError> {
        self.power_action(instance_id, "start")
    }

    pub fn stop_instance(&self, instance_id: &str) -> Result<(), BceError> {
        self.power_action(instance_id, "stop")
    }

    pub fn reboot_instance(&self, instance_id: &str) -> Result<(), BceError> {
        self.power_action(instance_id, "reboot")
    }

    fn power_action(&self, instance_id: &str, action: &str) -> Result<(), BceError> {
        let query = Query::new().flag(action).build();
        Ok(self.http.put(
            &format!("{INSTANCES}/{instance_id}"),
            query,
            None::<serde_json::Value>,
        )?)
    }

    /// Reinstall the OS. `is_preserve_data` keeps the data disks untouched.
    pub fn rebuild_instance(
        &self,
        instance_id: &str,
        request: &RebuildInstanceRequest,
    ) -> Result<(), BceError> {
        let query = Query::new().flag("rebuild").build();
        Ok(self
            .http
            .put(&format!("{INSTANCES}/{instance_id}"), query, Some(request))?)
    }

    pub fn delete_instance(&self, instance_id: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &format!("{INSTANCES}/{instance_id}"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }

    pub fn modify_instance_name(&self, instance_id: &str, name: &str) -> Result<(), BceError> {
        Ok(self.http.put(
            &format!("{INSTANCES}/{instance_id}/attribute"),
            Vec::new(),
            Some(ModifyNameRequest {
                name: name.to_string(),
            }),
        )?)
    }

    pub fn modify_instance_desc(&self, instance_id: &str, desc: &str) -> Result<(), BceError> {
        Ok(self.http.put(
            &format!("{INSTANCES}/{instance_id}/desc"),
            Vec::new(),
            Some(ModifyDescRequest {
                desc: desc.to_string(),
            }),
        )?)
    }

    pub fn list_flavors(&self) -> Result<ListFlavorsResponse, BceError> {
        Ok(self.http.get_json(FLAVORS, Vec::new())?)
    }

    pub fn get_flavor(&self, flavor_id: &str) -> Result<BbcFlavor, BceError> {
        Ok(self
            .http
            .get_json(&format!("{FLAVORS}/{flavor_id}"), Vec::new())?)
    }

    /// VPC and subnet placement for a batch of instances.
    pub fn get_vpc_subnet(&self, bbc_ids: Vec<String>) -> Result<VpcSubnetResponse, BceError> {
        Ok(self.http.post_json(
            "/v2/vpcSubnet",
            Vec::new(),
            Some(VpcSubnetRequest { bbc_ids }),
        )?)
    }
}
