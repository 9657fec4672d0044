//! Client for Local DNS: private zones resolved only inside the VPCs bound
//! to them.

pub mod schemas;

use crate::api::Query;
use crate::client::BceClientConfig;
use crate::error::BceError;
use crate::http::HttpClient;

use schemas::*;

const SERVICE: &str = "privatezone";
const ZONES: &str = "/v1/privatezone";

#[derive(Debug, Clone)]
pub struct LocalDnsClient {
    http: HttpClient,
}

impl LocalDnsClient {
    pub fn new(config: BceClientConfig) -> Result<Self, BceError> {
        Ok(Self {
            http: HttpClient::new(config, SERVICE)?,
        })
    }

    pub fn create_zone(&self, zone_name: &str) -> Result<CreatePrivateZoneResponse, BceError> {
        let query = Query::new().client_token().build();
        Ok(self.http.post_json(
            ZONES,
            query,
            Some(CreatePrivateZoneRequest {
                zone_name: zone_name.to_string(),
            }),
        )?)
    }

    pub fn list_zones(
        &self,
        marker: Option<&str>,
        max_keys: u32,
    ) -> Result<ListPrivateZonesResponse, BceError> {
        let query = Query::new()
            .optional("marker", marker)
            .param("maxKeys", max_keys)
            .build();
        Ok(self.http.get_json(ZONES, query)?)
    }

    pub fn get_zone(&self, zone_id: &str) -> Result<PrivateZoneDetail, BceError> {
        Ok(self
            .http
            .get_json(&format!("{ZONES}/{zone_id}"), Vec::new())?)
    }

    pub fn delete_zone(&self, zone_id: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &format!("{ZONES}/{zone_id}"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }

    /// Make the zone resolvable from the given VPCs.
    pub fn bind_vpc(&self, zone_id: &str, request: &BindVpcRequest) -> Result<(), BceError> {
        let query = Query::new().flag("bind").client_token().build();
        Ok(self
            .http
            .put(&format!("{ZONES}/{zone_id}"), query, Some(request))?)
    }

    pub fn unbind_vpc(&self, zone_id: &str, request: &BindVpcRequest) -> Result<(), BceError> {
        let query = Query::new().flag("unbind").client_token().build();
        Ok(self
            .http
            .put(&format!("{ZONES}/{zone_id}"), query, Some(request))?)
    }

    pub fn add_record(
        &self,
        zone_id: &str,
        request: &AddRecordRequest,
    ) -> Result<AddRecordResponse, BceError> {
        let query = Query::new().client_token().build();
        Ok(self
            .http
            .post_json(&format!("{ZONES}/{zone_id}/record"), query, Some(request))?)
    }

    pub fn list_records(
        &self,
        zone_id: &str,
        marker: Option<&str>,
        max_keys: u32,
    ) -> Result<ListPrivateRecordsResponse, BceError> {
        let query = Query::new()
            .optional("marker", marker)
            .param("maxKeys", max_keys)
            .build();
        Ok(self
            .http
            .get_json(&format!("{ZONES}/{zone_id}/record"), query)?)
    }

    pub fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        request: &AddRecordRequest,
    ) -> Result<(), BceError> {
        Ok(self.http.put(
            &format!("{ZONES}/{zone_id}/record/{record_id}"),
            Vec::new(),
            Some(request),
        )?)
    }

    pub fn enable_record(&self, zone_id: &str, record_id: &str) -> Result<(), BceError> {
        self.record_action(zone_id, record_id, "enable")
    }

    pub fn disable_record(&self, zone_id: &str, record_id: &str) -> Result<(), BceError> {
        self.record_action(zone_id, record_id, "disable")
    }

    fn record_action(&self, zone_id: &str, record_id: &str, action: &str) -> Result<(), BceError> {
        let query = Query::new().flag(action).build();
        Ok(self.http.put(
            &format!("{ZONES}/{zone_id}/record/{record_id}"),
            query,
            None::<serde_json::Value>,
        )?)
    }

    pub fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &format!("{ZONES}/{zone_id}/record/{record_id}"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }
}
