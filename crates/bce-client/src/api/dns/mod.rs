//! Client for public DNS: hosted zones and their resource records. Record
//! enable/disable are empty-valued query flags on the record resource.

pub mod schemas;

use crate::api::Query;
use crate::client::BceClientConfig;
use crate::error::BceError;
use crate::http::HttpClient;

use schemas::*;

const SERVICE: &str = "dns";
const ZONES: &str = "/v1/dns/zone";

#[derive(Debug, Clone)]
pub struct DnsClient {
    http: HttpClient,
}

impl DnsClient {
    pub fn new(config: BceClientConfig) -> Result<Self, BceError> {
        Ok(Self {
            http: HttpClient::new(config, SERVICE)?,
        })
    }

    pub fn create_zone(&self, name: &str) -> Result<(), BceError> {
        let query = Query::new().client_token().build();
        Ok(self.http.post(
            ZONES,
            query,
            Some(CreateZoneRequest {
                name: name.to_string(),
            }),
        )?)
    }

    pub fn list_zones(
        &self,
        name: Option<&str>,
        marker: Option<&str>,
        max_keys: u32,
    ) -> Result<ListZonesResponse, BceError> {
        let query = Query::new()
            .optional("name", name)
            .optional("marker", marker)
            .param("maxKeys", max_keys)
            .build();
        Ok(self.http.get_json(ZONES, query)?)
    }

    pub fn delete_zone(&self, name: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &format!("{ZONES}/{name}"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }

    pub fn create_record(&self, zone_name: &str, request: &RecordRequest) -> Result<(), BceError> {
        let query = Query::new().client_token().build();
        Ok(self
            .http
            .post(&format!("{ZONES}/{zone_name}/record"), query, Some(request))?)
    }

    pub fn list_records(
        &self,
        zone_name: &str,
        marker: Option<&str>,
        max_keys: u32,
    ) -> Result<ListRecordsResponse, BceError> {
        let query = Query::new()
            .optional("marker", marker)
            .param("maxKeys", max_keys)
            .build();
        Ok(self
            .http
            .get_json(&format!("{ZONES}/{zone_name}/record"), query)?)
    }

    pub fn update_record(
        &self,
        zone_name: &str,
        record_id: &str,
        request: &RecordRequest,
    ) -> Result<(), BceError> {
        Ok(self.http.put(
            &format!("{ZONES}/{zone_name}/record/{record_id}"),
            Vec::new(),
            Some(request),
        )?)
    }

    /// Resume serving the record.
    pub fn enable_record(&self, zone_name: &str, record_id: &str) -> Result<(), BceError> {
        self.record_action(zone_name, record_id, "enable")
    }

    /// Keep the record but stop serving it.
    pub fn disable_record(&self, zone_name: &str, record_id: &str) -> Result<(), BceError> {
        self.record_action(zone_name, record_id, "disable")
    }

    fn record_action(&self, zone_name: &str, record_id: &str, action: &str) -> Result<(), BceError> {
        let query = Query::new().flag(action).build();
        Ok(self.http.put(
            &format!("{ZONES}/{zone_name}/record/{record_id}"),
            query,
            None::<serde_json::Value>,
        )?)
    }

    pub fn delete_record(&self, zone_name: &str, record_id: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &format!("{ZONES}/{zone_name}/record/{record_id}"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }
}
