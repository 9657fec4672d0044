use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivateZone {
    pub zone_id: String,
    pub zone_name: String,
    pub record_count: u32,
    pub bind_vpc_count: u32,
    pub create_time: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrivateZoneRequest {
    pub zone_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePrivateZoneResponse {
    pub zone_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListPrivateZonesResponse {
    pub zones: Vec<PrivateZone>,
    pub marker: String,
    pub next_marker: String,
    pub max_keys: u32,
    pub is_truncated: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoneVpc {
    pub vpc_id: String,
    pub vpc_name: String,
    pub vpc_region: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivateZoneDetail {
    pub zone_id: String,
    pub zone_name: String,
    pub record_count: u32,
    pub create_time: String,
    pub bind_vpcs: Vec<ZoneVpc>,
}

/// VPCs live in a region; bind/unbind name both so cross-region VPCs can be
/// attached to one zone.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BindVpcRequest {
    pub region: String,
    pub vpc_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRecordRequest {
    pub rr: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddRecordResponse {
    pub record_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivateRecord {
    pub record_id: String,
    pub rr: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub ttl: u32,
    pub status: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListPrivateRecordsResponse {
    pub records: Vec<PrivateRecord>,
    pub marker: String,
    pub next_marker: String,
    pub max_keys: u32,
    pub is_truncated: bool,
}
