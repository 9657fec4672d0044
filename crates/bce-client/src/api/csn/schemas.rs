use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Csn {
    pub csn_id: String,
    pub name: String,
    pub status: String,
    pub description: String,
    pub instance_num: u32,
    pub created_time: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCsnRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCsnResponse {
    pub csn_id: String,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCsnRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListCsnsResponse {
    pub csns: Vec<Csn>,
    pub marker: String,
    pub next_marker: String,
    pub max_keys: u32,
    pub is_truncated: bool,
}

/// Network instance loaded into a CSN: a VPC or a VPN gateway, possibly in
/// another region.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachInstanceRequest {
    pub instance_type: String,
    pub instance_id: String,
    pub instance_region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_account_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CsnInstance {
    pub instance_type: String,
    pub instance_id: String,
    pub instance_name: String,
    pub instance_region: String,
    pub status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListCsnInstancesResponse {
    pub instances: Vec<CsnInstance>,
    pub marker: String,
    pub next_marker: String,
    pub max_keys: u32,
    pub is_truncated: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBandwidthPackageRequest {
    pub name: String,
    pub bandwidth: u32,
    /// Geographic span, e.g. `China-China`.
    pub interwork_type: String,
    pub billing: BpBilling,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BpBilling {
    pub payment_timing: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_length: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateBandwidthPackageResponse {
    pub csn_bp_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BandwidthPackage {
    pub csn_bp_id: String,
    pub name: String,
    pub bandwidth: u32,
    pub used_bandwidth: u32,
    pub status: String,
    pub csn_id: String,
    pub interwork_type: String,
    pub expire_time: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListBandwidthPackagesResponse {
    pub bps: Vec<BandwidthPackage>,
    pub marker: String,
    pub next_marker: String,
    pub max_keys: u32,
    pub is_truncated: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeBandwidthPackageRequest {
    pub bandwidth: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BindBandwidthPackageRequest {
    pub csn_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteRuleRequest {
    /// The attachment the traffic leaves through.
    pub attach_id: String,
    pub dest_address: String,
    /// `custom` rules; the service inserts `learned` ones itself.
    pub route_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteRule {
    pub rule_id: String,
    pub attach_id: String,
    pub dest_address: String,
    pub route_type: String,
    pub status: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListRouteRulesResponse {
    pub route_rules: Vec<RouteRule>,
    pub marker: String,
    pub next_marker: String,
    pub max_keys: u32,
    pub is_truncated: bool,
}
