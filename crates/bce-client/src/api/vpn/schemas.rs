use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VpnBilling {
    pub payment_timing: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_length: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVpnGatewayRequest {
    pub vpn_name: String,
    pub vpc_id: String,
    pub billing: VpnBilling,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eip: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateVpnGatewayResponse {
    pub vpn_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VpnGateway {
    pub vpn_id: String,
    pub vpn_name: String,
    pub vpc_id: String,
    pub status: String,
    pub eip: String,
    pub bandwidth_in_mbps: u32,
    pub vpn_conn_num: u32,
    pub create_time: String,
    pub expired_time: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListVpnGatewaysResponse {
    pub vpns: Vec<VpnGateway>,
    pub marker: String,
    pub next_marker: String,
    pub max_keys: u32,
    pub is_truncated: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVpnGatewayRequest {
    pub vpn_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BindEipRequest {
    pub eip: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewVpnGatewayRequest {
    pub billing: VpnBilling,
}

/// IKE negotiation options; fields follow the service vocabulary
/// (`ikeVersion` v1/v2, auth/enc algorithm names, DH group ids).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct IkeConfig {
    pub ike_version: String,
    pub ike_mode: String,
    pub ike_enc_alg: String,
    pub ike_auth_alg: String,
    pub ike_pfs: String,
    pub ike_life_time: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct IpsecConfig {
    pub ipsec_enc_alg: String,
    pub ipsec_auth_alg: String,
    pub ipsec_pfs: String,
    pub ipsec_life_time: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVpnConnRequest {
    pub vpn_conn_name: String,
    pub secret_key: String,
    pub local_subnets: Vec<String>,
    pub remote_ip: String,
    pub remote_subnets: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ike_config: Option<IkeConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipsec_config: Option<IpsecConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateVpnConnResponse {
    pub vpn_conn_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VpnConn {
    pub vpn_conn_id: String,
    pub vpn_conn_name: String,
    pub vpn_id: String,
    pub status: String,
    pub local_subnets: Vec<String>,
    pub remote_ip: String,
    pub remote_subnets: Vec<String>,
    pub created_time: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListVpnConnsResponse {
    pub vpn_conns: Vec<VpnConn>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVpnConnRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_conn_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_subnets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_subnets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
