use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BbcInstance {
    pub id: String,
    pub name: String,
    pub status: String,
    pub flavor_id: String,
    pub image_id: String,
    pub internal_ip: String,
    pub public_ip: String,
    pub zone_name: String,
    pub create_time: String,
    pub expire_time: String,
    pub desc: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Billing {
    pub payment_timing: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_length: Option<u32>,
}

impl Billing {
    pub fn postpaid() -> Self {
        Self {
            payment_timing: "Postpaid".to_string(),
            reservation_length: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBbcInstanceRequest {
    pub flavor_id: String,
    pub image_id: String,
    pub raid_id: String,
    pub zone_name: String,
    pub purchase_count: u32,
    pub billing: Billing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_pass: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateBbcInstanceResponse {
    pub instance_ids: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListBbcInstancesResponse {
    pub instances: Vec<BbcInstance>,
    pub marker: String,
    pub next_marker: String,
    pub max_keys: u32,
    pub is_truncated: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RebuildInstanceRequest {
    pub image_id: String,
    pub admin_pass: String,
    pub is_preserve_data: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyNameRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyDescRequest {
    pub desc: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BbcFlavor {
    pub flavor_id: String,
    pub cpu_count: u32,
    pub memory_capacity_in_gb: u32,
    pub disk: String,
    pub network_card: String,
    pub others: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListFlavorsResponse {
    pub flavors: Vec<BbcFlavor>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VpcSubnetRequest {
    pub bbc_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceNetwork {
    pub bbc_id: String,
    pub vpc_id: String,
    pub vpc_name: String,
    pub subnet_id: String,
    pub subnet_name: String,
    pub subnet_cidr: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VpcSubnetResponse {
    pub networks: Vec<InstanceNetwork>,
}
