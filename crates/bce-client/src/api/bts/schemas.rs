use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstanceRequest {
    /// `CommonPerformance` or `HighPerformance`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceSummary {
    pub instance_name: String,
    pub state: String,
    pub storage_type: String,
    pub create_time: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListInstancesResponse {
    pub instances: Vec<InstanceSummary>,
}

/// Table settings shared by create and update. A field left `None` keeps the
/// server-side value on update.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TableSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_versions: Option<u32>,
    /// `NONE` or `SNAPPY_ALL`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compress_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableSummary {
    pub table_name: String,
    pub state: String,
    pub time_to_live: u64,
    pub max_versions: u32,
    pub compress_type: String,
    pub create_time: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListTablesResponse {
    pub tables: Vec<TableSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub column: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PutRowRequest {
    pub rowkey: String,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPutRowRequest {
    pub rows: Vec<PutRowRequest>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRowRequest {
    pub rowkey: String,
    /// Restrict the delete to these columns; empty deletes the whole row.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cells: Vec<ColumnRef>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRef {
    pub column: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteRowRequest {
    pub rows: Vec<DeleteRowRequest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RowResult {
    pub rowkey: String,
    pub cells: Vec<CellResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CellResult {
    pub column: String,
    pub value: String,
    pub timestamp: u64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetRowResponse {
    pub result: Vec<RowResult>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGetRowRequest {
    pub rows: Vec<RowRef>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowRef {
    pub rowkey: String,
}

/// Key-range scan. Both bounds are optional; `include_start`/`include_stop`
/// fix the open/closed ends.
#[derive(Debug, Clone, Default)]
pub struct ScanArgs {
    pub start_rowkey: Option<String>,
    pub include_start: bool,
    pub stop_rowkey: Option<String>,
    pub include_stop: bool,
    pub limit: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanResponse {
    pub result: Vec<RowResult>,
    pub next_start_rowkey: String,
    pub truncated: bool,
}
