//! Client for BTS, the wide-column table storage service: instances, tables
//! and row reads/writes.

pub mod schemas;

use crate::api::Query;
use crate::client::BceClientConfig;
use crate::error::BceError;
use crate::http::HttpClient;

use schemas::*;

const SERVICE: &str = "bts";

#[derive(Debug, Clone)]
pub struct BtsClient {
    http: HttpClient,
}

impl BtsClient {
    pub fn new(config: BceClientConfig) -> Result<Self, BceError> {
        Ok(Self {
            http: HttpClient::new(config, SERVICE)?,
        })
    }

    fn instance_path(instance: &str) -> String {
        format!("/v1/instance/{instance}")
    }

    fn table_path(instance: &str, table: &str) -> String {
        format!("/v1/instance/{instance}/table/{table}")
    }

    // ---- Instances ----

    pub fn create_instance(
        &self,
        instance: &str,
        request: &CreateInstanceRequest,
    ) -> Result<(), BceError> {
        Ok(self
            .http
            .put(&Self::instance_path(instance), Vec::new(), Some(request))?)
    }

    pub fn drop_instance(&self, instance: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &Self::instance_path(instance),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }

    pub fn show_instance(&self, instance: &str) -> Result<InstanceSummary, BceError> {
        Ok(self
            .http
            .get_json(&Self::instance_path(instance), Vec::new())?)
    }

    pub fn list_instances(&self) -> Result<ListInstancesResponse, BceError> {
        Ok(self.http.get_json("/v1/instances", Vec::new())?)
    }

    // ---- Tables ----

    pub fn create_table(
        &self,
        instance: &str,
        table: &str,
        settings: &TableSettings,
    ) -> Result<(), BceError> {
        Ok(self
            .http
            .put(&Self::table_path(instance, table), Vec::new(), Some(settings))?)
    }

    pub fn update_table(
        &self,
        instance: &str,
        table: &str,
        settings: &TableSettings,
    ) -> Result<(), BceError> {
        let query = Query::new().flag("update").build();
        Ok(self
            .http
            .put(&Self::table_path(instance, table), query, Some(settings))?)
    }

    pub fn drop_table(&self, instance: &str, table: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &Self::table_path(instance, table),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }

    pub fn show_table(&self, instance: &str, table: &str) -> Result<TableSummary, BceError> {
        Ok(self
            .http
            .get_json(&Self::table_path(instance, table), Vec::new())?)
    }

    pub fn list_tables(&self, instance: &str) -> Result<ListTablesResponse, BceError> {
        Ok(self
            .http
            .get_json(&format!("/v1/instance/{instance}/tables"), Vec::new())?)
    }

    // ---- Rows ----

    pub fn put_row(
        &self,
        instance: &str,
        table: &str,
        request: &PutRowRequest,
    ) -> Result<(), BceError> {
        let path = format!("{}/row", Self::table_path(instance, table));
        Ok(self.http.put(&path, Vec::new(), Some(request))?)
    }

    pub fn batch_put_row(
        &self,
        instance: &str,
        table: &str,
        request: &BatchPutRowRequest,
    ) -> Result<(), BceError> {
        let path = format!("{}/rows", Self::table_path(instance, table));
        Ok(self.http.put(&path, Vec::new(), Some(request))?)
    }

    pub fn delete_row(
        &self,
        instance: &str,
        table: &str,
        request: &DeleteRowRequest,
    ) -> Result<(), BceError> {
        let path = format!("{}/row", Self::table_path(instance, table));
        Ok(self.http.delete(&path, Vec::new(), Some(request))?)
    }

    pub fn batch_delete_row(
        &self,
        instance: &str,
        table: &str,
        request: &BatchDeleteRowRequest,
    ) -> Result<(), BceError> {
        let path = format!("{}/rows", Self::table_path(instance, table));
        Ok(self.http.delete(&path, Vec::new(), Some(request))?)
    }

    pub fn get_row(
        &self,
        instance: &str,
        table: &str,
        rowkey: &str,
    ) -> Result<GetRowResponse, BceError> {
        let path = format!("{}/row", Self::table_path(instance, table));
        let query = Query::new().param("rowkey", rowkey).build();
        Ok(self.http.get_json(&path, query)?)
    }

    pub fn batch_get_row(
        &self,
        instance: &str,
        table: &str,
        request: &BatchGetRowRequest,
    ) -> Result<GetRowResponse, BceError> {
        let path = format!("{}/rows/get", Self::table_path(instance, table));
        Ok(self.http.post_json(&path, Vec::new(), Some(request))?)
    }

    /// Range scan in rowkey order. The response's `next_start_rowkey` seeds
    /// the follow-up call when `truncated` is set.
    pub fn scan(
        &self,
        instance: &str,
        table: &str,
        args: &ScanArgs,
    ) -> Result<ScanResponse, BceError> {
        let path = format!("{}/rows", Self::table_path(instance, table));
        let query = Query::new()
            .optional("startRowkey", args.start_rowkey.as_deref())
            .param("includeStart", args.include_start)
            .optional("stopRowkey", args.stop_rowkey.as_deref())
            .param("includeStop", args.include_stop)
            .optional("limit", args.limit)
            .build();
        Ok(self.http.get_json(&path, query)?)
    }
}
