//! Client for KMS. Unlike the RESTful services, KMS dispatches every
//! operation through `POST /` with an `action` query parameter naming the
//! call and a JSON body carrying its arguments.

pub mod schemas;

use serde::de::DeserializeOwned;

use crate::api::Query;
use crate::client::BceClientConfig;
use crate::error::BceError;
use crate::http::HttpClient;

use schemas::*;

const SERVICE: &str = "kms";

#[derive(Debug, Clone)]
pub struct KmsClient {
    http: HttpClient,
}

impl KmsClient {
    pub fn new(config: BceClientConfig) -> Result<Self, BceError> {
        Ok(Self {
            http: HttpClient::new(config, SERVICE)?,
        })
    }

    fn action<T, R>(&self, action: &str, body: &T) -> Result<R, BceError>
    where
        T: serde::Serialize,
        R: DeserializeOwned,
    {
        let query = Query::new().param("action", action).build();
        Ok(self.http.post_json("/", query, Some(body))?)
    }

    fn action_unit<T>(&self, action: &str, body: &T) -> Result<(), BceError>
    where
        T: serde::Serialize,
    {
        let query = Query::new().param("action", action).build();
        Ok(self.http.post("/", query, Some(body))?)
    }

    pub fn create_key(&self, request: &CreateKeyRequest) -> Result<KeyMetadataResponse, BceError> {
        self.action("CreateKey", request)
    }

    pub fn list_keys(&self, limit: u32, marker: Option<String>) -> Result<ListKeysResponse, BceError> {
        self.action("ListKeys", &ListKeysRequest { limit, marker })
    }

    pub fn describe_key(&self, key_id: &str) -> Result<KeyMetadataResponse, BceError> {
        self.action("DescribeKey", &key_ref(key_id))
    }

    pub fn enable_key(&self, key_id: &str) -> Result<(), BceError> {
        self.action_unit("EnableKey", &key_ref(key_id))
    }

    pub fn disable_key(&self, key_id: &str) -> Result<(), BceError> {
        self.action_unit("DisableKey", &key_ref(key_id))
    }

    /// Queue the key for destruction after the grace window. Until the
    /// window elapses the deletion can still be cancelled.
    pub fn schedule_key_deletion(
        &self,
        key_id: &str,
        pending_window_in_days: u32,
    ) -> Result<ScheduleKeyDeletionResponse, BceError> {
        self.action(
            "ScheduleKeyDeletion",
            &ScheduleKeyDeletionRequest {
                key_id: key_id.to_string(),
                pending_window_in_days,
            },
        )
    }

    pub fn cancel_key_deletion(&self, key_id: &str) -> Result<(), BceError> {
        self.action_unit("CancelKeyDeletion", &key_ref(key_id))
    }

    pub fn encrypt(&self, request: &EncryptRequest) -> Result<EncryptResponse, BceError> {
        self.action("Encrypt", request)
    }

    pub fn decrypt(&self, request: &DecryptRequest) -> Result<DecryptResponse, BceError> {
        self.action("Decrypt", request)
    }

    /// Mint a data key under the master key: the plaintext half is for local
    /// use and never stored by the service, the ciphertext half is what the
    /// caller persists.
    pub fn generate_data_key(
        &self,
        request: &GenerateDataKeyRequest,
    ) -> Result<GenerateDataKeyResponse, BceError> {
        self.action("GenerateDataKey", request)
    }
}

fn key_ref(key_id: &str) -> KeyIdRequest {
    KeyIdRequest {
        key_id: key_id.to_string(),
    }
}
