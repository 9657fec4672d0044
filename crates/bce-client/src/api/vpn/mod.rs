//! Client for VPN gateways and their IPsec connections, served from the BCC
//! endpoint like the other VPC networking APIs.

pub mod schemas;

use crate::api::Query;
use crate::client::BceClientConfig;
use crate::error::BceError;
use crate::http::HttpClient;

use schemas::*;

const SERVICE: &str = "bcc";
const VPN: &str = "/v2/vpn";

#[derive(Debug, Clone)]
pub struct VpnClient {
    http: HttpClient,
}

impl VpnClient {
    pub fn new(config: BceClientConfig) -> Result<Self, BceError> {
        Ok(Self {
            http: HttpClient::new(config, SERVICE)?,
        })
    }

    pub fn create_gateway(
        &self,
        request: &CreateVpnGatewayRequest,
    ) -> Result<CreateVpnGatewayResponse, BceError> {
        let query = Query::new().client_token().build();
        Ok(self.http.post_json(VPN, query, Some(request))?)
    }

    pub fn list_gateways(
        &self,
        vpc_id: &str,
        marker: Option<&str>,
        max_keys: u32,
    ) -> Result<ListVpnGatewaysResponse, BceError> {
        let query = Query::new()
            .param("vpcId", vpc_id)
            .optional("marker", marker)
            .param("maxKeys", max_keys)
            .build();
        Ok(self.http.get_json(VPN, query)?)
    }

    pub fn get_gateway(&self, vpn_id: &str) -> Result<VpnGateway, BceError> {
        Ok(self.http.get_json(&format!("{VPN}/{vpn_id}"), Vec::new())?)
    }

    pub fn update_gateway(&self, vpn_id: &str, vpn_name: &str) -> Result<(), BceError> {
        let query = Query::new().flag("modifyAttribute").build();
        Ok(self.http.put(
            &format!("{VPN}/{vpn_id}"),
            query,
            Some(UpdateVpnGatewayRequest {
                vpn_name: vpn_name.to_string(),
            }),
        )?)
    }

    pub fn delete_gateway(&self, vpn_id: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &format!("{VPN}/{vpn_id}"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }

    /// Attach a public IP; the gateway is unreachable from peers without one.
    pub fn bind_eip(&self, vpn_id: &str, eip: &str) -> Result<(), BceError> {
        let query = Query::new().flag("bind").build();
        Ok(self.http.put(
            &format!("{VPN}/{vpn_id}"),
            query,
            Some(BindEipRequest {
                eip: eip.to_string(),
            }),
        )?)
    }

    pub fn unbind_eip(&self, vpn_id: &str) -> Result<(), BceError> {
        let query = Query::new().flag("unbind").build();
        Ok(self
            .http
            .put(&format!("{VPN}/{vpn_id}"), query, None::<serde_json::Value>)?)
    }

    /// Extend a prepaid gateway before it expires.
    pub fn renew_gateway(
        &self,
        vpn_id: &str,
        request: &RenewVpnGatewayRequest,
    ) -> Result<(), BceError> {
        let query = Query::new().flag("purchaseReserved").client_token().build();
        Ok(self
            .http
            .put(&format!("{VPN}/{vpn_id}"), query, Some(request))?)
    }

    // ---- Connections ----

    pub fn create_conn(
        &self,
        vpn_id: &str,
        request: &CreateVpnConnRequest,
    ) -> Result<CreateVpnConnResponse, BceError> {
        let query = Query::new().param("vpnId", vpn_id).client_token().build();
        Ok(self
            .http
            .post_json(&format!("{VPN}/vpnconn"), query, Some(request))?)
    }

    pub fn list_conns(&self, vpn_id: &str) -> Result<ListVpnConnsResponse, BceError> {
        Ok(self
            .http
            .get_json(&format!("{VPN}/vpnconn/{vpn_id}"), Vec::new())?)
    }

    pub fn update_conn(
        &self,
        vpn_conn_id: &str,
        request: &UpdateVpnConnRequest,
    ) -> Result<(), BceError> {
        Ok(self.http.put(
            &format!("{VPN}/vpnconn/{vpn_conn_id}"),
            Vec::new(),
            Some(request),
        )?)
    }

    pub fn delete_conn(&self, vpn_conn_id: &str) -> Result<(), BceError> {
        Ok(self.http.delete(
            &format!("{VPN}/vpnconn/{vpn_conn_id}"),
            Vec::new(),
            None::<serde_json::Value>,
        )?)
    }
}
