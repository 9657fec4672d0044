//! Typed clients for the BCE control-plane products. Each client owns a
//! signed transport bound to its service endpoint and maps method calls onto
//! the wire paths, query parameters and JSON bodies the product expects.

pub mod aihc;
pub mod autoscaling;
pub mod bbc;
pub mod bts;
pub mod csn;
pub mod dns;
pub mod kms;
pub mod localdns;
pub mod oos;
pub mod vpcacl;
pub mod vpn;

mod query;

pub(crate) use query::Query;
