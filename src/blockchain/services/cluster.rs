//! Cluster status: `getClusterNodes`, `getEpochInfo`, `getVersion`, `getHealth`.

use serde_json::Value;

use crate::blockchain::{
    client::RpcClient,
    error::CallError,
    models::CommitmentArgs,
    services::block::commitment_params,
};

pub async fn get_cluster_nodes(client: &RpcClient) -> Result<Value, CallError> {
    client.call("getClusterNodes", Vec::new()).await
}

pub async fn get_epoch_info(client: &RpcClient, args: CommitmentArgs) -> Result<Value, CallError> {
    client.call("getEpochInfo", commitment_params(args)?).await
}

pub async fn get_version(client: &RpcClient) -> Result<Value, CallError> {
    client.call("getVersion", Vec::new()).await
}

pub async fn get_health(client: &RpcClient) -> Result<Value, CallError> {
    client.call("getHealth", Vec::new()).await
}
