//! Block lookups: `getBlock`, `getBlockHeight`, `getLatestBlockhash`,
//! `getBlockTime`.

use serde_json::{json, Value};

use crate::blockchain::{
    client::RpcClient,
    error::CallError,
    models::{
        push_options, BlockArgs, BlockConfig, CommitmentArgs, CommitmentConfig, Encoding,
        SlotArgs, TransactionDetails,
    },
};

/// Blocks are always fetched with full, parsed transactions.
pub fn block_params(args: BlockArgs) -> Result<Vec<Value>, CallError> {
    let config = BlockConfig {
        encoding: Encoding::JsonParsed,
        transaction_details: TransactionDetails::Full,
        commitment: args.commitment,
        max_supported_transaction_version: args.max_supported_transaction_version,
    };
    Ok(vec![json!(args.slot), serde_json::to_value(config)?])
}

pub async fn get_block(client: &RpcClient, args: BlockArgs) -> Result<Value, CallError> {
    client.call("getBlock", block_params(args)?).await
}

/// Params for methods whose only argument is an optional commitment.
pub fn commitment_params(args: CommitmentArgs) -> Result<Vec<Value>, CallError> {
    let mut params = Vec::new();
    push_options(&mut params, &CommitmentConfig { commitment: args.commitment })?;
    Ok(params)
}

pub async fn get_block_height(client: &RpcClient, args: CommitmentArgs) -> Result<Value, CallError> {
    client.call("getBlockHeight", commitment_params(args)?).await
}

pub async fn get_latest_blockhash(
    client: &RpcClient,
    args: CommitmentArgs,
) -> Result<Value, CallError> {
    client
        .call("getLatestBlockhash", commitment_params(args)?)
        .await
}

pub async fn get_block_time(client: &RpcClient, args: SlotArgs) -> Result<Value, CallError> {
    client.call("getBlockTime", vec![json!(args.slot)]).await
}
