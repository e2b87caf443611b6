//! Transaction lookups: `getTransaction`, `getSignaturesForAddress`,
//! `getSignatureStatuses`.

use serde_json::{json, Value};

use crate::blockchain::{
    client::RpcClient,
    error::CallError,
    models::{
        push_options, split_list, Encoding, SignatureStatusConfig, SignatureStatusesArgs,
        SignaturesForAddressArgs, SignaturesForAddressConfig, TransactionArgs, TransactionConfig,
    },
};

/// `jsonParsed` is always requested, whatever the caller asked for.
pub fn transaction_params(args: TransactionArgs) -> Result<Vec<Value>, CallError> {
    let config = TransactionConfig {
        encoding: Encoding::JsonParsed,
        commitment: args.commitment,
        max_supported_transaction_version: args.max_supported_transaction_version,
    };
    Ok(vec![json!(args.signature), serde_json::to_value(config)?])
}

pub async fn get_transaction(client: &RpcClient, args: TransactionArgs) -> Result<Value, CallError> {
    client.call("getTransaction", transaction_params(args)?).await
}

pub fn signatures_for_address_params(
    args: SignaturesForAddressArgs,
) -> Result<Vec<Value>, CallError> {
    let mut params = vec![json!(args.address)];
    let config = SignaturesForAddressConfig {
        limit: args.limit,
        before: args.before,
        until: args.until,
        commitment: args.commitment,
    };
    push_options(&mut params, &config)?;
    Ok(params)
}

pub async fn get_signatures_for_address(
    client: &RpcClient,
    args: SignaturesForAddressArgs,
) -> Result<Value, CallError> {
    client
        .call("getSignaturesForAddress", signatures_for_address_params(args)?)
        .await
}

pub fn signature_statuses_params(args: SignatureStatusesArgs) -> Result<Vec<Value>, CallError> {
    let mut params = vec![json!(split_list(&args.signatures))];
    let config = SignatureStatusConfig {
        search_transaction_history: args.search_transaction_history,
    };
    push_options(&mut params, &config)?;
    Ok(params)
}

pub async fn get_signature_statuses(
    client: &RpcClient,
    args: SignatureStatusesArgs,
) -> Result<Value, CallError> {
    client
        .call("getSignatureStatuses", signature_statuses_params(args)?)
        .await
}
