//! Account lookups: `getBalance`, `getAccountInfo`, `getMultipleAccounts`,
//! `getProgramAccounts`.

use serde_json::{json, Value};

use crate::blockchain::{
    client::RpcClient,
    error::CallError,
    models::{
        push_options, split_list, AccountInfoArgs, AccountInfoConfig, AddressArgs,
        CommitmentConfig, MultipleAccountsArgs, ProgramAccountsArgs, ProgramAccountsConfig,
        ProgramFilter,
    },
};

pub fn balance_params(args: AddressArgs) -> Result<Vec<Value>, CallError> {
    let mut params = vec![json!(args.address)];
    push_options(&mut params, &CommitmentConfig { commitment: args.commitment })?;
    Ok(params)
}

pub async fn get_balance(client: &RpcClient, args: AddressArgs) -> Result<Value, CallError> {
    client.call("getBalance", balance_params(args)?).await
}

pub fn account_info_params(args: AccountInfoArgs) -> Result<Vec<Value>, CallError> {
    let mut params = vec![json!(args.address)];
    let config = AccountInfoConfig {
        commitment: args.commitment,
        encoding: args.encoding,
    };
    push_options(&mut params, &config)?;
    Ok(params)
}

pub async fn get_account_info(
    client: &RpcClient,
    args: AccountInfoArgs,
) -> Result<Value, CallError> {
    client.call("getAccountInfo", account_info_params(args)?).await
}

pub fn multiple_accounts_params(args: MultipleAccountsArgs) -> Result<Vec<Value>, CallError> {
    let mut params = vec![json!(split_list(&args.pubkeys))];
    let config = AccountInfoConfig {
        commitment: args.commitment,
        encoding: args.encoding,
    };
    push_options(&mut params, &config)?;
    Ok(params)
}

pub async fn get_multiple_accounts(
    client: &RpcClient,
    args: MultipleAccountsArgs,
) -> Result<Value, CallError> {
    client
        .call("getMultipleAccounts", multiple_accounts_params(args)?)
        .await
}

pub fn program_accounts_params(args: ProgramAccountsArgs) -> Result<Vec<Value>, CallError> {
    let mut params = vec![json!(args.program_id)];
    let config = ProgramAccountsConfig {
        commitment: args.commitment,
        encoding: args.encoding,
        filters: args.data_size.map(|size| vec![ProgramFilter::DataSize(size)]),
    };
    push_options(&mut params, &config)?;
    Ok(params)
}

pub async fn get_program_accounts(
    client: &RpcClient,
    args: ProgramAccountsArgs,
) -> Result<Value, CallError> {
    client
        .call("getProgramAccounts", program_accounts_params(args)?)
        .await
}
