//! SPL token lookups: `getTokenAccountBalance`, `getTokenAccountsByOwner`,
//! `getTokenSupply`, `getTokenLargestAccounts`.

use serde_json::{json, Value};

use crate::blockchain::{
    client::RpcClient,
    error::CallError,
    models::{
        push_options, AccountInfoConfig, CommitmentConfig, MintArgs, TokenAccountArgs,
        TokenAccountsByOwnerArgs, TokenAccountsFilter,
    },
};

pub fn token_account_balance_params(args: TokenAccountArgs) -> Result<Vec<Value>, CallError> {
    let mut params = vec![json!(args.account)];
    push_options(&mut params, &CommitmentConfig { commitment: args.commitment })?;
    Ok(params)
}

pub async fn get_token_account_balance(
    client: &RpcClient,
    args: TokenAccountArgs,
) -> Result<Value, CallError> {
    client
        .call("getTokenAccountBalance", token_account_balance_params(args)?)
        .await
}

pub fn token_accounts_by_owner_params(
    args: TokenAccountsByOwnerArgs,
) -> Result<Vec<Value>, CallError> {
    let filter = TokenAccountsFilter::from_parts(args.mint, args.program_id);
    let mut params = vec![json!(args.owner), serde_json::to_value(filter)?];
    let config = AccountInfoConfig {
        commitment: args.commitment,
        encoding: args.encoding,
    };
    push_options(&mut params, &config)?;
    Ok(params)
}

pub async fn get_token_accounts_by_owner(
    client: &RpcClient,
    args: TokenAccountsByOwnerArgs,
) -> Result<Value, CallError> {
    client
        .call("getTokenAccountsByOwner", token_accounts_by_owner_params(args)?)
        .await
}

pub fn mint_params(args: MintArgs) -> Result<Vec<Value>, CallError> {
    let mut params = vec![json!(args.mint)];
    push_options(&mut params, &CommitmentConfig { commitment: args.commitment })?;
    Ok(params)
}

pub async fn get_token_supply(client: &RpcClient, args: MintArgs) -> Result<Value, CallError> {
    client.call("getTokenSupply", mint_params(args)?).await
}

pub async fn get_token_largest_accounts(
    client: &RpcClient,
    args: MintArgs,
) -> Result<Value, CallError> {
    client
        .call("getTokenLargestAccounts", mint_params(args)?)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::models::{Encoding, SPL_TOKEN_PROGRAM_ID};

    fn owner_args(mint: Option<&str>, program_id: Option<&str>) -> TokenAccountsByOwnerArgs {
        TokenAccountsByOwnerArgs {
            owner: "Owner1".into(),
            mint: mint.map(str::to_string),
            program_id: program_id.map(str::to_string),
            commitment: None,
            encoding: None,
        }
    }

    #[test]
    fn owner_only_uses_spl_token_program() {
        let params = token_accounts_by_owner_params(owner_args(None, None)).unwrap();
        assert_eq!(
            params,
            vec![json!("Owner1"), json!({ "programId": SPL_TOKEN_PROGRAM_ID })]
        );
    }

    #[test]
    fn mint_takes_precedence_over_program_id() {
        let params =
            token_accounts_by_owner_params(owner_args(Some("MintX"), Some("ProgY"))).unwrap();
        assert_eq!(params[1], json!({ "mint": "MintX" }));
    }

    #[test]
    fn encoding_goes_in_trailing_options() {
        let mut args = owner_args(None, Some("Token2022"));
        args.encoding = Some(Encoding::JsonParsed);
        let params = token_accounts_by_owner_params(args).unwrap();
        assert_eq!(
            params,
            vec![
                json!("Owner1"),
                json!({ "programId": "Token2022" }),
                json!({ "encoding": "jsonParsed" })
            ]
        );
    }
}
