// src/blockchain/models.rs
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

use crate::blockchain::error::CallError;

/// Canonical SPL token program, used when a token account query names neither
/// a mint nor a program.
pub const SPL_TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

// --- Shared enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Finalized,
    Confirmed,
    Processed,
}

impl Commitment {
    pub const VALUES: [&'static str; 3] = ["finalized", "confirmed", "processed"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    #[serde(rename = "base58")]
    Base58,
    #[serde(rename = "base64")]
    Base64,
    #[serde(rename = "jsonParsed")]
    JsonParsed,
}

impl Encoding {
    pub const VALUES: [&'static str; 3] = ["base58", "base64", "jsonParsed"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionDetails {
    Full,
}

// --- Integer arguments ---
//
// Some hosts send every number as a float, so `10.0` is accepted wherever an
// integer is expected. Fractions and negatives are still rejected.

fn number_to_whole<E: de::Error>(n: &Number) -> Result<u64, E> {
    if let Some(u) = n.as_u64() {
        return Ok(u);
    }
    match n.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
        _ => Err(E::custom(format!(
            "expected a non-negative whole number, got {}",
            n
        ))),
    }
}

fn narrow<T: TryFrom<u64>, E: de::Error>(value: u64) -> Result<T, E> {
    T::try_from(value).map_err(|_| E::custom(format!("number {} is out of range", value)))
}

fn whole_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let n = Number::deserialize(deserializer)?;
    narrow(number_to_whole::<D::Error>(&n)?)
}

fn opt_whole_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    match Option::<Number>::deserialize(deserializer)? {
        Some(n) => narrow(number_to_whole::<D::Error>(&n)?).map(Some),
        None => Ok(None),
    }
}

// --- Tool arguments ---

#[derive(Debug, Deserialize)]
pub struct TokenSummaryArgs {
    pub token_address: String,
}

#[derive(Debug, Deserialize)]
pub struct AddressArgs {
    pub address: String,
    pub commitment: Option<Commitment>,
}

#[derive(Debug, Deserialize)]
pub struct AccountInfoArgs {
    pub address: String,
    pub commitment: Option<Commitment>,
    pub encoding: Option<Encoding>,
}

#[derive(Debug, Deserialize)]
pub struct MultipleAccountsArgs {
    /// Comma-separated list of account addresses.
    pub pubkeys: String,
    pub commitment: Option<Commitment>,
    pub encoding: Option<Encoding>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramAccountsArgs {
    pub program_id: String,
    pub commitment: Option<Commitment>,
    pub encoding: Option<Encoding>,
    #[serde(default, deserialize_with = "opt_whole_number")]
    pub data_size: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionArgs {
    pub signature: String,
    pub commitment: Option<Commitment>,
    #[serde(default, deserialize_with = "opt_whole_number")]
    pub max_supported_transaction_version: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct SignaturesForAddressArgs {
    pub address: String,
    #[serde(default, deserialize_with = "opt_whole_number")]
    pub limit: Option<u32>,
    pub before: Option<String>,
    pub until: Option<String>,
    pub commitment: Option<Commitment>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureStatusesArgs {
    /// Comma-separated list of transaction signatures.
    pub signatures: String,
    pub search_transaction_history: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockArgs {
    #[serde(deserialize_with = "whole_number")]
    pub slot: u64,
    pub commitment: Option<Commitment>,
    #[serde(default, deserialize_with = "opt_whole_number")]
    pub max_supported_transaction_version: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct SlotArgs {
    #[serde(deserialize_with = "whole_number")]
    pub slot: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct CommitmentArgs {
    pub commitment: Option<Commitment>,
}

#[derive(Debug, Deserialize)]
pub struct TokenAccountArgs {
    pub account: String,
    pub commitment: Option<Commitment>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAccountsByOwnerArgs {
    pub owner: String,
    pub mint: Option<String>,
    pub program_id: Option<String>,
    pub commitment: Option<Commitment>,
    pub encoding: Option<Encoding>,
}

#[derive(Debug, Deserialize)]
pub struct MintArgs {
    pub mint: String,
    pub commitment: Option<Commitment>,
}

// --- Outbound option objects ---
//
// Absent fields are skipped so the remote node sees only what the caller set.

#[derive(Debug, Default, Serialize)]
pub struct CommitmentConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commitment: Option<Commitment>,
}

#[derive(Debug, Default, Serialize)]
pub struct AccountInfoConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commitment: Option<Commitment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<Encoding>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProgramFilter {
    DataSize(u64),
}

#[derive(Debug, Default, Serialize)]
pub struct ProgramAccountsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commitment: Option<Commitment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<Encoding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<ProgramFilter>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionConfig {
    pub encoding: Encoding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commitment: Option<Commitment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_supported_transaction_version: Option<u8>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockConfig {
    pub encoding: Encoding,
    pub transaction_details: TransactionDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commitment: Option<Commitment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_supported_transaction_version: Option<u8>,
}

#[derive(Debug, Default, Serialize)]
pub struct SignaturesForAddressConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commitment: Option<Commitment>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureStatusConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_transaction_history: Option<bool>,
}

/// Which token accounts `getTokenAccountsByOwner` should return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenAccountsFilter {
    Mint(String),
    ProgramId(String),
}

impl TokenAccountsFilter {
    /// A mint always wins over a program id.
    pub fn from_parts(mint: Option<String>, program_id: Option<String>) -> Self {
        match (mint, program_id) {
            (Some(mint), _) => TokenAccountsFilter::Mint(mint),
            (None, Some(program_id)) => TokenAccountsFilter::ProgramId(program_id),
            (None, None) => TokenAccountsFilter::ProgramId(SPL_TOKEN_PROGRAM_ID.to_string()),
        }
    }
}

// --- Param helpers ---

/// Splits a comma-delimited list, trimming each element.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|item| item.trim().to_string()).collect()
}

/// Appends `options` to `params` unless it serializes to an empty object.
pub fn push_options<T: Serialize>(params: &mut Vec<Value>, options: &T) -> Result<(), CallError> {
    let value = serde_json::to_value(options)?;
    let is_empty = value.as_object().map_or(false, |map| map.is_empty());
    if !is_empty {
        params.push(value);
    }
    Ok(())
}
