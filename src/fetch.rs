use crate::error::CheckError;
use crate::rpc::request;
use bitcoincore_rpc::RpcApi;
use log::debug;
use serde::Deserialize;
use serde_json::json;

/// The part of a `getblock` result we read.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct BlockRecord {
    /// Transaction ids in block order; the first one is the coinbase.
    #[serde(default)]
    pub tx: Vec<String>,
}

/// The part of a verbose `getrawtransaction` result we read.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct DecodedTransaction {
    #[serde(default)]
    pub txid: Option<String>,
    #[serde(default)]
    pub vin: Vec<TxInput>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TxInput {
    /// Hex of the coinbase data; only present on a coinbase input.
    #[serde(default)]
    pub coinbase: Option<String>,
}

pub fn coinbase_txid(rpc: &impl RpcApi, block_hash: &str) -> anyhow::Result<String> {
    let result = request(rpc, "getblock", &[json!(block_hash)])?;
    let block: BlockRecord = serde_json::from_value(result)?;
    let Some(txid) = block.tx.into_iter().next() else {
        return Err(CheckError::EmptyBlock.into());
    };
    Ok(txid)
}

/// Fetches the decoded coinbase transaction of block `block_hash`.
///
/// The block hash is passed along to `getrawtransaction` so this also works
/// on nodes running without `txindex`.
pub fn get_coinbase_transaction(
    rpc: &impl RpcApi,
    block_hash: &str,
) -> anyhow::Result<DecodedTransaction> {
    let txid = coinbase_txid(rpc, block_hash)?;
    debug!("Coinbase txid: {txid}");
    let result = request(
        rpc,
        "getrawtransaction",
        &[json!(txid), json!(1), json!(block_hash)],
    )?;
    Ok(serde_json::from_value(result)?)
}
