use crate::config::RpcConfig;
use crate::error::CheckError;
use bitcoincore_rpc::{Auth, Client, RpcApi};
use log::debug;
use serde_json::{Map, Value};

/// Bitcoin-core RPC client for `config`.
///
/// Empty credentials are passed through as-is unless `require_auth` is set.
pub fn bitcoin_rpc(config: &RpcConfig) -> anyhow::Result<Client> {
    if config.require_auth && config.user.is_empty() {
        return Err(CheckError::MissingCredentials.into());
    }
    debug!("Bitcoin-core RPC address: {}", config.url);
    Ok(Client::new(
        &config.url,
        Auth::UserPass(config.user.clone(), config.pass.clone()),
    )?)
}

/// Issues one JSON-RPC call and returns its `result`.
///
/// A missing or null `result` comes back as an empty object. Transport and
/// node-side errors are returned untouched.
pub fn request(
    rpc: &impl RpcApi,
    method: &str,
    params: &[Value],
) -> bitcoincore_rpc::Result<Value> {
    debug!("RPC {method} {params:?}");
    let result: Value = rpc.call(method, params)?;
    Ok(match result {
        Value::Null => Value::Object(Map::new()),
        x => x,
    })
}
