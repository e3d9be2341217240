use thiserror::Error;

/// Failures that end a run with exit status 1.
///
/// The display text is what gets printed to stderr, so it must not change.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CheckError {
    #[error("No block hash has been supplied")]
    MissingBlockHash,

    /// `getblock` returned no transaction ids.
    #[error("Unknown json data format")]
    EmptyBlock,

    /// The coinbase transaction came back without inputs.
    #[error("Unknown cb tx format")]
    NoCoinbaseInput,

    #[error("Pool tag must not be empty")]
    EmptyPoolTag,

    #[error("RPC credentials are required but BITCOIN_RPC_USER is empty")]
    MissingCredentials,
}
