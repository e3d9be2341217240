//! Checks whether a block was mined by Slush Pool and raises a desktop
//! notification with an explorer link if it was.
//!
//! Meant to be hooked into bitcoin-core's `-blocknotify`:
//!
//! ```text
//! blocknotify=check-sp %s
//! ```

use clap::Parser;
use log::{debug, error};
use slushpool_notify::config::{DEFAULT_EXPLORER_URL, DEFAULT_RPC_URL};
use slushpool_notify::filter::SLUSH_POOL_TAG;
use slushpool_notify::notify::notifier;
use slushpool_notify::rpc::bitcoin_rpc;
use slushpool_notify::{
    check_block, set_up_logging, CheckError, NotifyConfig, PoolSignature, RpcConfig,
};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(about = "Notify when a block's coinbase carries a pool tag")]
struct Args {
    /// Hash of the block to check
    block_hash: Option<String>,

    #[arg(long, env = "BITCOIN_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,

    #[arg(long, env = "BITCOIN_RPC_USER", default_value = "", hide_env_values = true)]
    rpc_user: String,

    #[arg(long, env = "BITCOIN_RPC_PASS", default_value = "", hide_env_values = true)]
    rpc_pass: String,

    /// Fail instead of connecting with an empty RPC user
    #[arg(long)]
    require_auth: bool,

    /// Prefix of the link shown in the notification
    #[arg(long, default_value = DEFAULT_EXPLORER_URL)]
    explorer_url: String,

    /// Literal text to look for in the coinbase data
    #[arg(long, default_value = SLUSH_POOL_TAG)]
    pool_tag: String,

    /// Log the link instead of showing a notification
    #[arg(long)]
    dry_run: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = set_up_logging(args.verbose) {
        eprintln!("{e}");
        return ExitCode::from(1);
    }

    let result = run(args);
    if let Err(e) = &result {
        error!("{e:#}");
    }
    ExitCode::from(exit_status(&result))
}

/// 0 once the block has been checked, matched or not; 1 for anything fatal.
fn exit_status(result: &anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let Some(block_hash) = args.block_hash else {
        return Err(CheckError::MissingBlockHash.into());
    };
    let rpc_config =
        RpcConfig::new(args.rpc_url, args.rpc_user, args.rpc_pass).require_auth(args.require_auth);
    let notify_config = NotifyConfig {
        explorer_url: args.explorer_url,
        dry_run: args.dry_run,
    };
    let signature = PoolSignature::new(&args.pool_tag)?;

    let rpc = bitcoin_rpc(&rpc_config)?;
    let matched = check_block(&rpc, &notifier(notify_config), &signature, &block_hash)?;
    debug!("Matched: {matched}");
    Ok(())
}
