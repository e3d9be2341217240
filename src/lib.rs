pub mod config;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod notify;
pub mod pipeline;
pub mod rpc;

use log::LevelFilter;
use std::io;

pub use config::{NotifyConfig, RpcConfig};
pub use error::CheckError;
pub use filter::PoolSignature;
pub use pipeline::check_block;

/// Routes `log` records to stderr.
///
/// Without `verbose`, debug records are dropped and the rest are printed as
/// the bare message, so diagnostics read exactly as they are written.
pub fn set_up_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    fern::Dispatch::new()
        .format(move |out, message, record| {
            if verbose {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    humantime::format_rfc3339(std::time::SystemTime::now()),
                    record.level(),
                    record.target(),
                    message
                ))
            } else {
                out.finish(format_args!("{}", message))
            }
        })
        .level(level)
        .chain(io::stderr())
        .apply()?;
    Ok(())
}
