use crate::fetch::get_coinbase_transaction;
use crate::filter::{coinbase_filter, PoolSignature};
use crate::notify::Notifier;
use bitcoincore_rpc::RpcApi;
use log::debug;

/// Fetches the coinbase of `block_hash`, checks it for `signature` and
/// notifies on a match. Returns whether the block matched.
pub fn check_block(
    rpc: &impl RpcApi,
    notifier: &impl Notifier,
    signature: &PoolSignature,
    block_hash: &str,
) -> anyhow::Result<bool> {
    let coinbase_tx = get_coinbase_transaction(rpc, block_hash)?;
    let matched = coinbase_filter(&coinbase_tx, |x| signature.matches_hex(x))?;
    debug!("Block {block_hash}, pool tag {:?}: {matched}", signature.tag());
    if matched {
        notifier.notify(block_hash)?;
    }
    Ok(matched)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::CheckError;
    use crate::notify::mock::RecordingNotifier;
    use crate::rpc::mock::MockNode;
    use serde_json::{json, Value};

    fn node(block_hash: &str, vin: Value) -> MockNode {
        MockNode::new()
            .respond("getblock", json!({ "hash": block_hash, "tx": ["cbtx", "tx1"] }))
            .respond("getrawtransaction", json!({ "txid": "cbtx", "vin": vin }))
    }

    #[test]
    fn empty_block() {
        let node = MockNode::new().respond("getblock", json!({ "tx": [] }));
        let notifier = RecordingNotifier::default();
        let e = check_block(&node, &notifier, &PoolSignature::slush(), "H1").unwrap_err();
        assert_eq!(e.downcast_ref::<CheckError>(), Some(&CheckError::EmptyBlock));
        assert!(notifier.shown.borrow().is_empty());
    }

    #[test]
    fn slush_block_notifies() {
        let coinbase = hex::encode(".../slush/mined by pool...");
        let node = node("H2", json!([{ "coinbase": coinbase }]));
        let notifier = RecordingNotifier::default();
        assert!(check_block(&node, &notifier, &PoolSignature::slush(), "H2").unwrap());
        assert_eq!(
            *notifier.shown.borrow(),
            vec!["https://blockstream.info/block/H2"]
        );
    }

    #[test]
    fn boxed_notifier() {
        let coinbase = hex::encode("/slush/");
        let node = node("H2", json!([{ "coinbase": coinbase }]));
        let notifier = Box::new(RecordingNotifier::default());
        assert!(check_block(&node, &notifier, &PoolSignature::slush(), "H2").unwrap());
        assert_eq!(notifier.shown.borrow().len(), 1);
    }

    #[test]
    fn other_pool_is_quiet() {
        let coinbase = hex::encode("/AntPool/");
        let node = node("H3", json!([{ "coinbase": coinbase }]));
        let notifier = RecordingNotifier::default();
        assert!(!check_block(&node, &notifier, &PoolSignature::slush(), "H3").unwrap());
        assert!(notifier.shown.borrow().is_empty());
    }

    #[test]
    fn invalid_hex_is_quiet() {
        let node = node("H4", json!([{ "coinbase": "not hex at all" }]));
        let notifier = RecordingNotifier::default();
        assert!(!check_block(&node, &notifier, &PoolSignature::slush(), "H4").unwrap());
        assert!(notifier.shown.borrow().is_empty());
    }

    #[test]
    fn no_inputs() {
        let node = node("H5", json!([]));
        let notifier = RecordingNotifier::default();
        let e = check_block(&node, &notifier, &PoolSignature::slush(), "H5").unwrap_err();
        assert_eq!(e.to_string(), "Unknown cb tx format");
        assert!(notifier.shown.borrow().is_empty());
    }

    #[test]
    fn same_answer_twice() {
        let coinbase = hex::encode("/slush/");
        let node = node("H2", json!([{ "coinbase": coinbase }]));
        let notifier = RecordingNotifier::default();
        let signature = PoolSignature::slush();
        let first = check_block(&node, &notifier, &signature, "H2").unwrap();
        let second = check_block(&node, &notifier, &signature, "H2").unwrap();
        assert_eq!(first, second);
        assert_eq!(
            node.methods(),
            vec!["getblock", "getrawtransaction", "getblock", "getrawtransaction"]
        );
    }
}
