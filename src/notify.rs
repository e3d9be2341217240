use crate::config::NotifyConfig;
use log::info;
use notify_rust::Notification;

pub const APP_NAME: &str = "Bitcoin";
pub const SUMMARY: &str = "SlushPool Block";
pub const ICON: &str = "dialog-information";
pub const SOUND: &str = "message-new-instant";

pub trait Notifier {
    fn notify(&self, block_hash: &str) -> anyhow::Result<()>;
}

/// Lets the boxed notifier from [`notifier`] be passed where `impl Notifier`
/// is expected.
impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&self, block_hash: &str) -> anyhow::Result<()> {
        (**self).notify(block_hash)
    }
}

/// Desktop notification linking to the block on an explorer.
pub struct DesktopNotifier {
    config: NotifyConfig,
}

impl DesktopNotifier {
    pub fn new(config: NotifyConfig) -> Self {
        Self { config }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, block_hash: &str) -> anyhow::Result<()> {
        Notification::new()
            .appname(APP_NAME)
            .summary(SUMMARY)
            .body(&self.config.block_url(block_hash))
            .icon(ICON)
            .sound_name(SOUND)
            .show()?;
        Ok(())
    }
}

/// Only logs the explorer URL.
pub struct DryRunNotifier {
    config: NotifyConfig,
}

impl DryRunNotifier {
    pub fn new(config: NotifyConfig) -> Self {
        Self { config }
    }
}

impl Notifier for DryRunNotifier {
    fn notify(&self, block_hash: &str) -> anyhow::Result<()> {
        info!("{SUMMARY}: {}", self.config.block_url(block_hash));
        Ok(())
    }
}

/// Picks the notifier `config` asks for.
pub fn notifier(config: NotifyConfig) -> Box<dyn Notifier> {
    if config.dry_run {
        Box::new(DryRunNotifier::new(config))
    } else {
        Box::new(DesktopNotifier::new(config))
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::Notifier;
    use crate::config::NotifyConfig;
    use std::cell::RefCell;

    /// Remembers the URLs it would have shown.
    #[derive(Default)]
    pub struct RecordingNotifier {
        config: NotifyConfig,
        pub shown: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, block_hash: &str) -> anyhow::Result<()> {
            self.shown.borrow_mut().push(self.config.block_url(block_hash));
            Ok(())
        }
    }
}
