pub const DEFAULT_RPC_URL: &str = "http://localhost:8332";
pub const DEFAULT_EXPLORER_URL: &str = "https://blockstream.info/block/";

/// Where and how to reach the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcConfig {
    pub url: String,
    pub user: String,
    pub pass: String,
    /// Refuse to start with an empty user name instead of sending empty
    /// basic-auth credentials.
    pub require_auth: bool,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RPC_URL.into(),
            user: String::new(),
            pass: String::new(),
            require_auth: false,
        }
    }
}

impl RpcConfig {
    pub fn new(url: impl Into<String>, user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user: user.into(),
            pass: pass.into(),
            require_auth: false,
        }
    }

    pub fn require_auth(mut self, require: bool) -> Self {
        self.require_auth = require;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyConfig {
    /// Block hash gets appended to this.
    pub explorer_url: String,
    pub dry_run: bool,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            explorer_url: DEFAULT_EXPLORER_URL.into(),
            dry_run: false,
        }
    }
}

impl NotifyConfig {
    pub fn block_url(&self, block_hash: &str) -> String {
        format!("{}{}", self.explorer_url, block_hash)
    }
}
