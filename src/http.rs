//! Shared HTTP agent
//!
//! One `ureq` agent is reused for every catalog request so connections are
//! pooled across carousel fetches.

use std::sync::LazyLock;
use std::time::Duration;

use ureq::Agent;

/// Default request timeout, used until a config-specific agent is built
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

const USER_AGENT: &str = concat!("reelview/", env!("CARGO_PKG_VERSION"));

/// Process-wide agent with the default timeout
pub static HTTP_AGENT: LazyLock<Agent> = LazyLock::new(|| build_agent(DEFAULT_TIMEOUT));

/// Build an agent with a custom global timeout
pub fn build_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .user_agent(USER_AGENT)
        .build()
        .into()
}
