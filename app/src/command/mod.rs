//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own type and input, dispatched
//! statically from `main`.

use lumen_config::Config;
use lumen_core::Feature;
use tracing::info;

mod adapt;
mod detect;
mod info;
mod init;
mod ritual;
mod tiers;
mod version;

pub use adapt::{AdaptInput, AdaptStrategy};
pub use detect::{DetectInput, DetectStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use ritual::{RitualInput, RitualStrategy};
pub use tiers::{TiersInput, TiersStrategy};
pub use version::VersionStrategy;

/// Load configuration and check that the configured tier unlocks `feature`.
fn load_for(feature: Feature) -> anyhow::Result<Config> {
    let config = Config::load_or_default();
    config.check_access(feature)?;
    info!(
        "Tier '{}' grants {}",
        config.subscription.tier,
        feature.as_str()
    );
    Ok(config)
}

/// Core trait defining the contract for all command strategies.
///
/// # Design Principles
/// - **Static dispatch**: All calls are monomorphized at compile time
/// - **Type safety**: Each strategy defines its own input type via associated type
/// - **Extensibility**: Adding new commands requires only implementing this trait
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
