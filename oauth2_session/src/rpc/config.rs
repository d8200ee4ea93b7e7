use std::{env, sync::LazyLock};

/// Artificial delay in milliseconds applied to every procedure call outside
/// production, to surface loading states during development.
///
/// Default: 0 (disabled)
pub(super) static RPC_ARTIFICIAL_DELAY_MS: LazyLock<u64> = LazyLock::new(|| {
    env::var("RPC_ARTIFICIAL_DELAY_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
});
