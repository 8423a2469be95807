//! Service configuration from the environment.

use std::net::SocketAddr;

use tracing::warn;

use crate::core::IdRng;

/// Listen address when `SWU_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Seed for deck ids; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Read `SWU_BIND_ADDR` and `SWU_SEED`.
    ///
    /// Unparseable values are logged and replaced by the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("SWU_BIND_ADDR").ok().as_deref(),
            std::env::var("SWU_SEED").ok().as_deref(),
        )
    }

    fn from_vars(bind_addr: Option<&str>, seed: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = bind_addr {
            match raw.parse() {
                Ok(addr) => config.bind_addr = addr,
                Err(e) => warn!(value = raw, error = %e, "invalid SWU_BIND_ADDR, using {}", DEFAULT_BIND_ADDR),
            }
        }
        if let Some(raw) = seed {
            match raw.parse() {
                Ok(seed) => config.seed = Some(seed),
                Err(e) => warn!(value = raw, error = %e, "invalid SWU_SEED, ignoring"),
            }
        }
        config
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Id generator for the deck store.
    #[must_use]
    pub fn id_rng(&self) -> IdRng {
        self.seed.map_or_else(IdRng::from_entropy, IdRng::new)
    }
}
