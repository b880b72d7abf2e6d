//! Counter settings with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Caller-supplied TOML overrides

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::errors::TreeResult;

/// How paths are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountStrategy {
    /// Two nested recursions (outer over start nodes, inner over paths).
    /// Bounded by thread stack size.
    Recursive,
    /// Same algorithm with explicit stacks. Quadratic in the worst case
    /// (a single chain), so prefer `PrefixSum` for large trees.
    #[default]
    Iterative,
    /// Linear time, prefix-sum frequencies along the current root path.
    PrefixSum,
}

/// Order in which the outer scan visits candidate start nodes.
///
/// Only meaningful for [`CountStrategy::Iterative`]; the count does not depend on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalOrder {
    #[default]
    PreOrder,
    PostOrder,
    LevelOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterSettings {
    pub strategy: CountStrategy,
    pub order: TraversalOrder,
}

impl CounterSettings {
    /// Layers `overrides` (TOML) on top of the compiled defaults.
    ///
    /// ```toml
    /// strategy = "prefix-sum"
    /// order = "level-order"
    /// ```
    #[instrument(level = "debug", skip(overrides))]
    pub fn from_toml_str(overrides: &str) -> TreeResult<Self> {
        let defaults = Self::default();
        let settings: Self = Config::builder()
            .add_source(Config::try_from(&defaults)?)
            .add_source(File::from_str(overrides, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        settings.validate();
        debug!(?settings, "loaded counter settings");
        Ok(settings)
    }

    pub fn to_toml(&self) -> TreeResult<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn with_strategy(mut self, strategy: CountStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }

    pub(crate) fn validate(&self) {
        if self.strategy != CountStrategy::Iterative && self.order != TraversalOrder::default() {
            warn!(
                strategy = ?self.strategy,
                order = ?self.order,
                "traversal order only applies to the iterative strategy, ignoring"
            );
        }
    }
}
