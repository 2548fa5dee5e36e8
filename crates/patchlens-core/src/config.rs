//! Engine configuration.
//!
//! Every field has a default, so a config document only needs to name the
//! values it overrides.
//!
//! ```
//! use patchlens_core::config::EngineConfig;
//! use patchlens_core::aggregate::IconPolicy;
//!
//! let config = EngineConfig::from_json_str(r#"{"aggregate": {"icon_policy": "last_seen"}}"#).unwrap();
//! assert_eq!(config.aggregate.icon_policy, IconPolicy::LastSeen);
//! assert_eq!(config.aggregate.default_title, "General");
//! ```

use serde::{Deserialize, Serialize};

use crate::aggregate::AggregateOptions;
use crate::errors::{ExError, PatchLensError};
use crate::logging_facility::Profile;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub aggregate: AggregateOptions,
    pub log_profile: Profile,
}

impl EngineConfig {
    /// Parse a JSON config document
    ///
    /// # Errors
    ///
    /// `Serialization` when the document is not valid JSON or has fields of
    /// the wrong type.
    pub fn from_json_str(text: &str) -> Result<Self, ExError> {
        serde_json::from_str(text).map_err(|e| {
            ExError::from(PatchLensError::MalformedConfig {
                reason: e.to_string(),
            })
            .with_op("load_config")
        })
    }
}
