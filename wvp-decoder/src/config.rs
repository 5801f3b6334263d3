//! Parser configuration
//!
//! [`ParserLimit`] bounds every vector the decoder may allocate for and
//! [`FeatureSet`] selects the grammar variant. Both are plain data and
//! deserialize from TOML so a partial document only overrides the fields it
//! names:
//!
//! ```toml
//! [limits]
//! max_type_sec_types = 1024
//!
//! [features]
//! allow_multi_memory = true
//! text_format = "utf8_rfc3629"
//! ```

#[cfg(feature = "std")]
use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};
use wvp_format::TextProfile;

/// Resource limits enforced while decoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserLimit {
    /// Maximum number of function bodies
    pub max_code_sec_codes:      u32,
    /// Maximum number of locals of a single function, parameters included
    pub max_code_locals:         u32,
    /// Maximum number of data segments
    pub max_data_sec_entries:    u32,
    /// Maximum number of function indices in one element segment
    pub max_elem_sec_funcidx:    u32,
    /// Maximum number of element segments
    pub max_elem_sec_elems:      u32,
    /// Maximum number of exports
    pub max_export_sec_exports:  u32,
    /// Maximum number of defined globals
    pub max_global_sec_globals:  u32,
    /// Maximum number of imports
    pub max_import_sec_imports:  u32,
    /// Maximum number of defined memories
    pub max_memory_sec_memories: u32,
    /// Maximum number of defined tables
    pub max_table_sec_tables:    u32,
    /// Maximum number of function types
    pub max_type_sec_types:      u32,
}

impl Default for ParserLimit {
    fn default() -> Self {
        Self {
            max_code_sec_codes:      262_144,
            max_code_locals:         65_536,
            max_data_sec_entries:    262_144,
            max_elem_sec_funcidx:    262_144,
            max_elem_sec_elems:      262_144,
            max_export_sec_exports:  262_144,
            max_global_sec_globals:  262_144,
            max_import_sec_imports:  262_144,
            max_memory_sec_memories: 1024,
            max_table_sec_tables:    1024,
            max_type_sec_types:      262_144,
        }
    }
}

/// Grammar switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSet {
    /// Permit more than one table across imports and definitions
    pub allow_multi_table:         bool,
    /// Permit more than one memory across imports and definitions
    pub allow_multi_memory:        bool,
    /// Permit function types with more than one result
    pub allow_multi_result_vector: bool,
    /// Reject structurally identical function types instead of warning
    pub prohibit_duplicate_types:  bool,
    /// Reject zero-length import and export names instead of warning
    pub disable_zero_length_string: bool,
    /// UTF-8 profile applied to names
    pub text_format:               TextProfile,
    /// Reject non-custom sections that appear out of id order
    pub check_section_order:       bool,
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self {
            allow_multi_table:          false,
            allow_multi_memory:         false,
            allow_multi_result_vector:  false,
            prohibit_duplicate_types:   false,
            disable_zero_length_string: true,
            text_format:                TextProfile::default(),
            check_section_order:        true,
        }
    }
}

/// Decode path for the function section type indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionScan {
    /// One LEB128 decode per index
    Scalar,
    /// Validate runs of single-byte indices in bulk, scalar otherwise
    #[default]
    Batched,
}

/// Complete decoder configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Resource limits
    pub limits:        ParserLimit,
    /// Grammar switches
    pub features:      FeatureSet,
    /// Function section decode path
    pub function_scan: FunctionScan,
}

impl ParserConfig {
    /// Parse a configuration from TOML text.
    #[cfg(feature = "std")]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(ConfigError::Parse)
    }

    /// Load a configuration from a TOML file.
    #[cfg(feature = "std")]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Same configuration with a different function section decode path
    #[must_use]
    pub fn with_function_scan(mut self, scan: FunctionScan) -> Self {
        self.function_scan = scan;
        self
    }
}

/// Configuration loading failure
#[cfg(feature = "std")]
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Io(std::io::Error),
    /// The TOML document is malformed or has wrongly typed fields
    Parse(toml::de::Error),
}

#[cfg(feature = "std")]
impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read parser config: {}", e),
            Self::Parse(e) => write!(f, "Failed to parse parser config: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}
