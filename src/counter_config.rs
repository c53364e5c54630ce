use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unrecognized edge policy '{0}', expected 'any', 'rising' or 'falling'")]
    UnknownEdgePolicy(String),
}

/// Which data-line transitions qualify as a countable edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    #[default]
    Any,
    Rising,
    Falling,
}

impl EdgePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgePolicy::Any => "any",
            EdgePolicy::Rising => "rising",
            EdgePolicy::Falling => "falling",
        }
    }

    /// Whether the level change between two consecutive samples qualifies.
    pub fn matches(&self, previous: bool, current: bool) -> bool {
        match self {
            EdgePolicy::Any => previous != current,
            EdgePolicy::Rising => !previous && current,
            EdgePolicy::Falling => previous && !current,
        }
    }
}

impl FromStr for EdgePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(EdgePolicy::Any),
            "rising" => Ok(EdgePolicy::Rising),
            "falling" => Ok(EdgePolicy::Falling),
            _ => Err(ConfigError::UnknownEdgePolicy(s.to_string())),
        }
    }
}

/// Option record as supplied by a host frontend, before validation.
///
/// The defaults match the option schema published in
/// [`crate::descriptor::COUNTER_DECODER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOptions {
    pub edge: String,
    pub divider: i64,
}

impl Default for RawOptions {
    fn default() -> Self {
        Self {
            edge: EdgePolicy::Any.as_str().to_string(),
            divider: 0,
        }
    }
}

/// Validated counter configuration.
///
/// A divider of 0 disables divided counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterOptions {
    pub edge: EdgePolicy,
    pub divider: u64,
}

impl CounterOptions {
    /// Validate a raw option record.
    ///
    /// An unrecognized edge policy is fatal; a negative divider is not an
    /// error and is clamped to 0.
    pub fn from_raw(raw: &RawOptions) -> Result<Self, ConfigError> {
        let edge = raw.edge.parse()?;
        let divider = u64::try_from(raw.divider).unwrap_or(0);
        Ok(Self { edge, divider })
    }

    pub fn with_edge(mut self, edge: EdgePolicy) -> Self {
        self.edge = edge;
        self
    }

    pub fn divide_by(mut self, divider: u64) -> Self {
        self.divider = divider;
        self
    }
}
