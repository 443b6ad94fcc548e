use std::fmt;
use std::time::Duration;

/// The upstream data sources we know how to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Provider1,
    Provider2,
}

impl ProviderKind {
    /// Lookup order; results come back in this order too.
    pub const ALL: [ProviderKind; 2] = [ProviderKind::Provider1, ProviderKind::Provider2];

    /// Internal name, used in cache keys and log lines.
    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::Provider1 => "provider1",
            ProviderKind::Provider2 => "provider2",
        }
    }

    /// Name shown to users.
    pub fn display_name(self) -> &'static str {
        match self {
            ProviderKind::Provider1 => "Provider 1",
            ProviderKind::Provider2 => "Provider 2",
        }
    }

    pub fn env_prefix(self) -> &'static str {
        match self {
            ProviderKind::Provider1 => "PROVIDER1",
            ProviderKind::Provider2 => "PROVIDER2",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    /// Applies to the HTTP call and to how long a lookup waits on it.
    pub timeout: Duration,
}
