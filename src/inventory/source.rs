//! The seam between drift checking and the package ecosystem.

use std::fmt;

use crate::error::Result;

/// One independently queryable part of the installed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    /// Tapped repositories.
    Taps,
    /// Installed packages (formulae).
    Packages,
    /// Installed casks.
    Casks,
    /// Installed packages with a newer version available.
    Upgradable,
    /// Packages whose service is started.
    Services,
    /// Installed App Store app ids.
    Apps,
}

impl Facet {
    /// All facets.
    pub const ALL: [Facet; 6] = [
        Facet::Taps,
        Facet::Packages,
        Facet::Casks,
        Facet::Upgradable,
        Facet::Services,
        Facet::Apps,
    ];

    /// Short label used in progress messages.
    pub fn label(self) -> &'static str {
        match self {
            Facet::Taps => "taps",
            Facet::Packages => "packages",
            Facet::Casks => "casks",
            Facet::Upgradable => "outdated packages",
            Facet::Services => "services",
            Facet::Apps => "App Store apps",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Facet::Taps => "tapped repositories",
            Facet::Packages => "installed packages",
            Facet::Casks => "installed casks",
            Facet::Upgradable => "upgradable packages",
            Facet::Services => "started services",
            Facet::Apps => "installed App Store apps",
        };
        f.write_str(s)
    }
}

/// Something that can report the installed state, one facet at a time.
///
/// Implementations return the raw names for a facet; App Store ids are
/// returned as decimal strings. Callers are expected to memoize, so
/// implementations do not cache.
pub trait StateSource {
    /// Fetch the current contents of a facet.
    fn fetch(&self, facet: Facet) -> Result<Vec<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_describes_facet() {
        assert_eq!(Facet::Taps.to_string(), "tapped repositories");
        assert_eq!(Facet::Apps.to_string(), "installed App Store apps");
    }

    #[test]
    fn all_lists_each_facet_once() {
        let unique: std::collections::HashSet<_> = Facet::ALL.iter().collect();
        assert_eq!(unique.len(), Facet::ALL.len());
    }
}
