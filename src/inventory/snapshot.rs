//! Per-run memoized view of the installed state.

use std::collections::{HashMap, HashSet};

use crate::error::Result;

use super::source::{Facet, StateSource};

/// Lazily populated installed-state snapshot.
///
/// Each facet is fetched from the [`StateSource`] on first use and cached
/// for the lifetime of the snapshot, so one evaluation never asks the
/// source for the same facet twice. A snapshot belongs to a single run.
pub struct Snapshot<'a> {
    source: &'a dyn StateSource,
    cache: HashMap<Facet, HashSet<String>>,
}

impl<'a> Snapshot<'a> {
    /// Create an empty snapshot over a source.
    pub fn new(source: &'a dyn StateSource) -> Self {
        Self {
            source,
            cache: HashMap::new(),
        }
    }

    /// Get a facet, fetching it on first access.
    pub fn facet(&mut self, facet: Facet) -> Result<&HashSet<String>> {
        if !self.cache.contains_key(&facet) {
            tracing::debug!("Fetching {}", facet);
            let values = self
                .source
                .fetch(facet)?
                .into_iter()
                .map(|v| normalize(facet, v.trim()))
                .filter(|v| !v.is_empty())
                .collect::<HashSet<_>>();
            tracing::debug!("Found {} {}", values.len(), facet.label());
            self.cache.insert(facet, values);
        }
        Ok(&self.cache[&facet])
    }

    /// Whether `name` is present in a facet.
    ///
    /// Package and cask facets also match on the short name, so
    /// `homebrew/core/git` is satisfied by an installed `git` and
    /// `homebrew/cask-fonts/font-fira-code` by `font-fira-code`.
    pub fn contains(&mut self, facet: Facet, name: &str) -> Result<bool> {
        let key = normalize(facet, name);
        let set = self.facet(facet)?;
        if set.contains(&key) {
            return Ok(true);
        }
        if matches!(
            facet,
            Facet::Packages | Facet::Casks | Facet::Upgradable | Facet::Services
        ) {
            if let Some((_, short)) = key.rsplit_once('/') {
                return Ok(set.contains(short));
            }
        }
        Ok(false)
    }

    /// Facets fetched so far.
    pub fn fetched(&self) -> impl Iterator<Item = Facet> + '_ {
        self.cache.keys().copied()
    }
}

/// Tap names are case-insensitive.
fn normalize(facet: Facet, value: &str) -> String {
    match facet {
        Facet::Taps => value.to_lowercase(),
        _ => value.to_string(),
    }
}
