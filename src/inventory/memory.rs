//! In-memory state source for testing.
//!
//! `InMemoryStateSource` answers every facet from fixed lists and records
//! how often each facet was requested, so tests can assert that the drift
//! checker only queries what it needs.
//!
//! # Example
//!
//! ```
//! use bundlecheck::inventory::{Facet, InMemoryStateSource, StateSource};
//!
//! let source = InMemoryStateSource::new().with_facet(Facet::Casks, ["firefox"]);
//! assert_eq!(source.fetch(Facet::Casks).unwrap(), vec!["firefox".to_string()]);
//! assert_eq!(source.fetch_count(Facet::Casks), 1);
//! assert!(source.fetch(Facet::Taps).unwrap().is_empty());
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::error::{BundleError, Result};

use super::source::{Facet, StateSource};

/// Fixed, inspectable state source.
#[derive(Debug, Default)]
pub struct InMemoryStateSource {
    facets: HashMap<Facet, Vec<String>>,
    failing: HashSet<Facet>,
    fetches: RefCell<Vec<Facet>>,
}

impl InMemoryStateSource {
    /// Create a source where every facet is empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the contents of a facet.
    pub fn with_facet<I, S>(mut self, facet: Facet, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facets
            .insert(facet, values.into_iter().map(Into::into).collect());
        self
    }

    /// Set installed App Store ids.
    pub fn with_apps(self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.with_facet(Facet::Apps, ids.into_iter().map(|id| id.to_string()))
    }

    /// Make fetching a facet fail.
    pub fn failing(mut self, facet: Facet) -> Self {
        self.failing.insert(facet);
        self
    }

    /// How many times a facet was fetched.
    pub fn fetch_count(&self, facet: Facet) -> usize {
        self.fetches.borrow().iter().filter(|f| **f == facet).count()
    }

    /// Every fetch, in order.
    pub fn fetches(&self) -> Vec<Facet> {
        self.fetches.borrow().clone()
    }
}

impl StateSource for InMemoryStateSource {
    fn fetch(&self, facet: Facet) -> Result<Vec<String>> {
        self.fetches.borrow_mut().push(facet);
        if self.failing.contains(&facet) {
            return Err(BundleError::StateQueryFailed {
                facet,
                message: "simulated failure".to_string(),
            });
        }
        Ok(self.facets.get(&facet).cloned().unwrap_or_default())
    }
}
