//! Drift problems and the aggregated report.

use std::fmt;

/// What kind of drift a problem describes.
///
/// Variants are declared in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Tap,
    Package,
    Cask,
    App,
    Service,
}

impl Category {
    /// Header printed above this category's problems.
    pub fn header(self) -> &'static str {
        match self {
            Category::Tap => "Taps need to be tapped:",
            Category::Package => "Packages need to be installed:",
            Category::Cask => "Casks need to be installed:",
            Category::App => "App Store apps need to be installed:",
            Category::Service => "Services need to be started or restarted:",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Tap => "tap",
            Category::Package => "package",
            Category::Cask => "cask",
            Category::App => "app",
            Category::Service => "service",
        };
        f.write_str(s)
    }
}

/// A single detected drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub category: Category,
    /// The declared name the problem is about.
    pub name: String,
    /// One-line description, e.g. `cask abc missing`.
    pub message: String,
}

impl Problem {
    /// A declared tap is not tapped.
    pub fn tap_missing(name: &str) -> Self {
        Self {
            category: Category::Tap,
            name: name.to_string(),
            message: format!("tap {} missing", name),
        }
    }

    /// A declared package is not installed.
    pub fn package_missing(name: &str) -> Self {
        Self {
            category: Category::Package,
            name: name.to_string(),
            message: format!("package {} missing", name),
        }
    }

    /// A declared cask is not installed.
    pub fn cask_missing(name: &str) -> Self {
        Self {
            category: Category::Cask,
            name: name.to_string(),
            message: format!("cask {} missing", name),
        }
    }

    /// A declared App Store app is not installed.
    pub fn app_missing(name: &str, id: u64) -> Self {
        Self {
            category: Category::App,
            name: name.to_string(),
            message: format!("app {} ({}) missing", name, id),
        }
    }

    /// A package's service is not running.
    pub fn service_not_started(name: &str) -> Self {
        Self {
            category: Category::Service,
            name: name.to_string(),
            message: format!("{} service not started", name),
        }
    }

    /// A package's service is running an outdated version.
    pub fn service_needs_restart(name: &str) -> Self {
        Self {
            category: Category::Service,
            name: name.to_string(),
            message: format!("{} service needs restart (package is outdated)", name),
        }
    }
}

/// Every problem found by one check run, in phase order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemReport {
    problems: Vec<Problem>,
}

impl ProblemReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn extend(&mut self, batch: Vec<Problem>) {
        self.problems.extend(batch);
    }

    /// Whether any drift was found.
    pub fn has_problems(&self) -> bool {
        !self.problems.is_empty()
    }

    /// Number of problems.
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    /// Whether the report is empty.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// All problems, in phase order.
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// All messages, in phase order.
    pub fn messages(&self) -> Vec<&str> {
        self.problems.iter().map(|p| p.message.as_str()).collect()
    }

    /// Problems grouped by category, categories in reporting order.
    pub fn grouped(&self) -> Vec<(Category, Vec<&Problem>)> {
        let mut groups: Vec<(Category, Vec<&Problem>)> = Vec::new();
        for problem in &self.problems {
            match groups.iter_mut().find(|(c, _)| *c == problem.category) {
                Some((_, list)) => list.push(problem),
                None => groups.push((problem.category, vec![problem])),
            }
        }
        groups.sort_by_key(|(c, _)| *c);
        groups
    }

    /// Number of problems in a category.
    pub fn count(&self, category: Category) -> usize {
        self.problems
            .iter()
            .filter(|p| p.category == category)
            .count()
    }
}
