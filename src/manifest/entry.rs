//! Declared manifest entries.

/// One declaration from a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A repository that must be tapped.
    Tap { name: String },

    /// A package (formula) that must be installed.
    Package {
        name: String,
        /// The package's service must be running.
        start_service: bool,
        /// The package's service must be running and not stale.
        restart_service: bool,
    },

    /// A GUI application package.
    Cask { name: String },

    /// An App Store application, identified by its numeric id.
    App { name: String, id: u64 },
}

impl Entry {
    /// Create a tap entry.
    pub fn tap(name: impl Into<String>) -> Self {
        Self::Tap { name: name.into() }
    }

    /// Create a package entry without service flags.
    pub fn package(name: impl Into<String>) -> Self {
        Self::Package {
            name: name.into(),
            start_service: false,
            restart_service: false,
        }
    }

    /// Create a package entry whose service must be started.
    pub fn package_started(name: impl Into<String>) -> Self {
        Self::Package {
            name: name.into(),
            start_service: true,
            restart_service: false,
        }
    }

    /// Create a package entry whose service must be restarted when stale.
    pub fn package_restarted(name: impl Into<String>) -> Self {
        Self::Package {
            name: name.into(),
            start_service: false,
            restart_service: true,
        }
    }

    /// Create a cask entry.
    pub fn cask(name: impl Into<String>) -> Self {
        Self::Cask { name: name.into() }
    }

    /// Create an App Store entry.
    pub fn app(name: impl Into<String>, id: u64) -> Self {
        Self::App {
            name: name.into(),
            id,
        }
    }

    /// The declared name.
    pub fn name(&self) -> &str {
        match self {
            Self::Tap { name }
            | Self::Package { name, .. }
            | Self::Cask { name }
            | Self::App { name, .. } => name,
        }
    }

    /// The kind of entry.
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Tap { .. } => EntryKind::Tap,
            Self::Package { .. } => EntryKind::Package,
            Self::Cask { .. } => EntryKind::Cask,
            Self::App { .. } => EntryKind::App,
        }
    }

    /// Whether this is a package with any service flag set.
    pub fn wants_service(&self) -> bool {
        matches!(
            self,
            Self::Package {
                start_service: true,
                ..
            } | Self::Package {
                restart_service: true,
                ..
            }
        )
    }
}

/// Entry discriminant, used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Tap,
    Package,
    Cask,
    App,
}
