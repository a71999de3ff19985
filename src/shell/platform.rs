//! Environment detection.

/// Variables set by common CI providers.
const CI_VARIABLES: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "BUILDKITE",
    "JENKINS_URL",
];

/// Whether the process runs under CI, where spinners and colors are off.
pub fn is_ci() -> bool {
    CI_VARIABLES
        .iter()
        .any(|name| std::env::var_os(name).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ci_variables_are_distinct() {
        let mut names = CI_VARIABLES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CI_VARIABLES.len());
    }

    #[test]
    fn is_ci_does_not_panic() {
        let _ = is_ci();
    }
}
