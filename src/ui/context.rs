//! Output context: interactive terminal or plain

use console::Term;

/// Environment variables that mark a CI run
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "BUILDKITE",
    "JENKINS_URL",
    "TF_BUILD",
];

/// Decides how output is rendered
#[derive(Debug, Clone, Copy)]
pub struct UiContext {
    styled: bool,
}

impl UiContext {
    /// Detect from the attached terminal and environment
    pub fn detect() -> Self {
        let in_ci = CI_VARS.iter().any(|var| std::env::var_os(var).is_some());
        Self {
            styled: Term::stdout().is_term() && !in_ci,
        }
    }

    /// Plain output regardless of environment
    #[cfg(test)]
    pub(crate) fn plain() -> Self {
        Self { styled: false }
    }

    /// Whether to emit colors and symbols
    pub fn is_styled(&self) -> bool {
        self.styled
    }
}
