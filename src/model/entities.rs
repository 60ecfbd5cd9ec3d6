use std::{fmt::Display, ops::Deref};

use serde::Deserialize;

/// The name of a repository.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(pub String);

impl Deref for RepositoryName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The number of stars a repository has.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarsCounter(pub u32);

impl Deref for StarsCounter {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for StarsCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The number of forks a repository has.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForksCounter(pub u32);

impl Deref for ForksCounter {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ForksCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata of a GitHub repository, as returned by the REST listing endpoint.
///
/// Fields the listing carries but the page does not display are ignored on deserialization.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRecord {
    /// The name of the repository.
    name: RepositoryName,

    /// The free-text description of the repository.
    description: Option<String>,

    /// The primary language detected by the host.
    language: Option<String>,

    /// The number of stars the repository has.
    #[serde(rename = "stargazers_count")]
    total_stars: StarsCounter,

    /// The number of forks the repository has.
    #[serde(rename = "forks_count")]
    total_forks: ForksCounter,

    /// The last update timestamp, formatted as `%Y-%m-%dT%H:%M:%SZ`.
    updated_at: String,

    /// The canonical web URL of the repository.
    html_url: String,
}

impl RepositoryRecord {
    /// Creates a new `RepositoryRecord` instance.
    pub fn new(
        name: &str,
        description: Option<&str>,
        language: Option<&str>,
        total_stars: u32,
        total_forks: u32,
        updated_at: &str,
        html_url: &str,
    ) -> Self {
        Self {
            name: RepositoryName(name.to_string()),
            description: description.map(str::to_string),
            language: language.map(str::to_string),
            total_stars: StarsCounter(total_stars),
            total_forks: ForksCounter(total_forks),
            updated_at: updated_at.to_string(),
            html_url: html_url.to_string(),
        }
    }

    /// Retrieves the repository name.
    pub fn name(&self) -> &RepositoryName {
        &self.name
    }

    /// Retrieves the repository description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Retrieves the primary language, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Retrieves the total stars of the repository.
    pub fn total_stars(&self) -> &StarsCounter {
        &self.total_stars
    }

    /// Retrieves the total forks of the repository.
    pub fn total_forks(&self) -> &ForksCounter {
        &self.total_forks
    }

    /// Retrieves the raw last-updated timestamp.
    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    /// Retrieves the canonical URL of the repository.
    pub fn html_url(&self) -> &str {
        &self.html_url
    }

    /// Creates a dummy `RepositoryRecord` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(name: &str) -> Self {
        Self::new(
            name,
            Some("A dummy repository"),
            Some("Rust"),
            10,
            2,
            "2025-01-05T10:20:30Z",
            &format!("https://github.com/octocat/{name}"),
        )
    }
}

impl Display for RepositoryRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repository: {}, Stars: {}, Forks: {}, Updated: {}",
            self.name, self.total_stars, self.total_forks, self.updated_at
        )
    }
}
