use chrono::NaiveDateTime;

use super::{ContactNotice, FetchOutcome, Profile, RepositoryRecord, UiState};

/// Maximum number of characters of a repository name shown on a card.
pub const NAME_DISPLAY_LIMIT: usize = 35;

/// Maximum number of characters of a repository description shown on a card.
pub const DESCRIPTION_DISPLAY_LIMIT: usize = 120;

/// Number of cards in a row.
pub const CARDS_PER_ROW: usize = 3;

/// Suffix appended to truncated text.
pub const ELLIPSIS: &str = "...";
/// Shown when a repository has no description.
pub const MISSING_DESCRIPTION: &str = "No description available";
/// Shown when a repository has no primary language.
pub const MISSING_LANGUAGE: &str = "N/A";
/// Hint shown below the warning when fetching repositories fails.
pub const FETCH_FAILURE_HINT: &str =
    "You can manually add your GitHub projects or try refreshing the page.";
/// Shown when the account has no public repositories.
pub const NO_REPOSITORIES_MESSAGE: &str =
    "No repositories found or user has no public repositories.";

/// Image shown in the sidebar when no local profile picture is available.
pub const PLACEHOLDER_PROFILE_IMAGE_URL: &str =
    "https://via.placeholder.com/180/2ECC71/FFFFFF?text=AA";

/// Payload offered for download when no local resume is available.
pub const PLACEHOLDER_RESUME_CONTENT: &str = "Sample Resume Content";

/// Content type of the resume download.
pub const RESUME_MIME_TYPE: &str = "application/pdf";

const UPSTREAM_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";

/// Keeps the first `limit` characters of `text`, appending an ellipsis when something was cut.
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => format!("{}{ELLIPSIS}", &text[..byte_index]),
        None => text.to_string(),
    }
}

/// Formats an upstream timestamp as e.g. `Jan 05, 2025`, returning the input when it does not parse.
pub fn format_date(timestamp: &str) -> String {
    NaiveDateTime::parse_from_str(timestamp, UPSTREAM_DATE_FORMAT)
        .map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// A repository ready to be displayed as a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryCard {
    /// Repository name, truncated for display.
    pub name: String,

    /// Description, truncated, or a placeholder when absent.
    pub description: String,

    /// Primary language, or `N/A` when absent.
    pub language: String,

    /// Number of stargazers.
    pub stars: u32,

    /// Number of forks.
    pub forks: u32,

    /// Last update date, formatted for display.
    pub updated: String,

    /// Link to the repository page.
    pub url: String,
}

impl From<&RepositoryRecord> for RepositoryCard {
    fn from(record: &RepositoryRecord) -> Self {
        Self {
            name: truncate(record.name(), NAME_DISPLAY_LIMIT),
            description: record
                .description()
                .map(|description| truncate(description, DESCRIPTION_DISPLAY_LIMIT))
                .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
            language: record.language().unwrap_or(MISSING_LANGUAGE).to_string(),
            stars: **record.total_stars(),
            forks: **record.total_forks(),
            updated: format_date(record.updated_at()),
            url: record.html_url().to_string(),
        }
    }
}

/// What the projects section displays for one render cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectsSection {
    /// The fetch failed: a warning and a static hint, nothing else.
    Failed { warning: String, hint: &'static str },

    /// The account has no public repositories.
    Empty { message: &'static str },

    /// Cards grouped in rows, and whether every repository is currently shown.
    Cards {
        rows: Vec<Vec<RepositoryCard>>,
        show_all: bool,
    },
}

impl ProjectsSection {
    /// Decides what to display from a fetch outcome and the session state.
    pub fn from_outcome(outcome: &FetchOutcome, ui_state: &UiState) -> Self {
        match outcome {
            Err(error) => ProjectsSection::Failed {
                warning: error.to_string(),
                hint: FETCH_FAILURE_HINT,
            },
            Ok(records) if records.is_empty() => ProjectsSection::Empty {
                message: NO_REPOSITORIES_MESSAGE,
            },
            Ok(records) => ProjectsSection::Cards {
                rows: records
                    .chunks(CARDS_PER_ROW)
                    .map(|row| row.iter().map(RepositoryCard::from).collect())
                    .collect(),
                show_all: ui_state.show_all,
            },
        }
    }

    /// The label of the button flipping the "show all" flag, when one is displayed.
    pub fn toggle_label(&self) -> Option<&'static str> {
        match self {
            ProjectsSection::Cards { show_all: false, .. } => Some("Show All Projects"),
            ProjectsSection::Cards { show_all: true, .. } => Some("Show Less"),
            _ => None,
        }
    }
}

/// Where the sidebar profile picture comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileImage {
    /// A local file served by the application under the given path.
    Local(String),

    /// The fallback remote image.
    Placeholder(&'static str),
}

impl ProfileImage {
    /// The URL or path to use as the image source.
    pub fn src(&self) -> &str {
        match self {
            ProfileImage::Local(path) => path,
            ProfileImage::Placeholder(url) => url,
        }
    }
}

/// The resume offered for download, under the same file name whether or not it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDownload {
    pub file_name: &'static str,
    pub content: Vec<u8>,
}

/// Everything needed to render the portfolio page once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioPage {
    pub profile: Profile,
    pub profile_image: ProfileImage,
    pub projects: ProjectsSection,
    pub contact_notice: Option<ContactNotice>,
    pub ui_state: UiState,
}

#[cfg(test)]
mod tests {
    use crate::FetchError;

    use super::*;

    fn record_with(name: &str, description: Option<&str>) -> RepositoryRecord {
        RepositoryRecord::new(
            name,
            description,
            None,
            3,
            1,
            "2025-01-05T10:20:30Z",
            "https://github.com/octocat/repository",
        )
    }

    mod truncation {
        use super::*;

        #[test]
        fn name_longer_than_limit_is_cut_with_ellipsis() {
            let name = "n".repeat(40);

            let card = RepositoryCard::from(&record_with(&name, None));

            assert_eq!(format!("{}...", "n".repeat(35)), card.name);
        }

        #[test]
        fn name_at_limit_is_unchanged() {
            let name = "n".repeat(35);

            let card = RepositoryCard::from(&record_with(&name, None));

            assert_eq!(name, card.name);
        }

        #[test]
        fn description_longer_than_limit_is_cut_with_ellipsis() {
            let description = "d".repeat(130);

            let card = RepositoryCard::from(&record_with("repository", Some(&description)));

            assert_eq!(format!("{}...", "d".repeat(120)), card.description);
        }

        #[test]
        fn missing_description_uses_placeholder() {
            let card = RepositoryCard::from(&record_with("repository", None));

            assert_eq!(MISSING_DESCRIPTION, card.description);
            assert_eq!(MISSING_LANGUAGE, card.language);
        }

        #[test]
        fn counts_characters_not_bytes() {
            let text = "é".repeat(5);

            assert_eq!("ééé...", truncate(&text, 3));
            assert_eq!(text, truncate(&text, 5));
        }
    }

    mod dates {
        use super::*;

        #[test]
        fn formats_upstream_timestamp() {
            assert_eq!("Jan 05, 2025", format_date("2025-01-05T10:20:30Z"));
        }

        #[test]
        fn keeps_unparsable_timestamp() {
            assert_eq!("yesterday", format_date("yesterday"));
        }
    }

    mod projects_section {
        use super::*;

        #[test]
        fn error_outcome_displays_warning_and_hint() {
            let outcome: FetchOutcome = Err(FetchError::RateLimited);

            let section = ProjectsSection::from_outcome(&outcome, &UiState::default());

            match section {
                ProjectsSection::Failed { warning, hint } => {
                    assert!(warning.contains("rate limit exceeded"));
                    assert_eq!(FETCH_FAILURE_HINT, hint);
                }
                other => panic!("Unexpected section: {other:?}"),
            }
        }

        #[test]
        fn empty_outcome_displays_empty_state_not_error() {
            let outcome: FetchOutcome = Ok(vec![]);

            let section = ProjectsSection::from_outcome(&outcome, &UiState::default());

            assert_eq!(
                ProjectsSection::Empty {
                    message: NO_REPOSITORIES_MESSAGE
                },
                section
            );
            assert_eq!(None, section.toggle_label());
        }

        #[test]
        fn records_are_partitioned_in_rows_of_three() {
            let outcome: FetchOutcome = Ok((0..7)
                .map(|i| RepositoryRecord::dummy(&format!("repository-{i}")))
                .collect());

            let section = ProjectsSection::from_outcome(&outcome, &UiState::default());

            match &section {
                ProjectsSection::Cards { rows, show_all } => {
                    assert_eq!(
                        vec![3, 3, 1],
                        rows.iter().map(Vec::len).collect::<Vec<_>>()
                    );
                    assert_eq!("repository-6", rows[2][0].name);
                    assert!(!show_all);
                }
                other => panic!("Unexpected section: {other:?}"),
            }
            assert_eq!(Some("Show All Projects"), section.toggle_label());
        }

        #[test]
        fn toggle_label_follows_show_all_flag() {
            let outcome: FetchOutcome = Ok(vec![RepositoryRecord::dummy("repository")]);
            let ui_state = UiState::default().toggle_projects();

            let section = ProjectsSection::from_outcome(&outcome, &ui_state);

            assert_eq!(Some("Show Less"), section.toggle_label());
        }
    }
}
