use crate::PortfolioPage;

/// A trait for turning a page view model into a document.
#[cfg_attr(test, mockall::automock)]
pub trait PageRenderer: Sync + Send {
    /// Renders the page.
    fn render(&self, page: &PortfolioPage) -> String;
}
