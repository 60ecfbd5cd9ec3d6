use std::sync::Arc;

use log::info;

use crate::{
    AssetReader, ContactNotice, FetchRequest, PLACEHOLDER_PROFILE_IMAGE_URL,
    PLACEHOLDER_RESUME_CONTENT, PageRenderer, PortfolioPage, Profile, ProfileImage,
    ProjectsSection, RepositoryFetcher, ResumeDownload, StdResult, UiState,
};

use super::{PROFILE_IMAGE_ASSET, RESUME_ASSET};

/// The path under which the local profile picture is served.
pub const PROFILE_IMAGE_PATH: &str = "/assets/profile.png";

/// Assembles and renders the portfolio page.
///
/// Each render cycle performs exactly one fetch.
pub struct PortfolioService {
    /// The request template holding the account handle.
    request: FetchRequest,
    fetcher: Arc<dyn RepositoryFetcher>,
    assets: Arc<dyn AssetReader>,
    renderer: Arc<dyn PageRenderer>,
    profile: Profile,
}

impl PortfolioService {
    /// Creates a new `PortfolioService` for the given account handle.
    pub fn try_new(
        handle: &str,
        fetcher: Arc<dyn RepositoryFetcher>,
        assets: Arc<dyn AssetReader>,
        renderer: Arc<dyn PageRenderer>,
        profile: Profile,
    ) -> StdResult<Self> {
        Ok(Self {
            request: FetchRequest::try_new(handle, None)?,
            fetcher,
            assets,
            renderer,
            profile,
        })
    }

    fn fetch_request(&self, ui_state: &UiState) -> FetchRequest {
        FetchRequest {
            handle: self.request.handle.clone(),
            page_limit: ui_state.page_limit(),
        }
    }

    /// Builds the page model for one render cycle.
    pub async fn build_page(
        &self,
        ui_state: UiState,
        contact_notice: Option<ContactNotice>,
    ) -> PortfolioPage {
        let request = self.fetch_request(&ui_state);
        info!("Rendering portfolio: {request}");
        let outcome = self.fetcher.fetch(&request).await;
        let profile_image = if self.assets.exists(PROFILE_IMAGE_ASSET).await {
            ProfileImage::Local(PROFILE_IMAGE_PATH.to_string())
        } else {
            ProfileImage::Placeholder(PLACEHOLDER_PROFILE_IMAGE_URL)
        };

        PortfolioPage {
            profile: self.profile.clone(),
            profile_image,
            projects: ProjectsSection::from_outcome(&outcome, &ui_state),
            contact_notice,
            ui_state,
        }
    }

    /// Renders the page for one render cycle.
    pub async fn render_page(
        &self,
        ui_state: UiState,
        contact_notice: Option<ContactNotice>,
    ) -> String {
        let page = self.build_page(ui_state, contact_notice).await;

        self.renderer.render(&page)
    }

    /// Retrieves the local profile picture, if any.
    pub async fn profile_image(&self) -> Option<Vec<u8>> {
        self.assets.try_read(PROFILE_IMAGE_ASSET).await
    }

    /// Retrieves the resume, falling back to a placeholder payload under the same file name.
    pub async fn resume(&self) -> ResumeDownload {
        let content = self
            .assets
            .try_read(RESUME_ASSET)
            .await
            .unwrap_or_else(|| PLACEHOLDER_RESUME_CONTENT.as_bytes().to_vec());

        ResumeDownload {
            file_name: self.profile.resume_file_name,
            content,
        }
    }
}
