use std::{net::SocketAddr, sync::Arc};

use axum::{
    Form, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use log::{info, warn};
use serde::Deserialize;

use crate::{ContactForm, RESUME_MIME_TYPE, StdResult, Theme, UiState};

use super::{PROFILE_IMAGE_PATH, PortfolioService};

/// A contact form submission, carrying the session state alongside the message fields.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct ContactSubmission {
    show_all: bool,
    theme: Theme,
    name: String,
    email: String,
    message: String,
}

impl ContactSubmission {
    fn into_parts(self) -> (UiState, ContactForm) {
        (
            UiState {
                show_all: self.show_all,
                theme: self.theme,
            },
            ContactForm {
                name: self.name,
                email: self.email,
                message: self.message,
            },
        )
    }
}

/// Serves the portfolio over HTTP.
pub struct PortfolioServer {
    service: Arc<PortfolioService>,
}

impl PortfolioServer {
    /// Creates a new `PortfolioServer` backed by the given service.
    pub fn new(service: Arc<PortfolioService>) -> Self {
        Self { service }
    }

    /// Builds the router exposing the page and its actions.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(Self::index))
            .route("/projects/toggle", post(Self::toggle_projects))
            .route("/theme/toggle", post(Self::toggle_theme))
            .route("/contact", post(Self::contact))
            .route("/resume", get(Self::resume))
            .route(PROFILE_IMAGE_PATH, get(Self::profile_image))
            .with_state(self.service.clone())
    }

    /// Serves the portfolio on the given address until a shutdown signal is received.
    pub async fn serve(&self, address: SocketAddr) -> StdResult<()> {
        let listener = tokio::net::TcpListener::bind(address).await?;
        info!("Portfolio available at http://{}", listener.local_addr()?);
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        info!("Portfolio server stopped");

        Ok(())
    }

    async fn index(
        State(service): State<Arc<PortfolioService>>,
        Query(ui_state): Query<UiState>,
    ) -> Html<String> {
        Html(service.render_page(ui_state, None).await)
    }

    async fn toggle_projects(Form(ui_state): Form<UiState>) -> Redirect {
        Redirect::to(&format!("/?{}#projects", ui_state.toggle_projects().to_query()))
    }

    async fn toggle_theme(Form(ui_state): Form<UiState>) -> Redirect {
        Redirect::to(&format!("/?{}", ui_state.toggle_theme().to_query()))
    }

    async fn contact(
        State(service): State<Arc<PortfolioService>>,
        Form(submission): Form<ContactSubmission>,
    ) -> Html<String> {
        let (ui_state, form) = submission.into_parts();
        let notice = form.validate();
        info!("Contact form submitted: {notice:?}");

        Html(service.render_page(ui_state, Some(notice)).await)
    }

    async fn resume(State(service): State<Arc<PortfolioService>>) -> impl IntoResponse {
        let resume = service.resume().await;

        (
            [
                (header::CONTENT_TYPE, RESUME_MIME_TYPE.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", resume.file_name),
                ),
            ],
            resume.content,
        )
    }

    async fn profile_image(State(service): State<Arc<PortfolioService>>) -> Response {
        match service.profile_image().await {
            Some(content) => ([(header::CONTENT_TYPE, "image/png")], content).into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for the shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}
