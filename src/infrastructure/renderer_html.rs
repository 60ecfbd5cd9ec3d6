use crate::{
    ContactNotice, PageRenderer, Palette, PortfolioPage, ProjectsSection, RepositoryCard, Theme,
    UiState,
};

/// Renders the portfolio as a standalone HTML document.
#[derive(Debug, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Creates a new `HtmlRenderer`.
    pub fn new() -> Self {
        Self
    }
}

impl PageRenderer for HtmlRenderer {
    fn render(&self, page: &PortfolioPage) -> String {
        let palette = page.ui_state.theme.palette();
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Portfolio</title>
<style>{style}</style>
</head>
<body>
<div class="layout">
{sidebar}
<main>
{hero}
<hr>
{skills}
<hr>
{projects}
<hr>
{resume}
<hr>
{contact}
<hr>
{footer}
</main>
</div>
</body>
</html>
"#,
            title = html_escape(page.profile.display_name),
            style = render_style(&palette),
            sidebar = render_sidebar(page),
            hero = render_hero(page),
            skills = render_skills(page),
            projects = render_projects(&page.projects, &page.ui_state),
            resume = render_resume(page),
            contact = render_contact(page),
            footer = render_footer(page),
        )
    }
}

fn html_escape(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Hidden inputs carrying the session state through a form submission.
fn state_inputs(ui_state: &UiState) -> String {
    format!(
        r#"<input type="hidden" name="show_all" value="{}"><input type="hidden" name="theme" value="{}">"#,
        ui_state.show_all, ui_state.theme
    )
}

fn render_style(palette: &Palette) -> String {
    format!(
        r#"
* {{ font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif; box-sizing: border-box; }}
body {{ margin: 0; background: {bg_primary}; color: {text_primary}; }}
.layout {{ display: flex; min-height: 100vh; }}
aside {{ width: 280px; padding: 2rem 1rem; background: {bg_secondary}; border-right: 1px solid {border}; }}
aside img {{ width: 180px; border-radius: 50%; }}
main {{ flex: 1; padding: 2rem 3rem; }}
h1, h2 {{ color: {accent}; }}
h3, h4 {{ color: {text_primary}; }}
p, li {{ color: {text_secondary}; line-height: 1.7; }}
a {{ color: {accent}; text-decoration: none; }}
a:hover {{ color: {accent_hover}; }}
hr {{ border: none; height: 1px; background: {border}; margin: 3rem 0; }}
.row {{ display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin-bottom: 1.5rem; }}
.stats {{ display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }}
.card {{ background: {bg_card}; border: 1px solid {border}; border-radius: 16px; padding: 1rem; }}
.card:hover {{ border-color: {accent}; box-shadow: 0 0 30px {glow}; }}
.repository {{ min-height: 320px; display: flex; flex-direction: column; }}
.repository .description {{ flex-grow: 1; }}
.metric-value {{ font-size: 2rem; font-weight: 700; color: {text_primary}; }}
.button {{ display: inline-block; background: {accent}; color: white; border: none; padding: 0.75rem 2rem; border-radius: 8px; font-weight: 600; cursor: pointer; }}
.button:hover {{ background: {accent_hover}; }}
.alert {{ border-radius: 12px; border-left: 4px solid {accent}; padding: 1rem; background: {bg_card}; }}
input, textarea {{ width: 100%; background: {bg_card}; color: {text_primary}; border: 1px solid {border}; border-radius: 8px; padding: 0.5rem; }}
"#,
        bg_primary = palette.bg_primary,
        bg_secondary = palette.bg_secondary,
        bg_card = palette.bg_card,
        text_primary = palette.text_primary,
        text_secondary = palette.text_secondary,
        accent = palette.accent,
        accent_hover = palette.accent_hover,
        border = palette.border,
        glow = palette.glow,
    )
}

fn render_sidebar(page: &PortfolioPage) -> String {
    let profile = &page.profile;
    let links = profile
        .links
        .iter()
        .map(|link| {
            format!(
                r#"<p><a href="{}" target="_blank">{}</a></p>"#,
                html_escape(link.url),
                html_escape(link.label)
            )
        })
        .collect::<String>();
    let theme_label = match page.ui_state.theme.toggled() {
        Theme::Dark => "Dark mode",
        Theme::Light => "Light mode",
    };

    format!(
        r#"<aside>
<img src="{image}" alt="Profile picture">
<h1>{name}</h1>
<p><strong>{location}</strong></p>
<p>{email}</p>
{links}
<h3>Quick Links</h3>
<a class="button" href="/resume">Download Resume</a>
<form method="post" action="/theme/toggle">{state}<button class="button" type="submit">{theme_label}</button></form>
</aside>"#,
        image = html_escape(page.profile_image.src()),
        name = html_escape(profile.display_name),
        location = html_escape(profile.location),
        email = html_escape(profile.email),
        state = state_inputs(&page.ui_state),
    )
}

fn render_hero(page: &PortfolioPage) -> String {
    let stats = page
        .profile
        .stats
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="card"><p>{}</p><div class="metric-value">{}</div><p>{}</p></div>"#,
                html_escape(stat.label),
                html_escape(stat.value),
                html_escape(stat.delta)
            )
        })
        .collect::<String>();

    format!(
        r#"<section class="hero">
<h1>{greeting}</h1>
<p>{hero}</p>
<div class="stats">{stats}</div>
</section>"#,
        greeting = html_escape(page.profile.greeting),
        hero = page.profile.hero_html,
    )
}

fn render_skills(page: &PortfolioPage) -> String {
    let cards = page
        .profile
        .skills
        .iter()
        .map(|skill| {
            let items = skill
                .items
                .iter()
                .map(|item| format!("<li>{}</li>", html_escape(item)))
                .collect::<String>();
            format!(
                r#"<div class="card"><h3>{}</h3><ul>{items}</ul></div>"#,
                html_escape(skill.title)
            )
        })
        .collect::<String>();

    format!(r#"<section><h2>Skills &amp; Expertise</h2><div class="row">{cards}</div></section>"#)
}

fn render_card(card: &RepositoryCard) -> String {
    format!(
        r#"<div class="card repository">
<h4>{name}</h4>
<p class="description">{description}</p>
<p><strong>Language:</strong> {language}<br>
<strong>Stars:</strong> {stars} | <strong>Forks:</strong> {forks}<br>
<strong>Updated:</strong> {updated}</p>
<a class="button" href="{url}" target="_blank">View on GitHub</a>
</div>"#,
        name = html_escape(&card.name),
        description = html_escape(&card.description),
        language = html_escape(&card.language),
        stars = card.stars,
        forks = card.forks,
        updated = html_escape(&card.updated),
        url = html_escape(&card.url),
    )
}

fn render_projects(projects: &ProjectsSection, ui_state: &UiState) -> String {
    let body = match projects {
        ProjectsSection::Failed { warning, hint } => format!(
            r#"<div class="alert warning">⚠️ {}</div>
<div class="alert info">💡 <strong>Tip:</strong> {}</div>"#,
            html_escape(warning),
            html_escape(hint)
        ),
        ProjectsSection::Empty { message } => {
            format!(r#"<div class="alert info">📭 {}</div>"#, html_escape(message))
        }
        ProjectsSection::Cards { rows, .. } => {
            let rows = rows
                .iter()
                .map(|row| {
                    format!(
                        r#"<div class="row">{}</div>"#,
                        row.iter().map(render_card).collect::<String>()
                    )
                })
                .collect::<String>();
            let toggle = projects
                .toggle_label()
                .map(|label| {
                    format!(
                        r#"<form method="post" action="/projects/toggle">{}<button class="button" type="submit">{}</button></form>"#,
                        state_inputs(ui_state),
                        html_escape(label)
                    )
                })
                .unwrap_or_default();
            format!("{rows}{toggle}")
        }
    };

    format!(
        r#"<section id="projects">
<h3>Latest GitHub Projects</h3>
<p><em>Automatically fetched from GitHub</em></p>
{body}
</section>"#
    )
}

fn render_resume(page: &PortfolioPage) -> String {
    format!(
        r#"<section id="resume">
<h2>Resume / CV</h2>
<div class="card"><p>Download my complete resume with detailed project descriptions and work experience.</p></div>
<p><a class="button" href="/resume" download="{}">Download Resume (PDF)</a></p>
</section>"#,
        html_escape(page.profile.resume_file_name)
    )
}

fn render_contact_notice(notice: Option<ContactNotice>) -> String {
    match notice {
        Some(notice @ ContactNotice::Sent) => {
            format!(r#"<div class="alert success">✅ {}</div>"#, notice.message())
        }
        Some(notice @ ContactNotice::MissingFields) => {
            format!(r#"<div class="alert error">❌ {}</div>"#, notice.message())
        }
        None => String::new(),
    }
}

fn render_contact(page: &PortfolioPage) -> String {
    let profile = &page.profile;
    let links = profile
        .links
        .iter()
        .map(|link| {
            format!(
                r#"• <a href="{}" target="_blank">{}</a><br>"#,
                html_escape(link.url),
                html_escape(link.label)
            )
        })
        .collect::<String>();

    format!(
        r#"<section id="contact">
<h2>Get In Touch</h2>
<div class="card"><h3>Let's Connect!</h3><p>I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision.</p></div>
<div class="row">
<div class="card"><h3>Email</h3><p><a href="mailto:{email}">{email}</a></p><h3>Social Media</h3><p>{links}</p></div>
<div class="card">
<h3>Send a Message</h3>
{notice}
<form method="post" action="/contact#contact">
{state}
<label>Your Name<input type="text" name="name"></label>
<label>Your Email<input type="text" name="email"></label>
<label>Message<textarea name="message" rows="6"></textarea></label>
<button class="button" type="submit">Send Message</button>
</form>
</div>
</div>
</section>"#,
        email = html_escape(profile.email),
        notice = render_contact_notice(page.contact_notice),
        state = state_inputs(&page.ui_state),
    )
}

fn render_footer(page: &PortfolioPage) -> String {
    format!(
        r#"<footer style="text-align: center"><p>{}</p><p>Last updated: {}</p></footer>"#,
        html_escape(page.profile.footer_note),
        html_escape(page.profile.last_updated)
    )
}

#[cfg(test)]
mod tests {
    use crate::{
        FetchError, FetchOutcome, PLACEHOLDER_PROFILE_IMAGE_URL, Profile, ProfileImage,
        RepositoryRecord,
    };

    use super::*;

    fn page_for(outcome: FetchOutcome, ui_state: UiState) -> PortfolioPage {
        PortfolioPage {
            profile: Profile::default(),
            profile_image: ProfileImage::Placeholder(PLACEHOLDER_PROFILE_IMAGE_URL),
            projects: ProjectsSection::from_outcome(&outcome, &ui_state),
            contact_notice: None,
            ui_state,
        }
    }

    #[test]
    fn escapes_special_characters() {
        assert_eq!(
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;",
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#)
        );
    }

    #[test]
    fn renders_repository_cards_and_show_all_button() {
        let page = page_for(
            Ok(vec![RepositoryRecord::dummy("repository-1")]),
            UiState::default(),
        );

        let html = HtmlRenderer::new().render(&page);

        assert!(html.contains("<h4>repository-1</h4>"));
        assert!(html.contains("https://github.com/octocat/repository-1"));
        assert!(html.contains("Jan 05, 2025"));
        assert!(html.contains("Show All Projects"));
        assert!(html.contains(r#"name="show_all" value="false""#));
    }

    #[test]
    fn renders_show_less_button_when_showing_all() {
        let page = page_for(
            Ok(vec![RepositoryRecord::dummy("repository-1")]),
            UiState::default().toggle_projects(),
        );

        let html = HtmlRenderer::new().render(&page);

        assert!(html.contains("Show Less"));
        assert!(html.contains(r#"name="show_all" value="true""#));
    }

    #[test]
    fn renders_rate_limit_warning_with_hint() {
        let page = page_for(Err(FetchError::RateLimited), UiState::default());

        let html = HtmlRenderer::new().render(&page);

        assert!(html.contains("rate limit exceeded"));
        assert!(html.contains("try refreshing the page"));
        assert!(!html.contains("/projects/toggle"));
    }

    #[test]
    fn renders_empty_state() {
        let page = page_for(Ok(vec![]), UiState::default());

        let html = HtmlRenderer::new().render(&page);

        assert!(html.contains("No repositories found or user has no public repositories."));
        assert!(!html.contains("/projects/toggle"));
    }

    #[test]
    fn escapes_upstream_content() {
        let record = RepositoryRecord::new(
            "xss",
            Some("<script>alert(1)</script>"),
            None,
            0,
            0,
            "2025-01-05T10:20:30Z",
            "https://github.com/octocat/xss",
        );
        let page = page_for(Ok(vec![record]), UiState::default());

        let html = HtmlRenderer::new().render(&page);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn renders_placeholder_profile_image() {
        let page = page_for(Ok(vec![]), UiState::default());

        let html = HtmlRenderer::new().render(&page);

        assert!(html.contains(PLACEHOLDER_PROFILE_IMAGE_URL.replace('&', "&amp;").as_str()));
    }

    #[test]
    fn renders_theme_palette() {
        let dark = HtmlRenderer::new().render(&page_for(Ok(vec![]), UiState::default()));
        let light = HtmlRenderer::new().render(&page_for(
            Ok(vec![]),
            UiState {
                theme: Theme::Light,
                ..UiState::default()
            },
        ));

        assert!(dark.contains("#0F172A"));
        assert!(dark.contains("Light mode"));
        assert!(light.contains("#F8FAFC"));
        assert!(light.contains("Dark mode"));
    }

    #[test]
    fn renders_contact_notice() {
        let mut page = page_for(Ok(vec![]), UiState::default());
        page.contact_notice = Some(ContactNotice::MissingFields);

        let html = HtmlRenderer::new().render(&page);

        assert!(html.contains("Please fill in all fields."));
    }
}
