//! Template rendering subsystem.
//!
//! # Responsibilities
//! - Own the Tera engine; templates are embedded at compile time
//! - Map a composed Page (plus site chrome) into HTML
//! - Convert template failures into a generic failure page
//!
//! # Design Decisions
//! - Templates are data-to-HTML mappings only; no behavioral logic
//! - Rendering is total over a valid profile; a template error here is a
//!   programming defect, logged and swallowed into a 500 page
//! - Embedding via include_str! keeps the binary free of a runtime
//!   template directory

use tera::{Context, Tera};

use crate::compose::sections::{Page, SiteChrome};

/// Last-resort body when even the error template cannot render.
const FALLBACK_ERROR_PAGE: &str =
    "<!DOCTYPE html><html><body><h1>Something went wrong</h1>\
     <p>The page could not be rendered.</p></body></html>";

/// Build the template engine with all embedded templates.
pub fn engine() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../../templates/base.html")),
        ("page.html", include_str!("../../templates/page.html")),
        ("not_found.html", include_str!("../../templates/not_found.html")),
        ("error.html", include_str!("../../templates/error.html")),
    ])?;
    Ok(tera)
}

/// Render a composed page to HTML.
pub fn render_page(
    tera: &Tera,
    site: &SiteChrome,
    page: &Page,
) -> Result<String, tera::Error> {
    let mut context = Context::new();
    context.insert("site", site);
    context.insert("page", page);
    tera.render("page.html", &context)
}

/// Render the not-found page for an unmatched path.
pub fn render_not_found(
    tera: &Tera,
    site: &SiteChrome,
    path: &str,
) -> Result<String, tera::Error> {
    let mut context = Context::new();
    context.insert("site", site);
    context.insert("path", path);
    tera.render("not_found.html", &context)
}

/// Render the generic failure page. Infallible: falls back to a static
/// body if the error template itself fails.
pub fn render_error(tera: &Tera, site: &SiteChrome) -> String {
    let mut context = Context::new();
    context.insert("site", site);
    match tera.render("error.html", &context) {
        Ok(html) => html,
        Err(err) => {
            tracing::error!(error = %err, "Error template failed to render");
            FALLBACK_ERROR_PAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::pages;
    use crate::config::PortfolioConfig;

    fn setup() -> (Tera, SiteChrome, PortfolioConfig) {
        let profile = PortfolioConfig::default();
        let site = SiteChrome::from_profile(&profile);
        (engine().unwrap(), site, profile)
    }

    #[test]
    fn test_every_page_renders_for_default_profile() {
        let (tera, site, profile) = setup();
        for page in [
            pages::home(&profile),
            pages::projects(&profile),
            pages::publications(&profile),
            pages::experience(&profile),
        ] {
            let html = render_page(&tera, &site, &page).unwrap();
            assert!(html.contains("<!DOCTYPE html>"), "page {}", page.slug);
            assert!(html.contains(&site.brand), "page {}", page.slug);
        }
    }

    #[test]
    fn test_home_renders_present_label() {
        let (tera, site, profile) = setup();
        let html = render_page(&tera, &site, &pages::home(&profile)).unwrap();
        assert!(html.contains("Present"));
    }

    #[test]
    fn test_theme_tokens_reach_the_page() {
        let (tera, site, profile) = setup();
        let html = render_page(&tera, &site, &pages::home(&profile)).unwrap();
        assert!(html.contains(&profile.theme.primary_color));
    }

    #[test]
    fn test_not_found_renders() {
        let (tera, site, _) = setup();
        let html = render_not_found(&tera, &site, "/missing").unwrap();
        assert!(html.contains("/missing"));
    }

    #[test]
    fn test_error_page_never_fails() {
        let (tera, site, _) = setup();
        let html = render_error(&tera, &site);
        assert!(html.contains("<!DOCTYPE html>"));
    }
}
