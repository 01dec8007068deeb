//! Section tree types.
//!
//! Everything here is a plain serializable record. The renderer feeds
//! these untouched into template context; templates dispatch on the
//! `type` tag of [`Section`].

use serde::Serialize;

use crate::config::schema::{LinksConfig, PortfolioConfig, SkillCategory, ThemeConfig};

/// One named, routed page: a title and an ordered tree of sections.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Page {
    /// Stable page identifier, also used in log events.
    pub slug: &'static str,

    /// Document title.
    pub title: String,

    pub sections: Vec<Section>,
}

/// One visually distinct area of a page.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    Hero {
        name: String,
        title: String,
        tagline: String,
        links: Vec<ContactLink>,
    },
    About {
        heading: String,
        body: String,
        location: String,
        email: String,
    },
    Skills {
        heading: String,
        categories: Vec<SkillCategory>,
    },
    Projects {
        heading: String,
        projects: Vec<ProjectCard>,
    },
    Publications {
        heading: String,
        entries: Vec<PublicationEntry>,
    },
    Experience {
        heading: String,
        positions: Vec<PositionEntry>,
    },
    Education {
        heading: String,
        degrees: Vec<DegreeEntry>,
    },
    Contact {
        heading: String,
        email: String,
        location: String,
        links: Vec<ContactLink>,
    },
}

/// A labeled hyperlink (profile links, project links, mailto).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

/// One project as displayed. Absent URLs are simply absent links.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: String,
    pub links: Vec<ContactLink>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PublicationEntry {
    pub title: String,
    pub authors: String,
    pub venue: String,
    pub year: i32,
    pub url: String,
}

/// One position as displayed; `period` is pre-formatted, with the literal
/// label "Present" standing in for a missing end date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PositionEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DegreeEntry {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub period: String,
    pub description: String,
}

/// Page chrome shared by every route: brand, navigation, footer links and
/// theme tokens. Supplied to the base template next to the page itself.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteChrome {
    pub brand: String,
    pub tagline: String,
    pub email: String,
    pub nav: Vec<ContactLink>,
    pub links: Vec<ContactLink>,
    pub theme: ThemeConfig,
}

impl SiteChrome {
    pub fn from_profile(profile: &PortfolioConfig) -> Self {
        Self {
            brand: profile.identity.name.clone(),
            tagline: profile.identity.title.clone(),
            email: profile.identity.email.clone(),
            nav: vec![
                ContactLink {
                    label: "Home".to_string(),
                    href: "/".to_string(),
                },
                ContactLink {
                    label: "Projects".to_string(),
                    href: "/projects".to_string(),
                },
                ContactLink {
                    label: "Publications".to_string(),
                    href: "/publications".to_string(),
                },
                ContactLink {
                    label: "Experience".to_string(),
                    href: "/experience".to_string(),
                },
            ],
            links: profile_links(&profile.links),
            theme: profile.theme.clone(),
        }
    }
}

/// Present profile links in a fixed order, skipping absent ones.
pub fn profile_links(links: &LinksConfig) -> Vec<ContactLink> {
    let named = [
        ("GitHub", &links.github),
        ("LinkedIn", &links.linkedin),
        ("Twitter", &links.twitter),
        ("Kaggle", &links.kaggle),
        ("Google Scholar", &links.google_scholar),
    ];

    named
        .into_iter()
        .filter_map(|(label, href)| {
            href.as_ref().map(|href| ContactLink {
                label: label.to_string(),
                href: href.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_links_are_skipped() {
        // Default links have no Twitter and no Google Scholar.
        let rendered = profile_links(&LinksConfig::default());
        assert_eq!(rendered.len(), 3);
        assert!(rendered.iter().all(|l| l.label != "Twitter"));

        let links = LinksConfig {
            twitter: Some("https://twitter.com/janedoe".to_string()),
            ..LinksConfig::default()
        };
        assert_eq!(profile_links(&links).len(), 4);
    }

    #[test]
    fn test_section_tag_serialization() {
        let section = Section::Skills {
            heading: "Skills".to_string(),
            categories: Vec::new(),
        };
        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["type"], "skills");
        assert!(value["categories"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_chrome_nav_covers_every_route() {
        let chrome = SiteChrome::from_profile(&PortfolioConfig::default());
        let hrefs: Vec<&str> = chrome.nav.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, ["/", "/projects", "/publications", "/experience"]);
    }
}
