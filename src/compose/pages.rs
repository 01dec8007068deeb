//! Page builders.
//!
//! # Responsibilities
//! - Map one validated profile into the section tree of each routed page
//! - Select the home-page subset (3 projects, 2 most recent positions)
//! - Format period labels ("2021-01 - Present")
//!
//! # Design Decisions
//! - Pure functions over &PortfolioConfig; no I/O, no shared state
//! - Home recency ignores stored order: ongoing positions first, then by
//!   start date descending; the experience page keeps stored order exactly

use std::cmp::Ordering;

use crate::compose::sections::{
    profile_links, ContactLink, DegreeEntry, Page, PositionEntry, ProjectCard,
    PublicationEntry, Section,
};
use crate::config::schema::{Degree, PortfolioConfig, Position, Project, Publication};

/// How many projects the home page shows.
pub const HOME_PROJECT_LIMIT: usize = 3;

/// How many positions the home page shows.
pub const HOME_POSITION_LIMIT: usize = 2;

/// Label rendered for a position with no end date.
pub const PRESENT_LABEL: &str = "Present";

/// Home: hero, about, skills, a project selection, recent positions, contact.
pub fn home(profile: &PortfolioConfig) -> Page {
    let identity = &profile.identity;
    let links = profile_links(&profile.links);

    let sections = vec![
        Section::Hero {
            name: identity.name.clone(),
            title: identity.title.clone(),
            tagline: identity.bio.clone(),
            links: links.clone(),
        },
        Section::About {
            heading: "About".to_string(),
            body: identity.bio.clone(),
            location: identity.location.clone(),
            email: identity.email.clone(),
        },
        Section::Skills {
            heading: "Skills".to_string(),
            categories: profile.skills.clone(),
        },
        Section::Projects {
            heading: "Featured Projects".to_string(),
            projects: profile
                .projects
                .iter()
                .take(HOME_PROJECT_LIMIT)
                .map(project_card)
                .collect(),
        },
        Section::Experience {
            heading: "Recent Experience".to_string(),
            positions: recent_positions(&profile.experience, HOME_POSITION_LIMIT),
        },
        Section::Contact {
            heading: "Get in Touch".to_string(),
            email: identity.email.clone(),
            location: identity.location.clone(),
            links,
        },
    ];

    Page {
        slug: "home",
        title: format!("{} - {}", identity.name, identity.title),
        sections,
    }
}

/// Projects: every project, stored order, unfiltered.
pub fn projects(profile: &PortfolioConfig) -> Page {
    Page {
        slug: "projects",
        title: format!("Projects - {}", profile.identity.name),
        sections: vec![Section::Projects {
            heading: "Projects".to_string(),
            projects: profile.projects.iter().map(project_card).collect(),
        }],
    }
}

/// Publications: every publication, stored order.
pub fn publications(profile: &PortfolioConfig) -> Page {
    Page {
        slug: "publications",
        title: format!("Publications - {}", profile.identity.name),
        sections: vec![Section::Publications {
            heading: "Publications".to_string(),
            entries: profile.publications.iter().map(publication_entry).collect(),
        }],
    }
}

/// Experience: every position, then every degree, stored order.
pub fn experience(profile: &PortfolioConfig) -> Page {
    Page {
        slug: "experience",
        title: format!("Experience - {}", profile.identity.name),
        sections: vec![
            Section::Experience {
                heading: "Experience".to_string(),
                positions: profile.experience.iter().map(position_entry).collect(),
            },
            Section::Education {
                heading: "Education".to_string(),
                degrees: profile.education.iter().map(degree_entry).collect(),
            },
        ],
    }
}

fn project_card(project: &Project) -> ProjectCard {
    let named = [
        ("Source", &project.github_url),
        ("Live Demo", &project.demo_url),
        ("Paper", &project.paper_url),
    ];
    let links = named
        .into_iter()
        .filter_map(|(label, href)| {
            href.as_ref().map(|href| ContactLink {
                label: label.to_string(),
                href: href.clone(),
            })
        })
        .collect();

    ProjectCard {
        title: project.title.clone(),
        description: project.description.clone(),
        technologies: project.technologies.clone(),
        image: project.image.clone(),
        links,
    }
}

fn publication_entry(publication: &Publication) -> PublicationEntry {
    PublicationEntry {
        title: publication.title.clone(),
        authors: publication.authors.clone(),
        venue: publication.venue.clone(),
        year: publication.year,
        url: publication.url.clone(),
    }
}

fn position_entry(position: &Position) -> PositionEntry {
    PositionEntry {
        title: position.title.clone(),
        company: position.company.clone(),
        location: position.location.clone(),
        period: period_label(&position.start_date, position.end_date.as_deref()),
        current: position.end_date.is_none(),
        description: position.description.clone(),
    }
}

fn degree_entry(degree: &Degree) -> DegreeEntry {
    DegreeEntry {
        degree: degree.degree.clone(),
        institution: degree.institution.clone(),
        location: degree.location.clone(),
        period: format!("{} - {}", degree.start_year, degree.end_year),
        description: degree.description.clone(),
    }
}

fn period_label(start: &str, end: Option<&str>) -> String {
    format!("{} - {}", start, end.unwrap_or(PRESENT_LABEL))
}

/// Pick the most recent positions: ongoing first, then by start date
/// descending. "YYYY-MM" strings order correctly under lexicographic
/// comparison. The sort is stable, so equal keys keep stored order.
fn recent_positions(positions: &[Position], limit: usize) -> Vec<PositionEntry> {
    let mut ordered: Vec<&Position> = positions.iter().collect();
    ordered.sort_by(|a, b| match (a.end_date.is_none(), b.end_date.is_none()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => b.start_date.cmp(&a.start_date),
    });
    ordered.into_iter().take(limit).map(position_entry).collect()
}
