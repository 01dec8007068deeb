//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (port nonzero, degree years ordered)
//! - Check URL fields are absolute URLs
//! - Detect duplicate skill categories
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PortfolioConfig → Result<(), Vec<ValidationError>>
//! - Runs once at load time; render paths assume a valid profile

use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use crate::config::schema::PortfolioConfig;

/// One semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("identity.email {value:?} is not an email address")]
    InvalidEmail { value: String },

    #[error("{field} {value:?} is not a hex color token")]
    InvalidColor { field: &'static str, value: String },

    #[error("{field} {value:?} is not a valid absolute URL")]
    InvalidUrl { field: String, value: String },

    #[error("duplicate skill category {name:?}")]
    DuplicateSkillCategory { name: String },

    #[error("publication {title:?} has implausible year {year}")]
    InvalidYear { title: String, year: i32 },

    #[error("{field} {value:?} is not a YYYY-MM period")]
    InvalidPeriod { field: String, value: String },

    #[error("degree {degree:?} ends ({end_year}) before it starts ({start_year})")]
    DegreeYearOrder {
        degree: String,
        start_year: i32,
        end_year: i32,
    },

    #[error("server.port must be in 1..=65535, got {port}")]
    PortOutOfRange { port: u16 },
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &PortfolioConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_identity(config, &mut errors);
    check_theme(config, &mut errors);
    check_links(config, &mut errors);
    check_skills(config, &mut errors);
    check_projects(config, &mut errors);
    check_publications(config, &mut errors);
    check_experience(config, &mut errors);
    check_education(config, &mut errors);
    check_server(config, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_identity(config: &PortfolioConfig, errors: &mut Vec<ValidationError>) {
    if config.identity.name.trim().is_empty() {
        errors.push(ValidationError::EmptyField {
            field: "identity.name",
        });
    }
    if config.identity.title.trim().is_empty() {
        errors.push(ValidationError::EmptyField {
            field: "identity.title",
        });
    }
    if !config.identity.email.contains('@') {
        errors.push(ValidationError::InvalidEmail {
            value: config.identity.email.clone(),
        });
    }
}

fn check_theme(config: &PortfolioConfig, errors: &mut Vec<ValidationError>) {
    check_color("theme.primary_color", &config.theme.primary_color, errors);
    check_color(
        "theme.secondary_color",
        &config.theme.secondary_color,
        errors,
    );
}

fn check_links(config: &PortfolioConfig, errors: &mut Vec<ValidationError>) {
    let links = &config.links;
    check_opt_url("links.github", links.github.as_deref(), errors);
    check_opt_url("links.linkedin", links.linkedin.as_deref(), errors);
    check_opt_url("links.twitter", links.twitter.as_deref(), errors);
    check_opt_url("links.kaggle", links.kaggle.as_deref(), errors);
    check_opt_url(
        "links.google_scholar",
        links.google_scholar.as_deref(),
        errors,
    );
}

fn check_skills(config: &PortfolioConfig, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for category in &config.skills {
        if !seen.insert(category.name.as_str()) {
            errors.push(ValidationError::DuplicateSkillCategory {
                name: category.name.clone(),
            });
        }
    }
}

fn check_projects(config: &PortfolioConfig, errors: &mut Vec<ValidationError>) {
    for project in &config.projects {
        let field = |suffix: &str| format!("projects[{:?}].{}", project.title, suffix);
        check_opt_url(&field("github_url"), project.github_url.as_deref(), errors);
        check_opt_url(&field("demo_url"), project.demo_url.as_deref(), errors);
        check_opt_url(&field("paper_url"), project.paper_url.as_deref(), errors);
    }
}

fn check_publications(config: &PortfolioConfig, errors: &mut Vec<ValidationError>) {
    for publication in &config.publications {
        if publication.year < 1 {
            errors.push(ValidationError::InvalidYear {
                title: publication.title.clone(),
                year: publication.year,
            });
        }
        check_opt_url(
            &format!("publications[{:?}].url", publication.title),
            Some(&publication.url),
            errors,
        );
    }
}

fn check_experience(config: &PortfolioConfig, errors: &mut Vec<ValidationError>) {
    for position in &config.experience {
        let field = |suffix: &str| format!("experience[{:?}].{}", position.title, suffix);
        if !is_year_month(&position.start_date) {
            errors.push(ValidationError::InvalidPeriod {
                field: field("start_date"),
                value: position.start_date.clone(),
            });
        }
        if let Some(end) = &position.end_date {
            if !is_year_month(end) {
                errors.push(ValidationError::InvalidPeriod {
                    field: field("end_date"),
                    value: end.clone(),
                });
            }
        }
    }
}

fn check_education(config: &PortfolioConfig, errors: &mut Vec<ValidationError>) {
    for degree in &config.education {
        if degree.end_year < degree.start_year {
            errors.push(ValidationError::DegreeYearOrder {
                degree: degree.degree.clone(),
                start_year: degree.start_year,
                end_year: degree.end_year,
            });
        }
    }
}

fn check_server(config: &PortfolioConfig, errors: &mut Vec<ValidationError>) {
    if config.server.host.trim().is_empty() {
        errors.push(ValidationError::EmptyField {
            field: "server.host",
        });
    }
    // u16 already caps the upper bound at 65535.
    if config.server.port == 0 {
        errors.push(ValidationError::PortOutOfRange { port: 0 });
    }
}

fn check_color(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    let hex = match value.strip_prefix('#') {
        Some(hex) => hex,
        None => {
            errors.push(ValidationError::InvalidColor {
                field,
                value: value.to_string(),
            });
            return;
        }
    };
    let valid = matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        errors.push(ValidationError::InvalidColor {
            field,
            value: value.to_string(),
        });
    }
}

fn check_opt_url(field: &str, value: Option<&str>, errors: &mut Vec<ValidationError>) {
    if let Some(value) = value {
        if Url::parse(value).is_err() {
            errors.push(ValidationError::InvalidUrl {
                field: field.to_string(),
                value: value.to_string(),
            });
        }
    }
}

fn is_year_month(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return false;
    }
    if !value[..4].chars().all(|c| c.is_ascii_digit())
        || !value[5..].chars().all(|c| c.is_ascii_digit())
    {
        return false;
    }
    matches!(value[5..].parse::<u8>(), Ok(1..=12))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{Degree, SkillCategory};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&PortfolioConfig::default()).is_ok());
    }

    #[test]
    fn test_duplicate_skill_category() {
        let mut config = PortfolioConfig::default();
        config.skills.push(SkillCategory {
            name: "Languages".to_string(),
            items: vec!["Rust".to_string()],
        });
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::DuplicateSkillCategory {
            name: "Languages".to_string()
        }));
    }

    #[test]
    fn test_degree_year_order() {
        let mut config = PortfolioConfig::default();
        config.education.push(Degree {
            degree: "B.S.".to_string(),
            institution: "Somewhere".to_string(),
            location: "Nowhere".to_string(),
            start_year: 2020,
            end_year: 2018,
            description: String::new(),
        });
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::DegreeYearOrder { start_year: 2020, end_year: 2018, .. }
        ));
    }

    #[test]
    fn test_port_zero_rejected() {
        let mut config = PortfolioConfig::default();
        config.server.port = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::PortOutOfRange { port: 0 }]);
    }

    #[test]
    fn test_bad_url_rejected() {
        let mut config = PortfolioConfig::default();
        config.links.twitter = Some("not-a-url".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidUrl { .. }));
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut config = PortfolioConfig::default();
        config.identity.email = "jane.doe.example.com".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidEmail { .. }));
    }

    #[test]
    fn test_bad_color_rejected() {
        let mut config = PortfolioConfig::default();
        config.theme.primary_color = "blue".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidColor { .. }));
    }

    #[test]
    fn test_all_errors_reported() {
        let mut config = PortfolioConfig::default();
        config.identity.email = "nope".to_string();
        config.server.port = 0;
        config.theme.secondary_color = "#12345".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_period_format() {
        assert!(is_year_month("2021-01"));
        assert!(is_year_month("1999-12"));
        assert!(!is_year_month("2021-13"));
        assert!(!is_year_month("2021-00"));
        assert!(!is_year_month("2021"));
        assert!(!is_year_month("01-2021"));
    }

    #[test]
    fn test_bad_period_rejected() {
        let mut config = PortfolioConfig::default();
        config.experience[0].start_date = "January 2021".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidPeriod { .. }));
    }
}
