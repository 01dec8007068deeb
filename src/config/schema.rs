//! Configuration schema definitions.
//!
//! This module defines the complete content model for the portfolio site.
//! All types derive Serde traits for deserialization from settings files,
//! and every struct carries compiled-in defaults so a partial settings file
//! only has to name the fields it changes.

use serde::{Deserialize, Serialize};

/// Root configuration: the full profile driving every page.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Who the developer is (name, title, contact, bio).
    pub identity: IdentityConfig,

    /// External profile links (GitHub, LinkedIn, ...).
    pub links: LinksConfig,

    /// Color tokens and dark-mode default.
    pub theme: ThemeConfig,

    /// Skill categories in presentation order.
    pub skills: Vec<SkillCategory>,

    /// Projects in presentation order.
    pub projects: Vec<Project>,

    /// Publications in presentation order.
    pub publications: Vec<Publication>,

    /// Work experience in presentation order.
    pub experience: Vec<Position>,

    /// Education in presentation order.
    pub education: Vec<Degree>,

    /// HTTP server settings.
    pub server: ServerConfig,
}

/// Developer identity.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct IdentityConfig {
    /// Display name.
    pub name: String,

    /// Professional title.
    pub title: String,

    /// Contact email (must contain "@").
    pub email: String,

    /// Location string, free-form.
    pub location: String,

    /// Short biography shown in the hero and about sections.
    pub bio: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            name: "Jane Doe".to_string(),
            title: "Machine Learning Engineer".to_string(),
            email: "jane.doe@example.com".to_string(),
            location: "San Francisco, CA".to_string(),
            bio: "Experienced Machine Learning Engineer specializing in computer vision \
                  and NLP with a track record of deploying models to production."
                .to_string(),
        }
    }
}

/// External profile links. Absent values are simply not rendered.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LinksConfig {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub kaggle: Option<String>,
    pub google_scholar: Option<String>,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            github: Some("https://github.com/janedoe".to_string()),
            linkedin: Some("https://linkedin.com/in/janedoe".to_string()),
            twitter: None,
            kaggle: Some("https://kaggle.com/janedoe".to_string()),
            google_scholar: None,
        }
    }
}

/// Theme tokens consumed by the base template.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Primary color as a hex token (e.g., "#4F46E5").
    pub primary_color: String,

    /// Secondary color as a hex token.
    pub secondary_color: String,

    /// Whether dark mode is the default.
    pub dark_mode: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_color: "#4F46E5".to_string(),
            secondary_color: "#818CF8".to_string(),
            dark_mode: true,
        }
    }
}

/// One named group of skills. Category names must be unique.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SkillCategory {
    /// Category name (e.g., "Languages").
    pub name: String,

    /// Skill names in presentation order.
    pub items: Vec<String>,
}

/// One portfolio project.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,

    /// Technology names in presentation order.
    pub technologies: Vec<String>,

    /// Image file name under the static asset directory.
    pub image: String,

    /// Source repository URL, if public.
    #[serde(default)]
    pub github_url: Option<String>,

    /// Live demo URL, if deployed.
    #[serde(default)]
    pub demo_url: Option<String>,

    /// Accompanying paper URL, if published.
    #[serde(default)]
    pub paper_url: Option<String>,
}

/// One academic publication.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Publication {
    pub title: String,
    pub authors: String,

    /// Conference or journal name.
    pub venue: String,

    pub year: i32,
    pub url: String,
}

/// One work position. A missing end date means the position is current.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Position {
    pub title: String,
    pub company: String,
    pub location: String,

    /// Start of the period, "YYYY-MM".
    pub start_date: String,

    /// End of the period, "YYYY-MM"; None for current positions.
    #[serde(default)]
    pub end_date: Option<String>,

    pub description: String,
}

/// One degree.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Degree {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub start_year: i32,
    pub end_year: i32,
    pub description: String,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,

    /// Bind port. Must be in 1..=65535; 0 is rejected by validation.
    pub port: u16,

    /// Debug mode: lowers the default log filter to debug.
    pub debug: bool,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Directory served under /static.
    pub asset_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            debug: false,
            request_timeout_secs: 30,
            asset_dir: "static".to_string(),
        }
    }
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            identity: IdentityConfig::default(),
            links: LinksConfig::default(),
            theme: ThemeConfig::default(),
            skills: default_skills(),
            projects: default_projects(),
            publications: default_publications(),
            experience: default_experience(),
            education: default_education(),
            server: ServerConfig::default(),
        }
    }
}

fn default_skills() -> Vec<SkillCategory> {
    fn cat(name: &str, items: &[&str]) -> SkillCategory {
        SkillCategory {
            name: name.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    vec![
        cat(
            "Machine Learning",
            &[
                "Supervised Learning",
                "Unsupervised Learning",
                "Reinforcement Learning",
                "Deep Learning",
                "MLOps",
            ],
        ),
        cat(
            "Frameworks & Libraries",
            &["TensorFlow", "PyTorch", "scikit-learn", "Hugging Face", "OpenCV", "spaCy"],
        ),
        cat("Languages", &["Python", "SQL", "R", "C++"]),
        cat(
            "Tools & Platforms",
            &["Docker", "Kubernetes", "AWS", "GCP", "MLflow", "DVC", "Weights & Biases"],
        ),
        cat("Data Processing", &["Pandas", "NumPy", "PySpark", "Dask", "SQL"]),
    ]
}

fn default_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Computer Vision for Medical Imaging".to_string(),
            description: "Developed a deep learning model to detect abnormalities in \
                          X-ray images with 94% accuracy."
                .to_string(),
            technologies: vec![
                "PyTorch".to_string(),
                "TensorFlow".to_string(),
                "OpenCV".to_string(),
                "MONAI".to_string(),
            ],
            image: "medical_imaging.jpg".to_string(),
            github_url: Some("https://github.com/janedoe/medical-imaging".to_string()),
            demo_url: None,
            paper_url: Some("https://arxiv.org/abs/2203.05482".to_string()),
        },
        Project {
            title: "NLP for Customer Support Automation".to_string(),
            description: "Built an intent classification system that reduced customer \
                          support response time by 45%."
                .to_string(),
            technologies: vec![
                "BERT".to_string(),
                "Hugging Face".to_string(),
                "spaCy".to_string(),
                "FastAPI".to_string(),
            ],
            image: "nlp_customer_support.jpg".to_string(),
            github_url: Some("https://github.com/janedoe/nlp-customer-support".to_string()),
            demo_url: Some("https://demo-nlp-support.example.com".to_string()),
            paper_url: None,
        },
        Project {
            title: "Time Series Forecasting for Energy Consumption".to_string(),
            description: "Implemented a transformer-based model for predicting energy \
                          usage patterns with 30% lower error than traditional methods."
                .to_string(),
            technologies: vec![
                "PyTorch".to_string(),
                "Prophet".to_string(),
                "Pandas".to_string(),
                "Darts".to_string(),
            ],
            image: "time_series.jpg".to_string(),
            github_url: Some("https://github.com/janedoe/energy-forecasting".to_string()),
            demo_url: None,
            paper_url: None,
        },
    ]
}

fn default_publications() -> Vec<Publication> {
    vec![
        Publication {
            title: "Advances in Medical Image Classification Using Attention Mechanisms"
                .to_string(),
            authors: "Doe, J., Smith, A., Johnson, B.".to_string(),
            venue: "Conference on Computer Vision and Pattern Recognition (CVPR)".to_string(),
            year: 2022,
            url: "https://example.com/paper1".to_string(),
        },
        Publication {
            title: "Efficient Transformer Models for Resource-Constrained Environments"
                .to_string(),
            authors: "Smith, A., Doe, J., Williams, C.".to_string(),
            venue: "Neural Information Processing Systems (NeurIPS)".to_string(),
            year: 2021,
            url: "https://example.com/paper2".to_string(),
        },
    ]
}

fn default_experience() -> Vec<Position> {
    vec![
        Position {
            title: "Senior Machine Learning Engineer".to_string(),
            company: "AI Solutions Inc.".to_string(),
            location: "San Francisco, CA".to_string(),
            start_date: "2021-01".to_string(),
            end_date: None,
            description: "Leading a team of ML engineers to develop and deploy computer \
                          vision solutions for healthcare applications. Reduced model \
                          inference time by 40% and improved accuracy by 15%."
                .to_string(),
        },
        Position {
            title: "Machine Learning Engineer".to_string(),
            company: "Tech Innovations".to_string(),
            location: "Boston, MA".to_string(),
            start_date: "2018-06".to_string(),
            end_date: Some("2020-12".to_string()),
            description: "Developed NLP models for sentiment analysis and intent \
                          classification. Implemented MLOps practices that reduced \
                          deployment time from weeks to days."
                .to_string(),
        },
        Position {
            title: "Data Scientist".to_string(),
            company: "DataCorp".to_string(),
            location: "Seattle, WA".to_string(),
            start_date: "2016-08".to_string(),
            end_date: Some("2018-05".to_string()),
            description: "Built predictive models for customer churn and product \
                          recommendations. Created data pipelines that processed over \
                          1TB of data daily."
                .to_string(),
        },
    ]
}

fn default_education() -> Vec<Degree> {
    vec![
        Degree {
            degree: "Ph.D. in Computer Science".to_string(),
            institution: "Stanford University".to_string(),
            location: "Stanford, CA".to_string(),
            start_year: 2013,
            end_year: 2016,
            description: "Focused on deep learning for computer vision. Thesis: \
                          'Attention Mechanisms in Medical Image Analysis'."
                .to_string(),
        },
        Degree {
            degree: "M.S. in Machine Learning".to_string(),
            institution: "Carnegie Mellon University".to_string(),
            location: "Pittsburgh, PA".to_string(),
            start_year: 2011,
            end_year: 2013,
            description: "Specialized in statistical machine learning and natural \
                          language processing."
                .to_string(),
        },
        Degree {
            degree: "B.S. in Computer Science".to_string(),
            institution: "University of California, Berkeley".to_string(),
            location: "Berkeley, CA".to_string(),
            start_year: 2007,
            end_year: 2011,
            description: "Minor in Mathematics. Graduated with honors.".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_defaults() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8000);
        assert!(!server.debug);
    }

    #[test]
    fn test_default_profile_content() {
        let config = PortfolioConfig::default();
        assert_eq!(config.identity.name, "Jane Doe");
        assert_eq!(config.projects.len(), 3);
        assert_eq!(config.skills.len(), 5);
        assert_eq!(config.publications.len(), 2);
        assert_eq!(config.experience.len(), 3);
        assert_eq!(config.education.len(), 3);
        // Exactly one current position in the defaults.
        assert_eq!(
            config.experience.iter().filter(|p| p.end_date.is_none()).count(),
            1
        );
    }

    #[test]
    fn test_minimal_toml_fills_defaults() {
        let config: PortfolioConfig = toml::from_str("").unwrap();
        assert_eq!(config, PortfolioConfig::default());
    }
}
