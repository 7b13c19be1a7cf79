//! Portfolio catalogue: profile, projects, skills and certificates.
//!
//! The catalogue is authored in `content/portfolio.json` and embedded into the
//! binary, so the page never fetches it at runtime.

use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{PortfolioError, Result};

const EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub github: String,
    pub linkedin: String,
    pub email: String,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub live_link: String,
    pub github: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Skill(pub String);

impl Skill {
    pub fn label(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub certificates: Vec<Certificate>,
}

impl Portfolio {
    /// Parses and validates the catalogue compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let portfolio: Self = serde_json::from_str(raw)?;
        portfolio.validate()?;
        debug!(
            projects = portfolio.projects.len(),
            skills = portfolio.skills.len(),
            certificates = portfolio.certificates.len(),
            "portfolio content loaded"
        );
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<()> {
        let profile = &self.profile;
        require_text("profile.name", &profile.name)?;
        require_text("profile.headline", &profile.headline)?;
        require_text("profile.tagline", &profile.tagline)?;
        require_web_link("profile.github", &profile.github)?;
        require_web_link("profile.linkedin", &profile.linkedin)?;
        require_email(&profile.email)?;

        for (index, project) in self.projects.iter().enumerate() {
            let field = |name: &str| format!("projects[{index}].{name}");
            require_text(&field("title"), &project.title)?;
            require_text(&field("description"), &project.description)?;
            require_web_link(&field("image"), &project.image)?;
            require_web_link(&field("liveLink"), &project.live_link)?;
            require_web_link(&field("github"), &project.github)?;
        }

        for (index, skill) in self.skills.iter().enumerate() {
            require_text(&format!("skills[{index}]"), skill.label())?;
        }

        for (index, certificate) in self.certificates.iter().enumerate() {
            let field = |name: &str| format!("certificates[{index}].{name}");
            require_text(&field("name"), &certificate.name)?;
            require_text(&field("issuer"), &certificate.issuer)?;
            require_text(&field("date"), &certificate.date)?;
            require_web_link(&field("link"), &certificate.link)?;
        }

        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PortfolioError::empty_field(field));
    }
    Ok(())
}

fn require_web_link(field: &str, value: &str) -> Result<()> {
    require_text(field, value)?;
    let parsed = Url::parse(value).map_err(|source| PortfolioError::InvalidLink {
        field: field.to_string(),
        value: value.to_string(),
        source,
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(PortfolioError::UnsupportedScheme {
            field: field.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}

fn require_email(value: &str) -> Result<()> {
    require_text("profile.email", value)?;
    let invalid = || PortfolioError::InvalidEmail(value.to_string());

    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') || !domain.contains('.') {
        return Err(invalid());
    }
    if value.chars().any(|c| c.is_whitespace() || c == '?' || c == '&') {
        return Err(invalid());
    }

    Url::parse(&format!("mailto:{value}")).map_err(|_| invalid())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::from_str(EMBEDDED_CONTENT).expect("embedded content is JSON")
    }

    fn parse(value: serde_json::Value) -> Result<Portfolio> {
        Portfolio::from_json(&value.to_string())
    }

    #[test]
    fn embedded_content_is_valid_and_ordered() {
        let portfolio = Portfolio::embedded().expect("embedded content validates");

        assert_eq!(portfolio.projects.len(), 3);
        assert_eq!(portfolio.skills.len(), 12);
        assert_eq!(portfolio.certificates.len(), 3);

        assert_eq!(portfolio.projects[0].title, "E-Commerce Platform");
        assert_eq!(portfolio.projects[2].title, "Portfolio Website");
        assert_eq!(portfolio.skills.first().map(Skill::label), Some("React"));
        assert_eq!(portfolio.skills.last().map(Skill::label), Some("Kubernetes"));
        assert_eq!(portfolio.certificates[1].issuer, "Meta");
        assert_eq!(portfolio.profile.mailto(), "mailto:contact@snehagoyal.dev");
    }

    #[test]
    fn camel_case_keys_map_to_fields() {
        let portfolio = Portfolio::embedded().expect("embedded content validates");
        assert_eq!(
            portfolio.projects[1].live_link,
            "https://chat.snehagoyal.dev"
        );
    }

    #[test]
    fn empty_project_title_is_rejected() {
        let mut value = sample_json();
        value["projects"][1]["title"] = "   ".into();

        match parse(value) {
            Err(PortfolioError::EmptyField { field }) => assert_eq!(field, "projects[1].title"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_skill_is_rejected() {
        let mut value = sample_json();
        value["skills"][4] = "".into();

        match parse(value) {
            Err(PortfolioError::EmptyField { field }) => assert_eq!(field, "skills[4]"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn relative_certificate_link_is_rejected() {
        let mut value = sample_json();
        value["certificates"][0]["link"] = "/badges/aws".into();

        match parse(value) {
            Err(PortfolioError::InvalidLink { field, value, .. }) => {
                assert_eq!(field, "certificates[0].link");
                assert_eq!(value, "/badges/aws");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn non_web_scheme_is_rejected() {
        let mut value = sample_json();
        value["projects"][0]["github"] = "javascript:alert(1)".into();

        match parse(value) {
            Err(PortfolioError::UnsupportedScheme { field, scheme }) => {
                assert_eq!(field, "projects[0].github");
                assert_eq!(scheme, "javascript");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["contact", "@snehagoyal.dev", "contact@", "a@b@c.dev", "me@localhost", "me@x.dev?cc=x"] {
            let mut value = sample_json();
            value["profile"]["email"] = email.into();
            assert!(
                matches!(parse(value), Err(PortfolioError::InvalidEmail(_))),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn missing_section_is_a_format_error() {
        let mut value = sample_json();
        value
            .as_object_mut()
            .expect("top-level object")
            .remove("certificates");

        assert!(matches!(parse(value), Err(PortfolioError::ContentFormat(_))));
    }
}
