use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::render::LayoutConfig;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_EMAIL_API_URL: &str = "https://api.resend.com";
const DEFAULT_FROM_EMAIL: &str = "Portfolio <onboarding@resend.dev>";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub email_api_key: String,
    pub email_api_url: String,
    pub contact_to_email: String,
    pub contact_from_email: String,
    /// `None` serves the document compiled into the binary.
    pub content_path: Option<PathBuf>,
    pub layout: LayoutConfig,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_base_url: optional_env("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            email_api_key: require_env("EMAIL_API_KEY")?,
            email_api_url: optional_env("EMAIL_API_URL")
                .unwrap_or_else(|| DEFAULT_EMAIL_API_URL.to_string()),
            contact_to_email: require_env("CONTACT_TO_EMAIL")?,
            contact_from_email: optional_env("CONTACT_FROM_EMAIL")
                .unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string()),
            content_path: optional_env("CONTENT_PATH").map(PathBuf::from),
            layout: layout_from_env()?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn layout_from_env() -> Result<LayoutConfig> {
    let mut layout = LayoutConfig::default();
    if let Some(v) = optional_env("HERO_VARIANT") {
        layout.hero = v.parse().context("HERO_VARIANT")?;
    }
    if let Some(v) = optional_env("ABOUT_VARIANT") {
        layout.about = v.parse().context("ABOUT_VARIANT")?;
    }
    if let Some(v) = optional_env("SKILLS_VARIANT") {
        layout.skills = v.parse().context("SKILLS_VARIANT")?;
    }
    if let Some(v) = optional_env("PROJECTS_VARIANT") {
        layout.projects = v.parse().context("PROJECTS_VARIANT")?;
    }
    if let Some(v) = optional_env("CONTACT_VARIANT") {
        layout.contact = v.parse().context("CONTACT_VARIANT")?;
    }
    Ok(layout)
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
