//! Section renderers: pure functions of (content document, palette) to HTML.
//!
//! Each section has interchangeable variants; `LayoutConfig` picks one per
//! section. Renderers share no state; everything they need arrives through
//! `PageContext`.

use std::str::FromStr;

use thiserror::Error;

use crate::content::ContentDocument;
use crate::theme::Palette;

pub mod about;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod shell;
pub mod skills;

/// Everything a section renderer reads.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub content: &'a ContentDocument,
    pub palette: &'a Palette,
    pub is_dark: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown {section} variant '{value}'")]
pub struct UnknownVariant {
    pub section: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeroVariant {
    Centered,
    #[default]
    Split,
    Background,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AboutVariant {
    #[default]
    Standard,
    Alternative,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkillsVariant {
    #[default]
    Bars,
    Badges,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectsVariant {
    #[default]
    Grid,
    Showcase,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactVariant {
    #[default]
    Standard,
    Alternative,
}

impl FromStr for HeroVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "centered" => Ok(Self::Centered),
            "split" => Ok(Self::Split),
            "background" => Ok(Self::Background),
            _ => Err(unknown("hero", s)),
        }
    }
}

impl FromStr for AboutVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "alternative" => Ok(Self::Alternative),
            _ => Err(unknown("about", s)),
        }
    }
}

impl FromStr for SkillsVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bars" => Ok(Self::Bars),
            "badges" => Ok(Self::Badges),
            _ => Err(unknown("skills", s)),
        }
    }
}

impl FromStr for ProjectsVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "showcase" => Ok(Self::Showcase),
            _ => Err(unknown("projects", s)),
        }
    }
}

impl FromStr for ContactVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "alternative" => Ok(Self::Alternative),
            _ => Err(unknown("contact", s)),
        }
    }
}

fn unknown(section: &'static str, value: &str) -> UnknownVariant {
    UnknownVariant {
        section,
        value: value.to_string(),
    }
}

/// Which variant each section renders with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutConfig {
    pub hero: HeroVariant,
    pub about: AboutVariant,
    pub skills: SkillsVariant,
    pub projects: ProjectsVariant,
    pub contact: ContactVariant,
}

/// Renders every section, in page order.
pub fn render_sections(ctx: &PageContext<'_>, layout: &LayoutConfig) -> String {
    [
        hero::render(layout.hero, ctx),
        about::render(layout.about, ctx),
        skills::render(layout.skills, ctx),
        projects::render(layout.projects, ctx),
        contact::render(layout.contact, ctx),
    ]
    .join("\n")
}

/// Escapes text for HTML element content.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Escapes a value placed inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

/// Appends a two-digit hex alpha to a `#RRGGBB` colour; other colour
/// syntaxes are returned unchanged.
pub fn with_alpha(color: &str, alpha: &str) -> String {
    if color.len() == 7 && color.starts_with('#') {
        format!("{color}{alpha}")
    } else {
        color.to_string()
    }
}

/// Standard section heading: accent bar, title with a highlighted word.
pub(crate) fn section_heading(palette: &Palette, lead: &str, highlight: &str, subtitle: &str) -> String {
    let mut html = format!(
        r#"<header class="section-header"><div class="accent-bar" style="background-color:{accent}"></div><h2>{lead} <span style="color:{primary}">{highlight}</span></h2>"#,
        accent = palette.accent,
        primary = palette.primary,
        lead = escape_html(lead),
        highlight = escape_html(highlight),
    );
    if !subtitle.is_empty() {
        html.push_str(&format!(
            r#"<p class="subtitle" style="color:{}">{}</p>"#,
            with_alpha(&palette.text, "cc"),
            escape_html(subtitle)
        ));
    }
    html.push_str("</header>");
    html
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::content::{parse_content, ContentDocument, BUILTIN_CONTENT};
    use crate::theme::Palette;

    use super::PageContext;

    pub fn builtin() -> ContentDocument {
        parse_content(BUILTIN_CONTENT).unwrap()
    }

    pub fn empty() -> ContentDocument {
        parse_content("{}").unwrap()
    }

    pub fn ctx<'a>(content: &'a ContentDocument, palette: &'a Palette) -> PageContext<'a> {
        PageContext {
            content,
            palette,
            is_dark: false,
        }
    }
}
