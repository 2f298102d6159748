use serde::{Deserialize, Serialize};

/// The whole site's copy and data. Read once at startup and never mutated.
///
/// Every section is optional in the source JSON; renderers supply
/// placeholders for anything left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentDocument {
    pub site: SiteMeta,
    pub hero: Hero,
    pub about: About,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub contact: Option<ContactInfo>,
    pub theme: ThemeSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub name: String,
    pub title: String,
    pub tagline: Option<String>,
    pub image: Option<String>,
    pub ctas: Vec<Cta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cta {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub primary: bool,
}

/// A bio is either one paragraph or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bio {
    Text(String),
    Paragraphs(Vec<String>),
}

impl Bio {
    pub fn paragraphs(&self) -> Vec<&str> {
        match self {
            Bio::Text(text) => vec![text.as_str()],
            Bio::Paragraphs(list) => list.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub title: String,
    pub company: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub title: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct About {
    pub summary: Option<String>,
    pub bio: Option<Bio>,
    pub experience: Option<String>,
    pub projects: Option<String>,
    pub strengths: Option<Vec<String>>,
    pub journey: Option<Vec<Milestone>>,
    pub education: Option<Vec<Education>>,
    pub interests: Option<String>,
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub items: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0–100.
    #[serde(default)]
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub demo_url: Option<String>,
    pub source_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSection {
    pub colors: ColorSchemes,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSchemes {
    pub light: PaletteSpec,
    pub dark: PaletteSpec,
}

/// Palette as written in the document; any role may be left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSpec {
    pub background: Option<String>,
    pub text: Option<String>,
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub surface: Option<String>,
    pub border: Option<String>,
}
