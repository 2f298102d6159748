use crate::content::models::{About, Education, Milestone};
use crate::render::{escape_attr, escape_html, section_heading, with_alpha, AboutVariant, PageContext};
use crate::theme::Palette;

const DEFAULT_SUMMARY: &str = "A brief introduction about myself and my journey.";
const DEFAULT_EXPERIENCE: &str = "6+";
const DEFAULT_PROJECTS: &str = "25+";
const DEFAULT_BIO: [&str; 2] = [
    "I'm a passionate developer with a strong focus on creating intuitive and engaging user experiences.",
    "With a background in both design and development, I bring a unique perspective to every project, ensuring that both aesthetics and functionality are given equal importance.",
];
const DEFAULT_STRENGTHS: [&str; 6] = [
    "Problem Solving",
    "Technical Leadership",
    "User-Centered Design",
    "System Architecture",
    "Agile Methodologies",
    "Performance Optimization",
];
const DEFAULT_INTERESTS: &str = "When not coding, I enjoy hiking, reading science fiction, and exploring new technologies through side projects. I'm also an active contributor to open source and regularly attend local tech meetups.";

fn default_journey() -> Vec<Milestone> {
    [
        ("2023", "Senior Full Stack Developer", "Tech Innovations Inc."),
        ("2021", "Frontend Lead", "Digital Solutions"),
        ("2019", "Web Developer", "Creative Web Agency"),
        ("2017", "Junior Developer", "Startup Studio"),
    ]
    .into_iter()
    .map(|(year, title, company)| Milestone {
        year: year.to_string(),
        title: title.to_string(),
        company: company.to_string(),
    })
    .collect()
}

fn default_education() -> Vec<Education> {
    [
        ("Master of Computer Science", "University of Technology", "2016-2018"),
        ("Bachelor of Software Engineering", "State University", "2012-2016"),
    ]
    .into_iter()
    .map(|(title, institution, year)| Education {
        title: title.to_string(),
        institution: institution.to_string(),
        year: year.to_string(),
    })
    .collect()
}

/// The about section with every placeholder applied.
struct ResolvedAbout {
    summary: String,
    bio: Vec<String>,
    experience: String,
    projects: String,
    strengths: Vec<String>,
    journey: Vec<Milestone>,
    education: Vec<Education>,
    interests: String,
    resume_url: Option<String>,
}

impl ResolvedAbout {
    fn from(about: &About) -> Self {
        Self {
            summary: about.summary.clone().unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
            bio: about
                .bio
                .as_ref()
                .map(|b| b.paragraphs().into_iter().map(str::to_string).collect())
                .unwrap_or_else(|| DEFAULT_BIO.iter().map(|p| p.to_string()).collect()),
            experience: about
                .experience
                .clone()
                .unwrap_or_else(|| DEFAULT_EXPERIENCE.to_string()),
            projects: about
                .projects
                .clone()
                .unwrap_or_else(|| DEFAULT_PROJECTS.to_string()),
            strengths: about
                .strengths
                .clone()
                .unwrap_or_else(|| DEFAULT_STRENGTHS.iter().map(|s| s.to_string()).collect()),
            journey: about.journey.clone().unwrap_or_else(default_journey),
            education: about.education.clone().unwrap_or_else(default_education),
            interests: about
                .interests
                .clone()
                .unwrap_or_else(|| DEFAULT_INTERESTS.to_string()),
            resume_url: about.resume_url.clone(),
        }
    }
}

pub fn render(variant: AboutVariant, ctx: &PageContext<'_>) -> String {
    let about = ResolvedAbout::from(&ctx.content.about);
    match variant {
        AboutVariant::Standard => standard(&about, ctx.palette),
        AboutVariant::Alternative => alternative(&about, ctx.palette),
    }
}

/// The most recent milestone is highlighted.
fn journey(about: &ResolvedAbout, palette: &Palette) -> String {
    let items: String = about
        .journey
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let (year_color, title_color) = if i == 0 {
                (palette.primary.clone(), palette.secondary.clone())
            } else {
                (with_alpha(&palette.text, "cc"), palette.text.clone())
            };
            format!(
                r#"<li class="milestone{current}"><span class="year" style="color:{year_color}">{year}</span><h4 style="color:{title_color}">{title}</h4><p class="company">{company}</p></li>"#,
                current = if i == 0 { " current" } else { "" },
                year = escape_html(&m.year),
                title = escape_html(&m.title),
                company = escape_html(&m.company),
            )
        })
        .collect();
    format!(
        r#"<ol class="journey" style="border-color:{}">{items}</ol>"#,
        with_alpha(&palette.primary, "40")
    )
}

fn stats(about: &ResolvedAbout, palette: &Palette) -> String {
    format!(
        r#"<div class="stats"><div class="stat"><h3 style="color:{primary}">Experience</h3><p class="stat-value">{experience}</p><p>Years</p></div><div class="stat"><h3 style="color:{secondary}">Projects</h3><p class="stat-value">{projects}</p><p>Completed</p></div></div>"#,
        primary = palette.primary,
        secondary = palette.secondary,
        experience = escape_html(&about.experience),
        projects = escape_html(&about.projects),
    )
}

fn bio(about: &ResolvedAbout, palette: &Palette) -> String {
    let color = with_alpha(&palette.text, "cc");
    about
        .bio
        .iter()
        .map(|p| format!(r#"<p style="color:{color}">{}</p>"#, escape_html(p)))
        .collect()
}

fn education(about: &ResolvedAbout) -> String {
    let items: String = about
        .education
        .iter()
        .map(|e| {
            format!(
                r#"<li><h4>{}</h4><p>{} • {}</p></li>"#,
                escape_html(&e.title),
                escape_html(&e.institution),
                escape_html(&e.year)
            )
        })
        .collect();
    format!(r#"<ul class="education">{items}</ul>"#)
}

fn strengths(about: &ResolvedAbout, palette: &Palette) -> String {
    let items: String = about
        .strengths
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                r#"<li><span class="badge" style="color:{}">{}</span>{}</li>"#,
                palette.accent,
                i + 1,
                escape_html(s)
            )
        })
        .collect();
    format!(r#"<ul class="strengths">{items}</ul>"#)
}

fn resume_link(about: &ResolvedAbout, palette: &Palette) -> String {
    about
        .resume_url
        .as_deref()
        .map(|url| {
            format!(
                r#"<a class="resume-link" href="{}" style="color:{}">View Résumé</a>"#,
                escape_attr(url),
                palette.primary
            )
        })
        .unwrap_or_default()
}

fn standard(about: &ResolvedAbout, palette: &Palette) -> String {
    format!(
        r#"<section id="about" class="about about-standard" style="background:{background};color:{text}">{heading}<div class="grid-2"><div><h3 style="color:{primary}">Career Journey</h3>{journey}{stats}</div><div><h3 style="color:{primary}">My Story</h3>{bio}<h3 style="color:{secondary}">Education &amp; Certifications</h3>{education}<h3 style="color:{accent}">Core Strengths</h3>{strengths}<h3 style="color:{accent}">Beyond Work</h3><p>{interests}</p>{resume}</div></div></section>"#,
        background = palette.background,
        text = palette.text,
        primary = palette.primary,
        secondary = palette.secondary,
        accent = palette.accent,
        heading = section_heading(palette, "About", "Me", &about.summary),
        journey = journey(about, palette),
        stats = stats(about, palette),
        bio = bio(about, palette),
        education = education(about),
        strengths = strengths(about, palette),
        interests = escape_html(&about.interests),
        resume = resume_link(about, palette),
    )
}

/// Tabbed layout; the story tab starts open.
fn alternative(about: &ResolvedAbout, palette: &Palette) -> String {
    format!(
        r#"<section id="about" class="about about-alternative" style="background:{surface};color:{text}">{heading}{stats}<div class="tabs"><details open><summary style="color:{primary}">My Story</summary>{bio}{strengths}</details><details><summary style="color:{primary}">Professional Journey</summary>{journey}</details><details><summary style="color:{primary}">Education</summary>{education}</details></div><p class="interests" style="border-color:{border}">{interests}</p>{resume}</section>"#,
        surface = palette.surface,
        text = palette.text,
        primary = palette.primary,
        border = palette.border,
        heading = section_heading(palette, "About", "Me", &about.summary),
        stats = stats(about, palette),
        bio = bio(about, palette),
        strengths = strengths(about, palette),
        journey = journey(about, palette),
        education = education(about),
        interests = escape_html(&about.interests),
        resume = resume_link(about, palette),
    )
}
