use crate::content::models::Project;
use crate::render::{escape_attr, escape_html, section_heading, with_alpha, PageContext, ProjectsVariant};
use crate::theme::Palette;

const SUBTITLE: &str = "A selection of things I've built.";

pub fn render(variant: ProjectsVariant, ctx: &PageContext<'_>) -> String {
    let projects = ordered(&ctx.content.projects);
    let palette = ctx.palette;

    let body = match (variant, projects.split_first()) {
        (_, None) => format!(
            r#"<p class="empty" style="color:{}">Projects coming soon.</p>"#,
            with_alpha(&palette.text, "99")
        ),
        (ProjectsVariant::Grid, Some(_)) => {
            let cards: String = projects.iter().map(|p| card(p, palette)).collect();
            format!(r#"<div class="project-grid">{cards}</div>"#)
        }
        (ProjectsVariant::Showcase, Some((spotlight, rest))) => {
            let others: String = rest.iter().map(|p| card(p, palette)).collect();
            format!(
                r#"<div class="project-spotlight" style="background:{surface};border:1px solid {border}">{spotlight}</div><div class="project-grid">{others}</div>"#,
                surface = palette.surface,
                border = palette.border,
                spotlight = card(spotlight, palette),
            )
        }
    };

    format!(
        r#"<section id="projects" class="projects" style="background:{background};color:{text}">{heading}{body}</section>"#,
        background = palette.background,
        text = palette.text,
        heading = section_heading(palette, "Featured", "Projects", SUBTITLE),
    )
}

/// Featured projects first, otherwise in document order.
pub fn ordered(projects: &[Project]) -> Vec<&Project> {
    projects
        .iter()
        .filter(|p| p.featured)
        .chain(projects.iter().filter(|p| !p.featured))
        .collect()
}

fn card(project: &Project, palette: &Palette) -> String {
    let title = escape_html(&project.title);
    let image = project
        .image
        .as_deref()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{}">"#,
                escape_attr(src),
                escape_attr(&project.title)
            )
        })
        .unwrap_or_default();
    let badge = if project.featured {
        format!(
            r#"<span class="featured-badge" style="background:{};color:{}">Featured</span>"#,
            palette.accent, palette.background
        )
    } else {
        String::new()
    };
    let technologies: String = project
        .technologies
        .iter()
        .map(|t| {
            format!(
                r#"<li style="background:{};color:{}">{}</li>"#,
                with_alpha(&palette.primary, "15"),
                palette.primary,
                escape_html(t)
            )
        })
        .collect();
    let links: String = [
        (project.demo_url.as_deref(), "Live Demo"),
        (project.source_url.as_deref(), "Source Code"),
    ]
    .into_iter()
    .filter_map(|(url, label)| {
        url.map(|u| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" style="color:{}">{label}</a>"#,
                escape_attr(u),
                palette.secondary
            )
        })
    })
    .collect();

    format!(
        r#"<article class="project-card" style="border-color:{border}">{image}{badge}<h3>{title}</h3><p>{description}</p><ul class="technologies">{technologies}</ul><div class="project-links">{links}</div></article>"#,
        border = palette.border,
        description = escape_html(&project.description),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::*;

    fn project(title: &str, featured: bool) -> Project {
        Project {
            title: title.to_string(),
            description: String::new(),
            image: None,
            technologies: vec![],
            demo_url: None,
            source_url: None,
            featured,
        }
    }

    #[test]
    fn test_featured_projects_come_first() {
        let projects = vec![project("a", false), project("b", true), project("c", false), project("d", true)];
        let titles: Vec<&str> = ordered(&projects).iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_grid_renders_featured_before_others() {
        let content = builtin();
        let palette = Palette::light();
        let html = render(ProjectsVariant::Grid, &ctx(&content, &palette));
        assert!(html.find("Storefront").unwrap() < html.find("Task Board").unwrap());
        assert_eq!(html.matches("Featured</span>").count(), 1);
    }

    #[test]
    fn test_showcase_spotlights_first_project() {
        let content = builtin();
        let palette = Palette::light();
        let html = render(ProjectsVariant::Showcase, &ctx(&content, &palette));
        let spotlight = html.find("project-spotlight").unwrap();
        assert!(spotlight < html.find("Storefront").unwrap());
        assert!(html.find("Storefront").unwrap() < html.find("Task Board").unwrap());
    }

    #[test]
    fn test_links_only_when_urls_present() {
        let mut p = project("x", false);
        p.source_url = Some("https://github.com/x".to_string());
        let html = card(&p, &Palette::light());
        assert!(html.contains("Source Code"));
        assert!(!html.contains("Live Demo"));
    }

    #[test]
    fn test_no_projects_placeholder() {
        let content = empty();
        let palette = Palette::light();
        let html = render(ProjectsVariant::Showcase, &ctx(&content, &palette));
        assert!(html.contains("Projects coming soon."));
    }
}
