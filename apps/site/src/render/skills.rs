use crate::content::models::{Skill, SkillCategory};
use crate::render::{escape_html, section_heading, with_alpha, PageContext, SkillsVariant};
use crate::theme::Palette;

/// Skills at or above this level are highlighted in the badge layout.
pub const HIGH_LEVEL_THRESHOLD: u8 = 85;

const SUBTITLE: &str = "Technologies and tools I work with.";

pub fn render(variant: SkillsVariant, ctx: &PageContext<'_>) -> String {
    let categories = &ctx.content.skills.categories;
    let body = if categories.is_empty() {
        format!(
            r#"<p class="empty" style="color:{}">Skills coming soon.</p>"#,
            with_alpha(&ctx.palette.text, "99")
        )
    } else {
        match variant {
            SkillsVariant::Bars => categories.iter().map(|c| bars(c, ctx.palette)).collect(),
            SkillsVariant::Badges => categories.iter().map(|c| badges(c, ctx.palette)).collect(),
        }
    };

    format!(
        r#"<section id="skills" class="skills skills-{kind}" style="background:{background};color:{text}">{heading}<div class="skill-grid">{body}</div></section>"#,
        kind = match variant {
            SkillsVariant::Bars => "bars",
            SkillsVariant::Badges => "badges",
        },
        background = ctx.palette.background,
        text = ctx.palette.text,
        heading = section_heading(ctx.palette, "My", "Skills", SUBTITLE),
    )
}

/// Skills of a category, highest level first. Equal levels keep document order.
pub fn by_level(category: &SkillCategory) -> Vec<&Skill> {
    let mut skills: Vec<&Skill> = category.items.iter().collect();
    skills.sort_by(|a, b| b.level.cmp(&a.level));
    skills
}

fn bars(category: &SkillCategory, palette: &Palette) -> String {
    let items: String = by_level(category)
        .into_iter()
        .map(|skill| {
            let level = skill.level.min(100);
            format!(
                r#"<li><div class="skill-label"><span>{name}</span><span>{level}%</span></div><div class="bar" style="background:{track}"><div class="bar-fill" style="width:{level}%;background:linear-gradient(to right, {primary}, {secondary})"></div></div></li>"#,
                name = escape_html(&skill.name),
                track = with_alpha(&palette.primary, "20"),
                primary = palette.primary,
                secondary = palette.secondary,
            )
        })
        .collect();
    format!(
        r#"<div class="skill-card" style="background:{surface};border:1px solid {border}"><h3 style="color:{primary}">{name}</h3><ul>{items}</ul></div>"#,
        surface = palette.surface,
        border = palette.border,
        primary = palette.primary,
        name = escape_html(&category.name),
    )
}

fn badges(category: &SkillCategory, palette: &Palette) -> String {
    let initial = category
        .name
        .chars()
        .next()
        .map(|c| escape_html(&c.to_string()))
        .unwrap_or_default();
    let items: String = by_level(category)
        .into_iter()
        .map(|skill| {
            let high = skill.level >= HIGH_LEVEL_THRESHOLD;
            let (background, color) = if high {
                (palette.primary.clone(), palette.background.clone())
            } else {
                (with_alpha(&palette.primary, "15"), palette.text.clone())
            };
            format!(
                r#"<li class="skill-badge{high_class}" style="background:{background};color:{color}">{}</li>"#,
                escape_html(&skill.name),
                high_class = if high { " high" } else { "" },
            )
        })
        .collect();
    format!(
        r#"<div class="skill-card"><div class="skill-card-head"><span class="initial" style="background:{accent};color:{background}">{initial}</span><h3>{name}</h3></div><ul class="badges">{items}</ul></div>"#,
        accent = palette.accent,
        background = palette.background,
        name = escape_html(&category.name),
    )
}
