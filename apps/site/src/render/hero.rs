use crate::content::models::Hero;
use crate::render::{escape_attr, escape_html, with_alpha, HeroVariant, PageContext};
use crate::theme::Palette;

const PLACEHOLDER_NAME: &str = "Your Name";
const PLACEHOLDER_TITLE: &str = "Developer";

pub fn render(variant: HeroVariant, ctx: &PageContext<'_>) -> String {
    match variant {
        HeroVariant::Centered => centered(ctx),
        HeroVariant::Split => split(ctx),
        HeroVariant::Background => background(ctx),
    }
}

fn raw_name(hero: &Hero) -> &str {
    non_empty(&hero.name).unwrap_or(PLACEHOLDER_NAME)
}

fn name(hero: &Hero) -> String {
    escape_html(raw_name(hero))
}

fn title(hero: &Hero) -> String {
    escape_html(non_empty(&hero.title).unwrap_or(PLACEHOLDER_TITLE))
}

fn non_empty(s: &str) -> Option<&str> {
    Some(s).filter(|s| !s.trim().is_empty())
}

fn tagline(hero: &Hero, palette: &Palette) -> String {
    hero.tagline
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .map(|t| {
            format!(
                r#"<p class="tagline" style="color:{}">{}</p>"#,
                with_alpha(&palette.text, "cc"),
                escape_html(t)
            )
        })
        .unwrap_or_default()
}

/// Primary CTAs are filled with the accent colour; the rest are outlined in primary.
fn ctas(hero: &Hero, palette: &Palette, is_dark: bool) -> String {
    let buttons: Vec<String> = hero
        .ctas
        .iter()
        .map(|cta| {
            let color = if cta.primary { &palette.accent } else { &palette.primary };
            let (background, text) = if cta.primary {
                let text = if is_dark { &palette.background } else { &palette.text };
                (color.clone(), text.clone())
            } else if is_dark {
                (with_alpha(color, "15"), color.clone())
            } else {
                (palette.background.clone(), color.clone())
            };
            format!(
                r#"<a class="cta{primary}" href="{href}" style="background-color:{background};border:2px solid {color};color:{text}">{label}</a>"#,
                primary = if cta.primary { " cta-primary" } else { "" },
                href = escape_attr(&cta.href),
                label = escape_html(&cta.label),
            )
        })
        .collect();

    if buttons.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="ctas">{}</div>"#, buttons.concat())
    }
}

fn portrait(hero: &Hero, palette: &Palette) -> String {
    match hero.image.as_deref().filter(|i| !i.is_empty()) {
        Some(src) => format!(
            r#"<div class="portrait" style="background:conic-gradient(from 0deg, {p}, {s}, {a}, {p})"><img src="{src}" alt="{alt}"></div>"#,
            p = palette.primary,
            s = palette.secondary,
            a = palette.accent,
            src = escape_attr(src),
            alt = escape_attr(raw_name(hero)),
        ),
        None => String::new(),
    }
}

fn centered(ctx: &PageContext<'_>) -> String {
    let hero = &ctx.content.hero;
    let palette = ctx.palette;
    format!(
        r#"<section id="home" class="hero hero-centered" style="background:{background};color:{text}">{portrait}<h1>{name}</h1><p class="hero-title" style="color:{secondary}">{title}</p>{tagline}{ctas}</section>"#,
        background = palette.background,
        text = palette.text,
        secondary = palette.secondary,
        portrait = portrait(hero, palette),
        name = name(hero),
        title = title(hero),
        tagline = tagline(hero, palette),
        ctas = ctas(hero, palette, ctx.is_dark),
    )
}

fn split(ctx: &PageContext<'_>) -> String {
    let hero = &ctx.content.hero;
    let palette = ctx.palette;
    let divider_alpha = if ctx.is_dark { "40" } else { "20" };
    format!(
        r#"<section id="home" class="hero hero-split" style="background:linear-gradient(135deg, {bg_soft}, {background});color:{text}"><div class="hero-text"><div class="accent-bar" style="background-color:{accent}"></div><h1>{name}</h1><p class="hero-title" style="color:{secondary}">{title}</p>{tagline}{ctas}</div><div class="divider" style="background:linear-gradient(to bottom, {divider_a}, {divider_b})"></div><div class="hero-media">{portrait}</div></section>"#,
        bg_soft = with_alpha(&palette.background, "f5"),
        background = palette.background,
        text = palette.text,
        accent = palette.accent,
        secondary = palette.secondary,
        divider_a = with_alpha(&palette.primary, divider_alpha),
        divider_b = with_alpha(&palette.secondary, divider_alpha),
        name = name(hero),
        title = title(hero),
        tagline = tagline(hero, palette),
        ctas = ctas(hero, palette, ctx.is_dark),
        portrait = portrait(hero, palette),
    )
}

fn background(ctx: &PageContext<'_>) -> String {
    let hero = &ctx.content.hero;
    let palette = ctx.palette;
    let backdrop = hero
        .image
        .as_deref()
        .filter(|i| !i.is_empty())
        .map(|src| format!(r#"<img class="hero-backdrop" src="{}" alt="">"#, escape_attr(src)))
        .unwrap_or_default();
    format!(
        r#"<section id="home" class="hero hero-background" style="color:{text}">{backdrop}<div class="hero-overlay" style="background:{overlay}"></div><div class="hero-text"><h1>{name}</h1><p class="hero-title" style="color:{accent}">{title}</p>{tagline}{ctas}</div></section>"#,
        overlay = with_alpha(&palette.background, "cc"),
        text = palette.text,
        accent = palette.accent,
        name = name(hero),
        title = title(hero),
        tagline = tagline(hero, palette),
        ctas = ctas(hero, palette, ctx.is_dark),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::*;

    #[test]
    fn test_split_shows_name_title_and_ctas() {
        let content = builtin();
        let palette = Palette::light();
        let html = render(HeroVariant::Split, &ctx(&content, &palette));

        assert!(html.contains("<h1>John Doe</h1>"));
        assert!(html.contains("Full Stack Developer"));
        assert!(html.contains(r##"href="#projects""##));
        assert!(html.contains("cta cta-primary"));
    }

    #[test]
    fn test_primary_cta_uses_accent_colour() {
        let content = builtin();
        let palette = Palette::light();
        let html = ctas(&content.hero, &palette, false);
        assert!(html.contains(&format!("background-color:{}", palette.accent)));
    }

    #[test]
    fn test_placeholders_when_hero_is_empty() {
        let content = empty();
        let palette = Palette::light();
        let html = render(HeroVariant::Centered, &ctx(&content, &palette));
        assert!(html.contains(PLACEHOLDER_NAME));
        assert!(!html.contains("<img"));
        assert!(!html.contains("class=\"ctas\""));
    }

    #[test]
    fn test_background_image_is_an_element_not_css() {
        let mut content = builtin();
        content.hero.image = Some("/me.png') , url('//evil\"".to_string());
        let palette = Palette::light();
        let html = background(&ctx(&content, &palette));
        assert!(!html.contains("center/cover"));
        assert!(html.contains(r#"class="hero hero-background" style="color:"#));
        assert!(html.contains(r#"<img class="hero-backdrop" src="/me.png"#));
        assert!(html.contains("evil&quot;\" alt=\"\">"));
    }

    #[test]
    fn test_name_is_escaped() {
        let mut content = empty();
        content.hero.name = "<script>".to_string();
        let palette = Palette::light();
        let html = render(HeroVariant::Background, &ctx(&content, &palette));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
