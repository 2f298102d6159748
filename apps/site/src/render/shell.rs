//! Page shell (document head, palette variables, theme toggle, footer) plus
//! the standalone résumé parser page.

use crate::content::models::SiteMeta;
use crate::render::{escape_attr, escape_html, render_sections, with_alpha, LayoutConfig, PageContext};
use crate::theme::cookie::PLATFORM_HINT_HEADER;
use crate::theme::Palette;

/// Browser chrome colour for each scheme.
pub const THEME_COLOR_LIGHT: &str = "#F8FAFC";
pub const THEME_COLOR_DARK: &str = "#0F172A";

const DEFAULT_TITLE: &str = "Portfolio";

const BASE_CSS: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: Inter, system-ui, sans-serif; background: var(--color-background); color: var(--color-text); transition: background-color .3s, color .3s; }
main { max-width: 72rem; margin: 0 auto; padding: 2rem 1rem; display: grid; gap: 3rem; }
section { border-radius: 1rem; padding: 3rem 2rem; overflow: hidden; }
.accent-bar { width: 4rem; height: .25rem; border-radius: 9999px; margin-bottom: 1rem; }
.grid-2, .hero-split, .contact { display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 2rem; }
.ctas { display: flex; flex-wrap: wrap; gap: 1rem; margin-top: 1.5rem; }
.cta { padding: .6rem 1.4rem; border-radius: 9999px; text-decoration: none; font-weight: 500; }
.portrait { width: 16rem; height: 16rem; border-radius: 50%; padding: .5rem; margin: auto; }
.portrait img { width: 100%; height: 100%; border-radius: 50%; object-fit: cover; }
.bar { height: .5rem; border-radius: 9999px; }
.bar-fill { height: 100%; border-radius: 9999px; }
.project-grid, .skill-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1.5rem; }
.project-card img { width: 100%; border-radius: .5rem; }
.contact-form { display: grid; gap: 1rem; }
.contact-form input, .contact-form textarea, .resume-form textarea { width: 100%; padding: .6rem; border-radius: .5rem; }
.hero-background { position: relative; isolation: isolate; }
.hero-backdrop { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; z-index: -2; }
.hero-overlay { position: absolute; inset: 0; z-index: -1; }
.theme-toggle { position: fixed; bottom: 1.5rem; right: 1.5rem; z-index: 50; }
.theme-toggle button { width: 3rem; height: 3rem; border-radius: 50%; cursor: pointer; font-size: 1.25rem; }
footer { text-align: center; padding: 2rem; font-size: .875rem; }
pre.resume-result { white-space: pre-wrap; padding: 1rem; border-radius: .5rem; }
"#;

/// CSS custom properties for every palette role.
fn palette_variables(palette: &Palette) -> String {
    let vars: String = palette
        .roles()
        .iter()
        .map(|(role, color)| format!("--color-{role}: {color}; "))
        .collect();
    format!(":root {{ {vars}}}")
}

/// Floating button; posts back to the toggle route and returns to `redirect`.
fn theme_toggle(palette: &Palette, is_dark: bool, redirect: &str) -> String {
    let (label, icon, icon_color, background) = if is_dark {
        ("Switch to light mode", "☀", &palette.accent, &palette.surface)
    } else {
        ("Switch to dark mode", "☾", &palette.primary, &palette.background)
    };
    format!(
        r#"<form class="theme-toggle" action="/theme/toggle" method="post"><input type="hidden" name="redirect" value="{redirect}"><button type="submit" aria-label="{label}" title="{label}" style="background:{background};border:1px solid {border};color:{icon_color};box-shadow:0 4px 20px {shadow}">{icon}</button></form>"#,
        redirect = escape_attr(redirect),
        border = palette.border,
        shadow = with_alpha(&palette.primary, "30"),
    )
}

fn document(
    site: &SiteMeta,
    palette: &Palette,
    is_dark: bool,
    redirect: &str,
    body: &str,
    year: i32,
) -> String {
    let title = if site.title.trim().is_empty() {
        DEFAULT_TITLE
    } else {
        site.title.as_str()
    };
    let footer_name = title.split('|').next().unwrap_or(title).trim();
    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{mode}" class="{mode}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta http-equiv="Accept-CH" content="{hint}">
<title>{title}</title>
<meta name="description" content="{description}">
<meta name="theme-color" media="(prefers-color-scheme: light)" content="{THEME_COLOR_LIGHT}">
<meta name="theme-color" media="(prefers-color-scheme: dark)" content="{THEME_COLOR_DARK}">
<style>{vars}{BASE_CSS}</style>
</head>
<body class="theme-transition">
{body}
{toggle}
<footer style="border-top:1px solid {border}">&copy; {year} {footer_name}</footer>
</body>
</html>
"#,
        mode = if is_dark { "dark" } else { "light" },
        hint = PLATFORM_HINT_HEADER,
        title = escape_html(title),
        description = escape_attr(&site.description),
        vars = palette_variables(palette),
        toggle = theme_toggle(palette, is_dark, redirect),
        border = palette.border,
        footer_name = escape_html(footer_name),
    )
}

/// The portfolio home page.
pub fn render_page(ctx: &PageContext<'_>, layout: &LayoutConfig, year: i32) -> String {
    let body = format!("<main>\n{}\n</main>", render_sections(ctx, layout));
    document(&ctx.content.site, ctx.palette, ctx.is_dark, "/", &body, year)
}

const RESUME_SCRIPT: &str = r#"<script>
(function () {
  var form = document.querySelector("form.resume-form");
  var output = document.querySelector("pre.resume-result");
  var error = document.querySelector(".resume-error");
  form.addEventListener("submit", async function (event) {
    event.preventDefault();
    error.textContent = "";
    output.textContent = "Parsing...";
    var file = form.querySelector("input[type=file]").files[0];
    var text = form.querySelector("textarea").value;
    var request;
    if (file) {
      var data = new FormData();
      data.append("file", file);
      request = fetch("/api/parse-resume/upload", { method: "POST", body: data });
    } else if (text.trim()) {
      request = fetch("/api/parse-resume", {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify({ resume: text })
      });
    } else {
      output.textContent = "";
      error.textContent = "Please select a resume file first.";
      return;
    }
    try {
      var response = await request;
      if (!response.ok) throw new Error("Request failed");
      var json = await response.json();
      output.textContent = JSON.stringify(json.data, null, 2);
    } catch (err) {
      output.textContent = "";
      error.textContent = "Failed to parse resume. Please try again.";
    }
  });
})();
</script>"#;

/// The résumé parser page.
pub fn render_resume_page(site: &SiteMeta, palette: &Palette, is_dark: bool, year: i32) -> String {
    let body = format!(
        r#"<main><section class="resume-parser" style="background:{surface};border:1px solid {border}"><h1>Resume Parser</h1><form class="resume-form"><label>Choose your resume file:<input type="file" name="file" accept=".txt,.pdf"></label><label>Or paste it:<textarea name="resume" rows="10" style="background:{background};color:{text};border:1px solid {border}"></textarea></label><button type="submit" style="background:{primary};color:{background}">Parse Resume</button></form><p class="resume-error" role="alert" style="color:{accent}"></p><pre class="resume-result" style="background:{background}"></pre><a href="/" style="color:{primary}">Back to portfolio</a></section></main>{RESUME_SCRIPT}"#,
        surface = palette.surface,
        border = palette.border,
        background = palette.background,
        text = palette.text,
        primary = palette.primary,
        accent = palette.accent,
    );
    document(site, palette, is_dark, "/resume", &body, year)
}
