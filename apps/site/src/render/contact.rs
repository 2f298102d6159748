use crate::content::models::{ContactInfo, ContentDocument};
use crate::render::{escape_attr, escape_html, with_alpha, ContactVariant, PageContext};
use crate::theme::Palette;

/// Skills shown per category in the alternative layout.
const SKILLS_PER_CATEGORY: usize = 2;
/// Total skill tags in the alternative layout.
const SNAPSHOT_LIMIT: usize = 5;

/// Submits the form as JSON and reports the outcome in place.
const FORM_SCRIPT: &str = r#"<script>
document.querySelectorAll("form.contact-form").forEach(function (form) {
  form.addEventListener("submit", async function (event) {
    event.preventDefault();
    var status = form.querySelector(".form-status");
    status.textContent = "Sending...";
    var body = Object.fromEntries(new FormData(form).entries());
    try {
      var response = await fetch(form.action, {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify(body)
      });
      if (!response.ok) throw new Error("Submission failed");
      form.reset();
      status.textContent = "Thanks! Your message has been sent.";
    } catch (err) {
      status.textContent = "Something went wrong. Please try again.";
    }
  });
});
</script>"#;

pub fn render(variant: ContactVariant, ctx: &PageContext<'_>) -> String {
    match variant {
        ContactVariant::Standard => standard(ctx),
        ContactVariant::Alternative => alternative(ctx),
    }
}

fn form(palette: &Palette) -> String {
    let field_style = format!(
        "background:{};border:1px solid {};color:{}",
        palette.surface, palette.border, palette.text
    );
    format!(
        r#"<form class="contact-form" action="/api/contact" method="post"><label>Name<input name="name" type="text" required style="{field_style}"></label><label>Email<input name="email" type="email" required style="{field_style}"></label><label>Message<textarea name="message" rows="5" required style="{field_style}"></textarea></label><button type="submit" style="background:linear-gradient(135deg, {primary}, {secondary});color:#fff">Send Message</button><p class="form-status" role="status"></p></form>{FORM_SCRIPT}"#,
        primary = palette.primary,
        secondary = palette.secondary,
    )
}

fn details(info: Option<&ContactInfo>, linked: bool) -> String {
    let Some(info) = info else {
        return String::new();
    };
    let mut html = String::from(r#"<ul class="contact-details">"#);
    let email = escape_html(&info.email);
    if linked {
        html.push_str(&format!(
            r#"<li><a href="mailto:{}">{email}</a></li>"#,
            escape_attr(&info.email)
        ));
    } else {
        html.push_str(&format!("<li>{email}</li>"));
    }
    if let Some(phone) = info.phone.as_deref() {
        if linked {
            html.push_str(&format!(
                r#"<li><a href="tel:{}">{}</a></li>"#,
                escape_attr(phone),
                escape_html(phone)
            ));
        } else {
            html.push_str(&format!("<li>{}</li>", escape_html(phone)));
        }
    }
    if let Some(location) = info.location.as_deref() {
        html.push_str(&format!("<li>{}</li>", escape_html(location)));
    }
    html.push_str("</ul>");
    html
}

fn standard(ctx: &PageContext<'_>) -> String {
    let palette = ctx.palette;
    format!(
        r#"<section id="contact" class="contact contact-standard" style="background:{surface};color:{text}"><div class="contact-info" style="background:linear-gradient(135deg, {primary}, {secondary});color:#fff"><h2>Get in Touch</h2><p>Have a project in mind or just want to say hello? Send me a message.</p>{details}</div>{form}</section>"#,
        surface = palette.surface,
        text = palette.text,
        primary = palette.primary,
        secondary = palette.secondary,
        details = details(ctx.content.contact.as_ref(), false),
        form = form(palette),
    )
}

fn skills_snapshot(content: &ContentDocument, palette: &Palette) -> String {
    let items: String = content
        .skills
        .categories
        .iter()
        .flat_map(|c| c.items.iter().take(SKILLS_PER_CATEGORY))
        .take(SNAPSHOT_LIMIT)
        .map(|s| {
            format!(
                r#"<li style="background:{};color:{}">{}</li>"#,
                with_alpha(&palette.accent, "15"),
                palette.accent,
                escape_html(&s.name)
            )
        })
        .collect();
    if items.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="skills-snapshot"><h3>What I work with</h3><ul>{items}</ul></div>"#)
    }
}

fn alternative(ctx: &PageContext<'_>) -> String {
    let palette = ctx.palette;
    format!(
        r#"<section id="contact" class="contact contact-alternative" style="background:{background};color:{text};border:1px solid {border}"><div class="contact-info"><h2 style="color:{primary}">Let's Work Together</h2>{details}{skills}</div>{form}</section>"#,
        background = palette.background,
        text = palette.text,
        border = palette.border,
        primary = palette.primary,
        details = details(ctx.content.contact.as_ref(), true),
        skills = skills_snapshot(ctx.content, palette),
        form = form(palette),
    )
}
