//! Compiled template environment.
//!
//! All page templates are embedded at build time so the binary is
//! self-contained; the environment is built once at startup and shared
//! through [`crate::state::AppState`].

use axum::response::Html;
use minijinja::Environment;

use crate::error::ServerError;

/// Embedded templates, registered under the names the handlers use.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("about.html", include_str!("../templates/about.html")),
    ("consultation.html", include_str!("../templates/consultation.html")),
    ("health_info.html", include_str!("../templates/health_info.html")),
    ("contact.html", include_str!("../templates/contact.html")),
];

/// Build the shared environment. Template sources are fixed at compile time,
/// so a parse failure here is a build defect and aborts startup.
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    for (name, source) in TEMPLATES {
        env.add_template(name, source)?;
    }
    Ok(env)
}

/// Render a named template into an HTML response.
pub fn render(
    env: &Environment<'static>,
    name: &str,
    ctx: minijinja::Value,
) -> Result<Html<String>, ServerError> {
    let template = env.get_template(name)?;
    Ok(Html(template.render(ctx)?))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use minijinja::context;

    #[test]
    fn all_embedded_templates_parse() {
        let env = environment().expect("templates parse");
        for (name, _) in TEMPLATES {
            assert!(env.get_template(name).is_ok(), "missing template {name}");
        }
    }

    #[test]
    fn index_renders() {
        let env = environment().expect("templates parse");
        let Html(body) = render(&env, "index.html", context! {}).expect("render");
        assert!(body.contains("<html"));
    }
}
