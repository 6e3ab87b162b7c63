//! HTML rendering through embedded minijinja templates.

use minijinja::Environment;
use serde::Serialize;

use crate::error::AppError;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("form.html", include_str!("../../templates/form.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("list.html", include_str!("../../templates/list.html")),
    ("detail.html", include_str!("../../templates/detail.html")),
    ("matches.html", include_str!("../../templates/matches.html")),
];

/// Compiled page templates. `.html` names get HTML auto-escaping.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, AppError> {
        let template = self.env.get_template(name)?;
        Ok(template.render(ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_templates_compile() {
        let renderer = Renderer::new().unwrap();
        for (name, _) in TEMPLATES {
            assert!(renderer.env.get_template(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn home_page_escapes_values() {
        #[derive(Serialize)]
        struct Ctx {
            sections: Vec<(&'static str, &'static str)>,
        }
        let renderer = Renderer::new().unwrap();
        let html = renderer
            .render(
                "home.html",
                Ctx {
                    sections: vec![("<Clubs>", "/clubs")],
                },
            )
            .unwrap();
        assert!(html.contains("&lt;Clubs&gt;"));
    }
}
