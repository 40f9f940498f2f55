use minijinja::{context, Environment};
use std::path::Path;

use crate::error::StartupError;
use crate::translations::TranslationStore;

/// The two pages the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Blog,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::Blog];

    pub fn template_name(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Blog => "blog.html",
        }
    }
}

pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Bind the templates directory and compile every page template so a
    /// broken or missing template stops startup instead of failing requests.
    pub fn new(templates_dir: &Path) -> Result<Self, StartupError> {
        if !templates_dir.is_dir() {
            return Err(StartupError::TemplatesDirMissing(templates_dir.to_path_buf()));
        }

        let mut env = Environment::new();
        env.set_debug(cfg!(debug_assertions));
        env.set_loader(minijinja::path_loader(templates_dir));

        for page in Page::ALL {
            env.get_template(page.template_name())
                .map_err(|source| StartupError::Template {
                    name: page.template_name(),
                    source,
                })?;
        }
        Ok(Self { env })
    }

    /// Render a page with the whole translation table as `T`, the resolved
    /// language as `lang`, and that language's subtree as `t`.
    pub fn render_page(
        &self,
        page: Page,
        translations: &TranslationStore,
        lang: &str,
    ) -> Result<String, minijinja::Error> {
        let template = self.env.get_template(page.template_name())?;
        template.render(context! {
            T => translations.table(),
            t => translations.knowledge(lang),
            lang => lang,
            languages => translations.languages(),
            page => page.template_name(),
        })
    }
}
