//! Fixed file contents written into the generated project.

macro_rules! template {
  ($file:literal) => {
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $file))
  };
}

pub const INDEX_CSS: &str = template!("index.css");
pub const MAIN_JSX: &str = template!("main.jsx");
pub const APP_ROUTES_JSX: &str = template!("AppRoutes.jsx");
pub const MAIN_LAYOUT_JSX: &str = template!("MainLayout.jsx");
pub const HOME_JSX: &str = template!("Home.jsx");
pub const ABOUT_JSX: &str = template!("About.jsx");
pub const NOT_FOUND_JSX: &str = template!("NotFound.jsx");
pub const APP_JSX: &str = template!("App.jsx");

/// Directories created under the project root before templates are written.
pub const DIRECTORIES: &[&str] = &["src/routes", "src/layouts", "src/pages"];

/// A template written unconditionally. `path` is relative to the project root
/// and always uses `/` separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
  pub path: &'static str,
  pub contents: &'static str,
}

/// Routing table, layout shell, pages and application root, in write order.
pub const TEMPLATE_FILES: &[TemplateFile] = &[
  TemplateFile {
    path: "src/routes/AppRoutes.jsx",
    contents: APP_ROUTES_JSX,
  },
  TemplateFile {
    path: "src/layouts/MainLayout.jsx",
    contents: MAIN_LAYOUT_JSX,
  },
  TemplateFile {
    path: "src/pages/Home.jsx",
    contents: HOME_JSX,
  },
  TemplateFile {
    path: "src/pages/About.jsx",
    contents: ABOUT_JSX,
  },
  TemplateFile {
    path: "src/pages/NotFound.jsx",
    contents: NOT_FOUND_JSX,
  },
  TemplateFile {
    path: "src/App.jsx",
    contents: APP_JSX,
  },
];
