//! The dashboards this binary can serve.

mod datatarget;
mod sidebar;

pub use datatarget::{DATASOURCE, datatarget_app, datatarget_layout};
pub use sidebar::sidebar_app;

use relay::{App, RegistryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AppKind {
    /// Sidebar with collapsible menus and routed progress pages.
    #[default]
    Sidebar,
    /// Navbar-only data target page.
    Datatarget,
}

impl AppKind {
    pub fn build(self) -> Result<App, RegistryError> {
        match self {
            Self::Sidebar => sidebar_app(),
            Self::Datatarget => Ok(datatarget_app()),
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            Self::Sidebar => 8887,
            Self::Datatarget => 8050,
        }
    }

    /// Whether error details go to the browser unless configured otherwise.
    pub fn default_debug(self) -> bool {
        matches!(self, Self::Sidebar)
    }
}
