use relay::{App, RegistryError};

use crate::callbacks::{register_router, register_submenu};
use crate::layout::{BOOTSTRAP_CSS, FONT_AWESOME_CSS, SUBMENUS, sidebar_layout};

/// The sidebar dashboard with its submenu and routing callbacks.
pub fn sidebar_app() -> Result<App, RegistryError> {
    let mut app = App::new("Dashboard")
        .stylesheet(BOOTSTRAP_CSS)
        .stylesheet(FONT_AWESOME_CSS)
        .layout(sidebar_layout());

    for (index, _) in SUBMENUS {
        register_submenu(&mut app, index)?;
    }
    register_router(&mut app)?;

    Ok(app)
}
