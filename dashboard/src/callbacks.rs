//! Callbacks of the sidebar dashboard and their registration.

use relay::{App, Input, Output, RegistryError, State};
use webdom::Prop;

use crate::layout::{CONTENT_ID, LOCATION_ID, collapse_id, submenu_id};
use crate::router;

/// Flip `is_open` on a real click; keep it otherwise.
///
/// `click_count` is `None` before the first click.
pub fn toggle(click_count: Option<i64>, is_open: bool) -> bool {
    if click_count.is_some_and(|n| n != 0) {
        !is_open
    } else {
        is_open
    }
}

/// Class of a submenu header; `open` rotates its chevron.
pub fn select_class(is_open: bool) -> &'static str {
    if is_open { "open" } else { "" }
}

/// Bind submenu `index`: its header's clicks toggle its collapse, and the
/// collapse state sets the header's class.
pub fn register_submenu(app: &mut App, index: usize) -> Result<(), RegistryError> {
    let header = submenu_id(index);
    let collapse = collapse_id(index);

    app.callback(
        Output::new(&collapse, "is_open"),
        vec![Input::new(&header, "n_clicks")],
        vec![State::new(&collapse, "is_open")],
        |inputs, states| match (inputs, states) {
            ([clicks], [is_open]) => Prop::Bool(toggle(clicks.as_int(), is_open.is_truthy())),
            _ => Prop::Null,
        },
    )?
    .callback(
        Output::new(&header, "className"),
        vec![Input::new(&collapse, "is_open")],
        vec![],
        |inputs, _| match inputs {
            [is_open] => Prop::from(select_class(is_open.is_truthy())),
            _ => Prop::Null,
        },
    )?;

    Ok(())
}

/// Bind the content area to the location's path.
pub fn register_router(app: &mut App) -> Result<(), RegistryError> {
    app.callback(
        Output::new(CONTENT_ID, "children"),
        vec![Input::new(LOCATION_ID, "pathname")],
        vec![],
        |inputs, _| match inputs.first().and_then(Prop::as_str) {
            Some(pathname) => Prop::from(router::render(pathname)),
            None => Prop::Null,
        },
    )?;
    Ok(())
}
