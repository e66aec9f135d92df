//! End-to-end tests of the dashboards over sessions.

use dashboard::AppKind;
use dashboard::apps::{DATASOURCE, datatarget_app, datatarget_layout, sidebar_app};
use dashboard::callbacks::register_submenu;
use dashboard::layout::{CONTENT_ID, LOCATION_ID, collapse_id, submenu_id};
use relay::{PropId, RegistryError};
use webdom::{Prop, Tag, find_element, render_html};

#[test]
fn test_submenu_click_toggles() {
    let app = sidebar_app().unwrap();
    let mut session = app.new_session();
    session.initialize(app.registry()).unwrap();

    let is_open = PropId::new(collapse_id(1), "is_open");
    let class = PropId::new(submenu_id(1), "className");
    assert_eq!(session.read(&is_open).unwrap(), Prop::Bool(false));
    assert_eq!(session.read(&class).unwrap(), Prop::from(""));

    let written = session.click(app.registry(), &submenu_id(1)).unwrap();
    assert_eq!(written, vec![is_open.clone(), class.clone()]);
    assert_eq!(session.read(&is_open).unwrap(), Prop::Bool(true));
    assert_eq!(session.read(&class).unwrap(), Prop::from("open"));

    session.click(app.registry(), &submenu_id(1)).unwrap();
    assert_eq!(session.read(&is_open).unwrap(), Prop::Bool(false));
    assert_eq!(session.read(&class).unwrap(), Prop::from(""));

    // The other submenu is untouched
    let other = PropId::new(collapse_id(2), "is_open");
    assert_eq!(session.read(&other).unwrap(), Prop::Bool(false));
}

#[test]
fn test_submenu_headers_are_clickable() {
    let app = sidebar_app().unwrap();
    let session = app.new_session();
    let header = find_element(session.root(), &submenu_id(2)).unwrap();
    assert!(header.clickable);
    let collapse = find_element(session.root(), &collapse_id(2)).unwrap();
    assert!(!collapse.clickable);
}

#[test]
fn test_pathname_routes_content() {
    let app = sidebar_app().unwrap();
    let location = app.location().unwrap();
    assert_eq!(location, PropId::new(LOCATION_ID, "pathname"));

    let mut session = app.new_session();
    session.initialize(app.registry()).unwrap();
    let content = PropId::new(CONTENT_ID, "children");
    assert_eq!(session.read(&content).unwrap(), Prop::Null);

    let written = session
        .dispatch(app.registry(), &location, Prop::from("/page-2/2"))
        .unwrap();
    assert_eq!(written, vec![content]);
    let html = render_html(find_element(session.root(), CONTENT_ID).unwrap());
    assert!(html.contains("No way! This is page 2.2!"));

    session
        .dispatch(app.registry(), &location, Prop::from("/missing"))
        .unwrap();
    let html = render_html(find_element(session.root(), CONTENT_ID).unwrap());
    assert!(html.contains("404: Not found"));
    assert!(html.contains("/missing"));
}

#[test]
fn test_sidebar_registers_five_callbacks() {
    let app = sidebar_app().unwrap();
    assert_eq!(app.registry().len(), 5);
    assert_eq!(app.stylesheets().len(), 2);
    assert_eq!(app.title(), "Dashboard");
}

#[test]
fn test_submenu_twice_fails() {
    let mut app = sidebar_app().unwrap();
    let err = register_submenu(&mut app, 1).unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicateOutput(PropId::new(collapse_id(1), "is_open"))
    );
}

#[test]
fn test_datatarget_layout() {
    let layout = datatarget_layout();
    let html = render_html(&layout);
    assert!(html.contains(&format!("id=\"{DATASOURCE}_other graphs\"")));
    assert!(html.contains("Data Depth"));
    assert!(html.contains("Data Breadth"));
    assert!(html.contains("href=\"https://plot.ly\""));
    assert!(html.contains("no-gutters"));
    assert!(!html.contains("alert"));

    let app = datatarget_app();
    assert!(app.registry().is_empty());
    assert!(app.location().is_none());
    let session = app.new_session();
    assert_eq!(session.root().content.children()[0].tag, Tag::Div);
}

#[test]
fn test_app_kind_defaults() {
    assert_eq!(AppKind::default(), AppKind::Sidebar);
    assert_eq!(AppKind::Sidebar.default_port(), 8887);
    assert_eq!(AppKind::Datatarget.default_port(), 8050);
    assert!(AppKind::Sidebar.default_debug());
    assert!(!AppKind::Datatarget.default_debug());
    assert_eq!(AppKind::Datatarget.build().unwrap().title(), "Data Target");
}
