//! Tests for session state and dispatch.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use relay::{App, DispatchError, Input, Output, PropId, State};
use webdom::{Element, Prop};

fn panel_app() -> App {
    let mut app = App::new("Panel").layout(Element::div().children([
        Element::location().id("url"),
        Element::list_item().id("button"),
        Element::collapse().id("panel"),
        Element::div().id("content"),
    ]));

    app.callback(
        Output::new("panel", "is_open"),
        vec![Input::new("button", "n_clicks")],
        vec![State::new("panel", "is_open")],
        |inputs, states| match (inputs, states) {
            ([clicks], [open]) if clicks.is_truthy() => Prop::Bool(!open.is_truthy()),
            (_, [open]) => Prop::Bool(open.is_truthy()),
            _ => Prop::Null,
        },
    )
    .unwrap()
    .callback(
        Output::new("button", "className"),
        vec![Input::new("panel", "is_open")],
        vec![],
        |inputs, _| match inputs {
            [open] if open.is_truthy() => Prop::from("open"),
            _ => Prop::from(""),
        },
    )
    .unwrap()
    .callback(
        Output::new("content", "children"),
        vec![Input::new("url", "pathname")],
        vec![],
        |inputs, _| match inputs.first().and_then(Prop::as_str) {
            Some(path) => Prop::from(Element::paragraph(format!("at {path}"))),
            None => Prop::Null,
        },
    )
    .unwrap();

    app
}

// ============================================================================
// Setup
// ============================================================================

#[test]
fn test_new_session_marks_click_targets() {
    let app = panel_app();
    let session = app.new_session();
    let root = session.root();

    assert!(webdom::find_element(root, "button").unwrap().clickable);
    assert!(!webdom::find_element(root, "panel").unwrap().clickable);
}

#[test]
fn test_initialize_runs_each_callback_once() {
    let app = panel_app();
    let mut session = app.new_session();
    session
        .write(&PropId::new("url", "pathname"), Prop::from("/home"))
        .unwrap();

    let written = session.initialize(app.registry()).unwrap();
    assert_eq!(written.len(), 3);

    assert_eq!(
        session.read(&PropId::new("panel", "is_open")).unwrap(),
        Prop::Bool(false)
    );
    assert_eq!(
        session.read(&PropId::new("button", "className")).unwrap(),
        Prop::from("")
    );
    assert_eq!(
        session.read(&PropId::new("content", "children")).unwrap(),
        Prop::Elements(vec![Element::paragraph("at /home")])
    );
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_click_chains_through_dependent_callbacks() {
    let app = panel_app();
    let mut session = app.new_session();
    session.initialize(app.registry()).unwrap();

    let written = session.click(app.registry(), "button").unwrap();
    assert_eq!(
        written,
        vec![
            PropId::new("panel", "is_open"),
            PropId::new("button", "className"),
        ]
    );
    assert_eq!(
        session.read(&PropId::new("button", "n_clicks")).unwrap(),
        Prop::Int(1)
    );
    assert_eq!(
        session.read(&PropId::new("panel", "is_open")).unwrap(),
        Prop::Bool(true)
    );
    assert_eq!(
        session.read(&PropId::new("button", "className")).unwrap(),
        Prop::from("open")
    );

    session.click(app.registry(), "button").unwrap();
    assert_eq!(
        session.read(&PropId::new("panel", "is_open")).unwrap(),
        Prop::Bool(false)
    );
    assert_eq!(
        session.read(&PropId::new("button", "className")).unwrap(),
        Prop::from("")
    );
}

#[test]
fn test_dispatch_unrelated_prop_fires_nothing() {
    let app = panel_app();
    let mut session = app.new_session();
    let written = session
        .dispatch(app.registry(), &PropId::new("panel", "title"), Prop::from("x"))
        .unwrap();
    assert!(written.is_empty());
}

#[test]
fn test_dispatch_unknown_component() {
    let app = panel_app();
    let mut session = app.new_session();
    let err = session
        .dispatch(app.registry(), &PropId::new("ghost", "value"), Prop::Int(1))
        .unwrap_err();
    assert_eq!(err, DispatchError::UnknownComponent("ghost".into()));
}

#[test]
fn test_write_read_only_prop_fails() {
    let app = panel_app();
    let mut session = app.new_session();
    let err = session
        .write(&PropId::new("panel", "id"), Prop::from("other"))
        .unwrap_err();
    assert!(matches!(err, DispatchError::Property { .. }));
}

#[test]
fn test_each_callback_fires_once_per_dispatch() {
    // Two inputs of the same callback both change through one dispatch:
    // source -> a, source -> b, (a, b) -> sink.
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let mut app = App::new("Diamond").layout(Element::div().children([
        Element::div().id("source"),
        Element::div().id("a"),
        Element::div().id("b"),
        Element::div().id("sink"),
    ]));
    app.callback(
        Output::new("a", "value"),
        vec![Input::new("source", "value")],
        vec![],
        |inputs, _| inputs[0].clone(),
    )
    .unwrap()
    .callback(
        Output::new("b", "value"),
        vec![Input::new("source", "value")],
        vec![],
        |inputs, _| inputs[0].clone(),
    )
    .unwrap()
    .callback(
        Output::new("sink", "value"),
        vec![Input::new("a", "value"), Input::new("b", "value")],
        vec![],
        move |inputs, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            Prop::Int(inputs.iter().filter_map(Prop::as_int).sum())
        },
    )
    .unwrap();

    let mut session = app.new_session();
    session
        .dispatch(app.registry(), &PropId::new("source", "value"), Prop::Int(2))
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        session.read(&PropId::new("sink", "value")).unwrap(),
        Prop::Int(4)
    );
}

#[test]
fn test_app_without_location() {
    let app = App::new("Static").layout(Element::div().id("root"));
    assert_eq!(app.location(), None);
    assert!(app.registry().is_empty());
}
