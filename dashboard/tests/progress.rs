//! Tests for the progress-bar factory.

use dashboard::progress::{ProgressArgs, ProgressMode, axis_label, build_progress_fragment};
use webdom::{Content, Element, Prop, Tag, render_html};

fn complete(mode: &str) -> ProgressArgs {
    ProgressArgs::new()
        .label("Some Label")
        .actual_value("10")
        .percent_value(40)
        .mode(mode)
}

/// The progress element inside a built row.
fn bar(row: &Element) -> &Element {
    let columns = row.content.children();
    assert_eq!(columns.len(), 2);
    &columns[1].content.children()[0]
}

#[test]
fn test_header_wins() {
    let el = build_progress_fragment(complete("count").header("Totals")).unwrap();
    assert_eq!(el.tag, Tag::Heading(5));
    assert_eq!(el.content, Content::Text("Totals".into()));

    let el = build_progress_fragment(ProgressArgs::new().header("Only")).unwrap();
    assert_eq!(render_html(&el), "<h5>Only</h5>");
}

#[test]
fn test_count_caption() {
    let row = build_progress_fragment(complete("count")).unwrap();
    let progress = bar(&row);
    assert_eq!(progress.tag, Tag::Progress);
    assert_eq!(progress.content, Content::Text("10K".into()));
    assert_eq!(progress.get_prop("value"), Prop::Int(40));
}

#[test]
fn test_percentage_caption() {
    let row = build_progress_fragment(complete("percentage")).unwrap();
    assert_eq!(bar(&row).content, Content::Text("40%".into()));
}

#[test]
fn test_label_column() {
    let row = build_progress_fragment(complete("count")).unwrap();
    let label_col = &row.content.children()[0];
    assert_eq!(label_col.get_prop("width"), Prop::from("3"));
    assert_eq!(
        label_col.content.children()[0].content,
        Content::Text("Some Label".into())
    );
    let html = render_html(&row);
    assert!(html.contains("col-3"));
    assert!(html.contains("col-8"));
    assert!(html.contains("height: 25px"));
}

#[test]
fn test_mode_parse() {
    assert_eq!(ProgressMode::parse("percentage"), Some(ProgressMode::Percentage));
    assert_eq!(ProgressMode::parse("count"), Some(ProgressMode::Count));
    assert_eq!(ProgressMode::parse("anything"), Some(ProgressMode::Count));
    assert_eq!(ProgressMode::parse(""), None);
}

#[test]
fn test_incomplete_arguments_build_nothing() {
    assert!(build_progress_fragment(ProgressArgs::new()).is_none());
    assert!(
        build_progress_fragment(
            ProgressArgs::new()
                .label("x")
                .actual_value("1")
                .percent_value(5)
        )
        .is_none()
    );
    assert!(
        build_progress_fragment(
            ProgressArgs::new()
                .actual_value("1")
                .percent_value(5)
                .mode("count")
        )
        .is_none()
    );
}

#[test]
fn test_empty_or_zero_counts_as_missing() {
    assert!(build_progress_fragment(complete("count").percent_value(0)).is_none());
    assert!(build_progress_fragment(complete("count").label("")).is_none());
    assert!(build_progress_fragment(complete("count").actual_value("")).is_none());
    assert!(build_progress_fragment(complete("")).is_none());
}

#[test]
fn test_axis_row_under_bar() {
    let row =
        build_progress_fragment(complete("count").axis_label(axis_label(0, 100)))
            .unwrap();
    let bar_col = &row.content.children()[1];
    let parts = bar_col.content.children();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[1].tag, Tag::Row);

    let ends = parts[1].content.children();
    assert_eq!(ends[0].content, Content::Text("0".into()));
    assert_eq!(ends[1].content, Content::Text("100".into()));
    assert_eq!(
        ends[1].style.to_css(),
        "float: left; width: 50%; text-align: right"
    );
}

#[test]
fn test_no_axis_row_without_axis() {
    let row = build_progress_fragment(complete("count")).unwrap();
    assert_eq!(row.content.children()[1].content.children().len(), 1);
}
