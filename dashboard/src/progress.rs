//! Progress-bar rows: a label column next to a bar column.

use webdom::Element;

/// How the bar's caption is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// `"{percent}%"`
    Percentage,
    /// `"{actual}K"`
    Count,
}

impl ProgressMode {
    /// `"percentage"` selects [`ProgressMode::Percentage`], any other
    /// non-empty name counts. An empty name is no mode at all.
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            "" => None,
            "percentage" => Some(Self::Percentage),
            _ => Some(Self::Count),
        }
    }
}

/// Arguments of [`build_progress_fragment`]. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct ProgressArgs {
    pub header: Option<String>,
    pub label: Option<String>,
    pub actual_value: Option<String>,
    pub percent_value: Option<i64>,
    pub mode: Option<ProgressMode>,
    pub axis_label: Option<Vec<Element>>,
}

impl ProgressArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn actual_value(mut self, value: impl Into<String>) -> Self {
        self.actual_value = Some(value.into());
        self
    }

    pub fn percent_value(mut self, value: i64) -> Self {
        self.percent_value = Some(value);
        self
    }

    /// Set the mode by name. See [`ProgressMode::parse`].
    pub fn mode(mut self, mode: &str) -> Self {
        self.mode = ProgressMode::parse(mode);
        self
    }

    pub fn axis_label(mut self, axis_label: Vec<Element>) -> Self {
        self.axis_label = Some(axis_label);
        self
    }
}

/// Build a header or a progress row from `args`.
///
/// A header wins over everything else. Otherwise label, actual value,
/// percent and mode must all be present and non-empty (a zero percent, an
/// empty label or an empty mode name counts as missing); when they are not,
/// nothing is built.
pub fn build_progress_fragment(args: ProgressArgs) -> Option<Element> {
    if let Some(header) = args.header {
        return Some(Element::heading(5, header));
    }

    let label = args.label.filter(|l| !l.is_empty())?;
    let actual = args.actual_value.filter(|a| !a.is_empty())?;
    let percent = args.percent_value.filter(|p| *p != 0)?;
    let mode = args.mode?;

    let caption = match mode {
        ProgressMode::Percentage => format!("{percent}%"),
        ProgressMode::Count => format!("{actual}K"),
    };

    Some(progress_row(&label, &caption, percent, args.axis_label))
}

/// Label column (3 wide) and bar column (8 wide), with the axis row under the bar.
pub fn progress_row(
    label: &str,
    caption: &str,
    percent: i64,
    axis_label: Option<Vec<Element>>,
) -> Element {
    let mut bar = Element::col()
        .width("8")
        .child(Element::progress(caption, percent).css("height", "25px"));
    if let Some(axis) = axis_label {
        bar = bar.child(Element::row().children(axis));
    }

    Element::row().children([
        Element::col().width("3").child(Element::paragraph(label)),
        bar,
    ])
}

/// The two ends of a bar's scale, one left-aligned and one right-aligned.
pub fn axis_label(low: i64, high: i64) -> Vec<Element> {
    vec![axis_end(low, "left"), axis_end(high, "right")]
}

fn axis_end(value: i64, align: &str) -> Element {
    Element::paragraph(value.to_string())
        .css("float", "left")
        .css("width", "50%")
        .css("text-align", align)
}
