use crate::feed::{Channel, NewsItem};

/// Renders the console summary: channel metadata, then each item's title and
/// link, in document order.
///
/// A line is emitted only when its value is present; an absent field skips
/// the label entirely. A present but empty value still prints its label.
/// There is no separator between items beyond ordering.
pub fn render_console(channel: &Channel, items: &[NewsItem]) -> Vec<String> {
    let mut lines = Vec::new();

    push_labeled(&mut lines, "Title", channel.title.as_deref());
    push_labeled(&mut lines, "Description", channel.description.as_deref());
    push_labeled(&mut lines, "Link", channel.link.as_deref());

    for item in items {
        push_labeled(&mut lines, "Title", item.title.as_deref());
        push_labeled(&mut lines, "Link", item.link.as_deref());
    }

    lines
}

fn push_labeled(lines: &mut Vec<String>, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        lines.push(format!("{}: {}", label, value));
    }
}
