// Markup snippet builders for HTML and Markdown reports.

/// Build an HTML link, optionally with a tooltip and opening in a new tab.
pub fn html_link(text: &str, url: &str, tooltip: Option<&str>, new_tab: bool) -> String {
    match (tooltip, new_tab) {
        (None, false) => format!("<a href=\"{url}\">{text}</a>"),
        (Some(tip), false) => format!("<a title=\"{tip}\" href=\"{url}\">{text}</a>"),
        (None, true) => format!("<a target=\"_blank\" href=\"{url}\">{text}</a>"),
        (Some(tip), true) => {
            format!("<a target=\"_blank\" title=\"{tip}\" href=\"{url}\">{text}</a>")
        }
    }
}

/// Build a Markdown link.
///
/// Markdown has no syntax for tooltips or link targets, so those requests
/// fall back to an inline HTML link.
pub fn md_link(text: &str, url: &str, tooltip: Option<&str>, new_tab: bool) -> String {
    if !new_tab && tooltip.is_none() {
        return format!("[{text}]({url})");
    }
    html_link(text, url, tooltip, new_tab)
}

/// Build the head of an HTML document up to and including the first heading.
///
/// With `mono` the whole document is styled monospace; an optional extra
/// stylesheet body can be supplied.
pub fn html_head(title: &str, lang: &str, style: Option<&str>, mono: bool) -> String {
    let style_block = match (style, mono) {
        (None, false) => String::new(),
        (None, true) => "<style>\n* {font-family: monospace, monospace;}\n</style>\n".to_owned(),
        (Some(body), false) => format!("<style>\n{body}\n</style>\n"),
        (Some(body), true) => {
            format!("<style>\n* {{font-family: monospace, monospace;}}\n{body}\n</style>\n")
        }
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n{style_block}</head>\n<body>\n<h1>{title}</h1>\n"
    )
}

/// Build a Markdown document head: the title as a top-level heading.
pub fn md_head(title: &str) -> String {
    format!("# {title}\n\n")
}

/// Build the foot of an HTML document, optionally with a small footer line.
pub fn html_foot(footer: Option<&str>) -> String {
    match footer {
        Some(text) => format!("<p><small>{text}</small></p>\n</body>\n</html>\n"),
        None => "</body>\n</html>\n".to_owned(),
    }
}

/// Build a Markdown document foot, optionally with a small footer line.
pub fn md_foot(footer: Option<&str>) -> String {
    match footer {
        Some(text) => format!("\n<small>{text}</small>\n"),
        None => String::new(),
    }
}
