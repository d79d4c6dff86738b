//! The result page: a fixed sequence of display elements around one computed
//! value, and the renderers that turn it into text, HTML or JSON.

use clap::ValueEnum;
use common::{
    constants::{
        DISPLAY_INDEX, DISPLAY_LABEL, EXAMPLE_HEADER, PAGE_FOOTNOTE, PAGE_INTRO, PAGE_TITLE,
        RESULT_HEADER,
    },
    report::FibonacciReport,
    serializable::Serializable,
};
use fib_core::{FibonacciCalculator, FibonacciError};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Title(String),
    Text(String),
    Subheader(String),
    Code(String),
    Success(String),
    Info(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PageFormat {
    #[default]
    Text,
    Html,
    Json,
}

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("page has no computed result to serialize")]
    MissingReport,
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    elements: Vec<Element>,
    report: Option<FibonacciReport>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) -> &mut Self {
        self.elements.push(element);
        self
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn report(&self) -> Option<&FibonacciReport> {
        self.report.as_ref()
    }

    /// Builds the Fibonacci page for [`DISPLAY_INDEX`] using `calc`.
    ///
    /// The value reaches the page only through `calc`'s return; a failing
    /// calculator produces no page.
    #[tracing::instrument(skip_all, fields(calculator = calc.name()))]
    pub fn fibonacci(calc: &dyn FibonacciCalculator) -> Result<Self, FibonacciError> {
        let value = calc.compute(DISPLAY_INDEX)?;
        let report = FibonacciReport::new(DISPLAY_INDEX, DISPLAY_LABEL, value, calc.name());
        tracing::info!("{}", report.summary());

        let mut page = Page::new();
        page.push(Element::Title(PAGE_TITLE.to_string()))
            .push(Element::Text(PAGE_INTRO.to_string()))
            .push(Element::Subheader(EXAMPLE_HEADER.to_string()))
            .push(Element::Code(DISPLAY_LABEL.to_string()))
            .push(Element::Subheader(RESULT_HEADER.to_string()))
            .push(Element::Success(report.summary()))
            .push(Element::Info(PAGE_FOOTNOTE.to_string()));
        page.report = Some(report);
        Ok(page)
    }

    pub fn render(&self, format: PageFormat) -> Result<String, RenderError> {
        match format {
            PageFormat::Text => Ok(self.render_text()),
            PageFormat::Html => Ok(self.render_html()),
            PageFormat::Json => {
                let report = self.report.as_ref().ok_or(RenderError::MissingReport)?;
                let mut json = report.to_json_pretty()?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    fn render_text(&self) -> String {
        let blocks: Vec<String> = self
            .elements
            .iter()
            .map(|element| match element {
                Element::Title(s) => underline(s, '='),
                Element::Subheader(s) => underline(s, '-'),
                Element::Text(s) => s.clone(),
                Element::Code(s) => s
                    .lines()
                    .map(|line| format!("    {line}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
                Element::Success(s) => format!("[ok] {s}"),
                Element::Info(s) => format!("[info] {s}"),
            })
            .collect();
        let mut out = blocks.join("\n\n");
        out.push('\n');
        out
    }

    fn render_html(&self) -> String {
        let title = self
            .elements
            .iter()
            .find_map(|element| match element {
                Element::Title(s) => Some(s.as_str()),
                _ => None,
            })
            .unwrap_or_default();

        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        out.push_str("</head>\n<body>\n");
        for element in &self.elements {
            let line = match element {
                Element::Title(s) => format!("<h1>{}</h1>", escape_html(s)),
                Element::Text(s) => format!("<p>{}</p>", escape_html(s)),
                Element::Subheader(s) => format!("<h3>{}</h3>", escape_html(s)),
                Element::Code(s) => format!("<pre><code>{}</code></pre>", escape_html(s)),
                Element::Success(s) => {
                    format!("<div class=\"success\">{}</div>", escape_html(s))
                }
                Element::Info(s) => format!("<div class=\"info\">{}</div>", escape_html(s)),
            };
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

fn underline(s: &str, ch: char) -> String {
    let rule: String = std::iter::repeat(ch).take(s.chars().count()).collect();
    format!("{s}\n{rule}")
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("fibonacci_recursive(10)"), "fibonacci_recursive(10)");
    }

    #[test]
    fn underline_counts_chars() {
        assert_eq!(underline("Result:", '-'), "Result:\n-------");
        assert_eq!(underline("é", '='), "é\n=");
    }

    #[test]
    fn empty_page_has_no_report() {
        let page = Page::new();
        assert!(matches!(
            page.render(PageFormat::Json),
            Err(RenderError::MissingReport)
        ));
        assert_eq!(page.render(PageFormat::Text).unwrap(), "\n");
    }

    #[test]
    fn code_block_indents_every_line() {
        let mut page = Page::new();
        page.push(Element::Code("a\nb".to_string()));
        assert_eq!(page.render(PageFormat::Text).unwrap(), "    a\n    b\n");
    }
}
