//! WASM-compatible wrapper for rich text conversion.
//!
//! This crate exposes the converters to JavaScript so browser editors can
//! turn their content into slide text runs without a server round trip.

use richtext_core::{FormatStyle, MarkdownNormalizer, RunFormatter, StyledRun};
use richtext_html::{html_to_markdown_with, HtmlConverter};
use richtext_markdown::MarkdownConverter;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| js_error(format!("Serialization error: {}", e)))
}

fn js_error(message: impl AsRef<str>) -> JsValue {
    js_sys::Error::new(message.as_ref()).into()
}

/// Convert Markdown-style text into an array of `{ text, options }` runs.
#[wasm_bindgen]
pub fn convert_markdown(text: &str) -> Result<JsValue, JsValue> {
    to_js(&convert_markdown_impl(text))
}

fn convert_markdown_impl(text: &str) -> Vec<StyledRun> {
    MarkdownConverter::new().convert(text)
}

/// Convert editor HTML into runs by walking its element tree.
///
/// # Arguments
/// * `html` - The HTML fragment
/// * `quill` - Apply Quill defaults such as the multi-script font fallback
#[wasm_bindgen]
pub fn convert_html(html: &str, quill: bool) -> Result<JsValue, JsValue> {
    let runs = convert_html_impl(html, quill).map_err(js_error)?;
    to_js(&runs)
}

fn convert_html_impl(html: &str, quill: bool) -> Result<Vec<StyledRun>, String> {
    let converter = if quill {
        HtmlConverter::for_quill()
    } else {
        HtmlConverter::new()
    };
    converter
        .convert(html)
        .map_err(|e| format!("HTML conversion error: {}", e))
}

/// Convert editor HTML into runs by way of Markdown.
#[wasm_bindgen]
pub fn convert_html_via_markdown(html: &str, preserve_line_breaks: bool) -> Result<JsValue, JsValue> {
    let runs = convert_html_via_markdown_impl(html, preserve_line_breaks).map_err(js_error)?;
    to_js(&runs)
}

fn convert_html_via_markdown_impl(
    html: &str,
    preserve_line_breaks: bool,
) -> Result<Vec<StyledRun>, String> {
    let markdown = html_to_markdown_impl(html, preserve_line_breaks)?;
    Ok(MarkdownConverter::new().convert(&markdown))
}

/// Render editor HTML as Markdown-style text.
#[wasm_bindgen]
pub fn html_to_markdown(html: &str, preserve_line_breaks: bool) -> Result<String, JsValue> {
    html_to_markdown_impl(html, preserve_line_breaks).map_err(js_error)
}

fn html_to_markdown_impl(html: &str, preserve_line_breaks: bool) -> Result<String, String> {
    let normalizer = MarkdownNormalizer::new().with_preserve_line_breaks(preserve_line_breaks);
    html_to_markdown_with(html, &normalizer).map_err(|e| format!("HTML parsing error: {}", e))
}

/// Render runs as text.
///
/// # Arguments
/// * `runs` - Array of `{ text, options }` runs
/// * `style` - `"json"` or `"literal"`
#[wasm_bindgen]
pub fn format_runs(runs: JsValue, style: &str) -> Result<String, JsValue> {
    let runs: Vec<StyledRun> = serde_wasm_bindgen::from_value(runs)
        .map_err(|e| js_error(format!("Invalid runs array: {}", e)))?;

    format_runs_impl(&runs, style).map_err(js_error)
}

fn format_runs_impl(runs: &[StyledRun], style: &str) -> Result<String, String> {
    let style = match style {
        "json" => FormatStyle::Json,
        "literal" => FormatStyle::Literal,
        other => return Err(format!("Unknown format style: {}", other)),
    };

    RunFormatter::new()
        .with_style(style)
        .format(runs)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use richtext_core::StyleSet;

    #[test]
    fn test_convert_markdown() {
        let runs = convert_markdown_impl("**Hello** world");
        assert_eq!(
            runs,
            vec![
                StyledRun::styled("Hello", StyleSet::bold()),
                StyledRun::plain(" world"),
            ]
        );
    }

    #[test]
    fn test_convert_html_quill_font() {
        let runs = convert_html_impl("<p>x</p>", true).unwrap();
        assert_eq!(
            runs[0].style.as_ref().and_then(|s| s.font_face.as_deref()),
            Some("Arial Unicode MS")
        );

        let runs = convert_html_impl("<p>x</p>", false).unwrap();
        assert_eq!(runs, vec![StyledRun::plain("x\n")]);
    }

    #[test]
    fn test_html_via_markdown() {
        let runs = convert_html_via_markdown_impl("<p><em>a</em> b</p>", false).unwrap();
        assert_eq!(
            runs,
            vec![
                StyledRun::styled("a", StyleSet::italic()),
                StyledRun::plain(" b"),
            ]
        );
    }

    #[test]
    fn test_html_to_markdown_line_breaks() {
        let html = "<p>one</p><p>two</p>";
        assert_eq!(html_to_markdown_impl(html, false).unwrap(), "one two");
        assert_eq!(html_to_markdown_impl(html, true).unwrap(), "one\n\ntwo");
    }

    #[test]
    fn test_format_runs() {
        let runs = vec![StyledRun::styled("Hi", StyleSet::bold())];
        let literal = format_runs_impl(&runs, "literal").unwrap();
        assert!(literal.contains("text: \"Hi\""));
        assert!(literal.contains("bold: true"));

        let json = format_runs_impl(&runs, "json").unwrap();
        assert!(json.contains("\"options\""));
    }

    #[test]
    fn test_deep_html_reports_error() {
        let html = format!("{}x{}", "<span>".repeat(2000), "</span>".repeat(2000));
        let err = convert_html_impl(&html, false).unwrap_err();
        assert!(err.contains("nesting too deep"));
    }

    #[test]
    fn test_format_runs_unknown_style() {
        assert!(format_runs_impl(&[], "yaml").is_err());
    }
}
