use richtext_core::{StyleSet, StyledRun, UnderlineStyle};
use richtext_markdown::MarkdownConverter;

#[test]
fn bold_and_italic_sentence() {
    let runs = MarkdownConverter::new().convert("This is **bold** and *italic*.");
    assert_eq!(
        runs,
        vec![
            StyledRun::plain("This is "),
            StyledRun::styled("bold", StyleSet::bold()),
            StyledRun::plain(" and "),
            StyledRun::styled("italic", StyleSet::italic()),
            StyledRun::plain("."),
        ]
    );
}

#[test]
fn empty_document() {
    assert_eq!(MarkdownConverter::new().convert(""), Vec::<StyledRun>::new());
}

#[test]
fn blank_line_produces_two_breaks() {
    let runs = MarkdownConverter::new().convert("A\n\nB");
    assert_eq!(
        runs,
        vec![
            StyledRun::plain("A"),
            StyledRun::line_break(),
            StyledRun::line_break(),
            StyledRun::plain("B"),
        ]
    );
}

#[test]
fn sample_document() {
    let sample = "This is **bold text**, and this is *italic text*.\n\n\
                  Here's some ~~strikethrough~~ text and <u>underlined</u> text.\n\n\
                  Multiple lines\nwith breaks";
    let runs = MarkdownConverter::new().convert(sample);

    assert_eq!(
        runs,
        vec![
            StyledRun::plain("This is "),
            StyledRun::styled("bold text", StyleSet::bold()),
            StyledRun::plain(", and this is "),
            StyledRun::styled("italic text", StyleSet::italic()),
            StyledRun::plain("."),
            StyledRun::line_break(),
            StyledRun::line_break(),
            StyledRun::plain("Here's some "),
            StyledRun::styled("strikethrough", StyleSet::strike()),
            StyledRun::plain(" text and "),
            StyledRun::styled("underlined", StyleSet::underline(UnderlineStyle::Heavy)),
            StyledRun::plain(" text."),
            StyledRun::line_break(),
            StyledRun::line_break(),
            StyledRun::plain("Multiple lines"),
            StyledRun::line_break(),
            StyledRun::plain("with breaks"),
        ]
    );
}
