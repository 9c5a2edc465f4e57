use richtext_core::{
    Align, Bullet, BulletKind, RunFormatter, StyleSet, StyledRun, Underline, UnderlineStyle,
};
use richtext_html::{html_to_markdown, HtmlConverter, LIST_ITEM_SPACE_AFTER};
use richtext_markdown::MarkdownConverter;

fn convert(html: &str) -> Vec<StyledRun> {
    HtmlConverter::new().convert(html).expect("conversion")
}

fn style_of(run: &StyledRun) -> StyleSet {
    run.style.clone().unwrap_or_default()
}

#[test]
fn paragraph_with_bold_text() {
    assert_eq!(
        convert("<p><strong>Hi</strong></p>"),
        vec![StyledRun::styled("Hi\n", StyleSet::bold())]
    );
}

#[test]
fn ordered_list_items() {
    let number = StyleSet {
        bullet: Some(Bullet::new(BulletKind::Number)),
        indent_level: Some(0),
        para_space_after: Some(LIST_ITEM_SPACE_AFTER),
        ..StyleSet::default()
    };
    assert_eq!(
        convert("<ol><li>One</li><li>Two</li></ol>"),
        vec![
            StyledRun::styled("One", number.clone()),
            StyledRun::plain("\n"),
            StyledRun::styled("Two", number),
            StyledRun::plain("\n"),
        ]
    );
}

#[test]
fn style_inherits_down_but_not_across() {
    let runs = convert("<strong>out <em>X</em> after</strong>");
    let x = runs.iter().find(|r| r.text == "X").expect("run for X");
    assert_eq!(style_of(x).bold, Some(true));
    assert_eq!(style_of(x).italic, Some(true));

    for text in ["out ", " after"] {
        let run = runs.iter().find(|r| r.text == text).expect("sibling run");
        assert_eq!(style_of(run).bold, Some(true));
        assert_eq!(style_of(run).italic, None);
    }
}

#[test]
fn nested_list_is_one_level_deeper() {
    let runs = convert("<ul><li>A<ul><li>B</li></ul></li></ul>");
    let a = runs.iter().find(|r| r.text == "A").expect("run for A");
    let b = runs.iter().find(|r| r.text == "B").expect("run for B");

    assert_eq!(style_of(a).indent_level, Some(0));
    assert!(style_of(a).bullet.is_some());
    assert_eq!(style_of(b).indent_level, Some(1));
}

#[test]
fn text_order_is_preserved() {
    let html = "<h1>Title</h1><p>One <b>two</b> and <i>three</i></p>\
                <ul><li>four</li><li>five<ol><li>six</li></ol></li></ul><p>seven</p>";
    let runs = convert(html);
    let text: String = runs
        .iter()
        .flat_map(|r| r.text.chars())
        .filter(|c| !c.is_whitespace())
        .collect();
    assert_eq!(text, "TitleOnetwoandthreefourfivesixseven");
}

#[test]
fn quill_document() {
    let html = concat!(
        r#"<h2>Agenda</h2>"#,
        r#"<p class="ql-align-center"><span style="font-size: 24pt;">Big</span> <u>deal</u></p>"#,
        r#"<ol><li data-list="bullet"><span class="ql-ui" contenteditable="false"></span>Intro</li>"#,
        r#"<li data-list="ordered" class="ql-indent-1"><span class="ql-ui" contenteditable="false"></span>Details</li></ol>"#,
        r#"<p><br></p>"#,
    );
    let runs = HtmlConverter::for_quill().convert(html).expect("conversion");
    let font = Some("Arial Unicode MS".to_string());

    assert_eq!(runs[0].text, "Agenda");
    assert_eq!(style_of(&runs[0]).para_space_after, Some(12));
    assert_eq!(style_of(&runs[0]).font_face, font);

    assert_eq!(runs[1].text, "Big");
    assert_eq!(style_of(&runs[1]).font_size, Some(24.0));
    assert_eq!(style_of(&runs[1]).align, Some(Align::Center));

    // Whitespace-only text between inline elements is not emitted.
    assert_eq!(
        runs[2],
        StyledRun::styled(
            "deal\n",
            StyleSet {
                underline: Some(Underline::styled(UnderlineStyle::Heavy)),
                align: Some(Align::Center),
                font_face: font.clone(),
                ..StyleSet::default()
            }
        )
    );

    assert_eq!(runs[3].text, "Intro");
    assert_eq!(
        style_of(&runs[3]).bullet,
        Some(Bullet::new(BulletKind::Bullet))
    );
    assert_eq!(runs[4], StyledRun::plain("\n"));
    assert_eq!(runs[5].text, "Details");
    assert_eq!(
        style_of(&runs[5]).bullet,
        Some(Bullet::new(BulletKind::Number))
    );
    assert_eq!(style_of(&runs[5]).indent_level, Some(1));
    assert_eq!(runs[6], StyledRun::plain("\n\n\n"));
    assert_eq!(runs.len(), 7);
}

#[test]
fn bridge_feeds_markdown_pipeline() {
    let markdown =
        html_to_markdown("<p>This is <strong>bold</strong> and <em>italic</em>.</p>").unwrap();
    assert_eq!(markdown, "This is **bold** and *italic*.");

    let runs = MarkdownConverter::new().convert(&markdown);
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
fn formatted_runs_parse_as_json() {
    let runs = convert("<p><b>a</b><br><span style=\"font-size:9pt\">b</span></p><ul><li>c</li></ul>");
    let formatted = RunFormatter::new().format(&runs).unwrap();

    let value: serde_json::Value = serde_json::from_str(&formatted).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(runs.len()));
    assert_eq!(RunFormatter::parse(&formatted).unwrap(), runs);
}
