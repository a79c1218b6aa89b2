use super::*;

#[test]
fn page_carries_the_three_widget_elements() {
    let html = index_html();
    assert!(html.contains(r#"<div id="chat""#));
    assert!(html.contains(r#"<textarea id="prompt""#));
    assert!(html.contains(r#"<button id="send""#));
}

#[test]
fn page_loads_the_front_end_module() {
    let html = index_html();
    assert!(html.contains(r#"import init from "/pkg/web.js""#));
}

#[test]
fn page_styles_both_roles() {
    let html = index_html();
    assert!(html.contains(".msg.user .bubble"));
    assert!(html.contains(".msg.assistant .bubble"));
}
