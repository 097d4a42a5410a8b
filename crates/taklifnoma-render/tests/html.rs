use taklifnoma_core::models::config::TemplateConfig;
use taklifnoma_core::models::invitation::InvitationContent;
use taklifnoma_render::error::RenderError;
use taklifnoma_render::html::render_html;
use taklifnoma_render::render::render;

fn content() -> InvitationContent {
    InvitationContent {
        groom_name: "Jahongir".to_string(),
        bride_name: "Sarvinoz".to_string(),
        wedding_date: "2024-06-15".to_string(),
        custom_message: "Kutib qolamiz".to_string(),
        ..InvitationContent::default()
    }
}

#[test]
fn page_contains_names_and_title() {
    let tree = render(&content(), &TemplateConfig::default());
    let html = render_html(&tree).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Jahongir &amp; Sarvinoz</title>"));
    assert!(html.contains(">Jahongir</span>"));
    assert!(html.contains("15 iyun 2024"));
    assert!(html.contains("Kutib qolamiz"));
}

#[test]
fn user_text_is_escaped() {
    let mut content = content();
    content.custom_message = "<script>alert(1)</script>".to_string();
    let tree = render(&content, &TemplateConfig::default());
    let html = render_html(&tree).unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn omitted_sections_are_not_rendered() {
    let mut content = content();
    content.custom_message.clear();
    let tree = render(&content, &TemplateConfig::default());
    let html = render_html(&tree).unwrap();
    assert!(!html.contains("<blockquote"));
}

#[test]
fn tera_failures_surface_as_render_errors() {
    let err = RenderError::from(tera::Error::msg("missing variable"));
    match err {
        RenderError::TemplateRender(message) => assert!(message.contains("missing variable")),
        RenderError::TemplateParse(message) => panic!("unexpected parse error: {message}"),
    }
}
