//! Standalone HTML page for the public guest view.

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::RenderError;
use crate::tree::{Section, TextNode, VisualTree};

const PAGE_NAME: &str = "invitation.html";

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="uz">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{ title }}</title>
<style>
body { margin: 0; min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #f3f4f6; }
.card { box-sizing: border-box; width: 100%; max-width: 640px; display: flex; }
.header { font-size: 0.85rem; letter-spacing: 0.3em; text-transform: uppercase; margin: 0; }
.names { margin: 0; font-size: 2.5rem; }
.names .separator { display: block; font-size: 1.75rem; }
.ornament { font-size: 1.5rem; margin: 0; }
.date, .venue, .info { margin: 0; }
.message { margin: 0; font-size: 1.1rem; }
.message::before { content: "\201C"; }
.message::after { content: "\201D"; }
.label { display: block; font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.15em; }
@keyframes taklif-fade { from { opacity: 0; } to { opacity: 1; } }
@keyframes taklif-slide { from { transform: translateY(24px); opacity: 0; } to { transform: none; opacity: 1; } }
@keyframes taklif-scale { from { transform: scale(0.9); opacity: 0; } to { transform: none; opacity: 1; } }
@keyframes taklif-bounce { 0% { transform: translateY(-16px); } 60% { transform: translateY(4px); } 100% { transform: none; } }
@keyframes taklif-rotate { from { transform: rotate(-4deg); opacity: 0; } to { transform: none; opacity: 1; } }
@keyframes taklif-flip { from { transform: perspective(800px) rotateY(90deg); } to { transform: none; } }
</style>
</head>
<body>
<main class="card" style="{{ container_css }}">
{%- for section in sections %}
{%- if section.kind == "header" %}
<p class="header" style="{{ section.nodes.0.css }}">{{ section.nodes.0.text }}</p>
{%- elif section.kind == "names" %}
<h1 class="names"><span style="{{ section.nodes.0.css }}">{{ section.nodes.0.text }}</span><span class="separator" style="{{ section.nodes.1.css }}">{{ section.nodes.1.text }}</span><span style="{{ section.nodes.2.css }}">{{ section.nodes.2.text }}</span></h1>
{%- elif section.kind == "ornament" %}
<p class="ornament" aria-hidden="true" style="color: {{ section.color }}">{{ section.glyph }}</p>
{%- elif section.kind == "date_time" or section.kind == "venue" %}
<p class="{{ section.class }}">{% for node in section.nodes %}<span style="display: block; {{ node.css }}">{{ node.text }}</span>{% endfor %}</p>
{%- elif section.kind == "message" %}
<blockquote class="message" style="{{ section.nodes.0.css }}">{{ section.nodes.0.text }}</blockquote>
{%- elif section.kind == "info" %}
<p class="info"><span class="label" style="{{ section.nodes.0.css }}">{{ section.nodes.0.text }}</span><span style="{{ section.nodes.1.css }}">{{ section.nodes.1.text }}</span></p>
{%- endif %}
{%- endfor %}
</main>
</body>
</html>
"#;

#[derive(Serialize)]
struct NodeView {
    text: String,
    css: String,
}

impl From<&TextNode> for NodeView {
    fn from(node: &TextNode) -> Self {
        NodeView {
            text: node.text.clone(),
            css: node.css(),
        }
    }
}

#[derive(Serialize)]
struct SectionView {
    kind: &'static str,
    class: &'static str,
    nodes: Vec<NodeView>,
    glyph: String,
    color: String,
}

impl SectionView {
    fn text(kind: &'static str, class: &'static str, nodes: Vec<&TextNode>) -> Self {
        SectionView {
            kind,
            class,
            nodes: nodes.into_iter().map(NodeView::from).collect(),
            glyph: String::new(),
            color: String::new(),
        }
    }

    fn ornament(glyph: &str, color: &str) -> Self {
        SectionView {
            kind: "ornament",
            class: "ornament",
            nodes: Vec::new(),
            glyph: glyph.to_string(),
            color: color.to_string(),
        }
    }
}

fn section_view(section: &Section) -> SectionView {
    match section {
        Section::Header { label } => SectionView::text("header", "header", vec![label]),
        Section::Names {
            first,
            separator,
            second,
        } => SectionView::text("names", "names", vec![first, separator, second]),
        Section::Divider { glyph, color } | Section::Footer { glyph, color } => {
            SectionView::ornament(glyph, color)
        }
        Section::DateTime { date, time } => {
            let mut nodes = vec![date];
            nodes.extend(time.iter());
            SectionView::text("date_time", "date", nodes)
        }
        Section::Venue { name, address } => {
            let nodes = name.iter().chain(address.iter()).collect();
            SectionView::text("venue", "venue", nodes)
        }
        Section::Message { text } => SectionView::text("message", "message", vec![text]),
        Section::Info { label, text, .. } => SectionView::text("info", "info", vec![label, text]),
    }
}

/// Page title, e.g. `Jahongir & Sarvinoz`.
fn title(tree: &VisualTree) -> String {
    tree.sections
        .iter()
        .find_map(|s| match s {
            Section::Names {
                first,
                separator,
                second,
            } => Some(format!("{} {} {}", first.text, separator.text, second.text)),
            _ => None,
        })
        .unwrap_or_else(|| "Taklifnoma".to_string())
}

/// Render a visual tree as a complete HTML document. User text is escaped.
pub fn render_html(tree: &VisualTree) -> Result<String, RenderError> {
    let mut tera = Tera::default();
    tera.add_raw_template(PAGE_NAME, PAGE)
        .map_err(|e| RenderError::TemplateParse(e.to_string()))?;

    let sections: Vec<SectionView> = tree.sections.iter().map(section_view).collect();

    let mut context = Context::new();
    context.insert("title", &title(tree));
    context.insert("container_css", &tree.style.container_css());
    context.insert("sections", &sections);

    let rendered = tera.render(PAGE_NAME, &context)?;
    tracing::debug!(bytes = rendered.len(), "rendered invitation page");
    Ok(rendered)
}
