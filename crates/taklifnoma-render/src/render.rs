use taklifnoma_core::models::config::{LayoutStyle, TemplateConfig};
use taklifnoma_core::models::invitation::InvitationContent;

use crate::style::{StyleDescriptor, compute_style};
use crate::tree::{InfoKind, Section, TextNode, VisualTree};

pub const HEADER_LABEL: &str = "Taklifnoma";
pub const NAME_SEPARATOR: &str = "&";
pub const DRESS_CODE_LABEL: &str = "Kiyinish qoidasi";
pub const RSVP_DEADLINE_LABEL: &str = "Javob berish muddati";
pub const ADDITIONAL_INFO_LABEL: &str = "Qo'shimcha ma'lumot";

const MONTHS_UZ: [&str; 12] = [
    "yanvar", "fevral", "mart", "aprel", "may", "iyun", "iyul", "avgust", "sentabr", "oktabr",
    "noyabr", "dekabr",
];

/// Render invitation content with a template config.
///
/// Optional fields that are absent or blank drop their section entirely.
/// Neither input is modified and equal inputs give equal trees.
pub fn render(content: &InvitationContent, config: &TemplateConfig) -> VisualTree {
    let style = compute_style(config);
    let colors = &config.colors;
    let fonts = &style.fonts;
    let (divider_glyph, footer_glyph) = ornaments(config.layout.style);

    let mut sections = vec![
        Section::Header {
            label: TextNode::new(HEADER_LABEL, &fonts.caption, &colors.secondary),
        },
        Section::Names {
            first: TextNode::new(content.groom_name.trim(), &fonts.heading, &colors.primary)
                .with_typography(&style.text),
            separator: TextNode::new(NAME_SEPARATOR, &fonts.accent, &colors.accent),
            second: TextNode::new(content.bride_name.trim(), &fonts.heading, &colors.primary)
                .with_typography(&style.text),
        },
        Section::Divider {
            glyph: divider_glyph.to_string(),
            color: colors.accent.clone(),
        },
        Section::DateTime {
            date: TextNode::new(display_date(&content.wedding_date), &fonts.body, &colors.primary),
            time: present(&content.wedding_time)
                .map(|t| TextNode::new(t, &fonts.body, &colors.secondary)),
        },
    ];

    if let Some(venue) = venue_section(content, &style, config) {
        sections.push(venue);
    }

    if !is_blank(&content.custom_message) {
        sections.push(Section::Message {
            text: TextNode::new(content.custom_message.as_str(), &fonts.body, &colors.text)
                .italic(),
        });
    }

    let infos = [
        (InfoKind::DressCode, DRESS_CODE_LABEL, content.dress_code.as_deref()),
        (
            InfoKind::RsvpDeadline,
            RSVP_DEADLINE_LABEL,
            content.rsvp_deadline.as_deref(),
        ),
        (
            InfoKind::AdditionalInfo,
            ADDITIONAL_INFO_LABEL,
            content.additional_info.as_deref(),
        ),
    ];
    for (info, label, value) in infos {
        let Some(value) = value.and_then(present) else {
            continue;
        };
        let text = match info {
            InfoKind::RsvpDeadline => display_date(value),
            _ => value.to_string(),
        };
        sections.push(Section::Info {
            info,
            label: TextNode::new(label, &fonts.caption, &colors.secondary),
            text: TextNode::new(text, &fonts.body, &colors.text),
        });
    }

    sections.push(Section::Footer {
        glyph: footer_glyph.to_string(),
        color: colors.accent.clone(),
    });

    VisualTree { style, sections }
}

fn venue_section(
    content: &InvitationContent,
    style: &StyleDescriptor,
    config: &TemplateConfig,
) -> Option<Section> {
    let colors = &config.colors;
    let body = &style.fonts.body;

    let name = present(&content.venue).map(|v| TextNode::new(v, body, &colors.primary));

    let mut address = Vec::new();
    if let Some(line) = present(&content.address) {
        address.push(TextNode::new(line, body, &colors.secondary));
    }
    let locality = [
        content.city.as_deref(),
        content.state.as_deref(),
        content.postal_code.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter_map(present)
    .collect::<Vec<_>>()
    .join(", ");
    if !locality.is_empty() {
        address.push(TextNode::new(locality, body, &colors.secondary));
    }

    if name.is_none() && address.is_empty() {
        return None;
    }
    Some(Section::Venue { name, address })
}

/// (divider, footer) glyphs for a layout style.
fn ornaments(style: LayoutStyle) -> (&'static str, &'static str) {
    match style {
        LayoutStyle::Classic => ("❦", "♥"),
        LayoutStyle::Modern => ("―", "·"),
        LayoutStyle::Elegant => ("✦", "❀"),
        LayoutStyle::Rustic => ("❀", "🌿"),
        LayoutStyle::Luxury => ("◆", "♛"),
        LayoutStyle::Minimalist => ("·", "·"),
        LayoutStyle::Artistic => ("✿", "✿"),
        LayoutStyle::Vintage => ("❧", "☙"),
    }
}

/// ISO dates become `15 iyun 2024`; anything else is shown as typed.
pub fn display_date(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.parse::<jiff::civil::Date>() {
        Ok(date) => {
            let month = MONTHS_UZ[(date.month() - 1) as usize];
            format!("{} {month} {}", date.day(), date.year())
        }
        Err(_) => trimmed.to_string(),
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
