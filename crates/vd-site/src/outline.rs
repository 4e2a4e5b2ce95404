//! In-page outline (table of contents) extraction.

use std::collections::{HashMap, HashSet};

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::Serialize;
use vd_config::OutlineLevel;

/// A heading found in a Markdown document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Heading depth (1-6).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Anchor ID for linking.
    pub id: String,
}

/// Keep only headings whose depth is inside `level`, in document order.
pub fn resolve_outline(level: OutlineLevel, headings: &[Heading]) -> Vec<Heading> {
    headings
        .iter()
        .filter(|heading| level.contains(heading.level))
        .cloned()
        .collect()
}

/// Extract every heading of a Markdown document in source order.
///
/// Explicit `{#id}` attributes are kept; other headings get a slug of their
/// text, with the first free `-1`, `-2`, ... suffix appended when the slug is
/// already in use.
pub fn extract_headings(markdown: &str) -> Vec<Heading> {
    let parser = Parser::new_ext(markdown, Options::ENABLE_HEADING_ATTRIBUTES);
    let mut headings = Vec::new();
    let mut ids = HeadingIds::default();
    let mut current: Option<(u8, Option<String>)> = None;
    let mut text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                current = Some((heading_level_to_num(level), id.map(|id| id.to_string())));
                text.clear();
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, explicit_id)) = current.take() {
                    let title = text.trim().to_owned();
                    let id = match explicit_id {
                        Some(id) => ids.reserve(id),
                        None => ids.unique(&title),
                    };
                    headings.push(Heading { level, title, id });
                }
            }
            Event::Text(t) | Event::Code(t) if current.is_some() => text.push_str(&t),
            _ => {}
        }
    }

    headings
}

/// Tracks handed-out IDs so every heading stays linkable.
#[derive(Default)]
struct HeadingIds {
    taken: HashSet<String>,
    counts: HashMap<String, usize>,
}

impl HeadingIds {
    /// Record an explicit `{#id}` as is.
    fn reserve(&mut self, id: String) -> String {
        self.taken.insert(id.clone());
        id
    }

    /// Slug of `text`, suffixed with the next free `-n` when already taken.
    fn unique(&mut self, text: &str) -> String {
        let base_id = slugify(text);
        let count = self.counts.entry(base_id.clone()).or_default();
        let id = loop {
            let candidate = match *count {
                0 => base_id.clone(),
                n => format!("{base_id}-{n}"),
            };
            *count += 1;
            if !self.taken.contains(&candidate) {
                break candidate;
            }
        };
        self.taken.insert(id.clone());
        id
    }
}

/// Convert heading text to an anchor slug.
///
/// Letters and digits of any script are kept (lowercased); runs of spaces,
/// dashes and underscores become a single dash; everything else is dropped.
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true; // Prevents leading dash

    for c in text.trim().chars() {
        if c.is_alphanumeric() {
            result.extend(c.to_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
