use super::mapping::{section_for_normalized, DraftSection};
use super::normalizer::normalize_heading;
use crate::rubric::{FigureRef, PatentDocumentView};
use std::collections::HashMap;

const FIGURE_PREFIXES: &[&str] = &["figure", "figs.", "fig.", "fig"];
const FIGURE_VERBS: &[&str] = &["is ", "illustrates ", "shows ", "depicts "];

/// Section bodies keyed by the heading that introduced them.
#[derive(Debug, Default)]
pub(crate) struct ParsedDraft {
    sections: HashMap<DraftSection, Vec<String>>,
}

impl ParsedDraft {
    pub(crate) fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn text(&self, section: DraftSection) -> String {
        self.sections
            .get(&section)
            .map(|lines| lines.join("\n").trim().to_string())
            .unwrap_or_default()
    }

    pub(crate) fn into_document(self) -> PatentDocumentView {
        let claims = split_claims(&self.text(DraftSection::Claims));
        let figures = extract_figures(&self.text(DraftSection::BriefDrawings));

        PatentDocumentView {
            title: self.text(DraftSection::Title),
            background: self.text(DraftSection::Background),
            summary: self.text(DraftSection::Summary),
            detailed_description: self.text(DraftSection::DetailedDescription),
            claims,
            figures,
            abstract_text: self.text(DraftSection::Abstract),
        }
    }
}

/// Splits a plain-text or markdown draft on its recognized headings.
///
/// Text before the first heading is dropped. A repeated heading appends to
/// the section it names.
pub(crate) fn parse_sections(text: &str) -> ParsedDraft {
    let mut parsed = ParsedDraft::default();
    let mut current: Option<DraftSection> = None;

    for line in text.lines() {
        if let Some((section, inline)) = detect_heading(line) {
            current = Some(section);
            let body = parsed.sections.entry(section).or_default();
            if let Some(content) = inline {
                body.push(content.to_string());
            }
            continue;
        }

        if let Some(section) = current {
            parsed
                .sections
                .entry(section)
                .or_default()
                .push(line.to_string());
        }
    }

    parsed
}

fn detect_heading(line: &str) -> Option<(DraftSection, Option<&str>)> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(section) = section_for_normalized(&normalize_heading(trimmed)) {
        return Some((section, None));
    }

    // Only the title carries its content on the heading line, as in
    // "Title: Adaptive Widget". "Summary: ..." inside a body stays prose.
    let (label, rest) = trimmed.split_once(':')?;
    let section = section_for_normalized(&normalize_heading(label))
        .filter(|section| *section == DraftSection::Title)?;
    let rest = rest.trim_start_matches(['*', '_']).trim();
    Some((section, (!rest.is_empty()).then_some(rest)))
}

fn is_claim_start(line: &str) -> bool {
    let trimmed = line.trim_start();
    let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
    digits > 0 && trimmed[digits..].starts_with('.')
}

pub(crate) fn split_claims(section: &str) -> Vec<String> {
    let mut claims = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in section.lines() {
        if is_claim_start(line) {
            if !current.is_empty() {
                claims.push(current.join("\n"));
                current.clear();
            }
            current.push(line.trim());
        } else if !current.is_empty() && !line.trim().is_empty() {
            current.push(line.trim());
        }
    }

    if !current.is_empty() {
        claims.push(current.join("\n"));
    }

    claims
}

pub(crate) fn extract_figures(section: &str) -> Vec<FigureRef> {
    section
        .lines()
        .filter_map(figure_title)
        .map(FigureRef::new)
        .collect()
}

fn figure_title(line: &str) -> Option<String> {
    let trimmed = line.trim().trim_start_matches(['-', '*']).trim_start();
    let prefix = FIGURE_PREFIXES.iter().find(|prefix| {
        trimmed
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })?;

    let rest = trimmed[prefix.len()..].trim_start();
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = &rest[digits..];

    // Sub-figure suffix such as "1A".
    let rest = rest
        .strip_prefix(|c: char| c.is_ascii_uppercase())
        .filter(|after| !after.starts_with(char::is_alphabetic))
        .unwrap_or(rest);

    let mut title = rest.trim_start_matches(|c: char| {
        c.is_whitespace() || matches!(c, '-' | ':' | '.' | ')' | '\u{2013}' | '\u{2014}')
    });
    for verb in FIGURE_VERBS {
        if title
            .get(..verb.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(verb))
        {
            title = &title[verb.len()..];
            break;
        }
    }

    Some(title.trim().trim_end_matches('.').trim().to_string())
}

#[cfg(test)]
pub(crate) fn figure_title_for_tests(line: &str) -> Option<String> {
    figure_title(line)
}
