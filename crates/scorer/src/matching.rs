use regex::Regex;

pub(crate) const WORD_BOUNDARY_SCORE: f32 = 0.9;
pub(crate) const SUBSTRING_SCORE: f32 = 0.5;
pub(crate) const DESCRIPTION_WEIGHT: f32 = 0.7;

/// Minimum word length (exclusive) for a description word to be looked
/// up in the page. Shorter words still count in the denominator.
const MIN_DESCRIPTION_WORD_LEN: usize = 3;

/// Page text with its lowercased form computed once per scoring pass.
pub(crate) struct PageText<'a> {
    raw: &'a str,
    lower: String,
}

impl<'a> PageText<'a> {
    pub(crate) fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
        }
    }

    pub(crate) fn raw(&self) -> &str {
        self.raw
    }

    pub(crate) fn lower(&self) -> &str {
        &self.lower
    }
}

/// 0.9 for a whole-word hit, 0.5 for a bare substring hit, else 0.
pub(crate) fn name_score(page: &PageText<'_>, term: &str) -> f32 {
    if word_boundary_match(page.raw(), term) {
        return WORD_BOUNDARY_SCORE;
    }
    if page.lower().contains(&term.to_lowercase()) {
        return SUBSTRING_SCORE;
    }
    0.0
}

/// Case-insensitive match of `term` flanked by word boundaries (the
/// transition between `[letter|digit|_]` and anything else, or a string
/// edge), Unicode-aware.
fn word_boundary_match(content: &str, term: &str) -> bool {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
    // The term is escaped, so the pattern only fails to compile when an
    // absurdly long term blows the size limit; that falls through to
    // the plain substring check in the caller.
    Regex::new(&pattern).is_ok_and(|re| re.is_match(content))
}

/// Share of description words longer than three characters that occur
/// anywhere in the page, scaled to 0.7. The denominator is the total
/// word count, short never-matchable words included, so this is a lossy
/// proxy that tops out below the whole-word name score.
pub(crate) fn description_score(page: &PageText<'_>, description: Option<&str>) -> f32 {
    let Some(description) = description else {
        return 0.0;
    };
    let lowered = description.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }
    let matching = words
        .iter()
        .copied()
        .filter(|word| word.chars().count() > MIN_DESCRIPTION_WORD_LEN && page.lower().contains(*word))
        .count();
    matching as f32 / words.len() as f32 * DESCRIPTION_WEIGHT
}
