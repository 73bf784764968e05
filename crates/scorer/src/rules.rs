use crate::matching::PageText;

pub(crate) const OVERRIDE_SCORE: f32 = 1.0;

/// How an override signature is searched for in the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SignatureKind {
    Exact,
    /// Signature must be stored lowercase; it is matched against the
    /// lowercased page.
    CaseInsensitive,
}

/// A known site signature that forces a perfect score for one specific
/// candidate. Rules are checked in order and the first hit wins.
struct OverrideRule {
    signature: &'static str,
    kind: SignatureKind,
    term: &'static str,
}

const OVERRIDE_RULES: [OverrideRule; 3] = [
    OverrideRule {
        signature: "/civica.jquery.",
        kind: SignatureKind::Exact,
        term: "civica",
    },
    OverrideRule {
        signature: "planbuild tasmania",
        kind: SignatureKind::CaseInsensitive,
        term: "planbuild",
    },
    OverrideRule {
        signature: "/ePathway/",
        kind: SignatureKind::Exact,
        term: "epathway_scraper",
    },
];

impl OverrideRule {
    fn applies(&self, page: &PageText<'_>, term: &str) -> bool {
        if term != self.term {
            return false;
        }
        match self.kind {
            SignatureKind::Exact => page.raw().contains(self.signature),
            SignatureKind::CaseInsensitive => page.lower().contains(self.signature),
        }
    }
}

/// The forced score for the first override rule matching this page and
/// match term, if any.
pub(crate) fn override_score(page: &PageText<'_>, term: &str) -> Option<f32> {
    OVERRIDE_RULES
        .iter()
        .find(|rule| rule.applies(page, term))
        .map(|rule| {
            log::debug!("override signature {:?} fired for '{}'", rule.signature, term);
            OVERRIDE_SCORE
        })
}
