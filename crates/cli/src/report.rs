use scout_catalogue::Candidate;
use scout_scorer::CategorizedResults;

/// Human-readable tier report. Empty tiers are skipped; when every tier
/// is empty (an empty catalogue) a hint is printed instead, the same
/// fallback the original analyzer page showed.
pub fn render_text_report(results: &CategorizedResults) -> String {
    let mut out = String::new();
    let mut has_results = false;

    for bucket in results.buckets() {
        if bucket.candidates.is_empty() {
            continue;
        }
        has_results = true;

        out.push_str(bucket.label);
        out.push('\n');
        for candidate in &bucket.candidates {
            out.push_str(&format!(
                "  {:<32} {:.2}",
                candidate.display_name, candidate.score
            ));
            if let Some(url) = &candidate.reference_url {
                out.push_str(&format!("  {url}"));
            }
            out.push('\n');
            if let Some(description) = &candidate.description {
                out.push_str(&format!("      {description}\n"));
            }
        }
        out.push('\n');
    }

    if !has_results {
        out.push_str("Couldn't find any matching scrapers. Maybe try pasting the page source?\n");
    }
    out
}

/// Flat candidate listing for the `candidates` subcommand.
pub fn render_candidates(candidates: &[Candidate]) -> String {
    let mut out = String::new();
    for candidate in candidates {
        out.push_str(&candidate.identifier);
        if let Some(url) = &candidate.reference_url {
            out.push_str(&format!("  {url}"));
        }
        out.push('\n');
        if let Some(description) = &candidate.description {
            out.push_str(&format!("    {description}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scout_scorer::RelevanceScorer;

    #[test]
    fn empty_tiers_are_skipped() {
        let scorer = RelevanceScorer::new(vec![Candidate::new("cairns")]);
        let scored = scorer.score_content("no match here");
        let report = render_text_report(&RelevanceScorer::categorize(&scored));

        // Score 0 lands in the bottom tier only.
        assert!(report.contains("Two Chances: Buckley's or None!"));
        assert!(!report.contains("Fair Dinkum"));
        assert!(!report.contains("Heading for Woop Woop"));
    }

    #[test]
    fn empty_catalogue_prints_the_hint() {
        let scored = RelevanceScorer::new(Vec::new()).score_content("anything");
        let report = render_text_report(&RelevanceScorer::categorize(&scored));
        assert_eq!(
            report,
            "Couldn't find any matching scrapers. Maybe try pasting the page source?\n"
        );
    }

    #[test]
    fn report_lists_url_and_description() {
        let scorer = RelevanceScorer::new(vec![Candidate::new("cairns")
            .with_description("Cairns regional council")
            .with_reference_url("https://example.org/cairns")]);
        let scored = scorer.score_content("cairns");
        let report = render_text_report(&RelevanceScorer::categorize(&scored));

        assert!(report.contains("https://example.org/cairns"));
        assert!(report.contains("      Cairns regional council\n"));
    }

    #[test]
    fn candidate_listing_keeps_directory_order() {
        let listing = render_candidates(&[
            Candidate::new("zulu"),
            Candidate::new("alpha").with_reference_url("https://example.org/alpha"),
        ]);
        assert_eq!(listing, "zulu\nalpha  https://example.org/alpha\n");
    }
}
