// Boolean sentence filter
//
// Sentences are the raw runs of text between '.' characters. Each one is
// tested against the terms with a strict left fold over the connectors:
// `a AND b OR c` means `(a AND b) OR c`, and NOT folds as `AND NOT`.
use crate::types::{SearchSpec, TermCounts};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    pub matched_sentences: Vec<String>,
    pub term_counts: TermCounts,
}

impl FilterOutcome {
    pub fn matched(&self) -> bool {
        !self.matched_sentences.is_empty()
    }
}

/// Splits `text` into sentence units on '.'. Empty units are kept.
pub fn sentence_units(text: &str) -> impl Iterator<Item = &str> {
    text.split('.')
}

/// Evaluates the left-fold inclusion rule for an already lower-cased sentence.
/// `terms` must be lower-cased as well.
pub fn includes(sentence_lower: &str, terms: &[String], spec: &SearchSpec) -> bool {
    let mut present = terms.iter().map(|term| sentence_lower.contains(term.as_str()));
    let Some(first) = present.next() else {
        return false;
    };
    spec.connectors()
        .iter()
        .zip(present)
        .fold(first, |include, (connector, found)| connector.apply(include, found))
}

pub fn filter_text(text: &str, spec: &SearchSpec) -> FilterOutcome {
    let lowered: Vec<String> = spec.terms().iter().map(|t| t.to_lowercase()).collect();
    let mut outcome = FilterOutcome {
        matched_sentences: Vec::new(),
        term_counts: TermCounts::for_terms(spec.terms()),
    };

    for sentence in sentence_units(text) {
        let sentence_lower = sentence.to_lowercase();
        if !includes(&sentence_lower, &lowered, spec) {
            continue;
        }

        outcome.matched_sentences.push(sentence.trim().to_string());
        for (term, term_lower) in spec.terms().iter().zip(&lowered) {
            // a repeated term is counted once per occurrence in the term list
            outcome
                .term_counts
                .add(term, sentence_lower.matches(term_lower.as_str()).count());
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Connector;
    use rstest::rstest;

    fn spec(terms: &[&str], connectors: &[Connector]) -> SearchSpec {
        SearchSpec::new(
            terms.iter().map(|t| t.to_string()).collect(),
            connectors.to_vec(),
        )
        .unwrap()
    }

    fn included(sentence: &str, spec: &SearchSpec) -> bool {
        let lowered: Vec<String> = spec.terms().iter().map(|t| t.to_lowercase()).collect();
        includes(&sentence.to_lowercase(), &lowered, spec)
    }

    #[test]
    fn cats_and_dogs_scenario() {
        let outcome = filter_text(
            "Cats eat fish. Dogs eat meat. Cats and dogs sleep.",
            &spec(&["cats", "dogs"], &[Connector::And]),
        );
        assert!(outcome.matched());
        assert_eq!(outcome.matched_sentences, vec!["Cats and dogs sleep"]);
        assert_eq!(outcome.term_counts["cats"], 1);
        assert_eq!(outcome.term_counts["dogs"], 1);
    }

    #[rstest]
    #[case("alpha only", true)]
    #[case("alpha and beta", false)]
    #[case("beta only", false)]
    #[case("neither", false)]
    fn not_is_and_not(#[case] sentence: &str, #[case] expected: bool) {
        let spec = spec(&["alpha", "beta"], &[Connector::Not]);
        assert_eq!(included(sentence, &spec), expected);
    }

    #[rstest]
    #[case("a b c", true)]
    #[case("a b", true)]
    #[case("a c", true)]
    #[case("b c", true)]
    #[case("c", true)]
    #[case("a", false)]
    #[case("b", false)]
    #[case("", false)]
    fn and_then_or_folds_left(#[case] sentence: &str, #[case] expected: bool) {
        let spec = spec(&["a", "b", "c"], &[Connector::And, Connector::Or]);
        assert_eq!(included(sentence, &spec), expected);
    }

    #[rstest]
    #[case("x z", true)]
    #[case("y z", true)]
    #[case("z", false)]
    #[case("x", false)]
    fn or_then_and_folds_left(#[case] sentence: &str, #[case] expected: bool) {
        // (x OR y) AND z, not x OR (y AND z)
        let spec = spec(&["x", "y", "z"], &[Connector::Or, Connector::And]);
        assert_eq!(included(sentence, &spec), expected);
    }

    #[test]
    fn single_term_is_substring_presence() {
        let outcome = filter_text("No match here. The TRIAL was blinded.", &SearchSpec::single("trial"));
        assert_eq!(outcome.matched_sentences, vec!["The TRIAL was blinded"]);
        assert_eq!(outcome.term_counts["trial"], 1);
    }

    #[test]
    fn matching_ignores_case_but_keeps_original_text() {
        let outcome = filter_text("  Sepsis In ICU patients  .", &SearchSpec::single("SEPSIS"));
        assert_eq!(outcome.matched_sentences, vec!["Sepsis In ICU patients"]);
        assert_eq!(outcome.term_counts["SEPSIS"], 1);
    }

    #[test]
    fn counts_every_term_in_included_sentences() {
        // only the sentence without "rats" is included
        let outcome = filter_text(
            "mice mice and more mice. mice and rats.",
            &spec(&["mice", "rats"], &[Connector::Not]),
        );
        assert_eq!(outcome.matched_sentences.len(), 1);
        assert_eq!(outcome.term_counts["mice"], 3);
        assert_eq!(outcome.term_counts["rats"], 0);
    }

    #[test]
    fn or_counts_the_other_term_when_present() {
        let outcome = filter_text(
            "dogs bark. cats and dogs. birds",
            &spec(&["cats", "dogs"], &[Connector::Or]),
        );
        assert_eq!(outcome.matched_sentences, vec!["dogs bark", "cats and dogs"]);
        assert_eq!(outcome.term_counts["cats"], 1);
        assert_eq!(outcome.term_counts["dogs"], 2);
    }

    #[test]
    fn counts_are_non_overlapping() {
        let outcome = filter_text("aaaa", &SearchSpec::single("aa"));
        assert_eq!(outcome.term_counts["aa"], 2);
    }

    #[test]
    fn counts_accumulate_across_sentences() {
        let outcome = filter_text("gene x. gene y. gene gene", &SearchSpec::single("gene"));
        assert_eq!(outcome.matched_sentences.len(), 3);
        assert_eq!(outcome.term_counts["gene"], 4);
    }

    #[test]
    fn unmatched_text_reports_zero_counts_for_all_terms() {
        let outcome = filter_text("nothing relevant.", &spec(&["a1", "b2"], &[Connector::Or]));
        assert!(!outcome.matched());
        assert_eq!(outcome.term_counts.len(), 2);
        assert!(outcome.term_counts.values().all(|c| c == 0));
    }

    #[test]
    fn empty_term_matches_every_sentence() {
        let outcome = filter_text("One. Two. Three", &SearchSpec::single(""));
        // "One", " Two", " Three": every unit is included, even an empty tail
        assert_eq!(outcome.matched_sentences, vec!["One", "Two", "Three"]);
        let outcome = filter_text("One. Two.", &SearchSpec::single(""));
        assert_eq!(outcome.matched_sentences, vec!["One", "Two", ""]);
    }

    #[test]
    fn text_without_periods_is_one_sentence() {
        let outcome = filter_text("a long line\nacross lines", &SearchSpec::single("across"));
        assert_eq!(outcome.matched_sentences, vec!["a long line\nacross lines"]);
    }
}
