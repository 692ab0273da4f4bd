use std::path::Path;
use std::process;

use serde::Serialize;

use kb_core::settings::settings;
use kb_core::suggest::{SuggestionProvider, SuggestionTrie, WeightedTerm};
use kb_session::{KeyboardSession, SessionConfig};

use crate::vocab_source::{read_language, read_vocabulary};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Serialize)]
struct QueryResult<'a> {
    prefix: &'a str,
    suggestions: Vec<WeightedTerm>,
}

/// Ranked suggestions for each prefix, paired with their stored weights.
fn run_queries<'a>(trie: &SuggestionTrie, prefixes: &'a [String]) -> Vec<QueryResult<'a>> {
    prefixes
        .iter()
        .map(|p| QueryResult {
            prefix: p,
            suggestions: trie
                .suggestions_for_prefix(p)
                .into_iter()
                .filter_map(|term| {
                    let weight = trie.store().find_node(&term)?.weight()?;
                    Some(WeightedTerm::new(term, weight))
                })
                .collect(),
        })
        .collect()
}

fn load_trie(vocab_file: &str, limit: Option<usize>) -> SuggestionTrie {
    let terms = die!(
        read_vocabulary(Path::new(vocab_file)),
        "Error reading {vocab_file}: {}"
    );
    let mut trie =
        SuggestionTrie::with_max_results(limit.or(settings().suggestions.max_results));
    die!(
        trie.load_weighted_terms(&terms),
        "Error loading {vocab_file}: {}"
    );
    trie
}

pub fn query(vocab_file: &str, prefixes: &[String], limit: Option<usize>, json: bool) {
    let trie = load_trie(vocab_file, limit);
    let results = run_queries(&trie, prefixes);

    if json {
        let out = die!(serde_json::to_string_pretty(&results), "Error: {}");
        println!("{out}");
        return;
    }
    for r in &results {
        if r.suggestions.is_empty() {
            println!("{}\t(none)", r.prefix);
        } else {
            let terms: Vec<&str> = r.suggestions.iter().map(|t| t.term.as_str()).collect();
            println!("{}\t{}", r.prefix, terms.join(" "));
        }
    }
}

pub fn stats(vocab_file: &str) {
    let terms = die!(
        read_vocabulary(Path::new(vocab_file)),
        "Error reading {vocab_file}: {}"
    );
    let mut trie = SuggestionTrie::new();
    die!(
        trie.load_weighted_terms(&terms),
        "Error loading {vocab_file}: {}"
    );
    let store = trie.store();
    println!("entries:        {}", terms.len());
    println!("distinct terms: {}", store.len());
    println!("tree nodes:     {}", store.node_count());
}

/// Type `text` one character at a time and print the suggestion bar after
/// each keystroke.
pub fn simulate(vocab_file: &str, text: &str) {
    let language = die!(
        read_language(Path::new(vocab_file)),
        "Error reading {vocab_file}: {}"
    );
    let provider = SuggestionTrie::from_settings(settings());
    let mut session = die!(
        KeyboardSession::with_provider(
            Box::new(provider),
            vec![language],
            SessionConfig::from_settings(settings()),
        ),
        "Error loading {vocab_file}: {}"
    );

    let mut typed = String::new();
    for ch in text.chars() {
        typed.push(ch);
        let update = session.refresh(&typed);
        let word = update.word.as_deref().unwrap_or("-");
        println!("{typed:?}\t{word}\t{}", update.suggestions.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie() -> SuggestionTrie {
        let mut trie = SuggestionTrie::new();
        trie.load_weighted_terms(&[
            WeightedTerm::new("cat", 10),
            WeightedTerm::new("car", 20),
            WeightedTerm::new("cart", 5),
        ])
        .unwrap();
        trie
    }

    #[test]
    fn results_carry_weights_in_rank_order() {
        let trie = trie();
        let prefixes = vec!["ca".to_string(), "x".to_string()];
        let results = run_queries(&trie, &prefixes);
        assert_eq!(
            results[0].suggestions,
            vec![
                WeightedTerm::new("car", 20),
                WeightedTerm::new("cat", 10),
                WeightedTerm::new("cart", 5),
            ]
        );
        assert!(results[1].suggestions.is_empty());
    }

    #[test]
    fn json_output_shape() {
        let trie = trie();
        let prefixes = vec!["cart".to_string()];
        let json = serde_json::to_value(run_queries(&trie, &prefixes)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "prefix": "cart", "suggestions": [{ "term": "cart", "weight": 5 }] }
            ])
        );
    }
}
