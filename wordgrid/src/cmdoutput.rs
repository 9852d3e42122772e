//! Renders search results to the terminal. Grounded directly on the
//! original program's result-printing routine: kanji forms, readings and
//! translations on their own lines, comma-joined, blank line between
//! entries, truncated after a fixed number of results.

use search::ScoredEntry;
use types::Dict;

pub fn print_results(dict: &Dict, results: &[ScoredEntry], query: &str, limit: usize) {
    if results.is_empty() {
        println!("No results for '{query}'");
        return;
    }

    for scored in results.iter().take(limit) {
        let Some(entry) = dict.get(scored.word_id) else {
            continue;
        };

        if !entry.kanji.is_empty() {
            let forms: Vec<&str> = entry.kanji.iter().map(|k| k.expression.as_str()).collect();
            println!("Kanji: {}", forms.join(", "));
        }

        if !entry.readings.is_empty() {
            let readings: Vec<&str> = entry.readings.iter().map(|r| r.reading.as_str()).collect();
            println!("Readings: {}", readings.join(", "));
        }

        let glosses: Vec<&str> = entry
            .senses
            .iter()
            .flat_map(|s| s.glossary.iter())
            .map(|g| g.content.as_str())
            .collect();
        if !glosses.is_empty() {
            println!("Translations: {}", glosses.join(", "));
        }

        println!();
    }
}
