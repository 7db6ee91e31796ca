//! Display functions for the puzzle report

use crate::core::PuzzleConstraints;
use crate::solver::ResultSet;
use colored::Colorize;

/// Print the prefilter summary before the oracle runs
pub fn print_prefilter_summary(candidates: usize, base_words: usize) {
    println!(
        "Prefiltered candidates: {} (from {} base words)",
        candidates.to_string().bright_yellow().bold(),
        base_words
    );
    println!("Validating with hunspell...");
}

/// Print the final report for a solved puzzle
pub fn print_report(constraints: &PuzzleConstraints, results: &ResultSet, top_words: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Allowed letters : {}",
        constraints.letters().bright_yellow().bold()
    );
    println!(
        "Mandatory letter: {}",
        char::from(constraints.mandatory())
            .to_string()
            .bright_yellow()
            .bold()
    );
    println!(
        "Valid words     : {}",
        results.valid_words.len().to_string().bright_yellow().bold()
    );

    println!("\n{}", "Exact 7-letter pangrams:".bright_cyan().bold());
    if results.pangrams_7_exact.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for word in &results.pangrams_7_exact {
        println!("  {}", word.green());
    }

    if !results.valid_words.is_empty() {
        println!(
            "\nLongest word length: {}",
            results.max_len.to_string().bright_yellow().bold()
        );
        println!("{}", "Longest word(s):".bright_cyan().bold());
        for word in &results.longest_words {
            println!("  {word}");
        }
    }

    println!("\n{}", format!("Top {top_words} words:").bright_cyan().bold());
    for word in results.valid_words.iter().take(top_words) {
        println!("  {word} ({})", word.len());
    }
}
