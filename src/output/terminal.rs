// Colored terminal output for the `check` command.

use colored::Colorize;

/// Print the verdict for a locally checked comment.
///
/// `trigger` is the blocked term that matched, if the comment was rejected.
pub fn display_verdict(comment: &str, trigger: Option<&str>) {
    println!("{} {}", "Comment:".dimmed(), super::log_preview(comment));
    match trigger {
        None => println!("  {} Comment is valid", "✓".green()),
        Some(term) => {
            println!(
                "  {} Comment contains inappropriate content",
                "✗".red().bold()
            );
            println!("  {} {}", "Matched term:".dimmed(), term.yellow());
        }
    }
}

/// Print the blocklist in its configured order.
pub fn display_blocklist(words: &[String]) {
    if words.is_empty() {
        println!("  {}", "(empty blocklist, every comment passes)".dimmed());
        return;
    }
    println!("{}", format!("Blocked terms ({}):", words.len()).bold());
    for word in words {
        println!("  - {word}");
    }
}
