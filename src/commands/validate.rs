use crate::advisories::review;
use crate::core::ActivityInput;
use crate::io;
use anyhow::Result;
use colored::*;
use std::path::Path;

/// Hard errors fail the command; warnings and suggestions are only printed
pub fn validate_input(path: &Path) -> Result<()> {
    let input: ActivityInput = io::read_json(path)?;
    input.validate()?;

    let review = review(&input);
    println!("{} {} is valid", "✓".green(), path.display());
    for warning in &review.warnings {
        println!("  {} {}", "warning:".yellow().bold(), warning);
    }
    for suggestion in &review.suggestions {
        println!("  {} {}", "suggestion:".cyan(), suggestion);
    }
    Ok(())
}
