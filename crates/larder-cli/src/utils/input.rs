//! User input utilities for interactive command-line prompts.

use anyhow::{Context, Result};
use std::io;

/// Prompts the user for a string input, trimmed.
pub fn prompt_string(prompt: &str) -> Result<String> {
    println!("{prompt}: ");

    let mut input: String = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read user input")?;

    Ok(input.trim().to_string())
}

/// Prompts for a yes/no confirmation; anything but "y"/"yes" is no.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    loop {
        let input = prompt_string(&format!("{prompt} (y/N)"))?;
        match parse_confirmation(&input) {
            Some(answer) => return Ok(answer),
            None => eprintln!("Please enter 'y' for yes or 'n' for no."),
        }
    }
}

fn parse_confirmation(input: &str) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}
