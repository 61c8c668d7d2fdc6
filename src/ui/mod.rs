//! Interactive prompts

use crate::core::error::RelResult;
use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdin, defaulting to no
///
/// Only "y" or "yes" (any case) counts as affirmative; everything else,
/// including EOF, declines.
pub fn confirm(question: &str) -> RelResult<bool> {
  print!("{} [y/N]: ", question);
  io::stdout().flush()?;

  let mut answer = String::new();
  io::stdin().lock().read_line(&mut answer)?;

  Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
  matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
