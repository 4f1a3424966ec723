// crates/meetup-cli/src/prompt.rs - Interactive field prompting over stdin
//
// Implements the core crate's FieldSource seam for interactive runs.
// Each prompt blocks the sole thread until the user answers; quiet mode
// never constructs this type.

use std::io::{self, BufRead, Write};

use meetup_core::{EventResult, FieldSource};

/// Prompts on stdout and reads one answer line per field from stdin.
///
/// The prompt shows the default in brackets; an empty answer takes it.
/// Explicit command-line values never reach the prompt.
pub struct InteractivePrompter;

impl FieldSource for InteractivePrompter {
    fn value_for(
        &mut self,
        field: &str,
        explicit: Option<&str>,
        default: &str,
    ) -> EventResult<String> {
        if let Some(value) = explicit {
            return Ok(value.to_string());
        }

        print!("{field} [{default}]: ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;

        let answer = line.trim();
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer.to_string())
        }
    }
}
