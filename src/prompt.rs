// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

use std::io::{BufRead, Write};

use crate::{Field, RetryBudget};

/// Interactive source of answers used by the resolver and the runner
pub trait Prompt {
    /// Ask for a value for `field`, up to the budget's number of attempts.
    ///
    /// Returns the first valid (already validated) answer, or `None` when
    /// the attempts run out or input ends.
    fn prompt_field(&mut self, field: &Field, budget: RetryBudget) -> cu::Result<Option<String>>;

    /// Show `licenses` as a 1-based numbered list and ask for one of them.
    ///
    /// Returns the chosen name, or `None` when the attempts run out or input ends.
    fn prompt_license_choice(
        &mut self,
        licenses: &[&str],
        budget: RetryBudget,
    ) -> cu::Result<Option<String>>;
}

/// Prompter that writes questions to `output` and reads one answer
/// per line from `input`
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompter<std::io::StdinLock<'static>, std::io::Stderr> {
    /// Questions go to stderr so stdout only carries the generated license
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Get back the output, mainly for inspecting what was shown
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show the question and read one trimmed line. `None` at end of input.
    fn ask(&mut self, question: &str) -> cu::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // keep the terminal tidy when input ends mid-prompt
            writeln!(self.output)?;
            cu::debug!("end of input while prompting");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Prompt for ConsolePrompter<R, W> {
    fn prompt_field(&mut self, field: &Field, budget: RetryBudget) -> cu::Result<Option<String>> {
        let question = field.prompt_message();
        for attempt in 1..=budget.attempts() {
            let Some(answer) = self.ask(&question)? else {
                return Ok(None);
            };
            match field.validate(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    cu::trace!("attempt {attempt}/{}: {e}", budget.attempts());
                    writeln!(self.output, "{e}")?;
                }
            }
        }
        cu::debug!("no valid value for {field} after {} attempts", budget.attempts());
        Ok(None)
    }

    fn prompt_license_choice(
        &mut self,
        licenses: &[&str],
        budget: RetryBudget,
    ) -> cu::Result<Option<String>> {
        if licenses.is_empty() {
            return Ok(None);
        }
        let count = licenses.len();
        let question = format!("Which license (1-{count} integer)? ");
        for attempt in 1..=budget.attempts() {
            for (i, name) in licenses.iter().enumerate() {
                writeln!(self.output, "{}) {name}", i + 1)?;
            }
            let Some(answer) = self.ask(&question)? else {
                return Ok(None);
            };
            match answer.parse::<usize>() {
                Ok(option) if (1..=count).contains(&option) => {
                    return Ok(Some(licenses[option - 1].to_string()));
                }
                _ => {
                    cu::trace!("attempt {attempt}/{}: invalid choice '{answer}'", budget.attempts());
                    writeln!(self.output, "invalid choice '{answer}'")?;
                }
            }
        }
        cu::debug!("no license chosen after {} attempts", budget.attempts());
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prompter(input: &str) -> ConsolePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_three_invalid_answers_is_absent() -> cu::Result<()> {
        let mut p = prompter("abcd\n\n-3\n2020\n");
        let value = p.prompt_field(&Field::Year, RetryBudget::new(3))?;
        assert_eq!(value, None);
        Ok(())
    }

    #[test]
    fn test_invalid_then_valid() -> cu::Result<()> {
        let mut p = prompter("   \n  Ada Lovelace  \n");
        let value = p.prompt_field(&Field::FullName, RetryBudget::new(2))?;
        assert_eq!(value.as_deref(), Some("Ada Lovelace"));
        let shown = String::from_utf8(p.into_output())?;
        assert_eq!(shown.matches("Author name (non-empty string): ").count(), 2);
        Ok(())
    }

    #[test]
    fn test_end_of_input_is_absent() -> cu::Result<()> {
        let mut p = prompter("");
        assert_eq!(p.prompt_field(&Field::Project, RetryBudget::new(5))?, None);
        Ok(())
    }

    #[test]
    fn test_zero_budget_never_reads() -> cu::Result<()> {
        let mut p = prompter("Engine\n");
        assert_eq!(p.prompt_field(&Field::Project, RetryBudget::new(0))?, None);
        assert!(p.into_output().is_empty());
        Ok(())
    }

    #[test]
    fn test_license_choice() -> cu::Result<()> {
        let licenses = ["bsd-3-clause", "isc", "mit"];
        let mut p = prompter("x\n0\n4\n3\n");
        let value = p.prompt_license_choice(&licenses, RetryBudget::new(4))?;
        assert_eq!(value.as_deref(), Some("mit"));
        let shown = String::from_utf8(p.into_output())?;
        assert!(shown.starts_with("1) bsd-3-clause\n2) isc\n3) mit\nWhich license (1-3 integer)? "));
        Ok(())
    }

    #[test]
    fn test_license_choice_exhausted() -> cu::Result<()> {
        let licenses = ["isc", "mit"];
        let mut p = prompter("3\nmit\n1\n");
        assert_eq!(p.prompt_license_choice(&licenses, RetryBudget::new(2))?, None);
        // only decimal numbers select a license
        let mut p = prompter("0x1\n0b10\n");
        assert_eq!(p.prompt_license_choice(&licenses, RetryBudget::new(2))?, None);
        Ok(())
    }
}
