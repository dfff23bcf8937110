//! Console implementation of `Prompter`

use std::io::{self, BufRead, Write};

use bsexport::{ExportMode, Prompter};
use owo_colors::OwoColorize;

/// Prompter reading answers from stdin
pub struct CliPrompter;

impl Prompter for CliPrompter {
    fn prompt_line(&self, prompt: &str) -> bsexport::Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }

    fn display_message(&self, message: &str) {
        println!("{}", message);
    }

    fn display_warning(&self, message: &str) {
        eprintln!("{}", message.yellow());
    }
}

/// Ask which maps to export. Blank or unrecognized answers fall back to upvotes.
pub fn prompt_mode(prompter: &dyn Prompter) -> bsexport::Result<ExportMode> {
    let input = prompter.prompt_line("Export [f]avorites, [U]pvotes (default) or [d]ownvotes? ")?;
    match ExportMode::from_selection(&input) {
        Some(mode) => Ok(mode),
        None => {
            let fallback = ExportMode::default();
            prompter.display_warning(&format!(
                "Unrecognized option \"{}\", defaulting to {}.",
                input.trim(),
                fallback
            ));
            Ok(fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct OneAnswer {
        answer: &'static str,
        warnings: RefCell<Vec<String>>,
    }

    impl OneAnswer {
        fn new(answer: &'static str) -> Self {
            Self {
                answer,
                warnings: RefCell::new(Vec::new()),
            }
        }
    }

    impl Prompter for OneAnswer {
        fn prompt_line(&self, _prompt: &str) -> bsexport::Result<String> {
            Ok(self.answer.to_string())
        }

        fn display_message(&self, _message: &str) {}

        fn display_warning(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_prompt_mode_letters() {
        assert_eq!(prompt_mode(&OneAnswer::new("f\n")).unwrap(), ExportMode::Favorites);
        assert_eq!(prompt_mode(&OneAnswer::new("D\r\n")).unwrap(), ExportMode::Downvotes);
    }

    #[test]
    fn test_prompt_mode_blank_defaults_silently() {
        let prompter = OneAnswer::new("\n");
        assert_eq!(prompt_mode(&prompter).unwrap(), ExportMode::Upvotes);
        assert!(prompter.warnings.borrow().is_empty());
    }

    #[test]
    fn test_prompt_mode_unrecognized_warns() {
        let prompter = OneAnswer::new("x\n");
        assert_eq!(prompt_mode(&prompter).unwrap(), ExportMode::Upvotes);
        assert_eq!(prompter.warnings.borrow().len(), 1);
    }
}
