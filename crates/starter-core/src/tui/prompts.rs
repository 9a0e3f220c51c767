//! Charm-style CLI prompts using cliclack

use crate::ui::{Choice, Prompter};
use anyhow::Result;

/// [`Prompter`] backed by cliclack.
///
/// With `assume_defaults` set, questions are not shown: the default answer is
/// logged and returned.
pub struct CliclackPrompter {
    assume_defaults: bool,
}

impl CliclackPrompter {
    pub fn new(assume_defaults: bool) -> Self {
        Self { assume_defaults }
    }

    fn labels(choices: &[Choice], picked: &[usize]) -> String {
        let labels: Vec<&str> = picked
            .iter()
            .filter_map(|&i| choices.get(i))
            .map(|c| c.label.as_str())
            .collect();
        if labels.is_empty() {
            "none".to_string()
        } else {
            labels.join(", ")
        }
    }
}

impl Prompter for CliclackPrompter {
    fn intro(&self, title: &str) -> Result<()> {
        cliclack::intro(title)?;
        Ok(())
    }

    fn outro(&self, message: &str) -> Result<()> {
        cliclack::outro(message)?;
        Ok(())
    }

    fn outro_cancel(&self, message: &str) -> Result<()> {
        cliclack::outro_cancel(message)?;
        Ok(())
    }

    fn info(&self, message: &str) -> Result<()> {
        cliclack::log::info(message)?;
        Ok(())
    }

    fn warning(&self, message: &str) -> Result<()> {
        cliclack::log::warning(message)?;
        Ok(())
    }

    fn success(&self, message: &str) -> Result<()> {
        cliclack::log::success(message)?;
        Ok(())
    }

    fn error(&self, message: &str) -> Result<()> {
        cliclack::log::error(message)?;
        Ok(())
    }

    fn step(&self, message: &str) -> Result<()> {
        cliclack::log::step(message)?;
        Ok(())
    }

    fn note(&self, title: &str, lines: &[String]) -> Result<()> {
        cliclack::note(title, lines.join("\n"))?;
        Ok(())
    }

    fn select(&self, prompt: &str, choices: &[Choice], default: usize) -> Result<usize> {
        if self.assume_defaults {
            cliclack::log::info(format!("{} {}", prompt, Self::labels(choices, &[default])))?;
            return Ok(default);
        }

        let mut select = cliclack::select(prompt);
        for (idx, choice) in choices.iter().enumerate() {
            select = select.item(idx, &choice.label, &choice.hint);
        }
        let selected: usize = select.initial_value(default).interact()?;
        Ok(selected)
    }

    fn multiselect(&self, prompt: &str, choices: &[Choice], defaults: &[usize]) -> Result<Vec<usize>> {
        if choices.is_empty() {
            return Ok(Vec::new());
        }
        if self.assume_defaults {
            cliclack::log::info(format!("{} {}", prompt, Self::labels(choices, defaults)))?;
            return Ok(defaults.to_vec());
        }

        let mut multi = cliclack::multiselect(prompt);
        for (idx, choice) in choices.iter().enumerate() {
            multi = multi.item(idx, &choice.label, &choice.hint);
        }
        let selected: Vec<usize> = multi
            .initial_values(defaults.to_vec())
            .required(false)
            .interact()?;
        Ok(selected)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.assume_defaults {
            return Ok(default);
        }
        let confirmed: bool = cliclack::confirm(prompt).initial_value(default).interact()?;
        Ok(confirmed)
    }
}
