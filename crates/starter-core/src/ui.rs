//! Prompt and output seam
//!
//! Rendering is delegated to a [`Prompter`]. The cliclack implementation
//! lives in [`crate::tui`]; tests drive the wizard with scripted answers.

use anyhow::Result;

/// One entry of a select or multi-select prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub key: String,
    pub label: String,
    pub hint: String,
}

impl Choice {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            hint: String::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }
}

/// Interactive prompts and progress output
pub trait Prompter {
    fn intro(&self, title: &str) -> Result<()>;
    fn outro(&self, message: &str) -> Result<()>;
    fn outro_cancel(&self, message: &str) -> Result<()>;

    fn info(&self, message: &str) -> Result<()>;
    fn warning(&self, message: &str) -> Result<()>;
    fn success(&self, message: &str) -> Result<()>;
    fn error(&self, message: &str) -> Result<()>;
    /// A provisioning action label
    fn step(&self, message: &str) -> Result<()>;
    fn note(&self, title: &str, lines: &[String]) -> Result<()>;

    /// Single choice; returns the index into `choices`
    fn select(&self, prompt: &str, choices: &[Choice], default: usize) -> Result<usize>;

    /// Any number of choices; returns indices into `choices`
    fn multiselect(&self, prompt: &str, choices: &[Choice], defaults: &[usize])
        -> Result<Vec<usize>>;

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Ask a single-choice question over typed options
pub fn choose_one<T: Copy + PartialEq>(
    ui: &dyn Prompter,
    prompt: &str,
    options: &[(T, Choice)],
    default: T,
) -> Result<T> {
    let choices: Vec<Choice> = options.iter().map(|(_, c)| c.clone()).collect();
    let default_idx = options.iter().position(|(v, _)| *v == default).unwrap_or(0);
    let idx = ui.select(prompt, &choices, default_idx)?;
    options
        .get(idx)
        .map(|(v, _)| *v)
        .ok_or_else(|| anyhow::anyhow!("Invalid selection for '{}'", prompt))
}

/// Ask a multi-choice question over typed options
pub fn choose_many<T: Copy + PartialEq>(
    ui: &dyn Prompter,
    prompt: &str,
    options: &[(T, Choice)],
    defaults: &[T],
) -> Result<Vec<T>> {
    let choices: Vec<Choice> = options.iter().map(|(_, c)| c.clone()).collect();
    let default_idx: Vec<usize> = options
        .iter()
        .enumerate()
        .filter(|(_, (v, _))| defaults.contains(v))
        .map(|(i, _)| i)
        .collect();

    ui.multiselect(prompt, &choices, &default_idx)?
        .into_iter()
        .map(|idx| {
            options
                .get(idx)
                .map(|(v, _)| *v)
                .ok_or_else(|| anyhow::anyhow!("Invalid selection for '{}'", prompt))
        })
        .collect()
}
