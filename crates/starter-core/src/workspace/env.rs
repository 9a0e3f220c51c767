//! Key/value edits of `.env.example`

/// An env file kept as lines so comments and ordering survive edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFile {
    lines: Vec<String>,
}

fn line_key(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        return None;
    }
    let (key, _) = trimmed.split_once('=')?;
    let key = key.trim();
    (!key.is_empty()).then_some(key)
}

impl EnvFile {
    pub fn parse(content: &str) -> Self {
        Self {
            lines: content.lines().map(str::to_string).collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line_key(line) {
            Some(k) if k == key => line.split_once('=').map(|(_, v)| v.trim()),
            _ => None,
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Replace the value of an existing key; false when the key is absent
    pub fn set_existing(&mut self, key: &str, value: &str) -> bool {
        for line in &mut self.lines {
            if line_key(line) == Some(key) {
                *line = format!("{}={}", key, value);
                return true;
            }
        }
        false
    }

    /// Set a key, appending it at the end when absent
    pub fn set(&mut self, key: &str, value: &str) {
        if !self.set_existing(key, value) {
            self.lines.push(format!("{}={}", key, value));
        }
    }

    /// Append a commented section with the entries whose keys are not defined yet.
    ///
    /// Returns the number of entries added; nothing is written when it is zero.
    pub fn append_section(&mut self, title: &str, entries: &[(&str, &str)]) -> usize {
        let missing: Vec<_> = entries
            .iter()
            .filter(|(key, _)| !self.contains(key))
            .collect();
        if missing.is_empty() {
            return 0;
        }

        if self.lines.last().is_some_and(|l| !l.trim().is_empty()) {
            self.lines.push(String::new());
        }
        self.lines.push(format!("# {}", title));
        for (key, value) in &missing {
            self.lines.push(format!("{}={}", key, value));
        }
        missing.len()
    }

    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}
