//! Routing wiring in `bootstrap/app.php`
//!
//! Laravel declares its route files as named arguments of
//! `->withRouting(...)`. The call is parsed into its arguments, edited, and
//! re-rendered one argument per line.

use super::php::{
    line_indent, matching_close, regions, split_top_level, without_comments, Region,
};

const ROUTING_CALL: &str = "->withRouting(";

/// Console-only routing used when a project exposes no HTTP surface
pub const CONSOLE_ROUTES: &str = "__DIR__.'/../routes/console.php'";

/// One argument of the `withRouting` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingArg {
    /// `None` for positional arguments
    pub name: Option<String>,
    pub value: String,
}

/// `bootstrap/app.php` with its parsed `withRouting` arguments
#[derive(Debug, Clone)]
pub struct BootstrapFile {
    source: String,
    /// Byte offset of the opening parenthesis
    open: usize,
    /// Byte offset of the closing parenthesis
    close: usize,
    args: Vec<RoutingArg>,
}

impl BootstrapFile {
    /// Parse the file; `None` when it has no `withRouting` call in code
    pub fn parse(source: &str) -> Option<Self> {
        let regions = regions(source);
        let (call, _) = source
            .match_indices(ROUTING_CALL)
            .find(|(i, _)| regions[*i] == Region::Code)?;
        let open = call + ROUTING_CALL.len() - 1;
        let close = matching_close(source, &regions, open)?;

        let args = split_top_level(source, &regions, open + 1..close)
            .into_iter()
            .map(|part| without_comments(source, &regions, part))
            .filter(|text| !text.is_empty())
            .map(|text| parse_arg(&text))
            .collect();

        Some(Self {
            source: source.to_string(),
            open,
            close,
            args,
        })
    }

    pub fn argument(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|a| a.name.as_deref() == Some(name))
            .map(|a| a.value.as_str())
    }

    /// Drop a named argument; false when it was not present
    pub fn remove_argument(&mut self, name: &str) -> bool {
        let before = self.args.len();
        self.args.retain(|a| a.name.as_deref() != Some(name));
        self.args.len() != before
    }

    /// Keep only the named arguments listed in `names`
    pub fn retain_only(&mut self, names: &[&str]) {
        self.args
            .retain(|a| a.name.as_deref().is_some_and(|n| names.contains(&n)));
    }

    /// Set a named argument, appending it when absent
    pub fn set_argument(&mut self, name: &str, value: &str) {
        match self.args.iter_mut().find(|a| a.name.as_deref() == Some(name)) {
            Some(arg) => arg.value = value.to_string(),
            None => self.args.push(RoutingArg {
                name: Some(name.to_string()),
                value: value.to_string(),
            }),
        }
    }

    pub fn render(&self) -> String {
        let indent = line_indent(&self.source, self.open);
        let mut out = String::with_capacity(self.source.len());
        out.push_str(&self.source[..=self.open]);
        out.push('\n');
        for arg in &self.args {
            out.push_str(indent);
            out.push_str("    ");
            if let Some(name) = &arg.name {
                out.push_str(name);
                out.push_str(": ");
            }
            out.push_str(&arg.value);
            out.push_str(",\n");
        }
        out.push_str(indent);
        out.push_str(&self.source[self.close..]);
        out
    }
}

fn parse_arg(text: &str) -> RoutingArg {
    let ident_len = text
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();
    let rest = text[ident_len..].trim_start();

    if ident_len > 0 && rest.starts_with(':') && !rest.starts_with("::") {
        RoutingArg {
            name: Some(text[..ident_len].to_string()),
            value: rest[1..].trim().to_string(),
        }
    } else {
        RoutingArg {
            name: None,
            value: text.to_string(),
        }
    }
}
