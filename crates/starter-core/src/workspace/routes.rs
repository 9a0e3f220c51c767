//! Marker-delimited blocks appended to route files
//!
//! Free-text insertions carry begin/end marker comments so that a block is
//! never appended twice and can be located later.

fn begin_marker(name: &str) -> String {
    format!("// starter-kit:begin {}", name)
}

fn end_marker(name: &str) -> String {
    format!("// starter-kit:end {}", name)
}

/// Whether the block called `name` is already in `source`
pub fn has_block(source: &str, name: &str) -> bool {
    let marker = begin_marker(name);
    source.lines().any(|line| line.trim() == marker)
}

/// `source` with the block appended, or `None` when it is already present
pub fn append_block(source: &str, name: &str, body: &str) -> Option<String> {
    if has_block(source, name) {
        return None;
    }

    let mut out = source.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&begin_marker(name));
    out.push('\n');
    out.push_str(body.trim_matches('\n'));
    out.push('\n');
    out.push_str(&end_marker(name));
    out.push('\n');
    Some(out)
}
