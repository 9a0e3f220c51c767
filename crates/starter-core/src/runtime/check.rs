//! Toolchain detection for PHP, Composer, npm and Git

use crate::config::Toolchain;
use std::process::Command;

/// Tool detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub program: String,
    pub version: Option<String>,
    pub available: bool,
}

/// Probe `program --version`
pub fn check_tool(name: &'static str, program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout)
                .lines()
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
            RuntimeInfo {
                name,
                program: program.to_string(),
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            program: program.to_string(),
            version: None,
            available: false,
        },
    }
}

/// Probe every tool the installer may call
pub fn check_toolchain(toolchain: &Toolchain) -> Vec<RuntimeInfo> {
    vec![
        check_tool("PHP", &toolchain.php),
        check_tool("Composer", &toolchain.composer),
        check_tool("npm", &toolchain.npm),
        check_tool("Git", &toolchain.git),
    ]
}

/// Human-readable lines for tools that could not be found
pub fn missing_tools(results: &[RuntimeInfo]) -> Vec<String> {
    results
        .iter()
        .filter(|r| !r.available)
        .map(|r| format!("{} (`{}` not found)", r.name, r.program))
        .collect()
}
