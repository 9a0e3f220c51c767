#![allow(dead_code)]

use anyhow::Result;
use starter_core::config::{SetupConfig, Toolchain};
use starter_core::runtime::{CommandRunner, RuntimeInfo};
use starter_core::ui::{Choice, Prompter};
use starter_core::wizard::Collaborators;
use starter_core::workspace::Workspace;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};

pub const BOOTSTRAP_APP: &str = r#"<?php

use Illuminate\Foundation\Application;

return Application::configure(basePath: dirname(__DIR__))
    ->withRouting(
        web: __DIR__.'/../routes/web.php',
        api: __DIR__.'/../routes/api.php',
        commands: __DIR__.'/../routes/console.php',
        health: '/up',
    )
    ->withMiddleware(function (Middleware $middleware) {
        //
    })
    ->create();
"#;

pub const CORS_CONFIG: &str = r#"<?php

return [

    'paths' => ['api/*', 'sanctum/csrf-cookie'],

    'allowed_methods' => ['*'],

    'allowed_origins' => [env('FRONTEND_URL', 'http://localhost:3000')],

    'supports_credentials' => false,

];
"#;

pub const TENANCY_CONFIG: &str = r#"<?php

return [
    'bootstrappers' => [
        Stancl\Tenancy\Bootstrappers\CacheTenancyBootstrapper::class,
        Stancl\Tenancy\Bootstrappers\FilesystemTenancyBootstrapper::class,
    ],
];
"#;

pub const ENV_EXAMPLE: &str = "APP_NAME=Laravel\nDB_CONNECTION=sqlite\nSESSION_DRIVER=database\nCACHE_STORE=database\nQUEUE_CONNECTION=database\nFILESYSTEM_DISK=local\n";

pub const API_ROUTES: &str = "<?php\n\nuse Illuminate\\Http\\Request;\nuse Illuminate\\Support\\Facades\\Route;\n";

/// In-memory project tree
#[derive(Default)]
pub struct MemoryWorkspace {
    pub files: RefCell<BTreeMap<String, String>>,
    pub mutations: Cell<usize>,
}

impl MemoryWorkspace {
    /// A fresh Laravel 11 skeleton
    pub fn laravel() -> Self {
        let ws = Self::default();
        for (path, contents) in [
            (".env.example", ENV_EXAMPLE),
            ("bootstrap/app.php", BOOTSTRAP_APP),
            ("config/cors.php", CORS_CONFIG),
            ("routes/web.php", "<?php\n"),
            ("routes/api.php", API_ROUTES),
            ("routes/console.php", "<?php\n"),
            ("resources/views/welcome.blade.php", "<html></html>"),
            ("resources/js/app.js", "import './bootstrap';"),
            ("resources/css/app.css", ""),
        ] {
            ws.files.borrow_mut().insert(path.to_string(), contents.to_string());
        }
        ws
    }

    pub fn with_file(self, path: &str, contents: &str) -> Self {
        self.files.borrow_mut().insert(path.to_string(), contents.to_string());
        self
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn has(&self, path: &str) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn bump(&self) {
        self.mutations.set(self.mutations.get() + 1);
    }
}

impl Workspace for MemoryWorkspace {
    fn exists(&self, path: &str) -> bool {
        let prefix = format!("{}/", path);
        self.files
            .borrow()
            .keys()
            .any(|k| k == path || k.starts_with(&prefix))
    }

    fn read(&self, path: &str) -> Result<String> {
        self.file(path)
            .ok_or_else(|| anyhow::anyhow!("no such file: {}", path))
    }

    fn write(&self, path: &str, contents: &str) -> Result<()> {
        self.bump();
        self.files
            .borrow_mut()
            .insert(path.to_string(), contents.to_string());
        Ok(())
    }

    fn remove_file(&self, path: &str) -> Result<bool> {
        self.bump();
        Ok(self.files.borrow_mut().remove(path).is_some())
    }

    fn remove_dir(&self, path: &str) -> Result<usize> {
        self.bump();
        let prefix = format!("{}/", path);
        let mut files = self.files.borrow_mut();
        let before = files.len();
        files.retain(|k, _| !k.starts_with(&prefix));
        Ok(before - files.len())
    }
}

/// Records every command line; commands containing a `fail_on` needle fail
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<String>>,
    pub fail_on: Vec<&'static str>,
}

impl RecordingRunner {
    pub fn failing(needles: &[&'static str]) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_on: needles.to_vec(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, needle: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.contains(needle)).count()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<bool> {
        let line = format!("{} {}", program, args.join(" "));
        let ok = !self.fail_on.iter().any(|needle| line.contains(needle));
        self.calls.borrow_mut().push(line);
        Ok(ok)
    }
}

/// Answers questions from a script keyed by prompt; anything unscripted gets
/// its default. Every output line is recorded.
#[derive(Default)]
pub struct ScriptedPrompter {
    pub selects: HashMap<&'static str, &'static str>,
    pub multiselects: HashMap<&'static str, Vec<&'static str>>,
    pub confirm_answer: Option<bool>,
    pub lines: RefCell<Vec<String>>,
    pub notes: RefCell<Vec<(String, Vec<String>)>>,
}

impl ScriptedPrompter {
    pub fn answer(mut self, prompt: &'static str, key: &'static str) -> Self {
        self.selects.insert(prompt, key);
        self
    }

    pub fn answer_many(mut self, prompt: &'static str, keys: &[&'static str]) -> Self {
        self.multiselects.insert(prompt, keys.to_vec());
        self
    }

    pub fn declining() -> Self {
        Self {
            confirm_answer: Some(false),
            ..Self::default()
        }
    }

    pub fn note_lines(&self, title: &str) -> Option<Vec<String>> {
        self.notes
            .borrow()
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, lines)| lines.clone())
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|l| l.contains(needle))
    }

    fn push(&self, kind: &str, message: &str) -> Result<()> {
        self.lines.borrow_mut().push(format!("{}: {}", kind, message));
        Ok(())
    }

    fn index_of(choices: &[Choice], key: &str) -> usize {
        choices
            .iter()
            .position(|c| c.key == key)
            .unwrap_or_else(|| panic!("no choice '{}'", key))
    }
}

impl Prompter for ScriptedPrompter {
    fn intro(&self, title: &str) -> Result<()> {
        self.push("intro", title)
    }

    fn outro(&self, message: &str) -> Result<()> {
        self.push("outro", message)
    }

    fn outro_cancel(&self, message: &str) -> Result<()> {
        self.push("cancel", message)
    }

    fn info(&self, message: &str) -> Result<()> {
        self.push("info", message)
    }

    fn warning(&self, message: &str) -> Result<()> {
        self.push("warning", message)
    }

    fn success(&self, message: &str) -> Result<()> {
        self.push("success", message)
    }

    fn error(&self, message: &str) -> Result<()> {
        self.push("error", message)
    }

    fn step(&self, message: &str) -> Result<()> {
        self.push("step", message)
    }

    fn note(&self, title: &str, lines: &[String]) -> Result<()> {
        self.notes
            .borrow_mut()
            .push((title.to_string(), lines.to_vec()));
        Ok(())
    }

    fn select(&self, prompt: &str, choices: &[Choice], default: usize) -> Result<usize> {
        Ok(match self.selects.get(prompt) {
            Some(key) => Self::index_of(choices, key),
            None => default,
        })
    }

    fn multiselect(&self, prompt: &str, choices: &[Choice], defaults: &[usize]) -> Result<Vec<usize>> {
        Ok(match self.multiselects.get(prompt) {
            Some(keys) => keys.iter().map(|k| Self::index_of(choices, k)).collect(),
            None => defaults.to_vec(),
        })
    }

    fn confirm(&self, _prompt: &str, default: bool) -> Result<bool> {
        Ok(self.confirm_answer.unwrap_or(default))
    }
}

pub fn no_probe(_: &Toolchain) -> Vec<RuntimeInfo> {
    Vec::new()
}

pub fn probe_must_not_run(_: &Toolchain) -> Vec<RuntimeInfo> {
    panic!("toolchain probed during a dry run");
}

pub fn collaborators<'a>(
    ui: &'a ScriptedPrompter,
    runner: &'a RecordingRunner,
    workspace: &'a MemoryWorkspace,
) -> Collaborators<'a> {
    Collaborators {
        ui,
        runner,
        workspace,
        probe: no_probe,
    }
}

pub fn config(dry_run: bool) -> SetupConfig {
    let mut config = SetupConfig::new("/project");
    config.toolchain = Toolchain::default();
    config.dry_run = dry_run;
    config
}
