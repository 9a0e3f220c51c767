//! Package and generator invocations
//!
//! Every method wraps exactly one external process call in a labeled task, so
//! dry-run and failure reporting apply uniformly. Packages required during the
//! run are remembered; requiring the same package twice is a no-op, and so is
//! repeating an `artisan install:*` scaffolding command.

use crate::catalog::PackageRef;
use crate::config::Toolchain;
use crate::runtime::process::{args, CommandRunner};
use crate::tasks::TaskRunner;
use anyhow::Result;
use std::cell::RefCell;
use tracing::debug;

pub struct PackageInstaller<'a> {
    tasks: &'a TaskRunner<'a>,
    runner: &'a dyn CommandRunner,
    toolchain: &'a Toolchain,
    required: RefCell<Vec<String>>,
    /// `install:*` commands that already succeeded
    scaffolded: RefCell<Vec<String>>,
}

impl<'a> PackageInstaller<'a> {
    pub fn new(
        tasks: &'a TaskRunner<'a>,
        runner: &'a dyn CommandRunner,
        toolchain: &'a Toolchain,
    ) -> Self {
        Self {
            tasks,
            runner,
            toolchain,
            required: RefCell::new(Vec::new()),
            scaffolded: RefCell::new(Vec::new()),
        }
    }

    /// `composer require` a package without updating the lock file
    pub fn install(&self, package: &str, version: Option<&str>) -> Result<bool> {
        if self.was_required(package) {
            debug!(package, "already required this run");
            return Ok(true);
        }

        let requirement = match version {
            Some(v) => format!("{}:{}", package, v),
            None => package.to_string(),
        };

        let ok = self.tasks.run(format!("Installing {}", requirement), || {
            self.runner.run(
                &self.toolchain.composer,
                &args([
                    "require",
                    requirement.as_str(),
                    "--no-interaction",
                    "--prefer-dist",
                    "--no-update",
                ]),
            )
        })?;

        if ok {
            self.required.borrow_mut().push(package.to_string());
        }
        Ok(ok)
    }

    pub fn install_ref(&self, package: PackageRef) -> Result<bool> {
        self.install(package.name, package.version)
    }

    /// Require each package in turn; true when all of them succeeded
    pub fn install_multiple(&self, packages: &[PackageRef]) -> Result<bool> {
        let mut all = true;
        for package in packages {
            all &= self.install_ref(*package)?;
        }
        Ok(all)
    }

    /// `php artisan <command> [options] --no-interaction`
    pub fn run_native_command(&self, command: &str, options: &[&str]) -> Result<bool> {
        let mut argv = vec!["artisan".to_string(), command.to_string()];
        argv.extend(options.iter().map(|o| o.to_string()));
        argv.push("--no-interaction".to_string());

        let once = command.starts_with("install:") && options.is_empty();
        if once && self.scaffolded.borrow().iter().any(|c| c == command) {
            debug!(command, "already ran this run");
            return Ok(true);
        }

        let label = if options.is_empty() {
            format!("Running {}", command)
        } else {
            format!("Running {} {}", command, options.join(" "))
        };
        let ok = self
            .tasks
            .run(label, || self.runner.run(&self.toolchain.php, &argv))?;

        if ok && once {
            self.scaffolded.borrow_mut().push(command.to_string());
        }
        Ok(ok)
    }

    /// Publish a service provider's assets, optionally narrowed to one tag
    pub fn publish(&self, provider: &str, tag: Option<&str>) -> Result<bool> {
        let provider_opt = format!("--provider={}", provider);
        match tag {
            Some(tag) => {
                let tag_opt = format!("--tag={}", tag);
                self.run_native_command("vendor:publish", &[&provider_opt, &tag_opt])
            }
            None => self.run_native_command("vendor:publish", &[&provider_opt]),
        }
    }

    pub fn publish_config(&self, provider: &str) -> Result<bool> {
        self.publish(provider, Some("config"))
    }

    pub fn publish_tag(&self, tag: &str) -> Result<bool> {
        self.run_native_command("vendor:publish", &[&format!("--tag={}", tag)])
    }

    pub fn run_migrations(&self) -> Result<bool> {
        self.run_native_command("migrate", &["--force"])
    }

    pub fn make_model(&self, name: &str) -> Result<bool> {
        self.run_native_command("make:model", &[name, "--migration"])
    }

    /// Resolve everything required so far into the lock file
    pub fn update(&self) -> Result<bool> {
        self.tasks.run("Updating Composer dependencies", || {
            self.runner
                .run(&self.toolchain.composer, &args(["update", "--no-interaction"]))
        })
    }

    pub fn npm_install(&self, packages: &[&str]) -> Result<bool> {
        let mut argv = vec!["install".to_string()];
        argv.extend(packages.iter().map(|p| p.to_string()));
        argv.push("--save".to_string());

        self.tasks.run(format!("Installing {}", packages.join(" ")), || {
            self.runner.run(&self.toolchain.npm, &argv)
        })
    }

    pub fn was_required(&self, package: &str) -> bool {
        self.required.borrow().iter().any(|p| p == package)
    }

    /// Packages required so far, in order
    pub fn required(&self) -> Vec<String> {
        self.required.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{Choice, Prompter};

    struct Quiet;

    impl Prompter for Quiet {
        fn intro(&self, _: &str) -> Result<()> {
            Ok(())
        }
        fn outro(&self, _: &str) -> Result<()> {
            Ok(())
        }
        fn outro_cancel(&self, _: &str) -> Result<()> {
            Ok(())
        }
        fn info(&self, _: &str) -> Result<()> {
            Ok(())
        }
        fn warning(&self, _: &str) -> Result<()> {
            Ok(())
        }
        fn success(&self, _: &str) -> Result<()> {
            Ok(())
        }
        fn error(&self, _: &str) -> Result<()> {
            Ok(())
        }
        fn step(&self, _: &str) -> Result<()> {
            Ok(())
        }
        fn note(&self, _: &str, _: &[String]) -> Result<()> {
            Ok(())
        }
        fn select(&self, _: &str, _: &[Choice], d: usize) -> Result<usize> {
            Ok(d)
        }
        fn multiselect(&self, _: &str, _: &[Choice], d: &[usize]) -> Result<Vec<usize>> {
            Ok(d.to_vec())
        }
        fn confirm(&self, _: &str, d: bool) -> Result<bool> {
            Ok(d)
        }
    }

    struct Recorder {
        calls: RefCell<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_on: None,
            }
        }
    }

    impl CommandRunner for Recorder {
        fn run(&self, program: &str, args: &[String]) -> Result<bool> {
            let line = format!("{} {}", program, args.join(" "));
            let ok = self.fail_on.map_or(true, |needle| !line.contains(needle));
            self.calls.borrow_mut().push(line);
            Ok(ok)
        }
    }

    #[test]
    fn test_install_builds_composer_require() {
        let ui = Quiet;
        let tasks = TaskRunner::new(&ui, false);
        let runner = Recorder::new();
        let toolchain = Toolchain::default();
        let installer = PackageInstaller::new(&tasks, &runner, &toolchain);

        assert!(installer.install("laravel/sanctum", Some("^4.0")).unwrap());
        assert_eq!(
            runner.calls.borrow()[0],
            "composer require laravel/sanctum:^4.0 --no-interaction --prefer-dist --no-update"
        );
        assert_eq!(tasks.report().labels(), vec!["Installing laravel/sanctum:^4.0"]);
    }

    #[test]
    fn test_install_is_deduplicated() {
        let ui = Quiet;
        let tasks = TaskRunner::new(&ui, false);
        let runner = Recorder::new();
        let toolchain = Toolchain::default();
        let installer = PackageInstaller::new(&tasks, &runner, &toolchain);

        installer.install("laravel/sanctum", Some("^4.0")).unwrap();
        installer.install("laravel/sanctum", None).unwrap();

        assert_eq!(runner.calls.borrow().len(), 1);
        assert_eq!(installer.required(), vec!["laravel/sanctum"]);
    }

    #[test]
    fn test_install_commands_run_once() {
        let ui = Quiet;
        let tasks = TaskRunner::new(&ui, false);
        let runner = Recorder::new();
        let toolchain = Toolchain::default();
        let installer = PackageInstaller::new(&tasks, &runner, &toolchain);

        installer.run_native_command("install:broadcasting", &[]).unwrap();
        installer.run_native_command("install:broadcasting", &[]).unwrap();
        installer.run_migrations().unwrap();
        installer.run_migrations().unwrap();

        assert_eq!(
            *runner.calls.borrow(),
            vec![
                "php artisan install:broadcasting --no-interaction",
                "php artisan migrate --force --no-interaction",
                "php artisan migrate --force --no-interaction",
            ]
        );
    }

    #[test]
    fn test_failed_install_is_not_remembered() {
        let ui = Quiet;
        let tasks = TaskRunner::new(&ui, false);
        let runner = Recorder {
            calls: RefCell::new(Vec::new()),
            fail_on: Some("laravel/nova"),
        };
        let toolchain = Toolchain::default();
        let installer = PackageInstaller::new(&tasks, &runner, &toolchain);

        assert!(!installer
            .install_multiple(&[PackageRef::new("laravel/nova"), PackageRef::new("laravel/horizon")])
            .unwrap());
        assert!(!installer.was_required("laravel/nova"));
        assert!(installer.was_required("laravel/horizon"));
        assert_eq!(tasks.report().failures().len(), 1);
    }

    #[test]
    fn test_artisan_invocations() {
        let ui = Quiet;
        let tasks = TaskRunner::new(&ui, false);
        let runner = Recorder::new();
        let toolchain = Toolchain::default();
        let installer = PackageInstaller::new(&tasks, &runner, &toolchain);

        installer.publish_config("Laravel\\Octane\\OctaneServiceProvider").unwrap();
        installer.publish_tag("cashier-migrations").unwrap();
        installer.run_migrations().unwrap();
        installer.make_model("Plan").unwrap();
        installer.update().unwrap();
        installer.npm_install(&["@inertiajs/react", "react"]).unwrap();

        assert_eq!(
            *runner.calls.borrow(),
            vec![
                "php artisan vendor:publish --provider=Laravel\\Octane\\OctaneServiceProvider --tag=config --no-interaction",
                "php artisan vendor:publish --tag=cashier-migrations --no-interaction",
                "php artisan migrate --force --no-interaction",
                "php artisan make:model Plan --migration --no-interaction",
                "composer update --no-interaction",
                "npm install @inertiajs/react react --save",
            ]
        );
    }

    #[test]
    fn test_dry_run_runs_nothing() {
        let ui = Quiet;
        let tasks = TaskRunner::new(&ui, true);
        let runner = Recorder::new();
        let toolchain = Toolchain::default();
        let installer = PackageInstaller::new(&tasks, &runner, &toolchain);

        installer.install("laravel/octane", Some("^2.0")).unwrap();
        installer.run_native_command("install:api", &[]).unwrap();
        installer.update().unwrap();

        assert!(runner.calls.borrow().is_empty());
        assert_eq!(tasks.report().records.len(), 3);
    }
}
