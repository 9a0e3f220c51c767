//! Setup wizard driver
//!
//! One run goes through:
//! 1. Welcome, dry-run banner, git checkpoint and toolchain probe
//! 2. Questions (or a pre-recorded answers file) accumulated in a [`PlanDraft`]
//! 3. Summary and confirmation gate
//! 4. The archetype's configurator, then selected features, infrastructure
//!    settings and a final `composer update`
//! 5. Next steps and a report of failed tasks

use crate::catalog::{Archetype, Cache, Capability, Database, Feature, FeatureInstall, Queue, Storage};
use crate::config::{SetupConfig, Toolchain};
use crate::configurators::Context;
use crate::installer::PackageInstaller;
use crate::plan::{Answers, ConfigurationPlan, Infrastructure, PlanDraft};
use crate::registry;
use crate::runtime::checkpoint::{self, Checkpoint};
use crate::runtime::{missing_tools, CommandRunner, RuntimeInfo};
use crate::tasks::{TaskReport, TaskRunner};
use crate::ui::{choose_many, choose_one, Choice, Prompter};
use crate::workspace::{edit_file, paths, EnvFile, Workspace};
use anyhow::Result;
use chrono::Local;
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use tracing::{debug, info};

pub const NEXT_STEPS: &[&str] = &[
    "cp .env.example .env",
    "Edit .env with your credentials",
    "php artisan migrate",
    "composer run dev",
];

/// External effects the wizard goes through
pub struct Collaborators<'a> {
    pub ui: &'a dyn Prompter,
    pub runner: &'a dyn CommandRunner,
    pub workspace: &'a dyn Workspace,
    /// Toolchain availability probe
    pub probe: fn(&Toolchain) -> Vec<RuntimeInfo>,
}

/// Where the plan's answers come from
#[derive(Debug, Clone)]
pub enum PlanSource {
    /// Ask every question; a preselected archetype skips the first one
    Interactive { base_type: Option<Archetype> },
    /// Pre-recorded answers
    Answers(Answers),
}

#[derive(Debug)]
pub enum Outcome {
    Completed {
        plan: ConfigurationPlan,
        checkpoint: Checkpoint,
        report: TaskReport,
    },
    Cancelled,
}

/// Run the wizard end to end
pub fn run(config: &SetupConfig, source: PlanSource, deps: &Collaborators<'_>) -> Result<Outcome> {
    let ui = deps.ui;

    ui.intro("Laravel Starter Kit - Interactive Setup")?;
    ui.info("Build your perfect Laravel app by selecting features!")?;
    if config.dry_run {
        ui.warning("DRY RUN MODE - No changes will be made")?;
    }

    let checkpoint = create_checkpoint(config, deps)?;
    check_toolchain(config, deps)?;

    let plan = match source {
        PlanSource::Interactive { base_type } => ask_questions(ui, base_type)?,
        PlanSource::Answers(answers) => {
            let plan = answers.into_plan()?;
            ui.info(&format!("Using recorded answers for {}", plan.base_type()))?;
            plan
        }
    };
    debug!("configuration plan finalized:\n{}", plan.to_yaml()?);

    ui.note("Configuration Summary", &plan.summary_lines())?;
    if !ui.confirm("Proceed with this configuration?", true)? {
        ui.outro_cancel("Configuration cancelled.")?;
        return Ok(Outcome::Cancelled);
    }

    let configurator = registry::for_archetype(plan.base_type());

    let tasks = TaskRunner::new(ui, config.dry_run);
    let installer = PackageInstaller::new(&tasks, deps.runner, &config.toolchain);
    let ctx = Context {
        ui,
        tasks: &tasks,
        installer: &installer,
        workspace: deps.workspace,
    };

    ui.info("Configuring application...")?;
    info!(archetype = %plan.base_type(), dry_run = config.dry_run, "configuring");
    configurator.configure(&plan, &ctx)?;

    install_features(&plan, &ctx)?;
    apply_infrastructure(&plan, &ctx)?;

    if !installer.required().is_empty() {
        installer.update()?;
    }

    let report = tasks.report();
    finish(ui, &checkpoint, &report)?;

    Ok(Outcome::Completed {
        plan,
        checkpoint,
        report,
    })
}

fn create_checkpoint(config: &SetupConfig, deps: &Collaborators<'_>) -> Result<Checkpoint> {
    let tag = checkpoint::tag_name(&Local::now());
    let checkpoint = if config.dry_run {
        Checkpoint::Skipped(tag)
    } else {
        checkpoint::create(deps.runner, &config.toolchain.git, &tag)
    };

    if checkpoint.is_usable() || config.dry_run {
        deps.ui.info(&checkpoint.to_string())?;
    } else {
        deps.ui.warning(&checkpoint.to_string())?;
    }
    Ok(checkpoint)
}

fn check_toolchain(config: &SetupConfig, deps: &Collaborators<'_>) -> Result<()> {
    if config.dry_run {
        return Ok(());
    }

    let missing = missing_tools(&(deps.probe)(&config.toolchain));
    if !missing.is_empty() {
        deps.ui.warning(&format!(
            "Missing tools, related steps will fail: {}",
            missing.join(", ")
        ))?;
    }
    Ok(())
}

/// The question sequence, threading the draft by value
fn ask_questions(ui: &dyn Prompter, preselected: Option<Archetype>) -> Result<ConfigurationPlan> {
    let base_type = match preselected {
        Some(base_type) => {
            ui.info(&format!("Application type: {}", base_type.label()))?;
            base_type
        }
        None => {
            let options: Vec<_> = Archetype::iter()
                .map(|a| (a, Choice::new(a.as_ref(), a.label())))
                .collect();
            choose_one(
                ui,
                "What is the PRIMARY purpose of this application?",
                &options,
                Archetype::default(),
            )?
        }
    };

    let draft = PlanDraft::new(base_type);
    let draft = ask_capabilities(ui, draft)?;
    let draft = ask_features(ui, draft)?;
    let infrastructure = ask_infrastructure(ui)?;

    Ok(draft.finalize(infrastructure)?)
}

fn ask_capabilities(ui: &dyn Prompter, draft: PlanDraft) -> Result<PlanDraft> {
    let options: Vec<(Capability, Choice)> = draft
        .offered_capabilities()
        .into_iter()
        .map(|c| (c, Choice::new(c.as_ref(), c.label())))
        .collect();
    if options.is_empty() {
        return Ok(draft);
    }

    let picked = choose_many(ui, "What capabilities does your application need?", &options, &[])?;
    Ok(draft.with_capabilities(picked.into_iter().collect()))
}

fn ask_features(ui: &dyn Prompter, draft: PlanDraft) -> Result<PlanDraft> {
    let options: Vec<(Feature, Choice)> = draft
        .offered_features()
        .into_iter()
        .map(|f| (f, Choice::new(f.as_ref(), f.label())))
        .collect();

    let picked = choose_many(ui, "Select additional features:", &options, &[])?;
    Ok(draft.with_features(picked.into_iter().collect::<BTreeSet<_>>()))
}

fn ask_infrastructure(ui: &dyn Prompter) -> Result<Infrastructure> {
    let database = choose_one(
        ui,
        "Database?",
        &Database::iter()
            .map(|d| (d, Choice::new(d.as_ref(), d.label())))
            .collect::<Vec<_>>(),
        Database::default(),
    )?;
    let cache = choose_one(
        ui,
        "Cache?",
        &Cache::iter()
            .map(|c| (c, Choice::new(c.as_ref(), c.label())))
            .collect::<Vec<_>>(),
        Cache::default(),
    )?;
    let queue = choose_one(
        ui,
        "Queue?",
        &Queue::iter()
            .map(|q| (q, Choice::new(q.as_ref(), q.label())))
            .collect::<Vec<_>>(),
        Queue::default(),
    )?;
    let storage = choose_one(
        ui,
        "File Storage (production)?",
        &Storage::iter()
            .map(|s| (s, Choice::new(s.as_ref(), s.label())))
            .collect::<Vec<_>>(),
        Storage::default(),
    )?;

    Ok(Infrastructure {
        database,
        cache,
        queue,
        storage,
    })
}

/// Require the packages behind the selected features
fn install_features(plan: &ConfigurationPlan, ctx: &Context<'_>) -> Result<()> {
    if plan.features().is_empty() {
        return Ok(());
    }

    ctx.ui.info("Installing selected features...")?;
    let mut packages = Vec::new();
    let mut commands = Vec::new();
    for feature in plan.features() {
        match feature.install() {
            FeatureInstall::Package(package) => packages.push(package),
            FeatureInstall::Native(command) => commands.push(command),
        }
    }

    ctx.installer.install_multiple(&packages)?;
    for command in commands {
        ctx.installer.run_native_command(command, &[])?;
    }
    Ok(())
}

/// Write the infrastructure choices into `.env.example`
fn apply_infrastructure(plan: &ConfigurationPlan, ctx: &Context<'_>) -> Result<()> {
    let infra = *plan.infrastructure();
    let entries = [
        ("DB_CONNECTION", infra.database.to_string()),
        ("CACHE_STORE", infra.cache.to_string()),
        ("QUEUE_CONNECTION", infra.queue.to_string()),
        ("FILESYSTEM_DISK", infra.storage.to_string()),
    ];

    ctx.tasks.run("Applying infrastructure settings", || {
        edit_file(ctx.workspace, paths::ENV_EXAMPLE, |source| {
            let mut env = EnvFile::parse(source);
            for (key, value) in &entries {
                env.set(key, value);
            }
            Some(env.render())
        })?;
        Ok(true)
    })?;
    Ok(())
}

fn finish(ui: &dyn Prompter, checkpoint: &Checkpoint, report: &TaskReport) -> Result<()> {
    let failures = report.failures();
    if !failures.is_empty() {
        let mut lines: Vec<String> = failures.iter().map(|r| r.label.clone()).collect();
        if checkpoint.is_usable() {
            lines.push(String::new());
            lines.push(format!("Roll back with: git reset --hard {}", checkpoint.tag()));
        }
        ui.note(&format!("{} step(s) failed", failures.len()), &lines)?;
    }

    let steps: Vec<String> = NEXT_STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}.  {}", i + 1, step))
        .collect();
    ui.note("Next Steps", &steps)?;

    if failures.is_empty() {
        ui.outro("Setup Complete!")?;
    } else {
        ui.outro("Setup finished with errors")?;
    }
    Ok(())
}
