mod common;

use common::*;
use starter_core::catalog::{Archetype, Capability, Feature};
use starter_core::filter::{allowed_capabilities, filter_features};
use starter_core::plan::{Answers, Infrastructure};
use starter_core::runtime::Checkpoint;
use starter_core::wizard::{self, Collaborators, Outcome, PlanSource};
use std::collections::BTreeSet;
use strum::IntoEnumIterator;

fn interactive() -> PlanSource {
    PlanSource::Interactive { base_type: None }
}

fn answers(base_type: Archetype, capabilities: &[Capability], features: &[Feature]) -> PlanSource {
    PlanSource::Answers(Answers {
        base_type,
        capabilities: capabilities.iter().copied().collect(),
        features: features.iter().copied().collect(),
        infrastructure: Infrastructure::default(),
    })
}

#[test]
fn test_api_with_default_answers() {
    let ui = ScriptedPrompter::default();
    let runner = RecordingRunner::default();
    let ws = MemoryWorkspace::laravel();

    let outcome = wizard::run(&config(false), interactive(), &collaborators(&ui, &runner, &ws)).unwrap();

    let Outcome::Completed { plan, report, .. } = outcome else {
        panic!("expected a completed run");
    };
    assert_eq!(plan.base_type(), Archetype::Api);
    assert!(report.is_clean());

    let summary = ui.note_lines("Configuration Summary").unwrap();
    assert!(summary.contains(&"Base Type: api".to_string()));
    assert!(summary.contains(&"Features: 0 selected".to_string()));
    assert!(summary.contains(&"Database: pgsql".to_string()));
    assert!(summary.contains(&"Storage: s3".to_string()));

    assert_eq!(runner.count("artisan install:api"), 1);
    assert!(!ws.has("routes/web.php"));
    assert!(!ws.has("resources/views/welcome.blade.php"));
    let bootstrap = ws.file("bootstrap/app.php").unwrap();
    assert!(!bootstrap.contains("web:"));
    assert!(bootstrap.contains("api: __DIR__.'/../routes/api.php',"));

    assert!(ui.printed("API configuration complete!"));
    assert_eq!(
        ui.note_lines("Next Steps").unwrap(),
        vec![
            "1.  cp .env.example .env",
            "2.  Edit .env with your credentials",
            "3.  php artisan migrate",
            "4.  composer run dev",
        ]
    );
}

#[test]
fn test_checkpoint_is_taken_before_questions() {
    let ui = ScriptedPrompter::default();
    let runner = RecordingRunner::failing(&["rev-parse"]);
    let ws = MemoryWorkspace::laravel();

    let outcome = wizard::run(&config(false), interactive(), &collaborators(&ui, &runner, &ws)).unwrap();

    let calls = runner.calls();
    assert!(calls[0].starts_with("git rev-parse -q --verify refs/tags/pre-setup-"));
    assert!(calls[1].starts_with("git tag pre-setup-"));
    let Outcome::Completed { checkpoint, .. } = outcome else {
        panic!("expected a completed run");
    };
    assert!(matches!(checkpoint, Checkpoint::Created(_)));
}

#[test]
fn test_infrastructure_is_written_to_env_example() {
    let ui = ScriptedPrompter::default()
        .answer("Database?", "mysql")
        .answer("Cache?", "file")
        .answer("Queue?", "sqs")
        .answer("File Storage (production)?", "r2");
    let runner = RecordingRunner::default();
    let ws = MemoryWorkspace::laravel();

    wizard::run(&config(false), interactive(), &collaborators(&ui, &runner, &ws)).unwrap();

    let env = ws.file(".env.example").unwrap();
    assert!(env.contains("DB_CONNECTION=mysql\n"));
    assert!(env.contains("CACHE_STORE=file\n"));
    assert!(env.contains("QUEUE_CONNECTION=sqs\n"));
    assert!(env.contains("FILESYSTEM_DISK=r2\n"));
    assert!(!env.contains("DB_CONNECTION=sqlite"));
}

#[test]
fn test_dry_run_touches_nothing_for_every_archetype() {
    for archetype in Archetype::iter() {
        let capabilities = allowed_capabilities(archetype);
        let features = filter_features(archetype, &capabilities);
        let source = answers(
            archetype,
            &capabilities.iter().copied().collect::<Vec<_>>(),
            &features.iter().copied().collect::<Vec<_>>(),
        );

        let ui = ScriptedPrompter::default();
        let runner = RecordingRunner::default();
        let ws = MemoryWorkspace::laravel();
        let before = ws.files.borrow().clone();
        let deps = Collaborators {
            probe: probe_must_not_run,
            ..collaborators(&ui, &runner, &ws)
        };

        let outcome = wizard::run(&config(true), source, &deps).unwrap();

        assert!(runner.calls().is_empty(), "{} ran {:?}", archetype, runner.calls());
        assert_eq!(ws.mutations.get(), 0, "{} mutated the workspace", archetype);
        assert_eq!(*ws.files.borrow(), before);
        assert!(ui.printed("DRY RUN MODE"));

        let Outcome::Completed { checkpoint, report, .. } = outcome else {
            panic!("expected a completed run for {}", archetype);
        };
        assert!(matches!(checkpoint, Checkpoint::Skipped(_)));
        assert!(!report.records.is_empty());
        assert!(report.is_clean());
    }
}

#[test]
fn test_declining_cancels_without_side_effects() {
    for dry_run in [false, true] {
        let ui = ScriptedPrompter::declining();
        let runner = RecordingRunner::default();
        let ws = MemoryWorkspace::laravel();

        let outcome = wizard::run(&config(dry_run), interactive(), &collaborators(&ui, &runner, &ws)).unwrap();

        assert!(matches!(outcome, Outcome::Cancelled));
        assert!(ui.printed("cancel: Configuration cancelled."));
        assert_eq!(ws.mutations.get(), 0);
        // only the checkpoint may have run
        assert!(runner.calls().iter().all(|c| c.starts_with("git ")));
    }
}

#[test]
fn test_mcp_with_ai_capability() {
    let ui = ScriptedPrompter::default()
        .answer("What is the PRIMARY purpose of this application?", "mcp")
        .answer_many("What capabilities does your application need?", &["ai"]);
    let runner = RecordingRunner::default();
    let ws = MemoryWorkspace::laravel();

    wizard::run(&config(false), interactive(), &collaborators(&ui, &runner, &ws)).unwrap();

    assert_eq!(runner.count("composer require laravel/mcp "), 1);
    assert_eq!(runner.count("composer require echolabsdev/prism "), 1);
    assert!(!ws.has("routes/web.php"));
    assert!(!ws.has("routes/api.php"));
    assert!(!ws.has("resources/js/app.js"));
    assert!(ws.has("app/Mcp/Tools/ExampleTool.php"));

    let bootstrap = ws.file("bootstrap/app.php").unwrap();
    assert!(bootstrap.contains("commands: __DIR__.'/../routes/console.php',"));
    assert!(!bootstrap.contains("web:"));
    assert!(!bootstrap.contains("api:"));
    assert!(!bootstrap.contains("health:"));
}

#[test]
fn test_preselected_archetype_skips_first_question() {
    let ui = ScriptedPrompter::default();
    let runner = RecordingRunner::default();
    let ws = MemoryWorkspace::laravel();
    let source = PlanSource::Interactive {
        base_type: Some(Archetype::Microservice),
    };

    let Outcome::Completed { plan, .. } =
        wizard::run(&config(false), source, &collaborators(&ui, &runner, &ws)).unwrap()
    else {
        panic!("expected a completed run");
    };

    assert_eq!(plan.base_type(), Archetype::Microservice);
    assert!(ui.printed("Application type: Microservice"));
}

#[test]
fn test_failures_are_reported_and_sequence_continues() {
    let ui = ScriptedPrompter::default();
    let runner = RecordingRunner::failing(&["laravel/octane"]);
    let ws = MemoryWorkspace::laravel();

    let outcome = wizard::run(
        &config(false),
        answers(Archetype::Microservice, &[], &[]),
        &collaborators(&ui, &runner, &ws),
    )
    .unwrap();

    let Outcome::Completed { report, checkpoint, .. } = outcome else {
        panic!("expected a completed run");
    };
    let failed: Vec<_> = report.failures().iter().map(|r| r.label.clone()).collect();
    assert_eq!(failed, vec!["Installing laravel/octane:^2.0"]);

    // later steps still ran
    assert!(ws.file("routes/api.php").unwrap().contains("Route::get('/health'"));
    assert!(ws.file(".env.example").unwrap().contains("SESSION_DRIVER=array"));

    let note = ui.note_lines("1 step(s) failed").unwrap();
    assert_eq!(note[0], "Installing laravel/octane:^2.0");
    assert!(note
        .last()
        .unwrap()
        .contains(&format!("git reset --hard {}", checkpoint.tag())));
    assert!(ui.printed("outro: Setup finished with errors"));
}

#[test]
fn test_selected_features_are_installed_once() {
    let ui = ScriptedPrompter::default();
    let runner = RecordingRunner::default();
    let ws = MemoryWorkspace::laravel();

    wizard::run(
        &config(false),
        answers(
            Archetype::MobileBackend,
            &[Capability::Mobile, Capability::RealTime],
            &[Feature::FileIntervention, Feature::WebsocketsReverb, Feature::Backup],
        ),
        &collaborators(&ui, &runner, &ws),
    )
    .unwrap();

    assert_eq!(runner.count("composer require intervention/image"), 1);
    assert_eq!(runner.count("composer require spatie/laravel-backup:^9.0"), 1);
    assert_eq!(runner.count("artisan install:broadcasting"), 1);
    assert_eq!(runner.count("composer update --no-interaction"), 1);
    assert_eq!(
        runner.calls().last().map(String::as_str),
        Some("composer update --no-interaction")
    );
}

#[test]
fn test_answers_file_is_validated() {
    let ui = ScriptedPrompter::default();
    let runner = RecordingRunner::default();
    let ws = MemoryWorkspace::laravel();

    let err = wizard::run(
        &config(false),
        answers(Archetype::Mcp, &[Capability::Saas], &[]),
        &collaborators(&ui, &runner, &ws),
    )
    .unwrap_err();

    assert!(err.to_string().contains("saas"));
    assert_eq!(ws.mutations.get(), 0);
}

#[test]
fn test_capabilities_narrow_offered_features() {
    let ui = ScriptedPrompter::default()
        .answer("What is the PRIMARY purpose of this application?", "web")
        .answer_many("Select additional features:", &["permissions"]);
    let runner = RecordingRunner::default();
    let ws = MemoryWorkspace::laravel();

    let Outcome::Completed { plan, .. } =
        wizard::run(&config(false), interactive(), &collaborators(&ui, &runner, &ws)).unwrap()
    else {
        panic!("expected a completed run");
    };

    assert_eq!(plan.capabilities(), &BTreeSet::new());
    assert_eq!(plan.features(), &BTreeSet::from([Feature::Permissions]));
}
