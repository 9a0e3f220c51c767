use super::{edit_php_config, merge_packages, write_file, Api, Configurator, Context, Web};
use crate::catalog::{Archetype, PackageRef};
use crate::plan::ConfigurationPlan;
use crate::templates;
use crate::workspace::paths;
use anyhow::Result;

const EXAMPLE_CONTROLLER_PATH: &str = "app/Http/Controllers/Api/V1/ExampleController.php";

/// Inertia web app plus a versioned JSON API for external clients
pub struct Hybrid;

impl Configurator for Hybrid {
    fn archetype(&self) -> Archetype {
        Archetype::Hybrid
    }

    fn configure(&self, plan: &ConfigurationPlan, ctx: &Context<'_>) -> Result<()> {
        ctx.ui.info("Configuring Hybrid Application (API + Web)...")?;

        Web.configure(plan, ctx)?;

        ctx.tasks.run("Creating API routes", || {
            if !ctx.workspace.exists(paths::API_ROUTES) {
                ctx.workspace.write(paths::API_ROUTES, templates::API_ROUTES)?;
            }
            Ok(true)
        })?;

        write_file(
            ctx,
            "Setting up API versioning",
            EXAMPLE_CONTROLLER_PATH,
            templates::EXAMPLE_CONTROLLER,
        )?;

        edit_php_config(ctx, "Configuring CORS", paths::CORS_CONFIG, |cors| {
            cors.append_to_list("paths", "'broadcasting/auth'")
        })?;

        ctx.ui.success("Hybrid Application configured!")?;
        ctx.ui.note(
            "You have",
            &["Web app (Inertia) on /".to_string(), "API on /api/v1".to_string()],
        )?;
        Ok(())
    }

    fn required_packages(&self) -> Vec<PackageRef> {
        merge_packages(&[Web.required_packages(), Api.required_packages()])
    }

    fn optional_packages(&self) -> Vec<PackageRef> {
        vec![
            PackageRef::new("dedoc/scramble"),
            PackageRef::new("spatie/laravel-query-builder"),
        ]
    }
}
