use super::{append_api_routes, edit, remove_file, remove_frontend_assets, Configurator, Context};
use crate::catalog::{Archetype, PackageRef};
use crate::plan::ConfigurationPlan;
use crate::templates;
use crate::workspace::{paths, EnvFile};
use anyhow::Result;

const OCTANE_PROVIDER: &str = "Laravel\\Octane\\OctaneServiceProvider";

/// Minimal stateless service behind Octane with health endpoints
pub struct Microservice;

impl Configurator for Microservice {
    fn archetype(&self) -> Archetype {
        Archetype::Microservice
    }

    fn configure(&self, _plan: &ConfigurationPlan, ctx: &Context<'_>) -> Result<()> {
        ctx.ui.info("Configuring Microservice...")?;

        remove_file(ctx, "Removing web routes", paths::WEB_ROUTES)?;
        remove_frontend_assets(ctx)?;

        ctx.installer.install("laravel/octane", Some("^2.0"))?;
        ctx.installer.publish_config(OCTANE_PROVIDER)?;

        append_api_routes(
            ctx,
            "Adding health check endpoints",
            "health",
            templates::HEALTH_ROUTES,
        )?;

        edit(ctx, "Configuring for stateless operation", paths::ENV_EXAMPLE, |source| {
            let mut env = EnvFile::parse(source);
            env.set_existing("SESSION_DRIVER", "array")
                .then(|| env.render())
        })?;

        ctx.ui.success("Microservice optimized!")?;
        Ok(())
    }

    fn required_packages(&self) -> Vec<PackageRef> {
        Vec::new()
    }

    fn recommended_packages(&self) -> Vec<PackageRef> {
        vec![PackageRef::new("laravel/octane")]
    }

    fn optional_packages(&self) -> Vec<PackageRef> {
        vec![PackageRef::new("prometheus/client_php")]
    }
}
