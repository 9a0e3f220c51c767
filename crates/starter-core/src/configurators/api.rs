use super::{edit, remove_dirs, remove_file, Configurator, Context};
use crate::catalog::{Archetype, PackageRef};
use crate::plan::ConfigurationPlan;
use crate::workspace::{paths, BootstrapFile};
use anyhow::Result;

/// Stateless JSON API: Sanctum via `install:api`, no web routes or views
pub struct Api;

impl Configurator for Api {
    fn archetype(&self) -> Archetype {
        Archetype::Api
    }

    fn configure(&self, _plan: &ConfigurationPlan, ctx: &Context<'_>) -> Result<()> {
        ctx.ui.info("Configuring API application...")?;

        // installs Sanctum and creates routes/api.php
        ctx.installer.run_native_command("install:api", &[])?;

        remove_file(ctx, "Removing web routes", paths::WEB_ROUTES)?;
        remove_dirs(ctx, "Removing views directory", &[paths::VIEWS_DIR])?;

        edit(ctx, "Optimizing for API", paths::BOOTSTRAP_APP, |source| {
            let mut bootstrap = BootstrapFile::parse(source)?;
            bootstrap
                .remove_argument("web")
                .then(|| bootstrap.render())
        })?;

        ctx.ui.success("API configuration complete!")?;
        Ok(())
    }

    fn required_packages(&self) -> Vec<PackageRef> {
        vec![PackageRef::new("laravel/sanctum")]
    }

    fn optional_packages(&self) -> Vec<PackageRef> {
        vec![
            PackageRef::new("dedoc/scramble"),
            PackageRef::new("spatie/laravel-query-builder"),
            PackageRef::new("league/fractal"),
        ]
    }
}
