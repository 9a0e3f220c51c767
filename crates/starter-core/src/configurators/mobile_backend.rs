use super::{edit_php_config, remove_dirs, remove_file, Configurator, Context};
use crate::catalog::{Archetype, Capability, PackageRef};
use crate::plan::ConfigurationPlan;
use crate::workspace::paths;
use anyhow::Result;

/// API backend for mobile clients: token auth, optional broadcasting, image processing
pub struct MobileBackend;

impl Configurator for MobileBackend {
    fn archetype(&self) -> Archetype {
        Archetype::MobileBackend
    }

    fn configure(&self, plan: &ConfigurationPlan, ctx: &Context<'_>) -> Result<()> {
        ctx.ui.info("Configuring Mobile Backend...")?;

        ctx.installer.run_native_command("install:api", &[])?;

        if plan.has_capability(Capability::RealTime) {
            ctx.installer.run_native_command("install:broadcasting", &[])?;
        }

        ctx.installer.install("intervention/image", Some("^3.0"))?;

        remove_file(ctx, "Removing web routes", paths::WEB_ROUTES)?;
        remove_dirs(ctx, "Removing views", &[paths::VIEWS_DIR])?;

        // native apps send no browser origin
        edit_php_config(ctx, "Configuring CORS for mobile", paths::CORS_CONFIG, |cors| {
            cors.set("allowed_origins", "['*']")
        })?;

        ctx.ui.success("Mobile Backend configured!")?;
        Ok(())
    }

    fn required_packages(&self) -> Vec<PackageRef> {
        vec![PackageRef::new("laravel/sanctum")]
    }

    fn recommended_packages(&self) -> Vec<PackageRef> {
        vec![
            PackageRef::new("laravel/reverb"),
            PackageRef::new("intervention/image"),
        ]
    }

    fn optional_packages(&self) -> Vec<PackageRef> {
        vec![
            PackageRef::new("spatie/laravel-permission"),
            PackageRef::new("laravel/socialite"),
            PackageRef::new("spatie/laravel-medialibrary"),
        ]
    }
}
