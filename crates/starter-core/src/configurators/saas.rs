use super::{edit_php_config, Configurator, Context, Web};
use crate::catalog::{Archetype, PackageRef};
use crate::plan::ConfigurationPlan;
use crate::ui::{choose_one, Choice};
use crate::workspace::paths;
use anyhow::Result;

const TENANCY_PROVIDER: &str = "Stancl\\Tenancy\\TenancyServiceProvider";
const PENNANT_PROVIDER: &str = "Laravel\\Pennant\\PennantServiceProvider";
const PERMISSION_PROVIDER: &str = "Spatie\\Permission\\PermissionServiceProvider";
const DATABASE_BOOTSTRAPPER: &str =
    "Stancl\\Tenancy\\Bootstrappers\\DatabaseTenancyBootstrapper::class";

/// Multi-tenancy strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tenancy {
    #[default]
    SingleDb,
    MultiDb,
}

impl Tenancy {
    fn choices() -> Vec<(Tenancy, Choice)> {
        vec![
            (
                Tenancy::SingleDb,
                Choice::new("single-db", "Single Database (tenant_id column)"),
            ),
            (
                Tenancy::MultiDb,
                Choice::new("multi-db", "Multiple Databases (isolated)"),
            ),
        ]
    }
}

/// Subscription billing provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Billing {
    #[default]
    Stripe,
    Paddle,
}

impl Billing {
    fn choices() -> Vec<(Billing, Choice)> {
        vec![
            (Billing::Stripe, Choice::new("stripe", "Stripe (recommended)")),
            (Billing::Paddle, Choice::new("paddle", "Paddle")),
        ]
    }

    pub fn package(&self) -> &'static str {
        match self {
            Billing::Stripe => "laravel/cashier-stripe",
            Billing::Paddle => "laravel/cashier-paddle",
        }
    }
}

/// Multi-tenant web platform with billing, feature flags, roles and teams
pub struct Saas;

impl Saas {
    fn install_tenancy(ctx: &Context<'_>, tenancy: Tenancy) -> Result<()> {
        ctx.installer.install("stancl/tenancy", Some("^4.0"))?;
        ctx.installer.publish(TENANCY_PROVIDER, None)?;
        ctx.installer.run_native_command("tenancy:install", &[])?;

        if tenancy == Tenancy::MultiDb {
            edit_php_config(
                ctx,
                "Configuring multi-database tenancy",
                paths::TENANCY_CONFIG,
                |config| config.append_to_list("bootstrappers", DATABASE_BOOTSTRAPPER),
            )?;
        }
        Ok(())
    }

    fn install_billing(ctx: &Context<'_>, billing: Billing) -> Result<()> {
        ctx.installer.install(billing.package(), None)?;
        ctx.installer.publish_tag("cashier-migrations")?;
        ctx.installer.run_migrations()?;
        ctx.installer.make_model("Plan")?;
        Ok(())
    }
}

impl Configurator for Saas {
    fn archetype(&self) -> Archetype {
        Archetype::Saas
    }

    fn configure(&self, plan: &ConfigurationPlan, ctx: &Context<'_>) -> Result<()> {
        ctx.ui.info("Configuring SaaS Platform...")?;

        Web.configure(plan, ctx)?;

        let tenancy = choose_one(
            ctx.ui,
            "Multi-tenancy strategy?",
            &Tenancy::choices(),
            Tenancy::default(),
        )?;
        Self::install_tenancy(ctx, tenancy)?;

        let billing = choose_one(
            ctx.ui,
            "Billing provider?",
            &Billing::choices(),
            Billing::default(),
        )?;
        Self::install_billing(ctx, billing)?;

        ctx.installer.install("laravel/pennant", None)?;
        ctx.installer.publish(PENNANT_PROVIDER, None)?;

        ctx.installer.install("spatie/laravel-permission", None)?;
        ctx.installer.publish(PERMISSION_PROVIDER, None)?;
        ctx.installer.run_migrations()?;

        ctx.installer.make_model("Team")?;
        ctx.installer.make_model("TeamInvitation")?;

        ctx.ui.success("SaaS Platform configured!")?;
        Ok(())
    }

    fn required_packages(&self) -> Vec<PackageRef> {
        vec![
            PackageRef::new("stancl/tenancy"),
            PackageRef::new("laravel/cashier-stripe"),
        ]
    }

    fn recommended_packages(&self) -> Vec<PackageRef> {
        vec![
            PackageRef::new("laravel/pennant"),
            PackageRef::new("spatie/laravel-permission"),
        ]
    }

    fn optional_packages(&self) -> Vec<PackageRef> {
        vec![
            PackageRef::new("laravel/horizon"),
            PackageRef::new("laravel/nova"),
        ]
    }
}
