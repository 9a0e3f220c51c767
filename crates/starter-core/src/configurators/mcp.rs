use super::{edit, remove_file, remove_frontend_assets, write_file, Configurator, Context};
use crate::catalog::{Archetype, Capability, PackageRef};
use crate::plan::ConfigurationPlan;
use crate::templates;
use crate::workspace::bootstrap::CONSOLE_ROUTES;
use crate::workspace::{paths, BootstrapFile};
use anyhow::Result;

const MCP_PROVIDER: &str = "Laravel\\Mcp\\McpServiceProvider";

/// Console-only Model Context Protocol server
pub struct Mcp;

impl Configurator for Mcp {
    fn archetype(&self) -> Archetype {
        Archetype::Mcp
    }

    fn configure(&self, plan: &ConfigurationPlan, ctx: &Context<'_>) -> Result<()> {
        ctx.ui.info("Configuring MCP Server...")?;

        ctx.installer.install("laravel/mcp", None)?;
        ctx.installer.publish(MCP_PROVIDER, None)?;

        remove_file(ctx, "Removing web routes", paths::WEB_ROUTES)?;
        remove_file(ctx, "Removing API routes", paths::API_ROUTES)?;
        remove_frontend_assets(ctx)?;

        edit(ctx, "Updating bootstrap/app.php", paths::BOOTSTRAP_APP, |source| {
            let mut bootstrap = BootstrapFile::parse(source)?;
            bootstrap.retain_only(&["commands"]);
            if bootstrap.argument("commands").is_none() {
                bootstrap.set_argument("commands", CONSOLE_ROUTES);
            }
            Some(bootstrap.render())
        })?;

        if plan.has_capability(Capability::Ai) {
            ctx.installer.install("echolabsdev/prism", None)?;
        }

        write_file(
            ctx,
            "Creating example MCP tools",
            "app/Mcp/Tools/ExampleTool.php",
            templates::MCP_EXAMPLE_TOOL,
        )?;

        ctx.ui.success("MCP Server ready!")?;
        ctx.ui.info("Test with: php artisan mcp:serve")?;
        Ok(())
    }

    fn required_packages(&self) -> Vec<PackageRef> {
        vec![PackageRef::new("laravel/mcp")]
    }

    fn optional_packages(&self) -> Vec<PackageRef> {
        vec![PackageRef::new("echolabsdev/prism")]
    }
}
