use super::{append_api_routes, write_file, Api, Configurator, Context, Web};
use crate::catalog::{Archetype, Capability, Feature, PackageRef};
use crate::plan::ConfigurationPlan;
use crate::templates;
use crate::ui::{choose_many, Choice};
use crate::workspace::{paths, EnvFile};
use anyhow::Result;
use strum::{EnumIter, IntoEnumIterator};

/// LLM provider configured through Prism
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum AiProvider {
    OpenAi,
    Anthropic,
    Google,
    Ollama,
}

impl AiProvider {
    pub fn key(&self) -> &'static str {
        match self {
            AiProvider::OpenAi => "openai",
            AiProvider::Anthropic => "anthropic",
            AiProvider::Google => "google",
            AiProvider::Ollama => "ollama",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AiProvider::OpenAi => "OpenAI (GPT-4, GPT-3.5)",
            AiProvider::Anthropic => "Anthropic (Claude)",
            AiProvider::Google => "Google (Gemini)",
            AiProvider::Ollama => "Ollama (Local LLMs)",
        }
    }

    /// Placeholder `.env.example` entry
    pub fn env_entry(&self) -> (&'static str, &'static str) {
        match self {
            AiProvider::OpenAi => ("OPENAI_API_KEY", "your-openai-key"),
            AiProvider::Anthropic => ("ANTHROPIC_API_KEY", "your-anthropic-key"),
            AiProvider::Google => ("GOOGLE_API_KEY", "your-google-key"),
            AiProvider::Ollama => ("OLLAMA_URL", "http://localhost:11434"),
        }
    }
}

/// Web or API application with Prism, provider keys and example AI actions
pub struct AiPowered;

impl AiPowered {
    fn base(plan: &ConfigurationPlan) -> Box<dyn Configurator> {
        if plan.has_capability(Capability::WebApp) {
            Box::new(Web)
        } else {
            Box::new(Api)
        }
    }

    fn choose_providers(ctx: &Context<'_>) -> Result<Vec<AiProvider>> {
        let options: Vec<_> = AiProvider::iter()
            .map(|p| {
                (
                    p,
                    Choice::new(p.key(), p.label())
                        .with_hint("Prism supports all of these with the same API"),
                )
            })
            .collect();
        choose_many(
            ctx.ui,
            "Which AI providers to configure?",
            &options,
            &[AiProvider::OpenAi, AiProvider::Anthropic],
        )
    }

    fn configure_providers(ctx: &Context<'_>, providers: &[AiProvider]) -> Result<bool> {
        ctx.tasks.run("Configuring AI providers", || {
            let current = if ctx.workspace.exists(paths::ENV_EXAMPLE) {
                ctx.workspace.read(paths::ENV_EXAMPLE)?
            } else {
                String::new()
            };

            let mut env = EnvFile::parse(&current);
            let entries: Vec<_> = providers.iter().map(AiProvider::env_entry).collect();
            if env.append_section("AI Configuration", &entries) > 0 {
                ctx.workspace.write(paths::ENV_EXAMPLE, &env.render())?;
            }
            Ok(true)
        })
    }
}

impl Configurator for AiPowered {
    fn archetype(&self) -> Archetype {
        Archetype::AiPowered
    }

    fn configure(&self, plan: &ConfigurationPlan, ctx: &Context<'_>) -> Result<()> {
        ctx.ui.info("Configuring AI-Powered Application...")?;

        Self::base(plan).configure(plan, ctx)?;

        ctx.installer.install("echolabsdev/prism", None)?;

        let providers = Self::choose_providers(ctx)?;
        Self::configure_providers(ctx, &providers)?;

        if plan.has_feature(Feature::AiVector) {
            ctx.installer.install("pgvector/pgvector-php", None)?;
            ctx.ui.warning(
                "Remember to enable pgvector extension: CREATE EXTENSION IF NOT EXISTS vector;",
            )?;
        }

        write_file(
            ctx,
            "Creating ChatWithAI action",
            "app/Actions/AI/ChatWithAI.php",
            templates::CHAT_ACTION,
        )?;
        write_file(
            ctx,
            "Creating GenerateEmbedding action",
            "app/Actions/AI/GenerateEmbedding.php",
            templates::EMBEDDING_ACTION,
        )?;

        append_api_routes(ctx, "Setting up AI rate limiting", "ai", templates::AI_ROUTES)?;

        ctx.ui.success("AI-Powered Application configured!")?;
        Ok(())
    }

    fn required_packages(&self) -> Vec<PackageRef> {
        vec![PackageRef::new("echolabsdev/prism")]
    }

    fn recommended_packages(&self) -> Vec<PackageRef> {
        vec![PackageRef::new("pgvector/pgvector-php")]
    }

    fn optional_packages(&self) -> Vec<PackageRef> {
        vec![PackageRef::new("predis/predis")]
    }
}
