use super::{write_file, Configurator, Context};
use crate::catalog::{Archetype, PackageRef};
use crate::plan::ConfigurationPlan;
use crate::templates;
use crate::ui::{choose_one, Choice};
use crate::workspace::paths;
use anyhow::Result;
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::debug;

/// Inertia client stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Frontend {
    #[default]
    React,
    Vue,
    Svelte,
}

impl Frontend {
    pub fn label(&self) -> &'static str {
        match self {
            Frontend::React => "React (recommended)",
            Frontend::Vue => "Vue 3",
            Frontend::Svelte => "Svelte",
        }
    }

    pub fn npm_packages(&self) -> &'static [&'static str] {
        match self {
            Frontend::React => &["@inertiajs/react", "react", "react-dom"],
            Frontend::Vue => &["@inertiajs/vue3", "vue@^3"],
            Frontend::Svelte => &["@inertiajs/svelte", "svelte"],
        }
    }

    /// Path of the generated client entry file
    pub fn app_path(&self) -> String {
        let extension = match self {
            Frontend::React => "jsx",
            Frontend::Vue => "vue",
            Frontend::Svelte => "svelte",
        };
        format!("{}/app.{}", paths::JS_DIR, extension)
    }

    pub fn app_template(&self) -> &'static str {
        match self {
            Frontend::React => templates::REACT_APP,
            Frontend::Vue => templates::VUE_APP,
            Frontend::Svelte => templates::SVELTE_APP,
        }
    }

    fn vite_plugin_import(&self) -> &'static str {
        match self {
            Frontend::React => "import react from '@vitejs/plugin-react';",
            Frontend::Vue => "import vue from '@vitejs/plugin-vue';",
            Frontend::Svelte => "import { svelte } from '@sveltejs/vite-plugin-svelte';",
        }
    }

    /// Build config whose input is the generated entry file
    pub fn vite_config(&self) -> String {
        let call = self.to_string();
        let entry = self.app_path();
        templates::render(
            templates::VITE_CONFIG,
            &[
                ("plugin_import", self.vite_plugin_import()),
                ("entry", &entry),
                ("plugin_call", &call),
            ],
        )
    }
}

/// Inertia web application with a JavaScript frontend
pub struct Web;

impl Web {
    fn choose_frontend(ctx: &Context<'_>) -> Result<Frontend> {
        let options: Vec<_> = Frontend::iter()
            .map(|f| (f, Choice::new(f.to_string(), f.label())))
            .collect();
        choose_one(ctx.ui, "Which frontend framework?", &options, Frontend::default())
    }
}

impl Configurator for Web {
    fn archetype(&self) -> Archetype {
        Archetype::Web
    }

    fn configure(&self, _plan: &ConfigurationPlan, ctx: &Context<'_>) -> Result<()> {
        ctx.ui.info("Configuring Web Application...")?;

        let frontend = Self::choose_frontend(ctx)?;

        ctx.installer.install("inertiajs/inertia-laravel", None)?;
        ctx.installer.npm_install(frontend.npm_packages())?;
        ctx.installer.run_native_command("inertia:middleware", &[])?;

        ctx.installer.run_native_command("install:api", &[])?;

        debug!(%frontend, "server-side rendering not enabled");

        let app_path = frontend.app_path();
        write_file(
            ctx,
            &format!("Creating {}", app_path),
            &app_path,
            frontend.app_template(),
        )?;
        write_file(
            ctx,
            "Updating vite.config.js",
            paths::VITE_CONFIG,
            &frontend.vite_config(),
        )?;

        ctx.ui.success("Web Application configured!")?;
        ctx.ui.info("Next: npm install && npm run dev")?;
        Ok(())
    }

    fn required_packages(&self) -> Vec<PackageRef> {
        vec![PackageRef::new("inertiajs/inertia-laravel")]
    }

    fn recommended_packages(&self) -> Vec<PackageRef> {
        vec![PackageRef::new("laravel/sanctum")]
    }

    fn optional_packages(&self) -> Vec<PackageRef> {
        vec![
            PackageRef::new("spatie/laravel-permission"),
            PackageRef::new("laravel/socialite"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_files() {
        assert_eq!(Frontend::React.app_path(), "resources/js/app.jsx");
        assert_eq!(Frontend::Vue.app_path(), "resources/js/app.vue");
        assert_eq!(Frontend::Svelte.app_path(), "resources/js/app.svelte");
    }

    #[test]
    fn test_vite_config_per_frontend() {
        let react = Frontend::React.vite_config();
        assert!(react.contains("import react from '@vitejs/plugin-react';"));
        assert!(react.contains("'resources/js/app.jsx'"));
        assert!(react.contains("react(),"));

        let svelte = Frontend::Svelte.vite_config();
        assert!(svelte.contains("import { svelte } from '@sveltejs/vite-plugin-svelte';"));
        assert!(svelte.contains("input: ['resources/css/app.css', 'resources/js/app.svelte'],"));
        assert!(!svelte.contains("app.js'"));
        assert!(svelte.contains("svelte(),"));
    }
}
