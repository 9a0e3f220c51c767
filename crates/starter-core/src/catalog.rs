//! Static option tables offered by the wizard
//!
//! Every option is a closed enum whose kebab-case key round-trips through
//! `Display`/`FromStr` (strum) and serde. The declaration order is the order
//! options are presented in, and the derived `Ord` follows it so that
//! `BTreeSet`s iterate in catalog order.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// A package reference as passed to `composer require`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageRef {
    pub name: &'static str,
    pub version: Option<&'static str>,
}

impl PackageRef {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            version: None,
        }
    }

    pub const fn versioned(name: &'static str, version: &'static str) -> Self {
        Self {
            name,
            version: Some(version),
        }
    }
}

impl fmt::Display for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version {
            Some(version) => write!(f, "{}:{}", self.name, version),
            None => f.write_str(self.name),
        }
    }
}

/// Primary application shape, chosen first
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    Api,
    Web,
    Hybrid,
    MobileBackend,
    Microservice,
    Saas,
    AiPowered,
    Mcp,
}

impl Archetype {
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::Api => "Backend API (no frontend)",
            Archetype::Web => "Web Application (Inertia.js)",
            Archetype::Hybrid => "Hybrid (API + Web)",
            Archetype::MobileBackend => "Mobile Backend (iOS, Android, React Native)",
            Archetype::Microservice => "Microservice (minimal, optimized)",
            Archetype::Saas => "SaaS Platform (multi-tenant, billing)",
            Archetype::AiPowered => "AI-Powered (LLM integration)",
            Archetype::Mcp => "MCP Server (Model Context Protocol)",
        }
    }

    /// Keys of every archetype, in catalog order
    pub fn keys() -> Vec<&'static str> {
        Self::iter().map(<&'static str>::from).collect()
    }
}

impl Default for Archetype {
    fn default() -> Self {
        Archetype::Api
    }
}

/// Cross-cutting ability that unlocks further features
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    Mobile,
    WebApp,
    RealTime,
    Ai,
    Saas,
    Graphql,
}

impl Capability {
    pub fn label(&self) -> &'static str {
        match self {
            Capability::Mobile => "Mobile Backend (iOS, Android, React Native)",
            Capability::WebApp => "Web Application (Inertia.js)",
            Capability::RealTime => "Real-time (WebSockets via Reverb)",
            Capability::Ai => "AI-Powered (LLM integration)",
            Capability::Saas => "SaaS Features (multi-tenant, billing)",
            Capability::Graphql => "GraphQL API",
        }
    }
}

/// Fine-grained optional add-on
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    AuthSanctum,
    AuthPassport,
    AuthSocial,
    #[strum(serialize = "auth-2fa")]
    #[serde(rename = "auth-2fa")]
    AuthTwoFactor,
    WebsocketsReverb,
    FileIntervention,
    FileMediaLibrary,
    PerfOctane,
    PaymentStripe,
    PaymentPaddle,
    Permissions,
    MonitoringTelescope,
    MonitoringPulse,
    MonitoringSentry,
    AiPrism,
    AiVector,
    Backup,
}

/// How a selected feature gets installed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureInstall {
    /// `composer require` of a single package
    Package(PackageRef),
    /// A framework-native `install:*` command
    Native(&'static str),
}

impl Feature {
    pub fn label(&self) -> &'static str {
        match self {
            Feature::AuthSanctum => "API Authentication (Sanctum)",
            Feature::AuthPassport => "OAuth2 (Passport)",
            Feature::AuthSocial => "Social Login (Google, Apple, etc)",
            Feature::AuthTwoFactor => "Two-Factor Authentication",
            Feature::WebsocketsReverb => "WebSockets (Reverb)",
            Feature::FileIntervention => "Image Processing (Intervention)",
            Feature::FileMediaLibrary => "Media Library (Spatie)",
            Feature::PerfOctane => "Laravel Octane (10-50x faster)",
            Feature::PaymentStripe => "Stripe Payments",
            Feature::PaymentPaddle => "Paddle Payments",
            Feature::Permissions => "Roles & Permissions (Spatie)",
            Feature::MonitoringTelescope => "Telescope (dev)",
            Feature::MonitoringPulse => "Pulse (prod)",
            Feature::MonitoringSentry => "Sentry (error tracking)",
            Feature::AiPrism => "Prism PHP (universal AI SDK)",
            Feature::AiVector => "Vector DB (embeddings)",
            Feature::Backup => "Automated Backups (Spatie)",
        }
    }

    pub fn install(&self) -> FeatureInstall {
        use FeatureInstall::{Native, Package};
        match self {
            Feature::AuthSanctum => Package(PackageRef::versioned("laravel/sanctum", "^4.0")),
            Feature::AuthPassport => Package(PackageRef::versioned("laravel/passport", "^13.0")),
            Feature::AuthSocial => Package(PackageRef::versioned("laravel/socialite", "^5.0")),
            Feature::AuthTwoFactor => Package(PackageRef::new("laravel/fortify")),
            Feature::WebsocketsReverb => Native("install:broadcasting"),
            Feature::FileIntervention => {
                Package(PackageRef::versioned("intervention/image", "^3.0"))
            }
            Feature::FileMediaLibrary => {
                Package(PackageRef::versioned("spatie/laravel-medialibrary", "^11.0"))
            }
            Feature::PerfOctane => Package(PackageRef::versioned("laravel/octane", "^2.0")),
            Feature::PaymentStripe => {
                Package(PackageRef::versioned("laravel/cashier-stripe", "^15.0"))
            }
            Feature::PaymentPaddle => {
                Package(PackageRef::versioned("laravel/cashier-paddle", "^2.0"))
            }
            Feature::Permissions => {
                Package(PackageRef::versioned("spatie/laravel-permission", "^6.0"))
            }
            Feature::MonitoringTelescope => {
                Package(PackageRef::versioned("laravel/telescope", "^5.0"))
            }
            Feature::MonitoringPulse => Package(PackageRef::versioned("laravel/pulse", "^1.0")),
            Feature::MonitoringSentry => {
                Package(PackageRef::versioned("sentry/sentry-laravel", "^4.0"))
            }
            Feature::AiPrism => Package(PackageRef::versioned("echolabsdev/prism", "^0.1")),
            Feature::AiVector => Package(PackageRef::versioned("pgvector/pgvector-php", "^0.1")),
            Feature::Backup => Package(PackageRef::versioned("spatie/laravel-backup", "^9.0")),
        }
    }
}

macro_rules! infrastructure_option {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident, {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Display,
            EnumString,
            EnumIter,
            AsRefStr,
            Serialize,
            Deserialize,
        )]
        #[strum(serialize_all = "lowercase")]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }
    };
}

infrastructure_option!(
    /// Primary database connection
    Database, default = Pgsql, {
        Pgsql => "PostgreSQL (recommended)",
        Mysql => "MySQL",
        Sqlite => "SQLite (dev only)",
    }
);

infrastructure_option!(
    /// Cache store
    Cache, default = Redis, {
        Redis => "Redis (recommended)",
        Memcached => "Memcached",
        File => "File (simple)",
    }
);

infrastructure_option!(
    /// Queue connection
    Queue, default = Redis, {
        Redis => "Redis",
        Database => "Database",
        Sqs => "AWS SQS",
    }
);

infrastructure_option!(
    /// Production file storage disk
    Storage, default = S3, {
        S3 => "Amazon S3",
        Spaces => "DigitalOcean Spaces",
        R2 => "Cloudflare R2",
        Local => "Local only",
    }
);
