//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use stencil_core::domain::StructureVariant;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stencil",
    bin_name = "stencil",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "\u{26a1} Project template tasks",
    long_about = "Stencil drives the project template: it generates new \
                  projects through cookiecutter, wraps the day-to-day tool \
                  invocations, and provides the post-generation hook the \
                  template calls after substitution.",
    after_help = "EXAMPLES:\n\
        \x20 stencil template\n\
        \x20 stencil template --project-structure advanced\n\
        \x20 stencil requirements && stencil test\n\
        \x20 stencil actions",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project from the template.
    #[command(
        visible_alias = "t",
        about = "Create a new project from the template",
        after_help = "EXAMPLES:\n\
            \x20 stencil template\n\
            \x20 stencil template --project-structure advanced"
    )]
    Template(TemplateArgs),

    /// Install project requirements.
    #[command(about = "Install project requirements (uv sync)")]
    Requirements,

    /// Run tests.
    #[command(about = "Run the test suite")]
    Test,

    /// Remove generated projects and tool caches.
    #[command(about = "Clean up generated output and caches")]
    Clean,

    /// Run the GitHub Actions workflows locally.
    #[command(
        about = "Run CI workflows locally",
        after_help = "Lists the available jobs first, then executes them with \
                      artifacts under /tmp/artifacts."
    )]
    Actions,

    /// Post-generation hook, invoked by the template engine.
    #[command(
        about = "Validate substituted template values and trim the project \
                 (called by the template's post-generation hook)",
        hide = true
    )]
    Hook(HookArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stencil completions bash > ~/.local/share/bash-completion/completions/stencil\n\
            \x20 stencil completions zsh  > ~/.zfunc/_stencil\n\
            \x20 stencil completions fish > ~/.config/fish/completions/stencil.fish"
    )]
    Completions(CompletionsArgs),
}

// ── template ──────────────────────────────────────────────────────────────────

/// Arguments for `stencil template`.
#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Structural variant of the generated project.
    #[arg(
        short = 's',
        long = "project-structure",
        value_name = "VARIANT",
        value_enum,
        default_value = "simple",
        help = "Project structure to generate"
    )]
    pub project_structure: Variant,
}

/// Structural variant as a CLI value enum.
///
/// Mirrors the domain's closed set; the conversion below is the only bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Variant {
    /// Minimal layout.
    Simple,
    /// Full layout with CI, docs, and containers.
    Advanced,
}

impl From<Variant> for StructureVariant {
    fn from(v: Variant) -> Self {
        match v {
            Variant::Simple => StructureVariant::Simple,
            Variant::Advanced => StructureVariant::Advanced,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", StructureVariant::from(*self))
    }
}

// ── hook ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil hook`.
///
/// The template's post-generation script passes the substituted variables
/// here verbatim; the generated project root is the working directory.
#[derive(Debug, Args)]
pub struct HookArgs {
    /// Substituted project name.
    #[arg(long = "project-name", value_name = "NAME")]
    pub project_name: String,

    /// Substituted Python version.
    #[arg(long = "python-version", value_name = "VERSION")]
    pub python_version: String,

    /// Substituted structural variant.
    #[arg(long = "project-structure", value_name = "VARIANT", value_enum)]
    pub project_structure: Variant,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stencil completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
