//! targetgen CLI entrypoint
//! Parses command-line arguments and dispatches to the generator library.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::{Path, PathBuf};
use std::sync::Arc;

use targetgen::generation::GrammarModel;
use targetgen::generation::rules::find_collisions;
use targetgen::infrastructure::{
    FileSystemOutputService, FileSystemTemplateLoader, RecognizerRenderer,
};
use targetgen::{Config, GenerationContext, GenerationError, TargetRegistry};

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "targetgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Inspect the registered target languages
    Targets {
        #[command(subcommand)]
        action: TargetActions,
    },
    /// Report symbols that collide with a target's reserved words
    Check {
        /// Target language name (case-insensitive)
        target: String,
        /// Grammar symbols to check
        #[arg(required = true)]
        symbols: Vec<String>,
    },
    /// Render text the way a target's templates would
    Escape {
        /// Target language name (case-insensitive)
        target: String,
        /// Text to render
        text: String,
        /// Render mode passed to the target's string renderer
        #[arg(long)]
        format: Option<String>,
        /// Escape as a quoted target string literal instead
        #[arg(long, conflicts_with = "format")]
        literal: bool,
    },
    /// Generate recognizer sources for a grammar
    Generate {
        /// Grammar description (YAML or JSON)
        #[arg(long)]
        grammar: PathBuf,
        /// Target language name
        #[arg(long)]
        target: Option<String>,
        /// Custom template directory
        #[arg(long)]
        template_dir: Option<PathBuf>,
        /// Output directory for generated code
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum TargetActions {
    /// List registered targets
    List,
    /// Show identity, capabilities and reserved words of a target
    Info {
        /// Target language name (case-insensitive)
        target: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO, written to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = TargetRegistry::new();

    match &cli.command {
        Commands::Targets { action } => match action {
            TargetActions::List => list_targets(&registry),
            TargetActions::Info { target } => target_info(&registry, target)?,
        },
        Commands::Check { target, symbols } => check_symbols(&registry, target, symbols)?,
        Commands::Escape {
            target,
            text,
            format,
            literal,
        } => escape_text(&registry, target, text, format.as_deref(), *literal)?,
        Commands::Generate {
            grammar,
            target,
            template_dir,
            output_dir,
            config,
        } => {
            let config = load_config(config.as_deref())?.with_overrides(
                target.clone(),
                template_dir.clone(),
                output_dir.clone(),
            );
            generate(&registry, &config, grammar)?
        }
    }
    Ok(())
}

fn list_targets(registry: &TargetRegistry) {
    for target in registry.targets() {
        println!(
            "{}\tversion={}\toverloading={}\tsegment_limit={}",
            target.name(),
            target.version(),
            target.supports_overloaded_methods(),
            target.serialized_segment_limit()
        );
    }
}

fn target_info(registry: &TargetRegistry, name: &str) -> anyhow::Result<()> {
    let target = registry.get(name)?;
    let reserved = target.reserved_words();

    println!("Target: {}", target.identity());
    println!(
        "Supports overloaded methods: {}",
        target.supports_overloaded_methods()
    );
    println!(
        "Serialized segment limit: {}",
        target.serialized_segment_limit()
    );
    println!("Reserved words ({}):", reserved.words().len());
    for word in reserved.sorted() {
        println!("  {word}");
    }
    Ok(())
}

fn check_symbols(registry: &TargetRegistry, name: &str, symbols: &[String]) -> anyhow::Result<()> {
    let target = registry.get(name)?;
    let collisions = find_collisions(target.as_ref(), symbols.iter().map(String::as_str));

    if collisions.is_empty() {
        println!("No collisions for target {}", target.name());
        return Ok(());
    }

    for symbol in &collisions {
        println!("{symbol}");
    }
    Err(GenerationError::ReservedSymbol {
        target: target.name().to_string(),
        symbols: collisions.iter().map(|s| s.to_string()).collect(),
    }
    .into())
}

fn escape_text(
    registry: &TargetRegistry,
    name: &str,
    text: &str,
    format: Option<&str>,
    literal: bool,
) -> anyhow::Result<()> {
    let target = registry.get(name)?;
    let rendered = if literal {
        target.target_string_literal(text, true)
    } else {
        target.render_string(text, format)
    };
    println!("{rendered}");
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn generate(registry: &TargetRegistry, config: &Config, grammar_path: &Path) -> anyhow::Result<()> {
    let target = registry.get(config.target_name())?;
    info!(
        grammar = %grammar_path.display(),
        target_language = %target.identity(),
        "Generating recognizer"
    );

    let grammar = GrammarModel::from_path(grammar_path)
        .with_context(|| format!("Failed to load grammar {}", grammar_path.display()))?;

    let mut context = match &config.template_dir {
        Some(dir) => {
            debug!(template_dir = %dir.display(), "Using custom template directory");
            GenerationContext::new(Arc::new(FileSystemTemplateLoader::new(dir.clone())))
        }
        None => GenerationContext::embedded(),
    };

    let artifacts = RecognizerRenderer::new()
        .render(target.as_ref(), &mut context, &grammar)
        .context("Failed to render recognizer")?;

    let output = FileSystemOutputService::new(config.output_dir());
    let written = output
        .write_artifacts(&artifacts)
        .context("Failed to write generated files")?;

    for path in &written {
        println!("{}", path.display());
    }
    info!(
        output_dir = %output.root().display(),
        files = written.len(),
        "Successfully generated recognizer"
    );
    Ok(())
}
