use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use motion_blocks_core::{
    defaults, render, AnimationConfig, AppConfig, Compiler, Document, Element, IntersectionEntry,
    ElementId, RenderProps, TriggerRuntime,
};
use tracing_subscriber::EnvFilter;

fn main() -> motion_blocks_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Compile { block, format } => run_compile(&config, &block, format),
        Commands::Preview { block } => run_preview(&config, &block),
        Commands::Defaults => print_json(&defaults()),
        Commands::Simulate { block, events } => run_simulate(&config, &block, &events),
    }
}

fn load_block(path: &Path) -> motion_blocks_core::Result<AnimationConfig> {
    let text = std::fs::read_to_string(path)?;
    let block: AnimationConfig = serde_json::from_str(&text)?;
    tracing::info!(?path, %block, "loaded block attributes");
    Ok(block)
}

fn run_compile(
    config: &AppConfig,
    block: &Path,
    format: OutputFormat,
) -> motion_blocks_core::Result<()> {
    let block = load_block(block)?;
    match format {
        OutputFormat::Json => print_json(&Compiler::new(config.markup.clone()).compile(&block)),
        OutputFormat::Html => {
            let props = render::save_props(RenderProps::new(), &block, &config.markup);
            println!("{}", props.to_html_attributes());
            Ok(())
        }
    }
}

fn run_preview(config: &AppConfig, block: &Path) -> motion_blocks_core::Result<()> {
    let block = load_block(block)?;
    print_json(&render::preview_props(
        RenderProps::new(),
        &block,
        &config.markup,
    ))
}

fn run_simulate(
    config: &AppConfig,
    block: &Path,
    events: &[Visibility],
) -> motion_blocks_core::Result<()> {
    let block = load_block(block)?;
    let props = render::save_props(RenderProps::new(), &block, &config.markup);

    let mut document = Document::new();
    let id = document.insert(Element::from_props(props));
    let mut runtime = TriggerRuntime::from_config(config);
    runtime.init(&mut document);
    report(&runtime, &document, id, "load")?;

    for event in events {
        let entry = match event {
            Visibility::Enter => IntersectionEntry::visible(id),
            Visibility::Leave => IntersectionEntry::hidden(id),
        };
        if !runtime.dispatch(&mut document, entry) {
            tracing::info!(?event, "element no longer observed, event dropped");
        }
        report(&runtime, &document, id, &format!("{event:?}").to_lowercase())?;
    }
    Ok(())
}

fn report(
    runtime: &TriggerRuntime,
    document: &Document,
    id: ElementId,
    step: &str,
) -> motion_blocks_core::Result<()> {
    let element = document.get(id)?;
    let summary = serde_json::json!({
        "step": step,
        "phase": runtime.phase(id),
        "observed": runtime.is_observed(id),
        "classes": element.classes(),
        "style": element.style(),
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> motion_blocks_core::Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{text}");
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Compile and simulate block animations", long_about = None)]
struct Cli {
    /// JSON file with markup and runtime settings.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a block's animation attributes into persisted markup.
    Compile {
        /// JSON file with the block attributes.
        block: PathBuf,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print the live editor preview props for a block.
    Preview {
        /// JSON file with the block attributes.
        block: PathBuf,
    },
    /// Print the default animation attributes.
    Defaults,
    /// Run the trigger runtime on a block against scripted visibility events.
    Simulate {
        /// JSON file with the block attributes.
        block: PathBuf,
        /// Comma separated visibility changes, e.g. `enter,leave,enter`.
        #[arg(short, long, value_enum, value_delimiter = ',')]
        events: Vec<Visibility>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Classes, data attributes and custom properties as JSON.
    Json,
    /// Attribute text ready to splice into the block's root element.
    Html,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Visibility {
    Enter,
    Leave,
}
