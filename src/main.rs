//! `dynroute`: compile controller descriptors into route listings.
//!
//! ```text
//! dynroute --manifest controllers.toml compile --base api/v1 --controller UserController
//! dynroute --config dynroute.toml --manifest controllers.toml compile --format json
//! dynroute --config dynroute.toml --manifest controllers.toml watch --emit
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use dynamic_routes::config::{load_config, DynamicRoutesConfig, MountConfig};
use dynamic_routes::config::watcher::ManifestWatcher;
use dynamic_routes::observability::logging::init_logging;
use dynamic_routes::registration::RouteListing;
use dynamic_routes::routing::HttpVerb;
use dynamic_routes::{ControllerCompiler, ControllerRegistry, Route};

#[derive(Parser)]
#[command(name = "dynroute")]
#[command(about = "Convention-based route compiler for controller descriptors", long_about = None)]
struct Cli {
    /// Configuration file (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Controller descriptor manifest (TOML or JSON).
    #[arg(short, long, default_value = "controllers.toml")]
    manifest: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile routes once and print them
    Compile(TargetArgs),
    /// Compile routes and recompile whenever the manifest changes
    Watch(TargetArgs),
}

#[derive(Args, Clone)]
struct TargetArgs {
    /// Base path for --controller
    #[arg(short, long, default_value = "")]
    base: String,

    /// Compile this controller instead of the configured mounts
    #[arg(long)]
    controller: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write route listings to the configured emit directory
    #[arg(long)]
    emit: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct CompiledMount<'a> {
    controller: &'a str,
    base: &'a str,
    routes: &'a [Route],
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DynamicRoutesConfig::default(),
    };
    init_logging(&config.observability);

    tracing::debug!(
        manifest = %cli.manifest.display(),
        verb_matching = ?config.conventions.verb_matching,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Compile(args) => {
            let registry = ControllerRegistry::from_path(&cli.manifest)?;
            let failures = compile_all(&config, registry, &args)?;
            if failures > 0 {
                return Err(format!("{failures} controller(s) failed to compile").into());
            }
        }
        Commands::Watch(args) => watch(&config, &cli.manifest, &args).await?,
    }

    Ok(())
}

/// Mounts selected by the command line, falling back to the config.
fn mounts(config: &DynamicRoutesConfig, args: &TargetArgs) -> Vec<MountConfig> {
    match &args.controller {
        Some(controller) => vec![MountConfig {
            path: args.base.clone(),
            controller: controller.clone(),
        }],
        None => config.mounts.clone(),
    }
}

/// Compile, print and optionally emit every mount. Returns the number of
/// mounts that failed.
fn compile_all(
    config: &DynamicRoutesConfig,
    registry: ControllerRegistry,
    args: &TargetArgs,
) -> Result<usize, Box<dyn std::error::Error>> {
    let mounts = mounts(config, args);
    if mounts.is_empty() {
        return Err("nothing to compile: pass --controller or configure [[mounts]]".into());
    }

    let compiler = ControllerCompiler::new(registry, config.conventions.clone());
    let emit = args.emit || config.emit.enabled;
    let mut failures = 0;
    let mut seen: HashSet<(HttpVerb, String)> = HashSet::new();
    let mut compiled = Vec::new();

    for mount in &mounts {
        let routes = match compiler.compile(&mount.path, &mount.controller) {
            Ok(routes) => routes,
            Err(e) => {
                tracing::error!(controller = %mount.controller, error = %e, "Compilation failed");
                failures += 1;
                continue;
            }
        };

        for route in &routes {
            if !seen.insert((route.verb, route.slug.clone())) {
                tracing::warn!(
                    verb = %route.verb,
                    slug = %route.slug,
                    target = %route.target,
                    "Duplicate route across mounts; the first registration wins"
                );
            }
        }

        if emit {
            let directory = Path::new(&config.emit.directory);
            if let Err(e) = RouteListing::write(directory, &mount.controller, &routes) {
                tracing::error!(controller = %mount.controller, error = %e, "Failed to write route listing");
                failures += 1;
            }
        }

        compiled.push((mount, routes));
    }

    match args.format {
        OutputFormat::Text => {
            for (mount, routes) in &compiled {
                print!("{}", RouteListing::render(&mount.controller, routes));
            }
        }
        OutputFormat::Json => {
            let out: Vec<CompiledMount<'_>> = compiled
                .iter()
                .map(|(mount, routes)| CompiledMount {
                    controller: &mount.controller,
                    base: &mount.path,
                    routes,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(failures)
}

async fn watch(
    config: &DynamicRoutesConfig,
    manifest: &Path,
    args: &TargetArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = ControllerRegistry::from_path(manifest)?;
    let failures = compile_all(config, registry, args)?;
    if failures > 0 {
        tracing::error!(failures, "Initial compilation finished with failures; watching for fixes");
    }

    let (watcher, mut updates) = ManifestWatcher::new(manifest);
    let _watcher = watcher.run()?;

    loop {
        tokio::select! {
            update = updates.recv() => {
                let Some(registry) = update else { break };
                match compile_all(config, registry, args) {
                    Ok(0) => tracing::info!("Recompiled all mounts"),
                    Ok(failures) => tracing::error!(
                        failures,
                        "Recompilation finished with failures; see errors above"
                    ),
                    Err(e) => tracing::error!(error = %e, "Recompilation failed"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, stopping watcher");
                break;
            }
        }
    }

    Ok(())
}
