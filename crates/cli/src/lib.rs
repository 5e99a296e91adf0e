use anyhow::{bail, Context as AnyhowContext, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};
use intent_catalog::{Catalog, CatalogEntry, Category};
use intent_policy::{IntentProfile, PlacementLayout, BUILTIN_PROFILES};
use intent_sketch::{
    GeoShape, SketchClassification, SketchClassifier, SketchFeatures, SketchSignal,
    SketchThresholds,
};
use intent_text::{MatchKind, MatchTuning, ScoredEntry, TextMatcher};
use serde::Serialize;
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

mod preview;
mod replay;
mod report;

use replay::{read_events, Replay};

const PROFILE_ENV: &str = "CANVAS_INTENT_PROFILE";

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "canvas-intent")]
#[command(about = "Resolve spoken phrases and sketches into UI components", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Emit JSON on stdout (implies --quiet)
    #[arg(long, global = true)]
    json: bool,

    /// Profile name (default|strict) or path to a JSON profile
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Component catalog JSON (default: bundled catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a spoken phrase against the catalog
    Resolve(ResolveArgs),

    /// Classify a finished sketch by shape and size
    Classify(ClassifyArgs),

    /// List catalog components
    Catalog(CatalogArgs),

    /// Drive a full session from an NDJSON event script
    Replay(ReplayArgs),

    /// Show the resolved profile
    Profile,
}

#[derive(Args)]
struct ResolveArgs {
    /// Phrase as transcribed (words are joined with spaces)
    #[arg(required = true)]
    phrase: Vec<String>,

    /// Include the full distance ranking
    #[arg(long)]
    explain: bool,
}

#[derive(Args)]
#[command(group(ArgGroup::new("kind").required(true).args(["geo", "freehand"])))]
struct ClassifyArgs {
    /// Named primitive (rectangle, ellipse, star, ...)
    #[arg(long)]
    geo: Option<String>,

    /// Freehand stroke
    #[arg(long)]
    freehand: bool,

    /// Freehand stroke ends near its start
    #[arg(long, requires = "freehand")]
    closed: bool,

    /// Number of points in the freehand stroke
    #[arg(long, requires = "freehand")]
    points: Option<usize>,

    #[arg(long, allow_negative_numbers = true)]
    width: f64,

    #[arg(long, allow_negative_numbers = true)]
    height: f64,
}

#[derive(Args)]
struct CatalogArgs {
    /// Only list one category
    #[arg(long)]
    category: Option<String>,
}

#[derive(Args)]
struct ReplayArgs {
    /// Script file, or '-' for stdin
    input: String,
}

#[derive(Serialize)]
struct ResolveOutput<'a> {
    phrase: &'a str,
    #[serde(rename = "type")]
    kind: MatchKind,
    matches: Vec<&'a CatalogEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ranking: Option<Vec<ScoredEntry<'a>>>,
}

#[derive(Serialize)]
struct ClassifyOutput<'a> {
    signal: &'a SketchSignal,
    features: SketchFeatures,
    #[serde(flatten)]
    classification: SketchClassification<'a>,
}

#[derive(Serialize)]
struct ProfileOutput<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    settle_window_ms: u64,
    text: &'a MatchTuning,
    sketch: &'a SketchThresholds,
    placement: &'a PlacementLayout,
}

pub fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();
    if cli.json {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let catalog = load_catalog(cli.catalog.as_deref())?;
    let catalog = catalog.as_ref();

    match cli.command {
        Commands::Resolve(ref args) => run_resolve(&cli, catalog, args),
        Commands::Classify(ref args) => run_classify(&cli, catalog, args),
        Commands::Catalog(ref args) => run_catalog(&cli, catalog, args),
        Commands::Replay(ref args) => run_replay(&cli, catalog, args),
        Commands::Profile => run_profile(&cli),
    }
}

enum LoadedCatalog {
    Builtin(&'static Catalog),
    Owned(Catalog),
}

impl AsRef<Catalog> for LoadedCatalog {
    fn as_ref(&self) -> &Catalog {
        match self {
            LoadedCatalog::Builtin(catalog) => catalog,
            LoadedCatalog::Owned(catalog) => catalog,
        }
    }
}

fn load_catalog(path: Option<&Path>) -> Result<LoadedCatalog> {
    let Some(path) = path else {
        return Ok(LoadedCatalog::Builtin(Catalog::builtin()));
    };
    let catalog = Catalog::from_file(path)
        .with_context(|| format!("Failed to load catalog {}", path.display()))?;
    Ok(LoadedCatalog::Owned(catalog))
}

/// `--profile`, then `CANVAS_INTENT_PROFILE`, then "default". Built-in
/// names win over files of the same name.
fn resolve_profile(flag: Option<&str>) -> Result<IntentProfile> {
    let requested = flag
        .map(str::to_string)
        .or_else(|| env::var(PROFILE_ENV).ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| "default".to_string());

    if let Some(profile) = IntentProfile::builtin(&requested) {
        log::debug!("Using built-in profile '{requested}'");
        return Ok(profile);
    }

    let path = Path::new(&requested);
    if path.is_file() {
        let profile = IntentProfile::from_file(path)
            .with_context(|| format!("Failed to load profile {}", path.display()))?;
        log::debug!("Using profile '{}' from {}", profile.name(), path.display());
        return Ok(profile);
    }

    bail!(
        "Unknown profile '{requested}' (built-in: {}; or pass a path to a JSON file)",
        BUILTIN_PROFILES.join(", ")
    )
}

fn run_resolve(cli: &Cli, catalog: &Catalog, args: &ResolveArgs) -> Result<()> {
    let profile = resolve_profile(cli.profile.as_deref())?;
    let matcher = TextMatcher::new(catalog, profile.text().clone())
        .with_context(|| format!("Profile '{}' has invalid text tuning", profile.name()))?;

    let phrase = args.phrase.join(" ");
    let verdict = matcher.resolve(&phrase);
    let ranking = args.explain.then(|| matcher.rank(&phrase));
    log::debug!("'{phrase}' -> {:?}", verdict.names());

    if cli.json {
        let output = ResolveOutput {
            phrase: &phrase,
            kind: verdict.kind(),
            matches: verdict.candidates(),
            ranking,
        };
        return print_stdout(&serde_json::to_string_pretty(&output)?);
    }

    print_stdout(&report::render_verdict(&phrase, &verdict, ranking.as_deref()))
}

fn run_classify(cli: &Cli, catalog: &Catalog, args: &ClassifyArgs) -> Result<()> {
    let profile = resolve_profile(cli.profile.as_deref())?;
    let classifier = SketchClassifier::new(catalog, profile.sketch().clone())
        .with_context(|| format!("Profile '{}' has invalid sketch thresholds", profile.name()))?;

    let signal = match &args.geo {
        Some(shape) => SketchSignal::geo(GeoShape::from(shape.as_str()), args.width, args.height),
        None => SketchSignal::Freehand {
            width: args.width,
            height: args.height,
            closed: args.closed,
            point_count: args.points.unwrap_or(0),
        },
    };
    let features = classifier.features(&signal);
    let classification = classifier.classify(&signal);

    if cli.json {
        let output = ClassifyOutput {
            signal: &signal,
            features,
            classification,
        };
        return print_stdout(&serde_json::to_string_pretty(&output)?);
    }

    print_stdout(&report::render_classification(
        &signal,
        &features,
        &classification,
    ))
}

fn run_catalog(cli: &Cli, catalog: &Catalog, args: &CatalogArgs) -> Result<()> {
    let entries: Vec<&CatalogEntry> = match &args.category {
        Some(raw) => {
            let category: Category = raw.parse()?;
            catalog.by_category(category).collect()
        }
        None => catalog.iter().collect(),
    };

    if cli.json {
        return print_stdout(&serde_json::to_string_pretty(&entries)?);
    }
    print_stdout(&report::render_catalog(entries))
}

fn run_replay(cli: &Cli, catalog: &Catalog, args: &ReplayArgs) -> Result<()> {
    let profile = resolve_profile(cli.profile.as_deref())?;
    let events = if args.input == "-" {
        read_events(io::stdin().lock())?
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("Failed to open replay script {}", args.input))?;
        read_events(BufReader::new(file))?
    };
    log::info!(
        "Replaying {} events with profile '{}'",
        events.len(),
        profile.name()
    );
    if let Some(description) = profile.description() {
        log::debug!("{description}");
    }

    let mut replay = Replay::new(catalog, &profile)?;
    for event in events {
        for line in replay.apply(event) {
            let text = if cli.json {
                serde_json::to_string(&line)?
            } else {
                report::render_replay_line(&line)
            };
            print_stdout(&text)?;
        }
    }
    Ok(())
}

fn run_profile(cli: &Cli) -> Result<()> {
    let profile = resolve_profile(cli.profile.as_deref())?;
    if cli.json {
        let output = ProfileOutput {
            name: profile.name(),
            description: profile.description(),
            settle_window_ms: u64::try_from(profile.settle_window().as_millis()).unwrap_or(u64::MAX),
            text: profile.text(),
            sketch: profile.sketch(),
            placement: profile.placement(),
        };
        return print_stdout(&serde_json::to_string_pretty(&output)?);
    }
    print_stdout(&report::render_profile(&profile))
}
