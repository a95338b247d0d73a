use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "chalkline", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile slide content (or raw intents) into a scene JSON.
    Compile(CompileArgs),
    /// Evaluate a compiled scene at one point in time and print the frame as JSON.
    Sample(SampleArgs),
    /// List the characters the glyph table covers.
    Glyphs,
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Input slide content JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Treat the input as a JSON array of semantic intents instead of slide content.
    #[arg(long)]
    intents: bool,

    /// Scene config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output scene JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Compiled scene JSON.
    #[arg(long)]
    scene: PathBuf,

    /// Scene time in seconds.
    #[arg(long)]
    at: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Glyphs => cmd_glyphs(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_intents_json(path: &Path) -> anyhow::Result<Vec<chalkline::SemanticIntent>> {
    let f = File::open(path).with_context(|| format!("open intents '{}'", path.display()))?;
    let intents = serde_json::from_reader(BufReader::new(f))
        .with_context(|| "parse semantic intents JSON")?;
    Ok(intents)
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => chalkline::SceneConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => chalkline::SceneConfig::default(),
    };
    let compiler = chalkline::SceneCompiler::new(config)?;

    let scene = if args.intents {
        compiler.compile(&read_intents_json(&args.in_path)?)
    } else {
        let content = chalkline::SlideContent::from_path(&args.in_path)
            .with_context(|| format!("load content '{}'", args.in_path.display()))?;
        compiler.compile_content(&content)
    };

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, scene.to_json_pretty()?)
        .with_context(|| format!("write scene '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} actions, {:.2}s)",
        args.out.display(),
        scene.actions.len(),
        scene.total_duration
    );
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let scene = chalkline::WhiteboardScene::from_path(&args.scene)
        .with_context(|| format!("load scene '{}'", args.scene.display()))?;
    let evaluator = chalkline::ActionEvaluator::new(chalkline::EvaluatorOpts::default());
    let frame = chalkline::evaluate_scene(&evaluator, &scene, args.at);

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &frame).with_context(|| "serialize frame JSON")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_glyphs() -> anyhow::Result<()> {
    let glyphs = chalkline::GlyphLibrary::new();
    let chars: String = glyphs.chars().into_iter().collect();
    let mut out = std::io::stdout().lock();
    writeln!(out, "{chars}")?;
    Ok(())
}
