use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use specimen::{
    Catalog, Chrono, CompositorInput, CueTags, Form, Hook, Kbe, LookKey, SceneBackground,
    Signature,
};

#[derive(Parser, Debug)]
#[command(name = "specimen", version)]
struct Cli {
    /// Log pipeline events to stderr.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a single cue and print the specimen as JSON.
    Resolve(ResolveArgs),
    /// Resolve every cue in a catalog JSON and report failures.
    Check(CheckArgs),
    /// List the accepted keys for every axis.
    List,
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    #[arg(long)]
    signature: Signature,

    #[arg(long)]
    form: Form,

    #[arg(long)]
    chrono: Chrono,

    #[arg(long)]
    scene: SceneBackground,

    #[arg(long)]
    seed: i64,

    #[arg(long, default_value = "k")]
    kbe: Kbe,

    #[arg(long, default_value = "observe")]
    hook: Hook,

    /// Resolve as the seal (closing) specimen.
    #[arg(long, default_value_t = false)]
    seal: bool,

    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input catalog JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args),
        Command::Check(args) => cmd_check(args),
        Command::List => cmd_list(),
    }
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let input = CompositorInput::new(
        LookKey::new(args.signature, args.form, args.chrono),
        CueTags::new(args.kbe, args.hook),
        args.seed,
    )
    .sealed(args.seal);
    let specimen = specimen::resolve_specimen(&input, args.scene)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&specimen)?
    } else {
        serde_json::to_string(&specimen)?
    };

    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&path, json)
                .with_context(|| format!("write specimen '{}'", path.display()))?;
            eprintln!("wrote {} ({})", path.display(), specimen.fingerprint());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let catalog = Catalog::from_path(&args.in_path)?;
    catalog.validate()?;
    let report = specimen::resolve_catalog(&catalog);

    for w in &report.warnings {
        eprintln!("warning: {w}");
    }
    for (id, s) in report.specimens() {
        println!("{id}\t{}\t{}", s.elements.len(), s.fingerprint());
    }

    let failures: Vec<_> = report.failures().collect();
    for (id, err) in &failures {
        eprintln!("error: cue '{id}': {err}");
    }
    if !failures.is_empty() {
        anyhow::bail!(
            "{} of {} cues failed to resolve",
            failures.len(),
            report.entries.len()
        );
    }
    Ok(())
}

fn cmd_list() -> anyhow::Result<()> {
    fn line<T: std::fmt::Display>(label: &str, all: &[T]) -> String {
        let keys: Vec<String> = all.iter().map(ToString::to_string).collect();
        format!("{label}: {}", keys.join(", "))
    }

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", line("signature", Signature::ALL))?;
    writeln!(stdout, "{}", line("form", Form::ALL))?;
    writeln!(stdout, "{}", line("chrono", Chrono::ALL))?;
    writeln!(stdout, "{}", line("scene", SceneBackground::ALL))?;
    writeln!(stdout, "{}", line("kbe", Kbe::ALL))?;
    writeln!(stdout, "{}", line("hook", Hook::ALL))?;
    Ok(())
}
