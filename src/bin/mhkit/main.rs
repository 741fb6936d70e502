//! mhkit - command-line front end.
//!
//! # Commands
//!
//! - `mhkit extract` - unpack every archive of an install into a game tree
//! - `mhkit model` - decode a `.mod` file and print it as JSON
//! - `mhkit material` - decode a `.mrl` file and print it as JSON
//! - `mhkit tint` - decode a `.clc` file, or find the one for a directory
//!
//! Decoded data goes to stdout, logs go to stderr.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use mhkit::crypto::NoCipher;
use mhkit::diagnostics::TracingSink;
use mhkit::dictionary::ResourceDictionary;
use mhkit::extract::{ExtractOptions, extract_all};
use mhkit::formats::clc::{TintColor, find_tint_file};
use mhkit::formats::model::Model;
use mhkit::formats::mrl::{MaterialTable, bind_materials};

/// Asset extraction and decoding for Monster Hunter Stories 2
#[derive(Parser)]
#[command(name = "mhkit")]
#[command(version)]
struct Cli {
    /// Log filter, e.g. `debug` or `mhkit=trace`. Defaults to `RUST_LOG`,
    /// then `info`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every archive below the install tree
    Extract(ExtractArgs),

    /// Decode a model file
    Model(ModelArgs),

    /// Decode a material file
    Material(MaterialArgs),

    /// Decode a tint file
    Tint(TintArgs),
}

#[derive(Args)]
struct ExtractArgs {
    /// Destination tree
    game_path: PathBuf,

    /// Install tree holding the archives, if different from the destination
    #[arg(long)]
    install_path: Option<PathBuf>,

    /// Loose-file directory under the install tree
    #[arg(long, default_value = "nativeDX11x64")]
    native_dir: String,

    /// Log progress every N archives
    #[arg(long, default_value_t = 50)]
    progress_interval: usize,
}

#[derive(Args)]
struct ModelArgs {
    /// Path to a .mod file
    file: PathBuf,

    /// Only print meshes of this LOD level
    #[arg(long)]
    lod: Option<u8>,
}

#[derive(Args)]
struct MaterialArgs {
    /// Path to a .mrl file
    file: PathBuf,

    /// JSON resource-name dictionary
    #[arg(long)]
    dictionary: PathBuf,

    /// Pair materials with the names used by this model
    #[arg(long)]
    model: Option<PathBuf>,
}

#[derive(Args)]
struct TintArgs {
    /// A .clc file, or a directory to search for one
    path: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(level) => tracing_subscriber::EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level {level:?}"))?,
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Extract(args) => extract(args),
        Commands::Model(args) => model(args),
        Commands::Material(args) => material(args),
        Commands::Tint(args) => tint(args),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

fn extract(args: ExtractArgs) -> Result<()> {
    let mut options = ExtractOptions::new(args.game_path);
    options.install_path = args.install_path;
    options.native_dir = args.native_dir;
    options.progress_interval = args.progress_interval;

    // No decryption backend is linked in; encrypted archives are reported.
    let summary = extract_all(&options, &mut NoCipher, &mut TracingSink)?;
    print_json(&serde_json::json!({
        "archives_found": summary.archives_found,
        "archives_failed": summary.archives_failed,
        "files_written": summary.files_written,
        "files_skipped": summary.files_skipped,
        "entries_unresolved": summary.entries_unresolved,
        "loose_files_copied": summary.loose_files_copied,
        "manifest_entries": summary.manifest.len(),
        "manifest": options.manifest_path(),
    }))
}

fn model(args: ModelArgs) -> Result<()> {
    let data = read(&args.file)?;
    let model = Model::parse(&data, &mut TracingSink)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;
    match args.lod {
        Some(lod) => {
            let meshes: Vec<_> = model.meshes_for_lod(lod).collect();
            print_json(&meshes)
        }
        None => print_json(&model),
    }
}

fn material(args: MaterialArgs) -> Result<()> {
    let dictionary = ResourceDictionary::open(&args.dictionary)
        .with_context(|| format!("failed to load dictionary {}", args.dictionary.display()))?;
    let data = read(&args.file)?;
    let table = MaterialTable::parse(&data, &dictionary, &mut TracingSink)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    let Some(model_path) = args.model else {
        return print_json(&table);
    };
    let model_data = read(&model_path)?;
    let model = Model::parse(&model_data, &mut TracingSink)
        .with_context(|| format!("failed to decode {}", model_path.display()))?;
    print_json(&bind_materials(&model, &table, &mut TracingSink))
}

fn tint(args: TintArgs) -> Result<()> {
    let file = if args.path.is_dir() {
        match find_tint_file(&args.path) {
            Some(file) => file,
            None => bail!("no .clc file near {}", args.path.display()),
        }
    } else {
        args.path
    };
    let color = TintColor::parse(&read(&file)?)
        .with_context(|| format!("failed to decode {}", file.display()))?;
    print_json(&serde_json::json!({
        "file": file,
        "rgba": color.rgba(),
    }))
}
