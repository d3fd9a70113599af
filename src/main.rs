use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use fl2fltk::config::{load_or_default, ToolConfig};
use fl2fltk::{
    discover, is_converted, BackupStore, ConvertError, Converter, FileOutcome, Mode, RuleSet,
};
use similar::{ChangeTag, TextDiff};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fl2fltk")]
#[command(about = "Port FLTK 1.x C++ sources to the FLTK 2 API", long_about = None)]
#[command(version)]
struct Cli {
    /// Log pass and rule activity to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of ./fl2fltk.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert source files in place, backing up originals first
    Convert {
        /// Files to convert (default: matching files in the current directory)
        files: Vec<PathBuf>,

        /// Dry run - show what would be changed without modifying files
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Show unified diff of changes
        #[arg(short, long)]
        diff: bool,

        /// Backup directory (overrides the config file)
        #[arg(short, long)]
        backup_dir: Option<PathBuf>,

        /// Match call arguments by nesting depth instead of the first ')'
        #[arg(long)]
        nested: bool,
    },

    /// Report which files are already converted
    Status {
        /// Files to check (default: matching files in the current directory)
        files: Vec<PathBuf>,
    },

    /// List the rewrite passes (with --verbose, every rule)
    Rules,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert {
            files,
            dry_run,
            diff,
            backup_dir,
            nested,
        } => cmd_convert(cli.config, files, dry_run, diff, backup_dir, nested),

        Commands::Status { files } => cmd_status(cli.config, files),

        Commands::Rules => cmd_rules(cli.config, cli.verbose),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "fl2fltk=debug" } else { "fl2fltk=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(config: Option<PathBuf>) -> Result<ToolConfig> {
    let cwd = env::current_dir()?;
    Ok(load_or_default(config.as_deref(), &cwd)?)
}

/// Explicit files as given, otherwise discovery in the current directory.
fn resolve_files(files: Vec<PathBuf>, config: &ToolConfig) -> Result<Vec<PathBuf>> {
    if !files.is_empty() {
        return Ok(files);
    }
    Ok(discover(Path::new("."), &config.convert.extensions)?)
}

/// Helper: Show unified diff between original and converted content
fn display_diff(file: &Path, original: &str, converted: &str) {
    println!(
        "\n{}",
        format!("--- {} (original)", file.display()).dimmed()
    );
    println!("{}", format!("+++ {} (converted)", file.display()).dimmed());

    let diff = TextDiff::from_lines(original, converted);

    for hunk in diff.unified_diff().context_radius(3).iter_hunks() {
        println!("{}", hunk.header().to_string().cyan());
        for change in hunk.iter_changes() {
            let sign = match change.tag() {
                ChangeTag::Delete => format!("-{}", change).red(),
                ChangeTag::Insert => format!("+{}", change).green(),
                ChangeTag::Equal => format!(" {}", change).normal(),
            };
            print!("{}", sign);
            if change.missing_newline() {
                println!();
            }
        }
    }
}

fn cmd_convert(
    config: Option<PathBuf>,
    files: Vec<PathBuf>,
    dry_run: bool,
    show_diff: bool,
    backup_dir: Option<PathBuf>,
    nested: bool,
) -> Result<()> {
    // 1. Load config and apply command-line overrides
    let mut config = load_config(config)?;
    if let Some(dir) = backup_dir {
        config.convert.backup_dir = dir.to_string_lossy().into_owned();
    }
    if nested {
        config.convert.nested_arguments = true;
    }
    config.validate()?;

    // 2. Determine files to convert
    let files = resolve_files(files, &config)?;
    if files.is_empty() {
        println!("{}", "No matching source files found".yellow());
        return Ok(());
    }

    // 3. Build the rule pipeline
    let rules = RuleSet::builtin(&config.rule_options())?;
    let converter = Converter::new(&rules, config.convert_options());

    let store = if dry_run {
        println!("{}", "[DRY RUN - no files will be modified]".cyan());
        None
    } else {
        Some(BackupStore::open(&config.convert.backup_dir)?)
    };
    let mode = match &store {
        Some(store) => Mode::Write(store),
        None => Mode::DryRun,
    };

    // 4. Convert each file
    let mut total_converted = 0;
    let mut total_already = 0;
    let mut total_failed = 0;

    for file in &files {
        match converter.convert_file(file, mode) {
            Ok(FileOutcome::Converted {
                file,
                original,
                converted,
                written,
            }) => {
                let verb = if written { "Converted" } else { "Would convert" };
                println!("{} {} {}", "✓".green(), verb, file.display());
                total_converted += 1;

                if show_diff {
                    display_diff(&file, &original, &converted);
                }
            }
            Ok(FileOutcome::AlreadyConverted { file }) => {
                println!(
                    "{} {}: Already converted",
                    "⊙".yellow(),
                    file.display()
                );
                total_already += 1;
            }
            Err(e) => {
                eprintln!("{} {}", "✗".red(), e);
                if matches!(e, ConvertError::NotUtf8 { .. }) {
                    eprintln!("  Re-encode the file as UTF-8 and run again");
                }
                total_failed += 1;
            }
        }
    }

    // 5. Summary
    println!();
    println!("{}", "Summary:".bold());
    println!("  {} converted", format!("{}", total_converted).green());
    println!(
        "  {} already converted",
        format!("{}", total_already).yellow()
    );
    println!("  {} failed", format!("{}", total_failed).red());
    if let Some(store) = &store {
        println!("  backups in {}", store.root().display());
    }

    if total_failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_status(config: Option<PathBuf>, files: Vec<PathBuf>) -> Result<()> {
    let config = load_config(config)?;
    let files = resolve_files(files, &config)?;

    let mut converted = Vec::new();
    let mut pending = Vec::new();
    let mut unreadable = Vec::new();

    // Read-only: never writes or backs up
    for file in files {
        match fs::read(&file) {
            Ok(bytes) => {
                if is_converted(&String::from_utf8_lossy(&bytes)) {
                    converted.push(file);
                } else {
                    pending.push(file);
                }
            }
            Err(e) => unreadable.push((file, e.to_string())),
        }
    }

    println!("{}", "Conversion Status Report".bold());
    println!();

    if !converted.is_empty() {
        println!(
            "{} {} ({} files)",
            "✓".green(),
            "CONVERTED".green().bold(),
            converted.len()
        );
        for file in &converted {
            println!("  - {}", file.display());
        }
        println!();
    }

    if !pending.is_empty() {
        println!(
            "{} {} ({} files)",
            "⊙".yellow(),
            "NOT CONVERTED".yellow().bold(),
            pending.len()
        );
        for file in &pending {
            println!("  - {}", file.display());
        }
        println!();
    }

    if !unreadable.is_empty() {
        println!(
            "{} {} ({} files)",
            "✗".red(),
            "UNREADABLE".red().bold(),
            unreadable.len()
        );
        for (file, reason) in &unreadable {
            println!("  - {} ({})", file.display(), reason.dimmed());
        }
        println!();
    }

    if converted.is_empty() && pending.is_empty() && unreadable.is_empty() {
        println!("{}", "No matching source files found".yellow());
    }

    Ok(())
}

fn cmd_rules(config: Option<PathBuf>, verbose: bool) -> Result<()> {
    let config = load_config(config)?;
    let rules = RuleSet::builtin(&config.rule_options())?;

    println!("{}", "Rewrite passes (in order):".bold());
    for (idx, pass) in rules.passes().iter().enumerate() {
        println!(
            "  {}. {} ({} rules)",
            idx + 1,
            pass.name.cyan(),
            pass.rules.len()
        );
        if verbose {
            for rule in &pass.rules {
                println!("       {}", rule);
            }
        }
    }
    println!();
    println!("  {} rules total", rules.rule_count());

    Ok(())
}
