#![doc = include_str!("../../../README.md")]

use anyhow::{Context, Result};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use clap::Parser;
use tracing::{span, Level};
use tracing_subscriber::EnvFilter;

mod args;
use args::{Command, CommandLineArgs};
use dirtree_config::{CreateConfig, ExportConfig};
use dirtree_filesystem::{DiskFilesystem, Filesystem, MemoryFilesystem};
use dirtree_listing::render_listing;
use dirtree_traversal::{self as traversal, CreateOptions, ExportOptions, IgnoreRules};

fn init_logger(verbosity: u8) {
    let sub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_file(false)
        .with_line_number(false);
    if let Ok(filter) = EnvFilter::try_from_env("DIRTREE_LOG") {
        sub.with_env_filter(filter).init();
        return;
    }
    let (level, pretty) = match verbosity {
        0 => (Level::WARN, false),
        1 => (Level::INFO, false),
        2 => (Level::INFO, true),
        3 => (Level::DEBUG, true),
        _ => (Level::TRACE, true),
    };
    let sub = sub.with_max_level(level);
    if pretty {
        sub.pretty().init();
    } else {
        sub.init();
    }
}

fn main() -> Result<()> {
    let CommandLineArgs {
        command,
        config_file,
        verbose,
    } = CommandLineArgs::parse();

    init_logger(verbose);

    match command {
        Command::Export {
            root,
            output,
            ignore,
            ignore_file,
            depth,
        } => {
            let span = span!(Level::DEBUG, "export", root = root.as_str());
            let _guard = span.enter();

            let mut config = ExportConfig::new(absolute(&root)?);
            if let Some(config_file) = &config_file {
                config.load(config_file)?;
            }
            if let Some(output) = output {
                config.set_output(output);
            }
            config.add_ignore_patterns(ignore);
            if let Some(ignore_file) = ignore_file {
                config.add_ignore_file(ignore_file)?;
            }
            if let Some(depth) = depth {
                config.set_max_depth(depth);
            }
            export(&config)
        }
        Command::Create {
            file,
            dir,
            strip_root,
            strict,
            dry_run,
        } => {
            let span = span!(Level::DEBUG, "create", file = file.as_str());
            let _guard = span.enter();

            let mut config = CreateConfig::new(absolute(&file)?, absolute(&dir)?);
            if let Some(config_file) = &config_file {
                config.load(config_file)?;
            }
            config.set_strip_root(strip_root);
            config.set_strict(strict);
            config.set_dry_run(dry_run);
            create(&config)
        }
    }
}

fn export(config: &ExportConfig) -> Result<()> {
    let options = ExportOptions {
        ignore: IgnoreRules::compile(config.ignore_patterns().iter().cloned())?,
        max_depth: config.max_depth(),
    };
    let mut fs = DiskFilesystem::new();
    let count = traversal::export(config.root(), config.output(), &options, &mut fs)?;
    tracing::info!("Wrote {} lines", count);
    println!("Structure exported to: {}", config.output());
    Ok(())
}

fn create(config: &CreateConfig) -> Result<()> {
    let options = CreateOptions {
        strip_root: config.strip_root(),
        strict: config.strict(),
    };
    let disk = DiskFilesystem::new();
    let text = traversal::read_listing(config.listing(), &disk)?;
    let destination = config.destination();

    let summary = if config.dry_run() {
        tracing::warn!("Simulating in memory only, nothing is written to disk");
        let mut fs = MemoryFilesystem::new();
        fs.create_directory_all(destination)?;
        let summary = traversal::create(&text, destination, &options, &mut fs)?;
        tracing::warn!("Displaying in-memory filesystem...");
        let lines = traversal::encode(destination, &ExportOptions::default(), &fs)?;
        println!("{}", render_listing(&lines));
        summary
    } else {
        let mut fs = disk;
        fs.create_directory_all(destination)?;
        traversal::create(&text, destination, &options, &mut fs)?
    };
    tracing::info!(
        "Created {} directories and {} files, skipped {} lines",
        summary.directories,
        summary.files,
        summary.skipped
    );
    Ok(())
}

/// Makes a path absolute, resolving symbolic links where the path exists
///
/// Paths that do not exist yet are joined onto the current directory and cleaned of `.` and
/// `..` components without touching the filesystem.
fn absolute(path: &Utf8Path) -> Result<Utf8PathBuf> {
    if let Ok(path) = path.canonicalize_utf8() {
        return Ok(path);
    }
    let current = std::env::current_dir().context("Reading current directory")?;
    let current = Utf8PathBuf::try_from(current).context("Current directory is not UTF-8")?;
    let mut absolute = Utf8PathBuf::new();
    for component in current.join(path).components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                absolute.pop();
            }
            other => absolute.push(other.as_str()),
        }
    }
    Ok(absolute)
}
