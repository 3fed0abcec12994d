mod cli;

use pandoc_bridge::config::{self, Config};
use pandoc_bridge::{ExecutionMode, Pandoc, PandocConfig, Pending};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "pandoc_bridge=debug,pandoc_bridge_exec=debug".to_string()
        } else {
            "pandoc_bridge=info,pandoc_bridge_exec=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::CheckTool => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            check_tool(&config.pandoc)
        }
        Commands::Version => {
            let (pandoc, _) = open_pandoc(cli.config.as_deref(), cli.run_async)?;
            let version = settle(&pandoc, pandoc.version())?;
            println!("{version}");
            Ok(())
        }
        Commands::Convert {
            input,
            output,
            to,
            from,
            extra,
        } => {
            let (pandoc, config) = open_pandoc(cli.config.as_deref(), cli.run_async)?;
            let from = from.unwrap_or(config.defaults.input_format);
            convert_file(&pandoc, &input, &output, &to, &from, extra)
        }
        Commands::Stream {
            output,
            to,
            from,
            text,
        } => {
            let (pandoc, config) = open_pandoc(cli.config.as_deref(), cli.run_async)?;
            let from = from.unwrap_or(config.defaults.input_format);
            stream_text(&pandoc, text, &output, &to, &from)
        }
    }
}

/// Load config and construct the facade, applying the `--async` override.
fn open_pandoc(config_path: Option<&Path>, run_async: bool) -> Result<(Pandoc, Config)> {
    let config = config::load_config_or_default(config_path)?;
    let mut pandoc_config = config.pandoc.clone();
    if run_async {
        pandoc_config.mode = ExecutionMode::Async;
    }
    let pandoc = Pandoc::new(pandoc_config).map_err(tag)?;
    Ok((pandoc, config))
}

fn convert_file(
    pandoc: &Pandoc,
    input: &Path,
    output: &Path,
    to: &str,
    from: &str,
    extra: Vec<String>,
) -> Result<()> {
    tracing::info!("Converting {:?} ({from}) to {:?} ({to})", input, output);
    let stdout = settle(
        pandoc,
        pandoc.convert_with_args(input, output, to, Some(from), extra),
    )?;
    print!("{stdout}");
    Ok(())
}

fn stream_text(
    pandoc: &Pandoc,
    text: Option<String>,
    output: &Path,
    to: &str,
    from: &str,
) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => std::io::read_to_string(std::io::stdin())
            .context("Failed to read text from stdin")?,
    };

    let rt = tokio::runtime::Runtime::new()?;
    let stdout = rt.block_on(async {
        let stream = pandoc.send_raw_stream(&text, output, to, Some(from)).await?;
        stream.finish().await
    });
    print!("{}", stdout.map_err(tag)?);
    Ok(())
}

/// Drive a facade result to completion in whichever mode it was created.
fn settle(pandoc: &Pandoc, pending: Pending<String>) -> Result<String> {
    let result = match pandoc.mode() {
        ExecutionMode::Blocking => pending.wait(),
        ExecutionMode::Async => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(async { pending.await })
        }
    };
    result.map_err(tag)
}

/// Prefix the error with its stable kind name.
fn tag(err: pandoc_bridge::Error) -> anyhow::Error {
    let kind = err.kind();
    anyhow::Error::new(err).context(kind.name())
}

fn check_tool(pandoc_config: &PandocConfig) -> Result<()> {
    println!("Checking pandoc...\n");

    let tool = pandoc_bridge::check_tool(pandoc_config.binary_path.as_deref());
    let status = if tool.available { "✓" } else { "✗" };

    print!("{} pandoc", status);
    if let Some(ref version) = tool.version {
        print!(" ({})", version);
    }
    if let Some(ref path) = tool.path {
        print!(" - {}", path.display());
    }
    println!();

    println!();
    if tool.available {
        println!("pandoc is available!");
    } else {
        println!("pandoc is missing. Install it or set PANDOC_BINARY_PATH.");
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            print_config(&config);
        }
        None => {
            println!("No config file specified, using defaults");
            print_config(&Config::default());
        }
    }

    Ok(())
}

fn print_config(config: &Config) {
    match &config.pandoc.binary_path {
        Some(path) => println!("  Binary: {}", path.display()),
        None => println!("  Binary: (auto-detect)"),
    }
    println!("  Mode: {:?}", config.pandoc.mode);
    println!("  Stderr policy: {:?}", config.pandoc.stderr_policy);
    println!("  Default input format: {}", config.defaults.input_format);
}
