use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use mdsite::Config;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Convert Markdown files to HTML pages")]
struct Cli {
    /// Input Markdown file, or a directory of them
    input: PathBuf,

    /// Output file or directory (defaults to input name with .html extension,
    /// or the configured public directory for directory input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page template with {{ Title }} and {{ Content }} placeholders
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Config file
    #[arg(short, long, default_value = "mdsite.toml")]
    config: PathBuf,

    /// Log progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;

    let template_path = cli.template.or(config.paths.template);
    let template = mdsite::load_template(template_path.as_deref())?;

    if cli.input.is_dir() {
        let output = cli.output.unwrap_or(config.paths.public);
        let written =
            mdsite::generate_pages_recursive(&cli.input, &template, &output, &config.render)?;
        for path in written {
            println!("Created {}", path.display());
        }
    } else {
        let output = cli
            .output
            .unwrap_or_else(|| cli.input.with_extension("html"));
        mdsite::generate_page(&cli.input, &template, &output, &config.render)?;
        println!("Created {}", output.display());
    }

    Ok(())
}
