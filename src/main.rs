use std::path::PathBuf;

use clap::Parser;

use sitegen::config::Config;
use sitegen::site;

#[derive(Parser)]
#[command(name = "sitegen")]
#[command(about = "Generate a static HTML site from Markdown content")]
struct Cli {
    /// Project root containing content, templates, and static files
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Config file (defaults to sitegen.toml under the project root)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory, overriding the configured one
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(|| cli.root.join("sitegen.toml"));
    let mut config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(output) = cli.output {
        config.output = output;
    }

    match site::build_site(&cli.root, &config) {
        Ok(output) => println!("Site written to {}", output.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
