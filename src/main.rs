use clap::Parser;
use mdpost::application::{DocumentIngestor, IngestDirectoryService};
use mdpost::cli::{format_entries, Cli};
use mdpost::error::IngestError;
use mdpost::infrastructure::{CmarkRenderer, Config, DocumentDirectory, YamlDecoder};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "mdpost=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), IngestError> {
    let source_dir = Config::resolve_source_dir(cli.dir);

    // Command-line flags take precedence over .mdpost.toml
    let mut config = Config::load_from_dir(&source_dir)?;
    if let Some(ext) = cli.ext {
        config.extension = ext;
    }
    if let Some(date_format) = cli.date_format {
        config.date_format = date_format;
    }
    config.recursive |= cli.recursive;
    config.gfm |= cli.gfm;
    config.validate()?;

    let directory = DocumentDirectory::new(source_dir, &config.extension, config.recursive);
    let ingestor = DocumentIngestor::new(CmarkRenderer::new(config.render_options()), YamlDecoder);
    let entries = IngestDirectoryService::new(directory, ingestor).execute()?;

    print!("{}", format_entries(&entries, &config.date_format));
    Ok(())
}
