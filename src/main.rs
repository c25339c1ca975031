//! CLI entry point for eventum-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eventum_rs::config::Settings;
use eventum_rs::content::ContactForm;

#[derive(Parser)]
#[command(name = "eventum-rs")]
#[command(version)]
#[command(about = "Fetch and inspect the Eventum site's CMS content", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Content service address (overrides eventum.yml and environment)
    #[arg(long, global = true)]
    strapi_url: Option<String>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default eventum.yml
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Print content (homepage, about, contact, footer, projects, partners, slugs, home)
    #[command(alias = "s")]
    Show {
        /// Type of content to print
        #[arg(default_value = "home")]
        r#type: String,
    },

    /// Print a single project by slug
    #[command(alias = "p")]
    Project {
        /// Project slug
        slug: String,

        /// Print a text summary instead of JSON
        #[arg(short, long)]
        text: bool,
    },

    /// Submit the contact form
    Submit {
        /// Visitor email
        #[arg(short, long)]
        email: String,

        /// Selected service identifier (repeatable)
        #[arg(short, long = "service", required = true)]
        services: Vec<String>,

        /// Free-text message
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "eventum_rs=debug,info"
    } else {
        "eventum_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let load = || -> Result<eventum_rs::Eventum> {
        let mut settings = Settings::discover(&base_dir)?;
        if let Some(url) = &cli.strapi_url {
            settings.strapi_url = url.clone();
        }
        tracing::debug!("Using content service at {}", settings.strapi_url);
        eventum_rs::Eventum::with_settings(&base_dir, settings)
    };

    match cli.command {
        Commands::Init { ref folder } => {
            let target_dir = if folder.is_absolute() {
                folder.clone()
            } else {
                base_dir.join(folder)
            };
            eventum_rs::commands::init::init_settings(&target_dir)?;
            println!("Created settings in {:?}", target_dir);
        }

        Commands::Show { ref r#type } => {
            let app = load()?;
            eventum_rs::commands::show::run(&app, r#type).await?;
        }

        Commands::Project { ref slug, text } => {
            let app = load()?;
            eventum_rs::commands::show::project(&app, slug, text).await?;
        }

        Commands::Submit {
            ref email,
            ref services,
            ref message,
        } => {
            let app = load()?;
            let mut form = ContactForm::new(email.clone(), services.clone());
            if let Some(message) = message {
                form = form.with_message(message.clone());
            }
            eventum_rs::commands::submit::run(&app, &form).await?;
        }

        Commands::Version => {
            println!("eventum-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
