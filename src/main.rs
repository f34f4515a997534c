//! textdrop - Text to File Converter
//!
//! Paste or type text in the terminal and save it as a file.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use textdrop::render::ui::{ColorTheme, TerminalUI};
use textdrop::{AppConfig, Application, Args, TerminalSurface};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    init_logging(&args)?;

    let config = AppConfig::from_args(&args).context("invalid configuration")?;
    log::debug!("starting with {:?}", config);

    // The background presents into the surface, the UI paints it
    let surface = TerminalSurface::new();
    let ui_renderer = Box::new(
        TerminalUI::with_theme(ColorTheme::from_name(config.theme))?.with_surface(surface.clone()),
    );
    let mut app = Application::new(&config, ui_renderer, surface);

    app.run().await?;

    Ok(())
}

/// The terminal is taken over by the UI, so logs go to `--log-file` or nowhere
/// unless RUST_LOG asks for them explicitly.
fn init_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"));

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder
            .filter_level(log::LevelFilter::Info)
            .parse_env("RUST_LOG")
            .target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_constant() {
        // Ensure version is accessible
        assert!(!textdrop::VERSION.is_empty());
    }
}
