use std::path::PathBuf;

use clap::Parser;
use empirule::state::AppState;
use empirule::{App, init_logging};
use empirule_core::{Normal, RenderOptions};

#[derive(Parser, Debug)]
#[command(name = "empirule")]
#[command(about = "Normal distribution density curve viewer with empirical-rule annotations")]
struct Args {
    /// Mean (μ) of the distribution
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    mean: f64,

    /// Standard deviation (σ); must be positive
    #[arg(short = 'd', long, default_value_t = 1.0)]
    std_dev: f64,

    /// Number of x-values the density is sampled at
    #[arg(short = 'n', long, default_value_t = 1_000_000)]
    samples: usize,

    /// Chart title
    #[arg(long, default_value = "Normal distribution")]
    title: String,

    /// Subtitle shown when annotations are enabled
    #[arg(long, default_value = "(Empirical Rule)")]
    subtitle: String,

    /// Title font size in points (PNG export)
    #[arg(long, default_value_t = 14)]
    title_size: u16,

    /// Subtitle font size in points (PNG export)
    #[arg(long, default_value_t = 12)]
    subtitle_size: u16,

    /// Render the title in a normal weight instead of bold
    #[arg(long)]
    no_bold_title: bool,

    /// Standard-deviation tick marks each side of the mean
    #[arg(long, default_value_t = 4)]
    nsd: u32,

    /// Draw the bare curve without ticks, guides, or band arrows
    #[arg(long)]
    no_annotations: bool,

    /// Start with the sampled-histogram overlay enabled
    #[arg(long)]
    overlay: bool,

    /// PNG output path
    #[arg(short, long, default_value = "normal_distribution.png")]
    output: PathBuf,

    /// Write the PNG before entering the terminal UI
    #[arg(short, long)]
    save: bool,

    /// Export the PNG and exit without the terminal UI
    #[arg(long)]
    headless: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".empirule")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let _log_guard = init_logging(&data_dir(), &args.log_level)?;

    let normal = Normal::new(args.mean, args.std_dev);
    let options = RenderOptions {
        title: args.title,
        subtitle: args.subtitle,
        title_size: args.title_size,
        title_bold: !args.no_bold_title,
        subtitle_size: args.subtitle_size,
        samples: args.samples,
        nsd: args.nsd,
        annotations: !args.no_annotations,
        output_file: args.output,
        save: args.save || args.headless,
        ..Default::default()
    };

    if options.save {
        let state = AppState::new(normal, options.clone(), args.overlay);
        empirule::export::render_png(
            &state.scene,
            &state.options,
            state.overlay.as_deref(),
            &state.options.output_file,
        )?;
        tracing::info!("chart saved to {}", options.output_file.display());
        if args.headless {
            println!("Saved chart to {}", options.output_file.display());
            return Ok(());
        }
    }

    let mut app = App::new(normal, options, args.overlay);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
