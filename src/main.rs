use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lvmono::models::{ConfigOverrides, ConvertConfig};
use lvmono::services::ConversionService;

#[derive(Parser)]
#[command(name = "lvmono")]
#[command(about = "Convert images into 1-bit LVGL C arrays for e-paper displays")]
struct Cli {
    /// Log every pipeline stage
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a PNG into a C source file
    Convert {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Output C file (defaults to the input path with .c)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Preview PNG path (defaults to preview_<input> next to the output)
        #[arg(long)]
        preview: Option<PathBuf>,

        /// Do not write a preview PNG
        #[arg(long)]
        no_preview: bool,

        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Print the effective configuration as YAML
    ShowConfig {
        #[command(flatten)]
        profile: ProfileArgs,
    },
}

#[derive(Args)]
struct ProfileArgs {
    /// YAML conversion profile
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target image width
    #[arg(long)]
    width: Option<usize>,

    /// Target image height
    #[arg(long)]
    height: Option<usize>,

    /// Dithering method: "floyd" or "atkinson"
    #[arg(short, long)]
    dither: Option<String>,

    /// Brightness adjustment (-1.0 to 1.0)
    #[arg(short, long, allow_negative_numbers = true)]
    brightness: Option<f32>,

    /// Contrast adjustment (-1.0 to 1.0)
    #[arg(long, allow_negative_numbers = true)]
    contrast: Option<f32>,

    /// Output template: "macro" or "descriptor"
    #[arg(short, long)]
    template: Option<String>,

    /// Bit polarity: "direct" or "inverted"
    #[arg(short, long)]
    polarity: Option<String>,

    /// RGB to gray weights: "bt601" or "bt709"
    #[arg(long)]
    luma: Option<String>,

    /// Base symbol name (defaults to the input file stem)
    #[arg(short, long)]
    name: Option<String>,
}

impl ProfileArgs {
    /// Load the profile file and apply the command line on top
    fn resolve(self, no_preview: bool) -> anyhow::Result<ConvertConfig> {
        let mut config = ConvertConfig::load_or_default(self.config.as_deref())?;
        config.apply(ConfigOverrides {
            width: self.width,
            height: self.height,
            dither: self.dither,
            brightness: self.brightness,
            contrast: self.contrast,
            template: self.template,
            polarity: self.polarity,
            luma: self.luma,
            name: self.name,
            no_preview,
        });
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert {
            input,
            output,
            preview,
            no_preview,
            profile,
        } => {
            let config = profile.resolve(no_preview)?;
            let service = ConversionService::new(config)?;
            let report = service.convert_file(&input, output.as_deref(), preview.as_deref())?;

            println!(
                "Converted {} -> {} ({}x{}, {} bytes, symbol {})",
                input.display(),
                report.output.display(),
                report.width,
                report.height,
                report.packed_bytes,
                report.symbol
            );
            if let Some(preview) = &report.preview {
                println!("Preview {}", preview.display());
            }
        }
        Commands::ShowConfig { profile } => {
            let config = profile.resolve(false)?;
            // Reject profiles that would fail a conversion
            config.converter()?;
            print!("{}", config.to_yaml()?);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "lvmono=debug,mono_bitmap=debug"
    } else {
        "lvmono=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}
