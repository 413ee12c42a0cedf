use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use gradientkit::logging::{init_logging, LoggingConfig};
use gradientkit::rendering::raster::format_for_path;
use gradientkit::rendering::{pixel_digest, write_image};
use gradientkit::{ColorStop, Geometry, GradientRequest, Heatmap};

#[derive(Parser)]
#[command(name = "gradientkit", version, about = "Render gradient images from color stops")]
struct Cli {
    /// Log filter (env_logger syntax); falls back to RUST_LOG, then "info"
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Gradient along a rotated axis
    Linear {
        #[command(flatten)]
        common: CommonArgs,
        /// Rotation of the gradient axis in degrees
        #[arg(long, default_value_t = 0.0)]
        angle: f64,
    },
    /// Circles around the image center
    Radial {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Ellipses around the image center
    Elliptical {
        #[command(flatten)]
        common: CommonArgs,
        #[arg(long)]
        major_axis: f64,
        #[arg(long)]
        minor_axis: f64,
    },
    /// Sweep around an arbitrary point
    CenterPoint {
        #[command(flatten)]
        common: CommonArgs,
        #[arg(long)]
        center_x: f64,
        #[arg(long)]
        center_y: f64,
        /// Start of the sweep in degrees
        #[arg(long, default_value_t = 0.0)]
        angle: f64,
    },
    /// Render one example of every variant into a directory
    Demo {
        #[arg(default_value = ".")]
        out_dir: PathBuf,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Output image; the extension selects the format (png, jpg, bmp)
    output: PathBuf,
    #[arg(long, default_value_t = 500)]
    width: u32,
    #[arg(long, default_value_t = 250)]
    height: u32,
    /// Color stop as POS:R,G,B; repeat for each stop
    #[arg(long = "stop", value_name = "POS:R,G,B", conflicts_with = "heatmap")]
    stops: Vec<String>,
    /// JSON file of [position, [r, g, b]] pairs
    #[arg(long)]
    heatmap: Option<PathBuf>,
    /// Print the SHA-256 of the rendered pixels
    #[arg(long)]
    digest: bool,
}

impl CommonArgs {
    fn load_heatmap(&self) -> Result<Heatmap> {
        if let Some(path) = &self.heatmap {
            return Heatmap::from_json_file(path)
                .with_context(|| format!("failed to load heatmap from {:?}", path));
        }
        if self.stops.is_empty() {
            return Ok(Heatmap::default());
        }
        let stops = self
            .stops
            .iter()
            .map(|s| s.parse::<ColorStop>())
            .collect::<gradientkit::Result<Vec<_>>>()?;
        Ok(Heatmap::new(stops)?)
    }

    fn render(&self, geometry: Geometry) -> Result<()> {
        let request =
            GradientRequest::new(self.width, self.height, self.load_heatmap()?, &self.output, geometry);
        run(&request, self.digest)
    }
}

fn run(request: &GradientRequest, digest: bool) -> Result<()> {
    let context = || format!("failed to render {} gradient to {:?}", request.geometry.name(), request.path);

    format_for_path(&request.path).with_context(context)?;
    let image = request.render_image().with_context(context)?;
    write_image(&image, &request.path).with_context(context)?;

    if digest {
        println!("{}  {}", pixel_digest(&image), request.path.display());
    }
    Ok(())
}

fn demo(out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir).with_context(|| format!("failed to create {:?}", out_dir))?;

    let heatmap = Heatmap::red_green_blue();
    let requests = [
        GradientRequest::linear(500, 250, heatmap.clone(), out_dir.join("gradient_linear.png"), 20.0),
        GradientRequest::radial(500, 250, heatmap.clone(), out_dir.join("gradient_radial.png")),
        GradientRequest::elliptical(
            500,
            250,
            heatmap.clone(),
            out_dir.join("gradient_elliptical.png"),
            300.0,
            25.0,
        ),
        GradientRequest::center_point(
            500,
            250,
            heatmap,
            out_dir.join("gradient_point_centered.png"),
            50.0,
            160.0,
            45.0,
        ),
    ];

    for request in &requests {
        run(request, false)?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(&LoggingConfig { filter: cli.log_level.clone(), ..Default::default() });

    let result = match cli.command {
        Command::Linear { common, angle } => common.render(Geometry::Linear { angle }),
        Command::Radial { common } => common.render(Geometry::Radial),
        Command::Elliptical { common, major_axis, minor_axis } => {
            common.render(Geometry::Elliptical { major_axis, minor_axis })
        }
        Command::CenterPoint { common, center_x, center_y, angle } => {
            common.render(Geometry::CenterPoint { center_x, center_y, angle })
        }
        Command::Demo { out_dir } => demo(&out_dir),
    };

    if let Err(e) = result {
        eprintln!("gradientkit: {:#}", e);
        std::process::exit(1);
    }
}
