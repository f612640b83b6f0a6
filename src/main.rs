use anyhow::Context;
use clap::Parser;
use pixdraw::config::{Config, DrawingConfig};
use pixdraw::draw::{self, Canvas, Color, TextAlign};
use pixdraw::geometry::{Point, Rect, align_rect_to_pixel_grid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pixdraw")]
#[command(version, about = "Render a sample of the pixdraw drawing primitives to PNG")]
struct Cli {
    /// PNG file to write
    #[arg(long, short = 'o', value_name = "FILE")]
    output: PathBuf,

    /// Surface width in pixels
    #[arg(long, default_value_t = 640, value_parser = clap::value_parser!(i32).range(1..=16384))]
    width: i32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 480, value_parser = clap::value_parser!(i32).range(1..=16384))]
    height: i32,

    /// Seed for the random background color
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Config file to use instead of ~/.config/pixdraw/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, cli.width, cli.height)
        .context("Failed to create image surface")?;
    render_sample(&mut surface, &config.drawing, &mut rng)?;

    let mut file = File::create(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    surface
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write PNG to {}", cli.output.display()))?;

    log::info!(
        "Wrote {}x{} sample to {}",
        cli.width,
        cli.height,
        cli.output.display()
    );
    Ok(())
}

/// Draws one of every primitive: a background, a disc inside an arc, a line
/// and a labelled spotlight on the right half.
fn render_sample<S: Canvas, R: Rng>(
    surface: &mut S,
    drawing: &DrawingConfig,
    rng: &mut R,
) -> pixdraw::Result<()> {
    let (width, height) = surface.dimensions();
    let (w, h) = (width as f64, height as f64);

    draw::clear(surface)?;

    let background: Color = draw::random_color(rng).parse()?;
    log::debug!("Background color {}", background);
    draw::draw_rect_filled(surface, Rect::new(0.0, 0.0, w, h), background)?;

    let center = Point::new(w * 0.25, h * 0.5);
    let radius = w.min(h) / 6.0;
    draw::draw_circle_filled(surface, center, radius, drawing.circle_color())?;
    draw::draw_circle_arc(
        surface,
        center,
        radius * 1.4,
        -90.0,
        180.0,
        &drawing.arc_style(),
    )?;

    draw::draw_line(
        surface,
        Point::new(w * 0.05, h * 0.9),
        Point::new(w * 0.45, h * 0.9),
        &drawing.line_style(),
    )?;

    let target = align_rect_to_pixel_grid(Rect::new(w * 0.55, h * 0.3, w * 0.35, h * 0.4));
    draw::shade_except_rect(surface, target, drawing.shade_color())?;
    draw::draw_rect_outline(surface, target, &drawing.outline_style())?;
    draw::draw_text(
        surface,
        "spotlight",
        drawing.font_size,
        Point::new(target.x + target.width / 2.0, target.y - drawing.font_size),
        &drawing.text_style(TextAlign::Center),
    )?;

    Ok(())
}
