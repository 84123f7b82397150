//! Headless front end for the crop engine.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_editor::crop::{CropRequest, OutputSize};
use folio_editor::geometry::{Point, Size};
use folio_editor::{config, logging, run_crop, CropJob};

#[derive(Debug, Parser)]
#[command(author, version, about = "Portfolio editor crop tools")]
struct Arguments {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Crop an image the way the crop modal would and write the encoded result.
    Crop(CropArguments),
}

#[derive(Debug, clap::Args)]
struct CropArguments {
    /// Source image.
    input: PathBuf,
    /// Destination for the encoded crop.
    output: PathBuf,
    /// Pinned output size, `WxH`.
    #[arg(long, value_parser = parse_output_size)]
    size: Option<OutputSize>,
    /// Fallback aspect ratio used when no size is pinned.
    #[arg(long)]
    aspect: Option<f64>,
    /// Zoom factor; clamped to the session's range.
    #[arg(long, default_value_t = folio_editor::crop::engine::ZOOM_DEFAULT)]
    zoom: f64,
    /// Drag delta in container pixels, `DX,DY`.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pan: Option<Point>,
    /// Container size, `WxH`.
    #[arg(long, value_parser = parse_size)]
    container: Option<Size>,
}

impl CropArguments {
    fn job(&self) -> CropJob {
        let defaults = CropJob::default();
        CropJob {
            request: CropRequest {
                output_size: self.size,
                aspect_ratio: self.aspect,
            },
            container: self.container.unwrap_or(defaults.container),
            zoom: self.zoom,
            pan_delta: self.pan.unwrap_or(defaults.pan_delta),
            ..defaults
        }
    }
}

fn main() -> Result<()> {
    logging::init();
    let Command::Crop(arguments) = Arguments::parse().command;
    let config = config::load_app_config();

    let input = std::fs::read(&arguments.input)
        .with_context(|| format!("failed to read {}", arguments.input.display()))?;
    let job = CropJob {
        raster: config.raster_options(),
        ..arguments.job()
    };
    let output = run_crop(&input, job)
        .with_context(|| format!("failed to crop {}", arguments.input.display()))?;
    std::fs::write(&arguments.output, &output.bytes)
        .with_context(|| format!("failed to write {}", arguments.output.display()))?;

    tracing::info!(
        output = %arguments.output.display(),
        width = output.size.width,
        height = output.size.height,
        "crop written"
    );
    Ok(())
}

fn parse_output_size(value: &str) -> Result<OutputSize, String> {
    let (width, height) = parse_pair::<u32>(value, 'x')?;
    Ok(OutputSize::new(width, height))
}

fn parse_size(value: &str) -> Result<Size, String> {
    let (width, height) = parse_pair::<f64>(value, 'x')?;
    Ok(Size::new(width, height))
}

fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = parse_pair::<f64>(value, ',')?;
    Ok(Point::new(x, y))
}

fn parse_pair<T: std::str::FromStr>(value: &str, separator: char) -> Result<(T, T), String> {
    let (first, second) = value
        .split_once(separator)
        .ok_or_else(|| format!("expected `A{separator}B`, got `{value}`"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<T>()
            .map_err(|_| format!("invalid number `{part}` in `{value}`"))
    };
    Ok((parse(first)?, parse(second)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop_arguments(line: &str) -> Result<CropArguments, clap::Error> {
        let argv = std::iter::once("folio-editor").chain(line.split_whitespace());
        let Command::Crop(arguments) = Arguments::try_parse_from(argv)?.command;
        Ok(arguments)
    }

    #[test]
    fn parses_every_flag() {
        let arguments = crop_arguments(
            "crop in.png out.jpg --size 1200x600 --zoom 1.5 --pan -20,10 --container 800x400",
        )
        .expect("parse");
        assert_eq!(arguments.input, PathBuf::from("in.png"));
        assert_eq!(arguments.output, PathBuf::from("out.jpg"));

        let job = arguments.job();
        assert_eq!(job.request.output_size, Some(OutputSize::new(1200, 600)));
        assert_eq!(job.zoom, 1.5);
        assert_eq!(job.pan_delta, Point::new(-20.0, 10.0));
        assert_eq!(job.container, Size::new(800.0, 400.0));
    }

    #[test]
    fn aspect_flag_sets_the_fallback_ratio() {
        let job = crop_arguments("crop a b --aspect 1.7777").expect("parse").job();
        assert_eq!(job.request.aspect_ratio, Some(1.7777));
        assert_eq!(job.request.output_size, None);
        assert_eq!(job.container, CropJob::default().container);
    }

    #[test]
    fn rejects_unknown_commands_and_flags() {
        assert!(crop_arguments("resize a b").is_err());
        assert!(crop_arguments("crop a b --rotate 90").is_err());
        assert!(crop_arguments("crop a b --size 12").is_err());
        assert!(crop_arguments("crop a").is_err());
        assert!(crop_arguments("").is_err());
    }
}
