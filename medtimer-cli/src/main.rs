//! MedTimer CLI — render the UI screens to SVG or PNG files.

use std::fs;
use std::path::Path;
use std::process;

use clap::Parser;

use medtimer_screens::{raster_scene, vector_scene, Adherence, Device, Screen};

#[derive(Parser)]
#[command(version, about = "MedTimer \u{2014} medication-reminder screen renderer")]
struct Cli {
    /// Screen to render: "home" or "score"
    #[arg(default_value = "home", value_parser = parse_screen)]
    screen: Screen,

    /// Device preset: "desktop" (1280×800) or "mobile" (375×812)
    #[arg(short, long, default_value = "desktop", value_parser = parse_device)]
    device: Device,

    /// Adherence percentage (0–100) shown on the Score screen
    #[arg(short, long, default_value_t = 0)]
    adherence: u8,

    /// Output format: "svg" (vector scene) or "png" (300×300 snapshot)
    #[arg(short, long, default_value = "svg", value_parser = parse_format)]
    format: Format,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Svg,
    Png,
}

fn parse_screen(s: &str) -> Result<Screen, String> {
    match s.to_lowercase().as_str() {
        "home" => Ok(Screen::Home),
        "score" => Ok(Screen::Score),
        _ => Err(format!("unknown screen \"{s}\": expected \"home\" or \"score\"")),
    }
}

fn parse_device(s: &str) -> Result<Device, String> {
    match s.to_lowercase().as_str() {
        "desktop" => Ok(Device::Desktop),
        "mobile" => Ok(Device::Mobile),
        _ => Err(format!(
            "unknown device \"{s}\": expected \"desktop\" or \"mobile\""
        )),
    }
}

fn parse_format(s: &str) -> Result<Format, String> {
    match s.to_lowercase().as_str() {
        "svg" => Ok(Format::Svg),
        "png" => Ok(Format::Png),
        _ => Err(format!("unknown format \"{s}\": expected \"svg\" or \"png\"")),
    }
}

fn main() {
    let cli = Cli::parse();

    let adherence = match Adherence::new(cli.adherence) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match cli.format {
        Format::Svg => {
            let (width, height) = cli.device.size();
            let svg = match vector_scene(cli.screen, width, height, adherence) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            };
            let filename = match cli.screen {
                Screen::Home => "home.svg",
                Screen::Score => "score.svg",
            };
            write_output(&cli.output, filename, svg.as_bytes());
        }
        Format::Png => {
            let png = match raster_scene(adherence) {
                Ok(bytes) => bytes,
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            };
            write_output(&cli.output, "snapshot.png", &png);
        }
    }
}

fn write_output(output_dir: &str, filename: &str, content: &[u8]) {
    let path = Path::new(output_dir).join(filename);
    match fs::write(&path, content) {
        Ok(()) => {
            eprintln!("Wrote {}", path.display());
        }
        Err(e) => {
            eprintln!("Error writing {}: {e}", path.display());
            process::exit(1);
        }
    }
}
