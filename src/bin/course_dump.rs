//! Decode one area of an unpacked course and print what it contains.
//!
//! Run with: cargo run --bin course-dump -- <course dir or .zip> [--area N] [--game DIR] [--json]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use course_decoder::course::NoTilesets;
use course_decoder::{
    CourseDecoder, CourseFile, DirectoryArchive, Game, StreamProvider, TilesetResolver, ZipStreams,
    ZoneStride,
};

#[derive(Parser)]
#[command(name = "course-dump")]
#[command(about = "Decode a course area and print its contents")]
struct Cli {
    /// Unpacked course directory, or a .zip holding the course streams
    input: PathBuf,
    #[arg(long, default_value_t = 1)]
    area: u32,
    /// Game data root used to resolve tileset names (expects Unit/*.sarc)
    #[arg(long)]
    game: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Stride::Sequential)]
    zone_stride: Stride,
    /// Print the whole course as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Stride {
    Sequential,
    Indexed,
}

impl From<Stride> for ZoneStride {
    fn from(stride: Stride) -> Self {
        match stride {
            Stride::Sequential => ZoneStride::Sequential,
            Stride::Indexed => ZoneStride::Indexed,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("COURSE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let fs: Box<dyn StreamProvider> = if cli.input.extension().is_some_and(|ext| ext == "zip") {
        let zip = ZipStreams::open_file(&cli.input)?;
        debug!(entries = zip.len(), path = %cli.input.display(), "opened course container");
        Box::new(zip)
    } else {
        Box::new(DirectoryArchive::new(&cli.input))
    };
    let resolver: Box<dyn TilesetResolver> = match &cli.game {
        Some(root) => Box::new(Game::open(root)),
        None => Box::new(NoTilesets),
    };

    let course = CourseDecoder::new()
        .tilesets(resolver.as_ref())
        .zone_stride(cli.zone_stride.into())
        .load(fs.as_ref(), cli.area)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&course)?);
    } else {
        print_summary(&course);
    }
    Ok(())
}

fn print_summary(course: &CourseFile) {
    println!("Area {}", course.area);
    for (i, slot) in course.tilesets.iter().enumerate() {
        let name = slot.name.as_deref().unwrap_or("-");
        let state = if slot.is_unresolved() { format!("{name} (not found)") } else { name.to_string() };
        println!("  tileset {i}: {state}");
    }
    match course.time_limit() {
        Some(limit) => println!("  time limit: {limit}"),
        None => println!("  time limit: -"),
    }
    if let Some(bg) = &course.background {
        println!("  background: {} (id {})", bg.name, bg.block_id);
    }
    println!("  entrances: {}", course.entrances.len());
    println!("  sprites: {}", course.sprites.len());
    println!("  zones: {}", course.zones.len());
    println!("  locations: {}", course.locations.len());
    println!("  paths: {}", course.paths.len());
    println!("  progress paths: {}", course.progress_paths.len());
    for (i, layer) in course.objects.iter().enumerate() {
        println!("  layer {} objects: {}", i + 1, layer.len());
    }
}
