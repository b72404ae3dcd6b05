// main.rs
//
// Command line front end: collects the pump parameters, validates them and
// writes the inner and outer rotors.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gerotor::float_types::{CM, INCH, METER, MM, Real};
use gerotor::pump::PumpSpec;
use std::{fs, path::PathBuf};
use tracing::{Level, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Unit {
    Mm,
    Cm,
    M,
    Inch,
}

impl Unit {
    const fn millimetres(self) -> Real {
        match self {
            Unit::Mm => MM,
            Unit::Cm => CM,
            Unit::M => METER,
            Unit::Inch => INCH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Format {
    /// Binary STL solids
    Stl,
    /// ASCII STL solids
    StlAscii,
    /// DXF outlines
    Dxf,
}

impl Format {
    /// File name for the rotor `name`; every format gets its own file.
    fn file_name(self, name: &str) -> String {
        match self {
            Format::Stl => format!("{name}.stl"),
            Format::StlAscii => format!("{name}.ascii.stl"),
            Format::Dxf => format!("{name}.dxf"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "gerotor", version, about = "Trochoid pump rotor generator")]
struct Args {
    /// Base circle radius of the outer rotor
    #[arg(short = 'r', long, default_value_t = 10.0)]
    outer_radius: Real,

    /// Tooth count of the outer rotor (the inner rotor gets one fewer)
    #[arg(short, long, default_value_t = 7)]
    teeth: usize,

    /// Running clearance between the rotors
    #[arg(short, long, default_value_t = 0.01)]
    clearance: Real,

    /// Extrusion height of both rotors
    #[arg(long, default_value_t = 5.0)]
    height: Real,

    /// Outer rotor wall thickness beyond the lobe tips
    #[arg(long, default_value_t = 2.0)]
    thickness: Real,

    /// Unit of every length argument; output is written in millimetres
    #[arg(short, long, value_enum, default_value_t = Unit::Mm)]
    unit: Unit,

    /// Subdivisions of a full turn used to sample each outline
    #[arg(short, long, default_value_t = 200)]
    points: usize,

    /// Output formats
    #[arg(short, long, value_enum, default_values_t = [Format::Stl])]
    format: Vec<Format>,

    /// Directory the files are written to
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,

    /// Log derivation and meshing details
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let spec = PumpSpec {
        outer_radius: args.outer_radius,
        outer_teeth: args.teeth,
        clearance: args.clearance,
        height: args.height,
        thickness: args.thickness,
    }
    .scaled(args.unit.millimetres());

    let pair = spec.gear_pair().context("invalid pump parameters")?;
    info!(
        inner_radius = pair.inner.radius(),
        inner_teeth = pair.inner.teeth(),
        housing_radius = pair.housing_radius,
        "pump geometry"
    );

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let mut formats = args.format.clone();
    formats.sort();
    formats.dedup();
    for format in formats {
        match format {
            Format::Stl | Format::StlAscii => write_solids(&args, &pair, format)?,
            Format::Dxf => write_outlines(&args, &pair)?,
        }
    }
    Ok(())
}

#[cfg(feature = "stl-io")]
fn write_solids(args: &Args, pair: &gerotor::GearPair, format: Format) -> Result<()> {
    let rotors = [
        ("inner_rotor", pair.inner_solid::<()>(args.points, None)?),
        ("outer_rotor", pair.outer_solid::<()>(args.points, None)?),
    ];
    for (name, mesh) in rotors {
        let path = args.out_dir.join(format.file_name(name));
        let bytes = match format {
            Format::StlAscii => mesh.to_stl_ascii(name).into_bytes(),
            _ => mesh.to_stl_binary()?,
        };
        fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), triangles = mesh.triangle_count(), "wrote solid");
    }
    Ok(())
}

#[cfg(not(feature = "stl-io"))]
fn write_solids(_args: &Args, _pair: &gerotor::GearPair, _format: Format) -> Result<()> {
    anyhow::bail!("STL output requires the `stl-io` feature")
}

#[cfg(feature = "dxf-io")]
fn write_outlines(args: &Args, pair: &gerotor::GearPair) -> Result<()> {
    let outlines = [
        ("inner_rotor", pair.inner_rotor::<()>(args.points, None)?),
        ("outer_rotor", pair.outer_rotor::<()>(args.points, None)?),
    ];
    for (name, sketch) in outlines {
        let path = args.out_dir.join(Format::Dxf.file_name(name));
        let bytes = sketch.to_dxf()?;
        fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), area = sketch.area(), "wrote outline");
    }
    Ok(())
}

#[cfg(not(feature = "dxf-io"))]
fn write_outlines(_args: &Args, _pair: &gerotor::GearPair) -> Result<()> {
    anyhow::bail!("DXF output requires the `dxf-io` feature")
}
