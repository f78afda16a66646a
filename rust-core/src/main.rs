use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use hexmask::config::{
    ApertureConfig, DEFAULT_MASK_FILE, DEFAULT_PITCH, DEFAULT_ROUNDING_DIGITS, ELT_GRID_RADIUS,
    ELT_OBSTRUCTION_RADIUS,
};
use hexmask::editor::LoadSummary;
use hexmask::{MaskEditor, MaskError};
use log::info;
use nalgebra::Vector2;

#[derive(Parser)]
#[command(name = "hexmask")]
#[command(about = "Design non-redundant aperture masks on a segmented hexagonal pupil")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    aperture: ApertureArgs,

    /// Decimal digits used when binning baselines
    #[arg(long, global = true, default_value_t = DEFAULT_ROUNDING_DIGITS)]
    digits: u32,

    /// Save a mask even if its holes had to be snapped onto this aperture
    #[arg(long, global = true)]
    resnap: bool,
}

#[derive(Args)]
struct ApertureArgs {
    /// Hexagon radius of the segment grid, in rings
    #[arg(long, global = true, default_value_t = ELT_GRID_RADIUS)]
    grid_radius: i32,

    /// Rings removed around the centre by the secondary mirror
    #[arg(long, global = true, default_value_t = ELT_OBSTRUCTION_RADIUS)]
    obstruction_radius: i32,

    /// Centre-to-centre segment spacing
    #[arg(long, global = true, default_value_t = DEFAULT_PITCH)]
    pitch: f64,

    /// Keep segments under the support spiders
    #[arg(long, global = true)]
    no_spiders: bool,

    /// Keep the hexagon corners outside the circular pupil
    #[arg(long, global = true)]
    no_cutoff: bool,

    /// Keep the central segments
    #[arg(long, global = true)]
    no_obstruction: bool,
}

impl ApertureArgs {
    fn to_config(&self) -> ApertureConfig {
        ApertureConfig {
            grid_radius: self.grid_radius,
            obstruction_radius: (!self.no_obstruction).then_some(self.obstruction_radius),
            pitch: self.pitch,
            circular_cutoff: !self.no_cutoff,
            spiders: !self.no_spiders,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print every candidate segment position
    Lattice,
    /// Snap a point onto the nearest segment and add it to the mask
    Add {
        #[arg(short, long, default_value = DEFAULT_MASK_FILE)]
        mask: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Remove the hole with the given index
    Remove {
        #[arg(short, long, default_value = DEFAULT_MASK_FILE)]
        mask: PathBuf,
        #[arg(short, long)]
        index: usize,
    },
    /// Move a hole onto the segment nearest to a new point
    Move {
        #[arg(short, long, default_value = DEFAULT_MASK_FILE)]
        mask: PathBuf,
        #[arg(short, long)]
        index: usize,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Print the uv coverage of a mask
    Baselines {
        #[arg(short, long, default_value = DEFAULT_MASK_FILE)]
        mask: PathBuf,
        /// Only keep uv points sampled by a single hole pair
        #[arg(long)]
        non_redundant: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting hexmask v{}", hexmask::VERSION);

    let mut editor = MaskEditor::from_config(cli.aperture.to_config())
        .context("Failed to generate the aperture")?
        .with_rounding_digits(cli.digits);

    match cli.command {
        Commands::Lattice => print_lattice(&editor),
        Commands::Add { mask, x, y } => {
            let loaded = editor
                .load_or_empty(&mask)
                .with_context(|| format!("Failed to read mask {}", mask.display()))?;
            if let Some(summary) = loaded {
                check_on_lattice(&summary, &mask, cli.resnap)?;
            }
            let index = editor
                .add_hole(Vector2::new(x, y))
                .context("Aperture has no segments to snap onto")?;
            let hole = editor.all_holes()[index];
            println!("hole {}: {:+.6} {:+.6}", index, hole.x, hole.y);
            save(&editor, &mask)
        }
        Commands::Remove { mask, index } => {
            let summary = load(&mut editor, &mask)?;
            check_on_lattice(&summary, &mask, cli.resnap)?;
            let len = editor.hole_count();
            let removed = editor
                .remove_hole_at(index)
                .ok_or(MaskError::HoleIndex { index, len })?;
            println!("removed hole {}: {:+.6} {:+.6}", index, removed.x, removed.y);
            save(&editor, &mask)
        }
        Commands::Move { mask, index, x, y } => {
            let summary = load(&mut editor, &mask)?;
            check_on_lattice(&summary, &mask, cli.resnap)?;
            let len = editor.hole_count();
            let moved = editor
                .move_hole(index, Vector2::new(x, y))
                .ok_or(MaskError::HoleIndex { index, len })?;
            println!("hole {}: {:+.6} {:+.6}", index, moved.x, moved.y);
            save(&editor, &mask)
        }
        Commands::Baselines {
            mask,
            non_redundant,
        } => {
            let summary = load(&mut editor, &mask)?;
            if summary.off_lattice {
                println!("# holes snapped onto the aperture by up to {:.6}", summary.max_shift);
            }
            print_baselines(&mut editor, non_redundant);
            Ok(())
        }
    }
}

fn load(editor: &mut MaskEditor, path: &Path) -> Result<LoadSummary> {
    editor
        .load(path)
        .with_context(|| format!("Failed to read mask {}", path.display()))
}

/// Refuse to overwrite a mask that does not sit on this aperture unless asked to
fn check_on_lattice(summary: &LoadSummary, path: &Path, resnap: bool) -> Result<()> {
    if summary.off_lattice && !resnap {
        bail!(
            "Mask {} is off this aperture by up to {:.6}; rerun with --resnap to save the snapped holes",
            path.display(),
            summary.max_shift
        );
    }
    Ok(())
}

fn save(editor: &MaskEditor, path: &Path) -> Result<()> {
    editor
        .save(path)
        .with_context(|| format!("Failed to write mask {}", path.display()))
}

fn print_lattice(editor: &MaskEditor) -> Result<()> {
    let lattice = editor.lattice();
    println!("# {} segments", lattice.len());
    for point in lattice {
        println!("{:+.6} {:+.6}", point.x, point.y);
    }
    Ok(())
}

fn print_baselines(editor: &mut MaskEditor, non_redundant: bool) {
    let holes = editor.hole_count();
    let model = if non_redundant {
        editor.non_redundant_baselines()
    } else {
        editor.baselines().clone()
    };

    println!("# u v redundancy");
    for bin in model.bins() {
        println!("{:+.6} {:+.6} {}", bin.uv.x, bin.uv.y, bin.redundancy());
    }
    println!(
        "# {} holes, {} baselines, {} uv points, max redundancy {}",
        holes,
        model.baseline_count(),
        model.bin_count(),
        model.max_redundancy()
    );
}
