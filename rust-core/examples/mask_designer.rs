/// Walk through a small mask design session on the ELT aperture
///
/// Picks a handful of segments, inspects the resulting uv coverage, drops the
/// pairs that make it redundant and writes the mask to a temporary file.
use hexmask::config::ELT_SEGMENT_PITCH;
use hexmask::lattice::{elt_aperture, HexIndex};
use hexmask::MaskEditor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Designing an aperture mask on the ELT pupil ===\n");

    let aperture = elt_aperture(ELT_SEGMENT_PITCH)?;
    println!("1. Aperture:");
    println!("   Segments: {}", aperture.len());
    println!("   Pitch: {:.2} m\n", aperture.pitch());

    let mut editor = MaskEditor::new(aperture).with_rounding_digits(2);

    // Clicks slightly off the segment centres are snapped
    println!("2. Adding holes:");
    for (i, j) in [(5, 1), (7, 1), (-3, 8), (-9, 2), (2, -10), (11, -4)] {
        let click = HexIndex::new(i, j).to_cartesian(ELT_SEGMENT_PITCH) * 1.02;
        if let Some(index) = editor.add_hole(click) {
            let hole = editor.all_holes()[index];
            println!("   hole {} -> ({:+.3}, {:+.3})", index, hole.x, hole.y);
        }
    }

    println!("\n3. Baselines:");
    let model = editor.baselines();
    println!("   Pairs: {}", model.baseline_count());
    println!("   Distinct uv points: {}", model.bin_count());
    println!("   Max redundancy: {}", model.max_redundancy());

    let redundant: Vec<_> = model
        .bins()
        .iter()
        .filter(|bin| bin.redundancy() > 1)
        .map(|bin| bin.uv)
        .collect();
    for uv in &redundant {
        println!("   redundant uv ({:+.2}, {:+.2})", uv.x, uv.y);
    }

    println!("\n4. Moving hole 1 away from the redundancy:");
    let moved = editor.move_hole(1, HexIndex::new(8, 3).to_cartesian(ELT_SEGMENT_PITCH));
    if let Some(position) = moved {
        println!("   hole 1 -> ({:+.3}, {:+.3})", position.x, position.y);
    }
    println!("   Max redundancy now: {}", editor.baselines().max_redundancy());

    let filtered = editor.non_redundant_baselines();
    println!("   Non-redundant uv points: {}\n", filtered.bin_count());

    println!("5. Saving:");
    let path = std::env::temp_dir().join("hexmask_demo.txt");
    editor.save(&path)?;
    println!("   Wrote {} holes to {}", editor.hole_count(), path.display());
    print!("{}", editor.to_mask_text());

    Ok(())
}
