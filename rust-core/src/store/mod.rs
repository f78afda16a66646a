// Store module: load/save of mask coordinates

// ======================== MODULE DECLARATIONS ========================
pub mod mask_store;


// ======================== MASK FILES ========================
pub use mask_store::{
    exists,            // fn(path) -> bool - mask file present
    format_coordinate, // fn(value: f64) -> String - C-style %+.6e
    format_holes,      // fn(holes: &[Vector2<f64>]) -> String - one "x y" line per hole
    load,              // fn(path) -> Result<Vec<Vector2<f64>>, MaskError>
    parse_holes,       // fn(text: &str) -> Result<Vec<Vector2<f64>>, MaskError>
    read_holes,        // fn(reader: impl BufRead) -> Result<Vec<Vector2<f64>>, MaskError>
    save,              // fn(path, holes: &[Vector2<f64>]) -> Result<(), MaskError>
    write_holes,       // fn(writer: impl Write, holes: &[Vector2<f64>]) -> Result<(), MaskError>
};
