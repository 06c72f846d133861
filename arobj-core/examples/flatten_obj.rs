/// Example: run the text-to-mesh pipeline on an OBJ file
///
/// Usage: cargo run --example flatten_obj -- path/to/file.obj [target-size]

use std::env;
use std::fs;
use std::io;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <obj-file> [target-size]", args[0]);
        return Ok(());
    }

    let obj_path = &args[1];
    let target_size: f32 = args
        .get(2)
        .map(|raw| raw.parse())
        .transpose()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("Bad target size: {}", e)))?
        .unwrap_or(0.4);

    println!("Loading OBJ file: {}", obj_path);
    let text = fs::read_to_string(obj_path)?;

    let (mesh, placement) = arobj_core::build(&text, target_size)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Pipeline failed: {}", e)))?;

    println!(
        "Mesh {:?}: {} vertices, {} triangles",
        mesh.name,
        mesh.vertices.len(),
        mesh.triangle_count()
    );
    println!(
        "Placement: scale {} offset {}",
        placement.scale_factor, placement.vertical_offset
    );

    Ok(())
}
