extern crate alloc;

// The packer is shared with the library so the asset bytes and the
// constants describing them cannot drift apart.
#[path = "src/glyph.rs"]
#[allow(dead_code)]
mod glyph;

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pack a PNG glyph strip into the display's byte layout at build time
fn convert_strip_to_binary(
    input_path: &str,
    output_path: &str,
    threshold: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={}", input_path);

    // Check if input file exists
    if !Path::new(input_path).exists() {
        println!(
            "cargo:warning=Glyph strip '{}' not found, skipping conversion",
            input_path
        );
        // Create empty file so build doesn't fail
        let mut file = File::create(output_path)?;
        file.write_all(&[])?;
        return Ok(());
    }

    // Load the strip and reduce it to one byte per pixel, ink or blank.
    // Pixels darker than the threshold count as ink.
    let img = image::open(input_path)?;
    let gray = img.to_luma8();
    let pixels: Vec<u8> = gray.pixels().map(|p| u8::from(p[0] < threshold)).collect();

    let strip = glyph::Strip::new(&pixels, gray.width() as usize, gray.height() as usize)?;
    let packed = strip.pack();
    println!(
        "cargo:warning=Packed {} glyphs from {} ({} bytes)",
        strip.glyph_count(),
        input_path,
        packed.len()
    );

    let mut file = File::create(output_path)?;
    file.write_all(&packed)?;
    Ok(())
}

fn main() {
    // Get output directory
    let out_dir = env::var("OUT_DIR").unwrap();

    let digits_output = format!("{}/digits.bin", out_dir);
    if let Err(e) = convert_strip_to_binary(
        "glyphs/digits.png",
        &digits_output,
        128, // threshold (0-255, 128 = middle gray)
    ) {
        println!("cargo:warning=Failed to convert glyphs/digits.png: {}", e);
        // Leave an empty file behind so include_bytes! still resolves
        let _ = File::create(&digits_output);
    }

    println!("cargo:rerun-if-changed=glyphs/digits.png");
}
