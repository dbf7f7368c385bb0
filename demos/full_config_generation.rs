use std::error::Error;

use barism::{layout, CodeBuilder, RenderOptions, Symbology};

fn main() -> Result<(), Box<dyn Error>> {
    let code = CodeBuilder::new("CODE39", Symbology::Code39Mod43)
        .strict(true) // Reject lowercase instead of folding it - defaults to false
        .build()?;

    let options = RenderOptions::builder()
        .bar_scale(3.0) // Output units per module - defaults to 1
        .print_caption(true) // Reserve the caption band - defaults to false
        .caption_font_name("Courier") // Defaults to the symbology's font
        .show_check_digits(true) // Print the Mod 43 check character
        .debug_tint(true) // Tint each caption zone
        .build()?;

    let geometry = layout(&code, &options)?;
    for warning in &geometry.warnings {
        println!("Warning: {warning}");
    }

    let img = geometry.to_image();
    img.save("configured_code39.png")?;

    println!("Configured barcode saved to: configured_code39.png");
    println!("Barcode metadata: {}", code.metadata());
    println!("Modules: {}", code.to_module_string());

    Ok(())
}
