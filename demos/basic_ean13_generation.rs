use std::error::Error;

use barism::{encode, layout, RenderOptions, Symbology};

fn main() -> Result<(), Box<dyn Error>> {
    // Twelve digits, the check digit is computed
    let code = encode("400638133393", Symbology::Ean13)?;

    let geometry = layout(&code, &RenderOptions::default())?;
    let img = geometry.to_image();
    img.save("simple_ean13.png")?;

    println!("Simple EAN-13 saved to: simple_ean13.png");
    println!("Check digit: {}", code.check_digits());
    Ok(())
}
