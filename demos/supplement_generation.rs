use std::error::Error;

use barism::{encode, layout, Rect, RenderOptions, Symbology};

fn main() -> Result<(), Box<dyn Error>> {
    let mut options = RenderOptions::builder();
    options.bar_scale(2.0).print_caption(true).fill_empty_quiet_zones(true);
    let options = options.build()?;

    // A book price: ISBN as EAN-13 followed by an EAN-5 add-on
    let main = layout(&encode("978186197271", Symbology::Ean13)?, &options)?;
    let addon = layout(&encode("52495", Symbology::Ean5)?, &options)?;

    println!("EAN-13: {} x {}", main.size.width, main.size.height);
    println!("EAN-5: {} x {}", addon.size.width, addon.size.height);
    for caption in main.captions.iter().chain(&addon.captions) {
        let Rect { x, y, .. } = caption.rect;
        println!("{:?} at ({x}, {y}): {:?}", caption.zone, caption.text);
    }

    main.to_image().save("ean13.png")?;
    addon.to_image().save("ean5.png")?;
    println!("Saved ean13.png and ean5.png");
    Ok(())
}
