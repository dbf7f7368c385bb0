use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use barism::{layout, CodeBuilder, RenderOptions, Size, Symbology};

/// Encode barcodes from the command line
#[derive(Parser, Debug)]
#[command(name = "barism")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Content to encode
    #[arg(required_unless_present = "list")]
    content: Option<String>,

    /// Symbology, such as ean13, upc-e, code128, itf or msi-mod11
    #[arg(short, long, default_value = "code128")]
    symbology: Symbology,

    /// Reject content instead of folding case or padding it
    #[arg(long)]
    strict: bool,

    /// Module width in output units
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Reserve a caption band below the bars
    #[arg(long)]
    caption: bool,

    /// Caption font, defaults to the symbology's font
    #[arg(long)]
    font: Option<String>,

    /// Share of the caption band guard bars extend into
    #[arg(long, default_value_t = 1.0)]
    overlap: f64,

    /// Draw angle brackets into empty quiet zones
    #[arg(long)]
    fill: bool,

    /// Print check characters in the caption
    #[arg(long)]
    show_check: bool,

    /// Tint caption zones in the output image
    #[arg(long)]
    debug_tint: bool,

    /// Write a PNG to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List supported symbologies and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list {
        for sym in Symbology::ALL {
            let info = sym.info();
            let name = sym.to_string();
            let check = format!("{:?}", sym.check_scheme());
            println!("{name:<22} {:<40} {check:<28} {:>2}", info.standard, info.quiet_zone_width);
        }
        return Ok(());
    }

    let content = cli.content.as_deref().unwrap_or_default();
    let code = CodeBuilder::new(content, cli.symbology).strict(cli.strict).build()?;

    let mut builder = RenderOptions::builder();
    builder
        .bar_scale(cli.scale)
        .print_caption(cli.caption)
        .marker_overlap_percent(cli.overlap)
        .fill_empty_quiet_zones(cli.fill)
        .show_check_digits(cli.show_check)
        .debug_tint(cli.debug_tint);
    if let Some(font) = &cli.font {
        builder.caption_font_name(font);
    }
    let options = builder.build()?;

    let geometry = layout(&code, &options)?;

    println!("{}", code.metadata());
    println!("{}", code.to_module_string());
    let Size { width, height } = geometry.size;
    println!("Size: {width} x {height}, Bars: {}", geometry.bars.len());
    for caption in geometry.captions.iter().filter(|c| c.text.is_some()) {
        println!("{:?}: {}", caption.zone, caption.text.as_deref().unwrap_or_default());
    }

    if let Some(path) = &cli.output {
        geometry.to_image().save(path)?;
        info!("Saved {}", path.display());
    }

    Ok(())
}
