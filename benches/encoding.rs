use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use rayon::prelude::*;

use barism::{encode, layout, MsiCheck, RenderOptions, Symbology};

const ROUNDS: usize = 2000;

fn sample(sym: Symbology, i: usize) -> String {
    let n = 100_000 + i * 37;
    match sym {
        Symbology::Ean13 => format!("{:012}", n * 1_000_003),
        Symbology::Ean8 => format!("{:07}", n),
        Symbology::UpcE => format!("0{:06}", n % 1_000_000),
        Symbology::Ean2 => format!("{:02}", n % 100),
        Symbology::Ean5 => format!("{:05}", n % 100_000),
        Symbology::Code39 | Symbology::Code39Mod43 | Symbology::Code93 => format!("ITEM-{n}"),
        Symbology::Code128 => format!("Lot {n} / batch {}", i % 7),
        Symbology::Code11 => format!("{n}-{}", i % 10),
        Symbology::Interleaved2of5 | Symbology::Standard2of5 | Symbology::Msi(_) => n.to_string(),
        Symbology::Codabar => format!("A{n}B"),
        Symbology::Pharmacode => (3 + n % 131_000).to_string(),
        Symbology::Fim => "ABCDE".chars().nth(i % 5).unwrap_or('A').to_string(),
    }
}

fn print_table(results: &HashMap<String, (u128, u128)>, rows: &[String]) {
    let cell_w = 22;
    let divider = "-".repeat(3 * (cell_w + 2) + 1);

    println!("{divider}");
    let (sym, enc, lay) = ("Symbology", "Encode (ns)", "Layout (ns)");
    println!("| {sym:<cell_w$}| {enc:<cell_w$}| {lay:<cell_w$}| ");
    println!("{divider}");
    for r in rows {
        let (enc, lay) = results.get(r).copied().unwrap_or_default();
        let (enc, lay) = (enc / ROUNDS as u128, lay / ROUNDS as u128);
        println!("| {r:<cell_w$}| {enc:<cell_w$}| {lay:<cell_w$}| ");
    }
    println!("{divider}");
}

fn main() {
    println!("Running barism encoding benchmark");
    println!("=================================\n");

    let mut symbologies = Symbology::ALL.to_vec();
    let msi = [MsiCheck::Mod11, MsiCheck::Mod1010, MsiCheck::Mod1110];
    symbologies.extend(msi.map(Symbology::Msi));

    let mut options = RenderOptions::builder();
    options.print_caption(true).fill_empty_quiet_zones(true);
    let options = options.build().unwrap();

    let results = Arc::new(Mutex::new(HashMap::<String, (u128, u128)>::new()));
    let total_start = Instant::now();

    symbologies.par_iter().for_each(|sym| {
        let (mut enc, mut lay) = (0, 0);
        for i in 0..ROUNDS {
            let content = sample(*sym, i);

            let start = Instant::now();
            let code = encode(&content, *sym).unwrap();
            enc += start.elapsed().as_nanos();

            let start = Instant::now();
            let geometry = layout(&code, &options).unwrap();
            lay += start.elapsed().as_nanos();

            assert!(!geometry.bars.is_empty(), "{sym} {content}");
        }
        results.lock().unwrap().insert(sym.to_string(), (enc, lay));
    });

    let rows: Vec<String> = symbologies.iter().map(|s| s.to_string()).collect();
    print_table(&results.lock().unwrap(), &rows);
    println!("Total time elapsed: {:?}", total_start.elapsed());
}
