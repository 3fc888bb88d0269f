//! Packs a decorated layout and writes it as SVG.
//!
//! Run with: cargo run --release --example visualize -- [COUNT] [SEED]
//!
//! Set `RUST_LOG=circlepack=debug` to follow attempts and growth.

use circlepack::io::{packing_to_svg, SvgStyle};
use circlepack::packing::{PackConfig, Packer};
use circlepack::Point2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::Write;
use tracing_subscriber::EnvFilter;

const INNER_RADIUS: f64 = 1.0;
const DEFAULT_COUNT: usize = 600;
const SCALE: f64 = 8.0;
const OUTPUT: &str = "packing.svg";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let count = match args.next() {
        Some(arg) => arg.parse()?,
        None => DEFAULT_COUNT,
    };
    let seed = match args.next() {
        Some(arg) => arg.parse()?,
        None => 0,
    };

    let config = PackConfig::new(Point2::new(340.0, 500.0), INNER_RADIUS, count)
        .with_decorations(true);
    let packing = Packer::new(config)?.pack(&mut StdRng::seed_from_u64(seed))?;

    let style = SvgStyle {
        scale: SCALE,
        ..SvgStyle::default()
    };
    let mut file = File::create(OUTPUT)?;
    file.write_all(packing_to_svg(&packing, &style).as_bytes())?;

    println!(
        "Packed {} circles ({} decorations) into radius {} after {} attempts, density {:.3}",
        packing.len(),
        packing.decoration_count(),
        packing.outer.radius,
        packing.attempts,
        packing.density()
    );
    println!("Wrote {}", OUTPUT);
    Ok(())
}
