#![forbid(unsafe_code)]

use chroma_cellular_life::ColorScheme;

const WINDOW_WIDTH: f64 = 500.;
const WINDOW_HEIGHT: f64 = 500.;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    chroma_cellular_life::run(WINDOW_WIDTH, WINDOW_HEIGHT, ColorScheme::age_gradient())
}
