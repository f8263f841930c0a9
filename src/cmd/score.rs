use crate::reports;
use clap::Args;
use keyevolve::config::DEFAULT_ALPHABET;
use keyevolve::error::KeResult;
use keyevolve::frequency::FrequencyTable;
use keyevolve::geometry::KeyboardGeometry;
use keyevolve::scorer;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Characters in key order, e.g. "qwertyuiopasdfghjkl;zxcvbnm,./"
    #[arg(short, long)]
    pub layout: String,

    #[arg(long, default_value = DEFAULT_ALPHABET)]
    pub alphabet: String,
}

pub fn run(
    args: ScoreArgs,
    geometry: &KeyboardGeometry,
    frequencies: &FrequencyTable,
) -> KeResult<()> {
    let alphabet: Vec<char> = args.alphabet.chars().collect();
    let layout = scorer::parse_layout(&args.layout, &alphabet)?;

    let details = scorer::score_details(&layout, geometry, frequencies);
    reports::print_layout_grid("INPUT", &layout, geometry);
    reports::print_score_details(&details);

    Ok(())
}
