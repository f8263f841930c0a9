use crate::error::KeResult;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// English letter frequencies (percent of letters in running text).
const ENGLISH_LETTERS: [(char, f64); 26] = [
    ('a', 7.039965378908611),
    ('b', 1.4181595867450678),
    ('c', 1.8378716271912954),
    ('d', 3.2343930318184317),
    ('e', 11.97656207067099),
    ('f', 2.0034208935538826),
    ('g', 1.9467494641973953),
    ('h', 5.086003187338573),
    ('i', 5.926801121063912),
    ('j', 0.111625542671869),
    ('k', 0.9039951640380283),
    ('l', 4.077595208001319),
    ('m', 2.296738473374732),
    ('n', 6.54915645436061),
    ('o', 8.38256305984503),
    ('p', 1.4703659943946805),
    ('q', 0.04671099631807441),
    ('r', 5.21823652250371),
    ('s', 5.7306836291696435),
    ('t', 8.621613452766939),
    ('u', 3.296216409298236),
    ('v', 1.276309281749739),
    ('w', 2.1985079958234874),
    ('x', 0.10784744738143649),
    ('y', 2.635736659888993),
    ('z', 0.056671429356487335),
];

/// Character weights used by the scorer. Absent characters weigh 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    weights: HashMap<char, f64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn english() -> Self {
        Self::from_pairs(ENGLISH_LETTERS)
    }

    pub fn from_pairs<I: IntoIterator<Item = (char, f64)>>(pairs: I) -> Self {
        Self {
            weights: pairs.into_iter().collect(),
        }
    }

    /// Negative weights are clamped to zero.
    pub fn insert(&mut self, c: char, weight: f64) {
        self.weights.insert(c, weight.max(0.0));
    }

    #[inline(always)]
    pub fn weight(&self, c: char) -> f64 {
        self.weights.get(&c).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KeResult<Self> {
        debug!("Loading frequencies from: {}", path.as_ref().display());
        let file = File::open(path)?;
        Self::load_from_reader(file)
    }

    /// Reads `char<TAB>weight` rows. Rows whose first column is not exactly one
    /// character, or whose weight does not parse, are skipped. Repeated
    /// characters accumulate.
    pub fn load_from_reader<R: Read>(reader: R) -> KeResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        let mut table = Self::new();
        let mut skipped = 0;

        for result in rdr.records() {
            let rec = result?;
            if rec.len() < 2 {
                skipped += 1;
                continue;
            }

            let mut chars = rec[0].trim().chars();
            let c = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            let weight: f64 = match rec[1].trim().parse() {
                Ok(v) if v >= 0.0 => v,
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            *table.weights.entry(c).or_insert(0.0) += weight;
        }

        if skipped > 0 {
            warn!("Skipped {} invalid rows in frequency table.", skipped);
        }

        Ok(table)
    }
}
