use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keyevolve::geometry::KeyboardGeometry;
use keyevolve::scorer::ScoreDetails;

const FALLBACK_COLS: usize = 10;
const MAX_GRID_SPAN: i64 = 64;

/// Prints characters at their key positions. Geometries that do not fit a
/// small grid (edited coordinates, overlapping keys) fall back to rows of 10.
pub fn print_layout_grid(name: &str, layout: &[char], geometry: &KeyboardGeometry) {
    println!("\nLayout: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    match grid_rows(layout, geometry) {
        Some(rows) => {
            for row in rows {
                table.add_row(row.into_iter().map(centered));
            }
        }
        None => {
            for chunk in layout.chunks(FALLBACK_COLS) {
                table.add_row(chunk.iter().map(|&c| centered(Some(c))));
            }
        }
    }
    println!("{}", table);
}

fn centered(c: Option<char>) -> Cell {
    let label = c.map(|c| c.to_string()).unwrap_or_else(|| " ".to_string());
    Cell::new(label).set_alignment(CellAlignment::Center)
}

fn grid_rows(layout: &[char], geometry: &KeyboardGeometry) -> Option<Vec<Vec<Option<char>>>> {
    let keys = &geometry.keys()[..layout.len().min(geometry.key_count())];
    let min_x = keys.iter().map(|k| k.x as i64).min()?;
    let max_x = keys.iter().map(|k| k.x as i64).max()?;
    let min_y = keys.iter().map(|k| k.y as i64).min()?;
    let max_y = keys.iter().map(|k| k.y as i64).max()?;

    if max_x - min_x >= MAX_GRID_SPAN || max_y - min_y >= MAX_GRID_SPAN {
        return None;
    }

    let width = (max_x - min_x + 1) as usize;
    let height = (max_y - min_y + 1) as usize;
    let mut rows = vec![vec![None; width]; height];

    for (key, &c) in keys.iter().zip(layout) {
        let cell = &mut rows[(key.y as i64 - min_y) as usize][(key.x as i64 - min_x) as usize];
        if cell.is_some() {
            return None;
        }
        *cell = Some(c);
    }

    Some(rows)
}

pub fn print_score_details(d: &ScoreDetails) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new("Home Bonus").fg(Color::Green),
        Cell::new("Pinky Penalty").fg(Color::Red),
        Cell::new("Home %"),
        Cell::new("Pinky %"),
    ]);

    for i in 0..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.add_row(vec![
        Cell::new(format!("{:.3}", d.total)).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.3}", d.home_row_bonus)).fg(Color::Green),
        Cell::new(format!("{:.3}", d.pinky_penalty)).fg(Color::Red),
        Cell::new(format!("{:.1}", d.home_row_share() * 100.0)),
        Cell::new(format!("{:.1}", d.pinky_share() * 100.0)),
    ]);

    println!("\n{}", table);
}

pub fn print_history_summary(history: &[f64]) {
    let (Some(first), Some(last)) = (history.first(), history.last()) else {
        return;
    };
    let peak = history.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Generations", "First", "Last", "Peak"]);
    table.add_row(vec![
        history.len().to_string(),
        format!("{:.4}", first),
        format!("{:.4}", last),
        format!("{:.4}", peak),
    ]);
    println!("\n{}", table);
}
