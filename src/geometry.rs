use crate::error::KeResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const PINKY_FINGERS: [u8; 2] = [0, 9];
pub const HOME_ROW: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub x: i32,     // Column
    pub y: i32,     // Row (1 = Home)
    pub finger: u8, // 0..=9, left pinky to right pinky
    pub hand: u8,   // 0 = Left, 1 = Right
}

impl Key {
    pub fn new(x: i32, y: i32, finger: u8, hand: u8) -> Self {
        Self { x, y, finger, hand }
    }

    #[inline(always)]
    pub fn is_pinky(&self) -> bool {
        PINKY_FINGERS.contains(&self.finger)
    }

    #[inline(always)]
    pub fn is_home_row(&self) -> bool {
        self.y == HOME_ROW
    }
}

/// Physical key positions in layout order.
///
/// The key count never changes after construction. Field edits are not
/// validated here: duplicate positions or odd finger ids are the editor's
/// responsibility and only influence future scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardGeometry {
    keys: Vec<Key>,
}

impl Default for KeyboardGeometry {
    fn default() -> Self {
        Self::standard()
    }
}

impl KeyboardGeometry {
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }

    /// The 30-key ortho grid: 3 rows of 10, columns 0-4 on the left hand,
    /// finger id equal to the column.
    pub fn standard() -> Self {
        let mut keys = Vec::with_capacity(30);
        for row in 0..3 {
            for col in 0..10 {
                let hand = if col < 5 { 0 } else { 1 };
                keys.push(Key::new(col, row, col as u8, hand));
            }
        }
        Self { keys }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KeResult<Self> {
        let content = fs::read_to_string(path)?;
        let geometry = serde_json::from_str(&content)?;
        Ok(geometry)
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn key(&self, idx: usize) -> Option<&Key> {
        self.keys.get(idx)
    }

    /// Field-level access for editors. Keys can be changed but never added,
    /// removed or reordered.
    pub fn key_mut(&mut self, idx: usize) -> Option<&mut Key> {
        self.keys.get_mut(idx)
    }
}
