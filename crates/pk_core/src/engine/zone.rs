//! Goal-mouth geometry
//!
//! The goal is split into columns (left / center / right) and horizontal bands.
//! Every aim the shooter can produce resolves to exactly one [`Zone`] of the active
//! [`GridLayout`], and the keeper always reacts toward one of those zones.

use serde::{Deserialize, Serialize};

const ONE_THIRD: f32 = 1.0 / 3.0;
const TWO_THIRDS: f32 = 2.0 / 3.0;

// ============================================================================
// Column / Height / Band
// ============================================================================

/// 가로 방향 (골문 3등분)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Left,
    Center,
    Right,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Left, Column::Center, Column::Right];

    pub fn index(self) -> usize {
        match self {
            Column::Left => 0,
            Column::Center => 1,
            Column::Right => 2,
        }
    }

    /// Horizontal thirds: `< 1/3` left, `< 2/3` center, else right.
    pub fn from_ratio(x: f32) -> Self {
        if x < ONE_THIRD {
            Column::Left
        } else if x < TWO_THIRDS {
            Column::Center
        } else {
            Column::Right
        }
    }

    /// One step toward the left post, saturating.
    pub fn step_left(self) -> Self {
        match self {
            Column::Right => Column::Center,
            _ => Column::Left,
        }
    }

    /// One step toward the right post, saturating.
    pub fn step_right(self) -> Self {
        match self {
            Column::Left => Column::Center,
            _ => Column::Right,
        }
    }

    /// Midpoint of the column as a horizontal ratio.
    pub fn center_ratio(self) -> f32 {
        (self.index() as f32 + 0.5) * ONE_THIRD
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Left => "Left",
            Column::Center => "Center",
            Column::Right => "Right",
        }
    }

    /// Horizontal ball offset (px) used by the render sink.
    pub fn ball_offset(self) -> f32 {
        match self {
            Column::Left => -130.0,
            Column::Center => 0.0,
            Column::Right => 130.0,
        }
    }

    /// Horizontal keeper dive offset (px) used by the render sink.
    pub fn keeper_offset(self) -> f32 {
        match self {
            Column::Left => -140.0,
            Column::Center => 0.0,
            Column::Right => 140.0,
        }
    }
}

/// 슛 높이 (3방향 모드에서 표시용)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Height {
    Low,
    Mid,
    High,
}

impl Height {
    pub fn step_up(self) -> Self {
        match self {
            Height::Low => Height::Mid,
            _ => Height::High,
        }
    }

    pub fn step_down(self) -> Self {
        match self {
            Height::High => Height::Mid,
            _ => Height::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Height::Low => "Low",
            Height::Mid => "Mid",
            Height::High => "High",
        }
    }

    /// Vertical ball offset (px); negative is up.
    pub fn ball_offset(self) -> f32 {
        match self {
            Height::Low => 50.0,
            Height::Mid => -10.0,
            Height::High => -70.0,
        }
    }

    /// Vertical position as a ratio (0 = crossbar, 1 = ground).
    pub fn center_ratio(self) -> f32 {
        match self {
            Height::High => ONE_THIRD * 0.5,
            Height::Mid => 0.5,
            Height::Low => 1.0 - ONE_THIRD * 0.5,
        }
    }
}

/// 세로 구역
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Top,
    Middle,
    Bottom,
}

impl Band {
    pub fn label(self) -> &'static str {
        match self {
            Band::Top => "Top",
            Band::Middle => "Middle",
            Band::Bottom => "Bottom",
        }
    }

    pub fn center_ratio(self) -> f32 {
        match self {
            Band::Top => ONE_THIRD * 0.5,
            Band::Middle => 0.5,
            Band::Bottom => 1.0 - ONE_THIRD * 0.5,
        }
    }

    pub fn ball_offset(self) -> f32 {
        match self {
            Band::Top => Height::High.ball_offset(),
            Band::Middle => Height::Mid.ball_offset(),
            Band::Bottom => Height::Low.ball_offset(),
        }
    }
}

// ============================================================================
// Zone
// ============================================================================

/// A single cell of the goal mouth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Zone {
    pub column: Column,
    pub band: Band,
}

impl Zone {
    pub const fn new(column: Column, band: Band) -> Self {
        Self { column, band }
    }

    /// Keeper and shot share a vertical band.
    pub fn same_band(&self, other: &Zone) -> bool {
        self.band == other.band
    }

    /// `left_top`, `center_middle`, ...
    pub fn key(&self) -> String {
        format!("{}_{}", self.column.label().to_lowercase(), self.band.label().to_lowercase())
    }

    /// Ratio position of the zone's center.
    pub fn center(&self) -> (f32, f32) {
        (self.column.center_ratio(), self.band.center_ratio())
    }
}

// ============================================================================
// Grid layout
// ============================================================================

/// Grid granularity used to compare aim against the keeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GridLayout {
    /// Columns only. Height is cosmetic.
    #[default]
    ThreeDirection,
    /// Top / Bottom halves × 3 columns.
    SixZone,
    /// 3 × 3 grid.
    NineZone,
}

impl GridLayout {
    pub fn bands(self) -> &'static [Band] {
        match self {
            GridLayout::ThreeDirection => &[Band::Middle],
            GridLayout::SixZone => &[Band::Top, Band::Bottom],
            GridLayout::NineZone => &[Band::Top, Band::Middle, Band::Bottom],
        }
    }

    /// All zones, band-major (top row first, left to right).
    pub fn zones(self) -> Vec<Zone> {
        self.bands()
            .iter()
            .flat_map(|&band| Column::ALL.iter().map(move |&column| Zone::new(column, band)))
            .collect()
    }

    pub fn zone_count(self) -> usize {
        self.bands().len() * Column::ALL.len()
    }

    /// Whether the layout distinguishes vertical bands at all.
    pub fn has_bands(self) -> bool {
        self.bands().len() > 1
    }

    /// Center column, middle-most band. Used as the fallback keeper reaction.
    pub fn default_zone(self) -> Zone {
        let bands = self.bands();
        Zone::new(Column::Center, bands[bands.len() / 2])
    }

    /// Vertical ratio → band: halves for six zones, thirds for nine.
    pub fn band_for_ratio(self, y: f32) -> Band {
        match self {
            GridLayout::ThreeDirection => Band::Middle,
            GridLayout::SixZone => {
                if y < 0.5 {
                    Band::Top
                } else {
                    Band::Bottom
                }
            }
            GridLayout::NineZone => {
                if y < ONE_THIRD {
                    Band::Top
                } else if y < TWO_THIRDS {
                    Band::Middle
                } else {
                    Band::Bottom
                }
            }
        }
    }

    pub fn band_for_height(self, height: Height) -> Band {
        match (self, height) {
            (GridLayout::ThreeDirection, _) => Band::Middle,
            (GridLayout::SixZone, Height::High) => Band::Top,
            (GridLayout::SixZone, _) => Band::Bottom,
            (GridLayout::NineZone, Height::High) => Band::Top,
            (GridLayout::NineZone, Height::Mid) => Band::Middle,
            (GridLayout::NineZone, Height::Low) => Band::Bottom,
        }
    }

    /// Fold a zone from any layout into this one.
    pub fn normalize(self, zone: Zone) -> Zone {
        let band = match (self, zone.band) {
            (GridLayout::ThreeDirection, _) => Band::Middle,
            (GridLayout::SixZone, Band::Top) => Band::Top,
            (GridLayout::SixZone, _) => Band::Bottom,
            (GridLayout::NineZone, band) => band,
        };
        Zone::new(zone.column, band)
    }

    /// Keypad digit 1..=9 (1 = left-top, 9 = right-bottom) folded into this layout.
    pub fn zone_for_digit(self, digit: u8) -> Option<Zone> {
        if !(1..=9).contains(&digit) {
            return None;
        }
        let idx = (digit - 1) as usize;
        let band = [Band::Top, Band::Middle, Band::Bottom][idx / 3];
        Some(self.normalize(Zone::new(Column::ALL[idx % 3], band)))
    }

    /// Move a zone one band up (`-1`) or down (`+1`) within this layout, saturating.
    pub fn step_band(self, zone: Zone, delta: i32) -> Zone {
        let bands = self.bands();
        let current = bands.iter().position(|b| *b == self.normalize(zone).band).unwrap_or(0);
        let next = (current as i32 + delta).clamp(0, bands.len() as i32 - 1) as usize;
        Zone::new(zone.column, bands[next])
    }
}

// ============================================================================
// Aim selection
// ============================================================================

/// 슈터의 현재 조준
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AimSelection {
    /// Discrete direction plus height.
    Directional { column: Column, height: Height },
    /// Discrete named zone.
    Zone { zone: Zone },
    /// Ratio position; `[0,1] × [0,1]` is on frame.
    Continuous { x: f32, y: f32 },
}

impl Default for AimSelection {
    fn default() -> Self {
        AimSelection::Directional { column: Column::Center, height: Height::Mid }
    }
}

impl AimSelection {
    /// Default aim for a layout's discrete input style.
    pub fn default_for(layout: GridLayout, continuous: bool) -> Self {
        if continuous {
            return AimSelection::Continuous { x: 0.5, y: 0.5 };
        }
        match layout {
            GridLayout::ThreeDirection => AimSelection::default(),
            _ => AimSelection::Zone { zone: layout.default_zone() },
        }
    }

    /// Whether the aim is on frame.
    pub fn in_envelope(&self) -> bool {
        match *self {
            AimSelection::Continuous { x, y } => {
                (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y)
            }
            _ => true,
        }
    }

    /// The zone this aim is compared on, or `None` when a continuous aim is off frame.
    pub fn resolve_zone(&self, layout: GridLayout) -> Option<Zone> {
        match *self {
            AimSelection::Directional { column, height } => {
                Some(Zone::new(column, layout.band_for_height(height)))
            }
            AimSelection::Zone { zone } => Some(layout.normalize(zone)),
            AimSelection::Continuous { x, y } => {
                if !self.in_envelope() {
                    return None;
                }
                Some(Zone::new(Column::from_ratio(x), layout.band_for_ratio(y)))
            }
        }
    }

    /// Ratio position recorded in shot history.
    pub fn position(&self) -> (f32, f32) {
        match *self {
            AimSelection::Directional { column, height } => {
                (column.center_ratio(), height.center_ratio())
            }
            AimSelection::Zone { zone } => zone.center(),
            AimSelection::Continuous { x, y } => (x, y),
        }
    }

    /// Render offset of the ball target (px).
    pub fn target_offset(&self) -> (f32, f32) {
        match *self {
            AimSelection::Directional { column, height } => {
                (column.ball_offset(), height.ball_offset())
            }
            AimSelection::Zone { zone } => (zone.column.ball_offset(), zone.band.ball_offset()),
            AimSelection::Continuous { x, y } => ((x - 0.5) * 390.0, (y - 0.5) * 120.0 - 10.0),
        }
    }

    /// "Center / Mid", "Left / Top", "x 0.42 / y 0.80".
    pub fn label(&self) -> String {
        match *self {
            AimSelection::Directional { column, height } => {
                format!("{} / {}", column.label(), height.label())
            }
            AimSelection::Zone { zone } => {
                format!("{} / {}", zone.column.label(), zone.band.label())
            }
            AimSelection::Continuous { x, y } => format!("x {:.2} / y {:.2}", x, y),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any in-frame continuous aim resolves to a zone of the layout
        #[test]
        fn prop_in_frame_aim_resolves(x in 0.0f32..=1.0f32, y in 0.0f32..=1.0f32) {
            for layout in [GridLayout::ThreeDirection, GridLayout::SixZone, GridLayout::NineZone] {
                let zone = AimSelection::Continuous { x, y }.resolve_zone(layout);
                prop_assert!(zone.is_some());
                prop_assert!(layout.zones().contains(&zone.unwrap()));
            }
        }
    }
}
