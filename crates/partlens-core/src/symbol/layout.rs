use serde::{Deserialize, Serialize};

use crate::bundle::{ElectricalRole, PinDescriptor};

/// Vertical distance between adjacent pin slots, px.
pub const SLOT_SPACING: f32 = 35.0;
/// Smallest symbol body height regardless of pin count, px.
pub const MIN_BOX_HEIGHT: f32 = 100.0;
/// Fixed symbol body width, px.
pub const BOX_WIDTH: f32 = 220.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinSide {
    Left,
    Right,
}

/// A pin's assigned position on the symbol body: which side, and which
/// 0-based vertical slot within that side.
#[derive(Debug, Clone)]
pub struct SymbolSlot {
    pub pin: PinDescriptor,
    pub side: PinSide,
    pub slot: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SymbolLayout {
    pub slots: Vec<SymbolSlot>,
    pub left_count: usize,
    pub right_count: usize,
}

/// Layout heuristic only; the side a pin lands on has no electrical meaning.
fn default_side(role: ElectricalRole) -> PinSide {
    match role {
        ElectricalRole::Input
        | ElectricalRole::Bidirectional
        | ElectricalRole::Passive
        | ElectricalRole::PowerIn => PinSide::Left,
        ElectricalRole::Output | ElectricalRole::PowerOut | ElectricalRole::NotConnected => {
            PinSide::Right
        }
    }
}

impl SymbolLayout {
    /// Partition the ordered pin list into left/right columns. If the role
    /// heuristic leaves one side empty while ≥ 2 pins exist, the first
    /// ⌈n/2⌉ pins of the occupied side move to the empty side; relative
    /// order is preserved on both sides.
    pub fn from_pins(pins: &[PinDescriptor]) -> Self {
        let mut left: Vec<PinDescriptor> = Vec::new();
        let mut right: Vec<PinDescriptor> = Vec::new();

        for pin in pins {
            match default_side(pin.electrical_role) {
                PinSide::Left => left.push(pin.clone()),
                PinSide::Right => right.push(pin.clone()),
            }
        }

        if pins.len() >= 2 {
            if left.is_empty() && !right.is_empty() {
                let moved = right.len().div_ceil(2);
                left = right.drain(..moved).collect();
            } else if right.is_empty() && !left.is_empty() {
                let moved = left.len().div_ceil(2);
                right = left.drain(..moved).collect();
            }
        }

        let left_count = left.len();
        let right_count = right.len();
        let mut slots = Vec::with_capacity(pins.len());
        for (slot, pin) in left.into_iter().enumerate() {
            slots.push(SymbolSlot {
                pin,
                side: PinSide::Left,
                slot,
            });
        }
        for (slot, pin) in right.into_iter().enumerate() {
            slots.push(SymbolSlot {
                pin,
                side: PinSide::Right,
                slot,
            });
        }

        Self {
            slots,
            left_count,
            right_count,
        }
    }

    pub fn side_count(&self, side: PinSide) -> usize {
        match side {
            PinSide::Left => self.left_count,
            PinSide::Right => self.right_count,
        }
    }

    pub fn box_height(&self) -> f32 {
        let max_side = self.left_count.max(self.right_count);
        MIN_BOX_HEIGHT.max((max_side + 1) as f32 * SLOT_SPACING)
    }

    pub fn box_width(&self) -> f32 {
        BOX_WIDTH
    }
}

/// Vertical position of slot `slot` in a column of `count` slots, centered
/// around `center_y`.
pub fn slot_y(center_y: f32, slot: usize, count: usize) -> f32 {
    if count == 0 {
        return center_y;
    }
    center_y - (count as f32 - 1.0) * SLOT_SPACING / 2.0 + slot as f32 * SLOT_SPACING
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(number: &str, role: ElectricalRole) -> PinDescriptor {
        PinDescriptor {
            number: number.to_string(),
            name: format!("P{}", number),
            electrical_role: role,
            description: String::new(),
        }
    }

    fn side_numbers(layout: &SymbolLayout, side: PinSide) -> Vec<String> {
        layout
            .slots
            .iter()
            .filter(|s| s.side == side)
            .map(|s| s.pin.number.clone())
            .collect()
    }

    #[test]
    fn test_role_heuristic_partition() {
        let pins = vec![
            pin("1", ElectricalRole::PowerIn),
            pin("2", ElectricalRole::PowerIn),
            pin("3", ElectricalRole::Output),
            pin("4", ElectricalRole::Input),
        ];
        let layout = SymbolLayout::from_pins(&pins);
        assert_eq!(side_numbers(&layout, PinSide::Left), vec!["1", "2", "4"]);
        assert_eq!(side_numbers(&layout, PinSide::Right), vec!["3"]);
    }

    #[test]
    fn test_rebalance_moves_ceiling_half_to_empty_side() {
        let pins = vec![
            pin("1", ElectricalRole::Output),
            pin("2", ElectricalRole::Output),
            pin("3", ElectricalRole::Output),
            pin("4", ElectricalRole::Output),
        ];
        let layout = SymbolLayout::from_pins(&pins);
        assert_eq!(side_numbers(&layout, PinSide::Left), vec!["1", "2"]);
        assert_eq!(side_numbers(&layout, PinSide::Right), vec!["3", "4"]);
    }

    #[test]
    fn test_rebalance_odd_count_ceils_to_empty_side() {
        let pins = vec![
            pin("1", ElectricalRole::Input),
            pin("2", ElectricalRole::Input),
            pin("3", ElectricalRole::Input),
        ];
        let layout = SymbolLayout::from_pins(&pins);
        // All three defaulted left; the first two (ceil of 3/2) move right.
        assert_eq!(side_numbers(&layout, PinSide::Right), vec!["1", "2"]);
        assert_eq!(side_numbers(&layout, PinSide::Left), vec!["3"]);
    }

    #[test]
    fn test_single_pin_stays_put_and_keeps_min_height() {
        let pins = vec![pin("1", ElectricalRole::Output)];
        let layout = SymbolLayout::from_pins(&pins);
        assert_eq!(layout.left_count, 0);
        assert_eq!(layout.right_count, 1);
        assert!(layout.box_height() >= MIN_BOX_HEIGHT);
    }

    #[test]
    fn test_box_height_scales_with_larger_side() {
        let pins: Vec<_> = (1..=8)
            .map(|n| pin(&n.to_string(), ElectricalRole::Input))
            .collect();
        let layout = SymbolLayout::from_pins(&pins);
        assert_eq!(layout.left_count, 4);
        assert_eq!(layout.right_count, 4);
        assert_eq!(layout.box_height(), 5.0 * SLOT_SPACING);
    }

    #[test]
    fn test_slot_y_centers_column() {
        let center = 200.0;
        assert_eq!(slot_y(center, 0, 1), center);
        // Three slots: the middle one sits on the midline.
        assert_eq!(slot_y(center, 1, 3), center);
        assert_eq!(slot_y(center, 0, 3), center - SLOT_SPACING);
        assert_eq!(slot_y(center, 2, 3), center + SLOT_SPACING);
    }

    #[test]
    fn test_empty_pin_list() {
        let layout = SymbolLayout::from_pins(&[]);
        assert!(layout.slots.is_empty());
        assert_eq!(layout.box_height(), MIN_BOX_HEIGHT);
    }
}
