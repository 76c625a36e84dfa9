use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::models::blocked_date::BlockedDate;
use crate::domain::models::slot::{BookingType, Slot};

/// Why a slot cannot be booked on a given date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unavailability {
    DayNotOffered,
    WholeDayBlocked,
    SlotBlocked,
    ConflictingSlotBlocked { slot_name: String },
}

impl Unavailability {
    pub fn describe(&self) -> String {
        match self {
            Unavailability::DayNotOffered => "Slot is not offered on this weekday".to_string(),
            Unavailability::WholeDayBlocked => "The whole day is blocked".to_string(),
            Unavailability::SlotBlocked => "The slot is blocked on this date".to_string(),
            Unavailability::ConflictingSlotBlocked { slot_name } => {
                format!("Overlapping slot '{}' is blocked on this date", slot_name)
            }
        }
    }
}

/// Decides availability of one slot on one date. A blocked slot also
/// makes every slot whose interval intersects it unavailable; slots
/// disjoint from all blocks are unaffected. Propagation is one hop
/// from explicitly blocked slots only.
pub fn evaluate_slot(
    slot: &Slot,
    all_slots: &[Slot],
    blocked: &[BlockedDate],
    date: NaiveDate,
) -> Option<Unavailability> {
    if !slot.is_bookable_on(date.weekday()) {
        return Some(Unavailability::DayNotOffered);
    }

    let day_blocks: Vec<&BlockedDate> = blocked.iter().filter(|b| b.date == date).collect();

    if day_blocks.iter().any(|b| b.blocks_whole_day()) {
        return Some(Unavailability::WholeDayBlocked);
    }
    if day_blocks.iter().any(|b| b.blocks_slot(&slot.id)) {
        return Some(Unavailability::SlotBlocked);
    }

    let interval = slot.interval();
    for other in all_slots {
        if other.id == slot.id || !other.is_active {
            continue;
        }
        if !interval.overlaps(&other.interval()) {
            continue;
        }
        if day_blocks.iter().any(|b| b.blocks_slot(&other.id)) {
            return Some(Unavailability::ConflictingSlotBlocked { slot_name: other.name.clone() });
        }
    }

    None
}

/// Bulk variant backing the cached date-range view: a date is
/// unavailable for a booking type when no active slot of that type can
/// be booked on it.
pub fn unavailable_dates_in_range(
    booking_type: BookingType,
    slots: &[Slot],
    blocked: &[BlockedDate],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<NaiveDate> {
    let typed: Vec<&Slot> = slots
        .iter()
        .filter(|s| s.is_active && s.booking_type() == booking_type)
        .collect();

    let mut unavailable = Vec::new();
    let mut current = start;
    while current <= end {
        let open = typed.iter().any(|s| evaluate_slot(s, slots, blocked, current).is_none());
        if !open {
            unavailable.push(current);
        }
        current += Duration::days(1);
    }
    unavailable
}
