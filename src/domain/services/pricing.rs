use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::models::chalet::Chalet;
use crate::domain::models::slot::Slot;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Money {
    pub amount: i64,
    pub currency: String,
}

/// Base price for one slot on one date. Seasonal adjustments and
/// discounts are layered on top by an external pricing policy.
pub fn quote(slot: &Slot, chalet: &Chalet, date: NaiveDate, extra_hours: i32) -> Result<Money, AppError> {
    if extra_hours < 0 {
        return Err(AppError::Validation("extra_hours must not be negative".into()));
    }

    let base = if chalet.is_weekend(date) { slot.weekend_price } else { slot.weekday_price };

    let surcharge = if extra_hours == 0 {
        0
    } else {
        if !slot.allows_extra_hours {
            return Err(AppError::ExtraHoursExceeded("Slot does not allow extra hours".into()));
        }
        if extra_hours > slot.max_extra_hours {
            return Err(AppError::ExtraHoursExceeded(format!(
                "Requested {} extra hours, slot allows at most {}",
                extra_hours, slot.max_extra_hours
            )));
        }
        extra_hours as i64 * slot.extra_hour_price
    };

    Ok(Money {
        amount: base + surcharge,
        currency: chalet.currency.clone(),
    })
}
