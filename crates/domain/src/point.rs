//! Point balance and accumulation amounts.

use memberpoint_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Non-negative point balance attached to a membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Point(i64);

impl Point {
    /// Creates a validated point balance.
    pub fn new(value: i64) -> AppResult<Self> {
        if value < 0 {
            return Err(AppError::Validation(format!(
                "point must be zero or greater, got {value}"
            )));
        }

        Ok(Self(value))
    }

    /// Returns an empty balance.
    #[must_use]
    pub fn zero() -> Self {
        Self(0)
    }

    /// Returns the raw balance.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Returns the balance increased by `amount`.
    ///
    /// Fails without modifying anything when the sum overflows.
    pub fn accumulate(self, amount: AccumulationAmount) -> AppResult<Self> {
        self.0
            .checked_add(amount.value())
            .map(Self)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "accumulating {} points would overflow balance {}",
                    amount.value(),
                    self.0
                ))
            })
    }
}

impl TryFrom<i64> for Point {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Point> for i64 {
    fn from(value: Point) -> Self {
        value.0
    }
}

/// Strictly positive number of points to add to a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccumulationAmount(i64);

impl AccumulationAmount {
    /// Creates a validated accumulation amount.
    pub fn new(value: i64) -> AppResult<Self> {
        if value <= 0 {
            return Err(AppError::Validation(format!(
                "accumulation amount must be greater than zero, got {value}"
            )));
        }

        Ok(Self(value))
    }

    /// Returns the raw amount.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{AccumulationAmount, Point};

    #[test]
    fn negative_point_is_rejected() {
        assert!(Point::new(-10000).is_err());
    }

    #[test]
    fn zero_point_is_accepted() {
        assert_eq!(Point::new(0).ok(), Some(Point::zero()));
    }

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        assert!(AccumulationAmount::new(0).is_err());
        assert!(AccumulationAmount::new(-1).is_err());
    }

    #[test]
    fn accumulate_adds_amount_to_empty_balance() {
        let amount = AccumulationAmount::new(10000).unwrap_or_else(|_| unreachable!());
        let point = Point::zero().accumulate(amount);
        assert_eq!(point.ok().map(|point| point.value()), Some(10000));
    }

    #[test]
    fn accumulate_rejects_overflow() {
        let balance = Point::new(i64::MAX).unwrap_or_else(|_| unreachable!());
        let amount = AccumulationAmount::new(1).unwrap_or_else(|_| unreachable!());
        assert!(balance.accumulate(amount).is_err());
    }

    #[test]
    fn deserializing_negative_point_fails() {
        assert!(serde_json::from_str::<Point>("-1").is_err());
        assert!(matches!(
            serde_json::from_str::<Point>("25"),
            Ok(point) if point.value() == 25
        ));
    }

    proptest! {
        #[test]
        fn accumulated_balance_never_decreases(
            start in 0i64..1_000_000_000,
            amount in 1i64..1_000_000_000,
        ) {
            let balance = Point::new(start).unwrap_or_else(|_| unreachable!());
            let amount = AccumulationAmount::new(amount).unwrap_or_else(|_| unreachable!());
            let next = balance.accumulate(amount).unwrap_or_else(|_| unreachable!());

            prop_assert!(next > balance);
            prop_assert_eq!(next.value() - balance.value(), amount.value());
        }

        #[test]
        fn point_construction_matches_sign(value in any::<i64>()) {
            prop_assert_eq!(Point::new(value).is_ok(), value >= 0);
            prop_assert_eq!(AccumulationAmount::new(value).is_ok(), value > 0);
        }
    }
}
