use crate::geometry::TOTAL_RINGS;
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter};

pub const MAX_IMPACT: u8 = TOTAL_RINGS as u8;

/// Typical and stressed impact recorded for one category. `0` means unset.
///
/// Invariant: `stressed_impact == 0 || stressed_impact > typical_impact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub typical_impact: u8,
    pub stressed_impact: u8,
}

impl Selection {
    pub const UNSET: Self = Self {
        typical_impact: 0,
        stressed_impact: 0,
    };

    pub fn new(typical_impact: u8, stressed_impact: u8) -> Self {
        Self {
            typical_impact,
            stressed_impact,
        }
        .normalized()
    }

    pub fn is_unset(&self) -> bool {
        self.typical_impact == 0 && self.stressed_impact == 0
    }

    /// Applies a click on segment `segment` (1-based) of this category.
    ///
    /// 1. nothing set: the click sets typical
    /// 2. at or inside typical: clears both
    /// 3. stressed unset: the click sets stressed
    /// 4. at or inside stressed: clears stressed
    /// 5. beyond stressed: moves stressed out to the click
    ///
    /// There is no single click that shrinks the stressed range to an intermediate value.
    pub fn transition(self, segment: u8) -> Self {
        assert!(
            (1..=MAX_IMPACT).contains(&segment),
            "segment number {segment} outside 1..={MAX_IMPACT}"
        );

        let Self {
            typical_impact: t,
            stressed_impact: s,
        } = self;

        let next = if t == 0 {
            Self {
                typical_impact: segment,
                stressed_impact: 0,
            }
        } else if segment <= t {
            Self::UNSET
        } else if s == 0 || segment > s {
            Self {
                typical_impact: t,
                stressed_impact: segment,
            }
        } else {
            Self {
                typical_impact: t,
                stressed_impact: 0,
            }
        };

        next.normalized()
    }

    /// Drops a stressed value that does not lie strictly beyond typical.
    pub fn normalized(self) -> Self {
        if self.stressed_impact > 0 && self.stressed_impact <= self.typical_impact {
            Self {
                stressed_impact: 0,
                ..self
            }
        } else {
            self
        }
    }

    pub fn is_valid(&self) -> bool {
        self.typical_impact <= MAX_IMPACT
            && self.stressed_impact <= MAX_IMPACT
            && (self.stressed_impact == 0 || self.stressed_impact > self.typical_impact)
    }

    pub fn fill_for_ring(&self, ring: usize) -> Fill {
        let segment = ring + 1;
        if segment <= self.typical_impact as usize {
            Fill::Typical
        } else if segment <= self.stressed_impact as usize {
            Fill::Stressed
        } else {
            Fill::Empty
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Fill {
    Typical,
    Stressed,
    Empty,
}
