//! Talent boosts and the boosted-stat cap.
//!
//! Each slot carries six stat boosts drawn from [`TeamRules::ALLOWED_BOOSTS`].
//! At most [`TeamRules::MAX_BOOSTED_STATS`] of them may be non-zero. The cap is
//! enforced by rejecting the offending mutation in full, never by correcting
//! the state afterwards.

use strum::IntoEnumIterator;

use crate::config::TeamRules;
use crate::error::{BuilderError, ErrorSeverity};
use crate::slot::Slot;

/// The six boostable stats, named after their wire keys.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKey {
    HpBoost,
    PhyAtkBoost,
    MagAtkBoost,
    PhyDefBoost,
    MagDefBoost,
    SpdBoost,
}

/// A boost value guaranteed to be one of [`TeamRules::ALLOWED_BOOSTS`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct BoostValue(u8);

impl BoostValue {
    pub const NONE: Self = Self(0);

    /// Validates a raw boost value.
    ///
    /// # Errors
    ///
    /// Returns `TalentError::InvalidBoost` for values outside the discrete set.
    pub fn new(value: u8) -> Result<Self, TalentError> {
        if TeamRules::ALLOWED_BOOSTS.contains(&value) {
            Ok(Self(value))
        } else {
            Err(TalentError::InvalidBoost(value))
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns true for any value above zero.
    #[inline]
    pub const fn is_boosted(self) -> bool {
        self.0 > 0
    }
}

impl TryFrom<u8> for BoostValue {
    type Error = TalentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BoostValue> for u8 {
    fn from(value: BoostValue) -> Self {
        value.0
    }
}

/// Per-slot talent allocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Talents {
    pub hp_boost: BoostValue,
    pub phy_atk_boost: BoostValue,
    pub mag_atk_boost: BoostValue,
    pub phy_def_boost: BoostValue,
    pub mag_def_boost: BoostValue,
    pub spd_boost: BoostValue,
}

impl Talents {
    /// All six stats at zero.
    pub const fn empty() -> Self {
        Self {
            hp_boost: BoostValue::NONE,
            phy_atk_boost: BoostValue::NONE,
            mag_atk_boost: BoostValue::NONE,
            phy_def_boost: BoostValue::NONE,
            mag_def_boost: BoostValue::NONE,
            spd_boost: BoostValue::NONE,
        }
    }

    pub fn get(&self, stat: StatKey) -> BoostValue {
        match stat {
            StatKey::HpBoost => self.hp_boost,
            StatKey::PhyAtkBoost => self.phy_atk_boost,
            StatKey::MagAtkBoost => self.mag_atk_boost,
            StatKey::PhyDefBoost => self.phy_def_boost,
            StatKey::MagDefBoost => self.mag_def_boost,
            StatKey::SpdBoost => self.spd_boost,
        }
    }

    fn slot_mut(&mut self, stat: StatKey) -> &mut BoostValue {
        match stat {
            StatKey::HpBoost => &mut self.hp_boost,
            StatKey::PhyAtkBoost => &mut self.phy_atk_boost,
            StatKey::MagAtkBoost => &mut self.mag_atk_boost,
            StatKey::PhyDefBoost => &mut self.phy_def_boost,
            StatKey::MagDefBoost => &mut self.mag_def_boost,
            StatKey::SpdBoost => &mut self.spd_boost,
        }
    }

    /// Iterates `(stat, value)` pairs in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKey, BoostValue)> + '_ {
        StatKey::iter().map(|stat| (stat, self.get(stat)))
    }

    /// Number of stats with a boost greater than zero.
    pub fn boosted_count(&self) -> usize {
        self.iter().filter(|(_, value)| value.is_boosted()).count()
    }

    /// Returns a copy with `stat` set to `value`, or rejects it.
    ///
    /// Lowering a stat never increases the boosted count and is never rejected.
    ///
    /// # Errors
    ///
    /// Returns `TalentError::CapExceeded` if the result would boost more than
    /// [`TeamRules::MAX_BOOSTED_STATS`] stats. `self` is untouched either way.
    pub fn try_with(&self, stat: StatKey, value: BoostValue) -> Result<Self, TalentError> {
        let mut next = *self;
        *next.slot_mut(stat) = value;

        let boosted = next.boosted_count();
        if value.is_boosted() && boosted > TeamRules::MAX_BOOSTED_STATS {
            return Err(TalentError::CapExceeded { stat, boosted });
        }
        Ok(next)
    }
}

/// Sets one talent stat on a slot as an all-or-nothing mutation.
///
/// Returns the updated slot. On rejection the caller's slot is unchanged and
/// the error signals that the cap was hit.
pub fn set_talent(slot: &Slot, stat: StatKey, value: BoostValue) -> Result<Slot, TalentError> {
    let talent = slot.talent.try_with(stat, value)?;
    Ok(Slot {
        talent,
        ..slot.clone()
    })
}

/// Rejected talent mutations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TalentError {
    /// The mutation would boost more stats than allowed.
    #[error("at most {max} stats can be boosted (setting {stat} would make {boosted})", max = TeamRules::MAX_BOOSTED_STATS)]
    CapExceeded { stat: StatKey, boosted: usize },

    /// The value is not one of the discrete boost values.
    #[error("boost value {0} is not one of {allowed:?}", allowed = TeamRules::ALLOWED_BOOSTS)]
    InvalidBoost(u8),
}

impl BuilderError for TalentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TalentError::CapExceeded { .. } => ErrorSeverity::Rejected,
            TalentError::InvalidBoost(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TalentError::CapExceeded { .. } => "TALENT_CAP_EXCEEDED",
            TalentError::InvalidBoost(_) => "TALENT_INVALID_BOOST",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boost(value: u8) -> BoostValue {
        BoostValue::new(value).unwrap()
    }

    #[test]
    fn only_discrete_values_are_accepted() {
        for value in TeamRules::ALLOWED_BOOSTS {
            assert!(BoostValue::new(value).is_ok());
        }
        assert_eq!(BoostValue::new(5), Err(TalentError::InvalidBoost(5)));
        assert_eq!(BoostValue::new(11), Err(TalentError::InvalidBoost(11)));
    }

    #[test]
    fn fourth_boost_is_rejected_and_slot_unchanged() {
        let mut slot = Slot::empty();
        for stat in [StatKey::HpBoost, StatKey::PhyAtkBoost, StatKey::SpdBoost] {
            slot = set_talent(&slot, stat, boost(9)).unwrap();
        }
        let before = slot.clone();

        let err = set_talent(&slot, StatKey::MagDefBoost, boost(7)).unwrap_err();

        assert_eq!(
            err,
            TalentError::CapExceeded {
                stat: StatKey::MagDefBoost,
                boosted: 4
            }
        );
        assert_eq!(slot, before);
        assert_eq!(slot.talent.boosted_count(), 3);
    }

    #[test]
    fn changing_an_already_boosted_stat_at_cap_is_allowed() {
        let mut slot = Slot::empty();
        for stat in [StatKey::HpBoost, StatKey::PhyAtkBoost, StatKey::SpdBoost] {
            slot = set_talent(&slot, stat, boost(7)).unwrap();
        }

        let slot = set_talent(&slot, StatKey::HpBoost, boost(10)).unwrap();

        assert_eq!(slot.talent.hp_boost.get(), 10);
        assert_eq!(slot.talent.boosted_count(), 3);
    }

    #[test]
    fn lowering_is_never_rejected_even_above_cap() {
        // Over-cap state can arrive from a saved team; lowering must still work.
        let mut slot = Slot::empty();
        slot.talent = Talents {
            hp_boost: boost(7),
            phy_atk_boost: boost(7),
            mag_atk_boost: boost(7),
            phy_def_boost: boost(7),
            ..Talents::empty()
        };

        let slot = set_talent(&slot, StatKey::PhyDefBoost, BoostValue::NONE).unwrap();

        assert_eq!(slot.talent.boosted_count(), 3);
    }

    #[test]
    fn boosted_count_never_exceeds_cap_across_sequences() {
        let values = [0u8, 7, 8, 9, 10];
        let mut slot = Slot::empty();
        let stats: Vec<StatKey> = StatKey::iter().collect();

        for step in 0..120usize {
            let stat = stats[(step * 7 + step / 3) % stats.len()];
            let value = boost(values[(step * 3 + 1) % values.len()]);
            if let Ok(next) = set_talent(&slot, stat, value) {
                slot = next;
            }
            assert!(slot.talent.boosted_count() <= TeamRules::MAX_BOOSTED_STATS);
        }
    }

    #[test]
    fn stat_keys_render_as_wire_names() {
        assert_eq!(StatKey::PhyAtkBoost.to_string(), "phy_atk_boost");
        assert_eq!("spd_boost".parse::<StatKey>().unwrap(), StatKey::SpdBoost);
        assert_eq!(StatKey::iter().count(), TeamRules::TALENT_STATS);
    }
}
