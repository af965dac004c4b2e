use bitflags::bitflags;

bitflags! {
    /// Tracks which fields of a [`Slot`](super::Slot) a patch touches.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SlotFields: u8 {
        const MONSTER     = 1 << 0;
        const PERSONALITY = 1 << 1;
        const LEGACY_TYPE = 1 << 2;
        const MOVE1       = 1 << 3;
        const MOVE2       = 1 << 4;
        const MOVE3       = 1 << 5;
        const MOVE4       = 1 << 6;
        const TALENT      = 1 << 7;

        const MOVES = Self::MOVE1.bits() | Self::MOVE2.bits() | Self::MOVE3.bits() | Self::MOVE4.bits();
    }
}
