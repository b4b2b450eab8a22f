//! Loss of Lock Indication (LLI) for phase tracking
use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct LliFlags: u8 {
        /// Lock lost between previous and current observation,
        /// cycle slip is possible
        const LOCK_LOSS = 0x01;
        /// Half cycle slip marker
        const HALF_CYCLE_SLIP = 0x02;
        /// Observing under anti spoofing (GPS),
        /// or BOC tracking of an MBOC signal (Galileo)
        const UNDER_ANTI_SPOOFING = 0x04;
    }
}

impl LliFlags {
    /// Returns true if lock was lost on this signal
    pub fn lock_lost(&self) -> bool {
        self.contains(Self::LOCK_LOSS)
    }
}

#[cfg(test)]
mod test {
    use super::LliFlags;
    #[test]
    fn lli_digits() {
        let lli = LliFlags::from_bits_truncate(1);
        assert!(lli.lock_lost());
        assert!(!lli.contains(LliFlags::HALF_CYCLE_SLIP));

        let lli = LliFlags::from_bits_truncate(6);
        assert!(!lli.lock_lost());
        assert!(lli.contains(LliFlags::HALF_CYCLE_SLIP | LliFlags::UNDER_ANTI_SPOOFING));

        assert!(LliFlags::from_bits(9).is_none());
        assert!(LliFlags::from_bits_truncate(0).is_empty());
    }
}
