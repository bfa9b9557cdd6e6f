use super::{C_ROUNDS, D_ROUNDS, SIP_INIT};

/// The four-word SipHash state.
///
/// A fresh state is built for every tag computation and discarded when
/// the tag is produced. All arithmetic wraps modulo 2^64.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State {
    pub v0: u64,
    pub v1: u64,
    pub v2: u64,
    pub v3: u64,
}

impl State {
    /// Key schedule: XORs the key words into the initialization constants.
    #[inline(always)]
    pub fn new(k0: u64, k1: u64) -> Self {
        State {
            v0: k0 ^ SIP_INIT[0],
            v1: k1 ^ SIP_INIT[1],
            v2: k0 ^ SIP_INIT[2],
            v3: k1 ^ SIP_INIT[3],
        }
    }

    /// One SipRound.
    #[cfg(not(feature = "speed"))]
    #[inline(always)]
    pub fn sip_round(&mut self) {
        self.v0 = self.v0.wrapping_add(self.v1);
        self.v2 = self.v2.wrapping_add(self.v3);

        self.v1 = self.v1.rotate_left(13);
        self.v3 = self.v3.rotate_left(16);

        self.v1 ^= self.v0;
        self.v3 ^= self.v2;

        self.v0 = self.v0.rotate_left(32);

        self.v2 = self.v2.wrapping_add(self.v1);
        self.v0 = self.v0.wrapping_add(self.v3);

        self.v1 = self.v1.rotate_left(17);
        self.v3 = self.v3.rotate_left(21);

        self.v1 ^= self.v2;
        self.v3 ^= self.v0;

        self.v2 = self.v2.rotate_left(32);
    }

    /// One SipRound, written as two half rounds.
    ///
    /// The second half round is the first one with `v0` and `v2` swapped
    /// and different rotation amounts.
    #[cfg(feature = "speed")]
    #[inline(always)]
    pub fn sip_round(&mut self) {
        macro_rules! half_round {
            ($a:expr, $b:expr, $c:expr, $d:expr, $s:literal, $t:literal) => {{
                $a = $a.wrapping_add($b);
                $c = $c.wrapping_add($d);
                $b = $b.rotate_left($s) ^ $a;
                $d = $d.rotate_left($t) ^ $c;
                $a = $a.rotate_left(32);
            }};
        }

        half_round!(self.v0, self.v1, self.v2, self.v3, 13, 16);
        half_round!(self.v2, self.v1, self.v0, self.v3, 17, 21);
    }

    /// Applies the per-word compression rounds.
    #[inline(always)]
    pub fn c_rounds(&mut self) {
        for _ in 0..C_ROUNDS {
            self.sip_round();
        }
    }

    /// Applies the finalization rounds.
    #[inline(always)]
    pub fn d_rounds(&mut self) {
        for _ in 0..D_ROUNDS {
            self.sip_round();
        }
    }

    /// XOR-folds the state into a single word.
    #[inline(always)]
    pub fn fold(&self) -> u64 {
        self.v0 ^ self.v1 ^ self.v2 ^ self.v3
    }
}
