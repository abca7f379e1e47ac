use solana_program::keccak::hashv;

/// Source of uniformly distributed indices used when drawing ticket numbers.
pub trait RandomSource {
    /// Returns an index uniformly distributed in `0..upper`.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Deterministic generator expanding a 32-byte seed (usually revealed
/// oracle randomness) with keccak in counter mode.
#[derive(Clone, Debug)]
pub struct KeccakRandom {
    seed: [u8; 32],
    counter: u64,
}

impl KeccakRandom {
    pub fn new(seed: [u8; 32]) -> Self {
        Self { seed, counter: 0 }
    }

    /// Seeds the generator with the keccak digest of `parts`.
    pub fn from_parts(parts: &[&[u8]]) -> Self {
        Self::new(hashv(parts).to_bytes())
    }

    fn next_u64(&mut self) -> u64 {
        let digest = hashv(&[&self.seed, &self.counter.to_le_bytes()]).to_bytes();
        self.counter = self.counter.wrapping_add(1);

        let mut word = [0u8; 8];
        word.copy_from_slice(&digest[0..8]);
        u64::from_le_bytes(word)
    }
}

impl RandomSource for KeccakRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        if upper <= 1 {
            return 0;
        }

        // Reject the tail above the largest multiple of `upper` so every
        // index keeps the same weight.
        let upper = upper as u64;
        let zone = u64::MAX - u64::MAX % upper;
        loop {
            let value = self.next_u64();
            if value < zone {
                return (value % upper) as usize;
            }
        }
    }
}

/// Replays a fixed list of indices, cycling when it runs out.
#[cfg(test)]
pub struct ScriptedRandom {
    values: Vec<usize>,
    position: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            position: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value.min(upper.saturating_sub(1))
    }
}
