use crate::core::utils::errors::GenerationError;

/// Dense degree table indexed by zero-based stub index (`stub id - 1`).
///
/// The table is allocated once for the whole stub graph. Only the first [`DegreeLedger::len`]
/// entries describe existing stubs; the slot right after them receives the degree of the stub
/// created by the current step.
#[derive(Debug, Clone)]
pub struct DegreeLedger {
    degrees: Vec<u64>,
    len: usize,
}

impl DegreeLedger {
    /// Ledger holding only the seed self-loop (`{0: 2}`), with room for `capacity` stubs.
    pub fn seeded(capacity: usize) -> Self {
        let mut degrees = vec![0; capacity.max(1)];
        degrees[0] = 2;
        Self { degrees, len: 1 }
    }

    /// Number of stubs recorded so far
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Degrees of the recorded stubs
    pub fn degrees(&self) -> &[u64] {
        &self.degrees[..self.len]
    }

    /// Fails unless the table has a slot for the stub the next step will create.
    pub fn ensure_room(&self) -> Result<(), GenerationError> {
        if self.len < self.degrees.len() {
            Ok(())
        } else {
            Err(GenerationError::LedgerExhausted {
                len: self.len,
                capacity: self.degrees.len(),
            })
        }
    }

    /// Records one growth step: the drawn endpoint and the newly created stub both gain one
    /// unit of degree. `drawn` may point at the new stub itself.
    ///
    /// Returns the zero-based index of the new stub.
    pub fn grow(&mut self, drawn: usize) -> Result<usize, GenerationError> {
        self.ensure_room()?;
        let new_index = self.len;
        debug_assert!(drawn <= new_index, "drawn index {drawn} beyond new stub {new_index}");
        self.degrees[drawn] += 1;
        self.degrees[new_index] += 1;
        self.len += 1;
        Ok(new_index)
    }
}

#[cfg(test)]
mod ledger_test {
    use super::*;

    #[test]
    fn seed_is_a_self_loop() {
        let ledger = DegreeLedger::seeded(4);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.degrees(), &[2]);
    }

    #[test]
    fn grow_credits_both_endpoints() {
        let mut ledger = DegreeLedger::seeded(4);
        assert_eq!(ledger.grow(0).unwrap(), 1);
        assert_eq!(ledger.degrees(), &[3, 1]);

        // attaching to itself produces a loop on the new stub
        assert_eq!(ledger.grow(2).unwrap(), 2);
        assert_eq!(ledger.degrees(), &[3, 1, 2]);

        let total: u64 = ledger.degrees().iter().sum();
        assert_eq!(total, 2 * ledger.len() as u64);
    }

    #[test]
    fn exhausted_ledger_is_fatal() {
        let mut ledger = DegreeLedger::seeded(2);
        ledger.grow(1).unwrap();
        assert!(matches!(
            ledger.grow(0),
            Err(GenerationError::LedgerExhausted {
                len: 2,
                capacity: 2
            })
        ));
        assert_eq!(ledger.len(), 2);
    }
}
