use crate::core::types::DecisionId;

/// Monotonic decision id source
///
/// Owned by the engine and lent to the layer processors each cycle, so a
/// fresh generator always reproduces the same identities.
#[derive(Debug, Clone, Default)]
pub struct DecisionIdGenerator {
    next: u64,
}

impl DecisionIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from `next`
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    pub fn next_id(&mut self) -> DecisionId {
        let id = DecisionId(self.next);
        self.next += 1;
        id
    }

    /// Id the next call will return
    pub fn peek(&self) -> DecisionId {
        DecisionId(self.next)
    }
}
