use super::cards_types::Card;

/// Centralized helper for parsing hardcoded card tokens in fixtures and tests.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded card tokens into Card instances.
    ///
    /// Only for tokens known to be valid at the call site (e.g. `["AS", "2C", "Q♠"]`).
    /// Anything else is a bug in the fixture and panics.
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        tokens
            .iter()
            .map(|s| {
                #[allow(clippy::expect_used)]
                s.parse::<Card>().expect("hardcoded valid card token")
            })
            .collect()
    }

    /// Single-card variant of [`CardFixtures::parse_hardcoded`].
    pub fn card(token: &str) -> Card {
        #[allow(clippy::expect_used)]
        token.parse::<Card>().expect("hardcoded valid card token")
    }
}
