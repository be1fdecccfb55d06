use rand::seq::SliceRandom;
use rand::Rng;

use super::types::BattleState;

/// Draw up to `count` cards from the draw pile into the hand.
///
/// When the draw pile runs dry the discard pile is shuffled into a new draw
/// pile. Stops early once both piles are empty. Returns the number of cards drawn.
pub fn draw<R: Rng + ?Sized>(state: &mut BattleState, count: usize, rng: &mut R) -> usize {
    let mut drawn = 0;
    for _ in 0..count {
        if state.deck.is_empty() {
            if state.discard.is_empty() {
                break;
            }
            state.deck.append(&mut state.discard);
            state.deck.shuffle(rng);
        }
        match state.deck.pop() {
            Some(card) => {
                state.hand.push(card);
                drawn += 1;
            }
            None => break,
        }
    }
    drawn
}
