/// Number of cards in standard deck
pub const CARD_COUNT: u8 = 52;

/// Number of ranks in a sandard deck
/// (2 -> A)
pub const RANK_COUNT: u8 = 13;

/// Number of suits in a standard deck
pub const SUIT_COUNT: u8 = 4;

/// u8 rank to char table, indexed by rank ordinal - 1
pub const RANK_TO_CHAR: &[char; 13] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

/// u8 suit to char table, indexed by suit ordinal - 1
pub static SUIT_TO_CHAR: &[char; 4] = &['c', 'd', 'h', 's'];

/// Cards in a players private hand
pub const HOLE_CARDS: usize = 2;

/// Fewest public cards a hand can be ranked against (flop)
pub const MIN_BOARD_CARDS: usize = 3;

/// Public cards once the river is dealt
pub const BOARD_CARDS: usize = 5;

/// Smallest and largest hands the scorer accepts
pub const MIN_HAND_CARDS: usize = 5;
pub const MAX_HAND_CARDS: usize = 7;

/// Most cards that fit into one key, one byte each
pub const MAX_KEY_CARDS: usize = 8;
