/// Shortest accepted phone number, counted on the trimmed input before
/// leading zeros are removed.
pub const MIN_NUMBER_LENGTH: usize = 10;
/// Longest accepted phone number. Matches the ITU E.164 upper bound.
pub const MAX_NUMBER_LENGTH: usize = 15;

pub const WA_ME_PREFIX: &'static str = "https://wa.me/";

pub const PLUS_SIGN: &'static str = "+";
// Trunk prefix digit dialed in front of national numbers in many regions.
// It has no place in an international link and is stripped, all of it.
pub const NATIONAL_PREFIX_DIGIT: char = '0';

// ASCII only on purpose: full-width and other unicode decimals are rejected.
pub const ASCII_DIGITS: &'static str = "[0-9]";
