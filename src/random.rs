use rand::Rng;

pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const BLOCK_COUNT: usize = 5;
pub const BLOCK_LENGTH: usize = 5;
pub const SEPARATOR: char = '-';
/// Length of a formatted key including separators.
pub const KEY_LENGTH: usize = BLOCK_COUNT * BLOCK_LENGTH + BLOCK_COUNT - 1;

pub fn generate_random_characters<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Generates one product key like `ABCDE-12345-FGHIJ-67890-KLMNO`.
///
/// Every character is drawn independently, so characters may repeat within
/// and across blocks.
pub fn generate_key<R: Rng + ?Sized>(rng: &mut R) -> String {
    let characters = generate_random_characters(rng, BLOCK_COUNT * BLOCK_LENGTH);
    let mut key = String::with_capacity(KEY_LENGTH);
    for (i, c) in characters.chars().enumerate() {
        if i > 0 && i % BLOCK_LENGTH == 0 {
            key.push(SEPARATOR);
        }
        key.push(c);
    }
    key
}

/// Generates `count` keys. Duplicates are not filtered out.
pub fn generate_collection<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count).map(|_| generate_key(rng)).collect()
}
