use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

pub const TODO_ID_LEN: usize = 10;

/// Generate a short, URL-safe random id for a new todo
pub fn generate_todo_id() -> String {
    let mut rng = rand::rng();
    (0..TODO_ID_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
