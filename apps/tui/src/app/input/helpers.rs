/// Previous position in a cyclic list of `len` entries.
pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    match len {
        0 => 0,
        _ if index == 0 || index >= len => len - 1,
        _ => index - 1,
    }
}

/// Next position in a cyclic list of `len` entries.
pub const fn wrap_increment(index: usize, len: usize) -> usize {
    match len {
        0 => 0,
        _ => (index + 1) % len,
    }
}
