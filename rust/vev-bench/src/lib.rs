//! vev-bench: benchmark-only crate. See `benches/`.

/// Deterministic xorshift64 stream so benches need no rand dependency.
pub fn xorshift_scores(n: usize, seed: u64) -> Vec<i64> {
    let mut x = seed | 1;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        out.push((x % 10_000) as i64);
    }
    out
}

/// Seat codes cycling over every well-formed code, in or out of bounds.
pub fn seat_codes(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let row = (i / 9 % 9) * 10 + i % 9;
            let seat = (i / 81 % 9) * 10 + (i / 7) % 9;
            format!("F{row:02}A{seat:02}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_are_deterministic() {
        assert_eq!(xorshift_scores(8, 3), xorshift_scores(8, 3));
        let codes = seat_codes(100);
        assert_eq!(codes.len(), 100);
        assert!(codes.iter().all(|c| c.len() == 6 && !c.contains('9')));
    }
}
