use rand::Rng;

const ANONYMOUS_PREFIX: &str = "anon";
const SUFFIX_DIGITS: usize = 5;

/// Default display name for a fresh terminal session, e.g. `anon04211`.
pub fn generate_display_name() -> String {
    generate_display_name_with(&mut rand::rng())
}

pub fn generate_display_name_with<R: Rng>(rng: &mut R) -> String {
    let suffix: String = (0..SUFFIX_DIGITS)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect();
    format!("{}{}", ANONYMOUS_PREFIX, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_display_name_is_anon_with_five_digits() {
        for _ in 0..100 {
            let name = generate_display_name();
            assert_eq!(name.len(), 9);
            assert!(name.starts_with("anon"));
            assert!(name[4..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_display_name_is_reproducible_with_seeded_rng() {
        let first = generate_display_name_with(&mut StdRng::seed_from_u64(7));
        let second = generate_display_name_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }
}
