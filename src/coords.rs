/// Normalized coordinates are quantized to thousandths of a plot unit.
const QUANTUM: f64 = 1000.0;

/// Quantize a base-pair position to integer thousandths of a plot unit.
///
/// Two positions with the same key are indistinguishable downstream, which
/// is what makes the key usable for set-based deduplication.
pub fn position_key(bp: u64, scale_factor: f64) -> i64 {
    (bp as f64 / scale_factor * QUANTUM).round() as i64
}

pub fn key_to_norm(key: i64) -> f64 {
    key as f64 / QUANTUM
}

/// Map a base-pair position to plot space: `round(bp / scale, 3)`.
pub fn normalize(bp: u64, scale_factor: f64) -> f64 {
    key_to_norm(position_key(bp, scale_factor))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALE: f64 = 10_000_000.0;

    #[test]
    fn test_normalize_rounds_to_three_decimals() {
        assert_eq!(normalize(0, SCALE), 0.0);
        assert_eq!(normalize(1, SCALE), 0.0);
        assert_eq!(normalize(20_000_000, SCALE), 2.0);
        assert_eq!(normalize(248_956_422, SCALE), 24.896);
        assert_eq!(normalize(123_456_789, SCALE), 12.346);
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let a = normalize(46_709_983, SCALE);
        let b = normalize(46_709_983, SCALE);
        assert_eq!(a.to_bits(), b.to_bits());
        assert_eq!(a, 4.671);
    }

    #[test]
    fn test_nearby_positions_share_a_key() {
        assert_eq!(position_key(20_000_001, SCALE), position_key(20_000_499, SCALE));
        assert_ne!(position_key(20_000_000, SCALE), position_key(20_010_000, SCALE));
    }
}
