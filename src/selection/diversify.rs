//! Family-balanced diversification
//!
//! Re-interleaves the top of a score-sorted result across hue families via
//! round-robin so that no single family dominates the head of the list.
//! Only the first `window` entries are reordered; the tail keeps its score
//! order. Family iteration order is fixed to first-encountered-in-score-
//! order, which makes the output deterministic for a given input.
//!
//! Algorithm tag: `algo-family-round-robin`

use std::collections::VecDeque;

use crate::color::HueFamily;
use crate::selection::ranking::RankedColor;

/// Round-robin the first `window` entries across hue families
///
/// Within each family the relative score order is preserved; the multiset
/// of entries in the head is unchanged. With a single family present, or
/// a window of zero, this is a no-op.
pub fn diversify(mut entries: Vec<RankedColor>, window: usize) -> Vec<RankedColor> {
    let head_len = entries.len().min(window);
    if head_len < 2 {
        return entries;
    }
    let tail = entries.split_off(head_len);

    // Partition the head by family, preserving internal order
    let mut buckets: Vec<(HueFamily, VecDeque<RankedColor>)> = Vec::new();
    for entry in entries {
        match buckets.iter_mut().find(|(family, _)| *family == entry.family) {
            Some((_, bucket)) => bucket.push_back(entry),
            None => buckets.push((entry.family, VecDeque::from([entry]))),
        }
    }

    let mut head = Vec::with_capacity(head_len);
    while head.len() < head_len {
        for (_, bucket) in buckets.iter_mut() {
            if let Some(entry) = bucket.pop_front() {
                head.push(entry);
            }
        }
    }

    head.extend(tail);
    head
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ColorRecord;
    use crate::color::conversion::HsvCoords;

    fn entry(ncs: &str, family: HueFamily, global_score: f32) -> RankedColor {
        RankedColor {
            record: ColorRecord {
                ncs_code: ncs.to_string(),
                name: String::new(),
                blackness_pct: 0.0,
                saturation_pct: 0.0,
                hue_code: String::new(),
                temperature: String::new(),
                clarity: String::new(),
                luminosity: String::new(),
                is_neutral: false,
            },
            rgb: [0, 0, 0],
            hex: "#000000".to_string(),
            family,
            hsv: HsvCoords {
                hue_deg: 0.0,
                saturation: 0.0,
                value: 0.0,
            },
            scores: [0.0; 3],
            global_score,
        }
    }

    fn codes(entries: &[RankedColor]) -> Vec<&str> {
        entries.iter().map(|e| e.record.ncs_code.as_str()).collect()
    }

    #[test]
    fn test_round_robin_alternates_families() {
        let input = vec![
            entry("r1", HueFamily::Red, 0.9),
            entry("r2", HueFamily::Red, 0.8),
            entry("b1", HueFamily::Blue, 0.7),
            entry("r3", HueFamily::Red, 0.6),
            entry("b2", HueFamily::Blue, 0.5),
        ];
        let out = diversify(input, 5);
        assert_eq!(codes(&out), vec!["r1", "b1", "r2", "b2", "r3"]);
    }

    #[test]
    fn test_head_multiset_is_preserved() {
        let input = vec![
            entry("a", HueFamily::Red, 0.9),
            entry("b", HueFamily::Green, 0.8),
            entry("c", HueFamily::Blue, 0.7),
            entry("d", HueFamily::Red, 0.6),
            entry("e", HueFamily::Green, 0.5),
        ];
        let window = 3;
        let out = diversify(input.clone(), window);

        let mut expected: Vec<&str> = codes(&input)[..window].to_vec();
        let mut actual: Vec<&str> = codes(&out)[..window].to_vec();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);

        // Tail beyond the window is untouched
        assert_eq!(&codes(&out)[window..], &codes(&input)[window..]);
    }

    #[test]
    fn test_family_internal_order_preserved() {
        let input = vec![
            entry("r1", HueFamily::Red, 0.9),
            entry("b1", HueFamily::Blue, 0.8),
            entry("r2", HueFamily::Red, 0.7),
            entry("b2", HueFamily::Blue, 0.6),
            entry("r3", HueFamily::Red, 0.5),
        ];
        let out = diversify(input, 5);
        let reds: Vec<&str> = out
            .iter()
            .filter(|e| e.family == HueFamily::Red)
            .map(|e| e.record.ncs_code.as_str())
            .collect();
        assert_eq!(reds, vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn test_single_family_is_noop() {
        let input = vec![
            entry("r1", HueFamily::Red, 0.9),
            entry("r2", HueFamily::Red, 0.8),
            entry("r3", HueFamily::Red, 0.7),
        ];
        let out = diversify(input.clone(), 10);
        assert_eq!(codes(&out), codes(&input));
    }

    #[test]
    fn test_window_larger_than_input() {
        let input = vec![
            entry("r1", HueFamily::Red, 0.9),
            entry("b1", HueFamily::Blue, 0.8),
        ];
        let out = diversify(input, 200);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_zero_window_is_noop() {
        let input = vec![
            entry("r1", HueFamily::Red, 0.9),
            entry("b1", HueFamily::Blue, 0.8),
        ];
        let out = diversify(input.clone(), 0);
        assert_eq!(codes(&out), codes(&input));
    }

    #[test]
    fn test_empty_input() {
        assert!(diversify(Vec::new(), 10).is_empty());
    }
}
