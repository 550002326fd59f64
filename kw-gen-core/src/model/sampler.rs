use indexmap::IndexSet;
use log::debug;
use rand::Rng;

/// Shuffles `items` in place (Fisher-Yates).
///
/// For `i` from the last index down to 1, `j` is drawn uniformly in `[0, i]`
/// and the two slots are swapped, so every permutation is equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
	for i in (1..items.len()).rev() {
		let j = rng.random_range(0..=i);
		items.swap(i, j);
	}
}

/// Reduces a candidate set to at most `count` keywords.
///
/// # Behavior
/// - If there are `count` candidates or fewer, all of them are returned in
///   insertion order and `rng` is not used.
/// - Otherwise the candidates are shuffled and the first `count` kept, so
///   each candidate has the same `count / len` chance of being selected.
///
/// `count` is expected to be validated by the caller (see `GenerationRequest`).
pub fn sample_to_count<R: Rng + ?Sized>(candidates: IndexSet<String>, count: usize, rng: &mut R) -> Vec<String> {
	let mut keywords: Vec<String> = candidates.into_iter().collect();
	if keywords.len() <= count {
		return keywords;
	}

	debug!("Sampling {count} keywords out of {}", keywords.len());
	shuffle(&mut keywords, rng);
	keywords.truncate(count);
	keywords
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use std::collections::HashSet;

	fn candidates(n: usize) -> IndexSet<String> {
		(0..n).map(|i| format!("keyword {i}")).collect()
	}

	#[test]
	fn small_set_keeps_insertion_order() {
		let mut rng = StdRng::seed_from_u64(1);
		let set = candidates(5);
		let expected: Vec<String> = set.iter().cloned().collect();
		assert_eq!(sample_to_count(set.clone(), 5, &mut rng), expected);
		assert_eq!(sample_to_count(set, 50, &mut rng), expected);
	}

	#[test]
	fn large_set_is_truncated_without_duplicates() {
		let mut rng = StdRng::seed_from_u64(7);
		let set = candidates(31);
		let sampled = sample_to_count(set.clone(), 5, &mut rng);

		assert_eq!(sampled.len(), 5);
		let unique: HashSet<&String> = sampled.iter().collect();
		assert_eq!(unique.len(), 5);
		assert!(sampled.iter().all(|k| set.contains(k)));
	}

	#[test]
	fn same_seed_same_sample() {
		let a = sample_to_count(candidates(40), 10, &mut StdRng::seed_from_u64(42));
		let b = sample_to_count(candidates(40), 10, &mut StdRng::seed_from_u64(42));
		assert_eq!(a, b);
	}

	#[test]
	fn shuffle_is_a_permutation() {
		let mut rng = StdRng::seed_from_u64(3);
		let mut items: Vec<u32> = (0..100).collect();
		shuffle(&mut items, &mut rng);
		let mut sorted = items.clone();
		sorted.sort_unstable();
		assert_eq!(sorted, (0..100).collect::<Vec<_>>());
	}

	#[test]
	fn shuffle_handles_tiny_slices() {
		let mut rng = StdRng::seed_from_u64(3);
		let mut empty: Vec<u8> = Vec::new();
		shuffle(&mut empty, &mut rng);
		let mut one = vec![9];
		shuffle(&mut one, &mut rng);
		assert_eq!(one, [9]);
	}

	#[test]
	fn every_candidate_is_selected_about_equally() {
		// 4 out of 8 -> each candidate expected in half of the draws
		let mut rng = StdRng::seed_from_u64(2024);
		let mut hits = [0usize; 8];
		let rounds = 8000;
		for _ in 0..rounds {
			for keyword in sample_to_count(candidates(8), 4, &mut rng) {
				let index: usize = keyword["keyword ".len()..].parse().unwrap();
				hits[index] += 1;
			}
		}
		for hit in hits {
			// expected 4000, tolerance well above 5 standard deviations (~45)
			assert!((3700..=4300).contains(&hit), "unbalanced selection: {hits:?}");
		}
	}

	#[test]
	fn every_position_sees_every_item() {
		// 3! = 6 permutations, each expected ~1/6 of the time
		let mut rng = StdRng::seed_from_u64(11);
		let mut seen = std::collections::HashMap::new();
		for _ in 0..6000 {
			let mut items = [0u8, 1, 2];
			shuffle(&mut items, &mut rng);
			*seen.entry(items).or_insert(0usize) += 1;
		}
		assert_eq!(seen.len(), 6);
		for count in seen.values() {
			assert!((800..=1200).contains(count), "biased shuffle: {seen:?}");
		}
	}
}
