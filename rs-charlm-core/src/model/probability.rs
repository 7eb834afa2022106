use super::frequency_list::FrequencyList;

/// Computes the probability and cumulative probability of every entry.
///
/// - First pass: sums all counts.
/// - Second pass, in insertion order: `p = count / total` and
///   `cp = previous cp + p`, starting from 0.
///
/// Only counts are read, so normalizing twice without an intervening
/// `bump` yields the same values. An empty list is left untouched.
///
/// # Notes
/// - Floating-point accumulation means the final `cp` may land slightly
///   off 1.0; sampling treats that case explicitly.
pub fn normalize(list: &mut FrequencyList) {
	let total = list.total_count();
	if total == 0 {
		return;
	}

	let total = total as f64;
	let mut previous_cp = 0.0;
	for stat in list.iter_mut() {
		let p = stat.count() as f64 / total;
		let cp = previous_cp + p;
		stat.set_probabilities(p, cp);
		previous_cp = cp;
	}
}
