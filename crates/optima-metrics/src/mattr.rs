//! Moving-average type-token ratio (Covington & McFall, 2010).

use std::collections::HashMap;

/// MATTR over `tokens` with window length `window`.
///
/// Only alphabetic tokens are considered (lower-cased); when there are none,
/// every non-blank token is used instead. With `n <= window` the result is
/// the plain type-token ratio `distinct / n`.
pub fn mattr(tokens: &[&str], window: usize) -> f64 {
    let mut base: Vec<String> = tokens
        .iter()
        .filter(|t| !t.is_empty() && t.chars().all(char::is_alphabetic))
        .map(|t| t.to_lowercase())
        .collect();
    if base.is_empty() {
        base = tokens
            .iter()
            .filter(|t| !t.trim().is_empty())
            .map(|t| t.to_lowercase())
            .collect();
    }

    let n = base.len();
    if n == 0 {
        return 0.0;
    }
    let window = window.max(1);
    if n <= window {
        return distinct(&base) as f64 / n as f64;
    }

    // Slide once, keeping per-type counts for the current window.
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for t in &base[..window] {
        *counts.entry(t.as_str()).or_insert(0) += 1;
    }
    let mut ratio_sum = counts.len() as f64 / window as f64;

    for i in window..n {
        let leaving = base[i - window].as_str();
        if let Some(c) = counts.get_mut(leaving) {
            *c -= 1;
            if *c == 0 {
                counts.remove(leaving);
            }
        }
        *counts.entry(base[i].as_str()).or_insert(0) += 1;
        ratio_sum += counts.len() as f64 / window as f64;
    }

    ratio_sum / (n - window + 1) as f64
}

fn distinct(items: &[String]) -> usize {
    let mut seen: Vec<&str> = items.iter().map(String::as_str).collect();
    seen.sort_unstable();
    seen.dedup();
    seen.len()
}
