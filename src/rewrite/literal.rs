/// Replace occurrences of `from` with `to`, left to right and non-overlapping.
///
/// With `limit = Some(k)` only the first `k` occurrences change. Inserted text
/// is not rescanned by this call, but later table entries do see it.
pub fn substitute(text: &str, from: &str, to: &str, limit: Option<usize>) -> String {
    if from.is_empty() {
        return text.to_string();
    }
    match limit {
        Some(count) => text.replacen(from, to, count),
        None => text.replace(from, to),
    }
}
