/// Competition ("1224") positions for an already sorted slice.
///
/// Items whose keys compare equal share a position; the next distinct key
/// takes its 1-based index, so a two-way tie for first is followed by third.
pub fn competition_positions<T, K, F>(sorted: &[T], key: F) -> Vec<u32>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut positions: Vec<u32> = Vec::with_capacity(sorted.len());

    for (index, item) in sorted.iter().enumerate() {
        let position = match index.checked_sub(1) {
            Some(prev) if key(&sorted[prev]) == key(item) => positions[prev],
            _ => index as u32 + 1,
        };
        positions.push(position);
    }

    positions
}
