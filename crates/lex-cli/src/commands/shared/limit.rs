/// Compute effective limit with precedence: global flag -> configured fallback.
#[must_use]
pub fn effective_limit(global: Option<u32>, fallback: usize) -> usize {
    global.map_or(fallback, |limit| usize::try_from(limit).unwrap_or(usize::MAX))
}
