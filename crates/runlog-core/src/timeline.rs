//! Collision-free insertion into instant-keyed maps.
//!
//! Both the System bucket and the chronological export key entries by instant. Two entries
//! may legitimately arrive at the same instant, so insertion probes forward one tick at a time
//! until it finds a free key. Nothing is ever overwritten.
use std::collections::BTreeMap;

use chrono::TimeDelta;

use crate::Instant;

/// The smallest representable step between two instants.
pub fn tick() -> TimeDelta {
    TimeDelta::nanoseconds(1)
}

/// First instant at or after `at` that is not a key of `map`.
///
/// Probing is forward; only if the forward walk runs off the end of the representable range
/// does it walk backward from `at` instead.
///
/// The result is always free. The two walks together cover every representable instant
/// (about 1.6e22 nanoseconds), while a map holds at most `usize::MAX` keys, so one of them
/// must stop on a free key before running out of range.
pub fn free_instant<V>(map: &BTreeMap<Instant, V>, at: Instant) -> Instant {
    let forward = walk(map, at, |t| t.checked_add_signed(tick()));
    forward
        .or_else(|| walk(map, at, |t| t.checked_sub_signed(tick())))
        .unwrap_or(at)
}

/// Step from `at` until a free key turns up; `None` if `step` leaves the representable range.
fn walk<V>(
    map: &BTreeMap<Instant, V>,
    at: Instant,
    step: impl Fn(Instant) -> Option<Instant>,
) -> Option<Instant> {
    let mut candidate = at;
    while map.contains_key(&candidate) {
        candidate = step(candidate)?;
    }
    Some(candidate)
}

/// Insert `value` at the first free instant at or after `at`, returning the key used.
pub fn insert_unique<V>(map: &mut BTreeMap<Instant, V>, at: Instant, value: V) -> Instant {
    let key = free_instant(map, at);
    map.insert(key, value);
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn t0() -> Instant {
        Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn free_instant_is_identity_on_unused_key() {
        let map: BTreeMap<Instant, ()> = BTreeMap::new();
        assert_eq!(free_instant(&map, t0()), t0());
    }

    #[test]
    fn collision_advances_by_one_tick() {
        let mut map = BTreeMap::new();
        let first = insert_unique(&mut map, t0(), "a");
        let second = insert_unique(&mut map, t0(), "b");

        assert_eq!(first, t0());
        assert_eq!(second - first, tick());
        assert_eq!(map.len(), 2);
        assert_eq!(map[&first], "a");
        assert_eq!(map[&second], "b");
    }

    #[test]
    fn probing_skips_over_a_run_of_occupied_keys() {
        let mut map = BTreeMap::new();
        for i in 0..5 {
            map.insert(t0() + tick() * i, i);
        }
        let key = insert_unique(&mut map, t0(), 99);
        assert_eq!(key, t0() + tick() * 5);
        assert_eq!(map.len(), 6);
    }

    #[test]
    fn probing_walks_backward_at_the_end_of_time() {
        let mut map = BTreeMap::new();
        let end = DateTime::<Utc>::MAX_UTC;
        insert_unique(&mut map, end, 1);
        let key = insert_unique(&mut map, end, 2);
        assert_eq!(key, end - tick());
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn backward_walk_skips_occupied_keys_below_the_end_of_time() {
        let end = DateTime::<Utc>::MAX_UTC;
        let mut map = BTreeMap::new();
        for i in 0..4 {
            map.insert(end - tick() * i, i);
        }
        let key = insert_unique(&mut map, end, 99);
        assert_eq!(key, end - tick() * 4);
        assert_eq!(map.len(), 5);
        assert_eq!(map[&end], 0);
    }

    #[test]
    fn walk_reports_running_out_of_range() {
        let mut map = BTreeMap::new();
        let start = DateTime::<Utc>::MIN_UTC;
        map.insert(start, ());
        assert_eq!(walk(&map, start, |t| t.checked_sub_signed(tick())), None);
        assert_eq!(free_instant(&map, start), start + tick());
    }
}
