use crate::coord::{Positioned, SphericalCoords};

use std::collections::HashMap;

/**
 * Objects within `threshold` radians of `centre`,
 * in input order
 **/
pub fn within<'a, T: Positioned>(
    objects: &'a [T],
    centre: &SphericalCoords,
    threshold: f64,
) -> Vec<&'a T> {
    objects
        .iter()
        .filter(|o| o.coords().is_overlap(centre, threshold))
        .collect()
}

/**
 * Closest object to `centre` and its angular distance.
 * Ties go to the first one.
 **/
pub fn nearest<'a, T: Positioned>(
    objects: &'a [T],
    centre: &SphericalCoords,
) -> Option<(&'a T, f64)> {
    let mut best: Option<(&'a T, f64)> = None;
    for o in objects {
        let sep = o.coords().separation(centre);
        match best {
            Some((_, d)) if d <= sep => {}
            _ => best = Some((o, sep)),
        }
    }
    best
}

/**
 * Positional crossmatch. Maps the position of each element of
 * `left` to the position of its nearest element of `right`,
 * if that one is within `threshold` radians.
 **/
pub fn crossmatch<L: Positioned, R: Positioned>(
    left: &[L],
    right: &[R],
    threshold: f64,
) -> HashMap<usize, usize> {
    let mut map = HashMap::new();
    for (i, l) in left.iter().enumerate() {
        let centre = l.coords();
        let mut best: Option<(usize, f64)> = None;
        for (j, r) in right.iter().enumerate() {
            let sep = r.coords().separation(&centre);
            if sep > threshold {
                continue;
            }
            match best {
                Some((_, d)) if d <= sep => {}
                _ => best = Some((j, sep)),
            }
        }
        if let Some((j, _)) = best {
            map.insert(i, j);
        }
    }
    log::debug!(
        "{} of {} positions matched within {} rad",
        map.len(),
        left.len(),
        threshold
    );
    map
}
