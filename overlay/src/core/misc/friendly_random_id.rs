// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rand::{Rng, rngs::ThreadRng};

use crate::{InlineString, inline_string};

const UNIT_NAMES: [&str; 12] = [
    "pixel", "inch", "centimeter", "point", "pica", "twip", "mil", "furlong", "cubit",
    "span", "hand", "league",
];

const TOOL_NAMES: [&str; 12] = [
    "ruler", "caliper", "protractor", "square", "gauge", "level", "compass", "divider",
    "scale", "tape", "loupe", "plumb",
];

/// Returns a readable id such as `inch-caliper-042`. Used to name scratch folders for
/// tests, so collisions only need to be unlikely, not impossible.
#[must_use]
pub fn generate_friendly_random_id() -> InlineString {
    let mut rng: ThreadRng = rand::rng();

    let unit = UNIT_NAMES[rng.random_range(0..UNIT_NAMES.len())];
    let tool = TOOL_NAMES[rng.random_range(0..TOOL_NAMES.len())];
    let number: u32 = rng.random_range(0..100_000);

    inline_string!("{unit}-{tool}-{number:05}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_of_id() {
        let id = generate_friendly_random_id();
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert!(UNIT_NAMES.contains(&parts[0]));
        assert!(TOOL_NAMES.contains(&parts[1]));
        assert_eq!(parts[2].len(), 5);
    }
}
