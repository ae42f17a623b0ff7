//! Builtin keyword tables
//!
//! Lowercase substrings checked against a lowercased item. Declaration order
//! is the scan order.

/// Primary wet (biodegradable) keywords
pub const WET_KEYWORDS: &[&str] = &[
    "food",
    "vegetable",
    "fruit",
    "peel",
    "peels",
    "leftover",
    "tea",
    "coffee",
    "egg",
    "eggshell",
    "egg shell",
    "kitchen",
    "garden",
    "grass",
    "leaves",
    "meat",
    "fish",
    "bones",
    "flower",
    "rice",
    "pulp",
    "compost",
    "food waste",
];

/// Primary dry (non-biodegradable) keywords
pub const DRY_KEYWORDS: &[&str] = &[
    "paper",
    "cardboard",
    "plastic",
    "glass",
    "metal",
    "tin",
    "can",
    "cloth",
    "fabric",
    "rubber",
    "styrofoam",
    "packaging",
    "battery",
    "e-waste",
    "electronics",
    "bottle",
    "wrapper",
    "newspaper",
    "magazine",
];

/// Fallback wet hints, tried only when no primary keyword matched
pub const WET_HINTS: &[&str] = &[
    "leaf", "peel", "juice", "meat", "food", "cake", "rice", "pulp", "compost", "skin",
];

/// Fallback dry hints, tried after the wet hints
pub const DRY_HINTS: &[&str] = &[
    "paper", "card", "plastic", "glass", "can", "bottle", "wrapper", "box",
];
