/// Curated interests used to seed and refill the suggestion pool, in the
/// order they are offered.
pub const CURATED_INTERESTS: &[&str] = &[
    "music",
    "movies",
    "travel",
    "cooking",
    "football",
    "photography",
    "hiking",
    "reading",
    "gaming",
    "fitness",
    "basketball",
    "yoga",
    "running",
    "cycling",
    "painting",
    "gardening",
    "chess",
    "guitar",
    "dancing",
    "swimming",
    "camping",
    "baking",
    "podcasts",
    "anime",
    "board games",
    "fishing",
    "writing",
    "skiing",
    "tennis",
    "coffee",
];

/// The curated catalog as owned strings.
pub fn default_catalog() -> Vec<String> {
    CURATED_INTERESTS.iter().map(|s| s.to_string()).collect()
}
