//! Generic top-level domains, derived from the IANA registry
//! (<https://data.iana.org/TLD/tlds-alpha-by-domain.txt>).
//!
//! The table is curated so that every label length from [`MIN_TLD_LEN`] to
//! [`MAX_TLD_LEN`] has at least one entry; the exact-length domain builder
//! relies on being able to hit any length inside that window.

use rand::Rng;

pub const MIN_TLD_LEN: usize = 2;
pub const MAX_TLD_LEN: usize = 13;

pub const GENERIC_TLDS: &[&str] = &[
    // 2
    "ac", "ad", "ae", "af", "ag", "ai", "am", "at", "au", "be", "ca", "ch",
    "co", "cz", "de", "dk", "es", "eu", "fi", "fr", "gg", "gr", "ie", "il",
    "im", "in", "io", "is", "it", "jp", "kr", "la", "lu", "me", "mx", "nl",
    "no", "nz", "pl", "pt", "ro", "ru", "se", "sg", "sh", "so", "tv", "uk",
    "us", "vc",
    // 3
    "app", "art", "bar", "bet", "bid", "bio", "biz", "bot", "box", "bzh",
    "cab", "cam", "cat", "ceo", "com", "day", "dev", "dog", "eco", "edu",
    "eus", "fan", "fit", "fun", "fyi", "gal", "gay", "gdn", "gov", "icu",
    "ink", "int", "lat", "law", "llc", "lol", "ltd", "men", "mil", "moe",
    "mom", "net", "new", "now", "nyc", "one", "ong", "onl", "ooo", "org",
    "pet", "pro", "pub", "red", "rip", "run", "sbs", "ski", "soy", "tel",
    "top", "uno", "vet", "vip", "win", "wtf", "xyz", "zip",
    // 4
    "aero", "arpa", "asia", "auto", "baby", "band", "bank", "best", "bike",
    "blog", "blue", "buzz", "cafe", "camp", "care", "cars", "casa", "case",
    "cash", "chat", "city", "club", "cool", "coop", "farm", "fish", "fund",
    "game", "gift", "gold", "golf", "guru", "haus", "help", "host", "info",
    "jobs", "kiwi", "land", "life", "limo", "link", "live", "loan", "love",
    "ltda", "menu", "mobi", "moda", "name", "news", "pics", "pink", "play",
    "plus", "rent", "rest", "rich", "rsvp", "sale", "sarl", "shop", "show",
    "site", "surf", "taxi", "team", "tech", "tips", "town", "toys", "vote",
    "wiki", "wine", "work", "yoga", "zone",
    // 5
    "actor", "audio", "bingo", "black", "build", "cards", "cheap", "click",
    "cloud", "coach", "codes", "dance", "deals", "earth", "email", "faith",
    "forum", "funds", "games", "gives", "glass", "group", "guide", "homes",
    "horse", "house", "irish", "legal", "lease", "loans", "lotto", "media",
    "miami", "money", "movie", "ninja", "paris", "parts", "party", "photo",
    "pizza", "place", "poker", "press", "promo", "radio", "rehab", "reise",
    "rocks", "rodeo", "salon", "shoes", "solar", "space", "store", "study",
    "style", "swiss", "tires", "today", "tokyo", "tools", "tours", "trade",
    "vegas", "video", "vodka", "wales", "watch", "works", "world",
    // 6
    "agency", "bayern", "berlin", "camera", "career", "casino", "center",
    "church", "circle", "claims", "clinic", "coffee", "condos", "dating",
    "degree", "dental", "design", "direct", "doctor", "energy", "estate",
    "events", "expert", "family", "futbol", "garden", "global", "gratis",
    "hockey", "hotels", "insure", "joburg", "kaufen", "lawyer", "london",
    "luxury", "madrid", "maison", "market", "monash", "moscow", "museum",
    "nagoya", "online", "photos", "physio", "quebec", "racing", "realty",
    "repair", "report", "review", "school", "schule", "social", "soccer",
    "studio", "supply", "sydney", "taipei", "tattoo", "tennis", "tienda",
    "travel", "viajes", "villas", "vision", "voyage", "webcam",
    // 7
    "academy", "auction", "capital", "college", "cologne", "company",
    "cooking", "country", "coupons", "cricket", "cruises", "dentist",
    "digital", "domains", "exposed", "express", "fashion", "finance",
    "fishing", "fitness", "flights", "florist", "forsale", "gallery",
    "guitars", "hamburg", "holiday", "hosting", "jewelry", "kitchen",
    "limited", "markets", "network", "okinawa", "organic", "realtor",
    "recipes", "rentals", "reviews", "science", "shiksha", "singles",
    "storage", "support", "surgery", "systems", "theater", "tickets",
    "trading", "watches", "website", "wedding", "whoswho", "winners",
    // 8
    "airforce", "attorney", "bargains", "boutique", "brussels", "builders",
    "business", "capetown", "catering", "cleaning", "clothing", "computer",
    "delivery", "democrat", "diamonds", "discount", "download", "engineer",
    "exchange", "feedback", "football", "graphics", "holdings", "istanbul",
    "lighting", "memorial", "mortgage", "partners", "pharmacy", "pictures",
    "plumbing", "property", "saarland", "security", "services", "showtime",
    "software", "supplies", "training", "ventures", "yokohama",
    // 9
    "amsterdam", "analytics", "bloomberg", "christmas", "community",
    "directory", "education", "equipment", "financial", "furniture",
    "homegoods", "institute", "insurance", "marketing", "melbourne",
    "solutions", "vacations",
    // 10
    "accountant", "apartments", "associates", "consulting", "creditcard",
    "foundation", "healthcare", "immobilien", "industries", "management",
    "properties", "republican", "restaurant", "technology", "university",
    // 11
    "accountants", "blackfriday", "contractors", "engineering",
    "enterprises", "investments", "motorcycles", "photography",
    "productions",
    // 12
    "construction", "versicherung",
    // 13
    "international",
];

/// Check a label against the generic-TLD table.
pub fn is_generic_tld(label: &str) -> bool {
    GENERIC_TLDS.contains(&label)
}

/// Draw a generic TLD whose length lies in `[min_len, max_len]`.
///
/// The length is drawn uniformly among the non-empty length buckets inside
/// the window, then a TLD uniformly within the chosen bucket, so a sparse
/// bucket can never make the draw fail.
pub fn random_tld<R: Rng + ?Sized>(
    rng: &mut R,
    min_len: usize,
    max_len: usize,
) -> Option<&'static str> {
    let lengths: Vec<usize> = (min_len..=max_len)
        .filter(|&len| GENERIC_TLDS.iter().any(|t| t.len() == len))
        .collect();
    if lengths.is_empty() {
        return None;
    }

    let target = lengths[rng.gen_range(0..lengths.len())];
    let bucket: Vec<&'static str> = GENERIC_TLDS
        .iter()
        .copied()
        .filter(|t| t.len() == target)
        .collect();
    Some(bucket[rng.gen_range(0..bucket.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng;

    #[test]
    fn test_every_length_bucket_populated() {
        for len in MIN_TLD_LEN..=MAX_TLD_LEN {
            assert!(
                GENERIC_TLDS.iter().any(|t| t.len() == len),
                "no TLD of length {}",
                len
            );
        }
    }

    #[test]
    fn test_table_is_lowercase_and_in_range() {
        for tld in GENERIC_TLDS {
            assert!((MIN_TLD_LEN..=MAX_TLD_LEN).contains(&tld.len()), "{tld}");
            assert!(tld.chars().all(|c| c.is_ascii_lowercase()), "{tld}");
        }
    }

    #[test]
    fn test_random_tld_respects_window() {
        let mut r = rng::seeded(11);
        for _ in 0..500 {
            let tld = random_tld(&mut r, 3, 7).unwrap();
            assert!((3..=7).contains(&tld.len()));
            assert!(is_generic_tld(tld));
        }
    }

    #[test]
    fn test_random_tld_empty_window() {
        let mut r = rng::seeded(11);
        assert!(random_tld(&mut r, 14, 20).is_none());
    }
}
