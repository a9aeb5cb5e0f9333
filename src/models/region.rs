/// Display data for a cloud region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionDisplay {
    /// Region prefix of a zone name, e.g. `us-central1`.
    pub code: &'static str,
    pub location: &'static str,
    pub flag_url: &'static str,
}

macro_rules! region {
    ($code:literal, $location:literal, $country:literal) => {
        RegionDisplay {
            code: $code,
            location: $location,
            flag_url: concat!("https://flagcdn.com/w320/", $country, ".png"),
        }
    };
}

pub static REGIONS: &[RegionDisplay] = &[
    region!("africa-south1", "Johannesburg, South Africa", "za"),
    region!("asia-east1", "Changhua County, Taiwan", "tw"),
    region!("asia-east2", "Hong Kong", "hk"),
    region!("asia-northeast1", "Tokyo, Japan", "jp"),
    region!("asia-northeast2", "Osaka, Japan", "jp"),
    region!("asia-northeast3", "Seoul, South Korea", "kr"),
    region!("asia-south1", "Mumbai, India", "in"),
    region!("asia-south2", "Delhi, India", "in"),
    region!("asia-southeast1", "Jurong West, Singapore", "sg"),
    region!("asia-southeast2", "Jakarta, Indonesia", "id"),
    region!("australia-southeast1", "Sydney, Australia", "au"),
    region!("australia-southeast2", "Melbourne, Australia", "au"),
    region!("europe-central2", "Warsaw, Poland", "pl"),
    region!("europe-north1", "Hamina, Finland", "fi"),
    region!("europe-southwest1", "Madrid, Spain", "es"),
    region!("europe-west1", "St. Ghislain, Belgium", "be"),
    region!("europe-west2", "London, United Kingdom", "gb"),
    region!("europe-west3", "Frankfurt, Germany", "de"),
    region!("europe-west4", "Eemshaven, Netherlands", "nl"),
    region!("europe-west6", "Zurich, Switzerland", "ch"),
    region!("europe-west8", "Milan, Italy", "it"),
    region!("europe-west9", "Paris, France", "fr"),
    region!("europe-west10", "Berlin, Germany", "de"),
    region!("europe-west12", "Turin, Italy", "it"),
    region!("me-central1", "Doha, Qatar", "qa"),
    region!("me-central2", "Dammam, Saudi Arabia", "sa"),
    region!("me-west1", "Tel Aviv, Israel", "il"),
    region!("northamerica-northeast1", "Montréal, Canada", "ca"),
    region!("northamerica-northeast2", "Toronto, Canada", "ca"),
    region!("southamerica-east1", "Osasco (São Paulo), Brazil", "br"),
    region!("southamerica-west1", "Santiago, Chile", "cl"),
    region!("us-central1", "Council Bluffs, Iowa, USA", "us"),
    region!("us-east1", "Moncks Corner, South Carolina, USA", "us"),
    region!("us-east4", "Ashburn, Virginia, USA", "us"),
    region!("us-east5", "Columbus, Ohio, USA", "us"),
    region!("us-south1", "Dallas, Texas, USA", "us"),
    region!("us-west1", "The Dalles, Oregon, USA", "us"),
    region!("us-west2", "Los Angeles, California, USA", "us"),
    region!("us-west3", "Salt Lake City, Utah, USA", "us"),
    region!("us-west4", "Las Vegas, Nevada, USA", "us"),
];

/// Looks up display data for a region prefix. Unknown regions yield `None`.
pub fn lookup_region(code: &str) -> Option<&'static RegionDisplay> {
    REGIONS.iter().find(|region| region.code == code)
}

/// Strips the zone suffix (everything from the last `-`), so
/// `us-central1-a` becomes `us-central1`. A zone without any `-` is its
/// own region.
pub fn region_from_zone(zone: &str) -> &str {
    zone.rsplit_once('-').map_or(zone, |(region, _)| region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn region_codes_are_unique() {
        let mut seen = HashSet::new();
        for region in REGIONS {
            assert!(seen.insert(region.code), "duplicate region {}", region.code);
        }
    }

    #[test]
    fn every_known_region_has_location_and_flag() {
        for region in REGIONS {
            let found = lookup_region(region.code).expect("region present");
            assert!(!found.location.is_empty(), "{} has no location", region.code);
            assert!(found.flag_url.starts_with("https://"), "{} has no flag", region.code);
        }
    }

    #[test]
    fn lookup_is_deterministic() {
        let first = lookup_region("europe-west1");
        for _ in 0..10 {
            assert_eq!(lookup_region("europe-west1"), first);
        }
        assert_eq!(first.map(|r| r.location), Some("St. Ghislain, Belgium"));
    }

    #[test]
    fn unknown_region_is_not_found() {
        assert!(lookup_region("mars-north1").is_none());
        assert!(lookup_region("").is_none());
        // zone names are not region codes
        assert!(lookup_region("us-central1-a").is_none());
    }

    #[test]
    fn flag_url_uses_country_code() {
        let region = lookup_region("us-central1").unwrap();
        assert_eq!(region.flag_url, "https://flagcdn.com/w320/us.png");
        assert_eq!(region.location, "Council Bluffs, Iowa, USA");
    }

    #[test]
    fn region_from_zone_strips_last_segment() {
        assert_eq!(region_from_zone("us-central1-a"), "us-central1");
        assert_eq!(region_from_zone("europe-west12-c"), "europe-west12");
        assert_eq!(region_from_zone("northamerica-northeast1-b"), "northamerica-northeast1");
        // Cloud Run reports numeric zone suffixes
        assert_eq!(region_from_zone("asia-east1-1"), "asia-east1");
    }

    #[test]
    fn region_from_zone_without_hyphen_is_whole_string() {
        assert_eq!(region_from_zone("localzone"), "localzone");
        assert_eq!(region_from_zone(""), "");
    }

    #[test]
    fn region_from_zone_with_trailing_hyphen() {
        assert_eq!(region_from_zone("us-central1-"), "us-central1");
    }
}
