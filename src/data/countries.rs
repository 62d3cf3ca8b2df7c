//! ISO 3166 country records with their IANA country-code TLDs.
//!
//! Read-only lookup data; the ccTLD column drives the
//! country-code-terminated domain builder and its validator.

use rand::Rng;

/// One ISO 3166 record plus the delegated ccTLD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub cctld: &'static str,
}

const fn c(
    name: &'static str,
    alpha2: &'static str,
    alpha3: &'static str,
    cctld: &'static str,
) -> Country {
    Country {
        name,
        alpha2,
        alpha3,
        cctld,
    }
}

pub const COUNTRIES: &[Country] = &[
    c("Argentina", "AR", "ARG", "ar"),
    c("Australia", "AU", "AUS", "au"),
    c("Austria", "AT", "AUT", "at"),
    c("Bangladesh", "BD", "BGD", "bd"),
    c("Belgium", "BE", "BEL", "be"),
    c("Brazil", "BR", "BRA", "br"),
    c("Bulgaria", "BG", "BGR", "bg"),
    c("Canada", "CA", "CAN", "ca"),
    c("Chile", "CL", "CHL", "cl"),
    c("China", "CN", "CHN", "cn"),
    c("Colombia", "CO", "COL", "co"),
    c("Costa Rica", "CR", "CRI", "cr"),
    c("Croatia", "HR", "HRV", "hr"),
    c("Cyprus", "CY", "CYP", "cy"),
    c("Czechia", "CZ", "CZE", "cz"),
    c("Denmark", "DK", "DNK", "dk"),
    c("Ecuador", "EC", "ECU", "ec"),
    c("Egypt", "EG", "EGY", "eg"),
    c("Estonia", "EE", "EST", "ee"),
    c("Ethiopia", "ET", "ETH", "et"),
    c("Finland", "FI", "FIN", "fi"),
    c("France", "FR", "FRA", "fr"),
    c("Germany", "DE", "DEU", "de"),
    c("Ghana", "GH", "GHA", "gh"),
    c("Greece", "GR", "GRC", "gr"),
    c("Hong Kong", "HK", "HKG", "hk"),
    c("Hungary", "HU", "HUN", "hu"),
    c("Iceland", "IS", "ISL", "is"),
    c("India", "IN", "IND", "in"),
    c("Indonesia", "ID", "IDN", "id"),
    c("Iran", "IR", "IRN", "ir"),
    c("Iraq", "IQ", "IRQ", "iq"),
    c("Ireland", "IE", "IRL", "ie"),
    c("Israel", "IL", "ISR", "il"),
    c("Italy", "IT", "ITA", "it"),
    c("Jamaica", "JM", "JAM", "jm"),
    c("Japan", "JP", "JPN", "jp"),
    c("Jordan", "JO", "JOR", "jo"),
    c("Kazakhstan", "KZ", "KAZ", "kz"),
    c("Kenya", "KE", "KEN", "ke"),
    c("Kuwait", "KW", "KWT", "kw"),
    c("Latvia", "LV", "LVA", "lv"),
    c("Lebanon", "LB", "LBN", "lb"),
    c("Lithuania", "LT", "LTU", "lt"),
    c("Luxembourg", "LU", "LUX", "lu"),
    c("Malaysia", "MY", "MYS", "my"),
    c("Malta", "MT", "MLT", "mt"),
    c("Mexico", "MX", "MEX", "mx"),
    c("Monaco", "MC", "MCO", "mc"),
    c("Mongolia", "MN", "MNG", "mn"),
    c("Morocco", "MA", "MAR", "ma"),
    c("Nepal", "NP", "NPL", "np"),
    c("Netherlands", "NL", "NLD", "nl"),
    c("New Zealand", "NZ", "NZL", "nz"),
    c("Nigeria", "NG", "NGA", "ng"),
    c("North Macedonia", "MK", "MKD", "mk"),
    c("Norway", "NO", "NOR", "no"),
    c("Oman", "OM", "OMN", "om"),
    c("Pakistan", "PK", "PAK", "pk"),
    c("Panama", "PA", "PAN", "pa"),
    c("Paraguay", "PY", "PRY", "py"),
    c("Peru", "PE", "PER", "pe"),
    c("Philippines", "PH", "PHL", "ph"),
    c("Poland", "PL", "POL", "pl"),
    c("Portugal", "PT", "PRT", "pt"),
    c("Qatar", "QA", "QAT", "qa"),
    c("Romania", "RO", "ROU", "ro"),
    c("Russia", "RU", "RUS", "ru"),
    c("Saudi Arabia", "SA", "SAU", "sa"),
    c("Senegal", "SN", "SEN", "sn"),
    c("Serbia", "RS", "SRB", "rs"),
    c("Singapore", "SG", "SGP", "sg"),
    c("Slovakia", "SK", "SVK", "sk"),
    c("Slovenia", "SI", "SVN", "si"),
    c("South Africa", "ZA", "ZAF", "za"),
    c("South Korea", "KR", "KOR", "kr"),
    c("Spain", "ES", "ESP", "es"),
    c("Sri Lanka", "LK", "LKA", "lk"),
    c("Sweden", "SE", "SWE", "se"),
    c("Switzerland", "CH", "CHE", "ch"),
    c("Taiwan", "TW", "TWN", "tw"),
    c("Tanzania", "TZ", "TZA", "tz"),
    c("Thailand", "TH", "THA", "th"),
    c("Tunisia", "TN", "TUN", "tn"),
    c("Turkey", "TR", "TUR", "tr"),
    c("Uganda", "UG", "UGA", "ug"),
    c("Ukraine", "UA", "UKR", "ua"),
    c("United Arab Emirates", "AE", "ARE", "ae"),
    c("United Kingdom", "GB", "GBR", "uk"),
    c("United States", "US", "USA", "us"),
    c("Uruguay", "UY", "URY", "uy"),
    c("Uzbekistan", "UZ", "UZB", "uz"),
    c("Venezuela", "VE", "VEN", "ve"),
    c("Vietnam", "VN", "VNM", "vn"),
    c("Zambia", "ZM", "ZMB", "zm"),
    c("Zimbabwe", "ZW", "ZWE", "zw"),
];

/// Every ccTLD is exactly two characters.
pub const CCTLD_LEN: usize = 2;

/// Check a label against the ccTLD column.
pub fn is_cctld(label: &str) -> bool {
    COUNTRIES.iter().any(|country| country.cctld == label)
}

/// Draw one country uniformly.
pub fn random_country<R: Rng + ?Sized>(rng: &mut R) -> &'static Country {
    &COUNTRIES[rng.gen_range(0..COUNTRIES.len())]
}

/// Draw one ccTLD uniformly.
pub fn random_cctld<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    random_country(rng).cctld
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng;

    #[test]
    fn test_record_shape() {
        for country in COUNTRIES {
            assert_eq!(country.alpha2.len(), 2, "{}", country.name);
            assert_eq!(country.alpha3.len(), 3, "{}", country.name);
            assert_eq!(country.cctld.len(), CCTLD_LEN, "{}", country.name);
            assert!(country.cctld.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_cctld_lookup() {
        assert!(is_cctld("de"));
        assert!(is_cctld("uk"));
        assert!(!is_cctld("com"));
        assert!(!is_cctld("zz"));
    }

    #[test]
    fn test_random_cctld_is_valid() {
        let mut r = rng::seeded(5);
        for _ in 0..200 {
            assert!(is_cctld(random_cctld(&mut r)));
        }
    }
}
