// src/flags.rs
use lazy_static::lazy_static;
use std::collections::HashMap;

/// A country as shown next to a server entry (flag + label).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    code: &'static str,
    name: &'static str,
}

impl Country {
    /// Two-letter lowercase code, the key used on the wire.
    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Total lookup: codes are lowercased before the table lookup, and
    /// anything unrecognized (or empty) resolves to [`UNITED_NATIONS`].
    pub fn from_code(code: &str) -> Country {
        let key = code.trim().to_lowercase();
        WORLD_MAP.get(key.as_str()).copied().unwrap_or(UNITED_NATIONS)
    }
}

/// Fallback entry for servers whose country is missing or unrecognized.
pub const UNITED_NATIONS: Country = Country { code: "un", name: "United Nations" };

const COUNTRIES: &[Country] = &[
    Country { code: "ar", name: "Argentina" },
    Country { code: "at", name: "Austria" },
    Country { code: "au", name: "Australia" },
    Country { code: "be", name: "Belgium" },
    Country { code: "br", name: "Brazil" },
    Country { code: "ca", name: "Canada" },
    Country { code: "ch", name: "Switzerland" },
    Country { code: "cl", name: "Chile" },
    Country { code: "cn", name: "China" },
    Country { code: "cz", name: "Czech Republic" },
    Country { code: "de", name: "Germany" },
    Country { code: "dk", name: "Denmark" },
    Country { code: "ee", name: "Estonia" },
    Country { code: "es", name: "Spain" },
    Country { code: "fi", name: "Finland" },
    Country { code: "fr", name: "France" },
    Country { code: "gb", name: "United Kingdom" },
    Country { code: "gr", name: "Greece" },
    Country { code: "hr", name: "Croatia" },
    Country { code: "hu", name: "Hungary" },
    Country { code: "id", name: "Indonesia" },
    Country { code: "ie", name: "Ireland" },
    Country { code: "il", name: "Israel" },
    Country { code: "in", name: "India" },
    Country { code: "it", name: "Italy" },
    Country { code: "jp", name: "Japan" },
    Country { code: "kr", name: "South Korea" },
    Country { code: "lt", name: "Lithuania" },
    Country { code: "lv", name: "Latvia" },
    Country { code: "mx", name: "Mexico" },
    Country { code: "my", name: "Malaysia" },
    Country { code: "nl", name: "Netherlands" },
    Country { code: "no", name: "Norway" },
    Country { code: "nz", name: "New Zealand" },
    Country { code: "pe", name: "Peru" },
    Country { code: "ph", name: "Philippines" },
    Country { code: "pl", name: "Poland" },
    Country { code: "pt", name: "Portugal" },
    Country { code: "ro", name: "Romania" },
    Country { code: "rs", name: "Serbia" },
    Country { code: "ru", name: "Russia" },
    Country { code: "se", name: "Sweden" },
    Country { code: "sg", name: "Singapore" },
    Country { code: "si", name: "Slovenia" },
    Country { code: "sk", name: "Slovakia" },
    Country { code: "th", name: "Thailand" },
    Country { code: "tr", name: "Turkey" },
    Country { code: "tw", name: "Taiwan" },
    Country { code: "ua", name: "Ukraine" },
    Country { code: "us", name: "United States" },
    Country { code: "uy", name: "Uruguay" },
    Country { code: "vn", name: "Vietnam" },
    Country { code: "za", name: "South Africa" },
];

lazy_static! {
    static ref WORLD_MAP: HashMap<&'static str, Country> =
        COUNTRIES.iter().map(|c| (c.code, *c)).collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_resolves() {
        let c = Country::from_code("de");
        assert_eq!(c.code(), "de");
        assert_eq!(c.name(), "Germany");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Country::from_code("DE"), Country::from_code("de"));
        assert_eq!(Country::from_code(" Us "), Country::from_code("us"));
    }

    #[test]
    fn unknown_code_falls_back_to_united_nations() {
        assert_eq!(Country::from_code("zz"), UNITED_NATIONS);
        assert_eq!(Country::from_code(""), UNITED_NATIONS);
        assert_eq!(Country::from_code("not-a-code"), UNITED_NATIONS);
    }
}
