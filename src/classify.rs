// src/classify.rs
//
// Country → continent, from one static table.
// Total: anything not listed (variants, aggregates, "") is `Unclassified`.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

/// Bump when the membership lists change.
pub const TABLE_VERSION: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    Unclassified,
}

impl Continent {
    /// Display order; `Unclassified` last.
    pub const ALL: [Continent; 7] = [
        Continent::Africa,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
        Continent::Unclassified,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
            Continent::Unclassified => "Unclassified",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const AFRICA: &[&str] = &[
    "Algeria", "Angola", "Benin", "Botswana", "Burkina Faso", "Burundi", "Cameroon",
    "Cape Verde", "Cabo Verde", "Central African Republic", "Chad", "Comoros",
    "DR Congo", "Democratic Republic of the Congo", "Congo", "Republic of the Congo",
    "Djibouti", "Egypt", "Equatorial Guinea", "Eritrea", "Eswatini", "Swaziland",
    "Ethiopia", "Gabon", "Gambia", "The Gambia", "Ghana", "Guinea", "Guinea-Bissau",
    "Ivory Coast", "Côte d'Ivoire", "Kenya", "Lesotho", "Liberia", "Libya", "Madagascar",
    "Malawi", "Mali", "Mauritania", "Mauritius", "Morocco", "Mozambique", "Namibia",
    "Niger", "Nigeria", "Rwanda", "São Tomé and Príncipe", "Sao Tome and Principe",
    "Senegal", "Seychelles", "Sierra Leone", "Somalia", "South Africa", "South Sudan",
    "Sudan", "Tanzania", "Togo", "Tunisia", "Uganda", "Zambia", "Zimbabwe",
];

const ASIA: &[&str] = &[
    "Afghanistan", "Armenia", "Azerbaijan", "Bahrain", "Bangladesh", "Bhutan", "Brunei",
    "Cambodia", "China", "Georgia", "Hong Kong", "India", "Indonesia", "Iran", "Iraq",
    "Israel", "Japan", "Jordan", "Kazakhstan", "Kuwait", "Kyrgyzstan", "Laos", "Lebanon",
    "Macau", "Macao", "Malaysia", "Maldives", "Mongolia", "Myanmar", "Nepal", "North Korea",
    "Oman", "Pakistan", "Palestine", "State of Palestine", "Philippines", "Qatar",
    "Saudi Arabia", "Singapore", "South Korea", "Korea, South", "Sri Lanka", "Syria",
    "Taiwan", "Tajikistan", "Thailand", "Timor-Leste", "East Timor", "Turkmenistan",
    "United Arab Emirates", "Uzbekistan", "Vietnam", "Yemen",
];

const EUROPE: &[&str] = &[
    "Albania", "Andorra", "Austria", "Belarus", "Belgium", "Bosnia and Herzegovina",
    "Bulgaria", "Croatia", "Cyprus", "Czech Republic", "Czechia", "Denmark", "Estonia",
    "Faroe Islands", "Finland", "France", "Germany", "Greece", "Hungary", "Iceland",
    "Ireland", "Italy", "Kosovo", "Latvia", "Liechtenstein", "Lithuania", "Luxembourg",
    "Malta", "Moldova", "Monaco", "Montenegro", "Netherlands", "North Macedonia",
    "Norway", "Poland", "Portugal", "Romania", "Russia", "San Marino", "Serbia",
    "Slovakia", "Slovenia", "Spain", "Sweden", "Switzerland", "Turkey", "Türkiye",
    "Ukraine", "United Kingdom",
];

const NORTH_AMERICA: &[&str] = &[
    "Antigua and Barbuda", "Aruba", "Bahamas", "The Bahamas", "Barbados", "Belize",
    "Bermuda", "Canada", "Cayman Islands", "Costa Rica", "Cuba", "Curaçao", "Dominica",
    "Dominican Republic", "El Salvador", "Greenland", "Grenada", "Guatemala", "Haiti",
    "Honduras", "Jamaica", "Mexico", "Nicaragua", "Panama", "Puerto Rico",
    "Saint Kitts and Nevis", "Saint Lucia", "Saint Vincent and the Grenadines",
    "Sint Maarten", "Trinidad and Tobago", "Turks and Caicos Islands", "United States",
];

const SOUTH_AMERICA: &[&str] = &[
    "Argentina", "Bolivia", "Brazil", "Chile", "Colombia", "Ecuador", "Guyana",
    "Paraguay", "Peru", "Suriname", "Uruguay", "Venezuela",
];

const OCEANIA: &[&str] = &[
    "Australia", "Fiji", "French Polynesia", "Kiribati", "Marshall Islands",
    "Micronesia", "Federated States of Micronesia", "Nauru", "New Caledonia",
    "New Zealand", "Palau", "Papua New Guinea", "Samoa", "Solomon Islands", "Tonga",
    "Tuvalu", "Vanuatu",
];

static TABLE: Lazy<HashMap<&'static str, Continent>> = Lazy::new(|| {
    let lists: [(Continent, &[&str]); 6] = [
        (Continent::Africa, AFRICA),
        (Continent::Asia, ASIA),
        (Continent::Europe, EUROPE),
        (Continent::NorthAmerica, NORTH_AMERICA),
        (Continent::SouthAmerica, SOUTH_AMERICA),
        (Continent::Oceania, OCEANIA),
    ];
    let mut map = HashMap::new();
    for (continent, names) in lists {
        for &name in names {
            map.insert(name, continent);
        }
    }
    map
});

/// Continent for a display name. Exact match after trimming.
pub fn classify(country: &str) -> Continent {
    TABLE.get(country.trim()).copied().unwrap_or(Continent::Unclassified)
}

/// Every name the table knows, per continent, for listing/debugging.
pub fn members(continent: Continent) -> &'static [&'static str] {
    match continent {
        Continent::Africa => AFRICA,
        Continent::Asia => ASIA,
        Continent::Europe => EUROPE,
        Continent::NorthAmerica => NORTH_AMERICA,
        Continent::SouthAmerica => SOUTH_AMERICA,
        Continent::Oceania => OCEANIA,
        Continent::Unclassified => &[],
    }
}
