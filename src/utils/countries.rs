use std::collections::HashMap;
use std::sync::OnceLock;

/// ISO 3166-1 alpha-2 code to display name, covering every territory the
/// geocoder can return for a landing site.
const COUNTRY_NAMES: &[(&str, &str)] = &[
    // Americas
    ("US", "United States"),
    ("CA", "Canada"),
    ("MX", "Mexico"),
    ("BR", "Brazil"),
    ("AR", "Argentina"),
    ("CL", "Chile"),
    ("PE", "Peru"),
    ("CO", "Colombia"),
    ("VE", "Venezuela"),
    ("UY", "Uruguay"),
    ("PY", "Paraguay"),
    ("BO", "Bolivia"),
    ("EC", "Ecuador"),
    ("GY", "Guyana"),
    ("SR", "Suriname"),
    ("GF", "French Guiana"),
    // Europe
    ("GB", "United Kingdom"),
    ("FR", "France"),
    ("DE", "Germany"),
    ("IT", "Italy"),
    ("ES", "Spain"),
    ("PT", "Portugal"),
    ("NL", "Netherlands"),
    ("BE", "Belgium"),
    ("CH", "Switzerland"),
    ("AT", "Austria"),
    ("SE", "Sweden"),
    ("NO", "Norway"),
    ("DK", "Denmark"),
    ("FI", "Finland"),
    ("IS", "Iceland"),
    ("IE", "Ireland"),
    ("PL", "Poland"),
    ("CZ", "Czech Republic"),
    ("SK", "Slovakia"),
    ("HU", "Hungary"),
    ("RO", "Romania"),
    ("BG", "Bulgaria"),
    ("GR", "Greece"),
    ("HR", "Croatia"),
    ("SI", "Slovenia"),
    ("RS", "Serbia"),
    ("BA", "Bosnia and Herzegovina"),
    ("ME", "Montenegro"),
    ("MK", "North Macedonia"),
    ("AL", "Albania"),
    // Eastern Europe, Caucasus and Central Asia
    ("RU", "Russia"),
    ("UA", "Ukraine"),
    ("BY", "Belarus"),
    ("LT", "Lithuania"),
    ("LV", "Latvia"),
    ("EE", "Estonia"),
    ("MD", "Moldova"),
    ("GE", "Georgia"),
    ("AM", "Armenia"),
    ("AZ", "Azerbaijan"),
    ("KZ", "Kazakhstan"),
    ("KG", "Kyrgyzstan"),
    ("TJ", "Tajikistan"),
    ("TM", "Turkmenistan"),
    ("UZ", "Uzbekistan"),
    // Asia
    ("CN", "China"),
    ("JP", "Japan"),
    ("KR", "South Korea"),
    ("KP", "North Korea"),
    ("MN", "Mongolia"),
    ("IN", "India"),
    ("PK", "Pakistan"),
    ("BD", "Bangladesh"),
    ("LK", "Sri Lanka"),
    ("NP", "Nepal"),
    ("BT", "Bhutan"),
    ("MM", "Myanmar"),
    ("TH", "Thailand"),
    ("VN", "Vietnam"),
    ("LA", "Laos"),
    ("KH", "Cambodia"),
    ("MY", "Malaysia"),
    ("SG", "Singapore"),
    ("ID", "Indonesia"),
    ("PH", "Philippines"),
    ("BN", "Brunei"),
    ("TL", "East Timor"),
    // Oceania
    ("AU", "Australia"),
    ("NZ", "New Zealand"),
    ("PG", "Papua New Guinea"),
    ("FJ", "Fiji"),
    ("SB", "Solomon Islands"),
    ("VU", "Vanuatu"),
    ("NC", "New Caledonia"),
    ("PF", "French Polynesia"),
    // Africa
    ("EG", "Egypt"),
    ("LY", "Libya"),
    ("TN", "Tunisia"),
    ("DZ", "Algeria"),
    ("MA", "Morocco"),
    ("SD", "Sudan"),
    ("SS", "South Sudan"),
    ("ET", "Ethiopia"),
    ("ER", "Eritrea"),
    ("DJ", "Djibouti"),
    ("SO", "Somalia"),
    ("KE", "Kenya"),
    ("UG", "Uganda"),
    ("TZ", "Tanzania"),
    ("RW", "Rwanda"),
    ("BI", "Burundi"),
    ("CD", "Democratic Republic of Congo"),
    ("CG", "Republic of Congo"),
    ("CF", "Central African Republic"),
    ("CM", "Cameroon"),
    ("TD", "Chad"),
    ("NE", "Niger"),
    ("NG", "Nigeria"),
    ("BJ", "Benin"),
    ("TG", "Togo"),
    ("GH", "Ghana"),
    ("CI", "Ivory Coast"),
    ("LR", "Liberia"),
    ("SL", "Sierra Leone"),
    ("GN", "Guinea"),
    ("GW", "Guinea-Bissau"),
    ("SN", "Senegal"),
    ("GM", "Gambia"),
    ("ML", "Mali"),
    ("BF", "Burkina Faso"),
    ("MR", "Mauritania"),
    ("ZA", "South Africa"),
    ("NA", "Namibia"),
    ("BW", "Botswana"),
    ("ZW", "Zimbabwe"),
    ("ZM", "Zambia"),
    ("MW", "Malawi"),
    ("MZ", "Mozambique"),
    ("SZ", "Eswatini"),
    ("LS", "Lesotho"),
    ("MG", "Madagascar"),
    ("MU", "Mauritius"),
    ("SC", "Seychelles"),
    ("KM", "Comoros"),
    ("AO", "Angola"),
    ("GA", "Gabon"),
    ("GQ", "Equatorial Guinea"),
    ("ST", "São Tomé and Príncipe"),
    ("CV", "Cape Verde"),
    // Middle East
    ("IR", "Iran"),
    ("IQ", "Iraq"),
    ("SY", "Syria"),
    ("LB", "Lebanon"),
    ("JO", "Jordan"),
    ("IL", "Israel"),
    ("PS", "Palestine"),
    ("SA", "Saudi Arabia"),
    ("YE", "Yemen"),
    ("OM", "Oman"),
    ("AE", "United Arab Emirates"),
    ("QA", "Qatar"),
    ("BH", "Bahrain"),
    ("KW", "Kuwait"),
    ("TR", "Turkey"),
    ("CY", "Cyprus"),
    ("AF", "Afghanistan"),
    // Polar and remote territories
    ("AQ", "Antarctica"),
    ("TF", "French Southern Territories"),
    ("GL", "Greenland"),
    ("SJ", "Svalbard and Jan Mayen"),
    ("FK", "Falkland Islands"),
    ("EH", "Western Sahara"),
];

fn table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| COUNTRY_NAMES.iter().copied().collect())
}

/// Look up the display name for a two-letter country code.
pub fn country_name(code: &str) -> Option<&'static str> {
    table().get(code).copied()
}
