//! Flag glyphs appended to labels when icons are enabled.

/// Regional-indicator flag for every ISO 3166-1 alpha-2 code, sorted by code.
const FLAGS: &[(&str, &str)] = &[
    ("AD", "🇦🇩"), ("AE", "🇦🇪"), ("AF", "🇦🇫"), ("AG", "🇦🇬"), ("AI", "🇦🇮"), ("AL", "🇦🇱"),
    ("AM", "🇦🇲"), ("AO", "🇦🇴"), ("AQ", "🇦🇶"), ("AR", "🇦🇷"), ("AS", "🇦🇸"), ("AT", "🇦🇹"),
    ("AU", "🇦🇺"), ("AW", "🇦🇼"), ("AX", "🇦🇽"), ("AZ", "🇦🇿"), ("BA", "🇧🇦"), ("BB", "🇧🇧"),
    ("BD", "🇧🇩"), ("BE", "🇧🇪"), ("BF", "🇧🇫"), ("BG", "🇧🇬"), ("BH", "🇧🇭"), ("BI", "🇧🇮"),
    ("BJ", "🇧🇯"), ("BL", "🇧🇱"), ("BM", "🇧🇲"), ("BN", "🇧🇳"), ("BO", "🇧🇴"), ("BQ", "🇧🇶"),
    ("BR", "🇧🇷"), ("BS", "🇧🇸"), ("BT", "🇧🇹"), ("BV", "🇧🇻"), ("BW", "🇧🇼"), ("BY", "🇧🇾"),
    ("BZ", "🇧🇿"), ("CA", "🇨🇦"), ("CC", "🇨🇨"), ("CD", "🇨🇩"), ("CF", "🇨🇫"), ("CG", "🇨🇬"),
    ("CH", "🇨🇭"), ("CI", "🇨🇮"), ("CK", "🇨🇰"), ("CL", "🇨🇱"), ("CM", "🇨🇲"), ("CN", "🇨🇳"),
    ("CO", "🇨🇴"), ("CR", "🇨🇷"), ("CU", "🇨🇺"), ("CV", "🇨🇻"), ("CW", "🇨🇼"), ("CX", "🇨🇽"),
    ("CY", "🇨🇾"), ("CZ", "🇨🇿"), ("DE", "🇩🇪"), ("DJ", "🇩🇯"), ("DK", "🇩🇰"), ("DM", "🇩🇲"),
    ("DO", "🇩🇴"), ("DZ", "🇩🇿"), ("EC", "🇪🇨"), ("EE", "🇪🇪"), ("EG", "🇪🇬"), ("EH", "🇪🇭"),
    ("ER", "🇪🇷"), ("ES", "🇪🇸"), ("ET", "🇪🇹"), ("FI", "🇫🇮"), ("FJ", "🇫🇯"), ("FK", "🇫🇰"),
    ("FM", "🇫🇲"), ("FO", "🇫🇴"), ("FR", "🇫🇷"), ("GA", "🇬🇦"), ("GB", "🇬🇧"), ("GD", "🇬🇩"),
    ("GE", "🇬🇪"), ("GF", "🇬🇫"), ("GG", "🇬🇬"), ("GH", "🇬🇭"), ("GI", "🇬🇮"), ("GL", "🇬🇱"),
    ("GM", "🇬🇲"), ("GN", "🇬🇳"), ("GP", "🇬🇵"), ("GQ", "🇬🇶"), ("GR", "🇬🇷"), ("GS", "🇬🇸"),
    ("GT", "🇬🇹"), ("GU", "🇬🇺"), ("GW", "🇬🇼"), ("GY", "🇬🇾"), ("HK", "🇭🇰"), ("HM", "🇭🇲"),
    ("HN", "🇭🇳"), ("HR", "🇭🇷"), ("HT", "🇭🇹"), ("HU", "🇭🇺"), ("ID", "🇮🇩"), ("IE", "🇮🇪"),
    ("IL", "🇮🇱"), ("IM", "🇮🇲"), ("IN", "🇮🇳"), ("IO", "🇮🇴"), ("IQ", "🇮🇶"), ("IR", "🇮🇷"),
    ("IS", "🇮🇸"), ("IT", "🇮🇹"), ("JE", "🇯🇪"), ("JM", "🇯🇲"), ("JO", "🇯🇴"), ("JP", "🇯🇵"),
    ("KE", "🇰🇪"), ("KG", "🇰🇬"), ("KH", "🇰🇭"), ("KI", "🇰🇮"), ("KM", "🇰🇲"), ("KN", "🇰🇳"),
    ("KP", "🇰🇵"), ("KR", "🇰🇷"), ("KW", "🇰🇼"), ("KY", "🇰🇾"), ("KZ", "🇰🇿"), ("LA", "🇱🇦"),
    ("LB", "🇱🇧"), ("LC", "🇱🇨"), ("LI", "🇱🇮"), ("LK", "🇱🇰"), ("LR", "🇱🇷"), ("LS", "🇱🇸"),
    ("LT", "🇱🇹"), ("LU", "🇱🇺"), ("LV", "🇱🇻"), ("LY", "🇱🇾"), ("MA", "🇲🇦"), ("MC", "🇲🇨"),
    ("MD", "🇲🇩"), ("ME", "🇲🇪"), ("MF", "🇲🇫"), ("MG", "🇲🇬"), ("MH", "🇲🇭"), ("MK", "🇲🇰"),
    ("ML", "🇲🇱"), ("MM", "🇲🇲"), ("MN", "🇲🇳"), ("MO", "🇲🇴"), ("MP", "🇲🇵"), ("MQ", "🇲🇶"),
    ("MR", "🇲🇷"), ("MS", "🇲🇸"), ("MT", "🇲🇹"), ("MU", "🇲🇺"), ("MV", "🇲🇻"), ("MW", "🇲🇼"),
    ("MX", "🇲🇽"), ("MY", "🇲🇾"), ("MZ", "🇲🇿"), ("NA", "🇳🇦"), ("NC", "🇳🇨"), ("NE", "🇳🇪"),
    ("NF", "🇳🇫"), ("NG", "🇳🇬"), ("NI", "🇳🇮"), ("NL", "🇳🇱"), ("NO", "🇳🇴"), ("NP", "🇳🇵"),
    ("NR", "🇳🇷"), ("NU", "🇳🇺"), ("NZ", "🇳🇿"), ("OM", "🇴🇲"), ("PA", "🇵🇦"), ("PE", "🇵🇪"),
    ("PF", "🇵🇫"), ("PG", "🇵🇬"), ("PH", "🇵🇭"), ("PK", "🇵🇰"), ("PL", "🇵🇱"), ("PM", "🇵🇲"),
    ("PN", "🇵🇳"), ("PR", "🇵🇷"), ("PS", "🇵🇸"), ("PT", "🇵🇹"), ("PW", "🇵🇼"), ("PY", "🇵🇾"),
    ("QA", "🇶🇦"), ("RE", "🇷🇪"), ("RO", "🇷🇴"), ("RS", "🇷🇸"), ("RU", "🇷🇺"), ("RW", "🇷🇼"),
    ("SA", "🇸🇦"), ("SB", "🇸🇧"), ("SC", "🇸🇨"), ("SD", "🇸🇩"), ("SE", "🇸🇪"), ("SG", "🇸🇬"),
    ("SH", "🇸🇭"), ("SI", "🇸🇮"), ("SJ", "🇸🇯"), ("SK", "🇸🇰"), ("SL", "🇸🇱"), ("SM", "🇸🇲"),
    ("SN", "🇸🇳"), ("SO", "🇸🇴"), ("SR", "🇸🇷"), ("SS", "🇸🇸"), ("ST", "🇸🇹"), ("SV", "🇸🇻"),
    ("SX", "🇸🇽"), ("SY", "🇸🇾"), ("SZ", "🇸🇿"), ("TC", "🇹🇨"), ("TD", "🇹🇩"), ("TF", "🇹🇫"),
    ("TG", "🇹🇬"), ("TH", "🇹🇭"), ("TJ", "🇹🇯"), ("TK", "🇹🇰"), ("TL", "🇹🇱"), ("TM", "🇹🇲"),
    ("TN", "🇹🇳"), ("TO", "🇹🇴"), ("TR", "🇹🇷"), ("TT", "🇹🇹"), ("TV", "🇹🇻"), ("TW", "🇹🇼"),
    ("TZ", "🇹🇿"), ("UA", "🇺🇦"), ("UG", "🇺🇬"), ("UM", "🇺🇲"), ("US", "🇺🇸"), ("UY", "🇺🇾"),
    ("UZ", "🇺🇿"), ("VA", "🇻🇦"), ("VC", "🇻🇨"), ("VE", "🇻🇪"), ("VG", "🇻🇬"), ("VI", "🇻🇮"),
    ("VN", "🇻🇳"), ("VU", "🇻🇺"), ("WF", "🇼🇫"), ("WS", "🇼🇸"), ("XK", "🇽🇰"), ("YE", "🇾🇪"),
    ("YT", "🇾🇹"), ("ZA", "🇿🇦"), ("ZM", "🇿🇲"), ("ZW", "🇿🇼"),
];

/// Flag glyph for alpha-2 `code`, if the table has one.
///
/// # Examples
///
/// ```rust
/// use country_select::icons::flag_for;
///
/// assert_eq!(flag_for("de"), Some("🇩🇪"));
/// assert_eq!(flag_for("EU"), None);
/// ```
#[must_use]
pub fn flag_for(code: &str) -> Option<&'static str> {
    let upper = code.to_ascii_uppercase();
    FLAGS
        .binary_search_by(|(candidate, _)| candidate.cmp(&upper.as_str()))
        .ok()
        .and_then(|index| FLAGS.get(index))
        .map(|(_, glyph)| *glyph)
}

/// Append the flag for `code` to `label`, separated by a space. Labels for
/// codes without a flag are returned unchanged.
#[must_use]
pub fn with_icon(label: String, code: &str) -> String {
    let Some(glyph) = flag_for(code) else {
        return label;
    };
    format!("{label} {glyph}")
}
