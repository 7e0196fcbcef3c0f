//! Ready-made masks for common fields.

use lazy_static::lazy_static;

use super::pattern::{CharClass, Pattern};

lazy_static! {
    // Phone numbers
    pub static ref PHONE_US: Pattern = digits("(###) ###-####");
    pub static ref PHONE_PL: Pattern = digits("+48 ### ### ###");

    // Payment cards
    pub static ref CARD_NUMBER: Pattern = digits("#### #### #### ####");
    pub static ref CARD_EXPIRY: Pattern = digits("##/##");

    // Dates and times
    pub static ref DATE_DMY: Pattern = digits("##.##.####");
    pub static ref DATE_ISO: Pattern = digits("####-##-##");
    pub static ref TIME_HM: Pattern = digits("##:##");

    // Polish identifiers
    pub static ref NIP: Pattern = digits("###-###-##-##");
    pub static ref IBAN_PL: Pattern = digits("PL## #### #### #### #### #### ####");
    pub static ref POSTAL_CODE_PL: Pattern = digits("##-###");
}

fn digits(mask: &str) -> Pattern {
    Pattern::new(mask)
        .expect("preset masks are valid")
        .with_class(CharClass::Digit)
}

/// Names accepted by [`preset`].
pub const PRESET_NAMES: &[&str] = &[
    "phone_us",
    "phone_pl",
    "card_number",
    "card_expiry",
    "date_dmy",
    "date_iso",
    "time_hm",
    "nip",
    "iban_pl",
    "postal_code_pl",
];

/// Look up a preset pattern by name.
pub fn preset(name: &str) -> Option<&'static Pattern> {
    let pattern = match name.to_lowercase().replace('-', "_").as_str() {
        "phone_us" | "phone" => &*PHONE_US,
        "phone_pl" => &*PHONE_PL,
        "card_number" | "card" => &*CARD_NUMBER,
        "card_expiry" | "expiry" => &*CARD_EXPIRY,
        "date_dmy" | "date" => &*DATE_DMY,
        "date_iso" => &*DATE_ISO,
        "time_hm" | "time" => &*TIME_HM,
        "nip" => &*NIP,
        "iban_pl" | "iban" => &*IBAN_PL,
        "postal_code_pl" | "postal_code" => &*POSTAL_CODE_PL,
        _ => return None,
    };
    Some(pattern)
}
