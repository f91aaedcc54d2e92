use crate::checks::{number, REGION, SELECTOR};
use crate::error::CnpValidationError;
use chrono::{Datelike, NaiveDate};

/// Former Bucharest sectors 7 and 8
const HISTORIC_DISTRICTS: [u32; 2] = [47, 48];

/// Codes issued to people born strictly before this date (year, month, day) may use
/// one of the [HISTORIC_DISTRICTS]. The day itself is excluded.
pub const HISTORIC_DISTRICT_CUTOFF: (i32, u32, u32) = (1979, 12, 19);

const RESERVED_REGION: u32 = 70;

/// From this birth year on, the reserved region is used for every selector.
/// Before it, only foreign residents and non-residents (S = 7, 8, 9) got it.
pub const RESERVED_REGION_CUTOFF_YEAR: i32 = 2024;

const FOREIGN_SELECTORS: [u8; 3] = [b'7', b'8', b'9'];

const REGION_NAMES: [(u32, &str); 51] = [
    (1, "Alba"),
    (2, "Arad"),
    (3, "Argeș"),
    (4, "Bacău"),
    (5, "Bihor"),
    (6, "Bistrița-Năsăud"),
    (7, "Botoșani"),
    (8, "Brașov"),
    (9, "Brăila"),
    (10, "Buzău"),
    (11, "Caraș-Severin"),
    (12, "Cluj"),
    (13, "Constanța"),
    (14, "Covasna"),
    (15, "Dâmbovița"),
    (16, "Dolj"),
    (17, "Galați"),
    (18, "Gorj"),
    (19, "Harghita"),
    (20, "Hunedoara"),
    (21, "Ialomița"),
    (22, "Iași"),
    (23, "Ilfov"),
    (24, "Maramureș"),
    (25, "Mehedinți"),
    (26, "Mureș"),
    (27, "Neamț"),
    (28, "Olt"),
    (29, "Prahova"),
    (30, "Satu Mare"),
    (31, "Sălaj"),
    (32, "Sibiu"),
    (33, "Suceava"),
    (34, "Teleorman"),
    (35, "Timiș"),
    (36, "Tulcea"),
    (37, "Vaslui"),
    (38, "Vâlcea"),
    (39, "Vrancea"),
    (40, "București"),
    (41, "București Sector 1"),
    (42, "București Sector 2"),
    (43, "București Sector 3"),
    (44, "București Sector 4"),
    (45, "București Sector 5"),
    (46, "București Sector 6"),
    (47, "București Sector 7 (desființat)"),
    (48, "București Sector 8 (desființat)"),
    (51, "Călărași"),
    (52, "Giurgiu"),
    (70, "Oricare județ"),
];

/// Region codes in current use, independent of birth date or selector.
fn is_official_region(region: u32) -> bool {
    matches!(region, 1..=46 | 51 | 52)
}

/// Display name of a region code, if it was ever assigned.
pub fn region_name(region: u32) -> Option<&'static str> {
    REGION_NAMES
        .iter()
        .find(|(code, _)| *code == region)
        .map(|(_, name)| *name)
}

/// Checks the JJ field of a well-formed code against its already reconstructed birth date.
pub fn check_region(code: &[u8], birth_date: NaiveDate) -> Result<(), CnpValidationError> {
    let region = number(&code[REGION]);

    let valid = if HISTORIC_DISTRICTS.contains(&region) {
        (birth_date.year(), birth_date.month(), birth_date.day()) < HISTORIC_DISTRICT_CUTOFF
    } else if region == RESERVED_REGION {
        birth_date.year() >= RESERVED_REGION_CUTOFF_YEAR
            || FOREIGN_SELECTORS.contains(&code[SELECTOR])
    } else {
        is_official_region(region)
    };

    if valid {
        Ok(())
    } else {
        Err(CnpValidationError::InvalidRegionError)
    }
}
