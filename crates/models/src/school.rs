use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumProperty, EnumString, IntoEnumIterator};

/// A school as it appears in the static reference lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchoolSeed {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub state_name: &'static str,
    pub state_abbreviation: &'static str,
}

impl SchoolSeed {
    const fn california(name: &'static str, abbreviation: &'static str) -> Self {
        Self {
            name,
            abbreviation,
            state_name: "California",
            state_abbreviation: "CA",
        }
    }
}

/// Public university systems whose campuses are seeded into the school table
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, AsRefStr,
    EnumProperty,
)]
pub enum SchoolSystem {
    #[strum(serialize = "CSU", props(full = "California State University"))]
    CaliforniaState,
    #[strum(serialize = "UC", props(full = "University of California"))]
    UniversityOfCalifornia,
}

impl SchoolSystem {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn as_full_str(&self) -> &'static str {
        self.get_str("full").unwrap_or_default()
    }

    pub fn all() -> Vec<SchoolSystem> {
        SchoolSystem::iter().collect()
    }

    /// The campuses belonging to this system
    pub fn schools(&self) -> &'static [SchoolSeed] {
        match self {
            Self::CaliforniaState => CSU_SCHOOLS,
            Self::UniversityOfCalifornia => UC_SCHOOLS,
        }
    }
}

const CSU_SCHOOLS: &[SchoolSeed] = &[
    SchoolSeed::california("California State University, Bakersfield", "CSUB"),
    SchoolSeed::california("California State University, Channel Islands", "CSUCI"),
    SchoolSeed::california("California State University, Chico", "CSUC"),
    SchoolSeed::california("California State University, Dominguez Hills", "CSUDH"),
    SchoolSeed::california("California State University, East Bay", "CSUEB"),
    SchoolSeed::california("California State University, Fresno", "CSUF"),
    SchoolSeed::california("California State University, Fullerton", "CSUF"),
    SchoolSeed::california("California State University, Long Beach", "CSULB"),
    SchoolSeed::california("California State University, Los Angeles", "CSULA"),
    SchoolSeed::california("California State University, Maritime Academy", "CSUMA"),
    SchoolSeed::california("California State University, Monterey Bay", "CSUMB"),
    SchoolSeed::california("California State University, Northridge", "CSUN"),
    SchoolSeed::california("California State University, Sacramento", "CSUS"),
    SchoolSeed::california("California State University, San Bernardino", "CSUSB"),
    SchoolSeed::california("California State University, San Marcos", "CSUSM"),
    SchoolSeed::california("California State University, Stanislaus", "CSUS"),
];

const UC_SCHOOLS: &[SchoolSeed] = &[
    SchoolSeed::california("University of California, Berkeley", "UCB"),
    SchoolSeed::california("University of California, Davis", "UCD"),
    SchoolSeed::california("University of California, Irvine", "UCI"),
    SchoolSeed::california("University of California, Los Angeles", "UCLA"),
    SchoolSeed::california("University of California, Merced", "UCM"),
    SchoolSeed::california("University of California, Riverside", "UCR"),
    SchoolSeed::california("University of California, San Diego", "UCSD"),
    SchoolSeed::california("University of California, San Francisco", "UCSF"),
    SchoolSeed::california("University of California, Santa Barbara", "UCSB"),
    SchoolSeed::california("University of California, Santa Cruz", "UCSC"),
];

/// Every seeded school, CSU campuses first
pub fn all_schools() -> impl Iterator<Item = &'static SchoolSeed> {
    SchoolSystem::iter().flat_map(|system| system.schools().iter())
}

/// Whether `name` is one of the seeded schools
pub fn is_known_school(name: &str) -> bool {
    all_schools().any(|school| school.name == name)
}
