//! Fixed value pools for generated data

/// English first names for males
pub const MALE_FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
    "Thomas", "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark",
    "Donald", "Steven", "Paul", "Andrew", "Joshua", "Kenneth", "Kevin", "Brian",
    "George", "Edward", "Ronald", "Timothy", "Jason", "Jeffrey", "Ryan", "Jacob",
    "Gary", "Nicholas", "Eric", "Stephen", "Jonathan", "Justin", "Scott", "Samuel",
    "Frank", "Raymond", "Patrick", "Henry", "Nathan", "Peter", "Kyle", "Ethan",
];

/// English first names for females
pub const FEMALE_FIRST_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Barbara", "Elizabeth", "Susan",
    "Jessica", "Sarah", "Karen", "Nancy", "Lisa", "Betty", "Margaret", "Sandra",
    "Ashley", "Dorothy", "Kimberly", "Emily", "Donna", "Michelle", "Carol",
    "Amanda", "Melissa", "Stephanie", "Rebecca", "Laura", "Sharon", "Cynthia",
    "Amy", "Angela", "Helen", "Anna", "Nicole", "Emma", "Samantha", "Rachel",
    "Catherine", "Janet", "Maria", "Heather", "Julie", "Victoria", "Olivia", "Kelly",
];

/// General last names
pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Perez", "Thompson", "White",
    "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young",
    "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill", "Flores",
    "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell", "Mitchell",
];

/// Romanized Cantonese surnames
pub const HK_SURNAMES: &[&str] = &[
    "CHAN", "WONG", "LEE", "CHEUNG", "LAU", "LAM", "IP", "NG", "HO", "YEUNG", "CHENG", "TANG",
];

pub const DISTRICTS: &[&str] = &[
    "Sha Tin",
    "Mong Kok",
    "Wan Chai",
    "North Point",
    "Tuen Mun",
    "Kwun Tong",
    "Central",
    "Causeway Bay",
];

pub const STREETS: &[&str] = &[
    "King's Road",
    "Nathan Road",
    "Hennessy Road",
    "Tai Po Road",
    "Des Voeux Road",
    "Queen's Road",
];

pub const ESTATES: &[&str] = &["Garden City", "City One", "Tai Koo Shing", "Whampoa Garden"];

pub const FLAT_LETTERS: &[&str] = &["A", "B", "C", "D"];

/// Weekdays a recognizance holder may be told to report on
pub const REPORTING_DAYS: &[&str] = &["Monday", "Wednesday", "Friday"];

/// ISO 3166 alpha-3 nationality codes
pub const NATIONALITIES: &[&str] = &["IDN", "PHL", "VNM", "NPL", "PAK"];

/// Recognizance number suffixes
pub const RECOGNIZANCE_SUFFIXES: &[&str] = &["A", "R"];
