//! People, families and addresses

use crate::fake::{self, pick};
use crate::pools::{
    DISTRICTS, ESTATES, FLAT_LETTERS, HK_SURNAMES, NATIONALITIES, RECOGNIZANCE_SUFFIXES, STREETS,
};
use crate::Result;
use chrono::NaiveDate;
use rand::Rng;
use std::fmt;

/// Position of a person within a family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Primary,
    Dependent,
}

impl Role {
    /// Inclusive age bounds in years
    pub fn age_bounds(&self) -> (u32, u32) {
        match self {
            Role::Primary => (18, 60),
            Role::Dependent => (2, 17),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn letter(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// One member of a family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    role: Role,
    gender: Gender,
    first_name: String,
    last_name: String,
    display_name: String,
    date_of_birth: NaiveDate,
    nationality: String,
    recognizance_no: String,
    previous_recognizance_no: String,
}

impl Person {
    /// The same person under another surname, display name rebuilt
    pub fn with_surname(self, last_name: &str) -> Self {
        Self {
            display_name: display_name(last_name, &self.first_name),
            last_name: last_name.to_string(),
            ..self
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// `SURNAME, First`, as printed on official forms
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    pub fn recognizance_no(&self) -> &str {
        &self.recognizance_no
    }

    pub fn previous_recognizance_no(&self) -> &str {
        &self.previous_recognizance_no
    }
}

/// A primary client, their dependents and shared tenancy details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    id: u32,
    primary: Person,
    dependents: Vec<Person>,
    address: String,
    rent: u32,
    rent_due_day: u32,
    landlord: String,
    caseworker: String,
}

impl Family {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn primary(&self) -> &Person {
        &self.primary
    }

    pub fn dependents(&self) -> &[Person] {
        &self.dependents
    }

    /// Primary first, then dependents in order
    pub fn members(&self) -> impl Iterator<Item = &Person> {
        std::iter::once(&self.primary).chain(self.dependents.iter())
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Monthly rent in HKD
    pub fn rent(&self) -> u32 {
        self.rent
    }

    /// Day of month rent falls due (1-28)
    pub fn rent_due_day(&self) -> u32 {
        self.rent_due_day
    }

    pub fn landlord(&self) -> &str {
        &self.landlord
    }

    pub fn caseworker(&self) -> &str {
        &self.caseworker
    }
}

fn display_name(last_name: &str, first_name: &str) -> String {
    format!("{}, {}", last_name.to_uppercase(), first_name)
}

/// `HK-<7 digits>-<A|R>`
pub fn recognizance_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let digits = rng.gen_range(1_000_000..=9_999_999);
    format!("HK-{}-{}", digits, pick(rng, RECOGNIZANCE_SUFFIXES))
}

/// English first name with a Cantonese surname, e.g. `Peter CHAN`
pub fn hk_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let surname = pick(rng, HK_SURNAMES);
    let first = fake::any_first_name(rng);
    format!("{first} {surname}")
}

/// A Hong Kong street or estate address
pub fn generate_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let on_street = rng.gen_bool(0.5);
    let flat = format!("Flat {}, {}/F", pick(rng, FLAT_LETTERS), rng.gen_range(1..=40));
    let district = pick(rng, DISTRICTS);

    if on_street {
        let street = pick(rng, STREETS);
        format!(
            "{flat}, {} {street}, {district}, Hong Kong",
            rng.gen_range(1..=900)
        )
    } else {
        let estate = pick(rng, ESTATES);
        format!(
            "{flat}, Block {}, {estate}, {district}, Hong Kong",
            rng.gen_range(1..=10)
        )
    }
}

/// Generate a person aged within the role's bounds on `today`
pub fn generate_person<R: Rng + ?Sized>(rng: &mut R, role: Role, today: NaiveDate) -> Result<Person> {
    let gender = if rng.gen_bool(0.5) {
        Gender::Male
    } else {
        Gender::Female
    };
    let first_name = fake::first_name(rng, gender == Gender::Male).to_string();
    let last_name = fake::last_name(rng).to_string();
    let (min_age, max_age) = role.age_bounds();
    let date_of_birth = fake::date_of_birth(rng, today, min_age, max_age)?;

    Ok(Person {
        role,
        gender,
        display_name: display_name(&last_name, &first_name),
        first_name,
        last_name,
        date_of_birth,
        nationality: pick(rng, NATIONALITIES).to_string(),
        recognizance_no: recognizance_number(rng),
        previous_recognizance_no: recognizance_number(rng),
    })
}

/// Generate a family with one or two dependents sharing the primary's surname
pub fn generate_family<R: Rng + ?Sized>(rng: &mut R, id: u32, today: NaiveDate) -> Result<Family> {
    let primary = generate_person(rng, Role::Primary, today)?;

    let count = rng.gen_range(1..=2);
    let mut dependents = Vec::with_capacity(count);
    for _ in 0..count {
        let dependent = generate_person(rng, Role::Dependent, today)?;
        dependents.push(dependent.with_surname(primary.last_name()));
    }

    Ok(Family {
        id,
        primary,
        dependents,
        address: generate_address(rng),
        rent: rng.gen_range(4500..=12000),
        rent_due_day: rng.gen_range(1..=28),
        landlord: hk_name(rng),
        caseworker: hk_name(rng),
    })
}
