//! Social worker case note (DOCX), one per family

use crate::context::GeneratorContext;
use crate::entity::Family;
use crate::fake;
use crate::format::format_date_iso;
use crate::Result;
use chrono::NaiveDate;
use docx_core::{DocxDocument, Paragraph, Run, Table};
use rand::Rng;
use std::path::PathBuf;

/// Per-note values that do not come from the family
#[derive(Debug, Clone, PartialEq)]
pub struct NoteDetails {
    /// Three-digit suffix of the file reference
    pub reference: u32,
    pub home_visit: NaiveDate,
    pub office_interview: NaiveDate,
}

impl NoteDetails {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> Result<Self> {
        Ok(Self {
            reference: rng.gen_range(100..=999),
            home_visit: fake::date_this_month(rng, today)?,
            office_interview: fake::date_this_month(rng, today)?,
        })
    }
}

/// Build the note: title, reference table, then two dated events
pub fn build_case_note(family: &Family, details: &NoteDetails) -> Result<DocxDocument> {
    let mut doc = DocxDocument::new();
    doc.add_heading("Social Worker Case Note", 0);

    let mut table = Table::new(3, 2);
    table.set_cell(0, 0, "File Ref:")?;
    table.set_cell(0, 1, format!("SW-{}-{}", family.id(), details.reference))?;
    table.set_cell(1, 0, "Primary Client:")?;
    table.set_cell(1, 1, family.primary().display_name())?;
    table.set_cell(2, 0, "Caseworker:")?;
    table.set_cell(2, 1, family.caseworker())?;
    doc.add_table(table);

    doc.add_heading(
        format!("Event 1: Home Visit ({})", format_date_iso(details.home_visit)),
        1,
    );
    doc.add_paragraph(
        Paragraph::new()
            .run(Run::bold("Summary: "))
            .run(Run::new(format!(
                "Conducted a routine home visit at {}. ",
                family.address()
            )))
            .run(Run::new(format!(
                "The primary client, {}, was present along with {} dependent(s). ",
                family.primary().first_name(),
                family.dependents().len()
            )))
            .run(Run::new("The living environment appeared safe but cluttered. ")),
    );

    doc.add_heading(
        format!(
            "Event 2: Office Interview ({})",
            format_date_iso(details.office_interview)
        ),
        1,
    );
    doc.add_paragraph(
        Paragraph::new()
            .run(Run::bold("Summary: "))
            .run(Run::new("Client visited the center regarding rent arrears. "))
            .run(Run::new(format!(
                "Landlord {} has issued a verbal warning. ",
                family.landlord()
            )))
            .run(Run::new(format!(
                "Current rent is HKD ${}. Client requested assistance.",
                family.rent()
            ))),
    );

    Ok(doc)
}

/// Render and save `casenote_<id>.docx`
pub fn write_case_note(ctx: &mut GeneratorContext, family: &Family) -> Result<PathBuf> {
    let details = NoteDetails::random(&mut ctx.rng, ctx.today)?;
    let doc = build_case_note(family, &details)?;
    let path = ctx.output_path(&format!("casenote_{}.docx", family.id()));
    doc.save(&path)?;
    Ok(path)
}
