//! Residential tenancy agreement (PDF), one per family

use crate::context::GeneratorContext;
use crate::entity::Family;
use crate::format::{format_date_dmy, format_date_iso, format_with_thousands, ordinal, tenant_names};
use crate::{CaseFileError, Result};
use chrono::{Datelike, Months, NaiveDate};
use pdf_core::{PageSize, PdfDocument, StandardFont};
use std::path::PathBuf;

const LEFT_X: f64 = 50.0;
const RIGHT_X: f64 = 200.0;
const LINE_STEP: f64 = 25.0;
const LEASE_MONTHS: u32 = 24;

/// First of the current month and the same day 24 months later
pub fn lease_term(today: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
    let start = today
        .with_day(1)
        .ok_or_else(|| CaseFileError::InvalidDate(format!("first day of {today}")))?;
    let end = start
        .checked_add_months(Months::new(LEASE_MONTHS))
        .ok_or_else(|| CaseFileError::InvalidDate(format!("{start} + {LEASE_MONTHS} months")))?;
    Ok((start, end))
}

/// Due-day line; the day takes its English ordinal suffix (1st, 22nd), never a fixed "th"
pub fn rent_due_clause(day: u32) -> String {
    format!(
        "   Rent is due on the {} day of each calendar month.",
        ordinal(day)
    )
}

/// Body lines as (left column, right column)
pub fn agreement_lines(family: &Family, today: NaiveDate) -> Result<Vec<(String, String)>> {
    let (start, end) = lease_term(today)?;

    let lines = vec![
        ("Date:".to_string(), format_date_iso(today)),
        ("Landlord:".to_string(), family.landlord().to_string()),
        ("Tenant(s):".to_string(), tenant_names(family)),
        ("Premises:".to_string(), family.address().to_string()),
        (" ".to_string(), String::new()),
        ("1. RENT".to_string(), String::new()),
        (
            format!(
                "   The Tenant agrees to pay the monthly rent of HKD ${}.",
                format_with_thousands(family.rent() as i64)
            ),
            String::new(),
        ),
        (rent_due_clause(family.rent_due_day()), String::new()),
        (" ".to_string(), String::new()),
        ("2. TERM".to_string(), String::new()),
        (
            format!(
                "   The lease term is for {LEASE_MONTHS} months commencing on {}.",
                format_date_dmy(start)
            ),
            String::new(),
        ),
        (
            format!("   Expiry Date: {}.", format_date_dmy(end)),
            String::new(),
        ),
    ];
    Ok(lines)
}

/// Lay out the agreement on a single A4 page
pub fn build_agreement(family: &Family, today: NaiveDate) -> Result<PdfDocument> {
    let mut doc = PdfDocument::new(PageSize::A4);
    let height = doc.page_size().height;
    doc.set_title(&format!("Residential Tenancy Agreement {}", family.id()));

    doc.set_font(StandardFont::HelveticaBold, 18.0);
    doc.insert_text("RESIDENTIAL TENANCY AGREEMENT", 1, LEFT_X, height - 60.0)?;

    doc.set_font(StandardFont::Helvetica, 12.0);
    let mut y = height - 120.0;
    for (left, right) in agreement_lines(family, today)? {
        doc.insert_text(&left, 1, LEFT_X, y)?;
        if !right.is_empty() {
            doc.insert_text(&right, 1, RIGHT_X, y)?;
        }
        y -= LINE_STEP;
    }

    // Signature block
    y -= 50.0;
    doc.draw_line(1, 50.0, y, 250.0, y)?;
    doc.insert_text("Signature of Landlord", 1, 50.0, y - 15.0)?;
    doc.draw_line(1, 350.0, y, 550.0, y)?;
    doc.insert_text("Signature of Tenant", 1, 350.0, y - 15.0)?;

    Ok(doc)
}

/// Render and save `tenancy_<id>.pdf`
pub fn write_tenancy(ctx: &GeneratorContext, family: &Family) -> Result<PathBuf> {
    let doc = build_agreement(family, ctx.today())?;
    let path = ctx.output_path(&format!("tenancy_{}.pdf", family.id()));
    doc.save(&path)?;
    Ok(path)
}
