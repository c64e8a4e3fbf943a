//! Recognizance form (JPEG), one per person

use crate::context::GeneratorContext;
use crate::entity::Person;
use crate::fake::{self, pick};
use crate::format::{format_date_dmy, split_at_char};
use crate::pools::REPORTING_DAYS;
use crate::Result;
use chrono::NaiveDate;
use image::{Rgb, RgbImage};
use log::debug;
use rand::Rng;
use raster_core::{save_jpeg, Canvas, FontLoader, FontWeight, ScanEffect};
use std::path::PathBuf;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 1400;
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 250]);

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const DARK_BLUE: Rgb<u8> = Rgb([0, 0, 139]);
const GRAY: Rgb<u8> = Rgb([128, 128, 128]);
const RED: Rgb<u8> = Rgb([255, 0, 0]);

const ROWS_TOP: i32 = 200;
const ROW_STEP: i32 = 70;
const LABEL_X: i32 = 50;
const VALUE_X: i32 = 350;

/// Characters of the address on the first address row
const ADDRESS_SPLIT: usize = 35;

/// Maximum scan skew in degrees, either direction
const MAX_SKEW: f32 = 0.8;
const BLUR_SIGMA: f32 = 0.7;
const VALIDITY_DAYS: u64 = 30;

/// Per-form values that do not come from the person
#[derive(Debug, Clone, PartialEq)]
pub struct FormDetails {
    pub serial: u32,
    pub valid_until: NaiveDate,
    pub reporting_day: &'static str,
}

impl FormDetails {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> Result<Self> {
        Ok(Self {
            serial: rng.gen_range(10_000..=99_999),
            valid_until: fake::future_date(rng, today, VALIDITY_DAYS)?,
            reporting_day: pick(rng, REPORTING_DAYS),
        })
    }
}

/// The label/value rows of the form, top to bottom
pub fn form_rows(person: &Person, address: &str, details: &FormDetails) -> Vec<(String, String)> {
    let (address_head, address_tail) = split_at_char(address, ADDRESS_SPLIT);

    [
        ("Serial No:", format!("S-{}", details.serial)),
        ("Recognizance No:", person.recognizance_no().to_string()),
        ("Previous Rec No:", person.previous_recognizance_no().to_string()),
        ("Name of Holder:", person.display_name().to_string()),
        ("Nationality:", person.nationality().to_string()),
        ("Sex:", person.gender().to_string()),
        ("Date of Birth:", format_date_dmy(person.date_of_birth())),
        ("Residential Address:", address_head.to_string()),
        ("", address_tail.to_string()),
        ("Valid Until:", format_date_dmy(details.valid_until)),
        ("Reporting Condition:", "Report to Shatin Imm. Office".to_string()),
        ("", format!("Every 4 weeks on {}", details.reporting_day)),
    ]
    .into_iter()
    .map(|(label, value)| (label.to_string(), value))
    .collect()
}

/// Draw the clean form, before scan artifacts
pub fn draw_form(fonts: &mut FontLoader, rows: &[(String, String)]) -> RgbImage {
    let header_font = fonts.load(FontWeight::Bold, 36.0);
    let label_font = fonts.load(FontWeight::Regular, 24.0);
    let data_font = fonts.load(FontWeight::Bold, 24.0);
    let small_font = fonts.load(FontWeight::Regular, 20.0);

    let mut canvas = Canvas::new(WIDTH, HEIGHT, BACKGROUND);

    canvas.draw_text(320, 50, "IMMIGRATION DEPARTMENT", &header_font, BLACK);
    canvas.draw_text(380, 100, "RECOGNIZANCE (Form 8)", &header_font, BLACK);

    let mut y = ROWS_TOP;
    for (label, value) in rows {
        canvas.draw_text(LABEL_X, y, label, &label_font, BLACK);
        canvas.draw_text(VALUE_X, y, value, &data_font, DARK_BLUE);
        y += ROW_STEP;
    }

    // Photo box
    canvas.draw_rectangle((750, 220), (920, 420), BLACK, 3);
    canvas.draw_text(790, 310, "PHOTO", &small_font, GRAY);

    // Stamp
    canvas.draw_ellipse((100, 1100), (350, 1300), RED, 5);
    canvas.draw_text(160, 1180, "OFFICIAL\nUSE ONLY", &header_font, RED);

    canvas.into_image()
}

/// Render and save `recognizance_<number>.jpg`
pub fn write_recognizance(ctx: &mut GeneratorContext, person: &Person, address: &str) -> Result<PathBuf> {
    let details = FormDetails::random(&mut ctx.rng, ctx.today)?;
    let skew = ctx.rng.gen_range(-MAX_SKEW..=MAX_SKEW);

    let rows = form_rows(person, address, &details);
    let form = draw_form(&mut ctx.fonts, &rows);
    let scanned = ScanEffect::new(skew, BLUR_SIGMA).apply(&form);

    let path = ctx.output_path(&format!("recognizance_{}.jpg", person.recognizance_no()));
    save_jpeg(&scanned, &path)?;
    debug!("Recognizance skewed by {:.2} degrees", skew);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{generate_person, Role};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    fn details() -> FormDetails {
        FormDetails {
            serial: 12345,
            valid_until: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            reporting_day: "Wednesday",
        }
    }

    #[test]
    fn test_form_rows() {
        let mut rng = StdRng::seed_from_u64(1);
        let person = generate_person(&mut rng, Role::Primary, today()).unwrap();
        let address = "Flat B, 7/F, Block 3, Tai Koo Shing, Causeway Bay, Hong Kong";

        let rows = form_rows(&person, address, &details());
        assert_eq!(rows.len(), 12);

        assert_eq!(rows[0], ("Serial No:".to_string(), "S-12345".to_string()));
        assert_eq!(rows[1].1, person.recognizance_no());
        assert_eq!(rows[3].1, person.display_name());
        assert_eq!(rows[5].1, person.gender().letter());
        assert_eq!(rows[7].1, "Flat B, 7/F, Block 3, Tai Koo Shing");
        assert_eq!(rows[8], (String::new(), ", Causeway Bay, Hong Kong".to_string()));
        assert_eq!(rows[9].1, "20-Mar-2024");
        assert_eq!(rows[11].1, "Every 4 weeks on Wednesday");
    }

    #[test]
    fn test_random_details() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let details = FormDetails::random(&mut rng, today()).unwrap();
            assert!((10_000..=99_999).contains(&details.serial));
            assert!(details.valid_until > today());
            assert!(REPORTING_DAYS.contains(&details.reporting_day));
        }
    }

    #[test]
    fn test_draw_form_with_builtin_font() {
        let mut fonts = FontLoader::new(Vec::new());
        let rows = vec![("Serial No:".to_string(), "S-12345".to_string())];
        let image = draw_form(&mut fonts, &rows);

        assert_eq!(image.dimensions(), (WIDTH, HEIGHT));
        // Value text in dark blue, stamp ring in red
        assert!(image.pixels().any(|p| *p == DARK_BLUE));
        assert!(image.pixels().any(|p| *p == RED));
        assert_eq!(*image.get_pixel(5, 5), BACKGROUND);
    }
}
