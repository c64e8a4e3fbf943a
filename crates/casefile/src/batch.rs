//! Batch driver

use crate::context::GeneratorContext;
use crate::entity::generate_family;
use crate::render::{write_case_note, write_recognizance, write_tenancy};
use crate::Result;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Families generated by a default run
pub const FAMILY_IDS: [u32; 2] = [101, 102];

/// Generate every artifact for each family, in order
///
/// Creates the output directory first. Stops at the first error; files
/// already written stay on disk. Returns the paths written.
pub fn run_batch(ctx: &mut GeneratorContext, family_ids: &[u32]) -> Result<Vec<PathBuf>> {
    println!("Generating cohesive case files in {}...", ctx.output_dir().display());
    std::fs::create_dir_all(ctx.output_dir())?;

    let mut written = Vec::new();
    for &id in family_ids {
        let family = generate_family(&mut ctx.rng, id, ctx.today)?;
        println!(
            "\n--- Processing Family {}: {} ---",
            family.id(),
            family.primary().display_name()
        );

        for person in family.members() {
            let path = write_recognizance(ctx, person, family.address())?;
            println!("Generated JPG: {}", file_name(&path));
            written.push(path);
        }

        let path = write_tenancy(ctx, &family)?;
        println!("Generated PDF: {}", file_name(&path));
        written.push(path);

        let path = write_case_note(ctx, &family)?;
        println!("Generated DOCX: {}", file_name(&path));
        written.push(path);

        debug!("Family {} done with {} dependent(s)", id, family.dependents().len());
    }

    println!("\nBatch generation complete.");
    info!("Wrote {} files to {}", written.len(), ctx.output_dir().display());
    Ok(written)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
