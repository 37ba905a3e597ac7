use std::io::{self, Write};

use services::CatalogService;
use storage::repository::QuestionStore;

/// Load every catalog entry and write one line per set.
///
/// Returns how many sets failed to load or were empty.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub async fn check_sets(
    store: &dyn QuestionStore,
    catalog: &CatalogService,
    out: &mut impl Write,
) -> io::Result<usize> {
    let mut failed = 0;
    for set in catalog.all_refs() {
        match store.load_set(set).await {
            Ok(questions) if questions.is_empty() => {
                failed += 1;
                writeln!(out, "{set}: no questions")?;
            }
            Ok(questions) => {
                writeln!(out, "{set}: {} questions", questions.len())?;
            }
            Err(err) => {
                failed += 1;
                tracing::warn!(%set, error = %err, "set failed to load");
                writeln!(out, "{set}: error: {err}")?;
            }
        }
    }
    Ok(failed)
}
