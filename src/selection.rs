//! Selection list controller.
//!
//! Pure operations over an ordered stage list. Each returns a new list for
//! the caller to store back with `ConfigData::set_stages`; the input is never
//! modified. The same operations serve both starters and counterpicks.

use tracing::debug;

use crate::error::{Result, SelectionError};
use crate::stage::{Stage, StageCatalog};

/// Maximum entries in either list when edited through this controller
pub const MAX_STAGES: usize = 7;

/// Whether another stage may be appended to `current`.
pub fn can_add(current: &[Stage]) -> bool {
    current.len() < MAX_STAGES
}

/// Append the first catalog stage to a copy of `current`.
pub fn add<C>(catalog: &C, current: &[Stage]) -> Result<Vec<Stage>>
where
    C: StageCatalog + ?Sized,
{
    if !can_add(current) {
        return Err(SelectionError::ListFull { max: MAX_STAGES }.into());
    }

    let first = catalog.first()?.ok_or(SelectionError::EmptyCatalog)?;
    let stage = catalog
        .get_by_display(&first.display_name)?
        .ok_or_else(|| SelectionError::UnknownDisplayName(first.display_name.clone()))?;

    let mut stages = current.to_vec();
    stages.push(stage);
    Ok(stages)
}

/// Copy of `current` without the entry at `index`.
pub fn remove_at(current: &[Stage], index: usize) -> Result<Vec<Stage>> {
    check_index(current, index)?;
    debug!("Removing stage at index {}", index);

    Ok(current
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, stage)| stage.clone())
        .collect())
}

/// Copy of `current` with position `index` set to the stage named `display_name`.
pub fn replace_at<C>(
    catalog: &C,
    current: &[Stage],
    index: usize,
    display_name: &str,
) -> Result<Vec<Stage>>
where
    C: StageCatalog + ?Sized,
{
    check_index(current, index)?;
    let stage = catalog
        .get_by_display(display_name)?
        .ok_or_else(|| SelectionError::UnknownDisplayName(display_name.to_string()))?;

    let mut stages = current.to_vec();
    stages[index] = stage;
    Ok(stages)
}

/// Display names offered when choosing a stage, in catalog order.
pub fn options<C>(catalog: &C) -> Result<Vec<String>>
where
    C: StageCatalog + ?Sized,
{
    Ok(catalog
        .list()?
        .into_iter()
        .map(|stage| stage.display_name)
        .collect())
}

fn check_index(current: &[Stage], index: usize) -> Result<()> {
    if index >= current.len() {
        return Err(SelectionError::IndexOutOfRange {
            index,
            len: current.len(),
        }
        .into());
    }
    Ok(())
}
