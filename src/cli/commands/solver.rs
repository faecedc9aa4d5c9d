use crate::errors::AppResult;
use crate::ui::messages::{SOLVER_STUB, info};

/// Handle the `solver` subcommand
pub fn handle() -> AppResult<()> {
    info(SOLVER_STUB);
    Ok(())
}
