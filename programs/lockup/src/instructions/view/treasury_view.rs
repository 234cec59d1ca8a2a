use anchor_lang::prelude::*;
use sablier_common::InvokeContext;

use crate::{state::treasury::Treasury, utils::accounts::load_treasury};

/// See the documentation for [`fn@crate::sablier_lockup::treasury_view`].
pub fn handler(ctx: &InvokeContext) -> Result<Treasury> {
    let (_, treasury) = load_treasury(ctx)?;
    Ok(treasury)
}
