//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::Depot;

use crate::{envelope::ApiError, state::State};

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn app_state(&self) -> Result<&Arc<State>, ApiError>;
}

impl DepotExt for Depot {
    fn app_state(&self) -> Result<&Arc<State>, ApiError> {
        self.obtain::<Arc<State>>()
            .map_err(|_ignored| ApiError::internal())
    }
}
