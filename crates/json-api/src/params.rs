//! Boundary parsing and validation of path and query parameters.
//!
//! Malformed input is rejected here with `INVALID_INPUT` before any service
//! logic runs.

use salvo::Request;

use storefront_app::{
    TypedId,
    listing::{PageRequest, SortColumn, SortDirection, SortSpec},
};

use crate::envelope::ApiError;

/// Upper bound on `perPage` for the product and review listings.
const MAX_PER_PAGE: u32 = 100;

/// Parse a numeric path parameter; non-numeric input is an invalid-input
/// failure, never a fallback id.
pub(crate) fn path_id<T>(req: &Request, name: &str) -> Result<TypedId<T>, ApiError> {
    let raw: String = req
        .param(name)
        .ok_or_else(|| ApiError::invalid_input(format!("missing path parameter `{name}`")))?;

    raw.parse()
        .map_err(|_| ApiError::invalid_input(format!("`{raw}` is not a valid {name}")))
}

pub(crate) fn opt_query_str(req: &Request, name: &str) -> Option<String> {
    req.query::<String>(name).filter(|value| !value.is_empty())
}

pub(crate) fn opt_query_u32(req: &Request, name: &str) -> Result<Option<u32>, ApiError> {
    let Some(raw) = req.query::<String>(name) else {
        return Ok(None);
    };

    let value: u32 = raw
        .parse()
        .map_err(|_| ApiError::invalid_input(format!("`{raw}` is not a valid {name}")))?;

    Ok(Some(value))
}

pub(crate) fn opt_query_i64(req: &Request, name: &str) -> Result<Option<i64>, ApiError> {
    let Some(raw) = req.query::<String>(name) else {
        return Ok(None);
    };

    let value: i64 = raw
        .parse()
        .map_err(|_| ApiError::invalid_input(format!("`{raw}` is not a valid {name}")))?;

    if value < 0 {
        return Err(ApiError::invalid_input(format!(
            "{name} must not be negative"
        )));
    }

    Ok(Some(value))
}

pub(crate) fn opt_query_id<T>(req: &Request, name: &str) -> Result<Option<TypedId<T>>, ApiError> {
    let Some(raw) = req.query::<String>(name) else {
        return Ok(None);
    };

    let id = raw
        .parse()
        .map_err(|_| ApiError::invalid_input(format!("`{raw}` is not a valid {name}")))?;

    Ok(Some(id))
}

pub(crate) fn opt_query_bool(req: &Request, name: &str) -> Result<Option<bool>, ApiError> {
    let Some(raw) = req.query::<String>(name) else {
        return Ok(None);
    };

    match raw.as_str() {
        "true" | "1" => Ok(Some(true)),
        "false" | "0" => Ok(Some(false)),
        _ => Err(ApiError::invalid_input(format!(
            "`{raw}` is not a valid {name}"
        ))),
    }
}

/// The `category` parameter accepts a comma-separated list and/or the
/// repeated-array form; both normalize to a list of ids.
pub(crate) fn query_id_list<T>(req: &Request, name: &str) -> Result<Vec<TypedId<T>>, ApiError> {
    let mut ids = Vec::new();

    let Some(values) = req.queries().get_vec(name) else {
        return Ok(ids);
    };

    for value in values {
        if value.is_empty() {
            continue;
        }

        for part in value.split(',') {
            let id = part.parse().map_err(|_| {
                ApiError::invalid_input(format!("`{part}` is not a valid {name} id"))
            })?;

            ids.push(id);
        }
    }

    Ok(ids)
}

/// Pagination is applied only when both `page` and `perPage` are present;
/// omitting either one returns the full result set.
pub(crate) fn pagination(req: &Request) -> Result<Option<PageRequest>, ApiError> {
    let page = bounded(opt_query_u32(req, "page")?, "page", 1, u32::MAX)?;
    let per_page = bounded(opt_query_u32(req, "perPage")?, "perPage", 1, MAX_PER_PAGE)?;

    Ok(page.zip(per_page).map(|(page, per_page)| PageRequest::new(page, per_page)))
}

/// Pagination with the listing defaults of page 1 and ten items.
pub(crate) fn pagination_or_default(req: &Request) -> Result<PageRequest, ApiError> {
    let page = bounded(opt_query_u32(req, "page")?, "page", 1, u32::MAX)?.unwrap_or(1);
    let per_page =
        bounded(opt_query_u32(req, "perPage")?, "perPage", 1, MAX_PER_PAGE)?.unwrap_or(10);

    Ok(PageRequest::new(page, per_page))
}

fn bounded(
    value: Option<u32>,
    name: &str,
    min: u32,
    max: u32,
) -> Result<Option<u32>, ApiError> {
    match value {
        Some(value) if value < min || value > max => Err(ApiError::invalid_input(format!(
            "{name} must be between {min} and {max}"
        ))),
        other => Ok(other),
    }
}

/// Parse the `sort` parameter against an entity's allow-list, falling back
/// to `created_at:desc`.
pub(crate) fn sort_spec<C>(req: &Request, default_column: C) -> Result<SortSpec<C>, ApiError>
where
    C: SortColumn,
{
    let Some(raw) = opt_query_str(req, "sort") else {
        return Ok(SortSpec::single(default_column, SortDirection::Desc));
    };

    SortSpec::parse(&raw).map_err(|error| ApiError::invalid_input(error.to_string()))
}
