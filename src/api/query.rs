//! Query-string helpers shared by every request config.
//!
//! Parameters are kept as an ordered list of `(key, value)` pairs and handed
//! to reqwest's `RequestBuilder::query`, which takes care of percent-encoding.

/// Ordered query parameters for a single request.
pub type QueryParams = Vec<(&'static str, String)>;

/// Add `key=value` if the value is present and non-empty.
pub fn add_to_query(params: &mut QueryParams, key: &'static str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        params.push((key, value.to_string()));
    }
}

/// Add `key=v1,v2,...` if the list is non-empty. Caller order is kept.
pub fn add_comma_separated_list_to_query<S>(params: &mut QueryParams, key: &'static str, values: &[S])
where
    S: AsRef<str>,
{
    if values.is_empty() {
        return;
    }

    let joined = values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(",");
    params.push((key, joined));
}
