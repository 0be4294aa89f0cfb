/// Adds or replaces a query parameter in `url`.
///
/// Matches the historic behavior of the web client: all other parameters
/// keep their original order, the added/replaced parameter goes to the end
/// of the query string, and a URL fragment is carried over by attaching it
/// to the new parameter's value (it survives exactly once). No escaping is
/// performed; callers pass values from a closed set. Known limitation, kept
/// on purpose to not change observable URLs.
pub fn update_url_parameter(url: &str, param: &str, value: &str) -> String {
    let (base, query) = match url.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (url, None),
    };
    let (base, query, anchor) = match query {
        Some(query) => match query.split_once('#') {
            Some((query, anchor)) => (base, Some(query), Some(anchor)),
            None => (base, Some(query), None),
        },
        None => match base.split_once('#') {
            Some((base, anchor)) => (base, None, Some(anchor)),
            None => (base, None, None),
        },
    };

    let kept: Vec<&str> = query
        .map(|query| {
            query
                .split('&')
                .filter(|pair| !pair.is_empty() && pair.split('=').next() != Some(param))
                .collect()
        })
        .unwrap_or_default();

    let mut new_value = value.to_string();
    if let Some(anchor) = anchor {
        new_value.push('#');
        new_value.push_str(anchor);
    }

    let mut new_query = kept.join("&");
    if !new_query.is_empty() {
        new_query.push('&');
    }
    format!("{base}?{new_query}{param}={new_value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_parameter_to_bare_url() {
        assert_eq!(
            update_url_parameter("https://x/", "lang", "de"),
            "https://x/?lang=de"
        );
    }

    #[test]
    fn replace_moves_parameter_to_the_end() {
        assert_eq!(
            update_url_parameter("https://x/?lang=en&zoom=11", "lang", "de"),
            "https://x/?zoom=11&lang=de"
        );
    }

    #[test]
    fn idempotent_replacement() {
        let url = update_url_parameter("https://x/?a=1", "lang", "en");
        let url = update_url_parameter(&url, "lang", "de");
        assert_eq!(url, "https://x/?a=1&lang=de");
        assert_eq!(url.matches("lang=").count(), 1);
    }

    #[test]
    fn fragment_is_attached_to_the_new_value() {
        assert_eq!(
            update_url_parameter("https://x/?a=1#frag", "lang", "de"),
            "https://x/?a=1&lang=de#frag"
        );
    }

    #[test]
    fn fragment_without_query() {
        assert_eq!(
            update_url_parameter("https://x/#frag", "lang", "de"),
            "https://x/?lang=de#frag"
        );
    }

    #[test]
    fn fragment_survives_exactly_once() {
        let url = update_url_parameter("https://x/?a=1&lang=en#frag", "lang", "de");
        assert_eq!(url, "https://x/?a=1&lang=de#frag");
        assert_eq!(url.matches('#').count(), 1);
    }
}
