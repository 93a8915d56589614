use clap::Parser;

/// Parses from the command line arguments on native and from GET parameters on web.
///
/// On web, `?cliquery=04L,17B&clihide-routes` becomes `--query 04L,17B --hide-routes`.
pub fn parse_args<T: Parser>() -> Result<T, clap::Error> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        T::try_parse()
    }
    #[cfg(target_arch = "wasm32")]
    {
        let location_string = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();

        T::try_parse_from(query_to_args(&location_string))
    }
}

/// Turn the `cli`-prefixed query parameters of a URL into command line arguments
#[cfg(any(target_arch = "wasm32", test))]
fn query_to_args(href: &str) -> Vec<String> {
    let mut args = vec!["jeep-route-finder".to_string()];

    let url = match url::Url::parse(href) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("Ignoring GET params of unparsable URL {href:?}: {e}");
            return args;
        }
    };

    for (key, value) in url.query_pairs() {
        let Some(arg_key) = key.strip_prefix("cli") else {
            continue;
        };
        if !arg_key.is_empty() {
            args.push(format!("--{}", arg_key));
        }
        if !value.is_empty() {
            args.push(value.into_owned());
        }
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_to_args() {
        let args =
            query_to_args("https://example.org/?cliquery=04L%2C%2017B&clihide-routes&other=1");
        assert_eq!(
            args,
            vec!["jeep-route-finder", "--query", "04L, 17B", "--hide-routes"]
        );
    }

    #[test]
    fn test_plus_decodes_to_space() {
        let args = query_to_args("https://example.org/?cliquery=04L,+17B#top");
        assert_eq!(args, vec!["jeep-route-finder", "--query", "04L, 17B"]);
    }

    #[test]
    fn test_no_query_string() {
        assert_eq!(query_to_args("https://example.org/"), vec!["jeep-route-finder"]);
    }

    #[test]
    fn test_unparsable_url() {
        assert_eq!(query_to_args(""), vec!["jeep-route-finder"]);
    }
}
