#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use crate::Route;

    #[test]
    fn test_component_route_parses() {
        let route = Route::from_str("/components/button").unwrap();
        assert_eq!(route, Route::ComponentPreview { name: "button".to_string() });
        assert_eq!(route.component_slug(), Some("button"));
    }

    #[test]
    fn test_landing_route_round_trip() {
        assert_eq!(Route::from_str("/").unwrap(), Route::Landing {});
        assert_eq!(Route::Landing {}.to_string(), "/");
        assert_eq!(Route::Landing {}.component_slug(), None);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route = Route::from_str("/docs/getting-started").unwrap();
        assert_eq!(
            route,
            Route::PageNotFound {
                segments: vec!["docs".to_string(), "getting-started".to_string()],
            }
        );
    }
}
