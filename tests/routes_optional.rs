use pathway_router::{EngineKind, HttpMethod, Router, RouterOptions, RouterReadOnly};
use std::sync::Arc;

const ENGINES: [EngineKind; 2] = [EngineKind::Radix, EngineKind::Regex];

fn sealed(engine: EngineKind, routes: &[(HttpMethod, &str)]) -> Arc<RouterReadOnly<str>> {
    let options = RouterOptions::builder()
        .engine(engine)
        .build()
        .expect("options should build");
    let router: Router<str> = Router::new(Some(options));
    for (method, pattern) in routes {
        router
            .add(*method, pattern, vec![Arc::from(*pattern)])
            .unwrap_or_else(|err| panic!("{pattern} should register: {err:?}"));
    }
    router.seal()
}

#[test]
fn optional_parameter_when_present_then_extracted() {
    for engine in ENGINES {
        let ro = sealed(engine, &[(HttpMethod::Get, "/user/:id/:test?")]);

        let found = ro.find(HttpMethod::Get, "/user/1/profile");
        assert_eq!(found.handler.as_deref(), Some("/user/:id/:test?"), "{engine:?}");
        assert_eq!(found.param("id"), Some("1"));
        assert_eq!(found.param("test"), Some("profile"));
    }
}

#[test]
fn optional_parameter_when_absent_then_key_omitted() {
    for engine in ENGINES {
        let ro = sealed(engine, &[(HttpMethod::Get, "/user/:id/:test?")]);

        let found = ro.find(HttpMethod::Get, "/user/1");
        assert!(found.matched(), "{engine:?}");
        assert_eq!(found.param("id"), Some("1"));
        assert!(!found.params.contains_key("test"));
        assert_eq!(found.params.len(), 1);
    }
}

#[test]
fn optional_parameter_when_too_many_segments_then_no_match() {
    for engine in ENGINES {
        let ro = sealed(engine, &[(HttpMethod::Get, "/user/:id/:test?")]);
        assert!(!ro.find(HttpMethod::Get, "/user/1/2/3").matched(), "{engine:?}");
        assert!(!ro.find(HttpMethod::Get, "/user").matched(), "{engine:?}");
    }
}

#[test]
fn optional_parameter_when_followed_by_static_then_consumes_before_skipping() {
    for engine in ENGINES {
        let ro = sealed(engine, &[(HttpMethod::Get, "/docs/:lang?/intro")]);

        let with_lang = ro.find(HttpMethod::Get, "/docs/en/intro");
        assert_eq!(with_lang.param("lang"), Some("en"), "{engine:?}");

        let without_lang = ro.find(HttpMethod::Get, "/docs/intro");
        assert!(without_lang.matched(), "{engine:?}");
        assert_eq!(without_lang.param("lang"), None);
    }
}

#[test]
fn optional_parameter_when_value_equals_following_literal_then_consume_wins() {
    for engine in ENGINES {
        let ro = sealed(engine, &[(HttpMethod::Get, "/docs/:page?/:section?")]);

        let found = ro.find(HttpMethod::Get, "/docs/intro");
        assert_eq!(found.param("page"), Some("intro"), "{engine:?}");
        assert_eq!(found.param("section"), None);
    }
}

#[test]
fn optional_parameter_when_only_segment_then_root_and_value_match() {
    for engine in ENGINES {
        let ro = sealed(engine, &[(HttpMethod::Get, "/:lang?")]);

        let root = ro.find(HttpMethod::Get, "/");
        assert!(root.matched(), "{engine:?}");
        assert!(root.params.is_empty());

        let lang = ro.find(HttpMethod::Get, "/ko");
        assert_eq!(lang.param("lang"), Some("ko"), "{engine:?}");
    }
}
