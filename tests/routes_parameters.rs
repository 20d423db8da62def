use pathway_router::registry::RegistryError;
use pathway_router::{EngineKind, HttpMethod, Router, RouterError, RouterOptions, RouterReadOnly};
use std::sync::Arc;

const ENGINES: [EngineKind; 2] = [EngineKind::Radix, EngineKind::Regex];

fn router(engine: EngineKind) -> Router<str> {
    let options = RouterOptions::builder()
        .engine(engine)
        .build()
        .expect("options should build");
    Router::new(Some(options))
}

fn sealed(engine: EngineKind, routes: &[(HttpMethod, &str)]) -> Arc<RouterReadOnly<str>> {
    let router = router(engine);
    for (method, pattern) in routes {
        router
            .add(*method, pattern, vec![Arc::from(*pattern)])
            .unwrap_or_else(|err| panic!("{pattern} should register: {err:?}"));
    }
    router.seal()
}

#[test]
fn dynamic_route_when_segment_present_then_extracts_value() {
    for engine in ENGINES {
        let ro = sealed(engine, &[(HttpMethod::Get, "/users/:id")]);

        let found = ro.find(HttpMethod::Get, "/users/42");
        assert_eq!(found.handler.as_deref(), Some("/users/:id"), "{engine:?}");
        assert_eq!(found.param("id"), Some("42"));
        assert_eq!(found.params.len(), 1);
    }
}

#[test]
fn dynamic_route_when_segment_missing_then_no_match() {
    for engine in ENGINES {
        let ro = sealed(engine, &[(HttpMethod::Get, "/users/:id")]);
        assert!(!ro.find(HttpMethod::Get, "/users").matched(), "{engine:?}");
        assert!(!ro.find(HttpMethod::Get, "/users/1/extra").matched(), "{engine:?}");
    }
}

#[test]
fn dynamic_route_when_several_parameters_then_all_extracted() {
    for engine in ENGINES {
        let ro = sealed(
            engine,
            &[(HttpMethod::Get, "/orgs/:org/repos/:repo/issues/:number")],
        );

        let found = ro.find(HttpMethod::Get, "/orgs/acme/repos/router/issues/7");
        assert_eq!(found.param("org"), Some("acme"), "{engine:?}");
        assert_eq!(found.param("repo"), Some("router"));
        assert_eq!(found.param("number"), Some("7"));
    }
}

#[test]
fn static_route_when_competing_with_dynamic_then_static_wins_on_radix() {
    let ro = sealed(
        EngineKind::Radix,
        &[(HttpMethod::Get, "/users/:id"), (HttpMethod::Get, "/users/me")],
    );

    let me = ro.find(HttpMethod::Get, "/users/me");
    assert_eq!(me.handler.as_deref(), Some("/users/me"));
    assert!(me.params.is_empty());

    let other = ro.find(HttpMethod::Get, "/users/you");
    assert_eq!(other.handler.as_deref(), Some("/users/:id"));
    assert_eq!(other.param("id"), Some("you"));
}

#[test]
fn regex_engine_when_routes_overlap_then_first_registered_wins() {
    let ro = sealed(
        EngineKind::Regex,
        &[(HttpMethod::Get, "/users/:id"), (HttpMethod::Get, "/users/me")],
    );

    let me = ro.find(HttpMethod::Get, "/users/me");
    assert_eq!(me.handler.as_deref(), Some("/users/:id"));
    assert_eq!(me.param("id"), Some("me"));
}

#[test]
fn static_branch_when_dead_end_then_backtracks_into_dynamic() {
    for engine in ENGINES {
        let ro = sealed(
            engine,
            &[(HttpMethod::Get, "/a/b/c"), (HttpMethod::Get, "/a/:x/d")],
        );

        let found = ro.find(HttpMethod::Get, "/a/b/d");
        assert_eq!(found.handler.as_deref(), Some("/a/:x/d"), "{engine:?}");
        assert_eq!(found.param("x"), Some("b"));

        let exact = ro.find(HttpMethod::Get, "/a/b/c");
        assert_eq!(exact.handler.as_deref(), Some("/a/b/c"));
        assert!(exact.params.is_empty());
    }
}

#[test]
fn parameter_slot_when_named_differently_then_returns_conflict() {
    for engine in ENGINES {
        let router = router(engine);
        router
            .add(HttpMethod::Get, "/a/:x", vec![Arc::from("first")])
            .expect("first route should register");

        let err = router.add(HttpMethod::Get, "/a/:y", vec![Arc::from("second")]);
        match err.expect_err("expected conflict") {
            RouterError::Registry(RegistryError::RouteConflict {
                segment_index,
                existing,
                incoming,
                ..
            }) => {
                assert_eq!(segment_index, 1, "{engine:?}");
                assert_eq!(existing, "x");
                assert_eq!(incoming, "y");
            }
            other => panic!("unexpected error on {engine:?}: {other:?}"),
        }

        // the failed registration left nothing behind
        assert_eq!(router.len(), 1);
        let ro = router.seal();
        assert_eq!(ro.find(HttpMethod::Get, "/a/1").param("x"), Some("1"));
    }
}

#[test]
fn parameter_slot_when_conflict_in_other_method_then_still_rejected() {
    for engine in ENGINES {
        let router = router(engine);
        router
            .add(HttpMethod::Get, "/items/:id", vec![Arc::from("get")])
            .expect("first route should register");

        let err = router.add(HttpMethod::Post, "/items/:item/tags", vec![Arc::from("post")]);
        assert!(
            matches!(
                err,
                Err(RouterError::Registry(RegistryError::RouteConflict { .. }))
            ),
            "{engine:?}: {err:?}"
        );
    }
}

#[test]
fn parameter_slot_when_alias_allowed_then_each_route_keeps_its_names() {
    for engine in ENGINES {
        let options = RouterOptions::builder()
            .engine(engine)
            .allow_param_alias(true)
            .build()
            .expect("options should build");
        let router: Router<str> = Router::new(Some(options));
        router
            .add(HttpMethod::Get, "/items/:id", vec![Arc::from("get")])
            .expect("first route should register");
        router
            .add(HttpMethod::Get, "/items/:item/tags", vec![Arc::from("tags")])
            .expect("aliased route should register");
        let ro = router.seal();

        let plain = ro.find(HttpMethod::Get, "/items/5");
        assert_eq!(plain.param("id"), Some("5"), "{engine:?}");
        assert_eq!(plain.param("item"), None);

        let tags = ro.find(HttpMethod::Get, "/items/5/tags");
        assert_eq!(tags.param("item"), Some("5"), "{engine:?}");
        assert_eq!(tags.param("id"), None);
    }
}

#[test]
fn duplicate_route_when_overwrite_enabled_then_last_chain_wins() {
    for engine in ENGINES {
        let router = router(engine);
        let first: Arc<str> = Arc::from("first");
        let second: Arc<str> = Arc::from("second");
        router
            .add(HttpMethod::Get, "/dup/:id", vec![first])
            .expect("first registration should succeed");
        router
            .add(HttpMethod::Get, "/dup/:id/", vec![second.clone()])
            .expect("overwrite should succeed");
        assert_eq!(router.len(), 1, "{engine:?}");

        let ro = router.seal();
        let found = ro.find(HttpMethod::Get, "/dup/9");
        let handler = found.handler.expect("route should match");
        assert!(Arc::ptr_eq(&handler, &second), "{engine:?}");
        assert_eq!(ro.metrics().total_routes_overwritten, 1);
    }
}

#[test]
fn duplicate_route_when_overwrite_disabled_then_returns_error() {
    for engine in ENGINES {
        let options = RouterOptions::builder()
            .engine(engine)
            .overwrite_method(false)
            .build()
            .expect("options should build");
        let router: Router<str> = Router::new(Some(options));
        router
            .add(HttpMethod::Put, "/dup", vec![Arc::from("first")])
            .expect("first registration should succeed");

        match router
            .add(HttpMethod::Put, "/dup", vec![Arc::from("second")])
            .expect_err("expected duplicate error")
        {
            RouterError::Registry(RegistryError::DuplicateRoute { method, pattern }) => {
                assert_eq!(method, HttpMethod::Put, "{engine:?}");
                assert_eq!(pattern, "/dup");
            }
            other => panic!("unexpected error on {engine:?}: {other:?}"),
        }

        router
            .add(HttpMethod::Get, "/dup", vec![Arc::from("other method")])
            .expect("another method on the same pattern is not a duplicate");
    }
}
