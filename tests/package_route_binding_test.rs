use package_route::domain::ports::{Navigator, RouteSource};
use package_route::{get_package_route, use_package_route, MemoryRouter, PackageRouteBinding, RouteError};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_binding_follows_navigation() {
    let router = MemoryRouter::new();
    let route = use_package_route(&router);

    assert_eq!(route.package_name.get(), "");
    assert_eq!(route.requested_version.get(), None);

    router.navigate(&get_package_route("@nuxt/kit", Some("1.0.0"))).unwrap();
    assert_eq!(route.package_name.get(), "@nuxt/kit");
    assert_eq!(route.requested_version.get().as_deref(), Some("1.0.0"));

    router.navigate_to("/axios@1.13.3").unwrap();
    let identity = route.identity();
    assert_eq!(identity.package_name, "axios");
    assert_eq!(identity.requested_version.as_deref(), Some("1.13.3"));
}

#[tokio::test]
async fn test_changed_wakes_on_navigation() {
    let router = Arc::new(MemoryRouter::new());
    let route = use_package_route(&*router);
    let mut version = route.requested_version.clone();

    let navigator = Arc::clone(&router);
    let handle = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        navigator.navigate_to("/nuxt/v/4.2.0").unwrap();
    });

    tokio::time::timeout(Duration::from_secs(1), version.changed())
        .await
        .expect("navigation should wake the waiter")
        .unwrap();
    assert_eq!(version.get().as_deref(), Some("4.2.0"));

    handle.await.unwrap();
}

#[tokio::test]
async fn test_changed_reports_closed_router() {
    let router = MemoryRouter::new();
    let mut binding = PackageRouteBinding::from_source(&router);
    drop(router);

    assert!(matches!(binding.changed().await, Err(RouteError::RouterClosed)));
    // the last value stays readable
    assert_eq!(binding.package_name(), "");
}

#[tokio::test]
async fn test_repeated_navigation_does_not_recompute() {
    let router = MemoryRouter::new();
    let route = use_package_route(&router);

    for _ in 0..3 {
        router.navigate(&get_package_route("nuxt", None)).unwrap();
        assert_eq!(route.package_name.get(), "nuxt");
    }
    assert_eq!(route.binding().recomputations(), 1);

    router.navigate(&get_package_route("nuxt", Some("3.0.0"))).unwrap();
    assert_eq!(route.package_name.get(), "nuxt");
    assert_eq!(route.requested_version.get().as_deref(), Some("3.0.0"));
    assert_eq!(route.binding().recomputations(), 2);
}

#[tokio::test]
async fn test_concurrent_readers_see_consistent_pairs() {
    let router = Arc::new(MemoryRouter::new());
    let route = use_package_route(&*router);

    let mut readers = Vec::new();
    for _ in 0..4 {
        let route = route.clone();
        readers.push(tokio::spawn(async move {
            for _ in 0..200 {
                let identity = route.identity();
                // every published route pairs `pkg-N` with version `N`
                if let Some(version) = &identity.requested_version {
                    assert_eq!(identity.package_name, format!("pkg-{}", version));
                }
                tokio::task::yield_now().await;
            }
        }));
    }

    for n in 0..200 {
        let name = format!("pkg-{}", n);
        router
            .navigate(&get_package_route(&name, Some(&n.to_string())))
            .unwrap();
        tokio::task::yield_now().await;
    }

    for reader in readers {
        reader.await.unwrap();
    }
}

#[test]
fn test_subscribe_sees_current_segments() {
    let router = MemoryRouter::with_segments(vec!["@nuxt".to_string(), "kit".to_string()]);
    let receiver = router.subscribe();
    assert_eq!(*receiver.borrow(), vec!["@nuxt", "kit"]);
}
