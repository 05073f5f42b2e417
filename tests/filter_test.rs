use loglight::{FilterMode, PackageFilter, PackageNameFilter, PermissiveFilter};
use std::sync::Arc;
use std::thread;

#[test]
fn test_whitelist() {
    let filter = PackageNameFilter::new(["test"], true);

    assert!(filter.filter("test"));
    assert!(!filter.filter("other"));
}

#[test]
fn test_blacklist() {
    let filter = PackageNameFilter::new(["test"], false);

    assert!(!filter.filter("test"));
    assert!(filter.filter("other"));
}

#[test]
fn test_modes_are_inverse() {
    let names = ["app::db", "app::net", "vendor"];
    let whitelist = PackageNameFilter::with_mode(names, FilterMode::Whitelist);
    let blacklist = PackageNameFilter::with_mode(names, FilterMode::Blacklist);

    for origin in ["app::db", "app::net", "vendor", "app", "", "app::db::pool"] {
        assert_ne!(
            whitelist.filter(origin),
            blacklist.filter(origin),
            "origin: {origin}"
        );
    }
}

#[test]
fn test_order_and_duplicates_irrelevant() {
    let a = PackageNameFilter::whitelist(["x", "y", "z"]);
    let b = PackageNameFilter::whitelist(["z", "x", "y", "x"]);

    assert_eq!(a.len(), b.len());
    for origin in ["x", "y", "z", "w"] {
        assert_eq!(a.filter(origin), b.filter(origin));
    }
}

#[test]
fn test_shared_filter_across_threads() {
    let filters: Vec<Arc<dyn PackageFilter>> = vec![
        Arc::new(PermissiveFilter::new()),
        Arc::new(PackageNameFilter::blacklist(["blocked"])),
    ];

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let filters = filters.clone();
            thread::spawn(move || {
                let origin = if i % 2 == 0 { "blocked" } else { "open" };
                filters.iter().map(|f| f.filter(origin)).collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let results = handle.join().unwrap();
        assert!(results[0]);
        assert_eq!(results[1], i % 2 != 0);
    }
}
