use bookstacks::Route;

#[test]
fn known_paths_parse() {
    assert_eq!(Route::parse("/"), Route::Home);
    assert_eq!(Route::parse(""), Route::Home);
    assert_eq!(Route::parse("/books"), Route::Browse { category: None });
    assert_eq!(
        Route::parse("/books/Sci-Fi"),
        Route::Browse { category: Some("Sci-Fi".to_string()) }
    );
    assert_eq!(Route::parse("/book/101"), Route::Detail { id: "101".to_string() });
    assert_eq!(Route::parse("/add"), Route::Add);
}

#[test]
fn segments_are_percent_decoded() {
    assert_eq!(
        Route::parse("/books/Non%2DFiction"),
        Route::Browse { category: Some("Non-Fiction".to_string()) }
    );
}

#[test]
fn unmatched_paths_keep_their_text() {
    let route = Route::parse("/shelves/everything");
    assert_eq!(route, Route::NotFound { path: "/shelves/everything".to_string() });
    assert_eq!(route.path(), "/shelves/everything");
    assert_eq!(route.section(), "Lost");
}

#[test]
fn paths_round_trip_through_display() {
    for path in ["/", "/books", "/books/Fantasy", "/book/7", "/add"] {
        let route: Route = path.parse().unwrap();
        assert_eq!(route.to_string(), path);
    }
}

#[test]
fn parents_lead_back_toward_home() {
    let detail = Route::Detail { id: "2".to_string() };
    assert_eq!(detail.parent(), Route::Browse { category: None });
    assert_eq!(Route::parse("/books/Mystery").parent(), Route::Browse { category: None });
    assert_eq!(Route::parse("/books").parent(), Route::Home);
    assert_eq!(Route::Add.parent(), Route::Home);
    assert_eq!(Route::parse("/nowhere").parent(), Route::Home);
}
