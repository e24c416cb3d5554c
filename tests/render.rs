use bookstacks::app::AppState;
use bookstacks::store::catalog_store;
use bookstacks::ui::{render, Body};
use bookstacks::{handle_event, Event, Route, Theme};

fn frame(route: Route, rows: usize, cols: usize) -> String {
    let state = AppState::new(catalog_store(), Theme::default(), route);
    render(&state, rows, cols)
}

#[test]
fn every_page_carries_nav_and_credit() {
    for route in [
        Route::Home,
        Route::parse("/books"),
        Route::parse("/book/5"),
        Route::parse("/book/0"),
        Route::Add,
        Route::parse("/missing"),
    ] {
        let out = frame(route.clone(), 30, 100);
        assert!(out.contains("Sushh.lib"), "no brand on {route}");
        assert!(out.contains("Sushh Online Library System"), "no credit on {route}");
    }
}

#[test]
fn home_shows_hero_and_favourites() {
    let out = frame(Route::Home, 40, 120);
    assert!(out.contains("Find your next favorite story."));
    assert!(out.contains("Explore 18 curated titles"));
    assert!(out.contains("Readers' Favourites"));
    assert!(out.contains("Project Hail Mary"));
}

#[test]
fn shelf_lists_books_under_column_headers() {
    let out = frame(Route::parse("/books/Mystery"), 30, 100);
    assert!(out.contains("Mystery Collection"));
    assert!(out.contains("Browsing 3 books"));
    assert!(out.contains("TITLE"));
    assert!(out.contains("Gone Girl"));
    assert!(!out.contains("Dune"));
}

#[test]
fn detail_page_shows_the_record() {
    let out = frame(Route::parse("/book/2"), 30, 100);
    assert!(out.contains("by Frank Herbert"));
    assert!(out.contains("4.8/5.0"));
    assert!(out.contains("Synopsis"));
}

#[test]
fn missing_book_page_offers_a_way_back() {
    let out = frame(Route::parse("/book/abc"), 30, 100);
    assert!(out.contains("Book not found"));
    assert!(out.contains("Press Esc to go back to the shelves."));
}

#[test]
fn not_found_page_names_the_path() {
    let out = frame(Route::parse("/rare-manuscripts"), 30, 100);
    assert!(out.contains("404"));
    assert!(out.contains("/rare-manuscripts"));
    assert!(out.contains("Lost in the stacks?"));
}

#[test]
fn form_page_shows_errors_after_a_failed_submit() {
    let mut state = AppState::new(catalog_store(), Theme::default(), Route::Add);
    handle_event(&mut state, &Event::Submit).unwrap();

    let out = render(&state, 30, 100);
    assert!(out.contains("Contribute a Book"));
    assert!(out.contains("Every book needs a title!"));
    assert!(out.contains("Add to Collection"));
}

#[test]
fn shelf_window_keeps_the_selection_visible() {
    let mut state = AppState::new(catalog_store(), Theme::default(), Route::parse("/books"));
    for _ in 0..15 {
        handle_event(&mut state, &Event::KeyDown).unwrap();
    }

    let vm = state.compute_viewmodel(14, 100);
    let Body::Shelf(shelf) = vm.body else {
        panic!("expected the shelf body");
    };
    assert_eq!(shelf.items.len(), 5);
    assert!(shelf.items[shelf.selected_index].is_selected);
}

#[test]
fn tiny_terminals_do_not_panic() {
    for route in [Route::Home, Route::parse("/books"), Route::parse("/book/2"), Route::Add] {
        let _ = frame(route, 3, 10);
    }
}
