use bookstacks::app::{AppState, FormField};
use bookstacks::domain::{Category, NewBook};
use bookstacks::store::{add_book, catalog_store, IdAllocator};
use bookstacks::ui::Body;
use bookstacks::{handle_event, Action, Event, InputMode, Route, SearchFocus, Theme};

fn state_at(route: Route) -> AppState {
    AppState::new(catalog_store(), Theme::default(), route)
}

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).unwrap()
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, Event::Char(c));
    }
}

#[test]
fn route_changes_rename_the_pane() {
    let mut state = state_at(Route::Home);
    let (render, actions) = send(&mut state, Event::GoBrowse);

    assert!(render);
    assert_eq!(
        actions,
        vec![Action::RenamePane {
            title: "Bookstacks: /books".to_string()
        }]
    );

    let (render, actions) = send(&mut state, Event::GoBrowse);
    assert!(!render);
    assert!(actions.is_empty());
}

#[test]
fn home_genre_tile_opens_its_shelf() {
    let mut state = state_at(Route::Home);
    let fantasy = Category::ALL.iter().position(|c| *c == Category::Fantasy).unwrap();
    for _ in 0..fantasy {
        send(&mut state, Event::KeyDown);
    }
    send(&mut state, Event::Select);

    assert_eq!(state.route, Route::Browse { category: Some("Fantasy".to_string()) });
}

#[test]
fn home_favourite_opens_its_detail_page() {
    let mut state = state_at(Route::Home);
    for _ in 0..Category::ALL.len() {
        send(&mut state, Event::KeyDown);
    }
    send(&mut state, Event::Select);

    assert_eq!(state.route, Route::Detail { id: "101".to_string() });
}

#[test]
fn selection_wraps_on_the_shelves() {
    let mut state = state_at(Route::parse("/books/Fantasy"));
    send(&mut state, Event::KeyUp);
    assert_eq!(state.selected_index, 2);
    send(&mut state, Event::KeyDown);
    assert_eq!(state.selected_index, 0);
}

#[test]
fn back_walks_detail_to_shelves_to_home() {
    let mut state = state_at(Route::Browse { category: None });
    send(&mut state, Event::Select);
    assert_eq!(state.route, Route::Detail { id: "1".to_string() });

    send(&mut state, Event::Back);
    assert_eq!(state.route, Route::Browse { category: None });

    send(&mut state, Event::Back);
    assert_eq!(state.route, Route::Home);
}

#[test]
fn search_filters_and_opens_a_result() {
    let mut state = state_at(Route::Browse { category: None });
    send(&mut state, Event::SearchMode);
    assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Typing));

    type_text(&mut state, "dune");
    let vm = state.compute_viewmodel(30, 100);
    let Body::Shelf(shelf) = vm.body else {
        panic!("expected the shelf body");
    };
    assert_eq!(shelf.items.len(), 1);
    assert_eq!(shelf.items[0].title_highlights, vec![(0, 4)]);
    assert_eq!(vm.header.subtitle, "Browsing 1 book");

    send(&mut state, Event::FocusResults);
    assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
    send(&mut state, Event::Select);
    assert_eq!(state.route, Route::Detail { id: "2".to_string() });
    assert_eq!(state.input_mode, InputMode::Normal);
    assert!(state.search_query.is_empty());
}

#[test]
fn search_is_only_available_on_the_shelves() {
    let mut state = state_at(Route::Home);
    assert_eq!(send(&mut state, Event::SearchMode), (false, vec![]));
    assert_eq!(state.input_mode, InputMode::Normal);
}

#[test]
fn exiting_search_clears_the_query() {
    let mut state = state_at(Route::Browse { category: None });
    send(&mut state, Event::SearchMode);
    type_text(&mut state, "zzz");
    let Body::Shelf(shelf) = state.compute_viewmodel(30, 100).body else {
        panic!("expected the shelf body");
    };
    assert_eq!(shelf.empty_state.map(|e| e.message), Some("Empty Shelf!".to_string()));

    send(&mut state, Event::Back);
    assert_eq!(state.input_mode, InputMode::Normal);
    assert!(state.search_query.is_empty());
    assert_eq!(state.route, Route::Browse { category: None });
}

#[test]
fn genre_cycling_steps_through_shelves() {
    let mut state = state_at(Route::Browse { category: None });
    send(&mut state, Event::NextCategory);
    assert_eq!(state.route.category(), Some(Category::ALL[0].label()));

    let mut state = state_at(Route::Browse { category: None });
    send(&mut state, Event::PreviousCategory);
    assert_eq!(state.route.category(), Some(Category::ALL[5].label()));

    let mut state = state_at(Route::Home);
    assert_eq!(send(&mut state, Event::NextCategory), (false, vec![]));
}

#[test]
fn missing_book_shows_the_fallback_view() {
    let mut state = state_at(Route::Home);
    send(&mut state, Event::Navigate(Route::parse("/book/999")));

    let vm = state.compute_viewmodel(30, 100);
    match vm.body {
        Body::MissingBook(empty) => assert_eq!(empty.message, "Book not found"),
        other => panic!("expected the missing book view, got {other:?}"),
    }
}

#[test]
fn unknown_path_shows_the_not_found_page() {
    let state = state_at(Route::parse("/rare-manuscripts"));
    let vm = state.compute_viewmodel(30, 100);
    match vm.body {
        Body::NotFound(page) => {
            assert_eq!(page.code, "404");
            assert_eq!(page.path, "/rare-manuscripts");
        }
        other => panic!("expected the not found page, got {other:?}"),
    }
}

#[test]
fn close_focus_hides_the_pane() {
    let mut state = state_at(Route::Home);
    assert_eq!(send(&mut state, Event::CloseFocus), (false, vec![Action::CloseFocus]));
}

#[test]
fn outside_catalog_changes_force_a_render() {
    let mut state = state_at(Route::Home);
    let mut ids = IdAllocator::after(&state.catalog());
    add_book(
        &state.store,
        &mut ids,
        NewBook {
            title: "Piranesi".to_string(),
            author: "Susanna Clarke".to_string(),
            category: Category::Fantasy,
            rating: 4.6,
            description: "A house of endless halls.".to_string(),
        },
    )
    .unwrap();

    let (render, _) = send(&mut state, Event::Char('x'));
    assert!(render);

    let (render, _) = send(&mut state, Event::Char('x'));
    assert!(!render);
}

#[test]
fn form_keys_move_between_fields() {
    let mut state = state_at(Route::Home);
    send(&mut state, Event::GoAdd);
    assert_eq!(state.input_mode, InputMode::Form);
    assert_eq!(state.focused_field, FormField::Title);

    send(&mut state, Event::KeyDown);
    assert_eq!(state.focused_field, FormField::Author);
    send(&mut state, Event::PreviousField);
    assert_eq!(state.focused_field, FormField::Title);
}
