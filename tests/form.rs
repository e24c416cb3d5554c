use bookstacks::app::{AppState, FormField};
use bookstacks::store::catalog_store;
use bookstacks::ui::Body;
use bookstacks::{handle_event, Action, Category, Event, Route, Theme};

fn form_state() -> AppState {
    AppState::new(catalog_store(), Theme::default(), Route::Add)
}

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).unwrap()
}

fn fill(state: &mut AppState, title: &str, author: &str, rating: &str, description: &str) {
    for (field, text) in [
        (FormField::Title, title),
        (FormField::Author, author),
        (FormField::Rating, rating),
        (FormField::Description, description),
    ] {
        state.focused_field = field;
        for c in text.chars() {
            send(state, Event::Char(c));
        }
    }
    state.focused_field = FormField::Category;
    send(state, Event::NextCategory);
    send(state, Event::NextCategory);
}

#[test]
fn out_of_range_rating_is_rejected() {
    let mut state = form_state();
    let before = state.catalog().len();
    fill(&mut state, "Dune Messiah", "Frank Herbert", "6", "The sequel.");

    let (render, actions) = send(&mut state, Event::Submit);

    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(state.catalog().len(), before);
    assert_eq!(state.route, Route::Add);
    assert_eq!(state.form_errors.get(FormField::Rating), Some("Rating must be between 0 and 5."));
    assert_eq!(state.form_errors.len(), 1);
    assert_eq!(state.focused_field, FormField::Rating);
}

#[test]
fn valid_submission_adds_the_book_and_opens_the_shelves() {
    let mut state = form_state();
    let before = state.catalog().len();
    fill(&mut state, "Dune Messiah", "Frank Herbert", "4.5", "The sequel.");
    assert_eq!(state.form.category, Category::ALL[1].label());

    let (render, actions) = send(&mut state, Event::Submit);

    assert!(render);
    assert_eq!(actions, vec![Action::RenamePane { title: "Bookstacks: /books".to_string() }]);
    assert_eq!(state.catalog().len(), before + 1);
    assert_eq!(state.route, Route::Browse { category: None });

    let catalog = state.catalog();
    let newest = &catalog[0];
    assert_eq!(newest.title, "Dune Messiah");
    assert_eq!(newest.id.0, 603);
    assert!((newest.rating - 4.5).abs() < f64::EPSILON);
}

#[test]
fn empty_submission_flags_every_field() {
    let mut state = form_state();
    send(&mut state, Event::Submit);

    assert_eq!(state.form_errors.len(), FormField::ALL.len());
    assert_eq!(state.focused_field, FormField::Title);

    let Body::Form(form) = state.compute_viewmodel(40, 100).body else {
        panic!("expected the form body");
    };
    assert!(form.fields.iter().all(|field| field.error.is_some()));
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let mut state = form_state();
    send(&mut state, Event::Submit);

    send(&mut state, Event::Char('K'));

    assert!(!state.form_errors.contains(FormField::Title));
    assert!(state.form_errors.contains(FormField::Author));
}

#[test]
fn whitespace_only_text_counts_as_missing() {
    let mut state = form_state();
    fill(&mut state, "   ", "Frank Herbert", "3", "The sequel.");
    send(&mut state, Event::Submit);

    assert_eq!(state.form_errors.get(FormField::Title), Some("Every book needs a title!"));
}

#[test]
fn form_is_reset_when_entering_again() {
    let mut state = form_state();
    fill(&mut state, "Half", "Done", "2", "Draft");
    send(&mut state, Event::Back);
    assert_eq!(state.route, Route::Home);

    send(&mut state, Event::GoAdd);
    assert!(state.form.title.is_empty());
    assert!(state.form_errors.is_empty());
}
