use bookstacks::domain::{seed_books, Book, BookId, Category, NewBook};
use bookstacks::store::{add_book, catalog_store, CatalogAction, CatalogReducer, IdAllocator, Reducer, Store, Transition};
use std::cell::Cell;
use std::rc::Rc;

fn new_book(title: &str) -> NewBook {
    NewBook {
        title: title.to_string(),
        author: "Ursula K. Le Guin".to_string(),
        category: Category::SciFi,
        rating: 4.6,
        description: "A winter world.".to_string(),
    }
}

#[test]
fn adds_prepend_newest_first() {
    let store = catalog_store();
    let mut ids = IdAllocator::after(&store.snapshot());
    let before = store.snapshot().len();

    let first = add_book(&store, &mut ids, new_book("The Dispossessed")).unwrap();
    let second = add_book(&store, &mut ids, new_book("The Lathe of Heaven")).unwrap();
    let third = add_book(&store, &mut ids, new_book("The Left Hand of Darkness")).unwrap();

    let books = store.snapshot();
    assert_eq!(books.len(), before + 3);
    assert_eq!(books[0].id, third);
    assert_eq!(books[1].id, second);
    assert_eq!(books[2].id, first);
    assert_eq!(books[0].title, "The Left Hand of Darkness");
    assert!(books[0].cover.contains("text=The%20Left%20Hand%20of%20Darkness"));
}

#[test]
fn init_after_construction_is_identity() {
    let store = catalog_store();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let _subscription = store.subscribe(move || counter.set(counter.get() + 1));

    let before = store.snapshot();
    assert!(!store.dispatch(CatalogAction::Init));

    assert!(Rc::ptr_eq(&before, &store.snapshot()));
    assert_eq!(calls.get(), 0);
}

#[test]
fn each_subscriber_runs_once_per_change() {
    let store = catalog_store();
    let a = Rc::new(Cell::new(0));
    let b = Rc::new(Cell::new(0));
    let (ca, cb) = (Rc::clone(&a), Rc::clone(&b));
    let _sa = store.subscribe(move || ca.set(ca.get() + 1));
    let _sb = store.subscribe(move || cb.set(cb.get() + 1));

    let mut ids = IdAllocator::after(&store.snapshot());
    add_book(&store, &mut ids, new_book("Always Coming Home")).unwrap();
    add_book(&store, &mut ids, new_book("Tehanu")).unwrap();

    assert_eq!(a.get(), 2);
    assert_eq!(b.get(), 2);
}

#[test]
fn unsubscribed_observer_is_not_called() {
    let store = catalog_store();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let subscription = store.subscribe(move || counter.set(counter.get() + 1));
    let mut ids = IdAllocator::after(&store.snapshot());

    add_book(&store, &mut ids, new_book("The Word for World Is Forest")).unwrap();
    assert!(subscription.unsubscribe());
    add_book(&store, &mut ids, new_book("Lavinia")).unwrap();

    assert_eq!(calls.get(), 1);
    assert_eq!(store.observer_count(), 0);
}

#[test]
fn unsubscribing_twice_is_harmless() {
    let store = catalog_store();
    let first = store.subscribe(|| {});
    let second = store.subscribe(|| {});
    assert_ne!(first.id(), second.id());

    assert!(first.unsubscribe());
    assert!(second.is_active());
    assert_eq!(store.observer_count(), 1);

    store.shutdown();
    assert!(!second.is_active());
    assert!(!second.unsubscribe());
}

#[test]
fn same_observer_registered_twice_is_revoked_per_registration() {
    let store = catalog_store();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let observer: Rc<dyn Fn()> = Rc::new(move || counter.set(counter.get() + 1));

    let first = store.subscribe({
        let observer = Rc::clone(&observer);
        move || observer()
    });
    let _second = store.subscribe({
        let observer = Rc::clone(&observer);
        move || observer()
    });

    let mut ids = IdAllocator::after(&store.snapshot());
    add_book(&store, &mut ids, new_book("Rocannon's World")).unwrap();
    assert_eq!(calls.get(), 2);

    assert!(first.unsubscribe());
    add_book(&store, &mut ids, new_book("Planet of Exile")).unwrap();
    assert_eq!(calls.get(), 3);
    assert_eq!(store.observer_count(), 1);
}

#[test]
fn observer_can_unsubscribe_a_later_observer_mid_round() {
    let store = catalog_store();
    let late_calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&late_calls);

    let slot: Rc<Cell<Option<bookstacks::store::Subscription>>> = Rc::new(Cell::new(None));
    let slot_in_observer = Rc::clone(&slot);
    let _first = store.subscribe(move || {
        if let Some(subscription) = slot_in_observer.take() {
            let _ = subscription.unsubscribe();
        }
    });
    slot.set(Some(store.subscribe(move || counter.set(counter.get() + 1))));

    let mut ids = IdAllocator::after(&store.snapshot());
    add_book(&store, &mut ids, new_book("Orsinian Tales")).unwrap();

    assert_eq!(late_calls.get(), 0);
    assert_eq!(store.observer_count(), 1);
}

#[test]
fn snapshots_are_not_affected_by_later_dispatches() {
    let store = catalog_store();
    let held = store.snapshot();
    let mut ids = IdAllocator::after(&held);

    add_book(&store, &mut ids, new_book("Four Ways to Forgiveness")).unwrap();

    assert_eq!(held.len(), seed_books().len());
    assert_eq!(store.snapshot().len(), held.len() + 1);
}

#[test]
fn custom_seed_is_used_as_initial_state() {
    let book = Book::from_new(BookId(9), new_book("Solo"));
    let store = Store::new(CatalogReducer::with_books(vec![book.clone()]));
    assert_eq!(*store.snapshot(), vec![book]);
}

#[test]
fn reducer_reports_unchanged_for_duplicates() {
    let reducer = CatalogReducer::new();
    let state = reducer.initial_state();
    let duplicate = state[0].clone();
    assert_eq!(reducer.reduce(&state, &CatalogAction::AddBook(duplicate)), Transition::Unchanged);
}
