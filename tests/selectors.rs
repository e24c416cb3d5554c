use bookstacks::domain::selectors::{category_counts, filter_books, find_book, find_by_route_id, highlights, Lookup};
use bookstacks::domain::{seed_books, BookId, Category};

#[test]
fn highlights_are_top_rated_and_capped() {
    let books = seed_books();
    let picks = highlights(&books);

    assert!(!picks.is_empty());
    assert!(picks.len() <= 4);
    assert!(picks.iter().all(|book| book.rating > 4.7));
}

#[test]
fn highlights_return_only_the_books_that_qualify() {
    let mut books: Vec<_> = seed_books().into_iter().take(3).collect();
    for (book, rating) in books.iter_mut().zip([4.8, 4.7, 5.0]) {
        book.rating = rating;
    }

    let picks = highlights(&books);

    assert_eq!(picks.len(), 2);
    assert_eq!(picks[0].id, books[0].id);
    assert_eq!(picks[1].id, books[2].id);
    assert!(picks.iter().all(|book| book.id != books[1].id));
}

#[test]
fn highlights_keep_catalog_order() {
    let books = seed_books();
    let titles: Vec<&str> = highlights(&books).iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["Pride and Prejudice", "Dune", "Project Hail Mary", "Becoming"]);
}

#[test]
fn category_filter_returns_exactly_that_genre_in_order() {
    let books = seed_books();
    let expected: Vec<&str> = books
        .iter()
        .filter(|b| b.category == Category::Fantasy)
        .map(|b| b.title.as_str())
        .collect();

    let shelf: Vec<&str> = filter_books(&books, Some("Fantasy"), "")
        .iter()
        .map(|b| b.title.as_str())
        .collect();

    assert_eq!(shelf, expected);
    assert_eq!(shelf, ["The Hobbit", "Harry Potter", "The Name of the Wind"]);
}

#[test]
fn query_matches_title_or_author_ignoring_case() {
    let books = seed_books();

    let dune = filter_books(&books, None, "dune");
    assert_eq!(dune.len(), 1);
    assert_eq!(dune[0].title, "Dune");

    let by_author = filter_books(&books, None, "ROWLING");
    assert_eq!(by_author.len(), 1);
    assert_eq!(by_author[0].title, "Harry Potter");
}

#[test]
fn query_and_category_combine() {
    let books = seed_books();
    assert_eq!(filter_books(&books, Some("Fantasy"), "the").len(), 2);
    assert!(filter_books(&books, Some("Mystery"), "dune").is_empty());
}

#[test]
fn unknown_category_matches_nothing() {
    let books = seed_books();
    assert!(filter_books(&books, Some("Poetry"), "").is_empty());
}

#[test]
fn category_label_is_compared_untrimmed() {
    let books = seed_books();
    assert_eq!(filter_books(&books, Some("fantasy"), "").len(), 3);
    assert!(filter_books(&books, Some(" fantasy "), "").is_empty());
    assert_eq!(" fantasy ".parse::<Category>(), Ok(Category::Fantasy));
}

#[test]
fn empty_query_and_no_category_return_everything() {
    let books = seed_books();
    assert_eq!(filter_books(&books, None, "").len(), books.len());
}

#[test]
fn lookups_distinguish_found_and_missing() {
    let books = seed_books();

    assert!(matches!(find_book(&books, BookId(2)), Lookup::Found(book) if book.title == "Dune"));
    assert_eq!(find_book(&books, BookId(999)), Lookup::Missing);
    assert_eq!(find_by_route_id(&books, "not-a-number"), Lookup::Missing);
    assert_eq!(find_by_route_id(&books, "402").book().map(|b| b.author.as_str()), Some("Harper Lee"));
}

#[test]
fn route_ids_with_integral_decimals_resolve() {
    let books = seed_books();

    assert_eq!(find_by_route_id(&books, "2.0").book().map(|b| b.title.as_str()), Some("Dune"));
    assert_eq!(find_by_route_id(&books, "2.5"), Lookup::Missing);
}

#[test]
fn category_counts_cover_every_genre() {
    let books = seed_books();
    let counts = category_counts(&books);

    assert_eq!(counts.len(), Category::ALL.len());
    assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), books.len());
}
