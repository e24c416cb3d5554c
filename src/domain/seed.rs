//! The fixed catalog the store starts with.

use super::book::{cover_url, Book, BookId};
use super::category::Category;

/// Text colour used on seed covers.
const SEED_COVER_TEXT: &str = "f0fdf4";

/// Seed rows: id, title, author, category, rating, description, cover text, cover colour.
type SeedRow = (
    u64,
    &'static str,
    &'static str,
    Category,
    f64,
    &'static str,
    &'static str,
    &'static str,
);

const SEED: [SeedRow; 18] = [
    (1, "The Great Gatsby", "F. Scott Fitzgerald", Category::Classic, 4.7,
        "A story of the fabulously wealthy Jay Gatsby and his love for the beautiful Daisy Buchanan.",
        "The Great Gatsby", "1c1917"),
    (101, "Pride and Prejudice", "Jane Austen", Category::Classic, 4.8,
        "A romantic novel of manners that follows the character development of Elizabeth Bennet.",
        "Pride & Prejudice", "292524"),
    (102, "Moby Dick", "Herman Melville", Category::Classic, 4.2,
        "The narrative of the sailor Ishmael and the obsessive quest of Ahab for the white whale.",
        "Moby Dick", "44403c"),
    (2, "Dune", "Frank Herbert", Category::SciFi, 4.8,
        "Paul Atreides, a brilliant and gifted young man born into a great destiny beyond his understanding.",
        "Dune", "c2410c"),
    (7, "Project Hail Mary", "Andy Weir", Category::SciFi, 4.9,
        "Ryland Grace is the sole survivor on a desperate, last-chance mission.",
        "Hail Mary", "b45309"),
    (201, "Neuromancer", "William Gibson", Category::SciFi, 4.5,
        "A high-octane thriller that launched the cyberpunk genre.",
        "Neuromancer", "9a3412"),
    (3, "Becoming", "Michelle Obama", Category::NonFiction, 4.9,
        "In a life filled with meaning and accomplishment, Michelle Obama has emerged as one of the most iconic women.",
        "Becoming", "047857"),
    (6, "Clean Code", "Robert C. Martin", Category::NonFiction, 4.5,
        "Even bad code can function. But if code isn't clean, it can bring a development organization to its knees.",
        "Clean Code", "065f46"),
    (301, "Sapiens", "Yuval Noah Harari", Category::NonFiction, 4.7,
        "A brief history of humankind, exploring the ways in which biology and history have defined us.",
        "Sapiens", "064e3b"),
    (4, "1984", "George Orwell", Category::Fiction, 4.6,
        "Among the seminal texts of the 20th century, Nineteen Eighty-Four is a rare work that grows more haunting.",
        "1984", "991b1b"),
    (401, "The Alchemist", "Paulo Coelho", Category::Fiction, 4.8,
        "A story about the essential wisdom of listening to our hearts.",
        "The Alchemist", "b91c1c"),
    (402, "To Kill a Mockingbird", "Harper Lee", Category::Fiction, 4.9,
        "A gripping, heart-wrenching, and wholly remarkable tale of coming-of-age in a South poisoned by prejudice.",
        "Mockingbird", "7f1d1d"),
    (5, "The Hobbit", "J.R.R. Tolkien", Category::Fantasy, 4.8,
        "A timeless classic of Bilbo Baggins and his journey.",
        "The Hobbit", "5b21b6"),
    (501, "Harry Potter", "J.K. Rowling", Category::Fantasy, 4.9,
        "The adventures of a young wizard and his friends at Hogwarts School of Witchcraft and Wizardry.",
        "Harry Potter", "6d28d9"),
    (502, "The Name of the Wind", "Patrick Rothfuss", Category::Fantasy, 4.7,
        "The tale of Kvothe, from his childhood in a troupe of traveling players to his years as a lone orphan.",
        "Name of Wind", "4c1d95"),
    (8, "The Da Vinci Code", "Dan Brown", Category::Mystery, 3.8,
        "A murder in the Louvre and clues in Da Vinci paintings lead to the discovery of a religious mystery.",
        "Da Vinci Code", "3730a3"),
    (601, "Gone Girl", "Gillian Flynn", Category::Mystery, 4.1,
        "Marriage can be a real killer. A thriller about a woman who disappears on her fifth wedding anniversary.",
        "Gone Girl", "4338ca"),
    (602, "The Silent Patient", "Alex Michaelides", Category::Mystery, 4.4,
        "Alicia Berenson's life is seemingly perfect... until she shoots her husband five times in the face.",
        "Silent Patient", "312e81"),
];

/// Returns the initial catalog, grouped by genre in the order it was curated.
#[must_use]
pub fn seed_books() -> Vec<Book> {
    SEED.iter()
        .map(|&(id, title, author, category, rating, description, cover_text, colour)| Book {
            id: BookId(id),
            title: title.to_string(),
            author: author.to_string(),
            category,
            rating,
            description: description.to_string(),
            cover: cover_url(cover_text, colour, SEED_COVER_TEXT),
        })
        .collect()
}
