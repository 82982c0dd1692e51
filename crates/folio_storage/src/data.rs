//! Catalogs bundled with the binary.
//!
//! These are the default record collections used when no catalog file is
//! given on the command line.

use crate::catalog::Catalog;
use crate::record::{Book, Movie};

/// The bundled book catalog.
#[must_use]
pub fn books() -> Catalog<Book> {
    [
        ("Dune", "Frank Herbert", "science fiction", 1965),
        ("Children of Dune", "Frank Herbert", "science fiction", 1976),
        ("The Left Hand of Darkness", "Ursula K. Le Guin", "science fiction", 1969),
        ("A Wizard of Earthsea", "Ursula K. Le Guin", "fantasy", 1968),
        ("The Dispossessed", "Ursula K. Le Guin", "science fiction", 1974),
        ("Neuromancer", "William Gibson", "cyberpunk", 1984),
        ("Snow Crash", "Neal Stephenson", "cyberpunk", 1992),
        ("Cryptonomicon", "Neal Stephenson", "thriller", 1999),
        ("The Hobbit", "J. R. R. Tolkien", "fantasy", 1937),
        ("The Fellowship of the Ring", "J. R. R. Tolkien", "fantasy", 1954),
        ("Nineteen Eighty-Four", "George Orwell", "dystopia", 1949),
        ("Animal Farm", "George Orwell", "satire", 1945),
        ("Brave New World", "Aldous Huxley", "dystopia", 1932),
        ("Fahrenheit 451", "Ray Bradbury", "dystopia", 1953),
        ("Pride and Prejudice", "Jane Austen", "romance", 1813),
        ("Emma", "Jane Austen", "romance", 1815),
        ("Frankenstein", "Mary Shelley", "horror", 1818),
        ("Dracula", "Bram Stoker", "horror", 1897),
        ("The Name of the Wind", "Patrick Rothfuss", "fantasy", 2007),
        ("Parable of the Sower", "Octavia E. Butler", "science fiction", 1993),
        ("Hyperion", "Dan Simmons", "science fiction", 1989),
        ("Good Omens", "Terry Pratchett", "fantasy", 1990),
    ]
    .into_iter()
    .map(|(title, author, genre, year)| Book::new(title, author, genre, year))
    .collect()
}

/// The bundled movie catalog.
#[must_use]
pub fn movies() -> Catalog<Movie> {
    Catalog::new(vec![
        Movie::new("The Godfather", "Francis Ford Coppola", 1972, [
            "Marlon Brando",
            "Al Pacino",
            "James Caan",
            "Diane Keaton",
        ]),
        Movie::new("The Conversation", "Francis Ford Coppola", 1974, [
            "Gene Hackman",
            "John Cazale",
            "Harrison Ford",
        ]),
        Movie::new("Apocalypse Now", "Francis Ford Coppola", 1979, [
            "Martin Sheen",
            "Marlon Brando",
            "Robert Duvall",
        ]),
        Movie::new("Alien", "Ridley Scott", 1979, [
            "Sigourney Weaver",
            "Tom Skerritt",
            "John Hurt",
        ]),
        Movie::new("Blade Runner", "Ridley Scott", 1982, [
            "Harrison Ford",
            "Rutger Hauer",
            "Sean Young",
        ]),
        Movie::new("Star Wars", "George Lucas", 1977, [
            "Mark Hamill",
            "Harrison Ford",
            "Carrie Fisher",
        ]),
        Movie::new("Jaws", "Steven Spielberg", 1975, [
            "Roy Scheider",
            "Robert Shaw",
            "Richard Dreyfuss",
        ]),
        Movie::new("Raiders of the Lost Ark", "Steven Spielberg", 1981, [
            "Harrison Ford",
            "Karen Allen",
        ]),
        Movie::new("Jurassic Park", "Steven Spielberg", 1993, [
            "Sam Neill",
            "Laura Dern",
            "Jeff Goldblum",
        ]),
        Movie::new("Schindler's List", "Steven Spielberg", 1993, [
            "Liam Neeson",
            "Ralph Fiennes",
            "Ben Kingsley",
        ]),
        Movie::new("Pulp Fiction", "Quentin Tarantino", 1994, [
            "John Travolta",
            "Uma Thurman",
            "Samuel L. Jackson",
        ]),
        Movie::new("Fargo", "Joel Coen", 1996, [
            "Frances McDormand",
            "William H. Macy",
            "Steve Buscemi",
        ]),
        Movie::new("The Big Lebowski", "Joel Coen", 1998, [
            "Jeff Bridges",
            "John Goodman",
            "Steve Buscemi",
        ]),
        Movie::new("Groundhog Day", "Harold Ramis", 1993, [
            "Bill Murray",
            "Andie MacDowell",
        ]),
        Movie::new("Vertigo", "Alfred Hitchcock", 1958, [
            "James Stewart",
            "Kim Novak",
        ]),
        Movie::new("Psycho", "Alfred Hitchcock", 1960, [
            "Anthony Perkins",
            "Janet Leigh",
        ]),
        Movie::new("Casablanca", "Michael Curtiz", 1942, [
            "Humphrey Bogart",
            "Ingrid Bergman",
        ]),
        Movie::new("The Matrix", "Lana Wachowski", 1999, [
            "Keanu Reeves",
            "Laurence Fishburne",
            "Carrie-Anne Moss",
        ]),
        Movie::new("Spirited Away", "Hayao Miyazaki", 2001, [
            "Rumi Hiiragi",
            "Miyu Irino",
        ]),
        Movie::new("Amelie", "Jean-Pierre Jeunet", 2001, [
            "Audrey Tautou",
            "Mathieu Kassovitz",
        ]),
    ])
}
