use std::io::{stdin, stdout, Write};
use libris::books::dto::BookDto;
use libris::circulation::domain::LibraryService;
use libris::circulation::factory::create_library_service;
use libris::core::domain::Configuration;
use libris::core::repository::RepositoryStore;
use libris::patrons::dto::PatronDto;
use libris::utils::trace::setup_tracing;

// Interactive console front-end over the library service. All parsing and
// prompting lives here; the domain operations never see raw text.

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = stdout().flush();
    let mut line = String::new();
    if stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

// Non-integer input is reported here and never reaches the service.
fn read_id(prompt: &str) -> Option<i64> {
    let line = read_line(prompt);
    match line.parse::<i64>() {
        Ok(id) => Some(id),
        Err(_) => {
            println!("'{}' is not a valid numeric id.", line);
            None
        }
    }
}

fn show_menu() {
    println!();
    println!("=== LIBRARY MENU ===");
    println!("1. Register patron");
    println!("2. Add book");
    println!("3. Search books");
    println!("4. Lend book");
    println!("5. Return book");
    println!("6. Show patrons");
    println!("7. Show books");
    println!("8. Show loans");
    println!("0. Quit");
}

async fn register_patron(service: &dyn LibraryService) {
    let Some(patron_id) = read_id("Patron id: ") else { return };
    let name = read_line("Patron name: ");
    match service.register_patron(&PatronDto::new(patron_id, name.as_str())).await {
        Ok(()) => println!("Patron registered."),
        Err(err) => println!("Could not register patron: {}", err),
    }
}

async fn add_book(service: &dyn LibraryService) {
    let Some(book_id) = read_id("Book id: ") else { return };
    let title = read_line("Book title: ");
    let author = read_line("Book author: ");
    match service.add_book(&BookDto::new(book_id, title.as_str(), author.as_str())).await {
        Ok(()) => println!("Book added."),
        Err(err) => println!("Could not add book: {}", err),
    }
}

async fn search_books(service: &dyn LibraryService) {
    let query = read_line("Search by title or author: ");
    match service.search_books(query.as_str()).await {
        Ok(books) if books.is_empty() => println!("No books matched that search."),
        Ok(books) => {
            println!("\nSearch results:");
            for book in books {
                println!("{}", book);
            }
        }
        Err(err) => println!("Could not search books: {}", err),
    }
}

async fn lend_book(service: &dyn LibraryService) {
    let Some(patron_id) = read_id("Patron id: ") else { return };
    let Some(book_id) = read_id("Book id: ") else { return };
    match service.lend(patron_id, book_id).await {
        Ok(loan) => println!("Book lent: {}", loan),
        Err(err) => println!("Could not lend book: {}", err),
    }
}

async fn return_book(service: &dyn LibraryService) {
    let Some(patron_id) = read_id("Patron id: ") else { return };
    let Some(book_id) = read_id("Book id: ") else { return };
    match service.return_loan(patron_id, book_id).await {
        Ok(receipt) => println!("Book returned. Fine charged: ${}", receipt.fine),
        Err(err) => println!("Could not return book: {}", err),
    }
}

async fn show_patrons(service: &dyn LibraryService) {
    match service.list_patrons().await {
        Ok(patrons) => {
            println!("\nRegistered patrons:");
            for patron in patrons {
                println!("{}", patron);
            }
        }
        Err(err) => println!("Could not list patrons: {}", err),
    }
}

async fn show_books(service: &dyn LibraryService) {
    match service.list_books().await {
        Ok(books) => {
            println!("\nBooks in the library:");
            for book in books {
                println!("{}", book);
            }
        }
        Err(err) => println!("Could not list books: {}", err),
    }
}

async fn show_loans(service: &dyn LibraryService) {
    match service.list_loans().await {
        Ok(loans) => {
            println!("\nLoans:");
            for loan in loans {
                println!("{}", loan);
            }
        }
        Err(err) => println!("Could not list loans: {}", err),
    }
}

async fn seed_sample_data(service: &dyn LibraryService) {
    let patrons = [
        PatronDto::new(1, "Felipe Toro"),
        PatronDto::new(2, "Gerardo Cerda"),
    ];
    for patron in &patrons {
        if let Err(err) = service.register_patron(patron).await {
            println!("Could not preload patron {}: {}", patron.patron_id, err);
        }
    }
    let books = [
        BookDto::new(1, "One Hundred Years of Solitude", "Gabriel Garcia Marquez"),
        BookDto::new(2, "1984", "George Orwell"),
        BookDto::new(3, "Brave New World", "Aldous Huxley"),
    ];
    for book in &books {
        if let Err(err) = service.add_book(book).await {
            println!("Could not preload book {}: {}", book.book_id, err);
        }
    }
}

#[tokio::main]
async fn main() {
    setup_tracing();

    let config = Configuration::new("main");
    let service = create_library_service(&config, RepositoryStore::Memory);
    seed_sample_data(service.as_ref()).await;

    loop {
        show_menu();
        let option = read_line("Select an option: ");
        match option.as_str() {
            "1" => register_patron(service.as_ref()).await,
            "2" => add_book(service.as_ref()).await,
            "3" => search_books(service.as_ref()).await,
            "4" => lend_book(service.as_ref()).await,
            "5" => return_book(service.as_ref()).await,
            "6" => show_patrons(service.as_ref()).await,
            "7" => show_books(service.as_ref()).await,
            "8" => show_loans(service.as_ref()).await,
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid option, try again."),
        }
    }
}
